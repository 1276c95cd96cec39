use crate::digest::{md5_digest, to_hex, Md5Digest};
use crate::grease::{filter_grease_values, without_grease};
use std::borrow::Cow;
use std::fmt;

/// Separates the fields of a bare string
pub const FIELD_SEPARATOR: &str = ",";
/// Separates the values inside a field
pub const VALUE_SEPARATOR: &str = "-";

/// TLS version as carried in the hello, used for display only.
///
/// The bare string always encodes the raw wire value, never this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TlsVersion {
    Ssl3_0,
    V1_0,
    V1_1,
    V1_2,
    V1_3,
    Unknown(u16),
}

impl From<u16> for TlsVersion {
    fn from(value: u16) -> Self {
        match value {
            0x0300 => TlsVersion::Ssl3_0,
            0x0301 => TlsVersion::V1_0,
            0x0302 => TlsVersion::V1_1,
            0x0303 => TlsVersion::V1_2,
            0x0304 => TlsVersion::V1_3,
            other => TlsVersion::Unknown(other),
        }
    }
}

impl fmt::Display for TlsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TlsVersion::Ssl3_0 => write!(f, "SSL 3.0"),
            TlsVersion::V1_0 => write!(f, "TLS 1.0"),
            TlsVersion::V1_1 => write!(f, "TLS 1.1"),
            TlsVersion::V1_2 => write!(f, "TLS 1.2"),
            TlsVersion::V1_3 => write!(f, "TLS 1.3"),
            TlsVersion::Unknown(v) => write!(f, "0x{v:04x}"),
        }
    }
}

/// Options controlling how a ClientHello is canonicalized.
///
/// `Default` yields the classic JA3 algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Ja3Options {
    /// Sort extensions ascending before encoding, so clients that randomize
    /// extension order keep a single fingerprint.
    pub normalize_extension_order: bool,
}

impl Ja3Options {
    /// Options with extension-order normalization enabled
    pub fn normalized() -> Self {
        Self {
            normalize_extension_order: true,
        }
    }
}

/// Write `values` in decimal joined by [`VALUE_SEPARATOR`]
pub(crate) fn write_values<I, T>(f: &mut fmt::Formatter<'_>, values: I) -> fmt::Result
where
    I: IntoIterator<Item = T>,
    T: fmt::Display,
{
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            f.write_str(VALUE_SEPARATOR)?;
        }
        write!(f, "{value}")?;
    }
    Ok(())
}

/// TLS ClientHello fields that feed JA3, in wire order and unfiltered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientHelloSignature {
    pub version: u16,
    pub cipher_suites: Vec<u16>,
    pub extensions: Vec<u16>,
    pub supported_groups: Vec<u16>,
    pub supported_points: Vec<u8>,
}

/// Borrowed view that renders the bare string
struct Ja3Bare<'a> {
    sig: &'a ClientHelloSignature,
    extensions: Cow<'a, [u16]>,
}

impl<'a> Ja3Bare<'a> {
    fn new(sig: &'a ClientHelloSignature, options: &Ja3Options) -> Self {
        let extensions = if options.normalize_extension_order {
            let mut sorted = filter_grease_values(&sig.extensions);
            sorted.sort_unstable();
            Cow::Owned(sorted)
        } else {
            Cow::Borrowed(sig.extensions.as_slice())
        };
        Self { sig, extensions }
    }
}

impl fmt::Display for Ja3Bare<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sig.version)?;
        f.write_str(FIELD_SEPARATOR)?;
        write_values(f, without_grease(&self.sig.cipher_suites))?;
        f.write_str(FIELD_SEPARATOR)?;
        write_values(f, without_grease(&self.extensions))?;
        f.write_str(FIELD_SEPARATOR)?;
        write_values(f, without_grease(&self.sig.supported_groups))?;
        f.write_str(FIELD_SEPARATOR)?;
        // point formats are 8-bit and never GREASE
        write_values(f, self.sig.supported_points.iter())
    }
}

impl ClientHelloSignature {
    /// Canonical JA3 string: `version,ciphers,extensions,groups,points`
    pub fn bare(&self, options: &Ja3Options) -> String {
        Ja3Bare::new(self, options).to_string()
    }

    /// Bare string plus MD5 digest
    pub fn generate_ja3(&self, options: &Ja3Options) -> Ja3Payload {
        let bare = self.bare(options);
        let digest = md5_digest(bare.as_bytes());
        Ja3Payload {
            hash: Ja3Fingerprint::new(options, to_hex(&digest)),
            raw: Ja3RawFingerprint::new(options, bare),
            digest: Some(digest),
        }
    }
}

/// JA3 digest in hex, tagged with the mode that produced it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ja3Fingerprint {
    Classic(String),
    Normalized(String),
}

impl Ja3Fingerprint {
    fn new(options: &Ja3Options, value: String) -> Self {
        if options.normalize_extension_order {
            Ja3Fingerprint::Normalized(value)
        } else {
            Ja3Fingerprint::Classic(value)
        }
    }

    /// Get the variant name for serialization/display purposes
    pub fn variant_name(&self) -> &'static str {
        match self {
            Ja3Fingerprint::Classic(_) => "ja3",
            Ja3Fingerprint::Normalized(_) => "ja3n",
        }
    }

    /// Get the fingerprint value
    pub fn value(&self) -> &str {
        match self {
            Ja3Fingerprint::Classic(s) => s,
            Ja3Fingerprint::Normalized(s) => s,
        }
    }
}

impl fmt::Display for Ja3Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// JA3 bare string, tagged with the mode that produced it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ja3RawFingerprint {
    Classic(String),
    Normalized(String),
}

impl Ja3RawFingerprint {
    fn new(options: &Ja3Options, value: String) -> Self {
        if options.normalize_extension_order {
            Ja3RawFingerprint::Normalized(value)
        } else {
            Ja3RawFingerprint::Classic(value)
        }
    }

    /// Get the variant name for serialization/display purposes
    pub fn variant_name(&self) -> &'static str {
        match self {
            Ja3RawFingerprint::Classic(_) => "ja3_r",
            Ja3RawFingerprint::Normalized(_) => "ja3n_r",
        }
    }

    /// Get the bare string
    pub fn value(&self) -> &str {
        match self {
            Ja3RawFingerprint::Classic(s) => s,
            Ja3RawFingerprint::Normalized(s) => s,
        }
    }
}

impl fmt::Display for Ja3RawFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Result of fingerprinting a ClientHello.
///
/// An empty payload (empty bare string, empty hash, no digest) stands for
/// "no fingerprint" and is what an absent handshake produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ja3Payload {
    /// 32 lowercase hex characters, or empty
    pub hash: Ja3Fingerprint,
    /// Bare string that was hashed, or empty
    pub raw: Ja3RawFingerprint,
    /// Raw 16-byte MD5
    pub digest: Option<Md5Digest>,
}

impl Ja3Payload {
    pub fn empty(options: &Ja3Options) -> Self {
        Self {
            hash: Ja3Fingerprint::new(options, String::new()),
            raw: Ja3RawFingerprint::new(options, String::new()),
            digest: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.digest.is_none()
    }
}

/// JA3 for an optional ClientHello.
///
/// `None` short-circuits to [`Ja3Payload::empty`]; the MD5 of zero bytes is
/// never returned as a fingerprint.
pub fn ja3(hello: Option<&ClientHelloSignature>, options: &Ja3Options) -> Ja3Payload {
    match hello {
        Some(hello) => hello.generate_ja3(options),
        None => Ja3Payload::empty(options),
    }
}
