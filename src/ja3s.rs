use crate::digest::{md5_digest, to_hex, Md5Digest};
use crate::grease::without_grease;
use crate::ja3::{write_values, FIELD_SEPARATOR};
use std::fmt;

/// TLS ServerHello fields that feed JA3S
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerHelloSignature {
    pub version: u16,
    /// The single suite the server negotiated
    pub cipher_suite: u16,
    pub extensions: Vec<u16>,
}

struct Ja3sBare<'a>(&'a ServerHelloSignature);

impl fmt::Display for Ja3sBare<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.version)?;
        f.write_str(FIELD_SEPARATOR)?;
        write!(f, "{}", self.0.cipher_suite)?;
        f.write_str(FIELD_SEPARATOR)?;
        write_values(f, without_grease(&self.0.extensions))
    }
}

impl ServerHelloSignature {
    /// Canonical JA3S string: `version,cipher,extensions`
    pub fn bare(&self) -> String {
        Ja3sBare(self).to_string()
    }

    pub fn generate_ja3s(&self) -> Ja3sPayload {
        let bare = self.bare();
        let digest = md5_digest(bare.as_bytes());
        Ja3sPayload {
            hash: to_hex(&digest),
            raw: bare,
            digest: Some(digest),
        }
    }
}

/// Result of fingerprinting a ServerHello; empty when there was no hello
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ja3sPayload {
    pub hash: String,
    pub raw: String,
    pub digest: Option<Md5Digest>,
}

impl Ja3sPayload {
    pub fn is_empty(&self) -> bool {
        self.digest.is_none()
    }
}

/// JA3S for an optional ServerHello, empty on `None`
pub fn ja3s(hello: Option<&ServerHelloSignature>) -> Ja3sPayload {
    hello
        .map(ServerHelloSignature::generate_ja3s)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_fields() {
        let sig = ServerHelloSignature {
            version: 771,
            cipher_suite: 49199,
            extensions: vec![23, 65281, 11, 16],
        };
        assert_eq!(sig.bare(), "771,49199,23-65281-11-16");
    }

    #[test]
    fn test_no_extensions() {
        let sig = ServerHelloSignature {
            version: 769,
            cipher_suite: 47,
            extensions: vec![],
        };
        assert_eq!(sig.bare(), "769,47,");
    }

    #[test]
    fn test_grease_extensions_filtered() {
        let sig = ServerHelloSignature {
            version: 771,
            cipher_suite: 4865,
            extensions: vec![0x0a0a, 43, 0xbaba, 51, 0xcaca],
        };
        assert_eq!(sig.bare(), "771,4865,43-51");
    }

    #[test]
    fn test_absent_hello_is_empty() {
        let payload = ja3s(None);
        assert!(payload.is_empty());
        assert!(payload.hash.is_empty());
        assert!(payload.raw.is_empty());
    }
}
