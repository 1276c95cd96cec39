use md5::{Digest, Md5};
use std::fmt::Write;

/// Raw MD5 output of a bare string.
pub type Md5Digest = [u8; 16];

/// MD5 of the bare bytes
pub fn md5_digest(bare: &[u8]) -> Md5Digest {
    let mut out = [0u8; 16];
    out.copy_from_slice(&Md5::digest(bare));
    out
}

/// Lowercase hex rendering, always 32 characters
pub fn to_hex(digest: &Md5Digest) -> String {
    digest
        .iter()
        .fold(String::with_capacity(32), |mut acc, byte| {
            // writing into a String cannot fail
            let _ = write!(acc, "{byte:02x}");
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_known_vectors() {
        assert_eq!(to_hex(&md5_digest(b"")), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(to_hex(&md5_digest(b"769,,,,0")), "87b2288d92499e7ffef406aedd3ca090");
    }

    #[test]
    fn test_hex_keeps_leading_zeros() {
        let mut digest = [0u8; 16];
        digest[0] = 0x01;
        digest[15] = 0xab;
        let hex = to_hex(&digest);
        assert_eq!(hex.len(), 32);
        assert_eq!(hex, "010000000000000000000000000000ab");
    }
}
