use md5::{Digest, Md5};

/// Digest a password the way the backend's credential check expects it:
/// uppercase MD5 hex. The raw password never goes on the wire.
pub fn digest_password(raw: &str) -> String {
    hex::encode_upper(Md5::digest(raw.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_matches_known_vector() {
        assert_eq!(digest_password("abc"), "900150983CD24FB0D6963F7D28E17F72");
    }

    #[test]
    fn digest_is_uppercase_hex() {
        let digest = digest_password("s3cr3t");
        assert_eq!(digest.len(), 32);
        assert!(digest.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }
}
