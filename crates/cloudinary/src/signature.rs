//! Signing for authenticated Cloudinary API calls.
//!
//! The string to sign is every request parameter except `file`,
//! `cloud_name`, `resource_type` and `api_key`, sorted by name, rendered
//! as `name=value` and joined with `&`, with the API secret appended. The
//! signature is the lowercase hex SHA-256 digest of that string.

use std::collections::BTreeMap;

use sha2::{Digest, Sha256};

/// Parameters that never take part in the signature.
const UNSIGNED_PARAMS: &[&str] = &["file", "cloud_name", "resource_type", "api_key"];

/// Build the canonical `a=1&b=2` string for the given parameters.
pub fn string_to_sign(params: &BTreeMap<&str, String>) -> String {
    params
        .iter()
        .filter(|(name, value)| !UNSIGNED_PARAMS.contains(name) && !value.is_empty())
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Compute the request signature for `params` with `api_secret`.
pub fn sign(params: &BTreeMap<&str, String>, api_secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(string_to_sign(params).as_bytes());
    hasher.update(api_secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("timestamp", "1315060510".to_string()),
            ("public_id", "sample_image".to_string()),
            ("eager", "w_400,h_300,c_pad|w_260,h_200,c_crop".to_string()),
            ("api_key", "1234".to_string()),
            ("file", "ignored".to_string()),
            ("folder", String::new()),
        ])
    }

    #[test]
    fn string_to_sign_is_sorted_and_filtered() {
        assert_eq!(
            string_to_sign(&params()),
            "eager=w_400,h_300,c_pad|w_260,h_200,c_crop&public_id=sample_image&timestamp=1315060510"
        );
    }

    #[test]
    fn signature_is_sha256_hex_of_string_plus_secret() {
        let signature = sign(&params(), "abcd");
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

        let mut hasher = Sha256::new();
        hasher.update(format!("{}abcd", string_to_sign(&params())).as_bytes());
        assert_eq!(signature, format!("{:x}", hasher.finalize()));
    }

    #[test]
    fn different_secrets_produce_different_signatures() {
        assert_ne!(sign(&params(), "secret-a"), sign(&params(), "secret-b"));
    }
}
