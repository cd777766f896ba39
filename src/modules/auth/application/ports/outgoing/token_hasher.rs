use sha2::{Digest, Sha256};

/// Hash a token using SHA-256 for storage.
/// Never store raw tokens in the blacklist!
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashing_is_deterministic() {
        assert_eq!(hash_token("refresh-abc"), hash_token("refresh-abc"));
    }

    #[test]
    fn distinct_tokens_hash_differently() {
        assert_ne!(hash_token("token-a"), hash_token("token-b"));
    }

    #[test]
    fn produces_sha256_hex() {
        // SHA-256 produces 64 hex characters
        assert_eq!(hash_token("anything").len(), 64);
    }
}
