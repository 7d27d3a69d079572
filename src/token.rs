use sha2::{Digest, Sha256};

/// One-way token for a card number: lowercase hex SHA-256 of the raw
/// string's UTF-8 bytes. The input is hashed as-is; separators are not
/// stripped first, so formatting variants of the same PAN produce
/// different tokens.
pub fn tokenize(card_number: &str) -> String {
    let digest = Sha256::digest(card_number.as_bytes());
    hex::encode(digest)
}
