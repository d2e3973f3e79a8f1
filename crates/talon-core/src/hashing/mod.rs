//! BLAKE3 hashing for embedding cache keys.

/// Hashes the exact text (case- and whitespace-sensitive) to a 32-byte key.
#[inline]
pub fn hash_text(text: &str) -> [u8; 32] {
    *blake3::hash(text.as_bytes()).as_bytes()
}
