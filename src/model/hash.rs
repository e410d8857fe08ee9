//! Digest value produced by a [`MerkleHasher`](crate::MerkleHasher)

use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The digest held by a tree node
///
/// The length depends on the algorithm that produced it (20 bytes for SHA-1,
/// 32 for SHA-256 and BLAKE3, 64 for SHA-512), so the bytes are owned rather
/// than fixed-size.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Hash(Vec<u8>);

impl Hash {
    /// Wrap digest output
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Hash(bytes)
    }

    /// Copy digest output from a slice
    pub fn from_slice(bytes: &[u8]) -> Self {
        Hash(bytes.to_vec())
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of bytes in the digest
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Parse from hex string
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s).map_err(|e| Error::InvalidHash(format!("{s:?}: {e}")))?;
        if bytes.is_empty() {
            return Err(Error::InvalidHash("empty digest".to_string()));
        }
        Ok(Hash(bytes))
    }

    /// Get a short prefix for display (first 7 chars, like git)
    pub fn short(&self) -> String {
        let hex = self.to_hex();
        hex[..hex.len().min(7)].to_string()
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.short())
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// Serialized as a hex string
impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Hash::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_hex_roundtrip() {
        let h1 = Hash::from_slice(&[0xde, 0xad, 0xbe, 0xef, 0x01, 0x02, 0x03, 0x04]);
        let hex = h1.to_hex();
        assert_eq!(hex, "deadbeef01020304");
        let h2 = Hash::from_hex(&hex).unwrap();
        assert_eq!(h1, h2);
    }

    #[test]
    fn test_hash_from_hex_rejects_garbage() {
        assert!(matches!(Hash::from_hex("xyz"), Err(Error::InvalidHash(_))));
        assert!(matches!(Hash::from_hex(""), Err(Error::InvalidHash(_))));
    }

    #[test]
    fn test_hash_short() {
        let h = Hash::from_slice(&[0xab; 32]);
        assert_eq!(h.short(), "abababa");

        // Shorter than the prefix
        let tiny = Hash::from_slice(&[0x0f]);
        assert_eq!(tiny.short(), "0f");
    }

    #[test]
    fn test_hash_serializes_as_hex() {
        let h = Hash::from_slice(&[1, 2, 3]);
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, "\"010203\"");
        let back: Hash = serde_json::from_str(&json).unwrap();
        assert_eq!(back, h);
    }
}
