use crate::error::TypesError;
use rand::RngCore;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Opaque identifier assigned to an anchor when it is appended.
///
/// A random 256-bit value, displayed as `0x` followed by 64 lowercase hex
/// characters. Uniqueness within a ledger is enforced by the ledger itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransactionId([u8; 32]);

impl TransactionId {
    pub const PREFIX: &'static str = "0x";
    /// Characters kept by [`TransactionId::short`].
    const SHORT_LEN: usize = 20;

    pub fn random() -> Self {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Truncated form used in listings, e.g. `0x1a2b3c4d5e6f7a8b9c...`.
    pub fn short(&self) -> String {
        let full = self.to_string();
        format!("{}...", &full[..Self::SHORT_LEN])
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, hex::encode(self.0))
    }
}

impl FromStr for TransactionId {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(Self::PREFIX)
            .ok_or_else(|| TypesError::InvalidTransactionId(format!("missing 0x prefix: {}", s)))?;
        if digits.len() != 64 {
            return Err(TypesError::InvalidTransactionId(format!(
                "expected 64 hex characters, got {}",
                digits.len()
            )));
        }
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|e| TypesError::InvalidTransactionId(e.to_string()))?;
        Ok(Self(bytes))
    }
}

impl Serialize for TransactionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TransactionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let id = TransactionId::from_bytes([0xab; 32]);
        let s = id.to_string();
        assert!(s.starts_with("0x"));
        assert_eq!(s.len(), 66);
        assert_eq!(&s[2..], "ab".repeat(32));
        assert_eq!(id.short(), format!("0x{}...", "ab".repeat(9)));
    }

    #[test]
    fn test_parse_roundtrip() {
        let id = TransactionId::random();
        let parsed: TransactionId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_requires_prefix() {
        let bare = "ab".repeat(32);
        assert!(matches!(
            bare.parse::<TransactionId>(),
            Err(TypesError::InvalidTransactionId(_))
        ));
        assert!("0x1234".parse::<TransactionId>().is_err());
    }

    #[test]
    fn test_random_ids_differ() {
        assert_ne!(TransactionId::random(), TransactionId::random());
    }
}
