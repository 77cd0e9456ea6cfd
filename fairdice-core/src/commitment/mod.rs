//! Keyed commitments binding a secret value before it is revealed.

pub mod scheme;

pub use scheme::{CommitmentScheme, HmacSha3};

use crate::{DiceError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 256-bit secret key for a commitment
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentKey([u8; 32]);

impl CommitmentKey {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for CommitmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommitmentKey({}..)", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for CommitmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for CommitmentKey {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self> {
        decode_32(s).map(Self)
    }
}

/// Keyed-hash output disclosed before the value
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommitDigest([u8; 32]);

impl CommitDigest {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for CommitDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommitDigest({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for CommitDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for CommitDigest {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self> {
        decode_32(s).map(Self)
    }
}

fn decode_32(s: &str) -> Result<[u8; 32]> {
    let bytes = hex::decode(s.trim()).map_err(|e| DiceError::Crypto(e.to_string()))?;
    bytes
        .try_into()
        .map_err(|b: Vec<u8>| DiceError::Crypto(format!("expected 32 bytes, got {}", b.len())))
}

/// A committed value. Only the digest is visible until [`Commitment::reveal`].
pub struct Commitment {
    key: CommitmentKey,
    value: u64,
    digest: CommitDigest,
}

impl Commitment {
    pub fn new(key: CommitmentKey, value: u64) -> Result<Self> {
        let digest = HmacSha3::commit(&key, value)?;
        Ok(Self { key, value, digest })
    }

    pub fn digest(&self) -> &CommitDigest {
        &self.digest
    }

    pub(crate) fn value(&self) -> u64 {
        self.value
    }

    pub fn reveal(self) -> Reveal {
        Reveal {
            key: self.key,
            value: self.value,
        }
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Commitment")
            .field("digest", &self.digest)
            .finish_non_exhaustive()
    }
}

/// Opening of a commitment, disclosed after the counterpart contributed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    pub key: CommitmentKey,
    pub value: u64,
}

impl Reveal {
    pub fn verify(&self, digest: &CommitDigest) -> bool {
        HmacSha3::verify(digest, &self.key, self.value)
    }

    pub fn ensure_matches(&self, digest: &CommitDigest) -> Result<()> {
        if self.verify(digest) {
            Ok(())
        } else {
            Err(DiceError::CommitmentMismatch)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_of(byte: u8) -> CommitmentKey {
        CommitmentKey::from_bytes([byte; 32])
    }

    #[test]
    fn test_known_digests() {
        let digest = HmacSha3::commit(&key_of(0), 0).unwrap();
        assert_eq!(
            digest.to_string(),
            "da4801ef75e4405c4ac2ce6d3b5f94fd88a7c1e3c9958079aa456a44f60d95e4"
        );

        let mut counting = [0u8; 32];
        for (i, b) in counting.iter_mut().enumerate() {
            *b = i as u8;
        }
        let digest = HmacSha3::commit(&CommitmentKey::from_bytes(counting), 42).unwrap();
        assert_eq!(
            digest.to_string(),
            "2e1a03d43d6c73e5416fbfc20179d458063d971e191d89ea7b62c7347c941594"
        );
    }

    #[test]
    fn test_commitment_is_deterministic() {
        let a = Commitment::new(key_of(7), 5).unwrap();
        let b = Commitment::new(key_of(7), 5).unwrap();
        assert_eq!(a.digest(), b.digest());
        assert_eq!(
            a.digest().to_string(),
            "0b74a6e747a3b698d5e3d0375e7bc93b3cbdfc39ed74be22e6cf2183dd1bb128"
        );
    }

    #[test]
    fn test_reveal_verifies() {
        let commitment = Commitment::new(key_of(3), 17).unwrap();
        let digest = *commitment.digest();
        let reveal = commitment.reveal();

        assert!(reveal.verify(&digest));
        assert!(reveal.ensure_matches(&digest).is_ok());
    }

    #[test]
    fn test_altered_value_fails() {
        let commitment = Commitment::new(key_of(3), 17).unwrap();
        let digest = *commitment.digest();
        let mut reveal = commitment.reveal();
        reveal.value = 18;

        assert!(!reveal.verify(&digest));
        assert!(matches!(
            reveal.ensure_matches(&digest),
            Err(DiceError::CommitmentMismatch)
        ));
    }

    #[test]
    fn test_altered_key_fails() {
        let commitment = Commitment::new(key_of(3), 17).unwrap();
        let digest = *commitment.digest();
        let mut reveal = commitment.reveal();
        reveal.key = key_of(4);

        assert!(!reveal.verify(&digest));
    }

    #[test]
    fn test_hex_round_trip_through_display() {
        let key = key_of(0xab);
        let parsed: CommitmentKey = key.to_string().parse().unwrap();
        assert_eq!(parsed, key);

        assert!("abcd".parse::<CommitDigest>().is_err());
        assert!("zz".parse::<CommitmentKey>().is_err());
    }

    #[test]
    fn test_debug_hides_value() {
        let commitment = Commitment::new(key_of(1), 123_456).unwrap();
        let debug = format!("{:?}", commitment);
        assert!(!debug.contains("value"));
        assert!(!debug.contains("key"));
    }
}
