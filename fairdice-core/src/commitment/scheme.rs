use super::{CommitDigest, CommitmentKey};
use crate::{DiceError, Result};
use hmac::{Hmac, Mac};
use sha3::Sha3_256;

type HmacSha3_256 = Hmac<Sha3_256>;

/// Trait for keyed commitment schemes
pub trait CommitmentScheme {
    fn commit(key: &CommitmentKey, value: u64) -> Result<CommitDigest>;
    fn verify(digest: &CommitDigest, key: &CommitmentKey, value: u64) -> bool;
}

/// HMAC-SHA3-256 over the decimal string of the value
#[derive(Debug, Clone, Copy, Default)]
pub struct HmacSha3;

impl HmacSha3 {
    fn mac(key: &CommitmentKey, value: u64) -> Result<HmacSha3_256> {
        let mut mac = HmacSha3_256::new_from_slice(key.as_bytes())
            .map_err(|e| DiceError::Crypto(e.to_string()))?;
        mac.update(value.to_string().as_bytes());
        Ok(mac)
    }
}

impl CommitmentScheme for HmacSha3 {
    fn commit(key: &CommitmentKey, value: u64) -> Result<CommitDigest> {
        let bytes = Self::mac(key, value)?.finalize().into_bytes();
        Ok(CommitDigest::from_bytes(bytes.into()))
    }

    fn verify(digest: &CommitDigest, key: &CommitmentKey, value: u64) -> bool {
        match Self::mac(key, value) {
            Ok(mac) => mac.verify_slice(digest.as_bytes()).is_ok(),
            Err(_) => false,
        }
    }
}
