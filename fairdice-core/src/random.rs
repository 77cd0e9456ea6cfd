//! Randomness providers for commitment keys and committed values.
//!
//! The protocol only ever talks to [`RandomnessProvider`], so the secure OS
//! source can be swapped for a seeded or scripted one in tests.

use crate::commitment::CommitmentKey;
use rand::rngs::OsRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::collections::VecDeque;

/// Source of commitment keys and uniformly distributed values
pub trait RandomnessProvider {
    /// 256 random bits for a commitment key
    fn generate_key(&mut self) -> CommitmentKey;

    /// Uniform value in `[0, max_inclusive]`
    fn generate_value(&mut self, max_inclusive: u64) -> u64;
}

fn key_from<R: RngCore>(rng: &mut R) -> CommitmentKey {
    let mut bytes = [0u8; 32];
    rng.fill_bytes(&mut bytes);
    CommitmentKey::from_bytes(bytes)
}

/// Operating system CSPRNG. The only provider used for real games.
#[derive(Debug, Default, Clone, Copy)]
pub struct SecureRandom;

impl SecureRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomnessProvider for SecureRandom {
    fn generate_key(&mut self) -> CommitmentKey {
        key_from(&mut OsRng)
    }

    fn generate_value(&mut self, max_inclusive: u64) -> u64 {
        // gen_range rejects out-of-zone samples, so there is no modulo bias
        OsRng.gen_range(0..=max_inclusive)
    }
}

/// ChaCha20 stream from a fixed seed, for reproducible simulations.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    inner: ChaCha20Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl RandomnessProvider for SeededRandom {
    fn generate_key(&mut self) -> CommitmentKey {
        key_from(&mut self.inner)
    }

    fn generate_value(&mut self, max_inclusive: u64) -> u64 {
        self.inner.gen_range(0..=max_inclusive)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Each scripted value is reduced into the requested range; an empty script
/// always yields 0. Keys are deterministic: the n-th key is 32 bytes of `n`.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: VecDeque<u64>,
    keys_issued: u8,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = u64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            keys_issued: 0,
        }
    }
}

impl RandomnessProvider for ScriptedRandom {
    fn generate_key(&mut self) -> CommitmentKey {
        let key = CommitmentKey::from_bytes([self.keys_issued; 32]);
        self.keys_issued = self.keys_issued.wrapping_add(1);
        key
    }

    fn generate_value(&mut self, max_inclusive: u64) -> u64 {
        let Some(next) = self.values.pop_front() else {
            return 0;
        };
        self.values.push_back(next);
        match max_inclusive.checked_add(1) {
            Some(modulus) => next % modulus,
            None => next,
        }
    }
}
