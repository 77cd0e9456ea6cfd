//! Commit-then-combine fair random protocol.
//!
//! One round fixes a secret value in `[0, max]` and discloses only its
//! digest, takes the counterpart's integer, and returns
//! `(user_value + value) mod (max + 1)`. The value and key are revealed
//! afterwards so the counterpart can recompute the digest.

use crate::commitment::{CommitDigest, Commitment, CommitmentKey, Reveal};
use crate::config::ContributionPolicy;
use crate::interaction::{Counterpart, GameEvent, Prompt};
use crate::random::RandomnessProvider;
use crate::{DiceError, Result};
use serde::{Deserialize, Serialize};

/// Outcome of one finished round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolResult {
    pub computed_value: u64,
    pub user_value: i64,
    pub revealed_value: u64,
    pub key: CommitmentKey,
    pub digest: CommitDigest,
    pub max: u64,
}

impl ProtocolResult {
    pub fn reveal(&self) -> Reveal {
        Reveal {
            key: self.key.clone(),
            value: self.revealed_value,
        }
    }

    /// Recompute the digest from the revealed key and value
    pub fn verify(&self) -> bool {
        self.reveal().verify(&self.digest)
    }
}

/// The counterpart's parsed input combined with the committed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contribution {
    pub user_value: i64,
    pub result: u64,
}

/// A round between commitment and reveal
#[derive(Debug)]
pub struct PendingRound {
    max: u64,
    commitment: Commitment,
}

impl PendingRound {
    pub fn max(&self) -> u64 {
        self.max
    }

    pub fn modulus(&self) -> u128 {
        self.max as u128 + 1
    }

    pub fn digest(&self) -> &CommitDigest {
        self.commitment.digest()
    }

    /// Parse the counterpart's input and combine it with the committed value.
    ///
    /// Borrows the round, so a rejected input can be retried under the same
    /// commitment.
    pub fn contribute(&self, input: &str) -> Result<Contribution> {
        let user_value = input
            .trim()
            .parse::<i64>()
            .map_err(|_| DiceError::InvalidContribution(input.trim().to_string()))?;
        Ok(Contribution {
            user_value,
            result: combine(user_value, self.commitment.value(), self.max),
        })
    }

    /// Open the commitment
    pub fn finish(self, contribution: Contribution) -> ProtocolResult {
        let digest = *self.commitment.digest();
        let reveal = self.commitment.reveal();
        ProtocolResult {
            computed_value: contribution.result,
            user_value: contribution.user_value,
            revealed_value: reveal.value,
            key: reveal.key,
            digest,
            max: self.max,
        }
    }
}

/// `(user_value + value) mod (max + 1)`, always in `[0, max]`
pub fn combine(user_value: i64, value: u64, max: u64) -> u64 {
    let modulus = max as i128 + 1;
    (user_value as i128 + value as i128).rem_euclid(modulus) as u64
}

pub struct FairRandomProtocol<R> {
    rng: R,
}

impl<R: RandomnessProvider> FairRandomProtocol<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Fix a value in `[0, max]` and commit to it
    pub fn begin(&mut self, max: u64) -> Result<PendingRound> {
        let key = self.rng.generate_key();
        let value = self.rng.generate_value(max);
        let commitment = Commitment::new(key, value)?;

        tracing::debug!("Committed to a value in 0..={} ({})", max, commitment.digest());
        Ok(PendingRound { max, commitment })
    }

    /// Run a full round against `counterpart`.
    ///
    /// Discloses the digest and range, asks for the contribution, then reveals
    /// the value and key and announces the result. A non-integer contribution
    /// either ends the round with [`DiceError::InvalidContribution`] or is
    /// asked again, depending on `policy`.
    pub fn run<C: Counterpart + ?Sized>(
        &mut self,
        counterpart: &mut C,
        max: u64,
        policy: ContributionPolicy,
    ) -> Result<ProtocolResult> {
        let round = self.begin(max)?;
        counterpart.notify(&GameEvent::Committed {
            digest: *round.digest(),
            max,
        })?;

        let contribution = loop {
            let input = counterpart.ask(&Prompt::Contribution {
                modulus: round.modulus(),
            })?;
            match round.contribute(&input) {
                Ok(contribution) => break contribution,
                Err(err @ DiceError::InvalidContribution(_)) => {
                    tracing::warn!("Rejected contribution: {}", err);
                    counterpart.notify(&GameEvent::InvalidContribution {
                        input: input.trim().to_string(),
                    })?;
                    if policy == ContributionPolicy::Abort {
                        return Err(err);
                    }
                }
                Err(err) => return Err(err),
            }
        };

        let result = round.finish(contribution);
        counterpart.notify(&GameEvent::Revealed {
            value: result.revealed_value,
            key: result.key.clone(),
        })?;
        counterpart.notify(&GameEvent::RoundResult {
            user_value: result.user_value,
            revealed_value: result.revealed_value,
            result: result.computed_value,
            modulus: result.max as u128 + 1,
        })?;

        tracing::debug!(
            "Round finished: {} + {} = {} (mod {})",
            result.user_value,
            result.revealed_value,
            result.computed_value,
            result.max as u128 + 1
        );
        Ok(result)
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}
