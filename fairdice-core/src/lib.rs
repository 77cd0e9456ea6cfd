//! Provably fair non-transitive dice.
//!
//! Every random outcome of a game (who moves first, each die face) comes from
//! a commit-then-combine protocol: the program commits to a secret value with
//! an HMAC-SHA3-256 digest, the human adds a number of their own, and the key
//! is revealed afterwards so the human can check nothing was swapped.

pub mod commitment;
pub mod config;
pub mod dice;
pub mod error;
pub mod game;
pub mod interaction;
pub mod player;
pub mod probability;
pub mod protocol;
pub mod random;

pub use commitment::{CommitDigest, Commitment, CommitmentKey, CommitmentScheme, HmacSha3, Reveal};
pub use config::{ContributionPolicy, GameConfig};
pub use dice::{DiceSet, Die};
pub use error::{DiceError, Result};
pub use game::{DiceGame, GameOutcome, GamePhase, GameReport, Verdict};
pub use interaction::{Counterpart, GameEvent, MenuChoice, Prompt, ScriptedCounterpart};
pub use player::{ComputerStrategy, LowestIndexStrategy, Party, SelectionState};
pub use probability::{ProbabilityMatrix, WinRate};
pub use protocol::{FairRandomProtocol, PendingRound, ProtocolResult};
pub use random::{RandomnessProvider, ScriptedRandom, SecureRandom, SeededRandom};

/// Parse dice arguments and start a game against the OS random source
pub fn create_game<S: AsRef<str>>(
    specs: &[S],
    config: GameConfig,
) -> Result<DiceGame<SecureRandom>> {
    let dice = DiceSet::parse(specs)?;
    DiceGame::new(dice, config, SecureRandom::new())
}
