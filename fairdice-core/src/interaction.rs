//! The boundary between the game engine and whoever plays against it.
//!
//! The engine only emits [`GameEvent`]s and asks [`Prompt`]s; rendering them
//! as text is the job of the [`Counterpart`] implementation.

use crate::commitment::{CommitDigest, CommitmentKey};
use crate::dice::{DiceSet, Die};
use crate::game::Verdict;
use crate::player::Party;
use crate::probability::ProbabilityMatrix;
use crate::{DiceError, Result};
use std::collections::VecDeque;
use std::str::FromStr;

/// Everything the human is told, in the order it happens
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The first-move round is about to start
    FirstMoveDraw,
    /// A value in `[0, max]` is fixed; only its digest is shown
    Committed { digest: CommitDigest, max: u64 },
    /// The contribution was not an integer
    InvalidContribution { input: String },
    /// The committed value and its key, disclosed after the contribution
    Revealed { value: u64, key: CommitmentKey },
    /// `(user_value + revealed_value) mod modulus`
    RoundResult {
        user_value: i64,
        revealed_value: u64,
        result: u64,
        modulus: u128,
    },
    FirstMover(Party),
    DieChosen { party: Party, index: usize, die: Die },
    InvalidSelection { input: String },
    Probabilities {
        dice: DiceSet,
        matrix: ProbabilityMatrix,
    },
    ThrowStarted(Party),
    Thrown { party: Party, face: i64 },
    Finished(Verdict),
}

/// Questions that need one line of input
#[derive(Debug, Clone, PartialEq)]
pub enum Prompt {
    Contribution { modulus: u128 },
    DieSelection { available: Vec<(usize, Die)> },
}

/// The other side of the table
pub trait Counterpart {
    fn notify(&mut self, event: &GameEvent) -> Result<()>;
    fn ask(&mut self, prompt: &Prompt) -> Result<String>;
}

/// A line typed at the die selection menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Die(usize),
    Exit,
    Help,
}

impl FromStr for MenuChoice {
    type Err = DiceError;

    fn from_str(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("x") {
            return Ok(MenuChoice::Exit);
        }
        if input == "?" {
            return Ok(MenuChoice::Help);
        }
        input
            .parse::<usize>()
            .map(MenuChoice::Die)
            .map_err(|_| DiceError::selection(format!("'{}' is not a die index", input)))
    }
}

/// Plays back canned answers and records every event; for replays and tests.
#[derive(Debug, Default)]
pub struct ScriptedCounterpart {
    answers: VecDeque<String>,
    events: Vec<GameEvent>,
    prompts: Vec<Prompt>,
}

impl ScriptedCounterpart {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }
}

impl Counterpart for ScriptedCounterpart {
    fn notify(&mut self, event: &GameEvent) -> Result<()> {
        self.events.push(event.clone());
        Ok(())
    }

    fn ask(&mut self, prompt: &Prompt) -> Result<String> {
        self.prompts.push(prompt.clone());
        self.answers
            .pop_front()
            .ok_or_else(|| DiceError::interaction("input closed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!("2".parse::<MenuChoice>().unwrap(), MenuChoice::Die(2));
        assert_eq!(" 0 \n".parse::<MenuChoice>().unwrap(), MenuChoice::Die(0));
        assert_eq!("x".parse::<MenuChoice>().unwrap(), MenuChoice::Exit);
        assert_eq!("X".parse::<MenuChoice>().unwrap(), MenuChoice::Exit);
        assert_eq!("?".parse::<MenuChoice>().unwrap(), MenuChoice::Help);
        assert!("-1".parse::<MenuChoice>().is_err());
        assert!("exit".parse::<MenuChoice>().is_err());
        assert!("".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn test_scripted_counterpart_runs_dry() {
        let mut counterpart = ScriptedCounterpart::new(["1"]);
        let prompt = Prompt::Contribution { modulus: 2 };

        assert_eq!(counterpart.ask(&prompt).unwrap(), "1");
        assert!(matches!(
            counterpart.ask(&prompt),
            Err(DiceError::Interaction(_))
        ));
        assert_eq!(counterpart.prompts().len(), 2);
        assert_eq!(counterpart.remaining_answers(), 0);
    }
}
