use crate::dice::{DiceSet, Die};
use crate::{DiceError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// The two sides of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Party {
    Human,
    Computer,
}

impl Party {
    pub fn other(self) -> Self {
        match self {
            Party::Human => Party::Computer,
            Party::Computer => Party::Human,
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Party::Human => write!(f, "human"),
            Party::Computer => write!(f, "computer"),
        }
    }
}

/// Die indices claimed so far in one game. Grows only; no index twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    claimed: BTreeSet<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_claimed(&self, index: usize) -> bool {
        self.claimed.contains(&index)
    }

    pub fn claimed(&self) -> impl Iterator<Item = usize> + '_ {
        self.claimed.iter().copied()
    }

    pub fn claim(&mut self, index: usize, dice: &DiceSet) -> Result<()> {
        if index >= dice.len() {
            return Err(DiceError::selection(format!(
                "die {} does not exist (0..{})",
                index,
                dice.len()
            )));
        }
        if !self.claimed.insert(index) {
            return Err(DiceError::selection(format!(
                "die {} is already taken",
                index
            )));
        }
        Ok(())
    }

    /// Unclaimed dice in index order
    pub fn available<'a>(&'a self, dice: &'a DiceSet) -> impl Iterator<Item = (usize, &'a Die)> + 'a {
        dice.iter()
            .enumerate()
            .filter(move |(index, _)| !self.claimed.contains(index))
    }
}

/// How the computer picks its die
pub trait ComputerStrategy {
    /// Index of an unclaimed die, or `None` when nothing is left
    fn choose(&mut self, dice: &DiceSet, selection: &SelectionState) -> Option<usize>;
}

/// Always takes the lowest unclaimed index
#[derive(Debug, Clone, Copy, Default)]
pub struct LowestIndexStrategy;

impl ComputerStrategy for LowestIndexStrategy {
    fn choose(&mut self, dice: &DiceSet, selection: &SelectionState) -> Option<usize> {
        selection.available(dice).map(|(index, _)| index).next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dice() -> DiceSet {
        DiceSet::parse(&["1,2", "3,4", "5,6", "7,8"]).unwrap()
    }

    #[test]
    fn test_claim_is_exclusive() {
        let dice = dice();
        let mut selection = SelectionState::new();

        assert!(selection.claim(1, &dice).is_ok());
        assert!(selection.is_claimed(1));
        assert!(matches!(
            selection.claim(1, &dice),
            Err(DiceError::InvalidSelection(_))
        ));
        assert_eq!(selection.claimed().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_claim_out_of_range_leaves_state() {
        let dice = dice();
        let mut selection = SelectionState::new();

        assert!(selection.claim(4, &dice).is_err());
        assert_eq!(selection, SelectionState::new());
    }

    #[test]
    fn test_available_skips_claimed() {
        let dice = dice();
        let mut selection = SelectionState::new();
        selection.claim(0, &dice).unwrap();
        selection.claim(2, &dice).unwrap();

        let indices: Vec<usize> = selection.available(&dice).map(|(i, _)| i).collect();
        assert_eq!(indices, vec![1, 3]);
    }

    #[test]
    fn test_lowest_index_strategy() {
        let dice = dice();
        let mut selection = SelectionState::new();
        let mut strategy = LowestIndexStrategy;

        assert_eq!(strategy.choose(&dice, &selection), Some(0));
        selection.claim(0, &dice).unwrap();
        selection.claim(1, &dice).unwrap();
        assert_eq!(strategy.choose(&dice, &selection), Some(2));
        selection.claim(2, &dice).unwrap();
        selection.claim(3, &dice).unwrap();
        assert_eq!(strategy.choose(&dice, &selection), None);
    }

    #[test]
    fn test_party_other() {
        assert_eq!(Party::Human.other(), Party::Computer);
        assert_eq!(Party::Computer.other(), Party::Human);
    }
}
