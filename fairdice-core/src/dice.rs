//! Dice and the validated set of dice a game is played with.

use crate::{DiceError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An immutable ordered list of faces. Rolling never draws randomness itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    faces: Vec<i64>,
}

impl Die {
    pub fn new(faces: Vec<i64>) -> Result<Self> {
        if faces.is_empty() {
            return Err(DiceError::EmptyDie);
        }
        Ok(Self { faces })
    }

    pub fn faces(&self) -> &[i64] {
        &self.faces
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Face at `index` taken modulo the face count, so every index is valid
    pub fn roll(&self, index: i64) -> i64 {
        let len = self.faces.len() as i64;
        self.faces[index.rem_euclid(len) as usize]
    }
}

impl FromStr for Die {
    type Err = DiceError;

    fn from_str(spec: &str) -> Result<Self> {
        let faces = spec
            .split(',')
            .map(|face| face.trim().parse::<i64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| DiceError::InvalidFace {
                spec: spec.to_string(),
            })?;
        Die::new(faces)
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faces: Vec<String> = self.faces.iter().map(|face| face.to_string()).collect();
        write!(f, "{}", faces.join(","))
    }
}

/// All dice of a game; every die has the same face count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceSet {
    dice: Vec<Die>,
}

impl DiceSet {
    pub fn new(dice: Vec<Die>) -> Result<Self> {
        let Some(first) = dice.first() else {
            return Err(DiceError::NotEnoughDice { need: 1, found: 0 });
        };
        let expected = first.face_count();

        if let Some((index, die)) = dice
            .iter()
            .enumerate()
            .find(|(_, die)| die.face_count() != expected)
        {
            return Err(DiceError::MismatchedFaces {
                index,
                expected,
                found: die.face_count(),
            });
        }

        Ok(Self { dice })
    }

    /// Parse one die per argument, e.g. `["2,2,4,4,9,9", "1,1,6,6,8,8"]`
    pub fn parse<S: AsRef<str>>(specs: &[S]) -> Result<Self> {
        let dice = specs
            .iter()
            .map(|spec| spec.as_ref().parse::<Die>())
            .collect::<Result<Vec<_>>>()?;
        Self::new(dice)
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    pub fn face_count(&self) -> usize {
        self.dice.first().map_or(0, Die::face_count)
    }

    pub fn get(&self, index: usize) -> Option<&Die> {
        self.dice.get(index)
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    pub fn iter(&self) -> impl Iterator<Item = &Die> {
        self.dice.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_die() {
        let die: Die = "2, 2,4,4 ,9,9".parse().unwrap();
        assert_eq!(die.faces(), &[2, 2, 4, 4, 9, 9]);
        assert_eq!(die.to_string(), "2,2,4,4,9,9");

        let negative: Die = "-1,0,1".parse().unwrap();
        assert_eq!(negative.faces(), &[-1, 0, 1]);
    }

    #[test]
    fn test_parse_rejects_bad_faces() {
        assert!(matches!(
            "1,two,3".parse::<Die>(),
            Err(DiceError::InvalidFace { .. })
        ));
        assert!(matches!(
            "".parse::<Die>(),
            Err(DiceError::InvalidFace { .. })
        ));
        assert!(matches!(
            "1,,3".parse::<Die>(),
            Err(DiceError::InvalidFace { .. })
        ));
        assert!(matches!(Die::new(vec![]), Err(DiceError::EmptyDie)));
    }

    #[test]
    fn test_dice_set_rejects_mismatched_faces() {
        let err = DiceSet::parse(&["1,2,3", "1,2,3", "1,2"]).unwrap_err();
        assert!(matches!(
            err,
            DiceError::MismatchedFaces {
                index: 2,
                expected: 3,
                found: 2
            }
        ));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_dice_set_rejects_empty_list() {
        let specs: [&str; 0] = [];
        assert!(matches!(
            DiceSet::parse(&specs),
            Err(DiceError::NotEnoughDice { .. })
        ));
    }

    #[test]
    fn test_dice_set_accessors() {
        let set = DiceSet::parse(&["2,2,4,4,9,9", "1,1,6,6,8,8", "3,3,5,5,7,7"]).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.face_count(), 6);
        assert_eq!(set.get(1).map(|d| d.faces()[2]), Some(6));
        assert!(set.get(3).is_none());
    }

    #[test]
    fn test_roll_wraps_index() {
        let die: Die = "10,20,30".parse().unwrap();
        assert_eq!(die.roll(0), 10);
        assert_eq!(die.roll(2), 30);
        assert_eq!(die.roll(3), 10);
        assert_eq!(die.roll(-1), 30);
        assert_eq!(die.roll(i64::MIN), die.roll(i64::MIN.rem_euclid(3)));
    }

    proptest! {
        #[test]
        fn roll_is_total(
            faces in prop::collection::vec(any::<i64>(), 1..12),
            index in any::<i64>(),
        ) {
            let die = Die::new(faces.clone()).unwrap();
            prop_assert!(faces.contains(&die.roll(index)));
        }
    }
}
