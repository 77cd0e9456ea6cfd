use crate::dice::DiceSet;
use crate::error::{DiceError, Result};
use serde::{Deserialize, Serialize};

/// What happens when the counterpart's contribution is not an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContributionPolicy {
    /// End the session with an error
    #[default]
    Abort,
    /// Ask again under the same commitment
    Reprompt,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub min_dice: usize,
    pub contribution_policy: ContributionPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_dice: 3,
            contribution_policy: ContributionPolicy::Abort,
        }
    }
}

impl GameConfig {
    pub fn with_policy(contribution_policy: ContributionPolicy) -> Self {
        Self {
            contribution_policy,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        // each party claims a distinct die
        if self.min_dice < 2 {
            return Err(DiceError::config("Minimum dice count must be at least 2"));
        }

        Ok(())
    }

    pub fn check_dice(&self, dice: &DiceSet) -> Result<()> {
        self.validate()?;

        if dice.len() < self.min_dice {
            return Err(DiceError::NotEnoughDice {
                need: self.min_dice,
                found: dice.len(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.min_dice, 3);
        assert_eq!(config.contribution_policy, ContributionPolicy::Abort);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_min_dice_too_low() {
        let config = GameConfig {
            min_dice: 1,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(DiceError::Config(_))));
    }

    #[test]
    fn test_check_dice_counts() {
        let config = GameConfig::default();
        let two = DiceSet::parse(&["1,2", "3,4"]).unwrap();
        let three = DiceSet::parse(&["1,2", "3,4", "5,6"]).unwrap();

        assert!(matches!(
            config.check_dice(&two),
            Err(DiceError::NotEnoughDice { need: 3, found: 2 })
        ));
        assert!(config.check_dice(&three).is_ok());
    }

    #[test]
    fn test_config_serializes() {
        let config = GameConfig::with_policy(ContributionPolicy::Reprompt);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.contribution_policy, ContributionPolicy::Reprompt);
    }
}
