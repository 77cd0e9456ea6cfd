use thiserror::Error;

pub type Result<T> = std::result::Result<T, DiceError>;

#[derive(Error, Debug)]
pub enum DiceError {
    #[error("Invalid dice configuration: {spec}. Ensure it contains comma-separated integers")]
    InvalidFace { spec: String },

    #[error("Dice must have at least one face")]
    EmptyDie,

    #[error("All dice must have the same number of sides: die {index} has {found}, expected {expected}")]
    MismatchedFaces {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("Not enough dice: need at least {need}, got {found}")]
    NotEnoughDice { need: usize, found: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid contribution '{0}': please enter an integer")]
    InvalidContribution(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Invalid game state: {0}")]
    InvalidState(String),

    #[error("No dice left to choose from")]
    NoDiceAvailable,

    #[error("Commitment does not match the revealed value and key")]
    CommitmentMismatch,

    #[error("Cryptographic error: {0}")]
    Crypto(String),

    #[error("Interaction error: {0}")]
    Interaction(String),
}

impl DiceError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn selection(msg: impl Into<String>) -> Self {
        Self::InvalidSelection(msg.into())
    }

    pub fn interaction(msg: impl Into<String>) -> Self {
        Self::Interaction(msg.into())
    }

    /// Errors raised while reading the startup dice specification.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidFace { .. }
                | Self::EmptyDie
                | Self::MismatchedFaces { .. }
                | Self::NotEnoughDice { .. }
                | Self::Config(_)
        )
    }
}

impl From<std::io::Error> for DiceError {
    fn from(err: std::io::Error) -> Self {
        DiceError::Interaction(err.to_string())
    }
}
