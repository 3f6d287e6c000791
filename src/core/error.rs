use thiserror::Error;

#[derive(Error, Debug)]
pub enum CharforgeError {
    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    #[error("Unknown class: {0}")]
    UnknownClass(String),

    #[error("Unknown background: {0}")]
    UnknownBackground(String),

    #[error("{owner} has no starting kit #{index} ({available} available)")]
    KitOutOfRange {
        owner: String,
        index: usize,
        available: usize,
    },

    #[error("Invalid ability scores: {0}")]
    InvalidAbilityScores(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Character is missing a {0}")]
    IncompleteCharacter(&'static str),

    #[error("Character creation aborted")]
    Aborted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CharforgeError>;
