/// Main error type for the Boss Raid battle engine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    /// An operation needed at least one hero to choose from and found none
    #[error("Empty party: {0}")]
    EmptyParty(PartyRequirement),
    /// An entity or roster could not be built from the given parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    /// A command addressed a party slot that does not exist
    #[error("Invalid hero index: {0}")]
    InvalidHeroIndex(usize),
}

/// What the empty-party check was guarding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyRequirement {
    /// Boss defence selection draws from the full party
    DefenceSelection,
    /// Avenger protection is granted to living heroes only
    ProtectionGrant,
}

impl std::fmt::Display for PartyRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartyRequirement::DefenceSelection => write!(f, "boss has no hero to copy a defence from"),
            PartyRequirement::ProtectionGrant => write!(f, "no living hero to protect"),
        }
    }
}

/// Errors raised while building entities or loading a roster
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Entity names are used in every report line and must not be blank
    #[error("entity name must not be empty")]
    EmptyName,
    /// Starting health below zero
    #[error("{name}: health must not be negative (got {value})")]
    NegativeHealth { name: String, value: i32 },
    /// Starting damage below zero
    #[error("{name}: damage must not be negative (got {value})")]
    NegativeDamage { name: String, value: i32 },
    /// Ability parameter (heal points, steal amount, boost) below zero
    #[error("{name}: {parameter} must not be negative (got {value})")]
    NegativeParameter {
        name: String,
        parameter: &'static str,
        value: i32,
    },
    /// Roster document could not be parsed
    #[error("malformed roster: {0}")]
    MalformedRoster(String),
    /// Seed override was present but not a u64
    #[error("invalid seed {0:?}: expected an unsigned integer")]
    InvalidSeed(String),
}

/// Type alias for Results using BattleError
pub type BattleResult<T> = Result<T, BattleError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
