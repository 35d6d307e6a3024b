use thiserror::Error;

/// Main error type for the Poke Game progression rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PokeGameError {
    /// Caller broke an engine precondition; never shown to players as their fault
    #[error("Server error: {0}")]
    Server(#[from] ServerError),
    /// Rules configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    /// Pokedex reference data could not be loaded or looked up
    #[error("Pokedex error: {0}")]
    Pokedex(#[from] PokedexError),
    /// Player supplied data was rejected
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    /// Game save command could not be applied
    #[error("Game save error: {0}")]
    GameSave(#[from] GameSaveError),
}

/// Internal errors raised when the engine is handed incomplete data.
///
/// Callers must eager-load navigation data before invoking the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServerError {
    #[error("Pokedex data is not loaded for owned Pokemon {pokemon_id}")]
    MissingPokedexData { pokemon_id: u32 },
    #[error("Species data is not loaded for owned Pokemon {pokemon_id}")]
    MissingSpeciesData { pokemon_id: u32 },
}

/// Errors raised while loading the rules configuration at startup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{range} Pokedex range has no members (min {min}, max {max}, no extras)")]
    EmptyPokedexRange {
        range: &'static str,
        min: u16,
        max: u16,
    },
    #[error("{range} Pokedex range contains invalid Pokedex number {number}")]
    InvalidPokedexNumber { range: &'static str, number: u16 },
    #[error("{name} must be a positive finite number, got {value}")]
    InvalidMultiplier { name: &'static str, value: String },
    #[error("legendary XP multiplier {legendary} is below the standard multiplier {standard}")]
    LegendaryMultiplierBelowStandard { legendary: String, standard: String },
    #[error("base XP ceiling must be greater than zero")]
    InvalidXpCeiling,
    #[error("base XP ceiling {base_xp_ceiling} with {name} {value} makes level 1 cost no XP")]
    FreeLevelUp {
        name: &'static str,
        base_xp_ceiling: u32,
        value: String,
    },
    #[error("HP calculation stats out of range (IV {iv}, max 31; EV {ev}, max 252)")]
    InvalidHpStats { iv: u8, ev: u16 },
    #[error("could not read rules file {path}: {message}")]
    Io { path: String, message: String },
    #[error("could not parse rules file: {0}")]
    Parse(String),
}

/// Errors related to the Pokedex reference dataset
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PokedexError {
    #[error("Pokedex number {0} is not in the Pokedex")]
    UnknownPokedexNumber(u16),
    #[error("Pokedex dataset contains invalid Pokedex number {0}")]
    InvalidPokedexNumber(u16),
    #[error("Pokedex number {0} appears more than once in the dataset")]
    DuplicatePokedexNumber(u16),
    #[error("Pokedex dataset is missing entries the rules can draw: {0:?}")]
    MissingCoverage(Vec<u16>),
    #[error("could not read Pokedex file {path}: {message}")]
    Io { path: String, message: String },
    #[error("could not parse Pokedex data: {0}")]
    Parse(String),
}

/// User-facing validation failures for owned Pokemon records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Pokemon level {level} must be between {min} and {max}")]
    LevelOutOfRange { level: u8, min: u8, max: u8 },
    #[error("Pokedex number must be at least 1")]
    InvalidPokedexNumber,
    #[error("Nickname {0:?} must be non-blank and at most 12 characters")]
    InvalidNickname(String),
}

/// Errors raised by game save commands
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameSaveError {
    #[error("Game save has no Pokemon with id {0}")]
    PokemonNotFound(u32),
}

/// Type alias for Results using PokeGameError
pub type PokeGameResult<T> = Result<T, PokeGameError>;

/// Type alias for Results using ServerError
pub type ServerResult<T> = Result<T, ServerError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Type alias for Results using PokedexError
pub type PokedexResult<T> = Result<T, PokedexError>;
