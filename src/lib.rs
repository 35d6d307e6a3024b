// In: src/lib.rs

//! Poke Game Progression Rules
//!
//! The rules that decide which Pokemon a player can encounter, how much HP an
//! owned Pokemon has at its level, and how experience turns into levels.
//! Configuration is loaded once at startup and handed to a stateless engine
//! that the game-save handlers, the CLI and the MCP server share.

// --- MODULE DECLARATIONS ---
pub mod config;
pub mod errors;
pub mod game_save;
pub mod mcp_interface;
pub mod pokedex;
pub mod pokemon;
pub mod progression;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    BaseStats, HpCalculationStats, PokeGameRules, PokedexEntry, PokedexPokemon, PokedexRange,
    PokemonSpecies, PokemonType,
};

// --- From this crate's modules (`src/`) ---

// The rule engine and its draw pools.
pub use progression::{PokeGameRuleEngine, PokedexPool};

// Runtime types the engine operates on.
pub use game_save::{EncounterKind, ExperienceAward, GameSave};
pub use pokedex::Pokedex;
pub use pokemon::{OwnedPokemon, MAX_LEVEL};

// Crate-specific error and result types.
pub use errors::{
    ConfigError, ConfigResult, GameSaveError, PokeGameError, PokeGameResult, PokedexError,
    PokedexResult, ServerError, ServerResult, ValidationError,
};
