// Poke Game Schema - Shared type definitions
// This crate holds the plain data records shared by the rules engine, the
// Pokedex loader and the binaries: the rules configuration and the Pokedex
// reference data. Nothing in here performs validation or I/O.

// Re-export the main types
pub use pokedex_data::*;
pub use pokemon_types::*;
pub use rules::*;

pub mod pokedex_data;
pub mod pokemon_types;
pub mod rules;
