use crate::PokemonType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub sp_attack: u8,
    pub sp_defense: u8,
    pub speed: u8,
}

impl BaseStats {
    pub fn total(&self) -> u16 {
        self.hp as u16
            + self.attack as u16
            + self.defense as u16
            + self.sp_attack as u16
            + self.sp_defense as u16
            + self.speed as u16
    }
}

/// Pokedex reference record: name, typing and base stats of one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokedexPokemon {
    pub pokedex_number: u16,
    pub name: String,
    pub types: Vec<PokemonType>,
    pub stats: BaseStats,
}

/// Species-level facts that affect progression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSpecies {
    pub pokedex_number: u16,
    pub is_legendary: bool,
}

/// One row of the bundled Pokedex seed file. Splits into the two navigation
/// records an owned Pokemon carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokedexEntry {
    pub pokedex_number: u16,
    pub name: String,
    pub types: Vec<PokemonType>,
    #[serde(default)]
    pub is_legendary: bool,
    pub base_stats: BaseStats,
}

impl PokedexEntry {
    pub fn pokedex_pokemon(&self) -> PokedexPokemon {
        PokedexPokemon {
            pokedex_number: self.pokedex_number,
            name: self.name.clone(),
            types: self.types.clone(),
            stats: self.base_stats,
        }
    }

    pub fn species(&self) -> PokemonSpecies {
        PokemonSpecies {
            pokedex_number: self.pokedex_number,
            is_legendary: self.is_legendary,
        }
    }
}
