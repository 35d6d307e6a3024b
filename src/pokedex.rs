use crate::errors::{PokedexError, PokedexResult};
use crate::pokemon::OwnedPokemon;
use crate::progression::PokeGameRuleEngine;
use schema::PokedexEntry;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Pokedex seed compiled into the binary
const BUNDLED_POKEDEX: &str = include_str!("../data/pokedex.json");

/// Pokedex reference data keyed by Pokedex number.
#[derive(Debug, Clone, Default)]
pub struct Pokedex {
    entries: BTreeMap<u16, PokedexEntry>,
}

impl Pokedex {
    /// The Generation I Pokedex shipped with the crate
    pub fn bundled() -> PokedexResult<Self> {
        Self::from_json_str(BUNDLED_POKEDEX)
    }

    pub fn load(path: &Path) -> PokedexResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| PokedexError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let pokedex = Self::from_json_str(&content)?;
        tracing::info!(path = %path.display(), entries = pokedex.len(), "loaded Pokedex");
        Ok(pokedex)
    }

    pub fn from_json_str(content: &str) -> PokedexResult<Self> {
        let rows: Vec<PokedexEntry> =
            serde_json::from_str(content).map_err(|e| PokedexError::Parse(e.to_string()))?;
        Self::from_entries(rows)
    }

    pub fn from_entries(rows: Vec<PokedexEntry>) -> PokedexResult<Self> {
        let mut entries = BTreeMap::new();
        for entry in rows {
            if entry.pokedex_number == 0 {
                return Err(PokedexError::InvalidPokedexNumber(0));
            }
            let number = entry.pokedex_number;
            if entries.insert(number, entry).is_some() {
                return Err(PokedexError::DuplicatePokedexNumber(number));
            }
        }
        Ok(Self { entries })
    }

    pub fn entry(&self, pokedex_number: u16) -> PokedexResult<&PokedexEntry> {
        self.entries
            .get(&pokedex_number)
            .ok_or(PokedexError::UnknownPokedexNumber(pokedex_number))
    }

    /// Case-insensitive lookup by species name
    pub fn find_by_name(&self, name: &str) -> Option<&PokedexEntry> {
        self.entries
            .values()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attach species and Pokedex navigation data to an owned Pokemon.
    ///
    /// This is the eager-load step every engine caller performs first.
    pub fn hydrate(&self, mut pokemon: OwnedPokemon) -> PokedexResult<OwnedPokemon> {
        let entry = self.entry(pokemon.pokedex_number)?;
        pokemon.pokemon_species = Some(entry.species());
        pokemon.pokedex_pokemon = Some(entry.pokedex_pokemon());
        Ok(pokemon)
    }

    /// Fail unless every number the engine can draw has an entry here.
    pub fn ensure_covers(&self, engine: &PokeGameRuleEngine) -> PokedexResult<()> {
        let missing: Vec<u16> = engine
            .standard_pool()
            .candidates()
            .iter()
            .chain(engine.legendary_pool().candidates())
            .copied()
            .filter(|number| !self.entries.contains_key(number))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(PokedexError::MissingCoverage(missing))
        }
    }
}
