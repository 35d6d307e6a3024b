//! Game save command handlers.
//!
//! These are the callers the progression engine is written for: they hydrate
//! navigation data, run the engine and store the value it hands back.

use crate::errors::{GameSaveError, PokeGameResult};
use crate::pokedex::Pokedex;
use crate::pokemon::OwnedPokemon;
use crate::progression::validation::validate_new_owned_pokemon;
use crate::progression::PokeGameRuleEngine;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Which Pokedex range an encounter draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterKind {
    Standard,
    Legendary,
}

/// Outcome of awarding experience to one owned Pokemon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceAward {
    pub pokemon_id: u32,
    pub previous_level: u8,
    pub new_level: u8,
}

impl ExperienceAward {
    pub fn levels_gained(&self) -> u8 {
        self.new_level - self.previous_level
    }

    pub fn levelled_up(&self) -> bool {
        self.new_level > self.previous_level
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSave {
    pub character_name: String,
    owned_pokemon: Vec<OwnedPokemon>,
    next_pokemon_id: u32,
}

impl GameSave {
    pub fn new(character_name: impl Into<String>) -> Self {
        Self {
            character_name: character_name.into(),
            owned_pokemon: Vec::new(),
            next_pokemon_id: 1,
        }
    }

    pub fn owned_pokemon(&self) -> &[OwnedPokemon] {
        &self.owned_pokemon
    }

    pub fn pokemon(&self, pokemon_id: u32) -> Option<&OwnedPokemon> {
        self.owned_pokemon.iter().find(|p| p.id == pokemon_id)
    }

    /// Catch a random Pokemon from the given range at `level`, with full HP.
    pub fn catch_pokemon<R: Rng + ?Sized>(
        &mut self,
        engine: &PokeGameRuleEngine,
        pokedex: &Pokedex,
        rng: &mut R,
        kind: EncounterKind,
        level: u8,
    ) -> PokeGameResult<&OwnedPokemon> {
        let pokedex_number = match kind {
            EncounterKind::Standard => engine.draw_standard_pokedex_number(rng),
            EncounterKind::Legendary => engine.draw_legendary_pokedex_number(rng),
        };
        self.add_pokemon(engine, pokedex, pokedex_number, level)
    }

    /// Add a specific Pokemon at `level`, with full HP.
    pub fn add_pokemon(
        &mut self,
        engine: &PokeGameRuleEngine,
        pokedex: &Pokedex,
        pokedex_number: u16,
        level: u8,
    ) -> PokeGameResult<&OwnedPokemon> {
        let pokemon = OwnedPokemon::new(self.next_pokemon_id, pokedex_number, level);
        validate_new_owned_pokemon(&pokemon)?;

        let pokemon = pokedex.hydrate(pokemon)?;
        let pokemon = engine.refill_owned_pokemon_hp(pokemon)?;

        tracing::info!(
            pokemon_id = pokemon.id,
            pokedex_number,
            level,
            character = %self.character_name,
            "Pokemon added to game save"
        );

        self.next_pokemon_id += 1;
        self.owned_pokemon.push(pokemon);
        Ok(&self.owned_pokemon[self.owned_pokemon.len() - 1])
    }

    /// Award experience to one owned Pokemon and store the result.
    pub fn award_experience(
        &mut self,
        engine: &PokeGameRuleEngine,
        pokemon_id: u32,
        xp: u32,
    ) -> PokeGameResult<ExperienceAward> {
        let slot = self.slot_mut(pokemon_id)?;
        let previous_level = slot.pokemon_level;

        let updated = engine.add_xp_to_owned_pokemon(slot.clone(), xp)?;
        *slot = updated;

        let award = ExperienceAward {
            pokemon_id,
            previous_level,
            new_level: slot.pokemon_level,
        };
        if award.levelled_up() {
            tracing::info!(
                pokemon_id,
                from = award.previous_level,
                to = award.new_level,
                "Pokemon grew to a new level"
            );
        }
        Ok(award)
    }

    /// Restore every owned Pokemon to full HP. On error the save is left
    /// untouched.
    pub fn heal_all(&mut self, engine: &PokeGameRuleEngine) -> PokeGameResult<()> {
        let healed = self
            .owned_pokemon
            .iter()
            .cloned()
            .map(|pokemon| engine.refill_owned_pokemon_hp(pokemon))
            .collect::<Result<Vec<_>, _>>()?;
        self.owned_pokemon = healed;
        Ok(())
    }

    pub fn release(&mut self, pokemon_id: u32) -> PokeGameResult<OwnedPokemon> {
        let index = self
            .owned_pokemon
            .iter()
            .position(|p| p.id == pokemon_id)
            .ok_or(GameSaveError::PokemonNotFound(pokemon_id))?;
        Ok(self.owned_pokemon.remove(index))
    }

    fn slot_mut(&mut self, pokemon_id: u32) -> Result<&mut OwnedPokemon, GameSaveError> {
        self.owned_pokemon
            .iter_mut()
            .find(|p| p.id == pokemon_id)
            .ok_or(GameSaveError::PokemonNotFound(pokemon_id))
    }
}
