use schema::{PokedexPokemon, PokemonSpecies};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Level past which no experience-driven growth happens.
pub const MAX_LEVEL: u8 = 100;

/// A Pokemon owned by a game save, together with the navigation data the
/// progression rules need. `pokemon_species` and `pokedex_pokemon` are
/// filled in by [`crate::pokedex::Pokedex::hydrate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedPokemon {
    pub id: u32,
    pub pokedex_number: u16,
    pub nickname: Option<String>,
    pub pokemon_level: u8,
    pub current_experience: u32, // XP banked toward the next level
    pub current_hp: u16,
    #[serde(default)]
    pub pokemon_species: Option<PokemonSpecies>,
    #[serde(default)]
    pub pokedex_pokemon: Option<PokedexPokemon>,
}

impl OwnedPokemon {
    /// Create a freshly caught Pokemon with no experience and no HP computed yet.
    pub fn new(id: u32, pokedex_number: u16, pokemon_level: u8) -> Self {
        OwnedPokemon {
            id,
            pokedex_number,
            nickname: None,
            pokemon_level,
            current_experience: 0,
            current_hp: 0,
            pokemon_species: None,
            pokedex_pokemon: None,
        }
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    pub fn is_legendary(&self) -> Option<bool> {
        self.pokemon_species.as_ref().map(|species| species.is_legendary)
    }

    pub fn is_max_level(&self) -> bool {
        self.pokemon_level >= MAX_LEVEL
    }

    /// Nickname if set, otherwise the Pokedex name, otherwise the number.
    pub fn display_name(&self) -> String {
        if let Some(nickname) = &self.nickname {
            return nickname.clone();
        }
        match &self.pokedex_pokemon {
            Some(pokedex_pokemon) => pokedex_pokemon.name.clone(),
            None => format!("#{:03}", self.pokedex_number),
        }
    }
}

impl fmt::Display for OwnedPokemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (#{:03}) Lv.{} HP {} EXP {}",
            self.display_name(),
            self.pokedex_number,
            self.pokemon_level,
            self.current_hp,
            self.current_experience
        )?;
        if self.is_legendary() == Some(true) {
            write!(f, " [Legendary]")?;
        }
        Ok(())
    }
}
