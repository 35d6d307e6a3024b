use crate::errors::ValidationError;
use crate::pokemon::OwnedPokemon;

/// Lowest level a Pokemon can be created at
pub const MIN_CREATION_LEVEL: u8 = 1;
/// Highest level a Pokemon can be created at; 100 is only reached by levelling
pub const MAX_CREATION_LEVEL: u8 = 99;
pub const MAX_NICKNAME_LENGTH: usize = 12;

/// Validate a new owned Pokemon before it is added to a game save
pub fn validate_new_owned_pokemon(pokemon: &OwnedPokemon) -> Result<(), ValidationError> {
    if pokemon.pokedex_number == 0 {
        return Err(ValidationError::InvalidPokedexNumber);
    }

    if !(MIN_CREATION_LEVEL..=MAX_CREATION_LEVEL).contains(&pokemon.pokemon_level) {
        return Err(ValidationError::LevelOutOfRange {
            level: pokemon.pokemon_level,
            min: MIN_CREATION_LEVEL,
            max: MAX_CREATION_LEVEL,
        });
    }

    if let Some(nickname) = &pokemon.nickname {
        if nickname.trim().is_empty() || nickname.chars().count() > MAX_NICKNAME_LENGTH {
            return Err(ValidationError::InvalidNickname(nickname.clone()));
        }
    }

    Ok(())
}
