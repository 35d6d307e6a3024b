use crate::config::validate_rules;
use crate::errors::{ConfigResult, ServerError, ServerResult};
use crate::pokemon::{OwnedPokemon, MAX_LEVEL};
use crate::progression::calculation::{calculate_hp, xp_to_next_level};
use crate::progression::pool::PokedexPool;
use schema::PokeGameRules;

/// Pokemon progression rules: Pokedex draws, HP refills and XP level-ups.
///
/// Holds only the configuration handed to [`PokeGameRuleEngine::new`] and the
/// draw pools built from it, so one engine can be shared across threads.
/// Operations take the Pokemon by value and hand back the updated value.
#[derive(Debug, Clone)]
pub struct PokeGameRuleEngine {
    rules: PokeGameRules,
    standard_pool: PokedexPool,
    legendary_pool: PokedexPool,
}

impl PokeGameRuleEngine {
    /// Validate the rules and build the draw pools. Misconfiguration fails
    /// here, never at draw time.
    pub fn new(rules: PokeGameRules) -> ConfigResult<Self> {
        validate_rules(&rules)?;
        let standard_pool =
            PokedexPool::from_range("standard", &rules.standard_pokemon_pokedex_range)?;
        let legendary_pool =
            PokedexPool::from_range("legendary", &rules.legendary_pokemon_pokedex_range)?;

        Ok(Self {
            rules,
            standard_pool,
            legendary_pool,
        })
    }

    pub fn rules(&self) -> &PokeGameRules {
        &self.rules
    }

    pub fn standard_pool(&self) -> &PokedexPool {
        &self.standard_pool
    }

    pub fn legendary_pool(&self) -> &PokedexPool {
        &self.legendary_pool
    }

    pub fn get_random_pokemon_number_from_standard_pokedex_range(&self) -> u16 {
        self.draw_standard_pokedex_number(&mut rand::rng())
    }

    pub fn get_random_pokemon_number_from_legendary_pokedex_range(&self) -> u16 {
        self.draw_legendary_pokedex_number(&mut rand::rng())
    }

    /// Uniform draw over every number of the standard range and its extras
    pub fn draw_standard_pokedex_number<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> u16 {
        self.standard_pool.draw(rng)
    }

    /// Uniform draw over every number of the legendary range and its extras
    pub fn draw_legendary_pokedex_number<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> u16 {
        self.legendary_pool.draw(rng)
    }

    /// Recompute `current_hp` from base HP, level and the configured IV/EV.
    pub fn refill_owned_pokemon_hp(&self, mut pokemon: OwnedPokemon) -> ServerResult<OwnedPokemon> {
        pokemon.current_hp = self.max_hp(&pokemon, pokemon.pokemon_level)?;
        Ok(pokemon)
    }

    /// Add experience and apply every level-up it pays for.
    ///
    /// Each level-up consumes the XP for the level being left and carries the
    /// remainder. At level 100 leftover XP is discarded. HP is recomputed
    /// whenever the level changes.
    pub fn add_xp_to_owned_pokemon(
        &self,
        mut pokemon: OwnedPokemon,
        xp_to_add: u32,
    ) -> ServerResult<OwnedPokemon> {
        let multiplier = self.xp_multiplier_for(&pokemon)?;

        let starting_level = pokemon.pokemon_level;
        let mut level = starting_level;
        let mut experience = pokemon.current_experience.saturating_add(xp_to_add);

        while level < MAX_LEVEL {
            let needed = xp_to_next_level(self.rules.base_xp_ceiling, level, multiplier);
            if experience < needed {
                break;
            }
            experience -= needed;
            level += 1;
        }

        if level >= MAX_LEVEL {
            experience = 0;
        }

        if level != starting_level {
            // Pokedex data is only needed once a level-up forces an HP refill
            pokemon.current_hp = self.max_hp(&pokemon, level)?;
            tracing::debug!(
                pokemon_id = pokemon.id,
                from = starting_level,
                to = level,
                "owned Pokemon levelled up"
            );
        }

        pokemon.pokemon_level = level;
        pokemon.current_experience = experience;
        Ok(pokemon)
    }

    /// XP needed to leave the Pokemon's current level, or `None` at the cap.
    pub fn xp_to_next_level(&self, pokemon: &OwnedPokemon) -> ServerResult<Option<u32>> {
        let multiplier = self.xp_multiplier_for(pokemon)?;
        if pokemon.is_max_level() {
            return Ok(None);
        }
        Ok(Some(xp_to_next_level(
            self.rules.base_xp_ceiling,
            pokemon.pokemon_level,
            multiplier,
        )))
    }

    fn xp_multiplier_for(&self, pokemon: &OwnedPokemon) -> ServerResult<f64> {
        let species = pokemon
            .pokemon_species
            .as_ref()
            .ok_or(ServerError::MissingSpeciesData {
                pokemon_id: pokemon.id,
            })?;

        Ok(if species.is_legendary {
            self.rules.legendary_xp_multiplier
        } else {
            self.rules.xp_multiplier
        })
    }

    fn max_hp(&self, pokemon: &OwnedPokemon, level: u8) -> ServerResult<u16> {
        let pokedex_pokemon =
            pokemon
                .pokedex_pokemon
                .as_ref()
                .ok_or(ServerError::MissingPokedexData {
                    pokemon_id: pokemon.id,
                })?;

        Ok(calculate_hp(
            pokedex_pokemon.stats.hp,
            level,
            &self.rules.hp_calculation_stats,
        ))
    }
}
