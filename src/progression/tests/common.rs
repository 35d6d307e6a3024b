use crate::pokemon::OwnedPokemon;
use crate::progression::PokeGameRuleEngine;
use schema::{
    BaseStats, HpCalculationStats, PokeGameRules, PokedexPokemon, PokedexRange, PokemonSpecies,
    PokemonType,
};

/// Rules the progression fixtures were written against
pub fn fixture_rules() -> PokeGameRules {
    PokeGameRules {
        xp_multiplier: 1.0,
        legendary_xp_multiplier: 1.9,
        base_xp_ceiling: 100,
        hp_calculation_stats: HpCalculationStats {
            default_iv: 31,
            default_ev: 0,
        },
        standard_pokemon_pokedex_range: PokedexRange {
            min: 1,
            max: 143,
            extras: vec![147, 148, 149],
        },
        legendary_pokemon_pokedex_range: PokedexRange {
            min: 144,
            max: 146,
            extras: vec![150, 151],
        },
    }
}

pub fn fixture_engine() -> PokeGameRuleEngine {
    PokeGameRuleEngine::new(fixture_rules()).expect("fixture rules should be valid")
}

/// Builds owned Pokemon with synthetic navigation data so tests control the
/// base HP and legendary flag directly.
pub struct TestPokemonBuilder {
    base_hp: u8,
    level: u8,
    experience: u32,
    current_hp: Option<u16>,
    legendary: bool,
    with_species: bool,
    with_pokedex: bool,
}

impl TestPokemonBuilder {
    pub fn new(base_hp: u8, level: u8) -> Self {
        Self {
            base_hp,
            level,
            experience: 0,
            current_hp: None,
            legendary: false,
            with_species: true,
            with_pokedex: true,
        }
    }

    pub fn legendary(mut self, legendary: bool) -> Self {
        self.legendary = legendary;
        self
    }

    pub fn with_experience(mut self, experience: u32) -> Self {
        self.experience = experience;
        self
    }

    pub fn with_hp(mut self, hp: u16) -> Self {
        self.current_hp = Some(hp);
        self
    }

    pub fn without_species(mut self) -> Self {
        self.with_species = false;
        self
    }

    pub fn without_pokedex(mut self) -> Self {
        self.with_pokedex = false;
        self
    }

    /// Build the Pokemon. HP defaults to full HP for its level.
    pub fn build(self) -> OwnedPokemon {
        let pokedex_number = if self.legendary { 150 } else { 1 };
        let mut pokemon = OwnedPokemon::new(1, pokedex_number, self.level);
        pokemon.current_experience = self.experience;
        pokemon.current_hp = self.current_hp.unwrap_or_else(|| {
            crate::progression::calculation::calculate_hp(
                self.base_hp,
                self.level,
                &fixture_rules().hp_calculation_stats,
            )
        });

        if self.with_species {
            pokemon.pokemon_species = Some(PokemonSpecies {
                pokedex_number,
                is_legendary: self.legendary,
            });
        }
        if self.with_pokedex {
            pokemon.pokedex_pokemon = Some(PokedexPokemon {
                pokedex_number,
                name: "Testmon".to_string(),
                types: vec![PokemonType::Normal],
                stats: BaseStats {
                    hp: self.base_hp,
                    attack: 50,
                    defense: 50,
                    sp_attack: 50,
                    sp_defense: 50,
                    speed: 50,
                },
            });
        }
        pokemon
    }
}
