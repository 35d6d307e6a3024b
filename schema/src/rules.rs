use serde::{Deserialize, Serialize};

/// Progression rules bound from configuration once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokeGameRules {
    /// Scales the XP needed per level for standard Pokemon.
    pub xp_multiplier: f64,
    /// Scales the XP needed per level for legendary Pokemon.
    pub legendary_xp_multiplier: f64,
    /// XP per level before level and multiplier scaling.
    pub base_xp_ceiling: u32,
    pub hp_calculation_stats: HpCalculationStats,
    pub standard_pokemon_pokedex_range: PokedexRange,
    pub legendary_pokemon_pokedex_range: PokedexRange,
}

/// IV/EV constants applied to every Pokemon. The game does not track
/// individual values per Pokemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HpCalculationStats {
    pub default_iv: u8,
    pub default_ev: u16,
}

/// An inclusive range of Pokedex numbers plus extra numbers outside of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokedexRange {
    pub min: u16,
    pub max: u16,
    #[serde(default)]
    pub extras: Vec<u16>,
}
