// Rules configuration, loaded from a RON file once at startup.

use crate::errors::{ConfigError, ConfigResult};
use crate::progression::calculation::xp_to_next_level;
use crate::progression::pool::PokedexPool;
use schema::PokeGameRules;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the rules file
pub const RULES_PATH_ENV: &str = "POKE_GAME_RULES_PATH";
pub const DEFAULT_RULES_PATH: &str = "config/poke_game_rules.ron";

const MAX_IV: u8 = 31;
const MAX_EV: u16 = 252;

/// Resolve the rules file path.
///
/// An explicit path wins, then `POKE_GAME_RULES_PATH`, then
/// `config/poke_game_rules.ron`.
pub fn resolve_rules_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var(RULES_PATH_ENV).ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RULES_PATH))
}

/// Read, parse and validate the rules file at `path`
pub fn load_rules(path: &Path) -> ConfigResult<PokeGameRules> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let rules = parse_rules(&content)?;

    tracing::info!(
        path = %path.display(),
        xp_multiplier = rules.xp_multiplier,
        legendary_xp_multiplier = rules.legendary_xp_multiplier,
        base_xp_ceiling = rules.base_xp_ceiling,
        "loaded Poke Game rules"
    );
    Ok(rules)
}

/// Parse and validate rules from RON text
pub fn parse_rules(content: &str) -> ConfigResult<PokeGameRules> {
    let rules: PokeGameRules =
        ron::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate_rules(&rules)?;
    Ok(rules)
}

/// Check every startup invariant of the rules, including that both Pokedex
/// ranges can produce at least one number.
pub fn validate_rules(rules: &PokeGameRules) -> ConfigResult<()> {
    check_multiplier("xp_multiplier", rules.xp_multiplier)?;
    check_multiplier("legendary_xp_multiplier", rules.legendary_xp_multiplier)?;

    if rules.legendary_xp_multiplier < rules.xp_multiplier {
        return Err(ConfigError::LegendaryMultiplierBelowStandard {
            legendary: rules.legendary_xp_multiplier.to_string(),
            standard: rules.xp_multiplier.to_string(),
        });
    }

    if rules.base_xp_ceiling == 0 {
        return Err(ConfigError::InvalidXpCeiling);
    }
    // Level 1 is the cheapest level; the per-level cost rounds to whole XP
    check_level_cost(rules, "xp_multiplier", rules.xp_multiplier)?;
    check_level_cost(rules, "legendary_xp_multiplier", rules.legendary_xp_multiplier)?;

    let hp_stats = rules.hp_calculation_stats;
    if hp_stats.default_iv > MAX_IV || hp_stats.default_ev > MAX_EV {
        return Err(ConfigError::InvalidHpStats {
            iv: hp_stats.default_iv,
            ev: hp_stats.default_ev,
        });
    }

    PokedexPool::from_range("standard", &rules.standard_pokemon_pokedex_range)?;
    PokedexPool::from_range("legendary", &rules.legendary_pokemon_pokedex_range)?;

    Ok(())
}

fn check_multiplier(name: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidMultiplier {
            name,
            value: value.to_string(),
        })
    }
}

fn check_level_cost(rules: &PokeGameRules, name: &'static str, multiplier: f64) -> ConfigResult<()> {
    if xp_to_next_level(rules.base_xp_ceiling, 1, multiplier) == 0 {
        return Err(ConfigError::FreeLevelUp {
            name,
            base_xp_ceiling: rules.base_xp_ceiling,
            value: multiplier.to_string(),
        });
    }
    Ok(())
}
