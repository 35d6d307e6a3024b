//! Text front end for the progression rules.
//!
//! The CLI and the MCP server both answer with the strings built here, so the
//! two binaries stay thin wrappers around argument parsing and transport.

use crate::config::{load_rules, resolve_rules_path};
use crate::errors::{PokeGameResult, ValidationError};
use crate::pokedex::Pokedex;
use crate::pokemon::{OwnedPokemon, MAX_LEVEL};
use crate::progression::PokeGameRuleEngine;
use rand::Rng;
use schema::PokedexEntry;
use std::path::Path;

/// Id given to the throwaway Pokemon built for one-off calculations
const SCRATCH_POKEMON_ID: u32 = 0;

/// Load the rules and the Pokedex, build the engine and check the Pokedex
/// covers every number the engine can draw.
///
/// `rules_path` falls back to the environment and then the default file;
/// `pokedex_path` falls back to the bundled Generation I data.
pub fn load_rules_context(
    rules_path: Option<&Path>,
    pokedex_path: Option<&Path>,
) -> PokeGameResult<(PokeGameRuleEngine, Pokedex)> {
    let rules = load_rules(&resolve_rules_path(rules_path))?;
    let engine = PokeGameRuleEngine::new(rules)?;

    let pokedex = match pokedex_path {
        Some(path) => Pokedex::load(path)?,
        None => Pokedex::bundled()?,
    };
    pokedex.ensure_covers(&engine)?;

    Ok((engine, pokedex))
}

/// Build a hydrated Pokemon at any reachable level, cap included.
pub fn build_owned_pokemon(
    pokedex: &Pokedex,
    pokedex_number: u16,
    level: u8,
    experience: u32,
) -> PokeGameResult<OwnedPokemon> {
    if !(1..=MAX_LEVEL).contains(&level) {
        return Err(ValidationError::LevelOutOfRange {
            level,
            min: 1,
            max: MAX_LEVEL,
        }
        .into());
    }

    let mut pokemon = OwnedPokemon::new(SCRATCH_POKEMON_ID, pokedex_number, level);
    pokemon.current_experience = experience;
    Ok(pokedex.hydrate(pokemon)?)
}

fn entry_label(pokedex: &Pokedex, pokedex_number: u16) -> String {
    match pokedex.entry(pokedex_number) {
        Ok(entry) => format!("#{:03} {}", pokedex_number, entry.name),
        Err(_) => format!("#{:03}", pokedex_number),
    }
}

/// Draw `count` Pokedex numbers, one per line
pub fn handle_draw_command<R: Rng + ?Sized>(
    engine: &PokeGameRuleEngine,
    pokedex: &Pokedex,
    rng: &mut R,
    legendary: bool,
    count: usize,
) -> String {
    let mut output = String::new();
    for _ in 0..count {
        let number = if legendary {
            engine.draw_legendary_pokedex_number(rng)
        } else {
            engine.draw_standard_pokedex_number(rng)
        };
        output.push_str(&entry_label(pokedex, number));
        output.push('\n');
    }
    output
}

pub fn handle_hp_command(
    engine: &PokeGameRuleEngine,
    pokedex: &Pokedex,
    pokedex_number: u16,
    level: u8,
) -> PokeGameResult<String> {
    let pokemon = build_owned_pokemon(pokedex, pokedex_number, level, 0)?;
    let pokemon = engine.refill_owned_pokemon_hp(pokemon)?;
    Ok(format!(
        "{} at Lv.{} has {} max HP",
        entry_label(pokedex, pokedex_number),
        pokemon.pokemon_level,
        pokemon.current_hp
    ))
}

pub fn handle_xp_command(
    engine: &PokeGameRuleEngine,
    pokedex: &Pokedex,
    pokedex_number: u16,
    level: u8,
    experience: u32,
    xp_to_add: u32,
) -> PokeGameResult<String> {
    let before = build_owned_pokemon(pokedex, pokedex_number, level, experience)?;
    let before = engine.refill_owned_pokemon_hp(before)?;
    let after = engine.add_xp_to_owned_pokemon(before.clone(), xp_to_add)?;

    let mut output = format!("Before: {}\n After: {}\n", before, after);
    if after.pokemon_level > before.pokemon_level {
        output.push_str(&format!(
            "Grew {} level(s) from +{} XP\n",
            after.pokemon_level - before.pokemon_level,
            xp_to_add
        ));
    }
    match engine.xp_to_next_level(&after)? {
        Some(needed) => output.push_str(&format!(
            "{} more XP to reach Lv.{}\n",
            needed - after.current_experience,
            after.pokemon_level + 1
        )),
        None => output.push_str("At the level cap\n"),
    }
    Ok(output)
}

fn describe_entry(entry: &PokedexEntry) -> String {
    let types: Vec<String> = entry.types.iter().map(|t| t.to_string()).collect();
    let stats = &entry.base_stats;
    let mut output = format!(
        "#{:03} {}{}\nType: {}\n",
        entry.pokedex_number,
        entry.name,
        if entry.is_legendary { " [Legendary]" } else { "" },
        types.join("/")
    );
    output.push_str(&format!(
        "Base stats: HP {} / Atk {} / Def {} / SpA {} / SpD {} / Spe {} (total {})",
        stats.hp,
        stats.attack,
        stats.defense,
        stats.sp_attack,
        stats.sp_defense,
        stats.speed,
        stats.total()
    ));
    output
}

/// Look a Pokemon up by Pokedex number or by name
pub fn handle_lookup_pokemon_command(pokedex: &Pokedex, query: &str) -> String {
    let query = query.trim().trim_start_matches('#');
    let entry = match query.parse::<u16>() {
        Ok(number) => pokedex.entry(number).ok(),
        Err(_) => pokedex.find_by_name(query),
    };

    match entry {
        Some(entry) => describe_entry(entry),
        None => format!("No Pokemon found for '{}'.", query),
    }
}

/// Summary of the loaded rules and how they line up with the Pokedex
pub fn handle_check_command(engine: &PokeGameRuleEngine, pokedex: &Pokedex) -> String {
    let rules = engine.rules();
    format!(
        "Rules OK\n\
         XP ceiling {} (x{} standard, x{} legendary)\n\
         HP stats: IV {} / EV {}\n\
         Standard pool: {} Pokemon\n\
         Legendary pool: {} Pokemon\n\
         Pokedex: {} entries, all pool members covered",
        rules.base_xp_ceiling,
        rules.xp_multiplier,
        rules.legendary_xp_multiplier,
        rules.hp_calculation_stats.default_iv,
        rules.hp_calculation_stats.default_ev,
        engine.standard_pool().len(),
        engine.legendary_pool().len(),
        pokedex.len()
    )
}
