use schema::HpCalculationStats;

/// Calculate max HP with the standard stat formula
/// HP = floor((2 * Base + IV + floor(EV / 4)) * Level / 100) + Level + 10
pub fn calculate_hp(base_hp: u8, level: u8, hp_stats: &HpCalculationStats) -> u16 {
    let base_calculation =
        2 * base_hp as u32 + hp_stats.default_iv as u32 + hp_stats.default_ev as u32 / 4;
    let hp = base_calculation * level as u32 / 100 + level as u32 + 10;
    hp as u16
}

/// XP needed to advance from `level` to the next one.
/// Formula: round(base_xp_ceiling × level × multiplier)
pub fn xp_to_next_level(base_xp_ceiling: u32, level: u8, multiplier: f64) -> u32 {
    // Rounded rather than floored so decimal multipliers like 1.9 don't lose
    // a point to binary representation.
    (base_xp_ceiling as f64 * level as f64 * multiplier).round() as u32
}
