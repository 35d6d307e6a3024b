#[cfg(test)]
mod tests {
    use crate::errors::ConfigError;
    use crate::progression::tests::common::{fixture_engine, fixture_rules};
    use crate::progression::PokeGameRuleEngine;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use schema::PokedexRange;
    use std::collections::BTreeSet;

    /// Membership read straight off the configured range, independent of the pool
    fn in_configured_range(range: &PokedexRange, number: u16) -> bool {
        (range.min..=range.max).contains(&number) || range.extras.contains(&number)
    }

    fn small_range_engine() -> PokeGameRuleEngine {
        let mut rules = fixture_rules();
        rules.standard_pokemon_pokedex_range = PokedexRange {
            min: 1,
            max: 5,
            extras: vec![10, 20],
        };
        rules.legendary_pokemon_pokedex_range = PokedexRange {
            min: 144,
            max: 146,
            extras: vec![150, 151],
        };
        PokeGameRuleEngine::new(rules).unwrap()
    }

    #[test]
    fn test_standard_draws_stay_in_range_or_extras() {
        let engine = fixture_engine();
        let range = &engine.rules().standard_pokemon_pokedex_range;
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        for _ in 0..5_000 {
            let number = engine.draw_standard_pokedex_number(&mut rng);
            assert!(in_configured_range(range, number), "drew {} outside the range", number);
        }
    }

    #[test]
    fn test_legendary_draws_stay_in_range_or_extras() {
        let engine = fixture_engine();
        let range = &engine.rules().legendary_pokemon_pokedex_range;
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        for _ in 0..1_000 {
            let number = engine.draw_legendary_pokedex_number(&mut rng);
            assert!(in_configured_range(range, number), "drew {} outside the range", number);
        }
    }

    #[test]
    fn test_every_standard_candidate_is_reachable() {
        let engine = small_range_engine();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let seen: BTreeSet<u16> = (0..2_000)
            .map(|_| engine.draw_standard_pokedex_number(&mut rng))
            .collect();

        assert_eq!(seen.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 10, 20]);
    }

    #[test]
    fn test_every_legendary_candidate_is_reachable() {
        let engine = small_range_engine();
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        let seen: BTreeSet<u16> = (0..1_000)
            .map(|_| engine.draw_legendary_pokedex_number(&mut rng))
            .collect();

        assert_eq!(seen.into_iter().collect::<Vec<_>>(), vec![144, 145, 146, 150, 151]);
    }

    #[test]
    fn test_extras_are_weighted_like_any_other_number() {
        // 7 candidates: each should land near 1/7 of the draws. Treating the
        // range and the extras as two equal buckets would give each extra ~1/4.
        let engine = small_range_engine();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let draws = 70_000;

        let extra_hits = (0..draws)
            .map(|_| engine.draw_standard_pokedex_number(&mut rng))
            .filter(|&number| number == 10)
            .count();

        let share = extra_hits as f64 / draws as f64;
        assert!(
            (share - 1.0 / 7.0).abs() < 0.01,
            "extra 10 drawn with share {:.4}",
            share
        );
    }

    #[test]
    fn test_thread_rng_draws_stay_in_range() {
        let engine = fixture_engine();
        for _ in 0..200 {
            let standard = engine.get_random_pokemon_number_from_standard_pokedex_range();
            assert!(engine.standard_pool().contains(standard));

            let legendary = engine.get_random_pokemon_number_from_legendary_pokedex_range();
            assert!(engine.legendary_pool().contains(legendary));
        }
    }

    #[test]
    fn test_empty_range_fails_at_construction() {
        let mut rules = fixture_rules();
        rules.standard_pokemon_pokedex_range = PokedexRange {
            min: 9,
            max: 3,
            extras: vec![],
        };

        let err = PokeGameRuleEngine::new(rules).unwrap_err();
        assert_eq!(
            err,
            ConfigError::EmptyPokedexRange {
                range: "standard",
                min: 9,
                max: 3
            }
        );
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        let engine = std::sync::Arc::new(fixture_engine());

        let handles: Vec<_> = (0..4u64)
            .map(|seed| {
                let engine = engine.clone();
                std::thread::spawn(move || {
                    let mut rng = ChaCha8Rng::seed_from_u64(seed);
                    engine.draw_legendary_pokedex_number(&mut rng)
                })
            })
            .collect();

        for handle in handles {
            let number = handle.join().unwrap();
            assert!(engine.legendary_pool().contains(number));
        }
    }
}
