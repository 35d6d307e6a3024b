#[cfg(test)]
mod tests {
    use crate::errors::ServerError;
    use crate::progression::tests::common::{fixture_engine, TestPokemonBuilder};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("low base HP at level 1", 45, 1, 12)]
    #[case("low base HP at level 5", 45, 5, 21)]
    #[case("low base HP at level 50", 45, 50, 120)]
    #[case("low base HP at level cap", 45, 100, 231)]
    #[case("max base HP at level 1", 255, 1, 16)]
    #[case("max base HP at level 50", 255, 50, 330)]
    #[case("max base HP at level cap", 255, 100, 651)]
    #[case("min base HP at level cap", 1, 100, 143)]
    fn test_refill_restores_formula_hp(
        #[case] desc: &str,
        #[case] base_hp: u8,
        #[case] level: u8,
        #[case] expected_hp: u16,
    ) {
        // Arrange
        let engine = fixture_engine();
        let pokemon = TestPokemonBuilder::new(base_hp, level).with_hp(1).build();

        // Act
        let refilled = engine.refill_owned_pokemon_hp(pokemon).unwrap();

        // Assert
        assert_eq!(refilled.current_hp, expected_hp, "Case '{}' failed", desc);
    }

    #[test]
    fn test_refill_is_deterministic() {
        let engine = fixture_engine();
        let first = engine
            .refill_owned_pokemon_hp(TestPokemonBuilder::new(45, 50).with_hp(0).build())
            .unwrap();
        let second = engine.refill_owned_pokemon_hp(first.clone()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_refill_leaves_progression_untouched() {
        let engine = fixture_engine();
        let pokemon = TestPokemonBuilder::new(45, 12)
            .with_experience(77)
            .with_hp(3)
            .build();

        let refilled = engine.refill_owned_pokemon_hp(pokemon).unwrap();
        assert_eq!(refilled.pokemon_level, 12);
        assert_eq!(refilled.current_experience, 77);
    }

    #[test]
    fn test_refill_lowers_hp_above_max() {
        let engine = fixture_engine();
        let pokemon = TestPokemonBuilder::new(45, 1).with_hp(999).build();

        assert_eq!(engine.refill_owned_pokemon_hp(pokemon).unwrap().current_hp, 12);
    }

    #[test]
    fn test_refill_without_pokedex_data_is_a_server_error() {
        let engine = fixture_engine();
        let pokemon = TestPokemonBuilder::new(45, 10).without_pokedex().build();

        assert_eq!(
            engine.refill_owned_pokemon_hp(pokemon),
            Err(ServerError::MissingPokedexData { pokemon_id: 1 })
        );
    }

    #[test]
    fn test_refill_does_not_need_species_data() {
        let engine = fixture_engine();
        let pokemon = TestPokemonBuilder::new(45, 5)
            .without_species()
            .with_hp(0)
            .build();

        assert_eq!(engine.refill_owned_pokemon_hp(pokemon).unwrap().current_hp, 21);
    }

    #[test]
    fn test_bulbasaur_scenario() {
        // Bulbasaur: base HP 45
        let engine = fixture_engine();

        let at_fifty = engine
            .refill_owned_pokemon_hp(TestPokemonBuilder::new(45, 50).with_hp(0).build())
            .unwrap();
        assert_eq!(at_fifty.current_hp, 120);

        let at_cap = engine
            .refill_owned_pokemon_hp(TestPokemonBuilder::new(45, 100).with_hp(0).build())
            .unwrap();
        assert_eq!(at_cap.current_hp, 231);
    }
}
