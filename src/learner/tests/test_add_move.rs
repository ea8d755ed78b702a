#[cfg(test)]
mod tests {
    use crate::errors::MoveLearnerError;
    use crate::learner::tests::common::{bite, peck, test_learner, test_move, TestPokemonBuilder};
    use pretty_assertions::assert_eq;
    use schema::Move;

    #[test]
    fn test_adds_move_at_next_free_slot() {
        // Arrange
        let learner = test_learner();
        let mut pokemon = TestPokemonBuilder::new("SQUIRTLE", 5)
            .with_moves(&["Bide"])
            .build();

        // Act
        let result = learner.add_move(&mut pokemon, peck(), 1);

        // Assert
        assert_eq!(result, Ok(None));
        assert_eq!(pokemon.moves.get(1).map(Move::title), Some("Peck"));
        assert_eq!(pokemon.moves.len(), 2);
    }

    #[test]
    fn test_replaces_existing_move() {
        // Arrange
        let learner = test_learner();
        let mut pokemon = TestPokemonBuilder::new("SQUIRTLE", 5)
            .with_moves(&["Bide"])
            .build();

        // Act
        let result = learner.add_move(&mut pokemon, peck(), 0);

        // Assert
        assert_eq!(result, Ok(Some(test_move("Bide"))));
        assert_eq!(pokemon.moves.get(0).map(Move::title), Some("Peck"));
        assert_eq!(pokemon.moves.len(), 1);
    }

    #[test]
    fn test_negative_index_is_invalid() {
        let learner = test_learner();
        let mut pokemon = TestPokemonBuilder::new("SQUIRTLE", 5).build();

        let err = learner.add_move(&mut pokemon, peck(), -1).unwrap_err();

        assert_eq!(err.to_string(), "Invalid move parameters.");
        assert!(pokemon.moves.is_empty());
    }

    #[test]
    fn test_index_past_four_slots_is_invalid() {
        let learner = test_learner();
        let mut pokemon = TestPokemonBuilder::new("SQUIRTLE", 5).build();

        let err = learner.add_move(&mut pokemon, peck(), 4).unwrap_err();

        assert_eq!(err.to_string(), "Invalid move parameters.");
        assert!(pokemon.moves.is_empty());
    }

    #[test]
    fn test_index_leaving_a_gap_is_invalid() {
        let learner = test_learner();
        let mut pokemon = TestPokemonBuilder::new("SQUIRTLE", 5)
            .with_moves(&["Bide"])
            .build();

        let result = learner.add_move(&mut pokemon, peck(), 2);

        assert_eq!(
            result,
            Err(MoveLearnerError::InvalidMoveParameters {
                index: 2,
                known_moves: 1,
            })
        );
        assert_eq!(pokemon.moves.titles(), vec!["Bide"]);
    }

    #[test]
    fn test_known_move_in_other_slot_is_rejected() {
        // Arrange: Peck in slot 1, Bite in slot 2
        let learner = test_learner();
        let mut pokemon = TestPokemonBuilder::new("SQUIRTLE", 5)
            .with_moves(&["Bide"])
            .build();
        learner.add_move(&mut pokemon, peck(), 1).unwrap();
        learner.add_move(&mut pokemon, bite(), 2).unwrap();
        let before = pokemon.clone();

        // Act
        let err = learner.add_move(&mut pokemon, peck(), 2).unwrap_err();

        // Assert
        assert_eq!(err.to_string(), "This Pokemon already knows this move.");
        assert_eq!(pokemon, before);
    }

    #[test]
    fn test_add_move_does_not_touch_menu() {
        let learner = test_learner();
        let mut pokemon = TestPokemonBuilder::new("SQUIRTLE", 5).build();

        learner.add_move(&mut pokemon, peck(), 0).unwrap();

        assert_eq!(learner.menu().active_menu(), None);
        assert!(learner.menu().history().is_empty());
    }

    #[test]
    fn test_fill_all_four_slots_then_overwrite() {
        let learner = test_learner();
        let mut pokemon = TestPokemonBuilder::new("SQUIRTLE", 5).build();

        for (i, title) in ["Bide", "Bite", "Bubble", "Roar"].iter().enumerate() {
            learner
                .add_move(&mut pokemon, test_move(title), i as i32)
                .unwrap();
        }
        assert!(pokemon.moves.is_full());

        let replaced = learner.add_move(&mut pokemon, peck(), 3).unwrap();

        assert_eq!(replaced.as_ref().map(Move::title), Some("Roar"));
        assert_eq!(pokemon.moves.titles(), vec!["Bide", "Bite", "Bubble", "Peck"]);
    }
}
