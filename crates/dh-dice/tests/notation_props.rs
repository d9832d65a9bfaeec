//! Property tests for the notation parser.

use dh_dice::{DiceError, DiceExpression};
use proptest::prelude::*;

proptest! {
    #[test]
    fn valid_notation_round_trips(
        count in 1u32..=100,
        sides in 1u32..=1000,
        modifier in -99i32..=99,
    ) {
        let notation = if modifier == 0 {
            format!("{count}d{sides}")
        } else {
            format!("{count}d{sides}{modifier:+}")
        };
        let expr: DiceExpression = notation.parse().unwrap();
        prop_assert_eq!(expr.count, count);
        prop_assert_eq!(expr.die.sides(), sides);
        prop_assert_eq!(expr.modifier, modifier);
    }

    #[test]
    fn omitted_count_defaults_to_one(sides in 1u32..=1000) {
        let expr: DiceExpression = format!("d{sides}").parse().unwrap();
        prop_assert_eq!(expr.count, 1);
        prop_assert_eq!(expr.modifier, 0);
    }

    #[test]
    fn oversized_count_rejected(count in 101u32..=10_000, sides in 1u32..=100) {
        let err = format!("{count}d{sides}").parse::<DiceExpression>().unwrap_err();
        prop_assert_eq!(err, DiceError::InvalidDiceCount(u64::from(count)));
    }

    #[test]
    fn garbage_is_invalid_notation(input in "[a-ce-z]{1,12}") {
        // No 'd' at all, so the grammar can never match.
        let err = input.parse::<DiceExpression>().unwrap_err();
        prop_assert!(matches!(err, DiceError::InvalidNotation(_)));
    }

    #[test]
    fn trailing_garbage_rejected(count in 1u32..=100, sides in 1u32..=100) {
        let err = format!("{count}d{sides}z").parse::<DiceExpression>().unwrap_err();
        prop_assert!(matches!(err, DiceError::InvalidNotation(_)));
    }
}
