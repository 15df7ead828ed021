//! Property-based functor law tests for `Maybe` and `Validation`.

use accrue::control::{Maybe, Validation};
use proptest::prelude::*;

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    prop_oneof![
        Just(Maybe::Nothing),
        any::<i32>().prop_map(Maybe::Just),
    ]
}

fn validation_strategy() -> impl Strategy<Value = Validation<String, i32>> {
    prop_oneof![
        ".{0,12}".prop_map(Validation::Failure),
        any::<i32>().prop_map(Validation::Success),
    ]
}

proptest! {
    // =========================================================================
    // Maybe
    // =========================================================================

    #[test]
    fn prop_maybe_functor_identity(value in maybe_strategy()) {
        prop_assert_eq!(value.map(|x| x), value);
    }

    #[test]
    fn prop_maybe_functor_composition(value in maybe_strategy()) {
        let double = |x: i32| x.wrapping_mul(2);
        let add_one = |x: i32| x.wrapping_add(1);
        prop_assert_eq!(
            value.map(double).map(add_one),
            value.map(|x| add_one(double(x)))
        );
    }

    #[test]
    fn prop_maybe_flat_map_with_just_is_map(value in maybe_strategy()) {
        let double = |x: i32| x.wrapping_mul(2);
        prop_assert_eq!(
            value.flat_map(|x| Maybe::Just(double(x))),
            value.map(double)
        );
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn prop_validation_functor_identity(value in validation_strategy()) {
        prop_assert_eq!(value.clone().map(|x| x), value);
    }

    #[test]
    fn prop_validation_functor_composition(value in validation_strategy()) {
        let double = |x: i32| x.wrapping_mul(2);
        let add_one = |x: i32| x.wrapping_add(1);
        prop_assert_eq!(
            value.clone().map(double).map(add_one),
            value.map(|x| add_one(double(x)))
        );
    }

    #[test]
    fn prop_validation_map_never_switches_sides(value in validation_strategy()) {
        let mapped = value.clone().map(|x| x.wrapping_add(1));
        prop_assert_eq!(mapped.is_success(), value.is_success());
    }
}
