//! Integration tests for `Maybe`.

use accrue::control::Maybe;
use rstest::rstest;

#[rstest]
fn test_just_carries_exactly_one_value() {
    let value = Maybe::Just(42);
    assert!(value.is_just());
    assert!(!value.is_nothing());
    assert_eq!(value.get(), 42);
}

#[rstest]
#[should_panic(expected = "get called on Nothing")]
fn test_get_on_nothing_panics() {
    let nothing: Maybe<i32> = Maybe::Nothing;
    let _ = nothing.get();
}

#[rstest]
fn test_get_or_else_only_runs_on_nothing() {
    assert_eq!(Maybe::Just(1).get_or_else(|| unreachable!()), 1);
    let nothing: Maybe<i32> = Maybe::Nothing;
    assert_eq!(nothing.get_or_else(|| 99), 99);
}

#[rstest]
fn test_map_skips_function_on_nothing() {
    let nothing: Maybe<i32> = Maybe::Nothing;
    let mapped = nothing.map(|_| -> i32 { unreachable!() });
    assert!(mapped.is_nothing());
}

#[rstest]
fn test_flat_map_chains() {
    let parse = |text: &str| -> Maybe<i32> { text.parse().ok().into() };
    assert_eq!(Maybe::Just("42").flat_map(parse), Maybe::Just(42));
    assert!(Maybe::Just("nope").flat_map(parse).is_nothing());
}

#[rstest]
fn test_filter() {
    assert_eq!(Maybe::Just(4).filter(|x| x % 2 == 0), Maybe::Just(4));
    assert!(Maybe::Just(3).filter(|x| x % 2 == 0).is_nothing());
}

#[rstest]
fn test_or_is_lazy() {
    let value = Maybe::Just(1).or(|| unreachable!());
    assert_eq!(value, Maybe::Just(1));

    let nothing: Maybe<i32> = Maybe::Nothing;
    assert_eq!(nothing.or(|| Maybe::Just(2)), Maybe::Just(2));
}

#[rstest]
fn test_flatten() {
    let nested = Maybe::Just(Maybe::Just(1));
    assert_eq!(nested.flatten(), Maybe::Just(1));

    let inner_nothing: Maybe<Maybe<i32>> = Maybe::Just(Maybe::Nothing);
    assert!(inner_nothing.flatten().is_nothing());
}

#[rstest]
fn test_iteration_yields_zero_or_one_element() {
    let just: Vec<i32> = Maybe::Just(7).into_iter().collect();
    assert_eq!(just, vec![7]);

    let nothing: Vec<i32> = Maybe::<i32>::Nothing.into_iter().collect();
    assert!(nothing.is_empty());
}

#[rstest]
fn test_option_round_trip() {
    let maybe: Maybe<i32> = Some(5).into();
    assert_eq!(maybe, Maybe::Just(5));
    let option: Option<i32> = maybe.into();
    assert_eq!(option, Some(5));

    let maybe: Maybe<i32> = None.into();
    assert!(maybe.is_nothing());
}

#[rstest]
fn test_display() {
    assert_eq!(Maybe::Just(1).to_string(), "Just(1)");
    assert_eq!(Maybe::<i32>::Nothing.to_string(), "Nothing");
}
