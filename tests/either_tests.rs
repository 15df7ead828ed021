//! Integration tests for `Either` and its projections.

use accrue::control::{Either, Maybe};
use rstest::rstest;

#[rstest]
fn test_sides_are_exclusive() {
    let left: Either<i32, &str> = Either::Left(1);
    assert!(left.is_left());
    assert!(!left.is_right());

    let right: Either<i32, &str> = Either::Right("ok");
    assert!(right.is_right());
    assert!(!right.is_left());
}

#[rstest]
fn test_fold_invokes_exactly_one_function() {
    let left: Either<i32, String> = Either::Left(21);
    assert_eq!(left.fold(|n| n * 2, |_| unreachable!()), 42);

    let right: Either<i32, String> = Either::Right("ok".to_string());
    assert_eq!(right.fold(|_| unreachable!(), |text| text.len()), 2);
}

#[rstest]
fn test_side_accessors_return_maybe() {
    let left: Either<i32, &str> = Either::Left(1);
    assert_eq!(left.left(), Maybe::Just(1));
    assert!(left.right().is_nothing());
}

#[rstest]
fn test_map_left_and_map_right_target_one_side() {
    let left: Either<i32, i32> = Either::Left(1);
    assert_eq!(left.map_left(|x| x + 1), Either::Left(2));
    assert_eq!(left.map_right(|x| x + 1), Either::Left(1));
}

#[rstest]
fn test_bimap() {
    let right: Either<&str, i32> = Either::Right(20);
    assert_eq!(right.bimap(|e| e.len(), |x| x * 2), Either::Right(40));
}

#[rstest]
fn test_swap() {
    let left: Either<i32, &str> = Either::Left(1);
    assert_eq!(left.swap(), Either::Right(1));
}

#[rstest]
fn test_projection_on_matching_side() {
    let left: Either<i32, String> = Either::Left(10);
    assert_eq!(left.clone().project_left().get(), 10);
    assert_eq!(left.clone().project_left().to_maybe(), Maybe::Just(10));
    assert!(left.project_left().exists(|x| *x == 10));
}

#[rstest]
fn test_projection_on_other_side_is_nothing() {
    let right: Either<i32, String> = Either::Right("ok".to_string());
    assert!(right.clone().project_left().to_maybe().is_nothing());
    assert!(!right.project_left().exists(|_| true));
}

#[rstest]
#[should_panic(expected = "left projection get called on Right")]
fn test_left_projection_get_on_right_panics() {
    let right: Either<i32, String> = Either::Right("ok".to_string());
    let _ = right.project_left().get();
}

#[rstest]
#[should_panic(expected = "right projection get called on Left")]
fn test_right_projection_get_on_left_panics() {
    let left: Either<i32, String> = Either::Left(1);
    let _ = left.project_right().get();
}

#[rstest]
fn test_projection_map_rewraps_the_untouched_side() {
    let left: Either<i32, String> = Either::Left(10);
    assert_eq!(left.project_left().map(|x| x * 2), Either::Left(20));

    let right: Either<i32, String> = Either::Right("ok".to_string());
    assert_eq!(
        right.project_left().map(|x| x * 2),
        Either::Right("ok".to_string())
    );
}

#[rstest]
fn test_join_left_flattens_a_nested_left() {
    let nested: Either<Either<i32, &str>, &str> = Either::Left(Either::Left(1));
    assert_eq!(nested.join_left(), Either::Left(1));

    let nested: Either<Either<i32, &str>, &str> = Either::Left(Either::Right("inner"));
    assert_eq!(nested.join_left(), Either::Right("inner"));

    let outer: Either<Either<i32, &str>, &str> = Either::Right("outer");
    assert_eq!(outer.join_left(), Either::Right("outer"));
}

#[rstest]
fn test_join_right_flattens_a_nested_right() {
    let nested: Either<i32, Either<i32, &str>> = Either::Right(Either::Right("inner"));
    assert_eq!(nested.join_right(), Either::Right("inner"));

    let nested: Either<i32, Either<i32, &str>> = Either::Right(Either::Left(1));
    assert_eq!(nested.join_right(), Either::Left(1));

    let outer: Either<i32, Either<i32, &str>> = Either::Left(2);
    assert_eq!(outer.join_right(), Either::Left(2));
}

#[rstest]
fn test_result_round_trip() {
    let either: Either<String, i32> = Ok(1).into();
    assert_eq!(either, Either::Right(1));

    let result: Result<i32, String> = either.into();
    assert_eq!(result, Ok(1));

    let either: Either<String, i32> = Err("broken".to_string()).into();
    assert_eq!(either, Either::Left("broken".to_string()));
}

#[rstest]
fn test_display() {
    let left: Either<i32, &str> = Either::Left(1);
    assert_eq!(left.to_string(), "Left(1)");

    let right: Either<i32, &str> = Either::Right("ok");
    assert_eq!(right.to_string(), "Right(ok)");
}
