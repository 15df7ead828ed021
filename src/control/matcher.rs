//! First-match-wins pattern dispatch over a value.
//!
//! [`PatternMatcher`] collects rules in registration order; evaluating it
//! tries each rule against the input and returns the first result produced,
//! never consulting later rules once one matches. Rules come in two shapes:
//! an *extractor* (`Fn(&A) -> Maybe<B>` plus a handler for the extracted
//! value) and a *predicate* (`Fn(&A) -> bool` plus a handler invoked when it
//! holds). A trailing [`with_default`](PatternMatcher::with_default) rule
//! always matches, making the matcher total.
//!
//! # Examples
//!
//! ```rust
//! use accrue::control::PatternMatcher;
//!
//! let matcher = PatternMatcher::new()
//!     .with_predicate(|x: &i32| *x == 0, || "zero".to_string())
//!     .with_predicate(|x: &i32| *x < 0, || "negative".to_string())
//!     .with_default(|| "positive".to_string());
//!
//! assert_eq!(matcher.get(&0).get(), "zero");
//! assert_eq!(matcher.get(&-3).get(), "negative");
//! assert_eq!(matcher.get(&7).get(), "positive");
//! ```

use super::maybe::Maybe;

/// An ordered collection of match rules producing values of type `C`.
///
/// Rules are tried strictly in registration order; the first rule that
/// matches decides the result and later rules are not evaluated.
///
/// # Type Parameters
///
/// * `A` - The type of value being matched
/// * `C` - The type produced by a matching rule
pub struct PatternMatcher<'a, A, C> {
    rules: Vec<Box<dyn Fn(&A) -> Maybe<C> + 'a>>,
}

impl<'a, A, C> PatternMatcher<'a, A, C> {
    /// Creates a matcher with no rules; it matches nothing until rules are
    /// added.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rules have been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    // =========================================================================
    // Rule Registration
    // =========================================================================

    /// Appends an extractor rule.
    ///
    /// The rule matches when `extractor` returns `Just`; `handler` then
    /// maps the extracted value to the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use accrue::control::{Maybe, PatternMatcher};
    ///
    /// let matcher = PatternMatcher::new().with_extractor(
    ///     |text: &String| text.parse::<i32>().ok().into(),
    ///     |number| number * 2,
    /// );
    ///
    /// assert_eq!(matcher.get(&"21".to_string()), Maybe::Just(42));
    /// assert!(matcher.get(&"nope".to_string()).is_nothing());
    /// ```
    #[must_use]
    pub fn with_extractor<B, E, H>(mut self, extractor: E, handler: H) -> Self
    where
        E: Fn(&A) -> Maybe<B> + 'a,
        H: Fn(B) -> C + 'a,
    {
        self.rules
            .push(Box::new(move |value| extractor(value).map(&handler)));
        self
    }

    /// Appends a predicate rule.
    ///
    /// The rule matches when `predicate` holds; `handler` then produces the
    /// result.
    #[must_use]
    pub fn with_predicate<P, H>(mut self, predicate: P, handler: H) -> Self
    where
        P: Fn(&A) -> bool + 'a,
        H: Fn() -> C + 'a,
    {
        self.rules.push(Box::new(move |value| {
            if predicate(value) {
                Maybe::Just(handler())
            } else {
                Maybe::Nothing
            }
        }));
        self
    }

    /// Appends a rule that always matches.
    ///
    /// Registering this last makes the matcher total; rules registered
    /// after it are unreachable.
    #[must_use]
    pub fn with_default<H>(self, handler: H) -> Self
    where
        H: Fn() -> C + 'a,
    {
        self.with_predicate(|_| true, handler)
    }

    // =========================================================================
    // Evaluation
    // =========================================================================

    /// Evaluates the rules against `value` in registration order and
    /// returns the first match, or `Nothing` if no rule matches.
    pub fn get(&self, value: &A) -> Maybe<C> {
        self.rules
            .iter()
            .fold(Maybe::Nothing, |result, rule| result.or(|| rule(value)))
    }

    /// Like [`get`](PatternMatcher::get), but falls back to `default` when
    /// no rule matches.
    pub fn get_or_else<F>(&self, value: &A, default: F) -> C
    where
        F: FnOnce() -> C,
    {
        self.get(value).get_or_else(default)
    }

    /// Evaluates the rules for their side effects, discarding the produced
    /// value; returns `true` if some rule matched.
    pub fn run(&self, value: &A) -> bool {
        self.get(value).is_just()
    }
}

impl<A, C> Default for PatternMatcher<'_, A, C> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_first_matching_rule_wins() {
        let matcher = PatternMatcher::new()
            .with_predicate(|x: &i32| *x > 0, || "first")
            .with_predicate(|x: &i32| *x > 10, || "second");

        assert_eq!(matcher.get(&42), Maybe::Just("first"));
    }

    #[rstest]
    fn test_later_rules_not_evaluated_after_match() {
        let visited = Cell::new(false);
        let matcher = PatternMatcher::new()
            .with_predicate(|_: &i32| true, || 1)
            .with_predicate(
                |_| {
                    visited.set(true);
                    true
                },
                || 2,
            );

        assert_eq!(matcher.get(&0), Maybe::Just(1));
        assert!(!visited.get());
    }

    #[rstest]
    fn test_no_match_yields_nothing() {
        let matcher = PatternMatcher::new().with_predicate(|x: &i32| *x < 0, || "negative");

        assert!(matcher.get(&5).is_nothing());
        assert!(!matcher.run(&5));
    }

    #[rstest]
    fn test_empty_matcher_matches_nothing() {
        let matcher: PatternMatcher<'_, i32, &str> = PatternMatcher::new();

        assert!(matcher.is_empty());
        assert!(matcher.get(&0).is_nothing());
    }

    #[rstest]
    fn test_extractor_feeds_handler() {
        let matcher = PatternMatcher::new().with_extractor(
            |text: &String| text.strip_prefix("id:").map(str::to_string).into(),
            |id| format!("found {id}"),
        );

        assert_eq!(
            matcher.get(&"id:7".to_string()),
            Maybe::Just("found 7".to_string())
        );
        assert!(matcher.get(&"name:7".to_string()).is_nothing());
    }

    #[rstest]
    fn test_default_makes_matcher_total() {
        let matcher = PatternMatcher::new()
            .with_predicate(|x: &i32| *x == 0, || "zero")
            .with_default(|| "other");

        assert_eq!(matcher.get_or_else(&0, || "unused"), "zero");
        assert_eq!(matcher.get_or_else(&99, || "unused"), "other");
        assert!(matcher.run(&99));
    }

    #[rstest]
    fn test_rules_are_counted() {
        let matcher: PatternMatcher<'_, i32, i32> = PatternMatcher::new()
            .with_predicate(|_| false, || 0)
            .with_default(|| 1);

        assert_eq!(matcher.len(), 2);
        assert!(!matcher.is_empty());
    }
}
