//! The `partial!` macro for prefix partial application.
//!
//! `partial!` fixes the leading arguments of a function and returns a
//! closure over the rest. Each remaining parameter is spelled out with a
//! `__` placeholder so the call site shows the full arity at a glance.

/// Fixes a prefix of a function's arguments, returning a closure over the
/// remaining ones.
///
/// Write one fixed value per bound argument, then one `__` (double
/// underscore) per remaining parameter. The placeholders are matched as
/// literal tokens; do not import anything named `__`. Functions of 2 to 5
/// arguments are supported, and at least one argument must stay open.
/// Supplying the wrong number of placeholders fails at compile time.
///
/// Fixed values are cloned into each invocation, so they must implement
/// [`Clone`] and the resulting closure is freely reusable.
///
/// # Examples
///
/// ## Fixing the first argument
///
/// ```rust
/// use accrue::partial;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let add_five = partial!(add, 5, __);
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
/// ```
///
/// ## Fixing two of three arguments
///
/// ```rust
/// use accrue::partial;
///
/// fn replace(text: &str, from: &str, to: &str) -> String {
///     text.replace(from, to)
/// }
///
/// let censor = partial!(replace, "the password is hunter2", "hunter2", __);
/// assert_eq!(censor("****"), "the password is ****");
/// ```
#[macro_export]
macro_rules! partial {
    // =========================================================================
    // 5-argument functions
    // =========================================================================
    ($function:expr, $first:expr, __, __, __, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second, third, fourth, fifth| {
            function(first.clone(), second, third, fourth, fifth)
        }
    }};
    ($function:expr, $first:expr, $second:expr, __, __, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        move |third, fourth, fifth| function(first.clone(), second.clone(), third, fourth, fifth)
    }};
    ($function:expr, $first:expr, $second:expr, $third:expr, __, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        let third = $third;
        move |fourth, fifth| {
            function(first.clone(), second.clone(), third.clone(), fourth, fifth)
        }
    }};
    ($function:expr, $first:expr, $second:expr, $third:expr, $fourth:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        let third = $third;
        let fourth = $fourth;
        move |fifth| {
            function(
                first.clone(),
                second.clone(),
                third.clone(),
                fourth.clone(),
                fifth,
            )
        }
    }};

    // =========================================================================
    // 4-argument functions
    // =========================================================================
    ($function:expr, $first:expr, __, __, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second, third, fourth| function(first.clone(), second, third, fourth)
    }};
    ($function:expr, $first:expr, $second:expr, __, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        move |third, fourth| function(first.clone(), second.clone(), third, fourth)
    }};
    ($function:expr, $first:expr, $second:expr, $third:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        let third = $third;
        move |fourth| function(first.clone(), second.clone(), third.clone(), fourth)
    }};

    // =========================================================================
    // 3-argument functions
    // =========================================================================
    ($function:expr, $first:expr, __, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second, third| function(first.clone(), second, third)
    }};
    ($function:expr, $first:expr, $second:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        move |third| function(first.clone(), second.clone(), third)
    }};

    // =========================================================================
    // 2-argument functions
    // =========================================================================
    ($function:expr, $first:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second| function(first.clone(), second)
    }};
}
