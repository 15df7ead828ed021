//! Macros converting multi-argument functions to curried form.
//!
//! `curry2!` through `curry6!` turn an n-argument `Fn` into a chain of
//! single-argument closures. The source function is shared behind an
//! [`Rc`](std::rc::Rc) so every stage of the chain implements `Fn` and can
//! be invoked any number of times; arguments fixed at earlier stages are
//! cloned into each later call, so every argument type except the last
//! must implement [`Clone`].

/// Converts a 2-argument function into a curried form.
///
/// `curry2!(f)` returns a closure such that `curry2!(f)(a)(b) == f(a, b)`.
/// The intermediate closure is reusable.
///
/// # Examples
///
/// ```rust
/// use accrue::curry2;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let curried = curry2!(add);
/// let add_ten = curried(10);
///
/// assert_eq!(add_ten(5), 15);
/// assert_eq!(add_ten(32), 42);
/// assert_eq!(curried(1)(2), add(1, 2));
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| function(::std::clone::Clone::clone(&first), second)
        }
    }};
}

/// Converts a 3-argument function into a curried form.
///
/// `curry3!(f)(a)(b)(c) == f(a, b, c)`; every intermediate stage is
/// reusable.
///
/// # Examples
///
/// ```rust
/// use accrue::curry3;
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 {
///     value.max(low).min(high)
/// }
///
/// let clamp_percent = curry3!(clamp)(0)(100);
/// assert_eq!(clamp_percent(150), 100);
/// assert_eq!(clamp_percent(-3), 0);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    function(
                        ::std::clone::Clone::clone(&first),
                        ::std::clone::Clone::clone(&second),
                        third,
                    )
                }
            }
        }
    }};
}

/// Converts a 4-argument function into a curried form.
///
/// # Examples
///
/// ```rust
/// use accrue::curry4;
///
/// fn sum(a: i32, b: i32, c: i32, d: i32) -> i32 { a + b + c + d }
///
/// assert_eq!(curry4!(sum)(1)(2)(3)(4), 10);
/// ```
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    let function = ::std::rc::Rc::clone(&function);
                    let first = ::std::clone::Clone::clone(&first);
                    let second = ::std::clone::Clone::clone(&second);
                    move |fourth| {
                        function(
                            ::std::clone::Clone::clone(&first),
                            ::std::clone::Clone::clone(&second),
                            ::std::clone::Clone::clone(&third),
                            fourth,
                        )
                    }
                }
            }
        }
    }};
}

/// Converts a 5-argument function into a curried form.
///
/// # Examples
///
/// ```rust
/// use accrue::curry5;
///
/// fn sum(a: i32, b: i32, c: i32, d: i32, e: i32) -> i32 {
///     a + b + c + d + e
/// }
///
/// assert_eq!(curry5!(sum)(1)(2)(3)(4)(5), 15);
/// ```
#[macro_export]
macro_rules! curry5 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    let function = ::std::rc::Rc::clone(&function);
                    let first = ::std::clone::Clone::clone(&first);
                    let second = ::std::clone::Clone::clone(&second);
                    move |fourth| {
                        let function = ::std::rc::Rc::clone(&function);
                        let first = ::std::clone::Clone::clone(&first);
                        let second = ::std::clone::Clone::clone(&second);
                        let third = ::std::clone::Clone::clone(&third);
                        move |fifth| {
                            function(
                                ::std::clone::Clone::clone(&first),
                                ::std::clone::Clone::clone(&second),
                                ::std::clone::Clone::clone(&third),
                                ::std::clone::Clone::clone(&fourth),
                                fifth,
                            )
                        }
                    }
                }
            }
        }
    }};
}

/// Converts a 6-argument function into a curried form.
///
/// # Examples
///
/// ```rust
/// use accrue::curry6;
///
/// fn sum(a: i32, b: i32, c: i32, d: i32, e: i32, f: i32) -> i32 {
///     a + b + c + d + e + f
/// }
///
/// assert_eq!(curry6!(sum)(1)(2)(3)(4)(5)(6), 21);
/// ```
#[macro_export]
macro_rules! curry6 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    let function = ::std::rc::Rc::clone(&function);
                    let first = ::std::clone::Clone::clone(&first);
                    let second = ::std::clone::Clone::clone(&second);
                    move |fourth| {
                        let function = ::std::rc::Rc::clone(&function);
                        let first = ::std::clone::Clone::clone(&first);
                        let second = ::std::clone::Clone::clone(&second);
                        let third = ::std::clone::Clone::clone(&third);
                        move |fifth| {
                            let function = ::std::rc::Rc::clone(&function);
                            let first = ::std::clone::Clone::clone(&first);
                            let second = ::std::clone::Clone::clone(&second);
                            let third = ::std::clone::Clone::clone(&third);
                            let fourth = ::std::clone::Clone::clone(&fourth);
                            move |sixth| {
                                function(
                                    ::std::clone::Clone::clone(&first),
                                    ::std::clone::Clone::clone(&second),
                                    ::std::clone::Clone::clone(&third),
                                    ::std::clone::Clone::clone(&fourth),
                                    ::std::clone::Clone::clone(&fifth),
                                    sixth,
                                )
                            }
                        }
                    }
                }
            }
        }
    }};
}
