//! Function-shaping macros: currying and prefix partial application.
//!
//! [`curry2!`] through [`curry6!`] convert a multi-argument function into
//! a chain of single-argument closures; [`partial!`] fixes the leading
//! arguments of a function and leaves the rest open. Both produce `Fn`
//! closures that can be stored and invoked repeatedly, at the cost of a
//! [`Clone`] bound on fixed argument values.
//!
//! # Examples
//!
//! ```rust
//! use accrue::{curry2, partial};
//!
//! fn power(base: u32, exponent: u32) -> u32 { base.pow(exponent) }
//!
//! let of_two = curry2!(power)(2);
//! assert_eq!(of_two(10), 1024);
//!
//! let square = partial!(|e: u32, b: u32| b.pow(e), 2, __);
//! assert_eq!(square(12), 144);
//! ```

mod curry_macro;
mod partial_macro;

// The macros live at the crate root via #[macro_export]; mirror them here
// so `use accrue::compose::*` works as well.
pub use crate::curry2;
pub use crate::curry3;
pub use crate::curry4;
pub use crate::curry5;
pub use crate::curry6;
pub use crate::partial;
