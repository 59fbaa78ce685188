//! Solve polynomial equations of degree two or less.
//!
//! An equation like `5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0` is parsed into
//! the coefficients of its reduced form, then classified and solved exactly.
//!
//! ```rust
//! use computor::{Equation, Solution};
//!
//! let equation: Equation = "x2 - 6x + 34 = 0".parse().unwrap();
//! assert_eq!(equation.reduced_form().to_string(), "34 - 6 * X + X^2 = 0");
//!
//! let solved = equation.solve().unwrap();
//! assert_eq!(solved.solution, Solution::ComplexPair { re: 3.0, im: 5.0 });
//! ```

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

pub mod algebra;
mod equations;
pub mod render;
mod solve;

pub use algebra::{parse, reduce, CoefficientMap, SyntaxError};
pub use equations::{normalize, solve_equation, Equation, Error};
pub use render::{render, RenderOptions, Report};
pub use solve::{
    solve, DerivationLog, Solution, SolveError, Solved, MAX_DEGREE,
};
