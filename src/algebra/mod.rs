//! Reading an equation and reducing it to its coefficients.

mod coefficients;
mod parse;
mod proptests;
mod reduce;

pub use coefficients::CoefficientMap;
pub use parse::{parse, Sign, SyntaxError, TokenKind};
pub use reduce::{reduce, ReducedForm, TermOrder};
