use crate::{
    algebra::{parse, CoefficientMap, ReducedForm, SyntaxError},
    solve::{self, SolveError, Solved},
};
use std::str::FromStr;

/// A polynomial equation in `x`, already rearranged into `polynomial = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    pub(crate) coefficients: CoefficientMap,
}

impl Equation {
    pub fn coefficients(&self) -> &CoefficientMap { &self.coefficients }

    pub fn degree(&self) -> u32 { self.coefficients.degree() }

    pub fn reduced_form(&self) -> ReducedForm<'_> {
        ReducedForm::new(&self.coefficients)
    }

    pub fn solve(&self) -> Result<Solved, SolveError> {
        solve::solve(&self.coefficients)
    }
}

impl From<CoefficientMap> for Equation {
    fn from(mut coefficients: CoefficientMap) -> Self {
        coefficients.fill_missing();
        Equation { coefficients }
    }
}

impl FromStr for Equation {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        log::trace!("Normalized {:?} to {:?}", s, normalized);

        Ok(Equation {
            coefficients: parse(&normalized)?,
        })
    }
}

/// Case-fold the equation and strip out all whitespace, which is the form
/// [`parse()`] expects.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Parse an equation and solve it in one go.
pub fn solve_equation(raw: &str) -> Result<Solved, Error> {
    let equation: Equation = raw.parse()?;
    let solved = equation.solve()?;

    Ok(solved)
}

/// Anything that can stop us from solving an equation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Solve(#[from] SolveError),
}
