use crate::algebra::CoefficientMap;
use std::fmt::{self, Display, Formatter};

/// Render the canonical `... = 0` form of an equation, lowest power first.
pub fn reduce(coefficients: &CoefficientMap) -> String {
    ReducedForm::new(coefficients).to_string()
}

/// The order terms are written out in.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TermOrder {
    /// `c + b * X + a * X^2`
    Ascending,
    /// `a * X^2 + b * X + c`
    Descending,
}

impl Default for TermOrder {
    fn default() -> Self { TermOrder::Ascending }
}

/// A lazily formatted view of a [`CoefficientMap`] as `polynomial = 0`.
///
/// Terms with a coefficient of zero are skipped, a coefficient of one is only
/// written for the constant term, and `X^1` is written as `X`. When every
/// term cancels out you get `0 = 0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ReducedForm<'a> {
    coefficients: &'a CoefficientMap,
    order: TermOrder,
}

impl<'a> ReducedForm<'a> {
    pub fn new(coefficients: &'a CoefficientMap) -> Self {
        ReducedForm {
            coefficients,
            order: TermOrder::default(),
        }
    }

    pub fn with_order(self, order: TermOrder) -> Self {
        ReducedForm { order, ..self }
    }
}

impl<'a> Display for ReducedForm<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut terms: Vec<(u32, f64)> =
            self.coefficients.nonzero_terms().collect();

        if terms.is_empty() {
            return write!(f, "0 = 0");
        }

        if self.order == TermOrder::Descending {
            terms.reverse();
        }

        for (i, &(power, coefficient)) in terms.iter().enumerate() {
            let negative = coefficient < 0.0;

            match (i, negative) {
                (0, true) => write!(f, "-")?,
                (0, false) => {},
                (_, true) => write!(f, " - ")?,
                (_, false) => write!(f, " + ")?,
            }

            write_term(f, power, coefficient.abs())?;
        }

        write!(f, " = 0")
    }
}

fn write_term(
    f: &mut Formatter<'_>,
    power: u32,
    magnitude: f64,
) -> fmt::Result {
    let show_magnitude = power == 0 || magnitude != 1.0;

    if show_magnitude {
        write!(f, "{}", magnitude)?;
    }

    if power > 0 {
        if show_magnitude {
            write!(f, " * ")?;
        }
        write!(f, "X")?;

        if power > 1 {
            write!(f, "^{}", power)?;
        }
    }

    Ok(())
}
