//! Turning a solved equation into text for a human.

use crate::{
    algebra::TermOrder,
    equations::{Equation, Error},
    solve::Solution,
};
use num_complex::Complex64;
use std::fmt::{self, Display, Formatter};

/// How much detail to show, and in which order to write terms.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct RenderOptions {
    /// Show each step of the derivation.
    pub verbose: bool,
    /// Only show the solution.
    pub silent: bool,
    pub order: TermOrder,
}

/// The lines to show the user, plus whatever stopped us from solving the
/// equation.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub lines: Vec<String>,
    pub error: Option<Error>,
}

impl Report {
    pub fn is_success(&self) -> bool { self.error.is_none() }
}

/// Parse and solve `raw`, collecting everything the user should see.
///
/// A syntax error produces no lines at all. If the degree is too high you
/// still get the reduced form and degree.
pub fn render(raw: &str, options: &RenderOptions) -> Report {
    let mut lines = Vec::new();

    let equation: Equation = match raw.parse() {
        Ok(equation) => equation,
        Err(e) => {
            return Report {
                lines,
                error: Some(Error::Syntax(e)),
            }
        },
    };

    if !options.silent {
        lines.push(format!(
            "Reduced form: {}",
            equation.reduced_form().with_order(options.order)
        ));
        lines.push(format!("Polynomial degree: {}", equation.degree()));
    }

    let solved = match equation.solve() {
        Ok(solved) => solved,
        Err(e) => {
            return Report {
                lines,
                error: Some(Error::Solve(e)),
            }
        },
    };

    if !options.silent {
        if options.verbose {
            lines.push(String::from("Steps:"));
            lines.extend(solved.steps.iter().map(|step| format!("  {}", step)));
        }

        lines.push(headline(&solved.solution).to_string());
    }

    lines.push(solved.solution.to_string());

    Report { lines, error: None }
}

fn headline(solution: &Solution) -> &'static str {
    match solution {
        Solution::NoRoots => "The equation has no solution:",
        Solution::AnyNumber => "Every real number is a solution:",
        Solution::SingleRoot(_) => "The solution is:",
        Solution::TwoRoots(..) => "The two solutions are:",
        Solution::ComplexPair { .. } => {
            "Discriminant is strictly negative, the two complex solutions are:"
        },
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Solution::NoRoots => write!(f, "no solution"),
            Solution::AnyNumber => write!(f, "any real number"),
            Solution::ComplexPair { .. } => {
                let roots: Vec<String> =
                    self.complex_roots().iter().map(format_complex).collect();
                write!(f, "{}", roots.join(", "))
            },
            _ => {
                let roots: Vec<String> = self
                    .real_roots()
                    .iter()
                    .map(|&x| format_significant(x, 6))
                    .collect();
                write!(f, "{}", roots.join(", "))
            },
        }
    }
}

fn format_complex(z: &Complex64) -> String {
    let sign = if z.im < 0.0 { '-' } else { '+' };

    format!(
        "{}{}{}i",
        format_significant(z.re, 6),
        sign,
        format_significant(z.im.abs(), 6)
    )
}

/// Format a number with `digits` significant digits, the same way `printf`'s
/// `%g` does.
///
/// Trailing zeroes are dropped, and exponent notation is only used for very
/// large or very small numbers.
pub fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 {
        return String::from("0");
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let digits = digits.max(1);
    // let the formatter do the rounding, then read the exponent back out
    let scientific = format!("{:.*e}", digits - 1, value);
    let split = scientific.find('e').unwrap_or_else(|| scientific.len());
    let (mantissa, exponent) = scientific.split_at(split);
    let exponent: i32 = exponent
        .trim_start_matches('e')
        .parse()
        .unwrap_or_default();

    if exponent < -4 || exponent >= digits as i32 {
        format!("{}e{}", trim_zeros(mantissa), exponent)
    } else {
        let decimals = (digits as i32 - 1 - exponent) as usize;
        trim_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
