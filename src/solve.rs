use crate::{
    algebra::{reduce, CoefficientMap},
    render::format_significant,
};
use approx::{AbsDiffEq, RelativeEq};
use arrayvec::ArrayVec;
use num_complex::Complex64;
use std::{slice, vec};

/// The highest degree we know how to solve.
pub const MAX_DEGREE: u32 = 2;

/// Classify the polynomial described by `coefficients` and find its roots.
///
/// Polynomials with a degree above [`MAX_DEGREE`] are rejected, but the
/// [`SolveError::DegreeTooHigh`] error still carries the reduced form and
/// degree so they can be shown to the user.
pub fn solve(coefficients: &CoefficientMap) -> Result<Solved, SolveError> {
    let reduced_form = reduce(coefficients);
    let degree = coefficients.degree();
    log::debug!("Reduced form is \"{}\" (degree {})", reduced_form, degree);

    if degree > MAX_DEGREE {
        return Err(SolveError::DegreeTooHigh {
            degree,
            reduced_form,
        });
    }

    let a = lookup(coefficients, 2)?;
    let b = lookup(coefficients, 1)?;
    let c = lookup(coefficients, 0)?;

    let mut steps = DerivationLog::new();
    let solution = classify(a, b, c, &mut steps);
    log::debug!("Solved a={}, b={}, c={} as {:?}", a, b, c, solution);

    Ok(Solved {
        solution,
        steps,
        reduced_form,
        degree,
    })
}

fn lookup(coefficients: &CoefficientMap, power: u32) -> Result<f64, SolveError> {
    coefficients
        .get(power)
        .ok_or(SolveError::MissingCoefficient { power })
}

/// Pick the simplest closed form for `a*x^2 + b*x + c = 0`, recording each
/// step along the way.
///
/// The order of these checks matters when several coefficients are zero.
fn classify(a: f64, b: f64, c: f64, steps: &mut DerivationLog) -> Solution {
    match (a == 0.0, b == 0.0, c == 0.0) {
        (true, true, true) => {
            steps.push("a = 0, b = 0, c = 0 ⇒ 0 = 0 holds for every x");
            Solution::AnyNumber
        },
        (true, true, false) => {
            steps.push(format!(
                "a = 0, b = 0 ⇒ {} = 0 is a contradiction",
                num(c)
            ));
            Solution::NoRoots
        },
        (true, false, true) => {
            steps.push(format!("a = 0, c = 0 ⇒ {}·x = 0 ⇒ x = 0", num(b)));
            Solution::SingleRoot(0.0)
        },
        (true, false, false) => {
            let x = -c / b;
            steps.push("a = 0 ⇒ b·x + c = 0 ⇒ x = −c / b");
            steps.push(format!("x = −{} / {} = {}", num(c), num(b), sig(x)));
            Solution::SingleRoot(x)
        },
        (false, true, true) => {
            steps.push(format!("b = 0, c = 0 ⇒ {}·x² = 0 ⇒ x = 0", num(a)));
            Solution::SingleRoot(0.0)
        },
        (false, true, false) => depressed_quadratic(a, c, steps),
        (false, false, true) => {
            let x = -b / a;
            steps.push("c = 0 ⇒ x·(a·x + b) = 0 ⇒ x = 0 or x = −b / a");
            steps.push(format!("x = −{} / {} = {}", num(b), num(a), sig(x)));
            Solution::TwoRoots(0.0, x)
        },
        (false, false, false) => general_quadratic(a, b, c, steps),
    }
}

/// `a*x^2 + c = 0`, so `x^2 = -c/a`.
fn depressed_quadratic(a: f64, c: f64, steps: &mut DerivationLog) -> Solution {
    let square = -c / a;
    steps.push("b = 0 ⇒ a·x² + c = 0 ⇒ x² = −c / a");
    steps.push(format!("x² = −{} / {} = {}", num(c), num(a), sig(square)));

    if square > 0.0 {
        let root = square.sqrt();
        steps.push(format!(
            "x² > 0 ⇒ x = ±√(−c / a) = ±√{} = ±{}",
            sig(square),
            sig(root)
        ));
        Solution::TwoRoots(root, -root)
    } else {
        steps.push("x² < 0 ⇒ no real number squares to a negative");
        Solution::NoRoots
    }
}

fn general_quadratic(
    a: f64,
    b: f64,
    c: f64,
    steps: &mut DerivationLog,
) -> Solution {
    let discriminant = b * b - 4.0 * a * c;
    steps.push(format!(
        "D = b² − 4ac ⇒ {}² − 4·{}·{} = {}",
        num(b),
        num(a),
        num(c),
        sig(discriminant)
    ));

    if discriminant > 0.0 {
        let sqrt_d = discriminant.sqrt();
        let first = (-b + sqrt_d) / (2.0 * a);
        let second = (-b - sqrt_d) / (2.0 * a);

        steps.push("D > 0 ⇒ x = (−b ± √D) / 2a");
        steps.push(format!(
            "x₁ = (−{} + √{}) / (2·{}) = {}",
            num(b),
            num(discriminant),
            num(a),
            sig(first)
        ));
        steps.push(format!(
            "x₂ = (−{} − √{}) / (2·{}) = {}",
            num(b),
            num(discriminant),
            num(a),
            sig(second)
        ));

        Solution::TwoRoots(first, second)
    } else if discriminant == 0.0 {
        let x = -b / (2.0 * a);
        steps.push(format!(
            "D = 0 ⇒ x = −b / 2a = −{} / (2·{}) = {}",
            num(b),
            num(a),
            sig(x)
        ));

        Solution::SingleRoot(x)
    } else {
        let re = -b / (2.0 * a);
        let im = discriminant.abs().sqrt() / (2.0 * a);

        steps.push("D < 0 ⇒ x = (−b ± i·√|D|) / 2a");
        steps.push(format!("Re = −{} / (2·{}) = {}", num(b), num(a), sig(re)));
        steps.push(format!(
            "Im = √{} / (2·{}) = {}",
            num(discriminant.abs()),
            num(a),
            sig(im)
        ));

        Solution::ComplexPair { re, im }
    }
}

/// Format a value being substituted into a formula, wrapping negatives in
/// parentheses so `−(-4)` stays readable.
fn num(value: f64) -> String {
    if value < 0.0 {
        format!("({})", sig(value))
    } else {
        sig(value)
    }
}

fn sig(value: f64) -> String { format_significant(value, 6) }

/// Everything we learned while solving an equation.
#[derive(Debug, Clone, PartialEq)]
pub struct Solved {
    pub solution: Solution,
    pub steps: DerivationLog,
    pub reduced_form: String,
    pub degree: u32,
}

/// The roots of a polynomial of degree two or less.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Solution {
    /// No real number satisfies the equation (e.g. `4 = 0` or
    /// `x^2 + 5 = 0`).
    NoRoots,
    /// The polynomial is identically zero.
    AnyNumber,
    SingleRoot(f64),
    TwoRoots(f64, f64),
    /// The roots `re ± i*im`.
    ComplexPair { re: f64, im: f64 },
}

impl Solution {
    /// The real roots, in the order they were derived.
    pub fn real_roots(&self) -> ArrayVec<[f64; 2]> {
        let mut roots = ArrayVec::new();

        match *self {
            Solution::SingleRoot(x) => roots.push(x),
            Solution::TwoRoots(x1, x2) => {
                roots.push(x1);
                roots.push(x2);
            },
            _ => {},
        }

        roots
    }

    /// Every root as a complex number.
    pub fn complex_roots(&self) -> ArrayVec<[Complex64; 2]> {
        match *self {
            Solution::ComplexPair { re, im } => ArrayVec::from([
                Complex64::new(re, im),
                Complex64::new(re, -im),
            ]),
            _ => self
                .real_roots()
                .into_iter()
                .map(|x| Complex64::new(x, 0.0))
                .collect(),
        }
    }

    fn compare_with<F>(&self, other: &Solution, mut eq: F) -> bool
    where
        F: FnMut(f64, f64) -> bool,
    {
        match (*self, *other) {
            (Solution::NoRoots, Solution::NoRoots)
            | (Solution::AnyNumber, Solution::AnyNumber) => true,
            (Solution::SingleRoot(left), Solution::SingleRoot(right)) => {
                eq(left, right)
            },
            (Solution::TwoRoots(l1, l2), Solution::TwoRoots(r1, r2)) => {
                eq(l1, r1) && eq(l2, r2)
            },
            (
                Solution::ComplexPair { re: lr, im: li },
                Solution::ComplexPair { re: rr, im: ri },
            ) => eq(lr, rr) && eq(li, ri),
            _ => false,
        }
    }
}

impl AbsDiffEq for Solution {
    type Epsilon = f64;

    fn default_epsilon() -> f64 { f64::default_epsilon() }

    fn abs_diff_eq(&self, other: &Solution, epsilon: f64) -> bool {
        self.compare_with(other, |l, r| l.abs_diff_eq(&r, epsilon))
    }
}

impl RelativeEq for Solution {
    fn default_max_relative() -> f64 { f64::default_max_relative() }

    fn relative_eq(
        &self,
        other: &Solution,
        epsilon: f64,
        max_relative: f64,
    ) -> bool {
        self.compare_with(other, |l, r| {
            l.relative_eq(&r, epsilon, max_relative)
        })
    }
}

/// The ordered list of algebraic steps taken while solving an equation.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DerivationLog {
    steps: Vec<String>,
}

impl DerivationLog {
    pub fn new() -> Self { DerivationLog::default() }

    pub fn push<S: Into<String>>(&mut self, step: S) {
        self.steps.push(step.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.steps.iter().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize { self.steps.len() }

    pub fn is_empty(&self) -> bool { self.steps.is_empty() }
}

impl IntoIterator for DerivationLog {
    type IntoIter = vec::IntoIter<String>;
    type Item = String;

    fn into_iter(self) -> Self::IntoIter { self.steps.into_iter() }
}

impl<'a> IntoIterator for &'a DerivationLog {
    type IntoIter = slice::Iter<'a, String>;
    type Item = &'a String;

    fn into_iter(self) -> Self::IntoIter { self.steps.iter() }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolveError {
    #[error("The polynomial degree is strictly greater than 2, I can't solve.")]
    DegreeTooHigh { degree: u32, reduced_form: String },
    /// The [`CoefficientMap`] didn't come from the parser and is missing one
    /// of the first three powers.
    #[error("Error during evaluation, the coefficient for x^{power} is missing")]
    MissingCoefficient { power: u32 },
}
