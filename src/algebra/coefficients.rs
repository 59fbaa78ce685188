use num_complex::Complex64;
use std::{
    collections::BTreeMap,
    iter::{Extend, FromIterator},
};

/// The exponents every parsed equation is guaranteed to have an entry for.
pub(crate) const ALWAYS_PRESENT: [u32; 3] = [0, 1, 2];

/// A polynomial in `x`, stored as a mapping from exponent to coefficient.
///
/// Entries are kept in ascending order of exponent and are never pruned, so
/// a term which cancels out (e.g. `x^5 - x^5`) still has an entry with a
/// coefficient of zero.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CoefficientMap {
    terms: BTreeMap<u32, f64>,
}

impl CoefficientMap {
    pub fn new() -> Self { CoefficientMap::default() }

    /// Get the coefficient for `x^power`, if that exponent has been seen.
    pub fn get(&self, power: u32) -> Option<f64> {
        self.terms.get(&power).copied()
    }

    /// Get the coefficient for `x^power`, treating missing exponents as `0`.
    pub fn coefficient(&self, power: u32) -> f64 {
        self.get(power).unwrap_or(0.0)
    }

    /// Add `value` to the coefficient for `x^power`, inserting a `0` entry
    /// first if the exponent hasn't been seen yet.
    pub fn accumulate(&mut self, power: u32, value: f64) {
        *self.terms.entry(power).or_insert(0.0) += value;
    }

    /// Make sure the constant, linear, and quadratic terms all have an entry.
    pub(crate) fn fill_missing(&mut self) {
        for &power in &ALWAYS_PRESENT {
            self.terms.entry(power).or_insert(0.0);
        }
    }

    /// The highest exponent with a nonzero coefficient, or `0` when every
    /// coefficient is zero.
    pub fn degree(&self) -> u32 {
        self.terms
            .iter()
            .rev()
            .find(|&(_, &coefficient)| coefficient != 0.0)
            .map(|(&power, _)| power)
            .unwrap_or(0)
    }

    /// Is this the polynomial `0`?
    pub fn is_zero(&self) -> bool {
        self.terms.values().all(|&coefficient| coefficient == 0.0)
    }

    /// Iterate over every `(power, coefficient)` pair in ascending order of
    /// exponent, including the zeroes.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (u32, f64)> + '_ {
        self.terms.iter().map(|(&power, &coefficient)| (power, coefficient))
    }

    /// Only the terms which actually contribute to the polynomial.
    pub fn nonzero_terms(
        &self,
    ) -> impl DoubleEndedIterator<Item = (u32, f64)> + '_ {
        self.iter().filter(|&(_, coefficient)| coefficient != 0.0)
    }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    /// Evaluate the polynomial at some (possibly complex) point.
    pub fn evaluate(&self, x: Complex64) -> Complex64 {
        self.iter().fold(Complex64::new(0.0, 0.0), |sum, (power, c)| {
            sum + x.powu(power) * c
        })
    }
}

impl Extend<(u32, f64)> for CoefficientMap {
    fn extend<T: IntoIterator<Item = (u32, f64)>>(&mut self, iter: T) {
        for (power, coefficient) in iter {
            self.accumulate(power, coefficient);
        }
    }
}

impl FromIterator<(u32, f64)> for CoefficientMap {
    fn from_iter<T: IntoIterator<Item = (u32, f64)>>(iter: T) -> Self {
        let mut map = CoefficientMap::new();
        map.extend(iter);
        map
    }
}
