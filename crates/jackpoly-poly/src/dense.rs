//! Dense univariate polynomials.
//!
//! These carry the numerator and denominator of a rational function in the
//! Jack parameter, so degrees stay small and schoolbook multiplication is
//! all that is needed.

use std::fmt;

use jackpoly_rings::traits::Ring;

use crate::format;

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order with no trailing
/// zeros; the zero polynomial has no coefficients at all.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DensePoly<R: Ring> {
    coeffs: Vec<R>,
}

impl<R: Ring> DensePoly<R> {
    /// Creates a new polynomial from coefficients in ascending degree order.
    #[must_use]
    pub fn new(mut coeffs: Vec<R>) -> Self {
        while coeffs.last().is_some_and(Ring::is_zero) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![R::one()],
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::new(vec![c])
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::new(vec![R::zero(), R::one()])
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns true if this is a constant (including zero).
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.coeffs.len() <= 1
    }

    /// Returns the leading coefficient, or `None` for the zero polynomial.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&R> {
        self.coeffs.last()
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// Returns all coefficients in ascending degree order.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        self.coeffs
            .iter()
            .rev()
            .fold(R::zero(), |acc, c| acc * x.clone() + c.clone())
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        Self::new((0..len).map(|i| self.coeff(i) + other.coeff(i)).collect())
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| -c.clone()).collect(),
        }
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials (schoolbook).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let mut result = vec![R::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] = result[i + j].clone() + a.clone() * b.clone();
            }
        }

        Self::new(result)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        Self::new(self.coeffs.iter().map(|x| x.clone() * c.clone()).collect())
    }

    /// Returns a `Display` adapter that names the variable `var`.
    #[must_use]
    pub fn display_in<'a>(&'a self, var: &'a str) -> DisplayIn<'a, R> {
        DisplayIn { poly: self, var }
    }
}

/// Displays a [`DensePoly`] in descending degree order with a named variable.
pub struct DisplayIn<'a, R: Ring> {
    poly: &'a DensePoly<R>,
    var: &'a str,
}

impl<R: Ring + fmt::Display> fmt::Display for DisplayIn<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<String> = self
            .poly
            .coeffs
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, c)| !c.is_zero())
            .map(|(i, c)| {
                let power = match i {
                    0 => String::new(),
                    1 => self.var.to_string(),
                    _ => format!("{}^{i}", self.var),
                };
                format::term(&c.to_string(), &power)
            })
            .collect();

        f.write_str(&format::sum(&terms))
    }
}

impl<R: Ring + fmt::Display> fmt::Display for DensePoly<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_in("x"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jackpoly_rings::rationals::Q;

    fn poly(coeffs: &[i64]) -> DensePoly<Q> {
        DensePoly::new(coeffs.iter().map(|&n| Q::from_integer(n)).collect())
    }

    #[test]
    fn test_normalization() {
        let p = poly(&[1, 2, 0, 0]);
        assert_eq!(p.degree(), Some(1));
        assert!(poly(&[0, 0]).is_zero());
        assert_eq!(DensePoly::<Q>::zero().degree(), None);
    }

    #[test]
    fn test_add_and_mul() {
        let p = poly(&[1, 2]); // 1 + 2x
        let q = poly(&[3, 4]); // 3 + 4x

        assert_eq!(p.add(&q), poly(&[4, 6]));
        // (1 + 2x)(3 + 4x) = 3 + 10x + 8x^2
        assert_eq!(p.mul(&q), poly(&[3, 10, 8]));
        assert!(p.sub(&p).is_zero());
    }

    #[test]
    fn test_eval() {
        // p(x) = 1 + 2x + 3x^2, p(2) = 17
        let p = poly(&[1, 2, 3]);
        assert_eq!(p.eval(&Q::from_integer(2)), Q::from_integer(17));
    }

    #[test]
    fn test_display() {
        assert_eq!(poly(&[2, 4, 2]).display_in("alpha").to_string(), "2*alpha^2 + 4*alpha + 2");
        assert_eq!(poly(&[-1, 1]).to_string(), "x - 1");
        assert_eq!(poly(&[0, -1]).to_string(), "-x");
        assert_eq!(DensePoly::<Q>::zero().to_string(), "0");
    }
}
