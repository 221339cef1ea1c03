//! Core rational function type.
//!
//! A rational function is a quotient of two polynomials P(α)/Q(α).
//! The representation is canonical:
//! - The denominator is monic (leading coefficient = 1)
//! - The numerator and denominator are coprime (gcd = 1)
//! - Zero is represented as 0/1

use std::fmt;

use jackpoly_poly::algorithms::gcd::{make_monic, poly_div_rem, poly_gcd};
use jackpoly_poly::dense::DensePoly;
use jackpoly_rings::traits::{Field, Ring};

/// Name of the free symbol in printed output.
pub const PARAMETER_NAME: &str = "alpha";

/// A rational function P(α)/Q(α) over a field K.
///
/// # Invariants
///
/// - `denominator` is always monic (leading coefficient = 1)
/// - `numerator` and `denominator` are coprime (gcd = 1)
/// - Zero is represented as `0 / 1`
///
/// Because the form is canonical, structural equality is equality of
/// rational functions.
///
/// # Example
///
/// ```
/// use jackpoly_rational_func::RationalFunction;
/// use jackpoly_rings::{Field, Ring, Q};
///
/// // alpha / (alpha + 1) evaluated at alpha = 1 is 1/2
/// let alpha = RationalFunction::<Q>::parameter();
/// let f = alpha.checked_div(&(alpha.clone() + RationalFunction::one())).unwrap();
/// assert_eq!(f.eval(&Q::from_integer(1)), Some(Q::new(1, 2)));
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RationalFunction<K: Field> {
    numerator: DensePoly<K>,
    denominator: DensePoly<K>,
}

impl<K: Field> RationalFunction<K> {
    /// Creates a new rational function from numerator and denominator.
    ///
    /// The result is automatically normalized to canonical form.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: DensePoly<K>, denominator: DensePoly<K>) -> Self {
        assert!(!denominator.is_zero(), "denominator cannot be zero");

        let mut rf = Self {
            numerator,
            denominator,
        };
        rf.normalize();
        rf
    }

    /// Creates a rational function from a polynomial (denominator = 1).
    #[must_use]
    pub fn from_poly(p: DensePoly<K>) -> Self {
        Self {
            numerator: p,
            denominator: DensePoly::one(),
        }
    }

    /// Creates a constant rational function c/1.
    #[must_use]
    pub fn constant(c: K) -> Self {
        Self::from_poly(DensePoly::constant(c))
    }

    /// The free symbol α itself.
    #[must_use]
    pub fn parameter() -> Self {
        Self::from_poly(DensePoly::x())
    }

    /// Returns the numerator polynomial.
    #[must_use]
    pub fn numerator(&self) -> &DensePoly<K> {
        &self.numerator
    }

    /// Returns the denominator polynomial.
    #[must_use]
    pub fn denominator(&self) -> &DensePoly<K> {
        &self.denominator
    }

    /// Returns true if this is a polynomial (denominator = 1).
    #[must_use]
    pub fn is_polynomial(&self) -> bool {
        self.denominator.is_constant()
    }

    /// Returns the value if this rational function is a constant.
    #[must_use]
    pub fn as_constant(&self) -> Option<K> {
        (self.is_polynomial() && self.numerator.is_constant()).then(|| self.numerator.coeff(0))
    }

    fn normalize(&mut self) {
        if self.numerator.is_zero() {
            self.denominator = DensePoly::one();
            return;
        }

        let g = poly_gcd(&self.numerator, &self.denominator);
        if !g.is_constant() {
            self.numerator = poly_div_rem(&self.numerator, &g).0;
            self.denominator = poly_div_rem(&self.denominator, &g).0;
        }

        if let Some(lead_inv) = self.denominator.leading_coeff().and_then(Field::inv) {
            if !lead_inv.is_one() {
                self.numerator = self.numerator.scale(&lead_inv);
                self.denominator = make_monic(&self.denominator);
            }
        }
    }

    /// Evaluates the rational function at a point.
    ///
    /// Returns `None` if the point is a pole.
    #[must_use]
    pub fn eval(&self, x: &K) -> Option<K> {
        let den_val = self.denominator.eval(x);
        den_val.inv().map(|inv| self.numerator.eval(x) * inv)
    }
}

impl<K: Field + fmt::Display> fmt::Display for RationalFunction<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num = self.numerator.display_in(PARAMETER_NAME).to_string();
        if self.is_polynomial() {
            return write!(f, "{num}");
        }

        let den = self.denominator.display_in(PARAMETER_NAME).to_string();
        let wrap = |s: String| if s.contains(' ') { format!("({s})") } else { s };
        write!(f, "{}/{}", wrap(num), wrap(den))
    }
}
