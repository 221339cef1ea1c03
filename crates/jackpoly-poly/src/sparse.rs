//! Sparse multivariate polynomials.
//!
//! Terms live in a hash map from exponent vector to a nonzero coefficient;
//! the canonical form never stores zero coefficients, so structural
//! equality is polynomial equality.

use std::fmt;
use std::ops::AddAssign;

use jackpoly_rings::traits::Ring;
use rustc_hash::FxHashMap;

use crate::format;
use crate::monomial::Monomial;
use crate::ordering::MonomialOrder;

/// A sparse multivariate polynomial in `x_1, ..., x_n`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SparsePoly<R: Ring> {
    terms: FxHashMap<Monomial, R>,
    num_vars: usize,
}

impl<R: Ring> SparsePoly<R> {
    /// Creates a polynomial from (monomial, coefficient) pairs.
    ///
    /// Like terms are combined and zero coefficients dropped.
    ///
    /// # Panics
    ///
    /// Panics if a monomial does not have `num_vars` variables.
    #[must_use]
    pub fn new(terms: impl IntoIterator<Item = (Monomial, R)>, num_vars: usize) -> Self {
        let mut poly = Self::zero(num_vars);
        for (m, c) in terms {
            poly.add_term(m, c);
        }
        poly
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero(num_vars: usize) -> Self {
        Self {
            terms: FxHashMap::default(),
            num_vars,
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one(num_vars: usize) -> Self {
        Self::constant(R::one(), num_vars)
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R, num_vars: usize) -> Self {
        Self::monomial(Monomial::one(num_vars), c)
    }

    /// Creates the single variable `x_{i+1}` (0-based `i`).
    #[must_use]
    pub fn var(i: usize, num_vars: usize) -> Self {
        Self::monomial(Monomial::var(i, num_vars), R::one())
    }

    /// Creates the single term `c * m`.
    #[must_use]
    pub fn monomial(m: Monomial, c: R) -> Self {
        let num_vars = m.num_vars();
        let mut poly = Self::zero(num_vars);
        poly.add_term(m, c);
        poly
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Returns the coefficient of `m` (zero when absent).
    #[must_use]
    pub fn coeff(&self, m: &Monomial) -> R {
        self.terms.get(m).cloned().unwrap_or_else(R::zero)
    }

    /// Returns the coefficient of the monomial with the given exponents.
    #[must_use]
    pub fn coeff_of(&self, exps: &[u32]) -> R {
        self.coeff(&Monomial::from_exponents(exps))
    }

    /// Iterates over the terms in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&Monomial, &R)> {
        self.terms.iter()
    }

    /// Returns the terms sorted in descending `order`.
    #[must_use]
    pub fn terms_sorted(&self, order: MonomialOrder) -> Vec<(&Monomial, &R)> {
        let mut terms: Vec<_> = self.terms.iter().collect();
        terms.sort_by(|a, b| order.compare(b.0, a.0));
        terms
    }

    /// Adds `c * m` in place.
    ///
    /// # Panics
    ///
    /// Panics if `m` does not have `num_vars` variables.
    pub fn add_term(&mut self, m: Monomial, c: R) {
        assert_eq!(m.num_vars(), self.num_vars, "monomial has the wrong variable count");
        if c.is_zero() {
            return;
        }
        match self.terms.remove(&m) {
            Some(existing) => {
                let sum = existing + c;
                if !sum.is_zero() {
                    self.terms.insert(m, sum);
                }
            }
            None => {
                self.terms.insert(m, c);
            }
        }
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut sum = self.clone();
        sum += other;
        sum
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        self.map_terms(|c| -c.clone())
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials.
    ///
    /// # Panics
    ///
    /// Panics if the variable counts differ.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        assert_eq!(self.num_vars, other.num_vars);

        let mut product = Self::zero(self.num_vars);
        for (m1, c1) in &self.terms {
            for (m2, c2) in &other.terms {
                product.add_term(m1.mul(m2), c1.clone() * c2.clone());
            }
        }
        product
    }

    /// Multiplies every coefficient by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero(self.num_vars);
        }
        self.map_terms(|x| x.clone() * c.clone())
    }

    /// Multiplies by the term `c * m`.
    #[must_use]
    pub fn mul_monomial(&self, m: &Monomial, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero(self.num_vars);
        }
        let terms = self
            .terms
            .iter()
            .map(|(m2, c2)| (m.mul(m2), c2.clone() * c.clone()));
        Self::new(terms, self.num_vars)
    }

    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one(self.num_vars);
        for _ in 0..n {
            result = result.mul(self);
        }
        result
    }

    /// Computes the total degree (0 for the zero polynomial).
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.terms.keys().map(Monomial::total_degree).max().unwrap_or(0)
    }

    /// Returns true if every term has the same total degree.
    #[must_use]
    pub fn is_homogeneous(&self) -> bool {
        let mut degrees = self.terms.keys().map(Monomial::total_degree);
        match degrees.next() {
            Some(d) => degrees.all(|e| e == d),
            None => true,
        }
    }

    /// Evaluates the polynomial at a point.
    ///
    /// # Panics
    ///
    /// Panics if `point` does not have one value per variable.
    #[must_use]
    pub fn eval(&self, point: &[R]) -> R {
        assert_eq!(point.len(), self.num_vars, "point has the wrong dimension");
        self.terms.iter().fold(R::zero(), |acc, (m, c)| {
            let value = m
                .exponents()
                .iter()
                .zip(point)
                .fold(c.clone(), |v, (&e, x)| v * x.pow(e));
            acc + value
        })
    }

    /// Maps every coefficient into another ring, dropping terms that map to
    /// zero. Stops at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_map_coeffs<S, E, F>(&self, mut f: F) -> Result<SparsePoly<S>, E>
    where
        S: Ring,
        F: FnMut(&R) -> Result<S, E>,
    {
        let mut mapped = SparsePoly::zero(self.num_vars);
        for (m, c) in &self.terms {
            mapped.add_term(m.clone(), f(c)?);
        }
        Ok(mapped)
    }

    /// Maps every coefficient into another ring.
    #[must_use]
    pub fn map_coeffs<S: Ring>(&self, mut f: impl FnMut(&R) -> S) -> SparsePoly<S> {
        let mut mapped = SparsePoly::zero(self.num_vars);
        for (m, c) in &self.terms {
            mapped.add_term(m.clone(), f(c));
        }
        mapped
    }

    /// Applies a coefficient-wise map that cannot produce zero from nonzero.
    fn map_terms(&self, f: impl Fn(&R) -> R) -> Self {
        Self {
            terms: self.terms.iter().map(|(m, c)| (m.clone(), f(c))).collect(),
            num_vars: self.num_vars,
        }
    }
}

impl<R: Ring> AddAssign<&SparsePoly<R>> for SparsePoly<R> {
    fn add_assign(&mut self, other: &SparsePoly<R>) {
        assert_eq!(self.num_vars, other.num_vars);
        for (m, c) in &other.terms {
            self.add_term(m.clone(), c.clone());
        }
    }
}

impl<R: Ring + fmt::Display> fmt::Display for SparsePoly<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<String> = self
            .terms_sorted(MonomialOrder::Lex)
            .into_iter()
            .map(|(m, c)| format::term(&c.to_string(), &m.to_string()))
            .collect();

        f.write_str(&format::sum(&terms))
    }
}
