//! Exponent-vector monomials.
//!
//! A monomial over `n` variables is stored as its exponent vector. Vectors
//! up to eight variables stay inline; Jack polynomials of interest rarely
//! need more.

use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;

/// Exponent vector storage.
pub type Exponents = SmallVec<[u32; 8]>;

/// A monomial `x_1^e_1 * ... * x_n^e_n`.
///
/// The derived `Ord` is lexicographic on the exponent vector with
/// `x_1 > x_2 > ...`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct Monomial(Exponents);

impl Monomial {
    /// Creates the monomial 1 over `num_vars` variables.
    #[must_use]
    pub fn one(num_vars: usize) -> Self {
        Self(SmallVec::from_elem(0, num_vars))
    }

    /// Creates the monomial `x_i` (0-based `i`).
    ///
    /// # Panics
    ///
    /// Panics if `i >= num_vars`.
    #[must_use]
    pub fn var(i: usize, num_vars: usize) -> Self {
        Self::var_pow(i, 1, num_vars)
    }

    /// Creates the monomial `x_i^e` (0-based `i`).
    ///
    /// # Panics
    ///
    /// Panics if `i >= num_vars`.
    #[must_use]
    pub fn var_pow(i: usize, e: u32, num_vars: usize) -> Self {
        assert!(i < num_vars, "variable index {i} out of range for {num_vars} variables");
        let mut exps = SmallVec::from_elem(0, num_vars);
        exps[i] = e;
        Self(exps)
    }

    /// Creates a monomial from exponents.
    #[must_use]
    pub fn from_exponents(exps: &[u32]) -> Self {
        Self(SmallVec::from_slice(exps))
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.0.len()
    }

    /// Returns the exponent of variable i (0-based).
    #[must_use]
    pub fn exponent(&self, i: usize) -> u32 {
        self.0[i]
    }

    /// Returns all exponents.
    #[must_use]
    pub fn exponents(&self) -> &[u32] {
        &self.0
    }

    /// Multiplies two monomials (adds exponents).
    ///
    /// # Panics
    ///
    /// Panics if the variable counts differ.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        assert_eq!(self.num_vars(), other.num_vars());
        Self(self.0.iter().zip(&other.0).map(|(a, b)| a + b).collect())
    }

    /// Computes the total degree.
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Returns true if the exponents are weakly decreasing, i.e. the
    /// exponent vector is a zero-padded partition.
    #[must_use]
    pub fn is_weakly_decreasing(&self) -> bool {
        self.0.windows(2).all(|w| w[0] >= w[1])
    }

    /// Returns true if every exponent is zero.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.0.iter().all(|&e| e == 0)
    }
}

impl fmt::Display for Monomial {
    /// Renders as `x_1^3*x_2`, or the empty string for the monomial 1.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, &e) in self.0.iter().enumerate() {
            if e == 0 {
                continue;
            }
            if !first {
                write!(f, "*")?;
            }
            first = false;
            if e == 1 {
                write!(f, "x_{}", i + 1)?;
            } else {
                write!(f, "x_{}^{e}", i + 1)?;
            }
        }
        Ok(())
    }
}

/// Compares two monomials lexicographically.
#[must_use]
pub fn cmp_lex(a: &Monomial, b: &Monomial) -> Ordering {
    a.0.cmp(&b.0)
}

/// Compares two monomials by graded lexicographic order.
#[must_use]
pub fn cmp_grlex(a: &Monomial, b: &Monomial) -> Ordering {
    a.total_degree()
        .cmp(&b.total_degree())
        .then_with(|| cmp_lex(a, b))
}

/// Compares two monomials by graded reverse lexicographic order.
#[must_use]
pub fn cmp_grevlex(a: &Monomial, b: &Monomial) -> Ordering {
    a.total_degree().cmp(&b.total_degree()).then_with(|| {
        // Smaller exponent in the last differing variable wins.
        a.0.iter()
            .rev()
            .zip(b.0.iter().rev())
            .map(|(x, y)| y.cmp(x))
            .find(|o| *o != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    })
}
