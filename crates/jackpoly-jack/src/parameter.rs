//! The Jack parameter and the coefficient domain it selects.

use std::fmt;

use jackpoly_integers::Rational;
use jackpoly_poly::SparsePoly;
use jackpoly_rational_func::RationalFunction;
use jackpoly_rings::Q;

use crate::config::{JackConfig, RealParameterPolicy};
use crate::JackError;

/// A Jack parameter as supplied by a caller.
#[derive(Clone, Debug, PartialEq)]
pub enum Alpha {
    /// An exact rational value.
    Rational(Q),
    /// A floating-point value, converted per [`RealParameterPolicy`].
    Real(f64),
    /// The free symbol `alpha`; coefficients become rational functions.
    Symbolic,
}

impl From<Q> for Alpha {
    fn from(q: Q) -> Self {
        Self::Rational(q)
    }
}

impl From<i64> for Alpha {
    fn from(n: i64) -> Self {
        Self::Rational(Q::from(n))
    }
}

impl From<f64> for Alpha {
    fn from(x: f64) -> Self {
        Self::Real(x)
    }
}

/// The coefficient domain an [`Alpha`] resolves to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Domain {
    Rational(Q),
    Symbolic,
}

impl Alpha {
    /// Validates the parameter and selects its domain.
    pub(crate) fn resolve(&self, config: &JackConfig) -> Result<Domain, JackError> {
        match self {
            Self::Rational(q) => check_positive(q.clone()).map(Domain::Rational),
            Self::Real(x) => {
                if !x.is_finite() {
                    return Err(JackError::InvalidParameter(format!(
                        "alpha must be finite, got {x}"
                    )));
                }
                let exact = match config.real_parameter {
                    RealParameterPolicy::Exact => Rational::from_f64_exact(*x),
                    // Values the bounded approximation collapses to zero or
                    // cannot represent keep their exact binary value.
                    RealParameterPolicy::Approximate { max_denominator } => {
                        Rational::approximate_f64(*x, max_denominator)
                            .filter(Rational::is_positive)
                            .or_else(|| Rational::from_f64_exact(*x))
                    }
                    RealParameterPolicy::Reject => {
                        return Err(JackError::InvalidParameter(format!(
                            "floating-point alpha {x} refused by configuration"
                        )));
                    }
                };
                let q = exact.map(Q).ok_or_else(|| {
                    JackError::InvalidParameter(format!("alpha {x} has no rational representation"))
                })?;
                check_positive(q).map(Domain::Rational)
            }
            Self::Symbolic => Ok(Domain::Symbolic),
        }
    }
}

/// Rejects non-positive rational parameters.
pub(crate) fn check_positive(alpha: Q) -> Result<Q, JackError> {
    if alpha.is_positive() {
        Ok(alpha)
    } else {
        Err(JackError::InvalidParameter(format!(
            "alpha must be positive, got {alpha}"
        )))
    }
}

/// A Jack polynomial in whichever domain its parameter selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JackPolynomial {
    /// Rational coefficients.
    Rational(SparsePoly<Q>),
    /// Coefficients that are rational functions of `alpha`.
    Symbolic(SparsePoly<RationalFunction<Q>>),
}

impl JackPolynomial {
    /// Returns the rational polynomial, if the parameter was numeric.
    #[must_use]
    pub fn as_rational(&self) -> Option<&SparsePoly<Q>> {
        match self {
            Self::Rational(p) => Some(p),
            Self::Symbolic(_) => None,
        }
    }

    /// Returns the symbolic polynomial, if the parameter was the symbol.
    #[must_use]
    pub fn as_symbolic(&self) -> Option<&SparsePoly<RationalFunction<Q>>> {
        match self {
            Self::Rational(_) => None,
            Self::Symbolic(p) => Some(p),
        }
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        match self {
            Self::Rational(p) => p.num_vars(),
            Self::Symbolic(p) => p.num_vars(),
        }
    }
}

impl fmt::Display for JackPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rational(p) => write!(f, "{p}"),
            Self::Symbolic(p) => write!(f, "{p}"),
        }
    }
}
