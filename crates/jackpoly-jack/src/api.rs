//! Entry points for the Jack polynomial family.

use jackpoly_partitions::Partition;
use jackpoly_poly::SparsePoly;
use jackpoly_rational_func::RationalFunction;
use jackpoly_rings::{Field, Q, Z};
use tracing::debug;

use crate::config::JackConfig;
use crate::engine::Expansion;
use crate::parameter::{check_positive, Alpha, Domain, JackPolynomial};
use crate::weights::{JackWeights, SchurWeights};
use crate::{JackError, Normalization};

/// Validates the arguments shared by every operation.
pub(crate) fn validate(n: usize, kappa: &[u32]) -> Result<Partition, JackError> {
    if n == 0 {
        return Err(JackError::InvalidVariableCount);
    }
    Ok(Partition::new(kappa)?)
}

/// Expands `J_κ` over `K` and applies the normalization.
fn jack_in<K: Field>(
    n: usize,
    kappa: &Partition,
    alpha: K,
    which: Normalization,
) -> Result<SparsePoly<K>, JackError> {
    let scalar = which.scalar(kappa, &alpha)?;
    let weights = JackWeights::new(alpha);
    let j = Expansion::new(&weights, kappa, n).run(kappa)?;
    Ok(j.scale(&scalar))
}

/// Computes the Jack polynomial of `kappa` in `n` variables at a rational
/// parameter.
///
/// # Memory
///
/// Every call allocates a memo table of `N(κ, κ) · n` slots up front, where
/// `N(κ, κ) = Π (κᵢ + 1) − 1` over the parts of κ. The count grows
/// multiplicatively with the number of parts: the staircase `[10, 9, …, 1]`
/// alone needs about 4·10⁷ slots per variable. The same holds for every
/// other entry point of this crate.
///
/// # Errors
///
/// Returns an error if `n` is zero, `kappa` is not weakly decreasing, or
/// `alpha` is not positive.
///
/// # Example
///
/// ```
/// use jackpoly_jack::{jack_pol, Normalization};
/// use jackpoly_rings::Q;
///
/// let poly = jack_pol(3, &[2, 1], &Q::new(3, 2), Normalization::J).unwrap();
/// assert_eq!(poly.coeff_of(&[2, 1, 0]), Q::new(7, 2));
/// assert_eq!(poly.coeff_of(&[1, 1, 1]), Q::from_integer(6));
/// ```
pub fn jack_pol(
    n: usize,
    kappa: &[u32],
    alpha: &Q,
    which: Normalization,
) -> Result<SparsePoly<Q>, JackError> {
    let kappa = validate(n, kappa)?;
    let alpha = check_positive(alpha.clone())?;
    debug!(n, kappa = %kappa, alpha = %alpha, which = %which, "jack_pol");
    jack_in(n, &kappa, alpha, which)
}

/// Computes the Jack polynomial of `kappa` for any kind of parameter.
///
/// A floating-point parameter is turned into an exact rational according to
/// `config`; [`Alpha::Symbolic`] gives coefficients in `Q(alpha)`.
///
/// # Errors
///
/// Returns an error if `n` is zero, `kappa` is not weakly decreasing, or the
/// parameter is not a positive number accepted by `config`.
pub fn jack_pol_with(
    n: usize,
    kappa: &[u32],
    alpha: impl Into<Alpha>,
    which: Normalization,
    config: &JackConfig,
) -> Result<JackPolynomial, JackError> {
    let kappa = validate(n, kappa)?;
    match alpha.into().resolve(config)? {
        Domain::Rational(alpha) => {
            debug!(n, kappa = %kappa, alpha = %alpha, which = %which, "jack_pol_with");
            jack_in(n, &kappa, alpha, which).map(JackPolynomial::Rational)
        }
        Domain::Symbolic => {
            debug!(n, kappa = %kappa, which = %which, "jack_pol_with (symbolic)");
            jack_in(n, &kappa, RationalFunction::parameter(), which).map(JackPolynomial::Symbolic)
        }
    }
}

/// Computes the Jack polynomial of `kappa` with the parameter left as the
/// symbol `alpha`.
///
/// # Errors
///
/// Returns an error if `n` is zero or `kappa` is not weakly decreasing.
///
/// # Example
///
/// ```
/// use jackpoly_jack::{jack_symbolic_pol, Normalization};
///
/// let poly = jack_symbolic_pol(2, &[2, 1], Normalization::J).unwrap();
/// assert_eq!(poly.to_string(), "(alpha + 2)*x_1^2*x_2 + (alpha + 2)*x_1*x_2^2");
/// ```
pub fn jack_symbolic_pol(
    n: usize,
    kappa: &[u32],
    which: Normalization,
) -> Result<SparsePoly<RationalFunction<Q>>, JackError> {
    let kappa = validate(n, kappa)?;
    debug!(n, kappa = %kappa, which = %which, "jack_symbolic_pol");
    jack_in(n, &kappa, RationalFunction::parameter(), which)
}

/// Substitutes a value for `alpha` in a symbolic polynomial.
///
/// # Errors
///
/// Returns [`JackError::SingularParameter`] if a coefficient has a pole at
/// `alpha`.
pub fn substitute_parameter(
    poly: &SparsePoly<RationalFunction<Q>>,
    alpha: &Q,
) -> Result<SparsePoly<Q>, JackError> {
    poly.try_map_coeffs(|c| c.eval(alpha).ok_or(JackError::SingularParameter))
}

/// Computes the Schur polynomial of `kappa` in `n` variables.
///
/// # Errors
///
/// Returns an error if `n` is zero or `kappa` is not weakly decreasing.
///
/// # Example
///
/// ```
/// use jackpoly_jack::schur_pol;
/// use jackpoly_rings::Z;
///
/// let poly = schur_pol(2, &[2, 1]).unwrap();
/// assert_eq!(poly.to_string(), "x_1^2*x_2 + x_1*x_2^2");
/// assert_eq!(poly.eval(&[Z::new(1), Z::new(1)]), Z::new(2));
/// ```
pub fn schur_pol(n: usize, kappa: &[u32]) -> Result<SparsePoly<Z>, JackError> {
    let kappa = validate(n, kappa)?;
    debug!(n, kappa = %kappa, "schur_pol");
    Expansion::new(&SchurWeights, &kappa, n).run(&kappa)
}

/// Computes the zonal polynomial of `kappa`: the `C` normalization at
/// `α = 2`.
///
/// # Errors
///
/// Returns an error if `n` is zero or `kappa` is not weakly decreasing.
pub fn zonal_pol(n: usize, kappa: &[u32]) -> Result<SparsePoly<Q>, JackError> {
    jack_pol(n, kappa, &Q::from_integer(2), Normalization::C)
}

/// Computes the quaternionic zonal polynomial of `kappa`: the `C`
/// normalization at `α = 1/2`.
///
/// # Errors
///
/// Returns an error if `n` is zero or `kappa` is not weakly decreasing.
pub fn zonal_q_pol(n: usize, kappa: &[u32]) -> Result<SparsePoly<Q>, JackError> {
    jack_pol(n, kappa, &Q::new(1, 2), Normalization::C)
}
