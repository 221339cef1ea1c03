//! The four standard normalizations of Jack polynomials.

use std::fmt;
use std::str::FromStr;

use jackpoly_partitions::Partition;
use jackpoly_rings::{Field, Ring};

use crate::hooks::{jack_c_coefficient, jack_p_coefficient, jack_q_coefficient};
use crate::JackError;

/// Which Jack polynomial to produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Normalization {
    /// The integral form `J`, whose coefficient of `x₁⋯x_{|κ|}` is `|κ|!`.
    #[default]
    J,
    /// The `C` form; the `C` polynomials of size `k` sum to `(x₁ + ⋯ + xₙ)^k`.
    C,
    /// The monic form `P`.
    P,
    /// The dual form `Q`.
    Q,
}

impl Normalization {
    /// Returns the scalar that turns `J_κ` into this normalization.
    ///
    /// # Errors
    ///
    /// Returns [`JackError::SingularParameter`] if a hook vanishes at `alpha`.
    pub fn scalar<K: Field>(self, kappa: &Partition, alpha: &K) -> Result<K, JackError> {
        match self {
            Self::J => Ok(K::one()),
            Self::C => jack_c_coefficient(kappa, alpha),
            Self::P => jack_p_coefficient(kappa, alpha),
            Self::Q => jack_q_coefficient(kappa, alpha),
        }
    }
}

impl FromStr for Normalization {
    type Err = JackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "J" => Ok(Self::J),
            "C" => Ok(Self::C),
            "P" => Ok(Self::P),
            "Q" => Ok(Self::Q),
            other => Err(JackError::InvalidNormalization(other.to_string())),
        }
    }
}

impl fmt::Display for Normalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::J => "J",
            Self::C => "C",
            Self::P => "P",
            Self::Q => "Q",
        };
        f.write_str(tag)
    }
}
