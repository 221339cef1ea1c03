//! # jackpoly
//!
//! Exact Jack polynomials and their specializations.
//!
//! ## Features
//!
//! - **Jack polynomials** `J`, `C`, `P`, `Q` at any positive rational
//!   parameter, or with the parameter kept symbolic
//! - **Schur polynomials** over the integers
//! - **Zonal polynomials** (`α = 2`) and quaternionic zonal polynomials
//!   (`α = 1/2`)
//! - **Monomial symmetric basis** helpers to read results
//!
//! ## Quick Start
//!
//! ```rust
//! use jackpoly::prelude::*;
//!
//! let p = jack_pol(3, &[2, 1], &Q::new(3, 2), Normalization::J).unwrap();
//! assert_eq!(p.coeff_of(&[1, 1, 1]), Q::from_integer(6));
//!
//! let s = schur_pol(2, &[2, 1]).unwrap();
//! assert_eq!(s.to_string(), "x_1^2*x_2 + x_1*x_2^2");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use jackpoly_integers as integers;
pub use jackpoly_jack as jack;
pub use jackpoly_partitions as partitions;
pub use jackpoly_poly as poly;
pub use jackpoly_rational_func as rational_func;
pub use jackpoly_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use jackpoly_integers::{Integer, Rational};
    pub use jackpoly_jack::{
        jack_pol, jack_pol_with, jack_symbolic_pol, monomial_symmetric, msp_combination,
        msp_combination_expr, schur_pol, zonal_pol, zonal_q_pol, Alpha, JackConfig, JackError,
        JackPolynomial, Normalization,
    };
    pub use jackpoly_partitions::Partition;
    pub use jackpoly_poly::SparsePoly;
    pub use jackpoly_rational_func::RationalFunction;
    pub use jackpoly_rings::{Field, Ring, Q, Z};
}
