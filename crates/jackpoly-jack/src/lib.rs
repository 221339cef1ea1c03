//! # jackpoly-jack
//!
//! Jack polynomials and their specializations.
//!
//! All polynomials are produced by one memoized recursion that removes
//! boxes from the Young diagram of κ one variable at a time:
//!
//! - [`jack_pol`] / [`jack_pol_with`]: Jack polynomials at a rational or
//!   floating-point parameter, in the `J`, `C`, `P` or `Q` normalization
//! - [`jack_symbolic_pol`]: Jack polynomials with coefficients in `Q(alpha)`
//! - [`schur_pol`]: Schur polynomials over the integers
//! - [`zonal_pol`], [`zonal_q_pol`]: zonal and quaternionic zonal
//!   polynomials
//! - [`monomial_symmetric`], [`msp_combination`]: the monomial symmetric
//!   basis, used to read results

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod api;
pub mod betaratio;
pub mod config;
mod engine;
pub mod error;
pub mod hooks;
mod memo;
pub mod msp;
pub mod normalization;
pub mod parameter;
pub mod weights;

#[cfg(test)]
mod proptests;

pub use api::{
    jack_pol, jack_pol_with, jack_symbolic_pol, schur_pol, substitute_parameter, zonal_pol,
    zonal_q_pol,
};
pub use config::{JackConfig, RealParameterPolicy};
pub use error::JackError;
pub use hooks::{jack_c_coefficient, jack_p_coefficient, jack_q_coefficient, HookLengths};
pub use msp::{monomial_symmetric, msp_combination, msp_combination_expr};
pub use normalization::Normalization;
pub use parameter::{Alpha, JackPolynomial};
pub use weights::{BoxRemoval, JackWeights, SchurWeights};
