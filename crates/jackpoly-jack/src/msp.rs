//! Monomial symmetric polynomials and expansions over them.

use std::collections::BTreeMap;
use std::fmt::Display;

use jackpoly_partitions::Partition;
use jackpoly_poly::{format, Monomial, SparsePoly};
use jackpoly_rings::{Ring, Z};

use crate::api::validate;
use crate::JackError;

/// Computes the monomial symmetric polynomial `m_κ` in `n` variables: the
/// sum of `x^e` over the distinct rearrangements `e` of κ padded with zeros.
///
/// # Errors
///
/// Returns an error if `n` is zero or `kappa` is not weakly decreasing.
pub fn monomial_symmetric(n: usize, kappa: &[u32]) -> Result<SparsePoly<Z>, JackError> {
    let kappa = validate(n, kappa)?;
    if kappa.len() > n {
        return Ok(SparsePoly::zero(n));
    }

    let mut exponents = kappa.parts().to_vec();
    exponents.resize(n, 0);
    exponents.sort_unstable();

    let mut poly = SparsePoly::zero(n);
    loop {
        poly.add_term(Monomial::from_exponents(&exponents), Z::one());
        if !next_permutation(&mut exponents) {
            break;
        }
    }
    Ok(poly)
}

/// Advances to the next arrangement in lexicographic order, returning false
/// after the last one. Repeated values yield each distinct arrangement once.
fn next_permutation(v: &mut [u32]) -> bool {
    let Some(i) = v.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let pivot = v[i];
    let Some(j) = v.iter().rposition(|&x| x > pivot) else {
        return false;
    };
    v.swap(i, j);
    v[i + 1..].reverse();
    true
}

/// Reads a symmetric polynomial as a combination of monomial symmetric
/// polynomials.
///
/// Each `m_λ` is identified by its leading term `x^λ`, so only the terms
/// with weakly decreasing exponents are kept. The input is assumed to be
/// symmetric.
#[must_use]
pub fn msp_combination<R: Ring>(poly: &SparsePoly<R>) -> BTreeMap<Partition, R> {
    poly.iter()
        .filter(|(m, _)| m.is_weakly_decreasing())
        .filter_map(|(m, c)| Partition::new(m.exponents()).ok().map(|p| (p, c.clone())))
        .collect()
}

/// Renders [`msp_combination`] as `c*M[3;1] + c'*M[2;2] + …`, largest
/// partition first.
#[must_use]
pub fn msp_combination_expr<R: Ring + Display>(poly: &SparsePoly<R>) -> String {
    let terms: Vec<String> = msp_combination(poly)
        .iter()
        .rev()
        .map(|(lambda, c)| {
            let parts: Vec<String> = lambda.parts().iter().map(u32::to_string).collect();
            format::term(&c.to_string(), &format!("M[{}]", parts.join(";")))
        })
        .collect();
    format::sum(&terms)
}
