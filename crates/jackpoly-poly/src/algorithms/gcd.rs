//! Polynomial GCD over a field.

use jackpoly_rings::traits::Field;

use crate::dense::DensePoly;

/// Computes the monic GCD of two polynomials with the Euclidean algorithm.
///
/// `gcd(0, 0)` is the zero polynomial.
#[must_use]
pub fn poly_gcd<F: Field>(a: &DensePoly<F>, b: &DensePoly<F>) -> DensePoly<F> {
    let mut p = a.clone();
    let mut q = b.clone();

    while !q.is_zero() {
        let (_, r) = poly_div_rem(&p, &q);
        p = q;
        q = r;
    }

    make_monic(&p)
}

/// Divides polynomial a by b, returning (quotient, remainder).
///
/// # Panics
///
/// Panics if `b` is the zero polynomial.
#[must_use]
pub fn poly_div_rem<F: Field>(a: &DensePoly<F>, b: &DensePoly<F>) -> (DensePoly<F>, DensePoly<F>) {
    let (Some(b_deg), Some(b_lead)) = (b.degree(), b.leading_coeff()) else {
        panic!("division by zero polynomial");
    };
    let b_lead_inv = b_lead
        .inv()
        .expect("leading coefficient of a nonzero polynomial is invertible");

    let Some(a_deg) = a.degree().filter(|&d| d >= b_deg) else {
        return (DensePoly::zero(), a.clone());
    };

    let mut quotient = vec![F::zero(); a_deg - b_deg + 1];
    let mut remainder = a.coeffs().to_vec();

    for shift in (0..=a_deg - b_deg).rev() {
        let top = remainder[shift + b_deg].clone();
        if top.is_zero() {
            continue;
        }
        let factor = top * b_lead_inv.clone();
        for (i, bc) in b.coeffs().iter().enumerate() {
            remainder[shift + i] = remainder[shift + i].clone() - factor.clone() * bc.clone();
        }
        quotient[shift] = factor;
    }

    (DensePoly::new(quotient), DensePoly::new(remainder))
}

/// Makes a polynomial monic (leading coefficient = 1).
///
/// The zero polynomial is returned unchanged.
#[must_use]
pub fn make_monic<F: Field>(p: &DensePoly<F>) -> DensePoly<F> {
    match p.leading_coeff().and_then(Field::inv) {
        Some(lead_inv) => p.scale(&lead_inv),
        None => p.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jackpoly_rings::rationals::Q;
    use jackpoly_rings::traits::Ring;

    fn poly(coeffs: &[i64]) -> DensePoly<Q> {
        DensePoly::new(coeffs.iter().map(|&n| Q::from_integer(n)).collect())
    }

    #[test]
    fn test_poly_div_rem() {
        // (x^2 + 2x + 1) / (x + 1) = (x + 1), remainder 0
        let (q, r) = poly_div_rem(&poly(&[1, 2, 1]), &poly(&[1, 1]));
        assert_eq!(q, poly(&[1, 1]));
        assert!(r.is_zero());

        // (x^3 + 2) / (2x) = x^2 / 2, remainder 2
        let (q, r) = poly_div_rem(&poly(&[2, 0, 0, 1]), &poly(&[0, 2]));
        assert_eq!(q, DensePoly::new(vec![Q::zero(), Q::zero(), Q::new(1, 2)]));
        assert_eq!(r, poly(&[2]));
    }

    #[test]
    fn test_div_by_higher_degree() {
        let (q, r) = poly_div_rem(&poly(&[1, 1]), &poly(&[0, 0, 1]));
        assert!(q.is_zero());
        assert_eq!(r, poly(&[1, 1]));
    }

    #[test]
    fn test_poly_gcd() {
        // gcd((x-1)(x+1), (x-1)^2) = x - 1
        let g = poly_gcd(&poly(&[-1, 0, 1]), &poly(&[1, -2, 1]));
        assert_eq!(g, poly(&[-1, 1]));

        // coprime inputs give 1
        let g = poly_gcd(&poly(&[1, 0, 1]), &poly(&[-1, 1]));
        assert_eq!(g, DensePoly::one());
    }

    #[test]
    fn test_make_monic() {
        let p = poly(&[2, 4]);
        assert_eq!(make_monic(&p), DensePoly::new(vec![Q::new(1, 2), Q::one()]));
        assert!(make_monic(&DensePoly::<Q>::zero()).is_zero());
    }

    #[test]
    #[should_panic(expected = "division by zero polynomial")]
    fn test_div_by_zero_panics() {
        let _ = poly_div_rem(&poly(&[1]), &DensePoly::zero());
    }
}
