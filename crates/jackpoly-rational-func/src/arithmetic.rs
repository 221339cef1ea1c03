//! Field structure of rational functions.
//!
//! Implements the `Ring`/`Field` traits so the Jack engine can run over
//! Q(α) exactly as it does over Q.

use std::ops::{Add, Mul, Neg, Sub};

use jackpoly_poly::dense::DensePoly;
use jackpoly_rings::traits::{Field, Ring};

use crate::RationalFunction;

impl<K: Field> RationalFunction<K> {
    /// Adds two rational functions by reference.
    ///
    /// a/b + c/d = (ad + bc) / bd
    #[must_use]
    pub fn add_ref(&self, other: &Self) -> Self {
        if self.denominator() == other.denominator() {
            return Self::new(
                self.numerator().add(other.numerator()),
                self.denominator().clone(),
            );
        }
        let num = self
            .numerator()
            .mul(other.denominator())
            .add(&other.numerator().mul(self.denominator()));
        let den = self.denominator().mul(other.denominator());

        Self::new(num, den)
    }

    /// Multiplies two rational functions by reference.
    #[must_use]
    pub fn mul_ref(&self, other: &Self) -> Self {
        let num = self.numerator().mul(other.numerator());
        let den = self.denominator().mul(other.denominator());

        Self::new(num, den)
    }

    /// Negates by reference.
    #[must_use]
    pub fn neg_ref(&self) -> Self {
        Self::new(self.numerator().neg(), self.denominator().clone())
    }
}

impl<K: Field> Ring for RationalFunction<K> {
    fn zero() -> Self {
        Self::from_poly(DensePoly::zero())
    }

    fn one() -> Self {
        Self::from_poly(DensePoly::one())
    }

    fn is_zero(&self) -> bool {
        self.numerator().is_zero()
    }

    fn is_one(&self) -> bool {
        self.is_polynomial() && self.numerator() == &DensePoly::one()
    }
}

impl<K: Field> Field for RationalFunction<K> {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self::new(
                self.denominator().clone(),
                self.numerator().clone(),
            ))
        }
    }
}

impl<K: Field> From<i64> for RationalFunction<K> {
    fn from(n: i64) -> Self {
        Self::constant(K::from(n))
    }
}

impl<K: Field> Add for RationalFunction<K> {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        self.add_ref(&other)
    }
}

impl<K: Field> Sub for RationalFunction<K> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        self.add_ref(&other.neg_ref())
    }
}

impl<K: Field> Mul for RationalFunction<K> {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        self.mul_ref(&other)
    }
}

impl<K: Field> Neg for RationalFunction<K> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.neg_ref()
    }
}
