// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Euclidean division over `Q[x]` through integer pseudo-division.

use num_bigint::BigInt;
use num_traits::Zero;
use ratpoly_polynomial::{division, gcd, vector, PseudoDivRem};

use crate::errors::{fatal, RationalPolynomialError};
use crate::polynomial::RationalPolynomial;

impl RationalPolynomial {
    /// Quotient and remainder with `self = q * divisor + r` and `deg r < deg divisor`.
    ///
    /// # Panics
    ///
    /// Panics (fatal) if `divisor` is zero.
    pub fn divrem(&self, divisor: &Self) -> (Self, Self) {
        if divisor.is_zero() {
            fatal("divrem", RationalPolynomialError::DivisionByZero);
        }
        if self.len() < divisor.len() {
            return (Self::zero(), self.clone());
        }

        // lead^e * A = Q * B + R with a = A / a.den and b = B / b.den gives
        // q = Q * b.den / (lead^e * a.den) and r = R / (lead^e * a.den).
        let PseudoDivRem {
            quotient,
            remainder,
            exponent,
        } = match division::pseudo_divrem(&self.coeffs, &divisor.coeffs) {
            Ok(result) => result,
            Err(err) => fatal("divrem", err.into()),
        };
        let lead = &divisor.coeffs[divisor.len() - 1];
        let scale = vector::pow(lead, exponent) * &self.den;

        let mut q = Self::from_raw_parts(
            vector::scalar_mul(&quotient, &divisor.den),
            scale.clone(),
        );
        q.canonicalise();
        let mut r = Self::from_raw_parts(remainder, scale);
        r.canonicalise();
        (q, r)
    }

    /// Quotient of [`Self::divrem`].
    ///
    /// # Panics
    ///
    /// Panics (fatal) if `divisor` is zero.
    pub fn div(&self, divisor: &Self) -> Self {
        if divisor.is_zero() {
            fatal("div", RationalPolynomialError::DivisionByZero);
        }
        self.divrem(divisor).0
    }

    /// Remainder of [`Self::divrem`].
    ///
    /// # Panics
    ///
    /// Panics (fatal) if `divisor` is zero.
    pub fn rem(&self, divisor: &Self) -> Self {
        if divisor.is_zero() {
            fatal("rem", RationalPolynomialError::DivisionByZero);
        }
        if self.len() < divisor.len() {
            return self.clone();
        }
        let (remainder, exponent) = match division::pseudo_rem(&self.coeffs, &divisor.coeffs) {
            Ok(result) => result,
            Err(err) => fatal("rem", err.into()),
        };
        let lead = &divisor.coeffs[divisor.len() - 1];
        let mut r = Self::from_raw_parts(remainder, vector::pow(lead, exponent) * &self.den);
        r.canonicalise();
        r
    }

    /// Returns `Some(q)` with `self = q * divisor` when the division is exact.
    ///
    /// Over `Q[x]` divisibility only depends on the primitive parts, so the test is an
    /// exact integer division of primitive numerators, rescaled afterwards.
    ///
    /// # Panics
    ///
    /// Panics (fatal) if `divisor` is zero.
    pub fn divides(&self, divisor: &Self) -> Option<Self> {
        if divisor.is_zero() {
            fatal("divides", RationalPolynomialError::DivisionByZero);
        }
        if self.is_zero() {
            return Some(Self::zero());
        }
        if self.len() < divisor.len() {
            return None;
        }

        let pa = gcd::primitive_part(&self.coeffs);
        let pb = gcd::primitive_part(&divisor.coeffs);
        let quotient = division::divides(&pa, &pb)?;

        // Signed contents: coeffs = content * primitive.
        let ca = signed_content(&self.coeffs, &pa);
        let cb = signed_content(&divisor.coeffs, &pb);
        let mut q = Self::from_raw_parts(
            vector::scalar_mul(&quotient, &(ca * &divisor.den)),
            cb * &self.den,
        );
        q.canonicalise();
        Some(q)
    }
}

fn signed_content(coeffs: &[BigInt], primitive: &[BigInt]) -> BigInt {
    match (coeffs.last(), primitive.last()) {
        (Some(c), Some(p)) if !p.is_zero() => c / p,
        _ => BigInt::zero(),
    }
}
