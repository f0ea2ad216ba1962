// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Derivative, integral, evaluation and composition.

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Zero};
use ratpoly_polynomial::{mul, vector};

use crate::polynomial::RationalPolynomial;

impl RationalPolynomial {
    pub fn derivative(&self) -> Self {
        if self.len() <= 1 {
            return Self::zero();
        }
        let coeffs = self.coeffs[1..]
            .iter()
            .zip(1u64..)
            .map(|(c, i)| c * i)
            .collect();
        let mut out = Self::from_raw_parts(coeffs, self.den.clone());
        out.canonicalise();
        out
    }

    /// Antiderivative with zero constant term.
    pub fn integral(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        // Bring every 1/(i+1) over L = lcm(1, ..., len).
        let l = (1..=self.len() as u64).fold(BigInt::one(), |acc, i| acc.lcm(&BigInt::from(i)));
        let mut coeffs = Vec::with_capacity(self.len() + 1);
        coeffs.push(BigInt::zero());
        coeffs.extend(
            self.coeffs
                .iter()
                .zip(1u64..)
                .map(|(c, i)| c * (&l / BigInt::from(i))),
        );
        let mut out = Self::from_raw_parts(coeffs, &self.den * l);
        out.canonicalise();
        out
    }

    /// Value at the integer `x`.
    pub fn evaluate_integer(&self, x: &BigInt) -> BigRational {
        let num = self
            .coeffs
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, c| acc * x + c);
        BigRational::new(num, self.den.clone())
    }

    /// Value at the fraction `x = p/q`, by a Horner scheme on the homogenised
    /// numerator `sum c_i p^i q^(n-1-i)`.
    pub fn evaluate_rational(&self, x: &BigRational) -> BigRational {
        let Some((top, rest)) = self.coeffs.split_last() else {
            return BigRational::zero();
        };
        let (p, q) = (x.numer(), x.denom());
        let mut acc = top.clone();
        let mut q_pow = BigInt::one();
        for c in rest.iter().rev() {
            q_pow *= q;
            acc = acc * p + c * &q_pow;
        }
        BigRational::new(acc, &self.den * q_pow)
    }

    /// `self(inner(x))`, the full composition.
    pub fn compose(&self, inner: &Self) -> Self {
        let Some((top, rest)) = self.coeffs.split_last() else {
            return Self::zero();
        };
        if inner.len() <= 1 {
            let value = self.evaluate_rational(&inner.coefficient(0));
            return Self::from_rational(&value);
        }

        // With self = A/da and inner = B/db:
        // self(inner) = sum A_i B^i db^(n-1-i) / (da db^(n-1)).
        let mut acc = vec![top.clone()];
        let mut db_pow = BigInt::one();
        for c in rest.iter().rev() {
            db_pow *= &inner.den;
            acc = mul::mul(&acc, &inner.coeffs);
            if let Some(constant) = acc.first_mut() {
                *constant += c * &db_pow;
            }
        }
        let mut out = Self::from_raw_parts(acc, &self.den * db_pow);
        out.canonicalise();
        out
    }

    /// `self(c * x)`.
    pub fn rescale(&self, c: &BigRational) -> Self {
        if self.is_zero() || c.is_zero() {
            return Self::from_rational(&self.coefficient(0));
        }
        let (p, q) = (c.numer(), c.denom());
        let n = self.len();
        // Coefficient i becomes A_i p^i q^(n-1-i) over da q^(n-1).
        let mut coeffs = self.coeffs.clone();
        let mut p_pow = BigInt::one();
        for coeff in coeffs.iter_mut() {
            *coeff *= &p_pow;
            p_pow *= p;
        }
        let mut q_pow = BigInt::one();
        for coeff in coeffs.iter_mut().rev() {
            *coeff *= &q_pow;
            q_pow *= q;
        }
        let mut out = Self::from_raw_parts(coeffs, &self.den * vector::pow(q, n - 1));
        out.canonicalise();
        out
    }
}
