// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Content, gcd family, resultant and discriminant over `Q[x]`.
//!
//! Each operation works on the integer numerators (or their primitive parts) and
//! rescales by the stripped denominators and contents.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use ratpoly_polynomial::{gcd, vector};

use crate::polynomial::RationalPolynomial;

impl RationalPolynomial {
    /// Non-negative rational content: `content(numerator) / den`, zero for zero.
    pub fn content(&self) -> BigRational {
        BigRational::new(vector::content(&self.coeffs), self.den.clone())
    }

    /// `self / content`, an integer polynomial with content one and positive leading
    /// coefficient.
    pub fn primitive_part(&self) -> Self {
        Self {
            coeffs: gcd::primitive_part(&self.coeffs),
            den: BigInt::one(),
        }
    }

    pub fn is_monic(&self) -> bool {
        self.coeffs.last().is_some_and(|lead| *lead == self.den)
    }

    /// Divides by the leading coefficient. The zero polynomial stays zero.
    pub fn make_monic(&self) -> Self {
        let Some(lead) = self.coeffs.last() else {
            return Self::zero();
        };
        // (A / den) / (lead / den) = A / lead
        let mut out = Self::from_raw_parts(self.coeffs.clone(), lead.clone());
        out.canonicalise();
        out
    }

    /// Monic greatest common divisor; `gcd(0, 0) = 0`.
    pub fn gcd(&self, other: &Self) -> Self {
        let g = gcd::gcd(&self.coeffs, &other.coeffs);
        Self::from_raw_parts(g, BigInt::one()).make_monic()
    }

    /// Extended gcd: `(g, s, t)` with `g = s * self + t * other` and `g` monic.
    ///
    /// When both inputs are zero all three outputs are zero.
    pub fn xgcd(&self, other: &Self) -> (Self, Self, Self) {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => return (Self::zero(), Self::zero(), Self::zero()),
            (false, true) => {
                return (self.make_monic(), leading_inverse(self), Self::zero());
            }
            (true, false) => {
                return (other.make_monic(), Self::zero(), leading_inverse(other));
            }
            (false, false) => {}
        }

        // Euclid over Q on the primitive parts keeps the remainders' bit size small.
        let a = self.primitive_part();
        let b = other.primitive_part();
        let (mut r0, mut s0, mut t0) = (a, Self::one(), Self::zero());
        let (mut r1, mut s1, mut t1) = (b, Self::zero(), Self::one());
        while !r1.is_zero() {
            let (quotient, remainder) = r0.divrem(&r1);
            let s2 = s0.sub(&quotient.mul(&s1));
            let t2 = t0.sub(&quotient.mul(&t1));
            r0 = std::mem::replace(&mut r1, remainder);
            s0 = std::mem::replace(&mut s1, s2);
            t0 = std::mem::replace(&mut t1, t2);
        }

        // r0 = s0 * pp(a) + t0 * pp(b) and pp(a) = a / ca, pp(b) = b / cb.
        let lead = r0.leading_coefficient().unwrap_or_else(BigRational::one);
        let ca = signed_content(self);
        let cb = signed_content(other);
        let g = r0.make_monic();
        let s = s0.scalar_div_rational(&(&lead * ca));
        let t = t0.scalar_div_rational(&(&lead * cb));
        (g, s, t)
    }

    /// Monic least common multiple; zero when either input is zero.
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let g = self.gcd(other);
        self.mul(other).div(&g).make_monic()
    }

    /// Resultant `res(self, other)`, zero when either input is zero.
    ///
    /// With `a = A / da` and `b = B / db`,
    /// `res(a, b) = res(A, B) / (da^deg(b) * db^deg(a))`.
    pub fn resultant(&self, other: &Self) -> BigRational {
        let (Some(deg_a), Some(deg_b)) = (self.degree(), other.degree()) else {
            return BigRational::zero();
        };
        let r = gcd::resultant(&self.coeffs, &other.coeffs);
        let scale = vector::pow(&self.den, deg_b) * vector::pow(&other.den, deg_a);
        BigRational::new(r, scale)
    }

    /// `(-1)^(n(n-1)/2) * res(a, a') / lead(a)` for `a` of degree `n`; zero below
    /// degree one.
    pub fn discriminant(&self) -> BigRational {
        let Some(n) = self.degree() else {
            return BigRational::zero();
        };
        if n == 0 {
            return BigRational::zero();
        }
        let Some(lead) = self.leading_coefficient() else {
            return BigRational::zero();
        };
        let d = self.resultant(&self.derivative()) / lead;
        if (n * (n - 1) / 2) % 2 == 1 {
            -d
        } else {
            d
        }
    }
}

/// Signed content with `self = content * primitive_part()`.
fn signed_content(poly: &RationalPolynomial) -> BigRational {
    let content = poly.content();
    if poly.coeffs.last().is_some_and(Signed::is_negative) {
        -content
    } else {
        content
    }
}

fn leading_inverse(poly: &RationalPolynomial) -> RationalPolynomial {
    match poly.leading_coefficient() {
        Some(lead) => RationalPolynomial::from_rational(&lead.recip()),
        None => RationalPolynomial::zero(),
    }
}
