// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Ring operations: sums, scalar multiples, products and powers.

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Zero};
use ratpoly_polynomial::{mul, vector};

use crate::errors::{fatal, RationalPolynomialError};
use crate::polynomial::RationalPolynomial;

/// Adds or subtracts numerators restricted to their first `n` terms.
///
/// With canonical operands and no truncation, at most `gcd(a.den, b.den)` can be shared
/// by the result's content and denominator. Truncation discards terms that may have kept
/// the content coprime, so a full reduction follows whenever it dropped anything.
fn add_sub(
    a: &RationalPolynomial,
    b: &RationalPolynomial,
    subtract: bool,
    n: Option<usize>,
) -> RationalPolynomial {
    let limit = n.unwrap_or(usize::MAX);
    let (a_num, b_num) = (
        &a.coeffs[..a.len().min(limit)],
        &b.coeffs[..b.len().min(limit)],
    );
    let truncated = a.len() > limit || b.len() > limit;
    let combine = |x: &[BigInt], y: &[BigInt]| {
        if subtract {
            vector::sub(x, y)
        } else {
            vector::add(x, y)
        }
    };

    if a.den == b.den {
        let mut r = RationalPolynomial::from_raw_parts(combine(a_num, b_num), a.den.clone());
        r.canonicalise();
        return r;
    }

    let d = a.den.gcd(&b.den);
    if d.is_one() {
        let num = combine(
            &vector::scalar_mul(a_num, &b.den),
            &vector::scalar_mul(b_num, &a.den),
        );
        let mut r = RationalPolynomial::from_raw_parts(num, &a.den * &b.den);
        if truncated {
            r.canonicalise();
        } else {
            r.normalise();
        }
        return r;
    }

    let a_scale = &b.den / &d;
    let b_scale = &a.den / &d;
    let num = combine(
        &vector::scalar_mul(a_num, &a_scale),
        &vector::scalar_mul(b_num, &b_scale),
    );
    let mut r = RationalPolynomial::from_raw_parts(num, &a.den * &a_scale);
    r.normalise();
    if truncated {
        r.reduce_content();
    } else if !r.is_zero() {
        let g = vector::content_gcd(&r.coeffs, &d);
        if !g.is_one() {
            vector::scalar_divexact_assign(&mut r.coeffs, &g);
            r.den = &r.den / &g;
        }
    }
    r
}

impl RationalPolynomial {
    /// Sum of two polynomials.
    pub fn add(&self, other: &Self) -> Self {
        add_sub(self, other, false, None)
    }

    /// Difference of two polynomials. `a.sub(&a)` is zero without any arithmetic.
    pub fn sub(&self, other: &Self) -> Self {
        if std::ptr::eq(self, other) {
            return Self::zero();
        }
        add_sub(self, other, true, None)
    }

    /// `self + other` modulo `x^n`.
    pub fn add_series(&self, other: &Self, n: usize) -> Self {
        add_sub(self, other, false, Some(n))
    }

    /// `self - other` modulo `x^n`.
    pub fn sub_series(&self, other: &Self, n: usize) -> Self {
        if std::ptr::eq(self, other) {
            return Self::zero();
        }
        add_sub(self, other, true, Some(n))
    }

    pub fn neg(&self) -> Self {
        let mut out = self.clone();
        vector::neg_assign(&mut out.coeffs);
        out
    }

    /// Multiplies by the integer `c`.
    pub fn scalar_mul_integer(&self, c: &BigInt) -> Self {
        if c.is_zero() || self.is_zero() {
            return Self::zero();
        }
        let g = self.den.gcd(c);
        let factor = c / &g;
        Self {
            coeffs: vector::scalar_mul(&self.coeffs, &factor),
            den: &self.den / &g,
        }
    }

    /// Divides by the integer `c`.
    ///
    /// # Panics
    ///
    /// Panics (fatal) if `c` is zero.
    pub fn scalar_div_integer(&self, c: &BigInt) -> Self {
        if c.is_zero() {
            fatal("scalar_div_integer", RationalPolynomialError::DivisionByZero);
        }
        if self.is_zero() {
            return Self::zero();
        }
        let g = vector::content_gcd(&self.coeffs, c);
        let mut coeffs = self.coeffs.clone();
        vector::scalar_divexact_assign(&mut coeffs, &g);
        let mut out = Self {
            coeffs,
            den: &self.den * (c / &g),
        };
        out.normalise();
        out
    }

    /// Multiplies by the fraction `c`, reducing against both denominators before the
    /// products so that the result is canonical without a final gcd.
    pub fn scalar_mul_rational(&self, c: &BigRational) -> Self {
        if c.is_zero() || self.is_zero() {
            return Self::zero();
        }
        let (cn, cd) = (c.numer(), c.denom());
        let gcd1 = vector::content_gcd(&self.coeffs, cd);
        let gcd2 = self.den.gcd(cn);

        let mut coeffs = self.coeffs.clone();
        vector::scalar_divexact_assign(&mut coeffs, &gcd1);
        vector::scalar_mul_assign(&mut coeffs, &(cn / &gcd2));
        let mut out = Self {
            coeffs,
            den: (&self.den / &gcd2) * (cd / &gcd1),
        };
        out.normalise();
        out
    }

    /// Divides by the fraction `c`.
    ///
    /// # Panics
    ///
    /// Panics (fatal) if `c` is zero.
    pub fn scalar_div_rational(&self, c: &BigRational) -> Self {
        if c.is_zero() {
            fatal("scalar_div_rational", RationalPolynomialError::DivisionByZero);
        }
        self.scalar_mul_rational(&c.recip())
    }

    /// Product. The denominator is the plain product of the two denominators before the
    /// final canonicalisation.
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let coeffs = if std::ptr::eq(self, other) {
            mul::sqr(&self.coeffs)
        } else {
            mul::mul(&self.coeffs, &other.coeffs)
        };
        let mut out = Self::from_raw_parts(coeffs, &self.den * &other.den);
        out.canonicalise();
        out
    }

    /// Product modulo `x^n`.
    pub fn mullow(&self, other: &Self, n: usize) -> Self {
        if n == 0 || self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let coeffs = mul::mullow(&self.coeffs, &other.coeffs, n);
        let mut out = Self::from_raw_parts(coeffs, &self.den * &other.den);
        out.canonicalise();
        out
    }

    /// `self^exp`. The power of a canonical polynomial is canonical.
    pub fn pow(&self, exp: usize) -> Self {
        if exp == 0 {
            return Self::one();
        }
        if self.is_zero() {
            return Self::zero();
        }
        let num = self.numerator_polynomial().pow(exp);
        Self {
            coeffs: num.into_coefficients(),
            den: vector::pow(&self.den, exp),
        }
    }

    /// `self^exp` modulo `x^n`.
    pub fn pow_trunc(&self, exp: usize, n: usize) -> Self {
        if n == 0 {
            return Self::zero();
        }
        let mut result = Self::one();
        let mut base = self.truncated(n);
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = result.mullow(&base, n);
            }
            e >>= 1;
            if e > 0 {
                base = base.mullow(&base, n);
            }
        }
        result
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl std::ops::$trait<&RationalPolynomial> for &RationalPolynomial {
            type Output = RationalPolynomial;

            fn $method(self, rhs: &RationalPolynomial) -> RationalPolynomial {
                RationalPolynomial::$method(self, rhs)
            }
        }

        impl std::ops::$trait<RationalPolynomial> for RationalPolynomial {
            type Output = RationalPolynomial;

            fn $method(self, rhs: RationalPolynomial) -> RationalPolynomial {
                RationalPolynomial::$method(&self, &rhs)
            }
        }

        impl std::ops::$trait<&RationalPolynomial> for RationalPolynomial {
            type Output = RationalPolynomial;

            fn $method(self, rhs: &RationalPolynomial) -> RationalPolynomial {
                RationalPolynomial::$method(&self, rhs)
            }
        }

        impl std::ops::$trait<RationalPolynomial> for &RationalPolynomial {
            type Output = RationalPolynomial;

            fn $method(self, rhs: RationalPolynomial) -> RationalPolynomial {
                RationalPolynomial::$method(self, &rhs)
            }
        }

        impl std::ops::$assign_trait<&RationalPolynomial> for RationalPolynomial {
            fn $assign_method(&mut self, rhs: &RationalPolynomial) {
                *self = RationalPolynomial::$method(self, rhs);
            }
        }

        impl std::ops::$assign_trait<RationalPolynomial> for RationalPolynomial {
            fn $assign_method(&mut self, rhs: RationalPolynomial) {
                *self = RationalPolynomial::$method(self, &rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign);
impl_binary_op!(Sub, sub, SubAssign, sub_assign);
impl_binary_op!(Mul, mul, MulAssign, mul_assign);

impl std::ops::Neg for &RationalPolynomial {
    type Output = RationalPolynomial;

    fn neg(self) -> RationalPolynomial {
        RationalPolynomial::neg(self)
    }
}

impl std::ops::Neg for RationalPolynomial {
    type Output = RationalPolynomial;

    fn neg(mut self) -> RationalPolynomial {
        vector::neg_assign(&mut self.coeffs);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(p: i64, d: i64) -> BigRational {
        BigRational::new(p.into(), d.into())
    }

    fn poly(coeffs: &[(i64, i64)]) -> RationalPolynomial {
        let coeffs: Vec<BigRational> = coeffs.iter().map(|&(p, d)| q(p, d)).collect();
        RationalPolynomial::from_rationals(&coeffs)
    }

    #[test]
    fn test_add_unlike_denominators() {
        let a = poly(&[(1, 2), (3, 4)]);
        let b = poly(&[(1, 3), (1, 2)]);
        let sum = a.add(&b);
        assert_eq!(sum, poly(&[(5, 6), (5, 4)]));
        assert_eq!(sum.coefficient(0).denom(), &BigInt::from(6));
        assert_eq!(sum.coefficient(1).denom(), &BigInt::from(4));
        assert!(sum.is_canonical());
    }

    #[test]
    fn test_add_shared_factor_reduces() {
        // 1/6 + 1/3 = 1/2 goes through the d != 1 path and needs the final reduction.
        let a = poly(&[(1, 6)]);
        let b = poly(&[(1, 3)]);
        assert_eq!(a.add(&b), poly(&[(1, 2)]));
        // Equal denominators: 1/4 + 1/4 = 1/2.
        let c = poly(&[(1, 4), (1, 1)]);
        let d = poly(&[(1, 4), (-1, 1)]);
        assert_eq!(c.add(&d), poly(&[(1, 2)]));
    }

    #[test]
    fn test_sub_self_is_zero() {
        let a = poly(&[(1, 2), (3, 4)]);
        assert!(a.sub(&a).is_zero());
        assert!(a.sub(&a.clone()).is_zero());
        assert!((&a - &a).is_canonical());
    }

    #[test]
    fn test_add_series_truncation_reduces() {
        // (1/2 + x/2 + x^2/4) + (0) modulo x^2 = 1/2 + x/2
        let a = poly(&[(1, 2), (1, 2), (1, 4)]);
        let b = poly(&[(0, 1), (0, 1), (1, 3)]);
        let r = a.add_series(&b, 2);
        assert!(r.is_canonical());
        assert_eq!(r, poly(&[(1, 2), (1, 2)]));

        let s = a.sub_series(&b, 3);
        assert_eq!(s, poly(&[(1, 2), (1, 2), (-1, 12)]));
    }

    #[test]
    fn test_scalar_ops() {
        let a = poly(&[(1, 2), (3, 4)]);
        assert_eq!(a.scalar_mul_integer(&BigInt::from(4)), poly(&[(2, 1), (3, 1)]));
        assert_eq!(a.scalar_div_integer(&BigInt::from(-3)), poly(&[(-1, 6), (-1, 4)]));
        assert_eq!(a.scalar_mul_rational(&q(2, 3)), poly(&[(1, 3), (1, 2)]));
        assert_eq!(a.scalar_div_rational(&q(-1, 2)), poly(&[(-1, 1), (-3, 2)]));
        assert!(a.scalar_mul_integer(&BigInt::zero()).is_zero());
        for r in [
            a.scalar_mul_integer(&BigInt::from(6)),
            a.scalar_div_integer(&BigInt::from(9)),
            a.scalar_mul_rational(&q(-8, 9)),
        ] {
            assert!(r.is_canonical());
        }
    }

    #[test]
    #[should_panic(expected = "scalar_div_integer: Division by zero")]
    fn test_scalar_div_by_zero() {
        poly(&[(1, 2)]).scalar_div_integer(&BigInt::zero());
    }

    #[test]
    #[should_panic(expected = "scalar_div_rational: Division by zero")]
    fn test_scalar_div_rational_by_zero() {
        poly(&[(1, 2)]).scalar_div_rational(&q(0, 1));
    }

    #[test]
    fn test_mul_and_mullow() {
        // (1/2 + x)(2 - x) = 1 + 3/2 x - x^2
        let a = poly(&[(1, 2), (1, 1)]);
        let b = poly(&[(2, 1), (-1, 1)]);
        let product = a.mul(&b);
        assert_eq!(product, poly(&[(1, 1), (3, 2), (-1, 1)]));
        assert!(product.is_canonical());
        assert_eq!(a.mullow(&b, 2), poly(&[(1, 1), (3, 2)]));
        assert_eq!(&a * &b, product);

        let square = a.mul(&a);
        assert_eq!(square, poly(&[(1, 4), (1, 1), (1, 1)]));
    }

    #[test]
    fn test_pow() {
        let a = poly(&[(1, 2), (1, 1)]);
        assert_eq!(a.pow(0), RationalPolynomial::one());
        assert_eq!(a.pow(2), a.mul(&a));
        assert_eq!(a.pow(3), a.mul(&a).mul(&a));
        assert!(a.pow(5).is_canonical());
        assert_eq!(a.pow_trunc(3, 2), poly(&[(1, 8), (3, 4)]));
        assert_eq!(a.pow_trunc(0, 3), RationalPolynomial::one());
    }

    #[test]
    fn test_operators() {
        let a = poly(&[(1, 2), (1, 1)]);
        let b = poly(&[(1, 3)]);
        let mut c = a.clone();
        c += &b;
        assert_eq!(c, &a + &b);
        c -= b.clone();
        assert_eq!(c, a);
        c *= &b;
        assert_eq!(c, a.mul(&b));
        assert_eq!(-(-a.clone()), a);
    }
}
