// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Shared `proptest` strategies for the ratpoly property suites.

use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::collection::vec;
use proptest::prelude::*;
use ratpoly_rational::RationalPolynomial;

/// Small signed integers, including zero.
pub fn arb_small_int() -> impl Strategy<Value = i64> {
    -40i64..=40
}

pub fn arb_bigint() -> impl Strategy<Value = BigInt> {
    prop_oneof![
        3 => arb_small_int().prop_map(BigInt::from),
        1 => any::<i64>().prop_map(BigInt::from),
        1 => (any::<i64>(), any::<u64>())
            .prop_map(|(hi, lo)| (BigInt::from(hi) << 64) + BigInt::from(lo)),
    ]
}

/// Integer coefficient vectors, possibly with trailing zeros.
pub fn arb_int_vec(max_len: usize) -> impl Strategy<Value = Vec<BigInt>> {
    vec(arb_bigint(), 0..=max_len)
}

pub fn arb_rational() -> impl Strategy<Value = BigRational> {
    (arb_small_int(), 1i64..=24)
        .prop_map(|(p, q)| BigRational::new(BigInt::from(p), BigInt::from(q)))
}

pub fn arb_nonzero_rational() -> impl Strategy<Value = BigRational> {
    arb_rational().prop_filter("nonzero", |c| c != &BigRational::from(BigInt::from(0)))
}

/// Canonical rational polynomials of length at most `max_len`.
pub fn arb_polynomial(max_len: usize) -> impl Strategy<Value = RationalPolynomial> {
    vec(arb_rational(), 0..=max_len).prop_map(|c| RationalPolynomial::from_rationals(&c))
}

pub fn arb_nonzero_polynomial(max_len: usize) -> impl Strategy<Value = RationalPolynomial> {
    (vec(arb_rational(), 0..max_len.max(1)), arb_nonzero_rational()).prop_map(
        |(mut coeffs, lead)| {
            coeffs.push(lead);
            RationalPolynomial::from_rationals(&coeffs)
        },
    )
}

/// Series with the given constant term.
fn arb_series_with_constant(
    max_len: usize,
    constant: impl Strategy<Value = BigRational>,
) -> impl Strategy<Value = RationalPolynomial> {
    (constant, vec(arb_rational(), 0..max_len.max(1))).prop_map(|(c0, rest)| {
        let mut coeffs = vec![c0];
        coeffs.extend(rest);
        RationalPolynomial::from_rationals(&coeffs)
    })
}

/// Series with nonzero constant term.
pub fn arb_unit_series(max_len: usize) -> impl Strategy<Value = RationalPolynomial> {
    arb_series_with_constant(max_len, arb_nonzero_rational())
}

/// Series with constant term zero.
pub fn arb_zero_constant_series(max_len: usize) -> impl Strategy<Value = RationalPolynomial> {
    arb_series_with_constant(max_len, Just(BigRational::from(BigInt::from(0))))
}

/// Series with constant term one.
pub fn arb_one_constant_series(max_len: usize) -> impl Strategy<Value = RationalPolynomial> {
    arb_series_with_constant(max_len, Just(BigRational::from(BigInt::from(1))))
}

/// Series with zero constant term and nonzero linear term.
pub fn arb_revertible_series(max_len: usize) -> impl Strategy<Value = RationalPolynomial> {
    (
        arb_nonzero_rational(),
        vec(arb_rational(), 0..max_len.saturating_sub(1).max(1)),
    )
        .prop_map(|(c1, rest)| {
            let mut coeffs = vec![BigRational::from(BigInt::from(0)), c1];
            coeffs.extend(rest);
            RationalPolynomial::from_rationals(&coeffs)
        })
}

/// Arbitrary fractions `p/q`, for continued fraction properties.
pub fn arb_fraction() -> impl Strategy<Value = BigRational> {
    (arb_bigint(), arb_bigint()).prop_filter_map("nonzero denominator", |(p, q)| {
        if q == BigInt::from(0) {
            None
        } else {
            Some(BigRational::new(p, q))
        }
    })
}
