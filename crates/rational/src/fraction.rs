// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Canonical fractions and continued fractions.

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::errors::{fatal, RationalPolynomialError};

/// `p/q` in lowest terms with positive denominator.
///
/// # Panics
///
/// Panics (fatal) if `q` is zero.
pub fn canonical_fraction(p: BigInt, q: BigInt) -> BigRational {
    if q.is_zero() {
        fatal("canonical_fraction", RationalPolynomialError::DivisionByZero);
    }
    BigRational::new(p, q)
}

/// Expands `x` into at most `max_terms` continued fraction terms.
///
/// Returns `(terms, remainder)` with `x = [c0; c1, ..., c_{k-1} + remainder]` and
/// `0 <= remainder < 1`. A zero remainder means the expansion is complete; otherwise it
/// continues with the expansion of `1 / remainder`. With `max_terms == 0` the remainder
/// is `x` itself.
pub fn get_cfrac(x: &BigRational, max_terms: usize) -> (Vec<BigInt>, BigRational) {
    if max_terms == 0 {
        return (Vec::new(), x.clone());
    }

    let mut p = x.numer().clone();
    let mut q = x.denom().clone();
    let mut terms = Vec::with_capacity(max_terms.min(cfrac_bound(x)));
    loop {
        let (a, r) = p.div_mod_floor(&q);
        terms.push(a);
        if r.is_zero() {
            return (terms, BigRational::zero());
        }
        if terms.len() == max_terms {
            return (terms, BigRational::new(r, q));
        }
        p = std::mem::replace(&mut q, r);
    }
}

/// Evaluates a finite continued fraction `[c0; c1, ..., c_{k-1}]`; zero for no terms.
pub fn set_cfrac(terms: &[BigInt]) -> BigRational {
    // Convergent recurrence h_i = c_i h_{i-1} + h_{i-2}, likewise for k.
    let (mut h_prev, mut h) = (BigInt::zero(), BigInt::one());
    let (mut k_prev, mut k) = (BigInt::one(), BigInt::zero());
    if terms.is_empty() {
        return BigRational::zero();
    }
    for c in terms {
        let h_next = c * &h + &h_prev;
        let k_next = c * &k + &k_prev;
        h_prev = std::mem::replace(&mut h, h_next);
        k_prev = std::mem::replace(&mut k, k_next);
    }
    BigRational::new(h, k)
}

/// Upper bound on the number of terms [`get_cfrac`] produces for `x`.
///
/// One for integers, otherwise `floor(1.4405 * bits(den)) + 2`.
pub fn cfrac_bound(x: &BigRational) -> usize {
    if x.denom().is_one() {
        return 1;
    }
    (x.denom().bits() * 14405 / 10000) as usize + 2
}
