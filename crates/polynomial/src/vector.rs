// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Integer vector kernels.
//!
//! Coefficient vectors are plain `BigInt` slices. Lengths are whatever the caller
//! passes in: nothing here trims trailing zeros unless it says so.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Returns the non-negative gcd of all entries, zero for an all-zero (or empty) vector.
///
/// Stops early once the running gcd reaches one.
pub fn content(vec: &[BigInt]) -> BigInt {
    let mut g = BigInt::zero();
    for c in vec.iter().rev() {
        if c.is_zero() {
            continue;
        }
        g = g.gcd(c);
        if g.is_one() {
            break;
        }
    }
    g
}

/// Returns `gcd(content(vec), d)` without computing the full content when `d` is small.
pub fn content_gcd(vec: &[BigInt], d: &BigInt) -> BigInt {
    let mut g = d.abs();
    if g.is_one() {
        return g;
    }
    for c in vec.iter() {
        if c.is_zero() {
            continue;
        }
        g = g.gcd(c);
        if g.is_one() {
            break;
        }
    }
    g
}

/// Checks whether every entry is zero.
pub fn is_zero(vec: &[BigInt]) -> bool {
    vec.iter().all(Zero::is_zero)
}

/// Length of `vec` once trailing zeros are dropped.
pub fn normalised_len(vec: &[BigInt]) -> usize {
    vec.iter().rposition(|c| !c.is_zero()).map_or(0, |i| i + 1)
}

/// Compares two vectors as polynomials, ignoring trailing zeros.
pub fn equal(a: &[BigInt], b: &[BigInt]) -> bool {
    let len = normalised_len(a);
    len == normalised_len(b) && a[..len] == b[..len]
}

/// Drops trailing zeros in place, keeping the allocation.
pub fn normalise(vec: &mut Vec<BigInt>) {
    let len = normalised_len(vec);
    vec.truncate(len);
}

/// Largest bit size of an entry.
pub fn max_bits(vec: &[BigInt]) -> u64 {
    vec.iter().map(BigInt::bits).max().unwrap_or(0)
}

/// Multiplies every entry by `c` in place.
pub fn scalar_mul_assign(vec: &mut [BigInt], c: &BigInt) {
    if c.is_one() {
        return;
    }
    if c.is_zero() {
        vec.iter_mut().for_each(|x| x.set_zero());
        return;
    }
    vec.iter_mut().for_each(|x| *x *= c);
}

/// Returns `vec * c`.
pub fn scalar_mul(vec: &[BigInt], c: &BigInt) -> Vec<BigInt> {
    vec.iter().map(|x| x * c).collect()
}

/// Divides every entry by `c`, which must divide each of them exactly.
///
/// # Panics
///
/// Panics if `c` is zero.
pub fn scalar_divexact_assign(vec: &mut [BigInt], c: &BigInt) {
    if c.is_one() {
        return;
    }
    debug_assert!(
        vec.iter().all(|x| x.is_multiple_of(c)),
        "scalar_divexact: inexact division"
    );
    vec.iter_mut().for_each(|x| *x = &*x / c);
}

/// Negates every entry in place.
pub fn neg_assign(vec: &mut [BigInt]) {
    vec.iter_mut().for_each(|x| *x = -std::mem::take(x));
}

/// Returns `a + b` over the longer of the two lengths.
pub fn add(a: &[BigInt], b: &[BigInt]) -> Vec<BigInt> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = long.to_vec();
    for (x, y) in out.iter_mut().zip(short) {
        *x += y;
    }
    out
}

/// Returns `a - b` over the longer of the two lengths.
pub fn sub(a: &[BigInt], b: &[BigInt]) -> Vec<BigInt> {
    let len = a.len().max(b.len());
    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        let x = match (a.get(i), b.get(i)) {
            (Some(x), Some(y)) => x - y,
            (Some(x), None) => x.clone(),
            (None, Some(y)) => -y,
            (None, None) => unreachable!(),
        };
        out.push(x);
    }
    out
}

/// `acc[offset..] += c * v`.
pub fn addmul_shifted(acc: &mut [BigInt], v: &[BigInt], c: &BigInt, offset: usize) {
    for (x, y) in acc[offset..].iter_mut().zip(v) {
        *x += c * y;
    }
}

/// `acc[offset..] -= c * v`.
pub fn submul_shifted(acc: &mut [BigInt], v: &[BigInt], c: &BigInt, offset: usize) {
    for (x, y) in acc[offset..].iter_mut().zip(v) {
        *x -= c * y;
    }
}

/// Integer power with a machine-word exponent.
pub fn pow(base: &BigInt, exp: usize) -> BigInt {
    num_traits::pow(base.clone(), exp)
}
