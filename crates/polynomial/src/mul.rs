// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Integer polynomial multiplication backends and their dispatcher.
//!
//! All kernels take ascending coefficient slices and return exactly
//! `len1 + len2 - 1` coefficients (or `min(n, len1 + len2 - 1)` for the truncated
//! variants). An empty operand gives an empty product. Outputs are not normalised:
//! operands with trailing zeros produce products with trailing zeros.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Signed, Zero};
use ratpoly_config::{thresholds, Thresholds};
use tracing::trace;

use crate::vector::max_bits;

/// Multiplication algorithm picked by [`MulAlgorithm::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MulAlgorithm {
    /// Schoolbook product, quadratic in the length.
    Classical,
    /// Recursive three-multiplication split.
    Karatsuba,
    /// Pack both operands into single integers and multiply those.
    KroneckerSubstitution,
}

impl MulAlgorithm {
    /// Chooses a backend from the operand lengths and the largest coefficient size.
    pub fn select(len1: usize, len2: usize, bits: u64, thresholds: &Thresholds) -> Self {
        if len1.min(len2) <= thresholds.mul_classical_cutoff {
            MulAlgorithm::Classical
        } else if bits > thresholds.mul_karatsuba_cutoff_bits {
            MulAlgorithm::Karatsuba
        } else {
            MulAlgorithm::KroneckerSubstitution
        }
    }
}

/// Free-function form of [`MulAlgorithm::select`].
pub fn select_mul_algorithm(
    len1: usize,
    len2: usize,
    bits: u64,
    thresholds: &Thresholds,
) -> MulAlgorithm {
    MulAlgorithm::select(len1, len2, bits, thresholds)
}

/// Multiplies with the backend chosen from the process-wide thresholds.
pub fn mul(a: &[BigInt], b: &[BigInt]) -> Vec<BigInt> {
    mul_with(a, b, thresholds())
}

/// Multiplies with the backend chosen from `thresholds`.
pub fn mul_with(a: &[BigInt], b: &[BigInt], thresholds: &Thresholds) -> Vec<BigInt> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let bits = max_bits(a).max(max_bits(b));
    let algorithm = select_mul_algorithm(a.len(), b.len(), bits, thresholds);
    trace!(len1 = a.len(), len2 = b.len(), bits, ?algorithm, "integer poly mul");
    mul_using(algorithm, a, b, thresholds)
}

/// Multiplies with an explicitly chosen backend.
pub fn mul_using(
    algorithm: MulAlgorithm,
    a: &[BigInt],
    b: &[BigInt],
    thresholds: &Thresholds,
) -> Vec<BigInt> {
    match algorithm {
        MulAlgorithm::Classical => mul_classical(a, b),
        MulAlgorithm::Karatsuba => mul_karatsuba(a, b, thresholds.mul_classical_cutoff),
        MulAlgorithm::KroneckerSubstitution => mul_kronecker(a, b),
    }
}

/// Squares `a`.
pub fn sqr(a: &[BigInt]) -> Vec<BigInt> {
    if a.is_empty() {
        return Vec::new();
    }
    let thresholds = thresholds();
    match MulAlgorithm::select(a.len(), a.len(), max_bits(a), thresholds) {
        MulAlgorithm::KroneckerSubstitution => {
            let b = kronecker_slot_bits(a, a);
            let packed = pack(a, b);
            unpack(&(&packed * &packed), b, 2 * a.len() - 1)
        }
        algorithm => mul_using(algorithm, a, a, thresholds),
    }
}

/// Returns the first `n` coefficients of `a * b`.
pub fn mullow(a: &[BigInt], b: &[BigInt], n: usize) -> Vec<BigInt> {
    mullow_with(a, b, n, thresholds())
}

/// Truncated product dispatching on `thresholds`.
pub fn mullow_with(a: &[BigInt], b: &[BigInt], n: usize, thresholds: &Thresholds) -> Vec<BigInt> {
    if n == 0 || a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let a = &a[..a.len().min(n)];
    let b = &b[..b.len().min(n)];
    if n <= thresholds.mullow_classical_cutoff {
        return mullow_classical(a, b, n);
    }
    let mut product = mul_with(a, b, thresholds);
    product.truncate(n);
    product
}

/// Schoolbook product.
pub fn mul_classical(a: &[BigInt], b: &[BigInt]) -> Vec<BigInt> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![BigInt::zero(); a.len() + b.len() - 1];
    for (i, x) in a.iter().enumerate() {
        if x.is_zero() {
            continue;
        }
        for (j, y) in b.iter().enumerate() {
            out[i + j] += x * y;
        }
    }
    out
}

/// Schoolbook product keeping only the first `n` coefficients.
pub fn mullow_classical(a: &[BigInt], b: &[BigInt], n: usize) -> Vec<BigInt> {
    if n == 0 || a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let len = n.min(a.len() + b.len() - 1);
    let mut out = vec![BigInt::zero(); len];
    for (i, x) in a.iter().enumerate().take(len) {
        if x.is_zero() {
            continue;
        }
        for (j, y) in b.iter().enumerate().take(len - i) {
            out[i + j] += x * y;
        }
    }
    out
}

/// Karatsuba product, falling back to schoolbook once the shorter operand has at
/// most `cutoff` coefficients.
pub fn mul_karatsuba(a: &[BigInt], b: &[BigInt], cutoff: usize) -> Vec<BigInt> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    if a.len().min(b.len()) <= cutoff.max(1) {
        return mul_classical(a, b);
    }

    let m = a.len().max(b.len()) / 2;
    let (a0, a1) = a.split_at(m.min(a.len()));
    let (b0, b1) = b.split_at(m.min(b.len()));

    let p0 = mul_karatsuba(a0, b0, cutoff);
    let p2 = mul_karatsuba(a1, b1, cutoff);
    let a01 = crate::vector::add(a0, a1);
    let b01 = crate::vector::add(b0, b1);
    let mut p1 = mul_karatsuba(&a01, &b01, cutoff);
    p1.iter_mut().zip(&p0).for_each(|(p, o)| *p -= o);
    p1.iter_mut().zip(&p2).for_each(|(p, o)| *p -= o);

    let mut out = vec![BigInt::zero(); a.len() + b.len() - 1];
    for (i, c) in p0.into_iter().enumerate() {
        out[i] += c;
    }
    for (i, c) in p1.into_iter().enumerate() {
        if c.is_zero() {
            continue;
        }
        out[i + m] += c;
    }
    for (i, c) in p2.into_iter().enumerate() {
        out[i + 2 * m] += c;
    }
    out
}

/// Kronecker substitution: evaluate both operands at `2^b`, multiply the two
/// integers and read the product coefficients back as signed `b`-bit digits.
pub fn mul_kronecker(a: &[BigInt], b: &[BigInt]) -> Vec<BigInt> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let slot = kronecker_slot_bits(a, b);
    let product = pack(a, slot) * pack(b, slot);
    unpack(&product, slot, a.len() + b.len() - 1)
}

/// Slot width such that every product coefficient lies strictly inside
/// `(-2^(slot-1), 2^(slot-1))`.
fn kronecker_slot_bits(a: &[BigInt], b: &[BigInt]) -> usize {
    let terms = a.len().min(b.len()) as u64;
    let term_bits = u64::from(u64::BITS - terms.leading_zeros());
    (max_bits(a) + max_bits(b) + term_bits + 1) as usize
}

fn pack(coeffs: &[BigInt], slot: usize) -> BigInt {
    let words = coeffs.len() * slot / 32 + 2;
    let mut positive = vec![0u32; words];
    let mut negative = vec![0u32; words];
    for (i, c) in coeffs.iter().enumerate() {
        if c.is_zero() {
            continue;
        }
        let target = if c.is_negative() {
            &mut negative
        } else {
            &mut positive
        };
        or_bits(target, &c.magnitude().to_u32_digits(), i * slot);
    }
    BigInt::from_biguint(Sign::Plus, BigUint::new(positive))
        - BigInt::from_biguint(Sign::Plus, BigUint::new(negative))
}

fn or_bits(target: &mut [u32], digits: &[u32], offset: usize) {
    let word = offset / 32;
    let shift = offset % 32;
    for (k, &d) in digits.iter().enumerate() {
        let wide = u64::from(d) << shift;
        target[word + k] |= wide as u32;
        let high = (wide >> 32) as u32;
        if high != 0 {
            target[word + k + 1] |= high;
        }
    }
}

fn extract_bits(digits: &[u32], start: usize, len: usize) -> BigUint {
    let words = len.div_ceil(32);
    let first = start / 32;
    let shift = start % 32;
    let mut out = Vec::with_capacity(words);
    for i in 0..words {
        let low = u64::from(digits.get(first + i).copied().unwrap_or(0));
        let high = u64::from(digits.get(first + i + 1).copied().unwrap_or(0));
        out.push(((low | (high << 32)) >> shift) as u32);
    }
    let rem = len % 32;
    if rem != 0 {
        if let Some(last) = out.last_mut() {
            *last &= (1u32 << rem) - 1;
        }
    }
    BigUint::new(out)
}

fn unpack(value: &BigInt, slot: usize, len: usize) -> Vec<BigInt> {
    let negative = value.is_negative();
    let digits = value.magnitude().to_u32_digits();
    let half = BigInt::one() << (slot - 1);
    let full = BigInt::one() << slot;

    let mut out = Vec::with_capacity(len);
    let mut borrow = false;
    for k in 0..len {
        let mut r = BigInt::from(extract_bits(&digits, k * slot, slot));
        if borrow {
            r += 1;
        }
        borrow = r >= half;
        if borrow {
            r -= &full;
        }
        out.push(if negative { -r } else { r });
    }
    out
}
