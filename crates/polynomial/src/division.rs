// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Division kernels over `Z[x]`.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::errors::PolynomialError;
use crate::vector::{normalise, normalised_len, scalar_mul_assign, submul_shifted};

/// Result of [`pseudo_divrem`]: `lead(B)^exponent * A = quotient * B + remainder`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PseudoDivRem {
    pub quotient: Vec<BigInt>,
    pub remainder: Vec<BigInt>,
    pub exponent: usize,
}

/// Pseudo-division with the fixed exponent `len(A) - len(B) + 1`.
///
/// Both outputs are normalised. When `A` is shorter than `B` the exponent is zero,
/// the quotient is empty and the remainder is `A` itself.
pub fn pseudo_divrem(a: &[BigInt], b: &[BigInt]) -> Result<PseudoDivRem, PolynomialError> {
    let len_b = normalised_len(b);
    if len_b == 0 {
        return Err(PolynomialError::DivisionByZero);
    }
    let len_a = normalised_len(a);
    if len_a < len_b {
        return Ok(PseudoDivRem {
            quotient: Vec::new(),
            remainder: a[..len_a].to_vec(),
            exponent: 0,
        });
    }

    let b = &b[..len_b];
    let lead = &b[len_b - 1];
    let exponent = len_a - len_b + 1;
    let mut quotient = vec![BigInt::zero(); exponent];
    let mut remainder = a[..len_a].to_vec();

    for i in (0..exponent).rev() {
        let top = i + len_b - 1;
        let c = std::mem::take(&mut remainder[top]);
        scalar_mul_assign(&mut quotient[i + 1..], lead);
        scalar_mul_assign(&mut remainder[..top], lead);
        if !c.is_zero() {
            submul_shifted(&mut remainder[..top], &b[..len_b - 1], &c, i);
        }
        quotient[i] = c;
    }

    remainder.truncate(len_b - 1);
    normalise(&mut remainder);
    normalise(&mut quotient);
    Ok(PseudoDivRem {
        quotient,
        remainder,
        exponent,
    })
}

/// Pseudo-remainder with its exponent.
pub fn pseudo_rem(a: &[BigInt], b: &[BigInt]) -> Result<(Vec<BigInt>, usize), PolynomialError> {
    let PseudoDivRem {
        remainder,
        exponent,
        ..
    } = pseudo_divrem(a, b)?;
    Ok((remainder, exponent))
}

/// Euclidean division over `Z`, failing as soon as a leading coefficient of the
/// running remainder is not a multiple of `lead(B)`.
pub fn divrem_exact(
    a: &[BigInt],
    b: &[BigInt],
) -> Result<(Vec<BigInt>, Vec<BigInt>), PolynomialError> {
    let len_b = normalised_len(b);
    if len_b == 0 {
        return Err(PolynomialError::DivisionByZero);
    }
    let len_a = normalised_len(a);
    if len_a < len_b {
        return Ok((Vec::new(), a[..len_a].to_vec()));
    }

    let b = &b[..len_b];
    let lead = &b[len_b - 1];
    let mut quotient = vec![BigInt::zero(); len_a - len_b + 1];
    let mut remainder = a[..len_a].to_vec();

    for i in (0..quotient.len()).rev() {
        let top = &remainder[i + len_b - 1];
        if top.is_zero() {
            continue;
        }
        let (q, r) = top.div_rem(lead);
        if !r.is_zero() {
            return Err(PolynomialError::InexactDivision {
                dividend: top.to_string(),
                divisor: lead.to_string(),
            });
        }
        submul_shifted(&mut remainder, b, &q, i);
        quotient[i] = q;
    }

    remainder.truncate(len_b - 1);
    normalise(&mut remainder);
    normalise(&mut quotient);
    Ok((quotient, remainder))
}

/// Returns `Q` with `A = Q * B` when `B` divides `A` exactly over `Z`.
///
/// A zero `B` divides only the zero polynomial, for which the quotient is zero.
pub fn divides(a: &[BigInt], b: &[BigInt]) -> Option<Vec<BigInt>> {
    let len_a = normalised_len(a);
    let len_b = normalised_len(b);
    if len_a == 0 {
        return Some(Vec::new());
    }
    if len_b == 0 || len_a < len_b {
        return None;
    }
    // Cheap rejection on the constant terms before the full division.
    if !b[0].is_zero() && !a[0].is_multiple_of(&b[0]) {
        return None;
    }

    match divrem_exact(a, b) {
        Ok((quotient, remainder)) if remainder.is_empty() => Some(quotient),
        _ => None,
    }
}

/// Reversal kernel for series inversion.
///
/// Returns `(N, a0^n)` with `A * N = a0^n (mod x^n)`, obtained by pseudo-dividing
/// `x^(2n-2)` by the length-`n` reversal of `A` and reversing the quotient.
pub fn inv_series_reversed(
    a: &[BigInt],
    n: usize,
) -> Result<(Vec<BigInt>, BigInt), PolynomialError> {
    let a0 = a.first().filter(|c| !c.is_zero()).ok_or(PolynomialError::DivisionByZero)?;
    if n == 0 {
        return Ok((Vec::new(), BigInt::one()));
    }
    if n == 1 {
        return Ok((vec![BigInt::one()], a0.clone()));
    }

    let reversed: Vec<BigInt> = (0..n)
        .map(|i| a.get(n - 1 - i).cloned().unwrap_or_default())
        .collect();
    let mut power = vec![BigInt::zero(); 2 * n - 1];
    power[2 * n - 2] = BigInt::one();

    let PseudoDivRem {
        quotient, exponent, ..
    } = pseudo_divrem(&power, &reversed)?;
    debug_assert_eq!(exponent, n);

    let mut inverse: Vec<BigInt> = (0..n)
        .map(|i| quotient.get(n - 1 - i).cloned().unwrap_or_default())
        .collect();
    normalise(&mut inverse);
    Ok((inverse, crate::vector::pow(a0, n)))
}
