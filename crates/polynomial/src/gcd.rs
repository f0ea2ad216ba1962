// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Content, gcd and resultant over `Z[x]`.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::division::pseudo_rem;
use crate::vector::{
    content, neg_assign, normalised_len, pow, scalar_divexact_assign, scalar_mul_assign,
};

/// Divides out the content and makes the leading coefficient positive.
pub fn primitive_part(a: &[BigInt]) -> Vec<BigInt> {
    let len = normalised_len(a);
    let mut out = a[..len].to_vec();
    if len == 0 {
        return out;
    }
    let mut c = content(&out);
    if out[len - 1].is_negative() {
        c = -c;
    }
    scalar_divexact_assign(&mut out, &c);
    out
}

/// Greatest common divisor with positive leading coefficient.
///
/// `gcd(a, 0)` is `a` up to sign and `gcd(0, 0)` is zero.
pub fn gcd(a: &[BigInt], b: &[BigInt]) -> Vec<BigInt> {
    let len_a = normalised_len(a);
    let len_b = normalised_len(b);
    let (a, b) = (&a[..len_a], &b[..len_b]);

    if len_b == 0 || len_a == 0 {
        let mut out = if len_b == 0 { a.to_vec() } else { b.to_vec() };
        if out.last().is_some_and(Signed::is_negative) {
            neg_assign(&mut out);
        }
        return out;
    }

    let c = content(a).gcd(&content(b));
    let (mut a, mut b) = if len_a >= len_b {
        (primitive_part(a), primitive_part(b))
    } else {
        (primitive_part(b), primitive_part(a))
    };

    loop {
        if b.len() == 1 {
            return vec![c];
        }
        // b is non-zero so the pseudo-remainder cannot fail.
        let Ok((r, _)) = pseudo_rem(&a, &b) else {
            return vec![c];
        };
        if r.is_empty() {
            scalar_mul_assign(&mut b, &c);
            return b;
        }
        a = std::mem::replace(&mut b, primitive_part(&r));
    }
}

/// Resultant by the subresultant pseudo-remainder sequence.
pub fn resultant(a: &[BigInt], b: &[BigInt]) -> BigInt {
    let len_a = normalised_len(a);
    let len_b = normalised_len(b);
    if len_a == 0 || len_b == 0 {
        return BigInt::zero();
    }

    let (mut a, mut b, mut sign) = if len_a >= len_b {
        (a[..len_a].to_vec(), b[..len_b].to_vec(), BigInt::one())
    } else {
        let sign = if (len_a - 1) * (len_b - 1) % 2 == 1 {
            -BigInt::one()
        } else {
            BigInt::one()
        };
        (b[..len_b].to_vec(), a[..len_a].to_vec(), sign)
    };

    let deg_a = a.len() - 1;
    let deg_b = b.len() - 1;
    if deg_b == 0 {
        return sign * pow(&b[0], deg_a);
    }
    if deg_b == 1 {
        return sign * resultant_linear(&a, &b[0], &b[1]);
    }

    let content_a = content(&a);
    let content_b = content(&b);
    scalar_divexact_assign(&mut a, &content_a);
    scalar_divexact_assign(&mut b, &content_b);
    let scale = pow(&content_a, deg_b) * pow(&content_b, deg_a);

    let mut g = BigInt::one();
    let mut h = BigInt::one();
    loop {
        let deg_a = a.len() - 1;
        let deg_b = b.len() - 1;
        let delta = deg_a - deg_b;
        if deg_a % 2 == 1 && deg_b % 2 == 1 {
            sign = -sign;
        }

        let Ok((mut r, _)) = pseudo_rem(&a, &b) else {
            return BigInt::zero();
        };
        let divisor = &g * pow(&h, delta);
        scalar_divexact_assign(&mut r, &divisor);
        a = std::mem::replace(&mut b, r);

        g = a[a.len() - 1].clone();
        if delta > 0 {
            h = pow(&g, delta) / pow(&h, delta - 1);
        }

        match b.len() {
            0 => return BigInt::zero(),
            1 => {
                let deg_a = a.len() - 1;
                let h = pow(&b[0], deg_a) / pow(&h, deg_a - 1);
                return sign * scale * h;
            }
            _ => {}
        }
    }
}

/// `res(a, b1 x + b0) = (-1)^m b1^m a(-b0 / b1)` for `a` of degree `m`, evaluated as
/// the homogeneous form `sum a_i b0^i (-b1)^(m - i)`.
fn resultant_linear(a: &[BigInt], b0: &BigInt, b1: &BigInt) -> BigInt {
    let Some((top, rest)) = a.split_last() else {
        return BigInt::zero();
    };
    let q = -b1;
    let mut q_pow = BigInt::one();
    let mut acc = top.clone();
    for c in rest.iter().rev() {
        q_pow *= &q;
        acc = acc * b0 + c * &q_pow;
    }
    acc
}
