// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Truncated power series over `Q`.
//!
//! Every operation takes a target length `n` and returns a canonical polynomial of
//! length at most `n`, computed modulo `x^n`. Preconditions on constant terms are fatal.

mod compose;
mod exp_log;
mod inverse;
mod trig;

use num_bigint::BigInt;

pub use compose::CompositionAlgorithm;
pub use inverse::InvSeriesAlgorithm;

use crate::errors::{fatal, RationalPolynomialError};
use crate::polynomial::RationalPolynomial;

/// Aborts unless the constant term of `h` is `expected` (0 or 1).
fn require_constant_term(operation: &str, h: &RationalPolynomial, expected: u8) {
    if !h.constant_term_is(&BigInt::from(expected)) {
        fatal(operation, RationalPolynomialError::ConstantTerm { expected });
    }
}

/// `integral(h' * g)` modulo `x^n`, the shape shared by log and the inverse
/// trigonometric series. `g` must be correct to `n - 1` terms.
fn integrate_product(
    h: &RationalPolynomial,
    g: &RationalPolynomial,
    n: usize,
) -> RationalPolynomial {
    if n <= 1 {
        return RationalPolynomial::zero();
    }
    let derivative = h.truncated(n).derivative();
    let mut out = derivative.mullow(g, n - 1).integral();
    out.truncate(n);
    out
}
