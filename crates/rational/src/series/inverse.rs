// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Series inversion and division.

use num_traits::Zero;
use ratpoly_config::{thresholds, Thresholds};
use ratpoly_polynomial::{division, vector};
use tracing::debug;

use crate::errors::{fatal, RationalPolynomialError};
use crate::newton::{newton_iterate, NewtonLift};
use crate::polynomial::RationalPolynomial;

/// Series inversion strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvSeriesAlgorithm {
    /// One integer pseudo-division of a power of `x` by the reversed input.
    Basecase,
    /// Newton doubling `g <- g + g (1 - a g)` from a basecase start.
    Newton,
}

impl InvSeriesAlgorithm {
    pub fn select(n: usize, thresholds: &Thresholds) -> Self {
        if n < thresholds.inv_series_newton_cutoff {
            InvSeriesAlgorithm::Basecase
        } else {
            InvSeriesAlgorithm::Newton
        }
    }
}

fn require_unit(operation: &str, a: &RationalPolynomial) {
    if a.numerator().first().map_or(true, Zero::is_zero) {
        fatal(operation, RationalPolynomialError::DivisionByZero);
    }
}

struct InverseLift<'a> {
    a: &'a RationalPolynomial,
}

impl NewtonLift for InverseLift<'_> {
    fn base_case(&self, m: usize) -> RationalPolynomial {
        self.a.inv_series_basecase(m)
    }

    fn lift(&self, g: &RationalPolynomial, _from: usize, to: usize) -> RationalPolynomial {
        let residual = RationalPolynomial::one().sub_series(&self.a.mullow(g, to), to);
        g.add_series(&g.mullow(&residual, to), to)
    }
}

impl RationalPolynomial {
    /// `1 / self` modulo `x^n`.
    ///
    /// # Panics
    ///
    /// Panics (fatal) if the constant term is zero.
    pub fn inv_series(&self, n: usize) -> Self {
        require_unit("inv_series", self);
        let algorithm = InvSeriesAlgorithm::select(n, thresholds());
        debug!(n, ?algorithm, "inv_series dispatch");
        match algorithm {
            InvSeriesAlgorithm::Basecase => self.inv_series_basecase(n),
            InvSeriesAlgorithm::Newton => self.inv_series_newton(n),
        }
    }

    /// Inversion through the reversal kernel: with `a = A / d` and
    /// `A * N = a0^n (mod x^n)`, the inverse is `d * N / a0^n`.
    ///
    /// # Panics
    ///
    /// Panics (fatal) if the constant term is zero.
    pub fn inv_series_basecase(&self, n: usize) -> Self {
        require_unit("inv_series_basecase", self);
        if n == 0 {
            return Self::zero();
        }
        let a = &self.coeffs[..self.len().min(n)];
        let (inverse, scale) = match division::inv_series_reversed(a, n) {
            Ok(result) => result,
            Err(err) => fatal("inv_series_basecase", err.into()),
        };
        let mut out = Self::from_raw_parts(vector::scalar_mul(&inverse, &self.den), scale);
        out.canonicalise();
        out
    }

    /// Inversion by Newton doubling with the configured base cutoff.
    ///
    /// # Panics
    ///
    /// Panics (fatal) if the constant term is zero.
    pub fn inv_series_newton(&self, n: usize) -> Self {
        require_unit("inv_series_newton", self);
        if n == 0 {
            return Self::zero();
        }
        newton_iterate(
            &InverseLift { a: self },
            n,
            thresholds().inv_series_newton_cutoff,
        )
    }

    /// `self / divisor` modulo `x^n`.
    ///
    /// # Panics
    ///
    /// Panics (fatal) if the constant term of `divisor` is zero.
    pub fn div_series(&self, divisor: &Self, n: usize) -> Self {
        require_unit("div_series", divisor);
        if n == 0 || self.is_zero() {
            return Self::zero();
        }
        self.mullow(&divisor.inv_series(n), n)
    }
}
