// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Series composition (Horner and Brent-Kung) and reversion.

use ndarray::Array2;
use num_bigint::BigInt;
use num_integer::Roots;
use num_traits::{One, Zero};
use ratpoly_config::{thresholds, Thresholds};
use ratpoly_polynomial::{mul, vector};
use tracing::debug;

use crate::errors::{fatal, RationalPolynomialError};
use crate::newton::{newton_iterate, NewtonLift};
use crate::polynomial::RationalPolynomial;

/// Series composition strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionAlgorithm {
    /// `r <- r * p2 + p1[i]` from the top coefficient down.
    Horner,
    /// Baby-step giant-step evaluation with one matrix product.
    BrentKung,
}

impl CompositionAlgorithm {
    /// Horner for outer polynomials of length up to the cutoff.
    pub fn select(len: usize, thresholds: &Thresholds) -> Self {
        if len <= thresholds.compose_brent_kung_cutoff {
            CompositionAlgorithm::Horner
        } else {
            CompositionAlgorithm::BrentKung
        }
    }
}

fn require_zero_constant(operation: &str, inner: &RationalPolynomial) {
    if !inner.constant_term_is(&BigInt::zero()) {
        fatal(operation, RationalPolynomialError::InvalidCompositionInner);
    }
}

impl RationalPolynomial {
    /// `self(inner(x))` modulo `x^n`.
    ///
    /// # Panics
    ///
    /// Panics (fatal) if `inner` has a nonzero constant term.
    pub fn compose_series(&self, inner: &Self, n: usize) -> Self {
        require_zero_constant("compose_series", inner);
        let algorithm = CompositionAlgorithm::select(self.len(), thresholds());
        debug!(len = self.len(), n, ?algorithm, "compose_series dispatch");
        match algorithm {
            CompositionAlgorithm::Horner => self.compose_series_horner(inner, n),
            CompositionAlgorithm::BrentKung => self.compose_series_brent_kung(inner, n),
        }
    }

    /// Horner composition, canonical after every step.
    ///
    /// # Panics
    ///
    /// Panics (fatal) if `inner` has a nonzero constant term.
    pub fn compose_series_horner(&self, inner: &Self, n: usize) -> Self {
        require_zero_constant("compose_series_horner", inner);
        // Terms of degree n and above in self only contribute past x^n.
        let len = self.len().min(n);
        let mut result = Self::zero();
        for i in (0..len).rev() {
            result = result
                .mullow(inner, n)
                .add(&Self::from_rational(&self.coefficient(i)));
        }
        result
    }

    /// Brent-Kung composition.
    ///
    /// With `m = floor(sqrt(n)) + 1`, `self` is cut into blocks of `m` coefficients,
    /// which form the rows of a matrix `A`. The rows of `B` are `inner^j` for
    /// `j < m`, so row `i` of `A * B` is block `i` evaluated at `inner`. The blocks are
    /// then combined by a Horner scheme in `inner^m`.
    ///
    /// # Panics
    ///
    /// Panics (fatal) if `inner` has a nonzero constant term.
    pub fn compose_series_brent_kung(&self, inner: &Self, n: usize) -> Self {
        require_zero_constant("compose_series_brent_kung", inner);
        let len = self.len().min(n);
        if len == 0 {
            return Self::zero();
        }
        if len == 1 || inner.is_zero() {
            return Self::from_rational(&self.coefficient(0));
        }

        let m = n.sqrt() + 1;
        let rows = len.div_ceil(m);

        // inner = B / d. Row j of the power matrix is B^j d^(m-1-j), so that every row
        // is over the common denominator d^(m-1).
        let d = &inner.den;
        let common_den = vector::pow(d, m - 1);
        let mut powers: Vec<Vec<BigInt>> = Vec::with_capacity(m);
        powers.push(vec![BigInt::one()]);
        for j in 1..m {
            let next = mul::mullow(&powers[j - 1], &inner.coeffs, n);
            powers.push(next);
        }
        let giant = {
            let mut last = Self::from_raw_parts(powers[m - 1].clone(), common_den.clone());
            last.canonicalise();
            inner.mullow(&last, n)
        };
        let mut scale = BigInt::one();
        for row in powers.iter_mut().rev() {
            vector::scalar_mul_assign(row, &scale);
            scale *= d;
        }

        let a = Array2::from_shape_fn((rows, m), |(i, j)| {
            let k = i * m + j;
            if k < len {
                self.coeffs[k].clone()
            } else {
                BigInt::zero()
            }
        });
        let b = Array2::from_shape_fn((m, n), |(j, k)| {
            powers[j].get(k).cloned().unwrap_or_default()
        });
        let c = mat_mul(&a, &b);

        let mut result = Self::zero();
        for i in (0..rows).rev() {
            let mut block = Self::from_raw_parts(c.row(i).to_vec(), common_den.clone());
            block.canonicalise();
            result = result.mullow(&giant, n).add(&block);
        }
        result.scalar_div_integer(&self.den)
    }

    /// Compositional inverse: `g` with `self(g(x)) = x` modulo `x^n`.
    ///
    /// # Panics
    ///
    /// Panics (fatal) unless the constant term is zero and the linear term is nonzero.
    pub fn revert_series(&self, n: usize) -> Self {
        if !self.constant_term_is(&BigInt::zero()) {
            fatal("revert_series", RationalPolynomialError::ConstantTerm { expected: 0 });
        }
        if self.coeffs.get(1).map_or(true, Zero::is_zero) {
            fatal("revert_series", RationalPolynomialError::NonInvertibleLinearTerm);
        }
        if n == 0 {
            return Self::zero();
        }
        let lift = RevertLift {
            f: self,
            derivative: self.derivative(),
        };
        newton_iterate(&lift, n, 3)
    }
}

fn mat_mul(a: &Array2<BigInt>, b: &Array2<BigInt>) -> Array2<BigInt> {
    let (rows, inner) = a.dim();
    let cols = b.ncols();
    let mut c = Array2::from_elem((rows, cols), BigInt::zero());
    for i in 0..rows {
        for j in 0..inner {
            let x = &a[[i, j]];
            if x.is_zero() {
                continue;
            }
            for k in 0..cols {
                let y = &b[[j, k]];
                if !y.is_zero() {
                    c[[i, k]] += x * y;
                }
            }
        }
    }
    c
}

struct RevertLift<'a> {
    f: &'a RationalPolynomial,
    derivative: RationalPolynomial,
}

impl NewtonLift for RevertLift<'_> {
    fn base_case(&self, m: usize) -> RationalPolynomial {
        // x / f1
        let linear = self.f.coefficient(1).recip();
        RationalPolynomial::from_rational(&linear)
            .shift_left(1)
            .truncated(m)
    }

    fn lift(&self, g: &RationalPolynomial, _from: usize, to: usize) -> RationalPolynomial {
        // g - (f(g) - x) / f'(g)
        let residual = self
            .f
            .compose_series(g, to)
            .sub_series(&RationalPolynomial::x(), to);
        let slope = self.derivative.compose_series(g, to);
        g.sub_series(&residual.div_series(&slope, to), to)
    }
}
