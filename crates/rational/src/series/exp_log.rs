// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Exponential, logarithm, square root and hyperbolic series.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use ratpoly_config::thresholds;
use tracing::debug;

use super::{integrate_product, require_constant_term};
use crate::newton::{newton_iterate, NewtonLift};
use crate::polynomial::RationalPolynomial;

/// Coefficients of `h^alpha` modulo `x^n` for `h(0) = 1`, by the recurrence
/// `k f_k = sum_{j=1..k} ((alpha + 1) j - k) h_j f_{k-j}`.
fn power_series_basecase(
    h: &RationalPolynomial,
    alpha: &BigRational,
    n: usize,
) -> RationalPolynomial {
    let h: Vec<BigRational> = (0..h.len().min(n)).map(|j| h.coefficient(j)).collect();
    let alpha_plus_one = alpha + BigRational::one();
    let mut f: Vec<BigRational> = Vec::with_capacity(n);
    f.push(BigRational::one());
    for k in 1..n {
        let kq = BigRational::from(BigInt::from(k));
        let mut sum = BigRational::zero();
        for j in 1..=k.min(h.len().saturating_sub(1)) {
            if h[j].is_zero() {
                continue;
            }
            let weight = &alpha_plus_one * BigRational::from(BigInt::from(j)) - &kq;
            sum += weight * &h[j] * &f[k - j];
        }
        f.push(sum / kq);
    }
    RationalPolynomial::from_rationals(&f)
}

struct ExpLift<'a> {
    h: &'a RationalPolynomial,
}

impl NewtonLift for ExpLift<'_> {
    fn base_case(&self, m: usize) -> RationalPolynomial {
        self.h.exp_series_basecase(m)
    }

    fn lift(&self, g: &RationalPolynomial, _from: usize, to: usize) -> RationalPolynomial {
        // g + g (h - log g)
        let residual = self.h.sub_series(&g.log_series(to), to);
        g.add_series(&g.mullow(&residual, to), to)
    }
}

struct InvSqrtLift<'a> {
    h: &'a RationalPolynomial,
}

impl NewtonLift for InvSqrtLift<'_> {
    fn base_case(&self, m: usize) -> RationalPolynomial {
        self.h.invsqrt_series_basecase(m)
    }

    fn lift(&self, y: &RationalPolynomial, _from: usize, to: usize) -> RationalPolynomial {
        // y + y (1 - h y^2) / 2
        let square = y.mullow(y, to);
        let residual = RationalPolynomial::one().sub_series(&self.h.mullow(&square, to), to);
        let correction = y.mullow(&residual, to);
        y.add_series(&correction.scalar_div_integer(&BigInt::from(2)), to)
    }
}

impl RationalPolynomial {
    /// `log(self)` modulo `x^n`, as `integral(h' / h)`.
    ///
    /// # Panics
    ///
    /// Panics (fatal) unless the constant term is one.
    pub fn log_series(&self, n: usize) -> Self {
        require_constant_term("log_series", self, 1);
        if n <= 1 {
            return Self::zero();
        }
        integrate_product(self, &self.inv_series(n - 1), n)
    }

    /// `exp(self)` modulo `x^n`.
    ///
    /// # Panics
    ///
    /// Panics (fatal) unless the constant term is zero.
    pub fn exp_series(&self, n: usize) -> Self {
        require_constant_term("exp_series", self, 0);
        let cutoff = thresholds().exp_series_newton_cutoff;
        let newton = n >= cutoff;
        debug!(n, newton, "exp_series dispatch");
        if newton {
            self.exp_series_newton(n)
        } else {
            self.exp_series_basecase(n)
        }
    }

    /// Quadratic recurrence from `exp(h)' = h' exp(h)`.
    ///
    /// # Panics
    ///
    /// Panics (fatal) unless the constant term is zero.
    pub fn exp_series_basecase(&self, n: usize) -> Self {
        require_constant_term("exp_series_basecase", self, 0);
        if n == 0 {
            return Self::zero();
        }
        let h: Vec<BigRational> = (0..self.len().min(n))
            .map(|j| self.coefficient(j))
            .collect();
        let mut b: Vec<BigRational> = Vec::with_capacity(n);
        b.push(BigRational::one());
        // k b_k = sum_{j=1..k} j h_j b_{k-j}
        for k in 1..n {
            let mut sum = BigRational::zero();
            for j in 1..=k.min(h.len().saturating_sub(1)) {
                if !h[j].is_zero() {
                    sum += &h[j] * &b[k - j] * BigRational::from(BigInt::from(j));
                }
            }
            b.push(sum / BigRational::from(BigInt::from(k)));
        }
        Self::from_rationals(&b)
    }

    /// Newton iteration `g <- g + g (h - log g)`.
    ///
    /// # Panics
    ///
    /// Panics (fatal) unless the constant term is zero.
    pub fn exp_series_newton(&self, n: usize) -> Self {
        require_constant_term("exp_series_newton", self, 0);
        if n == 0 {
            return Self::zero();
        }
        newton_iterate(
            &ExpLift { h: self },
            n,
            thresholds().exp_series_newton_cutoff,
        )
    }

    /// `self^(-1/2)` modulo `x^n`.
    ///
    /// # Panics
    ///
    /// Panics (fatal) unless the constant term is one.
    pub fn invsqrt_series(&self, n: usize) -> Self {
        require_constant_term("invsqrt_series", self, 1);
        let cutoff = thresholds().invsqrt_series_newton_cutoff;
        let newton = n >= cutoff;
        debug!(n, newton, "invsqrt_series dispatch");
        if newton {
            self.invsqrt_series_newton(n)
        } else {
            self.invsqrt_series_basecase(n)
        }
    }

    /// # Panics
    ///
    /// Panics (fatal) unless the constant term is one.
    pub fn invsqrt_series_basecase(&self, n: usize) -> Self {
        require_constant_term("invsqrt_series_basecase", self, 1);
        if n == 0 {
            return Self::zero();
        }
        let alpha = BigRational::new(BigInt::from(-1), BigInt::from(2));
        power_series_basecase(self, &alpha, n)
    }

    /// Newton iteration `y <- y + y (1 - h y^2) / 2`, three truncated products per step.
    ///
    /// # Panics
    ///
    /// Panics (fatal) unless the constant term is one.
    pub fn invsqrt_series_newton(&self, n: usize) -> Self {
        require_constant_term("invsqrt_series_newton", self, 1);
        if n == 0 {
            return Self::zero();
        }
        newton_iterate(
            &InvSqrtLift { h: self },
            n,
            thresholds().invsqrt_series_newton_cutoff,
        )
    }

    /// `sqrt(self)` modulo `x^n`, as `h * h^(-1/2)`.
    ///
    /// # Panics
    ///
    /// Panics (fatal) unless the constant term is one.
    pub fn sqrt_series(&self, n: usize) -> Self {
        require_constant_term("sqrt_series", self, 1);
        if n == 0 {
            return Self::zero();
        }
        self.mullow(&self.invsqrt_series(n), n)
    }

    /// `cosh(self)` modulo `x^n`, as `(exp(h) + 1 / exp(h)) / 2`.
    ///
    /// # Panics
    ///
    /// Panics (fatal) unless the constant term is zero.
    pub fn cosh_series(&self, n: usize) -> Self {
        require_constant_term("cosh_series", self, 0);
        if n == 0 {
            return Self::zero();
        }
        let e = self.exp_series(n);
        e.add(&e.inv_series(n)).scalar_div_integer(&BigInt::from(2))
    }

    /// `sinh(self)` modulo `x^n`, as `(exp(h) - 1 / exp(h)) / 2`.
    ///
    /// # Panics
    ///
    /// Panics (fatal) unless the constant term is zero.
    pub fn sinh_series(&self, n: usize) -> Self {
        require_constant_term("sinh_series", self, 0);
        if n == 0 {
            return Self::zero();
        }
        let e = self.exp_series(n);
        e.sub(&e.inv_series(n)).scalar_div_integer(&BigInt::from(2))
    }

    /// `tanh(self)` modulo `x^n`, as `(exp(2h) - 1) / (exp(2h) + 1)`.
    ///
    /// # Panics
    ///
    /// Panics (fatal) unless the constant term is zero.
    pub fn tanh_series(&self, n: usize) -> Self {
        require_constant_term("tanh_series", self, 0);
        if n == 0 {
            return Self::zero();
        }
        let t = self.scalar_mul_integer(&BigInt::from(2)).exp_series(n);
        let one = Self::one();
        t.sub(&one).div_series(&t.add(&one), n)
    }
}
