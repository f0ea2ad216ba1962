// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Trigonometric series and the inverse (hyperbolic) tangent and sine.

use num_bigint::BigInt;

use super::{integrate_product, require_constant_term};
use crate::newton::{newton_iterate, NewtonLift};
use crate::polynomial::RationalPolynomial;

/// `1 + sign * h^2` modulo `x^n`.
fn one_plus_square(h: &RationalPolynomial, sign: i8, n: usize) -> RationalPolynomial {
    let square = h.mullow(h, n);
    if sign < 0 {
        RationalPolynomial::one().sub_series(&square, n)
    } else {
        RationalPolynomial::one().add_series(&square, n)
    }
}

struct TanLift<'a> {
    h: &'a RationalPolynomial,
}

impl NewtonLift for TanLift<'_> {
    fn base_case(&self, _m: usize) -> RationalPolynomial {
        RationalPolynomial::zero()
    }

    fn lift(&self, y: &RationalPolynomial, _from: usize, to: usize) -> RationalPolynomial {
        // y + (1 + y^2) (h - atan y)
        let residual = self.h.sub_series(&y.atan_series(to), to);
        let correction = one_plus_square(y, 1, to).mullow(&residual, to);
        y.add_series(&correction, to)
    }
}

impl RationalPolynomial {
    /// `atan(self)` modulo `x^n`, as `integral(h' / (1 + h^2))`.
    ///
    /// # Panics
    ///
    /// Panics (fatal) unless the constant term is zero.
    pub fn atan_series(&self, n: usize) -> Self {
        require_constant_term("atan_series", self, 0);
        if n <= 1 {
            return Self::zero();
        }
        let inverse = one_plus_square(self, 1, n - 1).inv_series(n - 1);
        integrate_product(self, &inverse, n)
    }

    /// `atanh(self)` modulo `x^n`, as `integral(h' / (1 - h^2))`.
    ///
    /// # Panics
    ///
    /// Panics (fatal) unless the constant term is zero.
    pub fn atanh_series(&self, n: usize) -> Self {
        require_constant_term("atanh_series", self, 0);
        if n <= 1 {
            return Self::zero();
        }
        let inverse = one_plus_square(self, -1, n - 1).inv_series(n - 1);
        integrate_product(self, &inverse, n)
    }

    /// `asin(self)` modulo `x^n`, as `integral(h' / sqrt(1 - h^2))`.
    ///
    /// # Panics
    ///
    /// Panics (fatal) unless the constant term is zero.
    pub fn asin_series(&self, n: usize) -> Self {
        require_constant_term("asin_series", self, 0);
        if n <= 1 {
            return Self::zero();
        }
        let inverse = one_plus_square(self, -1, n - 1).invsqrt_series(n - 1);
        integrate_product(self, &inverse, n)
    }

    /// `asinh(self)` modulo `x^n`, as `integral(h' / sqrt(1 + h^2))`.
    ///
    /// # Panics
    ///
    /// Panics (fatal) unless the constant term is zero.
    pub fn asinh_series(&self, n: usize) -> Self {
        require_constant_term("asinh_series", self, 0);
        if n <= 1 {
            return Self::zero();
        }
        let inverse = one_plus_square(self, 1, n - 1).invsqrt_series(n - 1);
        integrate_product(self, &inverse, n)
    }

    /// `tan(self)` modulo `x^n`, by Newton iteration on `atan(y) = h`.
    ///
    /// # Panics
    ///
    /// Panics (fatal) unless the constant term is zero.
    pub fn tan_series(&self, n: usize) -> Self {
        require_constant_term("tan_series", self, 0);
        if n == 0 {
            return Self::zero();
        }
        newton_iterate(&TanLift { h: self }, n, 2)
    }

    /// `sin(self)` modulo `x^n`, as `2t / (1 + t^2)` with `t = tan(h / 2)`.
    ///
    /// # Panics
    ///
    /// Panics (fatal) unless the constant term is zero.
    pub fn sin_series(&self, n: usize) -> Self {
        require_constant_term("sin_series", self, 0);
        if n == 0 {
            return Self::zero();
        }
        let t = self.half_angle_tan(n);
        t.scalar_mul_integer(&BigInt::from(2))
            .div_series(&one_plus_square(&t, 1, n), n)
    }

    /// `cos(self)` modulo `x^n`, as `(1 - t^2) / (1 + t^2)` with `t = tan(h / 2)`.
    ///
    /// # Panics
    ///
    /// Panics (fatal) unless the constant term is zero.
    pub fn cos_series(&self, n: usize) -> Self {
        require_constant_term("cos_series", self, 0);
        if n == 0 {
            return Self::zero();
        }
        let t = self.half_angle_tan(n);
        one_plus_square(&t, -1, n).div_series(&one_plus_square(&t, 1, n), n)
    }

    fn half_angle_tan(&self, n: usize) -> Self {
        self.scalar_div_integer(&BigInt::from(2)).tan_series(n)
    }
}
