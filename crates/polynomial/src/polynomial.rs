// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Integer polynomial type.

use crate::division::{self, PseudoDivRem};
use crate::errors::PolynomialError;
use crate::{gcd, mul, vector};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polynomial with integer coefficients in ascending order of degree.
///
/// The coefficient vector never has trailing zeros, so the zero polynomial is the
/// empty vector and `coefficients().len()` is the degree plus one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<BigInt>", into = "Vec<BigInt>"))]
pub struct Polynomial {
    /// Coefficients in ascending order (constant term first).
    pub(crate) coefficients: Vec<BigInt>,
}

impl From<Vec<BigInt>> for Polynomial {
    fn from(coefficients: Vec<BigInt>) -> Self {
        Polynomial::new(coefficients)
    }
}

impl From<Polynomial> for Vec<BigInt> {
    fn from(poly: Polynomial) -> Self {
        poly.coefficients
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (degree, coeff) in self.coefficients.iter().enumerate().rev() {
            if coeff.is_zero() {
                continue;
            }

            if first {
                if coeff.is_negative() {
                    write!(f, "-")?;
                }
            } else if coeff.is_negative() {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            first = false;

            let abs_coeff = coeff.abs();
            if degree == 0 || !abs_coeff.is_one() {
                write!(f, "{abs_coeff}")?;
            }

            if degree > 0 {
                write!(f, "x")?;
                if degree > 1 {
                    write!(f, "^{degree}")?;
                }
            }
        }

        if first {
            write!(f, "0")?;
        }

        Ok(())
    }
}

/// Parses `"<len>  c0 c1 ... c_{len-1}"`, or `"0"` for the zero polynomial.
impl FromStr for Polynomial {
    type Err = PolynomialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let len: usize = tokens
            .next()
            .ok_or_else(|| PolynomialError::InvalidPolynomial {
                message: "empty input".to_string(),
            })?
            .parse()
            .map_err(|_| PolynomialError::InvalidPolynomial {
                message: format!("invalid length in {s:?}"),
            })?;
        let coefficients = tokens
            .map(BigInt::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        if coefficients.len() != len {
            return Err(PolynomialError::InvalidPolynomial {
                message: format!(
                    "declared length {len} but found {} coefficients",
                    coefficients.len()
                ),
            });
        }
        Ok(Polynomial::new(coefficients))
    }
}

impl Polynomial {
    /// Creates a polynomial from ascending coefficients, dropping trailing zeros.
    pub fn new(mut coefficients: Vec<BigInt>) -> Self {
        vector::normalise(&mut coefficients);
        Self { coefficients }
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self::default()
    }

    /// The constant polynomial `1`.
    pub fn one() -> Self {
        Self::constant(BigInt::one())
    }

    /// The polynomial `x`.
    pub fn x() -> Self {
        Self {
            coefficients: vec![BigInt::zero(), BigInt::one()],
        }
    }

    /// Creates a constant polynomial.
    pub fn constant(constant: BigInt) -> Self {
        Self::new(vec![constant])
    }

    /// Returns the coefficients of the polynomial, constant term first.
    pub fn coefficients(&self) -> &[BigInt] {
        &self.coefficients
    }

    pub fn into_coefficients(self) -> Vec<BigInt> {
        self.coefficients
    }

    /// Coefficient of `x^i`, zero past the end.
    pub fn coefficient(&self, i: usize) -> BigInt {
        self.coefficients.get(i).cloned().unwrap_or_default()
    }

    /// Number of coefficients.
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Degree, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    pub fn leading_coefficient(&self) -> Option<&BigInt> {
        self.coefficients.last()
    }

    /// Non-negative gcd of the coefficients.
    pub fn content(&self) -> BigInt {
        vector::content(&self.coefficients)
    }

    pub fn primitive_part(&self) -> Self {
        Self {
            coefficients: gcd::primitive_part(&self.coefficients),
        }
    }

    pub fn add(&self, other: &Self) -> Self {
        Polynomial::new(vector::add(&self.coefficients, &other.coefficients))
    }

    pub fn sub(&self, other: &Self) -> Self {
        Polynomial::new(vector::sub(&self.coefficients, &other.coefficients))
    }

    pub fn neg(&self) -> Self {
        let mut coefficients = self.coefficients.clone();
        vector::neg_assign(&mut coefficients);
        Self { coefficients }
    }

    /// Product, using the multiplication backend picked by the thresholds.
    pub fn mul(&self, other: &Self) -> Self {
        Polynomial::new(mul::mul(&self.coefficients, &other.coefficients))
    }

    pub fn sqr(&self) -> Self {
        Polynomial::new(mul::sqr(&self.coefficients))
    }

    /// Product truncated to its first `n` coefficients.
    pub fn mullow(&self, other: &Self, n: usize) -> Self {
        Polynomial::new(mul::mullow(&self.coefficients, &other.coefficients, n))
    }

    pub fn scalar_mul(&self, scalar: &BigInt) -> Self {
        Polynomial::new(vector::scalar_mul(&self.coefficients, scalar))
    }

    /// Divides every coefficient by `scalar`, which must divide all of them.
    pub fn scalar_divexact(&self, scalar: &BigInt) -> Result<Self, PolynomialError> {
        if scalar.is_zero() {
            return Err(PolynomialError::DivisionByZero);
        }
        if let Some(c) = self.coefficients.iter().find(|c| !c.is_multiple_of(scalar)) {
            return Err(PolynomialError::InexactDivision {
                dividend: c.to_string(),
                divisor: scalar.to_string(),
            });
        }
        let mut coefficients = self.coefficients.clone();
        vector::scalar_divexact_assign(&mut coefficients, scalar);
        Ok(Self { coefficients })
    }

    /// `self^exp` by repeated squaring.
    pub fn pow(&self, exp: usize) -> Self {
        let mut result = Polynomial::one();
        let mut base = self.clone();
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = result.mul(&base);
            }
            e >>= 1;
            if e > 0 {
                base = base.sqr();
            }
        }
        result
    }

    /// Pseudo-division, see [`division::pseudo_divrem`].
    pub fn pseudo_divrem(&self, divisor: &Self) -> Result<PseudoDivRem, PolynomialError> {
        division::pseudo_divrem(&self.coefficients, &divisor.coefficients)
    }

    /// Divides one polynomial by another over the integers.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::DivisionByZero` if the divisor is zero and
    /// `PolynomialError::InexactDivision` if some quotient coefficient is not an integer.
    pub fn div(&self, divisor: &Self) -> Result<(Self, Self), PolynomialError> {
        let (q, r) = division::divrem_exact(&self.coefficients, &divisor.coefficients)?;
        Ok((Self { coefficients: q }, Self { coefficients: r }))
    }

    /// Exact quotient when `divisor` divides `self`.
    pub fn divides(&self, divisor: &Self) -> Option<Self> {
        division::divides(&self.coefficients, &divisor.coefficients)
            .map(|coefficients| Self { coefficients })
    }

    /// Gcd with positive leading coefficient.
    pub fn gcd(&self, other: &Self) -> Self {
        Self {
            coefficients: gcd::gcd(&self.coefficients, &other.coefficients),
        }
    }

    pub fn resultant(&self, other: &Self) -> BigInt {
        gcd::resultant(&self.coefficients, &other.coefficients)
    }

    /// Evaluates the polynomial at a given point using Horner's method.
    pub fn evaluate(&self, x: &BigInt) -> BigInt {
        let mut result = BigInt::zero();
        for coeff in self.coefficients.iter().rev() {
            result = result * x + coeff;
        }
        result
    }

    pub fn derivative(&self) -> Self {
        let coefficients = self
            .coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c * BigInt::from(i))
            .collect();
        Polynomial::new(coefficients)
    }

    /// Reverses the first `n` coefficients, treating the polynomial as having length `n`.
    pub fn reverse(&self, n: usize) -> Self {
        let coefficients = (0..n).map(|i| self.coefficient(n - 1 - i)).collect();
        Polynomial::new(coefficients)
    }

    /// Keeps the coefficients of `x^0 .. x^(n-1)`.
    pub fn truncate(&self, n: usize) -> Self {
        let end = n.min(self.coefficients.len());
        Polynomial::new(self.coefficients[..end].to_vec())
    }

    /// Multiplies by `x^n`.
    pub fn shift_left(&self, n: usize) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let mut coefficients = vec![BigInt::zero(); n];
        coefficients.extend_from_slice(&self.coefficients);
        Self { coefficients }
    }

    /// Divides by `x^n`, discarding the low coefficients.
    pub fn shift_right(&self, n: usize) -> Self {
        let start = n.min(self.coefficients.len());
        Self {
            coefficients: self.coefficients[start..].to_vec(),
        }
    }

    /// `"<len>  c0 c1 ..."`, `"0"` for the zero polynomial.
    pub fn to_coefficient_string(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let body: Vec<String> = self.coefficients.iter().map(ToString::to_string).collect();
        format!("{}  {}", self.coefficients.len(), body.join(" "))
    }
}
