// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Rational polynomial representation and canonical form.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use ratpoly_polynomial::{vector, Polynomial};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{fatal, RationalPolynomialError};

/// A polynomial with rational coefficients, stored as an integer numerator vector
/// over one common denominator: `(sum coeffs[i] * x^i) / den`.
///
/// Public operations keep the value canonical:
///
/// 1. `den > 0`;
/// 2. the last coefficient is nonzero (the zero polynomial has no coefficients);
/// 3. `gcd(content(coeffs), den) == 1`;
/// 4. the zero polynomial has `den == 1`.
///
/// [`RationalPolynomial::from_raw_parts`] builds values that need not satisfy these, for
/// batching several raw steps before one [`RationalPolynomial::canonicalise`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "RationalPolynomialParts", into = "RationalPolynomialParts")
)]
pub struct RationalPolynomial {
    pub(crate) coeffs: Vec<BigInt>,
    pub(crate) den: BigInt,
}

impl Default for RationalPolynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl RationalPolynomial {
    /// The zero polynomial.
    pub fn zero() -> Self {
        Self {
            coeffs: Vec::new(),
            den: BigInt::one(),
        }
    }

    pub fn one() -> Self {
        Self::from_integer(BigInt::one())
    }

    /// The polynomial `x`.
    pub fn x() -> Self {
        Self {
            coeffs: vec![BigInt::zero(), BigInt::one()],
            den: BigInt::one(),
        }
    }

    pub fn from_integer(c: BigInt) -> Self {
        let mut poly = Self {
            coeffs: vec![c],
            den: BigInt::one(),
        };
        poly.normalise();
        poly
    }

    pub fn from_rational(c: &BigRational) -> Self {
        Self::from_fraction(c.numer().clone(), c.denom().clone())
    }

    /// The constant `p/q`.
    ///
    /// # Panics
    ///
    /// Panics (fatal) if `q` is zero.
    pub fn from_fraction(p: BigInt, q: BigInt) -> Self {
        Self::from_coefficients(vec![p], q)
    }

    /// `(sum num[i] x^i) / den`, canonicalised.
    ///
    /// # Panics
    ///
    /// Panics (fatal) if `den` is zero.
    pub fn from_coefficients(num: Vec<BigInt>, den: BigInt) -> Self {
        match Self::try_from_coefficients(num, den) {
            Ok(poly) => poly,
            Err(err) => fatal("from_coefficients", err),
        }
    }

    /// Like [`Self::from_coefficients`], reporting a zero denominator as an error.
    pub fn try_from_coefficients(
        num: Vec<BigInt>,
        den: BigInt,
    ) -> Result<Self, RationalPolynomialError> {
        if den.is_zero() {
            return Err(RationalPolynomialError::ZeroDenominator);
        }
        let mut poly = Self { coeffs: num, den };
        poly.canonicalise();
        Ok(poly)
    }

    /// Polynomial with the given rational coefficients, constant term first.
    pub fn from_rationals(coeffs: &[BigRational]) -> Self {
        let den = coeffs
            .iter()
            .fold(BigInt::one(), |acc, c| acc.lcm(c.denom()));
        let num = coeffs
            .iter()
            .map(|c| c.numer() * (&den / c.denom()))
            .collect();
        let mut poly = Self { coeffs: num, den };
        poly.canonicalise();
        poly
    }

    pub fn from_integer_polynomial(poly: &Polynomial) -> Self {
        Self {
            coeffs: poly.coefficients().to_vec(),
            den: BigInt::one(),
        }
    }

    /// Wraps a numerator and denominator without any normalisation.
    pub fn from_raw_parts(coeffs: Vec<BigInt>, den: BigInt) -> Self {
        debug_assert!(!den.is_zero(), "from_raw_parts: zero denominator");
        Self { coeffs, den }
    }

    pub fn into_raw_parts(self) -> (Vec<BigInt>, BigInt) {
        (self.coeffs, self.den)
    }

    /// Numerator coefficients, constant term first.
    pub fn numerator(&self) -> &[BigInt] {
        &self.coeffs
    }

    pub fn denominator(&self) -> &BigInt {
        &self.den
    }

    /// Number of coefficients, the degree plus one.
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Degree, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_one() && self.den.is_one()
    }

    /// Whether every coefficient is an integer.
    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// Coefficient of `x^i` as a canonical fraction; zero past the end.
    pub fn coefficient(&self, i: usize) -> BigRational {
        match self.coeffs.get(i) {
            Some(c) => BigRational::new(c.clone(), self.den.clone()),
            None => BigRational::zero(),
        }
    }

    /// Sets the coefficient of `x^i` to `c`, extending with zeros as needed.
    pub fn set_coefficient(&mut self, i: usize, c: &BigRational) {
        if self.coeffs.len() <= i {
            if c.is_zero() {
                return;
            }
            self.coeffs.resize(i + 1, BigInt::zero());
        }
        // Bring everything over lcm(den, c.den).
        let g = self.den.gcd(c.denom());
        let scale = c.denom() / &g;
        if !scale.is_one() {
            vector::scalar_mul_assign(&mut self.coeffs, &scale);
            self.den *= &scale;
        }
        self.coeffs[i] = c.numer() * (&self.den / c.denom());
        self.canonicalise();
    }

    pub fn leading_coefficient(&self) -> Option<BigRational> {
        self.coeffs
            .last()
            .map(|c| BigRational::new(c.clone(), self.den.clone()))
    }

    /// Whether the constant term equals the integer `value`.
    pub fn constant_term_is(&self, value: &BigInt) -> bool {
        match self.coeffs.first() {
            Some(c) => *c == value * &self.den,
            None => value.is_zero(),
        }
    }

    /// Capacity of the coefficient buffer.
    pub fn capacity(&self) -> usize {
        self.coeffs.capacity()
    }

    /// Ensures room for `len` coefficients without changing the value.
    pub fn reserve(&mut self, len: usize) {
        self.coeffs.reserve(len.saturating_sub(self.coeffs.len()));
    }

    /// Drops every term of degree `n` or above, keeping the allocation.
    pub fn truncate(&mut self, n: usize) {
        if self.coeffs.len() > n {
            self.coeffs.truncate(n);
            self.canonicalise();
        }
    }

    /// Copy reduced modulo `x^n`.
    pub fn truncated(&self, n: usize) -> Self {
        if self.coeffs.len() <= n {
            return self.clone();
        }
        let mut out = Self {
            coeffs: self.coeffs[..n].to_vec(),
            den: self.den.clone(),
        };
        out.canonicalise();
        out
    }

    /// Multiplies by `x^n`.
    pub fn shift_left(&self, n: usize) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let mut coeffs = vec![BigInt::zero(); n];
        coeffs.extend_from_slice(&self.coeffs);
        Self {
            coeffs,
            den: self.den.clone(),
        }
    }

    /// Divides by `x^n`, dropping the low terms.
    pub fn shift_right(&self, n: usize) -> Self {
        let start = n.min(self.coeffs.len());
        let mut out = Self {
            coeffs: self.coeffs[start..].to_vec(),
            den: self.den.clone(),
        };
        out.canonicalise();
        out
    }

    /// Reverses the first `n` coefficients, treating the polynomial as having length `n`.
    pub fn reverse(&self, n: usize) -> Self {
        let coeffs = (0..n)
            .map(|i| self.coeffs.get(n - 1 - i).cloned().unwrap_or_default())
            .collect();
        let mut out = Self {
            coeffs,
            den: self.den.clone(),
        };
        out.canonicalise();
        out
    }

    /// Minimal clean-up: trims trailing zeros, resets the denominator of zero to one
    /// and makes the denominator positive. Does not touch the content.
    pub fn normalise(&mut self) {
        vector::normalise(&mut self.coeffs);
        if self.coeffs.is_empty() {
            self.den.set_one();
            return;
        }
        if self.den.is_negative() {
            vector::neg_assign(&mut self.coeffs);
            self.den = -std::mem::take(&mut self.den);
        }
    }

    /// Divides numerator and denominator by `gcd(content, den)`.
    pub(crate) fn reduce_content(&mut self) {
        if self.den.is_one() || self.coeffs.is_empty() {
            return;
        }
        let g = vector::content_gcd(&self.coeffs, &self.den);
        if !g.is_one() {
            vector::scalar_divexact_assign(&mut self.coeffs, &g);
            self.den = &self.den / &g;
        }
    }

    /// Restores the canonical form. Idempotent.
    pub fn canonicalise(&mut self) {
        self.normalise();
        self.reduce_content();
    }

    /// Checks all four canonical-form invariants.
    pub fn is_canonical(&self) -> bool {
        if !self.den.is_positive() {
            return false;
        }
        match self.coeffs.last() {
            None => self.den.is_one(),
            Some(last) => !last.is_zero() && vector::content_gcd(&self.coeffs, &self.den).is_one(),
        }
    }

    pub(crate) fn numerator_polynomial(&self) -> Polynomial {
        Polynomial::new(self.coeffs.clone())
    }

    /// `"<len>  c0 c1 ..."` with each coefficient as a reduced fraction, `"0"` for zero.
    pub fn to_coefficient_string(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let body: Vec<String> = (0..self.len())
            .map(|i| self.coefficient(i).to_string())
            .collect();
        format!("{}  {}", self.len(), body.join(" "))
    }
}

impl Ord for RationalPolynomial {
    /// Orders by length, then by coefficients from the top, cross-multiplying when the
    /// denominators differ.
    fn cmp(&self, other: &Self) -> Ordering {
        let by_len = self.coeffs.len().cmp(&other.coeffs.len());
        if by_len != Ordering::Equal {
            return by_len;
        }
        let same_den = self.den == other.den;
        for (a, b) in self.coeffs.iter().zip(&other.coeffs).rev() {
            let ord = if same_den {
                a.cmp(b)
            } else {
                (a * &other.den).cmp(&(b * &self.den))
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for RationalPolynomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Pretty form: the integer numerator over the denominator, e.g. `(3x^2 + 2)/4`.
impl fmt::Display for RationalPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num = self.numerator_polynomial();
        if self.den.is_one() {
            write!(f, "{num}")
        } else {
            write!(f, "({num})/{}", self.den)
        }
    }
}

/// Parses the output of [`RationalPolynomial::to_coefficient_string`].
impl FromStr for RationalPolynomial {
    type Err = RationalPolynomialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let len: usize = tokens
            .next()
            .ok_or_else(|| RationalPolynomialError::Parse {
                message: "empty input".to_string(),
            })?
            .parse()
            .map_err(|_| RationalPolynomialError::Parse {
                message: format!("invalid length in {s:?}"),
            })?;

        let coeffs = tokens
            .map(|token| {
                BigRational::from_str(token).map_err(|err| RationalPolynomialError::Parse {
                    message: format!("invalid coefficient {token:?}: {err}"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if coeffs.len() != len {
            return Err(RationalPolynomialError::Parse {
                message: format!(
                    "declared length {len} but found {} coefficients",
                    coeffs.len()
                ),
            });
        }
        Ok(Self::from_rationals(&coeffs))
    }
}

/// Serialised shape of a [`RationalPolynomial`]; deserialisation canonicalises.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RationalPolynomialParts {
    pub coefficients: Vec<BigInt>,
    pub denominator: BigInt,
}

#[cfg(feature = "serde")]
impl TryFrom<RationalPolynomialParts> for RationalPolynomial {
    type Error = RationalPolynomialError;

    fn try_from(parts: RationalPolynomialParts) -> Result<Self, Self::Error> {
        Self::try_from_coefficients(parts.coefficients, parts.denominator)
    }
}

#[cfg(feature = "serde")]
impl From<RationalPolynomial> for RationalPolynomialParts {
    fn from(poly: RationalPolynomial) -> Self {
        Self {
            coefficients: poly.coeffs,
            denominator: poly.den,
        }
    }
}
