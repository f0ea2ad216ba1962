// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Rational Polynomial Library
//!
//! Polynomials over `Q` stored as an integer numerator vector over one common
//! denominator, kept in a unique canonical form.
//!
//! ## Features
//!
//! - [`RationalPolynomial`]: canonical representation, constructors, text and serde forms.
//! - Ring arithmetic, Euclidean division, gcd, extended gcd, resultant and discriminant.
//! - Truncated power series: inversion, composition, reversion and elementary functions,
//!   with explicit [`InvSeriesAlgorithm`] and [`CompositionAlgorithm`] strategies.
//! - A reusable precision-doubling driver in [`newton`].
//! - Continued fractions of canonical fractions in [`fraction`].
//!
//! Violated preconditions (division by zero, wrong series constant terms) are fatal:
//! they are logged and panic, which aborts in release builds.

mod arithmetic;
mod calculus;
mod division;
pub mod errors;
pub mod fraction;
mod gcd;
pub mod newton;
mod polynomial;
mod series;

pub use errors::RationalPolynomialError;
pub use fraction::{canonical_fraction, cfrac_bound, get_cfrac, set_cfrac};
pub use newton::{newton_iterate, NewtonLift, NewtonSchedule, NewtonStage};
pub use polynomial::RationalPolynomial;
#[cfg(feature = "serde")]
pub use polynomial::RationalPolynomialParts;
pub use series::{CompositionAlgorithm, InvSeriesAlgorithm};

pub use num_bigint::BigInt;
pub use num_rational::BigRational;
