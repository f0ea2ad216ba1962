// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Integer Polynomial Library
//!
//! Polynomials over `Z` with `num-bigint` coefficients, stored in ascending order.
//!
//! ## Features
//!
//! - Raw kernels on `&[BigInt]` slices: [`vector`], [`mul`], [`division`], [`gcd`].
//! - Multiplication dispatch between classical, Karatsuba and Kronecker substitution,
//!   steered by [`ratpoly_config::Thresholds`].
//! - Pseudo-division, exact division and the reversal kernel used for series inversion.
//! - Primitive gcd and subresultant resultants.
//! - Serialization: optional serde support with bincode integration.

pub mod division;
pub mod errors;
pub mod gcd;
pub mod mul;
pub mod polynomial;
pub mod vector;

pub use division::PseudoDivRem;
pub use errors::PolynomialError;
pub use mul::MulAlgorithm;
pub use polynomial::Polynomial;
