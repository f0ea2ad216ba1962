// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for integer polynomial operations.

use thiserror::Error;

/// Errors that can occur during integer polynomial operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolynomialError {
    /// Division by zero polynomial
    #[error("Division by zero polynomial")]
    DivisionByZero,

    /// A quotient coefficient is not an integer
    #[error("Inexact division: leading coefficient {divisor} does not divide {dividend}")]
    InexactDivision { dividend: String, divisor: String },

    /// Invalid polynomial (e.g. a zero leading coefficient where one is required)
    #[error("Invalid polynomial: {message}")]
    InvalidPolynomial { message: String },

    /// Parse error for BigInt
    #[error("Parse error: {0}")]
    ParseError(#[from] num_bigint::ParseBigIntError),
}
