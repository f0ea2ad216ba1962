// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for rational polynomial operations.

use ratpoly_polynomial::PolynomialError;
use thiserror::Error;
use tracing::error;

/// Errors that can occur during rational polynomial operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RationalPolynomialError {
    /// Division by the zero polynomial, a zero scalar or a series with zero constant term
    #[error("Division by zero")]
    DivisionByZero,

    /// A series argument has the wrong constant term
    #[error("Constant term != {expected}")]
    ConstantTerm { expected: u8 },

    /// Composition inner argument with nonzero constant term
    #[error("Inner polynomial must have zero constant term")]
    InvalidCompositionInner,

    /// Series reversion of a series with zero linear term
    #[error("Linear term must be nonzero")]
    NonInvertibleLinearTerm,

    /// Malformed textual input
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// A denominator of zero was supplied
    #[error("Zero denominator")]
    ZeroDenominator,

    /// Failure reported by the integer polynomial layer
    #[error("Integer polynomial error: {0}")]
    Integer(#[from] PolynomialError),
}

/// Reports a violated precondition and panics.
///
/// The workspace release profile aborts on panic, so outside of tests this terminates
/// the process with `"{operation}: {error}"`.
#[track_caller]
#[cold]
pub fn fatal(operation: &str, error: RationalPolynomialError) -> ! {
    error!(operation, %error, "fatal precondition violation");
    panic!("{operation}: {error}")
}
