// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Algorithm selection thresholds shared by the integer and rational polynomial crates.
//!
//! Every cutoff is a tunable performance parameter: changing one moves work between
//! algorithms but never changes a result.

pub mod load_config;
mod thresholds;

pub use load_config::*;
pub use thresholds::*;
