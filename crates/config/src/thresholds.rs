// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Prefix of the environment variables that override [`Thresholds`] fields.
pub const ENV_PREFIX: &str = "RATPOLY_";

/// Shorter operand length at or below which integer multiplication is classical.
pub const DEFAULT_MUL_CLASSICAL_CUTOFF: usize = 8;

/// Coefficient size (bits) above which Karatsuba beats Kronecker substitution.
pub const DEFAULT_MUL_KARATSUBA_CUTOFF_BITS: u64 = 4096;

/// Truncation length at or below which a truncated product is computed classically.
pub const DEFAULT_MULLOW_CLASSICAL_CUTOFF: usize = 16;

/// Series length below which inversion uses the reversal basecase instead of Newton.
pub const DEFAULT_INV_SERIES_NEWTON_CUTOFF: usize = 24;

/// Newton base cutoff for the exponential series.
pub const DEFAULT_EXP_SERIES_NEWTON_CUTOFF: usize = 16;

/// Newton base cutoff for the inverse square root series.
pub const DEFAULT_INVSQRT_SERIES_NEWTON_CUTOFF: usize = 16;

/// Outer length at or below which series composition uses Horner instead of Brent-Kung.
pub const DEFAULT_COMPOSE_BRENT_KUNG_CUTOFF: usize = 20;

/// Cutoffs steering the dispatchers of the polynomial crates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub mul_classical_cutoff: usize,
    pub mul_karatsuba_cutoff_bits: u64,
    pub mullow_classical_cutoff: usize,
    pub inv_series_newton_cutoff: usize,
    pub exp_series_newton_cutoff: usize,
    pub invsqrt_series_newton_cutoff: usize,
    pub compose_brent_kung_cutoff: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            mul_classical_cutoff: DEFAULT_MUL_CLASSICAL_CUTOFF,
            mul_karatsuba_cutoff_bits: DEFAULT_MUL_KARATSUBA_CUTOFF_BITS,
            mullow_classical_cutoff: DEFAULT_MULLOW_CLASSICAL_CUTOFF,
            inv_series_newton_cutoff: DEFAULT_INV_SERIES_NEWTON_CUTOFF,
            exp_series_newton_cutoff: DEFAULT_EXP_SERIES_NEWTON_CUTOFF,
            invsqrt_series_newton_cutoff: DEFAULT_INVSQRT_SERIES_NEWTON_CUTOFF,
            compose_brent_kung_cutoff: DEFAULT_COMPOSE_BRENT_KUNG_CUTOFF,
        }
    }
}

impl Thresholds {
    /// Checks that every cutoff can drive its dispatcher.
    ///
    /// Newton cutoffs must be at least 2: the precision schedule halves the target
    /// length until it drops below the cutoff, which never happens for a cutoff of 1.
    pub fn validate(&self) -> Result<()> {
        let newton = [
            ("inv_series_newton_cutoff", self.inv_series_newton_cutoff),
            ("exp_series_newton_cutoff", self.exp_series_newton_cutoff),
            (
                "invsqrt_series_newton_cutoff",
                self.invsqrt_series_newton_cutoff,
            ),
        ];
        for (name, value) in newton {
            if value < 2 {
                bail!("{name} must be at least 2, got {value}");
            }
        }

        let plain = [
            ("mul_classical_cutoff", self.mul_classical_cutoff),
            ("mullow_classical_cutoff", self.mullow_classical_cutoff),
            ("compose_brent_kung_cutoff", self.compose_brent_kung_cutoff),
        ];
        for (name, value) in plain {
            if value == 0 {
                bail!("{name} must be at least 1");
            }
        }

        if self.mul_karatsuba_cutoff_bits == 0 {
            bail!("mul_karatsuba_cutoff_bits must be at least 1");
        }

        Ok(())
    }

    /// Defaults overridden by `RATPOLY_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let thresholds: Thresholds = Figment::from(Serialized::defaults(Thresholds::default()))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .context("Could not parse thresholds from the environment")?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Defaults overridden by a YAML document, then by the environment.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let thresholds: Thresholds = Figment::from(Serialized::defaults(Thresholds::default()))
            .merge(Yaml::string(yaml))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .context("Could not parse thresholds")?;
        thresholds.validate()?;
        Ok(thresholds)
    }
}

static THRESHOLDS: Lazy<Thresholds> = Lazy::new(|| match Thresholds::from_env() {
    Ok(thresholds) => thresholds,
    Err(err) => {
        warn!("Ignoring invalid threshold configuration: {err:#}");
        Thresholds::default()
    }
});

/// Process-wide thresholds, read from the environment on first use.
pub fn thresholds() -> &'static Thresholds {
    &THRESHOLDS
}
