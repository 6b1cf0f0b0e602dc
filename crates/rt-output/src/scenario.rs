//! JSON scenario files.
//!
//! A scenario is a flat object with the track's parameters under their
//! short names, plus an optional policy and limits block:
//!
//! ```json
//! {
//!   "nEXP": 25, "nFOC": 10, "capZone": 1,
//!   "tEnter": 0.5, "tA": 5.0, "tB": 5.0, "tC": 5.0, "tExit": 0.5,
//!   "policy": { "latch": "AfterGate", "zone_a": "Gated" }
//! }
//! ```
//!
//! Batch sizes and capacity are read as signed integers so that a negative
//! value surfaces as a [`ConfigError`][rt_core::ConfigError] rather than a
//! parse failure.

use std::fs;
use std::path::Path;

use rt_core::config::{checked_batch, checked_capacity};
use rt_core::{RunLimits, TrackConfig, TrackPolicy};
use serde::{Deserialize, Serialize};

use crate::OutputResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(rename = "nEXP")]
    pub n_exp:    i64,
    #[serde(rename = "nFOC")]
    pub n_foc:    i64,
    #[serde(rename = "capZone")]
    pub cap_zone: i64,
    #[serde(rename = "tEnter")]
    pub t_enter:  f64,
    #[serde(rename = "tA")]
    pub t_a:      f64,
    #[serde(rename = "tB")]
    pub t_b:      f64,
    #[serde(rename = "tC")]
    pub t_c:      f64,
    #[serde(rename = "tExit")]
    pub t_exit:   f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<TrackPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits: Option<RunLimits>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self::from_config(&TrackConfig::default())
    }
}

impl Scenario {
    pub fn from_config(config: &TrackConfig) -> Self {
        Self {
            n_exp:    config.n_exp as i64,
            n_foc:    config.n_foc as i64,
            cap_zone: config.cap_zone as i64,
            t_enter:  config.t_enter,
            t_a:      config.t_a,
            t_b:      config.t_b,
            t_c:      config.t_c,
            t_exit:   config.t_exit,
            policy:   None,
            limits:   None,
        }
    }

    /// Convert to a validated [`TrackConfig`].
    pub fn to_config(&self) -> OutputResult<TrackConfig> {
        let config = TrackConfig {
            n_exp:    checked_batch("nEXP", self.n_exp)?,
            n_foc:    checked_batch("nFOC", self.n_foc)?,
            cap_zone: checked_capacity(self.cap_zone)?,
            t_enter:  self.t_enter,
            t_a:      self.t_a,
            t_b:      self.t_b,
            t_c:      self.t_c,
            t_exit:   self.t_exit,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn policy(&self) -> TrackPolicy {
        self.policy.unwrap_or_default()
    }

    pub fn limits(&self) -> RunLimits {
        self.limits.unwrap_or_default()
    }

    /// Parse and validate.  Malformed JSON and invalid values are both
    /// errors; nothing is clamped.
    pub fn from_json(text: &str) -> OutputResult<Self> {
        let scenario: Scenario = serde_json::from_str(text)?;
        scenario.to_config()?;
        if let Some(limits) = &scenario.limits {
            limits.validate()?;
        }
        Ok(scenario)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> OutputResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> OutputResult<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn save(&self, path: &Path) -> OutputResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
