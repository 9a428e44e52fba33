//! Wizard configuration.
//!
//! Defaults match the production job board; hosts may override them from a
//! YAML document:
//!
//! ```yaml
//! publish_threshold: 80
//! deadline_window_days: 180
//! ```

use crate::error::ConfigError;
use crate::types::EvalContext;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PUBLISH_THRESHOLD: f64 = 70.0;
pub const DEFAULT_DEADLINE_WINDOW_DAYS: i64 = 365;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WizardConfig {
    /// Minimum overall progress, in percent, for `publish` to be allowed.
    pub publish_threshold: f64,
    /// How far ahead an application deadline may be set.
    pub deadline_window_days: i64,
}

impl Default for WizardConfig {
    fn default() -> Self {
        WizardConfig {
            publish_threshold: DEFAULT_PUBLISH_THRESHOLD,
            deadline_window_days: DEFAULT_DEADLINE_WINDOW_DAYS,
        }
    }
}

impl WizardConfig {
    /// Parses and checks a YAML configuration document.
    ///
    /// Blank input yields the defaults.
    pub fn from_yaml(input: &str) -> Result<WizardConfig, ConfigError> {
        if input.trim().is_empty() {
            return Ok(WizardConfig::default());
        }
        let config: WizardConfig =
            serde_saphyr::from_str(input).map_err(|e| ConfigError::Syntax(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    pub fn check(&self) -> Result<(), ConfigError> {
        if !(0.0..=100.0).contains(&self.publish_threshold) {
            return Err(ConfigError::InvalidValue {
                key: "publish_threshold",
                message: format!(
                    "must be between 0 and 100, got {}",
                    self.publish_threshold
                ),
            });
        }
        if self.deadline_window_days <= 0 {
            return Err(ConfigError::InvalidValue {
                key: "deadline_window_days",
                message: format!("must be positive, got {}", self.deadline_window_days),
            });
        }
        Ok(())
    }

    /// Evaluation context for `today` under this configuration.
    pub fn context(&self, today: NaiveDate) -> EvalContext {
        EvalContext {
            today,
            deadline_window_days: self.deadline_window_days,
        }
    }
}
