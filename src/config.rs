// ⚙️ Club Configuration - Bounds for every validated member attribute
//
// The facade checks ages, salaries, training parameters and jersey numbers
// against these bounds before any state is touched.

use crate::error::ClubError;
use anyhow::{bail, Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable the binary reads to locate a JSON config file
pub const CONFIG_ENV_VAR: &str = "CLUB_CONFIG";

// ============================================================================
// CLUB CONFIG
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClubConfig {
    pub min_age: u32,
    pub max_age: u32,

    /// Salary bounds (inclusive)
    pub min_salary: Decimal,
    pub max_salary: Decimal,

    /// Training duration bounds in minutes (inclusive)
    pub min_training_minutes: u32,
    pub max_training_minutes: u32,

    pub min_intensity: u8,
    pub max_intensity: u8,

    pub min_jersey_number: u32,
    pub max_jersey_number: u32,
}

impl Default for ClubConfig {
    fn default() -> Self {
        ClubConfig {
            min_age: 16,
            max_age: 70,
            min_salary: Decimal::from(100),
            max_salary: Decimal::from(1_000_000),
            min_training_minutes: 15,
            max_training_minutes: 240,
            min_intensity: 1,
            max_intensity: 10,
            min_jersey_number: 1,
            max_jersey_number: 99,
        }
    }
}

impl ClubConfig {
    /// Load config from JSON file. Missing fields fall back to defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: ClubConfig =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;

        config.validate()?;
        Ok(config)
    }

    /// Load from the file named by `CLUB_CONFIG`, or defaults when unset
    pub fn from_env() -> Result<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// Reject inverted or negative bounds
    pub fn validate(&self) -> Result<()> {
        if self.min_age > self.max_age {
            bail!("min_age ({}) exceeds max_age ({})", self.min_age, self.max_age);
        }
        if self.min_salary.is_sign_negative() {
            bail!("min_salary must be non-negative, got {}", self.min_salary);
        }
        if self.min_salary > self.max_salary {
            bail!(
                "min_salary ({}) exceeds max_salary ({})",
                self.min_salary,
                self.max_salary
            );
        }
        if self.min_training_minutes > self.max_training_minutes {
            bail!(
                "min_training_minutes ({}) exceeds max_training_minutes ({})",
                self.min_training_minutes,
                self.max_training_minutes
            );
        }
        if self.min_intensity > self.max_intensity {
            bail!(
                "min_intensity ({}) exceeds max_intensity ({})",
                self.min_intensity,
                self.max_intensity
            );
        }
        if self.min_jersey_number > self.max_jersey_number {
            bail!(
                "min_jersey_number ({}) exceeds max_jersey_number ({})",
                self.min_jersey_number,
                self.max_jersey_number
            );
        }
        Ok(())
    }

    // ========================================================================
    // ATTRIBUTE CHECKS
    // ========================================================================

    pub fn check_age(&self, age: u32) -> Result<(), ClubError> {
        if age < self.min_age || age > self.max_age {
            return Err(ClubError::InvalidAge {
                age,
                min: self.min_age,
                max: self.max_age,
            });
        }
        Ok(())
    }

    pub fn check_salary(&self, salary: Decimal) -> Result<(), ClubError> {
        if salary < self.min_salary || salary > self.max_salary {
            return Err(ClubError::InvalidSalary {
                salary,
                min: self.min_salary,
                max: self.max_salary,
            });
        }
        Ok(())
    }

    pub fn check_training(&self, minutes: u32, intensity: u8) -> Result<(), ClubError> {
        if minutes < self.min_training_minutes || minutes > self.max_training_minutes {
            return Err(ClubError::InvalidTrainingDuration {
                minutes,
                min: self.min_training_minutes,
                max: self.max_training_minutes,
            });
        }
        if intensity < self.min_intensity || intensity > self.max_intensity {
            return Err(ClubError::InvalidTrainingIntensity {
                intensity,
                min: self.min_intensity,
                max: self.max_intensity,
            });
        }
        Ok(())
    }

    pub fn check_jersey_number(&self, number: u32) -> Result<(), ClubError> {
        if number < self.min_jersey_number || number > self.max_jersey_number {
            return Err(ClubError::InvalidJerseyNumber {
                number,
                min: self.min_jersey_number,
                max: self.max_jersey_number,
            });
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
