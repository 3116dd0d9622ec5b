//! Search and report parameters.
//!
//! Values come from built-in defaults, optionally replaced by a TOML file,
//! then by individual command-line overrides. [`Config::validate`] runs on the
//! merged result so a bad value fails before the scan instead of producing a
//! silently wrong answer.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Largest accepted magnitude of a search bound; its cube still fits in `i64`.
pub const MAX_DIMENSION: i64 = 1_000_000;

/// Largest accepted number of values per axis. The scan visits the cube of it.
pub const MAX_RANGE_WIDTH: i64 = 1_000;

/// Parameters of the dimension search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Lower search bound, inclusive.
    pub range_min: i64,
    /// Upper search bound, exclusive.
    pub range_max: i64,
    /// Amount subtracted from each outer dimension to get the inner one.
    pub shrink: i64,
    /// Material quantity to approximate.
    pub target: i64,
    /// Maximum accepted absolute deviation from `target`.
    pub tolerance: i64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            range_min: 20,
            range_max: 60,
            shrink: 4,
            target: 20000,
            tolerance: 100,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.range_min >= self.range_max {
            return Err(ConfigError::InvalidRange {
                min: self.range_min,
                max: self.range_max,
            });
        }
        for bound in [self.range_min, self.range_max] {
            if !(-MAX_DIMENSION..=MAX_DIMENSION).contains(&bound) {
                return Err(ConfigError::DimensionOutOfRange {
                    value: bound,
                    limit: MAX_DIMENSION,
                });
            }
        }
        let width = self.range_max - self.range_min;
        if width > MAX_RANGE_WIDTH {
            return Err(ConfigError::RangeTooWide {
                width,
                limit: MAX_RANGE_WIDTH,
            });
        }
        if self.shrink < 0 {
            return Err(ConfigError::NegativeShrink(self.shrink));
        }
        if self.tolerance < 0 {
            return Err(ConfigError::NegativeTolerance(self.tolerance));
        }
        Ok(())
    }
}

/// How results are presented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Number of ranked entries listed.
    pub top: usize,
    /// Factor from search units to display units (100 turns decimeters into mm).
    pub scale: i64,
    /// Display unit label.
    pub unit: String,
    /// Cubic display units per cubic meter.
    pub volume_divisor: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top: 10,
            scale: 100,
            unit: "mm".to_string(),
            volume_divisor: 1e9,
        }
    }
}

impl ReportConfig {
    pub fn validate(&self) -> Result<()> {
        if self.scale <= 0 {
            return Err(ConfigError::InvalidScale(self.scale));
        }
        if !(self.volume_divisor.is_finite() && self.volume_divisor > 0.0) {
            return Err(ConfigError::InvalidVolumeDivisor(self.volume_divisor));
        }
        Ok(())
    }
}

/// Complete configuration, as read from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub search: SearchConfig,
    pub report: ReportConfig,
}

/// Individual values given on the command line. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub range_min: Option<i64>,
    pub range_max: Option<i64>,
    pub shrink: Option<i64>,
    pub target: Option<i64>,
    pub tolerance: Option<i64>,
    pub top: Option<usize>,
}

impl Config {
    /// Parses a TOML document. Missing tables and keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Reads and parses a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Replaces every value that has an override.
    pub fn apply(&mut self, overrides: &Overrides) {
        let search = &mut self.search;
        if let Some(range_min) = overrides.range_min {
            search.range_min = range_min;
        }
        if let Some(range_max) = overrides.range_max {
            search.range_max = range_max;
        }
        if let Some(shrink) = overrides.shrink {
            search.shrink = shrink;
        }
        if let Some(target) = overrides.target {
            search.target = target;
        }
        if let Some(tolerance) = overrides.tolerance {
            search.tolerance = tolerance;
        }
        if let Some(top) = overrides.top {
            self.report.top = top;
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.search.validate()?;
        self.report.validate()
    }
}
