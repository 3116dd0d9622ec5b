//! Errors raised while assembling the configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Rejected configuration, reported before any scan starts.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid search range: range_min ({min}) must be below range_max ({max})")]
    InvalidRange { min: i64, max: i64 },

    #[error("search bound {value} is outside -{limit}..={limit}")]
    DimensionOutOfRange { value: i64, limit: i64 },

    #[error("search range spans {width} values per axis, more than the limit of {limit}")]
    RangeTooWide { width: i64, limit: i64 },

    #[error("shrink must be non-negative, got {0}")]
    NegativeShrink(i64),

    #[error("tolerance must be non-negative, got {0}")]
    NegativeTolerance(i64),

    #[error("report scale must be positive, got {0}")]
    InvalidScale(i64),

    #[error("volume divisor must be a positive finite number, got {0}")]
    InvalidVolumeDivisor(f64),

    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
