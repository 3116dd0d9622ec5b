//! Box Dimension Search Library
//!
//! Finds integer box dimensions whose hollow shell uses a target amount of
//! material, ranked by the volume the box encloses.

pub mod candidate;
pub mod config;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod report;
pub mod search;

pub use candidate::Candidate;
pub use config::{Config, Overrides, ReportConfig, SearchConfig};
pub use error::ConfigError;
