//! Configuration module
//!
//! Handles CLI configuration including the analysis service base URL.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the analysis service
    pub api_base: String,
}
