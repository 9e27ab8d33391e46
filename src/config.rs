//! config.rs — runtime configuration from environment variables.
//!
//! File-based configuration exists only for the summarizer
//! (`config/summarizer.json`, see [`crate::summarize`]); everything else is
//! env vars with safe defaults so a bare `cargo run` works.

use std::path::PathBuf;

pub const ENV_DATA_DIR: &str = "TRIAGE_DATA_DIR";
pub const DEFAULT_DATA_DIR: &str = "emergency_data";

pub const ENV_BIND_ADDR: &str = "TRIAGE_BIND_ADDR";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding one JSON file per persisted report.
    pub data_dir: PathBuf,
    /// Socket address the HTTP server binds to.
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let data_dir = std::env::var(ENV_DATA_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));
        let bind_addr =
            std::env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        Self {
            data_dir,
            bind_addr,
        }
    }
}
