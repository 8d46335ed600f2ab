//! # Configuration Loader
//!
//! Pure data loading only: read the TOML file, parse it into [`AppConfig`],
//! report I/O and parsing errors with context. No validation logic, no
//! default-value logic, no business rules — accept whatever is in the file.

use std::path::PathBuf;

use anyhow::Context;

use cg_core::config::AppConfig;

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    toml::from_str(&content).context("Failed to parse config as TOML")
}
