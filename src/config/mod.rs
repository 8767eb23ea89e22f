mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    expand_paths(&mut config);

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = ["./moviediff.toml", "~/.config/moviediff/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

fn expand_paths(config: &mut Config) {
    if let Some(path) = config.compare.exclude_list.as_mut() {
        *path = expand_tilde(path);
    }
    if let Some(path) = config.rename.base_path.as_mut() {
        *path = expand_tilde(path);
    }
    config.compare.diff_file = expand_tilde(&config.compare.diff_file);
}

fn expand_tilde(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).as_ref())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.compare.diff_file.as_os_str().is_empty() {
        anyhow::bail!("compare.diff_file cannot be empty");
    }

    if config.export.delimiter.chars().count() != 1 {
        anyhow::bail!(
            "export.delimiter must be a single character, got {:?}",
            config.export.delimiter
        );
    }

    if let Some(path) = &config.compare.exclude_list {
        if !path.exists() {
            tracing::warn!("Exclusion list does not exist: {:?}", path);
        }
    }

    Ok(())
}
