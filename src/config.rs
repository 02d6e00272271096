use crate::error::{Result, SentimentError};
use crate::types::config::SentimentConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "sentiment.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".sentiment/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/sentiment/config.toml";

/// Loads layered config rooted at `root`. Global and local layers are only
/// consulted when the repository file exists.
pub fn load_config(root: &Path) -> Result<Option<SentimentConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Loads exactly one config file; a missing file is an error.
pub fn load_config_file(path: &Path) -> Result<SentimentConfig> {
    if !path.exists() {
        return Err(SentimentError::ConfigNotFound(path.display().to_string()));
    }
    let value = read_toml_value(path)?;
    into_config(value)
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<SentimentConfig>> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if !repo_path.exists() {
        tracing::debug!(path = %repo_path.display(), "no repository config found");
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &repo_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    into_config(merged).map(Some)
}

fn into_config(value: Value) -> Result<SentimentConfig> {
    let cfg: SentimentConfig = value
        .try_into()
        .map_err(|e: toml::de::Error| SentimentError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| SentimentError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
