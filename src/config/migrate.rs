use super::{CONFIG_KEYS, Config};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Return the configuration keys absent from the YAML file at `path`.
/// A missing file reports every key as missing.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        return Ok(CONFIG_KEYS.to_vec());
    }

    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)?;

    let Some(map) = yaml.as_mapping() else {
        return Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        )));
    };

    Ok(CONFIG_KEYS
        .iter()
        .copied()
        .filter(|key| !map.contains_key(Value::String(key.to_string())))
        .collect())
}

/// Rewrite the configuration file with every missing key set to its default.
/// Returns:
///   Ok(true)  → config updated
///   Ok(false) → no change needed
pub fn run_config_migration(path: &Path) -> AppResult<bool> {
    let missing = missing_keys(path)?;
    if missing.is_empty() {
        info("Configuration is up to date, nothing to migrate.");
        return Ok(false);
    }

    // unknown keys are dropped, known ones keep their value
    let cfg = Config::load(path)?;
    cfg.save(path)?;

    success(format!(
        "Configuration migrated, added: {}",
        missing.join(", ")
    ));
    Ok(true)
}
