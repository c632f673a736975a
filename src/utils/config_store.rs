//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Serialize, de::DeserializeOwned};

use crate::helpers::get_or_create_config_dir;

/// Load a JSON config file from the application config directory
pub fn load_config<T: DeserializeOwned + Default>(filename: &str) -> Result<T> {
    load_config_from(&get_or_create_config_dir()?, filename)
}

/// Save a JSON config file to the application config directory
pub fn save_config<T: Serialize>(filename: &str, config: &T) -> Result<()> {
    save_config_to(&get_or_create_config_dir()?, filename, config)
}

/// Delete a config file from the application config directory
pub fn delete_config(filename: &str) -> Result<()> {
    let path = get_or_create_config_dir()?.join(filename);
    if path.exists() {
        fs::remove_file(&path)?;
    }
    Ok(())
}

/// Load a JSON config file from an explicit directory
pub fn load_config_from<T: DeserializeOwned + Default>(dir: &Path, filename: &str) -> Result<T> {
    let path = dir.join(filename);

    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(&path)?;
    let config: T = serde_json::from_str(&content)?;
    Ok(config)
}

/// Save a JSON config file to an explicit directory
pub fn save_config_to<T: Serialize>(dir: &Path, filename: &str, config: &T) -> Result<()> {
    let path = dir.join(filename);
    let content = serde_json::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}
