//! File System Utilities
//!
//! Configuration directory management and file operations.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use home::home_dir;
use std::fs;
use std::path::{Path, PathBuf};

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/clef-client/` or `$XDG_CONFIG_HOME/clef-client/`
/// - **macOS**: `~/Library/Application Support/io.clefapp.clef-client/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\clefapp\clef-client\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("io", "clefapp", "clef-client") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    let config_dir = project_dirs.config_dir();

    // Create config directory if it doesn't exist
    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    // Handle migration from old location if needed
    if let Some(home) = home_dir() {
        let old_config_path = home.join(".clef");
        if old_config_path.exists() {
            // Copy files from old location (ignore errors)
            let _ = copy_dir_files(&old_config_path, config_dir);
            // Clean up old directory
            let _ = fs::remove_dir_all(&old_config_path);
        }
    }

    Ok(config_dir.to_path_buf())
}

/// Copy files (not directories) from source to destination
fn copy_dir_files(src: &PathBuf, dst: &Path) -> Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let file_type = entry.file_type()?;

        // Skip subdirectories
        if file_type.is_dir() {
            continue;
        }

        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        fs::copy(&src_path, &dst_path)?;
    }
    Ok(())
}

/// Get the data directory for storing larger files (downloaded scores, exports)
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/clef-client/`
/// - **macOS**: `~/Library/Application Support/io.clefapp.clef-client/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\clefapp\clef-client\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("io", "clefapp", "clef-client") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    let data_dir = project_dirs.data_dir();

    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }

    Ok(data_dir.to_path_buf())
}

/// Check if running in development mode
pub fn is_development() -> bool {
    cfg!(debug_assertions)
}
