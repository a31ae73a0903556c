// SPDX-FileCopyrightText: 2026 The weekplan authors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

/// The name of the weekplan application.
pub const APP_NAME: &str = "weekplan";

const DEFAULT_GRID_START_HOUR: u8 = 6;
const DEFAULT_GRID_END_HOUR: u8 = 20;

/// Configuration for the weekplan application.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Directory for storing the event collection.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// First hour row shown by the day grid.
    #[serde(default = "default_grid_start_hour")]
    pub grid_start_hour: u8,

    /// Hour at which the day grid ends (exclusive).
    #[serde(default = "default_grid_end_hour")]
    pub grid_end_hour: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_dir: None,
            grid_start_hour: DEFAULT_GRID_START_HOUR,
            grid_end_hour: DEFAULT_GRID_END_HOUR,
        }
    }
}

fn default_grid_start_hour() -> u8 {
    DEFAULT_GRID_START_HOUR
}

fn default_grid_end_hour() -> u8 {
    DEFAULT_GRID_END_HOUR
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        if self.grid_end_hour > 24 {
            return Err(format!(
                "grid_end_hour must be at most 24, got {}",
                self.grid_end_hour
            )
            .into());
        }
        if self.grid_start_hour >= self.grid_end_hour {
            return Err(format!(
                "grid_start_hour ({}) must be before grid_end_hour ({})",
                self.grid_start_hour, self.grid_end_hour
            )
            .into());
        }

        // Normalize state directory
        match &self.state_dir {
            Some(a) => {
                self.state_dir = Some(
                    expand_path(a)
                        .map_err(|e| format!("Failed to expand state directory path: {e}"))?,
                )
            }

            None => match get_state_dir() {
                Ok(a) => self.state_dir = Some(a.join(APP_NAME)),
                Err(e) => tracing::warn!("Failed to get state directory: {e}"),
            },
        };

        Ok(())
    }
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or("User-specific home directory not found".into())
}

fn get_state_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir.ok_or("User-specific state directory not found".into())
}
