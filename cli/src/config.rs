// SPDX-FileCopyrightText: 2026 The weekplan authors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use weekplan_core::{APP_NAME, Config as CoreConfig};

const WEEKPLAN_CONFIG_ENV: &str = "WEEKPLAN_CONFIG";

/// Loads the core configuration. Resolution order: explicit `--config`
/// path, the `WEEKPLAN_CONFIG` environment variable, then
/// `<config dir>/weekplan/config.toml`. The planner works out of the box,
/// so a missing config file just means defaults.
pub async fn parse_config(path: Option<PathBuf>) -> Result<CoreConfig, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(WEEKPLAN_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!("No config found at {}, using defaults", config.display());
            return Ok(CoreConfig::default());
        }
        config
    };

    let raw: ConfigRaw = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {e}", path.display()))?
        .parse()?;
    Ok(raw.0)
}

struct ConfigRaw(CoreConfig);

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ConfigRaw(toml::from_str(s)?))
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn explicit_path_is_parsed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
grid_start_hour = 7
grid_end_hour = 22
"#,
        )
        .unwrap();

        let config = parse_config(Some(path)).await.unwrap();
        assert_eq!(config.grid_start_hour, 7);
        assert_eq!(config.grid_end_hour, 22);
    }

    #[tokio::test]
    async fn missing_explicit_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(parse_config(Some(path)).await.is_err());
    }

    #[tokio::test]
    async fn invalid_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "grid_start_hour = \"morning\"").unwrap();
        assert!(parse_config(Some(path)).await.is_err());
    }
}
