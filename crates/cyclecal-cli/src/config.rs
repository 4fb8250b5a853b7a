use crate::types::LogLevel;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. CYCLECAL_PATH environment variable (a directory, with tilde expansion)
/// 3. XDG config directory (recommended default)
/// 4. ~/.cyclecal (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("CYCLECAL_PATH") {
        return Ok(expand_tilde(&env_path).join("config.toml"));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("cyclecal").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".cyclecal").join("config.toml"));
    }

    bail!("Could not determine config path: no HOME directory or XDG config directory found")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Prefill values for the settings form. Kept as raw integers; validation
/// happens in the form like for typed input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_length: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<LogLevel>,
    /// The interactive calendar only logs to this file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settings: SettingsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// What `cyclecal init` writes.
    pub fn starter() -> Self {
        Self {
            settings: SettingsConfig {
                cycle_length: Some(28),
                period_length: Some(5),
            },
            logging: LoggingConfig {
                level: Some(LogLevel::Warn),
                file: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.settings.cycle_length, None);
        assert_eq!(config.logging.level, None);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config::starter();
        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_partial_config() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            r#"
[logging]
level = "debug"
file = "/tmp/cyclecal.log"
"#,
        )?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.settings, SettingsConfig::default());
        assert_eq!(config.logging.level, Some(LogLevel::Debug));
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/cyclecal.log")));

        Ok(())
    }

    #[test]
    fn test_invalid_config_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[settings]\ncycle_length = \"many\"\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(err.to_string().starts_with("Invalid config"));

        Ok(())
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_config_path(Some("/etc/cyclecal.toml"))?;
        assert_eq!(path, PathBuf::from("/etc/cyclecal.toml"));
        Ok(())
    }
}
