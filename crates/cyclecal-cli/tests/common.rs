//! Shared helpers for the CLI integration tests.
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway config location so tests never read the user's real file.
pub struct TestEnv {
    _temp_dir: TempDir,
    config_path: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("cyclecal").join("config.toml");
        Self {
            _temp_dir: temp_dir,
            config_path,
        }
    }

    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn write_config(&self, content: &str) {
        std::fs::create_dir_all(self.config_path.parent().unwrap())
            .expect("Failed to create config dir");
        std::fs::write(&self.config_path, content).expect("Failed to write config");
    }

    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("cyclecal").expect("Failed to find cyclecal binary");
        cmd.arg("--config")
            .arg(&self.config_path)
            .env_remove("RUST_LOG")
            .env_remove("CYCLECAL_PATH");
        cmd
    }
}
