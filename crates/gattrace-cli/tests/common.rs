//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation. This is a standard pattern
//! for Rust integration test fixtures.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    temp_dir: TempDir,
    config_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_dir = temp_dir.path().join(".gattrace");
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            config_dir,
        }
    }

    /// Command pointed at an isolated config dir, with ambient tshark
    /// configuration stripped so tests never touch a real binary.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("gattrace").expect("Failed to find gattrace binary");
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd.env_remove("GATTRACE_TSHARK");
        cmd
    }

    pub fn path(&self) -> &std::path::Path {
        self.temp_dir.path()
    }

    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, contents).expect("Failed to write file");
        path
    }

    pub fn write_config(&self, contents: &str) {
        fs::write(self.config_dir.join("config.toml"), contents).expect("Failed to write config");
    }
}

/// A minimal tshark -T json export packet carrying one ATT exchange.
pub fn export_packet(frame: &str, time_epoch: &str, fields: &str) -> String {
    format!(
        r#"{{
  "_source": {{
    "layers": {{
      "frame": {{ "frame.number": "{}", "frame.time_epoch": "{}" }},
      {}
    }}
  }}
}}"#,
        frame, time_epoch, fields
    )
}
