//! # Configuration
//!
//! Server configuration is managed by [`confique`], layered in priority order:
//!
//! 1. **Command line**: `--bind`, `--port`, `--database` (applied by the binary
//!    on top of the loaded value).
//! 2. **Environment variables**: `TRIVIA_BIND`, `TRIVIA_PORT`, `TRIVIA_DATABASE`,
//!    `TRIVIA_LOG_LEVEL`.
//! 3. **Config file**: an explicit `--config` path, otherwise `./trivia.toml`,
//!    then `trivia.toml` in the OS config directory (via `directories`).
//! 4. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `bind` | `127.0.0.1` | Address the HTTP server listens on |
//! | `port` | `5000` | Port the HTTP server listens on |
//! | `database` | `trivia.db` | SQLite database file |
//! | `log_level` | `info` | Log filter used when `RUST_LOG` is unset |

use crate::error::{Result, TriviaError};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "trivia.toml";

/// Configuration for the trivia server, stored in `trivia.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TriviaConfig {
    /// Address the HTTP server listens on
    #[config(env = "TRIVIA_BIND", default = "127.0.0.1")]
    pub bind: String,

    /// Port the HTTP server listens on
    #[config(env = "TRIVIA_PORT", default = 5000)]
    pub port: u16,

    /// SQLite database file
    #[config(env = "TRIVIA_DATABASE", default = "trivia.db")]
    pub database: PathBuf,

    /// Log filter used when RUST_LOG is unset (e.g. "info", "trivia=debug")
    #[config(env = "TRIVIA_LOG_LEVEL", default = "info")]
    pub log_level: String,
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 5000,
            database: PathBuf::from("trivia.db"),
            log_level: "info".to_string(),
        }
    }
}

impl TriviaConfig {
    /// Loads the layered configuration (environment, then config files, then
    /// defaults). An explicit `config_file` must exist.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = TriviaConfig::builder().env();
        for path in config_files(config_file)? {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    /// `bind:port`, ready for a listener.
    pub fn address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

/// Config files to consult, highest priority first.
fn config_files(explicit: Option<&Path>) -> Result<Vec<PathBuf>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(TriviaError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dirs) = ProjectDirs::from("", "", "trivia") {
        files.push(dirs.config_dir().join(CONFIG_FILE_NAME));
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = TriviaConfig::default();
        assert_eq!(config.bind, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert_eq!(config.database, PathBuf::from("trivia.db"));
        assert_eq!(config.address(), "127.0.0.1:5000");
    }

    #[test]
    fn test_load_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "port = 8080\ndatabase = \"/tmp/quiz.db\"\n").unwrap();

        let config = TriviaConfig::load(Some(&path)).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.database, PathBuf::from("/tmp/quiz.db"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            TriviaConfig::load(Some(&missing)),
            Err(TriviaError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "port = \"not a port\"\n").unwrap();
        assert!(matches!(
            TriviaConfig::load(Some(&path)),
            Err(TriviaError::Config(_))
        ));
    }
}
