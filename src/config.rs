use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_problem_id")]
    pub problem_id: u32,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_problems_dir")]
    pub problems_dir: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_problem_id() -> u32 {
    110
}
fn default_language() -> String {
    "python".to_string()
}
fn default_problems_dir() -> String {
    Path::new("data")
        .join("problems")
        .to_string_lossy()
        .to_string()
}
fn default_theme() -> String {
    "clicode".to_string()
}
fn default_log_file() -> String {
    "clicode.log".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            problem_id: default_problem_id(),
            language: default_language(),
            problems_dir: default_problems_dir(),
            theme: default_theme(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.normalize_language();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("clicode")
            .join("config.toml")
    }

    /// Stub keys are lowercase language names; blank falls back to the default.
    pub fn normalize_language(&mut self) {
        let trimmed = self.language.trim().to_lowercase();
        self.language = if trimmed.is_empty() {
            default_language()
        } else {
            trimmed
        };
    }
}
