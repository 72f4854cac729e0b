//! Configuration file parser for ~/.config/agora/config.toml.
//!
//! The config file is optional; a missing file yields `Config::default()`.
//! Unknown keys are accepted by serde but logged as warnings, since they are
//! usually typos.
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config file too large: {0}")]
    TooLarge(String),
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Top-level application configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme variant name ("dark" or "light").
    pub theme: String,

    /// Base URL that navigation paths ("/login", ...) are resolved against.
    pub site_url: String,

    /// Open navigation targets in the system browser instead of only
    /// showing them in the status bar.
    pub open_links: bool,

    /// Simulated network latency for each feed page, in milliseconds.
    pub load_latency_ms: u64,

    /// Topic cards per feed page.
    pub batch_size: usize,

    /// Pages after which the feed reports no more data.
    pub max_pages: u32,

    /// Maximum leaderboard rows per period.
    pub trending_limit: usize,

    /// Rows from the bottom of the feed at which the next page is requested.
    pub scroll_threshold: usize,

    /// Optional TOML file replacing the built-in trending sample data.
    pub trending_file: Option<PathBuf>,

    /// Custom keybinding overrides. Keys are action names, values are key strings.
    pub keybindings: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            site_url: "http://localhost:5000".to_string(),
            open_links: false,
            load_latency_ms: 800,
            batch_size: 5,
            max_pages: 10,
            trending_limit: 5,
            scroll_threshold: 3,
            trending_file: None,
            keybindings: HashMap::new(),
        }
    }
}

impl Config {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    const KNOWN_KEYS: [&'static str; 10] = [
        "theme",
        "site_url",
        "open_links",
        "load_latency_ms",
        "batch_size",
        "max_pages",
        "trending_limit",
        "scroll_threshold",
        "trending_file",
        "keybindings",
    ];

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)`
    /// - Unknown keys → accepted, logged as warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(Self::default());
        }

        if let Ok(raw) = content.parse::<toml::Table>() {
            for key in raw.keys() {
                if !Self::KNOWN_KEYS.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(&content)?;
        tracing::info!(path = %path.display(), theme = %config.theme, "Loaded configuration");
        Ok(config)
    }

    pub fn load_latency(&self) -> Duration {
        Duration::from_millis(self.load_latency_ms)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("agora_config_test_{}", name));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    fn cleanup(path: &Path) {
        if let Some(dir) = path.parent() {
            std::fs::remove_dir_all(dir).ok();
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.batch_size, 5);
        assert_eq!(config.max_pages, 10);
        assert_eq!(config.trending_limit, 5);
        assert_eq!(config.load_latency(), Duration::from_millis(800));
        assert!(!config.open_links);
        assert!(config.trending_file.is_none());
        assert!(config.keybindings.is_empty());
    }

    #[test]
    fn test_missing_file_returns_default() {
        let path = Path::new("/tmp/agora_test_nonexistent_config.toml");
        let config = Config::load(path).unwrap();
        assert_eq!(config.site_url, "http://localhost:5000");
    }

    #[test]
    fn test_whitespace_only_file_returns_default() {
        let path = write_config("whitespace", "   \n  \n");
        let config = Config::load(&path).unwrap();
        assert_eq!(config.theme, "dark");
        cleanup(&path);
    }

    #[test]
    fn test_partial_config_uses_defaults_for_missing() {
        let path = write_config("partial", "max_pages = 3\nopen_links = true\n");
        let config = Config::load(&path).unwrap();
        assert_eq!(config.max_pages, 3);
        assert!(config.open_links);
        assert_eq!(config.batch_size, 5);
        cleanup(&path);
    }

    #[test]
    fn test_full_config() {
        let path = write_config(
            "full",
            r#"
theme = "light"
site_url = "https://debate.example.com"
open_links = true
load_latency_ms = 50
batch_size = 8
max_pages = 4
trending_limit = 3
scroll_threshold = 6
trending_file = "/srv/trending.toml"

[keybindings]
quit = "Ctrl+q"
create_topic = "c"
"#,
        );
        let config = Config::load(&path).unwrap();
        assert_eq!(config.theme, "light");
        assert_eq!(config.site_url, "https://debate.example.com");
        assert_eq!(config.load_latency(), Duration::from_millis(50));
        assert_eq!(config.batch_size, 8);
        assert_eq!(config.max_pages, 4);
        assert_eq!(config.trending_limit, 3);
        assert_eq!(config.scroll_threshold, 6);
        assert_eq!(
            config.trending_file.as_deref(),
            Some(Path::new("/srv/trending.toml"))
        );
        assert_eq!(
            config.keybindings.get("create_topic").map(String::as_str),
            Some("c")
        );
        cleanup(&path);
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        let path = write_config("invalid", "this is not [valid toml");
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("Invalid TOML"));
        cleanup(&path);
    }

    #[test]
    fn test_unknown_keys_accepted() {
        let path = write_config("unknown", "theme = \"dark\"\nmystery = 42\n");
        assert!(Config::load(&path).is_ok());
        cleanup(&path);
    }

    #[test]
    fn test_wrong_type_returns_error() {
        let path = write_config("wrongtype", "max_pages = \"ten\"\n");
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
        cleanup(&path);
    }

    #[test]
    fn test_too_large_file_rejected() {
        let path = write_config("too_large", &"a".repeat(1_048_577));
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::TooLarge(_)));
        cleanup(&path);
    }
}
