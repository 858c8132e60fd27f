// Configuration for the dashboard client
//
// Configuration is loaded in order of precedence:
// 1. Environment variables (highest priority)
// 2. Config file (~/.config/linkdeck/config.toml)
// 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base origin of the shortener backend API
    ///
    /// Read once at startup and injected into the gateway; no call site
    /// carries its own copy of the origin.
    pub api_url: String,

    /// Theme name: "auto", "dracula", "nord"
    pub theme: String,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            theme: "auto".to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Log file rotation strategy
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LogRotation {
    /// Rotate log files hourly
    Hourly,
    /// Rotate log files daily (default)
    #[default]
    Daily,
    /// Never rotate - single log file
    Never,
}

impl LogRotation {
    /// Parse rotation string from config
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hourly" => Self::Hourly,
            "daily" => Self::Daily,
            "never" => Self::Never,
            _ => Self::Daily, // Default to daily for unknown values
        }
    }

    /// Convert to string for TOML serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Enable file logging (in addition to the in-app buffer)
    pub file_enabled: bool,
    /// Directory for log files
    pub file_dir: PathBuf,
    /// Log file rotation strategy
    pub file_rotation: LogRotation,
    /// Prefix for log file names (e.g., "linkdeck" -> "linkdeck.2025-06-15.log")
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false, // Opt-in feature
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: "linkdeck".to_string(),
        }
    }
}

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub api_url: Option<String>,
    pub theme: Option<String>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

/// Logging settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    /// Create from file config with defaults
    fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            level: file.level.unwrap_or(defaults.level),
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file
                .file_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.file_dir),
            file_rotation: file
                .file_rotation
                .map(|s| LogRotation::parse(&s))
                .unwrap_or(defaults.file_rotation),
            file_prefix: file.file_prefix.unwrap_or(defaults.file_prefix),
        }
    }
}

impl Config {
    /// Get the config file path: ~/.config/linkdeck/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("linkdeck").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Create parent directory
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Use Config::default().to_toml() as single source of truth
        let template = Self::default().to_toml();

        // Write config (ignore errors - config is optional)
        let _ = std::fs::write(&path, template);
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but cannot be parsed fails fast with a
    /// clear error instead of silently falling back to defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Failed to parse config file {}:", path.display());
                    eprintln!("  {}", e);
                    eprintln!("To reset, delete the file and restart linkdeck.");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Config file doesn't exist - use defaults
                FileConfig::default()
            }
            Err(e) => {
                eprintln!("Cannot read config file {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        let defaults = Self::default();

        // Backend origin: env > file > default
        let api_url = std::env::var("LINKDECK_API_URL")
            .ok()
            .or(file.api_url)
            .unwrap_or(defaults.api_url);

        // Theme: env > file > default
        let theme = std::env::var("LINKDECK_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or(defaults.theme);

        let logging = LoggingConfig::from_file(file.logging);

        Self {
            api_url,
            theme,
            logging,
        }
    }

    /// Render the config as a commented TOML template
    pub fn to_toml(&self) -> String {
        format!(
            r#"# linkdeck configuration
# Values here are overridden by LINKDECK_* environment variables.

# Base origin of the shortener backend API
api_url = "{api_url}"

# Color theme: "auto", "dracula", "nord"
theme = "{theme}"

[logging]
# Log level: trace, debug, info, warn, error (RUST_LOG overrides)
level = "{level}"
# Also write JSON logs to rotating files
file_enabled = {file_enabled}
file_dir = "{file_dir}"
# Rotation: hourly, daily, never
file_rotation = "{file_rotation}"
file_prefix = "{file_prefix}"
"#,
            api_url = self.api_url,
            theme = self.theme,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            file_rotation = self.logging.file_rotation.as_str(),
            file_prefix = self.logging.file_prefix,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Verify that the generated template parses back. This catches TOML
    /// syntax errors in the template before a user's first run does.
    #[test]
    fn default_config_template_round_trips() {
        let config = Config::default();
        let toml_str = config.to_toml();

        let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
        assert!(
            parsed.is_ok(),
            "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
            toml_str,
            parsed.err()
        );

        let file = parsed.unwrap();
        assert_eq!(file.api_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(file.theme.as_deref(), Some("auto"));
        let logging = file.logging.expect("logging section");
        assert_eq!(logging.level.as_deref(), Some("info"));
        assert_eq!(logging.file_enabled, Some(false));
    }

    #[test]
    fn file_values_override_logging_defaults() {
        let file = FileLogging {
            level: Some("debug".to_string()),
            file_enabled: Some(true),
            file_dir: None,
            file_rotation: Some("hourly".to_string()),
            file_prefix: None,
        };
        let logging = LoggingConfig::from_file(Some(file));
        assert_eq!(logging.level, "debug");
        assert!(logging.file_enabled);
        assert_eq!(logging.file_rotation, LogRotation::Hourly);
        // Unset fields keep their defaults
        assert_eq!(logging.file_dir, PathBuf::from("./logs"));
        assert_eq!(logging.file_prefix, "linkdeck");
    }

    #[test]
    fn unknown_rotation_falls_back_to_daily() {
        assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
        assert_eq!(LogRotation::parse("HOURLY"), LogRotation::Hourly);
        assert_eq!(LogRotation::parse("never"), LogRotation::Never);
    }
}
