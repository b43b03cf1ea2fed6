//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.thiruppavai/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::core::period::ObservancePeriod;
use crate::core::verse::Language;

pub const APP_DIR_NAME: &str = ".thiruppavai";
pub const PREFERENCES_FILE: &str = "preferences.json";
pub const LOG_FILE: &str = "thiruppavai.log";

pub const ENV_LANGUAGE: &str = "THIRUPPAVAI_LANGUAGE";
pub const ENV_VERSES: &str = "THIRUPPAVAI_VERSES";

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub period: PeriodConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_language: Option<String>,
    pub verses_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PeriodConfig {
    pub name: Option<String>,
    pub start_month: Option<u32>,
    pub start_day: Option<u32>,
    pub end_month: Option<u32>,
    pub end_day: Option<u32>,
    pub length: Option<u32>,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub language: Option<Language>,
    pub verses: Option<PathBuf>,
    pub date: Option<NaiveDate>,
}

// ============================================================================
// Resolved Config (concrete values)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Used when no language preference has been saved yet.
    pub default_language: Language,
    /// Explicit `--language`; applied (and persisted) after startup.
    pub language_override: Option<Language>,
    /// None = bundled verses.
    pub verses_path: Option<PathBuf>,
    pub period: ObservancePeriod,
    /// Fixed "today" for the whole session.
    pub today_override: Option<NaiveDate>,
    pub preferences_path: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.thiruppavai/`.
pub fn app_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(APP_DIR_NAME))
}

/// Returns the path to `~/.thiruppavai/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    app_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.thiruppavai/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AppConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(AppConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AppConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Thiruppavai Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_language = "english"     # "tamil", "sanskrit" or "english"
# verses_file = "verses.json"       # Path relative to ~/.thiruppavai/

# [period]
# name = "Margazhi"
# start_month = 12
# start_day = 16
# end_month = 1
# end_day = 14
# length = 30
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &AppConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(config, cli, app_dir().as_deref(), |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with the app directory and environment supplied by the caller.
pub fn resolve_with_env(
    config: &AppConfig,
    cli: &CliOverrides,
    app_dir: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    // Fallback language: env → config → default
    let default_language = match env(ENV_LANGUAGE).or_else(|| config.general.default_language.clone()) {
        Some(raw) => raw
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("default language: {e}")))?,
        None => Language::default(),
    };

    // Verses: CLI → env → config (relative to app dir) → bundled
    let verses_path = cli
        .verses
        .clone()
        .or_else(|| env(ENV_VERSES).map(PathBuf::from))
        .or_else(|| {
            config.general.verses_file.as_ref().map(|file| {
                let file = PathBuf::from(file);
                match app_dir {
                    Some(dir) if file.is_relative() => dir.join(file),
                    _ => file,
                }
            })
        });

    let period = resolve_period(&config.period);
    period.validate().map_err(ConfigError::Invalid)?;

    Ok(ResolvedConfig {
        default_language,
        language_override: cli.language,
        verses_path,
        period,
        today_override: cli.date,
        preferences_path: app_dir.map(|d| d.join(PREFERENCES_FILE)),
    })
}

fn resolve_period(config: &PeriodConfig) -> ObservancePeriod {
    let defaults = ObservancePeriod::margazhi();
    ObservancePeriod {
        name: config.name.clone().unwrap_or(defaults.name),
        start_month: config.start_month.unwrap_or(defaults.start_month),
        start_day: config.start_day.unwrap_or(defaults.start_day),
        end_month: config.end_month.unwrap_or(defaults.end_month),
        end_day: config.end_day.unwrap_or(defaults.end_day),
        length: config.length.unwrap_or(defaults.length),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved =
            resolve_with_env(&AppConfig::default(), &CliOverrides::default(), None, no_env)
                .unwrap();
        assert_eq!(resolved.default_language, Language::English);
        assert_eq!(resolved.language_override, None);
        assert_eq!(resolved.verses_path, None);
        assert_eq!(resolved.period, ObservancePeriod::margazhi());
        assert_eq!(resolved.today_override, None);
        assert_eq!(resolved.preferences_path, None);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = AppConfig {
            general: GeneralConfig {
                default_language: Some("tamil".to_string()),
                verses_file: Some("my-verses.json".to_string()),
            },
            period: PeriodConfig {
                start_day: Some(17),
                end_day: Some(13),
                ..Default::default()
            },
        };
        let dir = PathBuf::from("/home/test/.thiruppavai");
        let resolved =
            resolve_with_env(&config, &CliOverrides::default(), Some(&dir), no_env).unwrap();
        assert_eq!(resolved.default_language, Language::Tamil);
        assert_eq!(resolved.verses_path, Some(dir.join("my-verses.json")));
        assert_eq!(resolved.period.start_day, 17);
        assert_eq!(resolved.period.end_day, 13);
        assert_eq!(resolved.period.start_month, 12);
        assert_eq!(resolved.preferences_path, Some(dir.join(PREFERENCES_FILE)));
    }

    #[test]
    fn test_env_beats_config_and_cli_beats_env() {
        let config = AppConfig {
            general: GeneralConfig {
                default_language: Some("tamil".to_string()),
                verses_file: Some("/data/config.json".to_string()),
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            ENV_LANGUAGE => Some("sanskrit".to_string()),
            ENV_VERSES => Some("/data/env.json".to_string()),
            _ => None,
        };

        let resolved = resolve_with_env(&config, &CliOverrides::default(), None, env).unwrap();
        assert_eq!(resolved.default_language, Language::Sanskrit);
        assert_eq!(resolved.verses_path, Some(PathBuf::from("/data/env.json")));

        let cli = CliOverrides {
            language: Some(Language::English),
            verses: Some(PathBuf::from("/data/cli.json")),
            date: NaiveDate::from_ymd_opt(2025, 12, 25),
        };
        let resolved = resolve_with_env(&config, &cli, None, env).unwrap();
        assert_eq!(resolved.language_override, Some(Language::English));
        assert_eq!(resolved.verses_path, Some(PathBuf::from("/data/cli.json")));
        assert_eq!(resolved.today_override, NaiveDate::from_ymd_opt(2025, 12, 25));
    }

    #[test]
    fn test_absolute_verses_file_kept_as_is() {
        let config = AppConfig {
            general: GeneralConfig {
                verses_file: Some("/srv/verses.json".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let dir = PathBuf::from("/home/test/.thiruppavai");
        let resolved =
            resolve_with_env(&config, &CliOverrides::default(), Some(&dir), no_env).unwrap();
        assert_eq!(resolved.verses_path, Some(PathBuf::from("/srv/verses.json")));
    }

    #[test]
    fn test_invalid_language_rejected() {
        let config = AppConfig {
            general: GeneralConfig {
                default_language: Some("latin".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = resolve_with_env(&config, &CliOverrides::default(), None, no_env).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("latin"));
    }

    #[test]
    fn test_invalid_period_rejected() {
        let config = AppConfig {
            period: PeriodConfig {
                end_month: Some(12),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            resolve_with_env(&config, &CliOverrides::default(), None, no_env),
            Err(ConfigError::Invalid(_))
        ));

        // Start month would overrun the 30-day window
        let config = AppConfig {
            period: PeriodConfig {
                start_day: Some(1),
                ..Default::default()
            },
            ..Default::default()
        };
        match resolve_with_env(&config, &CliOverrides::default(), None, no_env) {
            Err(ConfigError::Invalid(msg)) => assert!(msg.contains("start_day")),
            other => panic!("expected invalid period, got {other:?}"),
        }
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
default_language = "sanskrit"
verses_file = "verses.json"

[period]
name = "Margazhi"
start_month = 12
start_day = 16
end_month = 1
end_day = 14
length = 30
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_language.as_deref(), Some("sanskrit"));
        assert_eq!(config.general.verses_file.as_deref(), Some("verses.json"));
        assert_eq!(config.period.name.as_deref(), Some("Margazhi"));
        assert_eq!(config.period.length, Some(30));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[period]
name = "Thai"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.period.name.as_deref(), Some("Thai"));
        assert!(config.period.start_month.is_none());
        assert!(config.general.default_language.is_none());
    }

    #[test]
    fn test_load_config_from_reports_parse_errors() {
        let path = crate::test_support::temp_path("config.toml");
        fs::write(&path, "[general\ndefault_language = ").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
        let _ = fs::remove_file(&path);
    }
}
