// Configuration loading and parsing (config/hitprop.toml).
//
// Only file locations live here. The rename maps and the scoring constants
// are compiled in and cannot be overridden.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "hitprop.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub data_paths: DataPaths,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

/// Default input files, relative to the base directory unless absolute.
#[derive(Debug, Clone, Deserialize)]
pub struct DataPaths {
    pub stats: String,
    pub odds: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory that receives `recommended_bets.csv`.
    pub dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub dir: String,
}

impl Config {
    /// Resolve a configured path against `base_dir`.
    pub fn resolve(base_dir: &Path, configured: &str) -> PathBuf {
        let p = Path::new(configured);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            base_dir.join(p)
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/hitprop.toml` under `base_dir`. Does not copy
/// defaults; see `load_config`.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

/// Copy `defaults/hitprop.toml` to `config/hitprop.toml` when the latter
/// does not exist yet. Returns the path written, if any. An existing config
/// file is never touched.
pub fn ensure_config_file(base_dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let target = base_dir.join("config").join(CONFIG_FILE);
    if target.exists() {
        return Ok(None);
    }

    let seed = base_dir.join("defaults").join(CONFIG_FILE);
    if !seed.exists() {
        return Err(ConfigError::DefaultsCopyError {
            message: format!(
                "neither {} nor {} found; run from the project root or pass --config-dir",
                target.display(),
                seed.display()
            ),
        });
    }

    let copy_err = |e: std::io::Error| ConfigError::DefaultsCopyError {
        message: format!("failed to copy {} to {}: {e}", seed.display(), target.display()),
    };
    if let Some(dir) = target.parent() {
        std::fs::create_dir_all(dir).map_err(copy_err)?;
    }
    std::fs::copy(&seed, &target).map_err(copy_err)?;
    Ok(Some(target))
}

/// Seed the config file from `defaults/` if needed, then load.
pub fn load_config(base_dir: &Path) -> Result<Config, ConfigError> {
    ensure_config_file(base_dir)?;
    load_config_from(base_dir)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    let fields: &[(&str, &str)] = &[
        ("data_paths.stats", config.data_paths.stats.as_str()),
        ("data_paths.odds", config.data_paths.odds.as_str()),
        ("export.dir", config.export.dir.as_str()),
        ("logging.dir", config.logging.dir.as_str()),
    ];
    for (name, val) in fields {
        if val.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: "must not be empty".into(),
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Workspace root, where `defaults/` lives.
    fn project_root() -> PathBuf {
        let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        manifest
            .ancestors()
            .find(|p| p.join("defaults").join(CONFIG_FILE).exists())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| panic!("cannot locate defaults/ above {:?}", manifest))
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let tmp = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&tmp).unwrap();
        tmp
    }

    fn write_config(base: &Path, body: &str) {
        let dir = base.join("config");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(CONFIG_FILE), body).unwrap();
    }

    #[test]
    fn default_config_parses() {
        let tmp = scratch_dir("hitprop_config_defaults");
        fs::create_dir_all(tmp.join("defaults")).unwrap();
        fs::copy(
            project_root().join("defaults").join(CONFIG_FILE),
            tmp.join("defaults").join(CONFIG_FILE),
        )
        .unwrap();

        let config = load_config(&tmp).expect("default config should load");
        assert_eq!(config.data_paths.stats, "data/player_stats.csv");
        assert_eq!(config.data_paths.odds, "data/betting_odds.csv");
        assert_eq!(config.export.dir, "exports");
        assert_eq!(config.logging.dir, "logs");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn ensure_copies_once_and_keeps_edits() {
        let tmp = scratch_dir("hitprop_config_copy");
        let defaults = tmp.join("defaults");
        fs::create_dir_all(&defaults).unwrap();
        fs::write(defaults.join(CONFIG_FILE), "x = 1").unwrap();

        let copied = ensure_config_file(&tmp).unwrap();
        assert_eq!(copied, Some(tmp.join("config").join(CONFIG_FILE)));

        fs::write(tmp.join("config").join(CONFIG_FILE), "edited = true").unwrap();
        assert_eq!(ensure_config_file(&tmp).unwrap(), None);
        assert_eq!(
            fs::read_to_string(tmp.join("config").join(CONFIG_FILE)).unwrap(),
            "edited = true"
        );

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn existing_config_needs_no_defaults() {
        let tmp = scratch_dir("hitprop_config_no_defaults");
        write_config(&tmp, "x = 1");
        assert_eq!(ensure_config_file(&tmp).unwrap(), None);
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn no_defaults_and_no_config_is_an_error() {
        let tmp = scratch_dir("hitprop_config_nothing");
        let err = ensure_config_file(&tmp).unwrap_err();
        assert!(matches!(err, ConfigError::DefaultsCopyError { .. }));
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let tmp = scratch_dir("hitprop_config_missing");
        let err = load_config_from(&tmp).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let tmp = scratch_dir("hitprop_config_malformed");
        write_config(&tmp, "[data_paths\nstats = ");
        let err = load_config_from(&tmp).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn empty_path_fails_validation() {
        let tmp = scratch_dir("hitprop_config_empty_path");
        write_config(
            &tmp,
            r#"
[data_paths]
stats = "data/player_stats.csv"
odds = "  "

[export]
dir = "exports"

[logging]
dir = "logs"
"#,
        );
        match load_config_from(&tmp).unwrap_err() {
            ConfigError::ValidationError { field, .. } => assert_eq!(field, "data_paths.odds"),
            other => panic!("unexpected error: {other}"),
        }
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn resolve_keeps_absolute_paths() {
        let base = Path::new("/work");
        assert_eq!(Config::resolve(base, "data/a.csv"), PathBuf::from("/work/data/a.csv"));
        assert_eq!(Config::resolve(base, "/tmp/a.csv"), PathBuf::from("/tmp/a.csv"));
    }
}
