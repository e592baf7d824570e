//! Shared configuration for the parkrate service and CLI.
//!
//! Layered loading (defaults → TOML/JSON file → `PARKRATE_` env vars)
//! and the startup rates document. The core crate never reads files;
//! this crate turns them into `parkrate_core` types.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use parkrate_core::{CoreError, RateRule, RatesDocument, TimeBasis, parse_definitions};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("rates file {} is not a valid rates document: {source}", path.display())]
    RatesJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("rates file {} contains invalid rate objects: {source}", path.display())]
    Rates {
        path: PathBuf,
        #[source]
        source: CoreError,
    },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Config structs ──────────────────────────────────────────────────

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub rates: RatesConfig,

    #[serde(default)]
    pub matching: MatchingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HttpConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".into()
}
fn default_port() -> u16 {
    8080
}

/// Where the initial rate table comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RatesConfig {
    /// JSON rates document loaded at startup. Empty table when unset.
    pub rates_filepath: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MatchingConfig {
    #[serde(default)]
    pub time_basis: TimeBasis,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the default config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "parkrate", "parkrate").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("parkrate");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from defaults, a file, and the environment.
///
/// An explicit `path` must exist; `.json` files are read as JSON and
/// anything else as TOML. Without one, the default path is used when
/// present. `PARKRATE_HTTP__PORT=9000` style variables override both.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

    match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            figment = merge_file(figment, path);
        }
        None => figment = merge_file(figment, &config_path()),
    }

    let config: Config = figment
        .merge(Env::prefixed("PARKRATE_").split("__"))
        .extract()?;
    Ok(config)
}

fn merge_file(figment: Figment, path: &Path) -> Figment {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        figment.merge(Json::file(path))
    } else {
        figment.merge(Toml::file(path))
    }
}

/// Render the effective configuration as TOML.
pub fn to_toml(config: &Config) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(config)?)
}

// ── Rates document ──────────────────────────────────────────────────

/// Read a `{"rates": [...]}` document and expand it into rules.
pub fn load_rates_file(path: &Path) -> Result<Vec<RateRule>, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let doc: RatesDocument = serde_json::from_str(&raw).map_err(|source| ConfigError::RatesJson {
        path: path.to_path_buf(),
        source,
    })?;
    let rules = parse_definitions(&doc.rates).map_err(|source| ConfigError::Rates {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        definitions = doc.rates.len(),
        rules = rules.len(),
        "loaded rates file"
    );
    Ok(rules)
}

/// The configured startup table, or an empty one when no file is set.
pub fn load_initial_rates(config: &Config) -> Result<Vec<RateRule>, ConfigError> {
    config
        .rates
        .rates_filepath
        .as_deref()
        .map_or_else(|| Ok(Vec::new()), load_rates_file)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    const RATES: &str = r#"{
        "rates": [
            {"days": "mon,tues,thurs", "times": "0900-2100", "tz": "America/Chicago", "price": 1500},
            {"days": "wed", "times": "0600-1800", "tz": "America/Chicago", "price": 1750}
        ]
    }"#;

    #[test]
    fn defaults_are_sensible() {
        let cfg = Config::default();
        assert_eq!(cfg.http.host, "127.0.0.1");
        assert_eq!(cfg.http.port, 8080);
        assert_eq!(cfg.rates.rates_filepath, None);
        assert_eq!(cfg.matching.time_basis, TimeBasis::WallClock);
    }

    #[test]
    fn loads_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "config.toml",
            "[http]\nport = 9191\n\n[matching]\ntime_basis = \"rule-zone\"\n",
        );

        let cfg = load_config(Some(&path)).unwrap();
        assert_eq!(cfg.http.port, 9191);
        assert_eq!(cfg.http.host, "127.0.0.1");
        assert_eq!(cfg.matching.time_basis, TimeBasis::RuleZone);
    }

    #[test]
    fn loads_json_file_in_legacy_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "config.json",
            r#"{"http": {"host": "0.0.0.0", "port": 5000}, "rates": {"rates_filepath": "rates.json"}}"#,
        );

        let cfg = load_config(Some(&path)).unwrap();
        assert_eq!(cfg.http.host, "0.0.0.0");
        assert_eq!(cfg.http.port, 5000);
        assert_eq!(cfg.rates.rates_filepath, Some(PathBuf::from("rates.json")));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }), "got {err:?}");
    }

    #[test]
    fn rejects_unknown_time_basis() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "config.toml", "[matching]\ntime_basis = \"sundial\"\n");
        assert!(matches!(load_config(Some(&path)), Err(ConfigError::Figment(_))));
    }

    #[test]
    fn loads_rates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "rates.json", RATES);
        let rules = load_rates_file(&path).unwrap();
        assert_eq!(rules.len(), 4);
        assert!(rules.iter().take(3).all(|r| r.price() == 1500));
    }

    #[test]
    fn rates_file_with_bad_definition_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "rates.json",
            r#"{"rates": [{"days": "mon", "times": "0900-2100", "tz": "Amrica/Chicago", "price": 1}]}"#,
        );
        assert!(matches!(load_rates_file(&path), Err(ConfigError::Rates { .. })));
    }

    #[test]
    fn rates_file_must_be_a_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "rates.json", "[1, 2, 3]");
        assert!(matches!(load_rates_file(&path), Err(ConfigError::RatesJson { .. })));
    }

    #[test]
    fn no_rates_file_means_empty_table() {
        assert!(load_initial_rates(&Config::default()).unwrap().is_empty());
    }

    #[test]
    fn effective_config_renders_as_toml() {
        let rendered = to_toml(&Config::default()).unwrap();
        assert!(rendered.contains("port = 8080"));
        assert!(rendered.contains("time_basis = \"wall-clock\""));
    }
}
