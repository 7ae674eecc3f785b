//! Layered CLI configuration.
//!
//! Values resolve in order: built-in defaults, the TOML file named by
//! `TEXASDUEL_CONFIG`, the `TEXASDUEL_*` environment variables, then
//! command-line flags. Each value remembers where it came from.

use serde::{Deserialize, Serialize};
use std::fs;
use texasduel_ai::{POLICY_NAMES, POLICY_THRESHOLD};
use texasduel_engine::rules::{MAX_RAISE, MIN_RAISE, REBUY_THRESHOLD, STARTING_CHIPS, TableConfig};

pub const ENV_CONFIG: &str = "TEXASDUEL_CONFIG";
pub const ENV_SEED: &str = "TEXASDUEL_SEED";
pub const ENV_STARTING_CHIPS: &str = "TEXASDUEL_STARTING_CHIPS";
pub const ENV_POLICY: &str = "TEXASDUEL_POLICY";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_chips: u32,
    pub min_raise: u32,
    pub max_raise: u32,
    pub rebuy_threshold: u32,
    pub seed: Option<u64>,
    pub policy: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_chips: STARTING_CHIPS,
            min_raise: MIN_RAISE,
            max_raise: MAX_RAISE,
            rebuy_threshold: REBUY_THRESHOLD,
            seed: None,
            policy: POLICY_THRESHOLD.into(),
        }
    }
}

impl Config {
    /// Engine table settings for this configuration.
    pub fn table_config(&self) -> TableConfig {
        TableConfig {
            starting_chips: self.starting_chips,
            min_raise: self.min_raise,
            max_raise: self.max_raise,
            rebuy_threshold: self.rebuy_threshold,
            seed: self.seed,
            ..TableConfig::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_chips: ValueSource,
    pub min_raise: ValueSource,
    pub max_raise: ValueSource,
    pub rebuy_threshold: ValueSource,
    pub seed: ValueSource,
    pub policy: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_chips: ValueSource::Default,
            min_raise: ValueSource::Default,
            max_raise: ValueSource::Default,
            rebuy_threshold: ValueSource::Default,
            seed: ValueSource::Default,
            policy: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

/// Values given as command-line flags; `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub seed: Option<u64>,
    pub starting_chips: Option<u32>,
    pub policy: Option<String>,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_with_overrides(&CliOverrides::default())
}

pub fn load_with_overrides(overrides: &CliOverrides) -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(ENV_CONFIG)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_chips {
            cfg.starting_chips = v;
            sources.starting_chips = ValueSource::File;
        }
        if let Some(v) = f.min_raise {
            cfg.min_raise = v;
            sources.min_raise = ValueSource::File;
        }
        if let Some(v) = f.max_raise {
            cfg.max_raise = v;
            sources.max_raise = ValueSource::File;
        }
        if let Some(v) = f.rebuy_threshold {
            cfg.rebuy_threshold = v;
            sources.rebuy_threshold = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.policy {
            cfg.policy = v;
            sources.policy = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(ENV_SEED)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid {ENV_SEED}: {seed}")))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(chips) = std::env::var(ENV_STARTING_CHIPS)
        && !chips.is_empty()
    {
        cfg.starting_chips = chips
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid {ENV_STARTING_CHIPS}: {chips}")))?;
        sources.starting_chips = ValueSource::Env;
    }
    if let Ok(policy) = std::env::var(ENV_POLICY)
        && !policy.is_empty()
    {
        cfg.policy = policy;
        sources.policy = ValueSource::Env;
    }

    if let Some(seed) = overrides.seed {
        cfg.seed = Some(seed);
        sources.seed = ValueSource::Cli;
    }
    if let Some(chips) = overrides.starting_chips {
        cfg.starting_chips = chips;
        sources.starting_chips = ValueSource::Cli;
    }
    if let Some(policy) = &overrides.policy {
        cfg.policy = policy.clone();
        sources.policy = ValueSource::Cli;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    starting_chips: Option<u32>,
    #[serde(default)]
    min_raise: Option<u32>,
    #[serde(default)]
    max_raise: Option<u32>,
    #[serde(default)]
    rebuy_threshold: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    policy: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.min_raise == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: min_raise must be >=1".into(),
        ));
    }
    if cfg.min_raise > cfg.max_raise {
        return Err(ConfigError::Invalid(
            "Invalid configuration: min_raise must be <= max_raise".into(),
        ));
    }
    if cfg.starting_chips < cfg.rebuy_threshold {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_chips must be >= rebuy_threshold".into(),
        ));
    }
    if !POLICY_NAMES
        .iter()
        .any(|name| name.eq_ignore_ascii_case(&cfg.policy))
    {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown policy '{}' (known: {})",
            cfg.policy,
            POLICY_NAMES.join(", ")
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_engine_table() {
        let cfg = Config::default();
        assert!(validate(&cfg).is_ok());
        let table = cfg.table_config();
        assert_eq!(table, TableConfig::default());
    }

    #[test]
    fn rejects_inverted_raise_bounds() {
        let cfg = Config {
            min_raise: 50,
            max_raise: 20,
            ..Config::default()
        };
        let msg = validate(&cfg).unwrap_err().to_string();
        assert!(msg.contains("min_raise must be <= max_raise"));
    }

    #[test]
    fn rejects_stack_below_rebuy_threshold() {
        let cfg = Config {
            starting_chips: 5,
            ..Config::default()
        };
        assert!(validate(&cfg).is_err());
    }

    #[test]
    fn policy_names_are_case_insensitive() {
        let cfg = Config {
            policy: "Threshold".into(),
            ..Config::default()
        };
        assert!(validate(&cfg).is_ok());
        let cfg = Config {
            policy: "random".into(),
            ..Config::default()
        };
        assert!(validate(&cfg).unwrap_err().to_string().contains("unknown policy"));
    }
}
