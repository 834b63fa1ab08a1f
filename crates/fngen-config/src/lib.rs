//! Configuration for adapter generation: per-class naming policy, generated class names and
//! logging.

#![forbid(unsafe_code)]

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Once;

use fngen_types::{ClassName, NamingPolicy};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Tracing target used by the planning pipeline.
pub const PLAN_TARGET: &str = "fngen.plan";

const DEFAULT_LEVEL: &str = "info";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub naming: NamingConfig,
    /// Per-class overrides keyed by fully qualified class name.
    pub classes: BTreeMap<String, ClassConfig>,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConfig {
    /// Policy applied to classes without an explicit override.
    pub default_policy: NamingPolicy,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ClassConfig {
    pub policy: Option<NamingPolicy>,
    /// Simple name of the generated class. Defaults to `<SimpleName>_`.
    pub generated_name: Option<String>,
}

/// Effective options for one class after applying defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassOptions {
    pub policy: NamingPolicy,
    pub generated_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// A level (`info`, `debug`, ..) or a full `EnvFilter` directive string.
    pub level: String,
    /// Emit logs as JSON lines.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_owned(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// `EnvFilter` directives for the configured level. `warning` is accepted for `warn`;
    /// anything other than a bare level is used as a directive string.
    pub fn directives(&self) -> String {
        let level = self.level.trim();
        match level.to_ascii_lowercase().as_str() {
            "" => DEFAULT_LEVEL.to_owned(),
            "warning" => "warn".to_owned(),
            bare @ ("off" | "error" | "warn" | "info" | "debug" | "trace") => bare.to_owned(),
            _ => level.to_owned(),
        }
    }

    /// The configured directives with `RUST_LOG`, when set, appended after them.
    pub fn env_filter(&self) -> EnvFilter {
        let mut directives = self.directives();
        if let Some(env) = std::env::var("RUST_LOG").ok().filter(|env| !env.trim().is_empty()) {
            directives.push(',');
            directives.push_str(env.trim());
        }
        filter_from(&directives)
    }
}

fn filter_from(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|err| {
        eprintln!("ignoring log filter `{directives}`: {err}");
        EnvFilter::new(DEFAULT_LEVEL)
    })
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse toml config: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        // Keep the message and drop the source snippet.
        ConfigError::Toml(err.message().to_owned())
    }
}

impl GeneratorConfig {
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::load_from_str(&text)
    }

    pub fn load_from_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn options_for(&self, class: &ClassName) -> ClassOptions {
        let overrides = self.classes.get(&class.qualified());
        ClassOptions {
            policy: overrides
                .and_then(|class| class.policy)
                .unwrap_or(self.naming.default_policy),
            generated_name: overrides.and_then(|class| class.generated_name.clone()),
        }
    }
}

/// JSON schema of the TOML configuration file.
pub fn json_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(GeneratorConfig)
}

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber (stderr). Subsequent calls are no-ops.
pub fn init_tracing(config: &LoggingConfig) {
    TRACING_INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(config.env_filter());
        let result = if config.json {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .try_init()
        } else {
            registry
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init()
        };
        if let Err(err) = result {
            eprintln!("failed to install tracing subscriber: {err}");
        }
    });
}
