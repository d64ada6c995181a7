use anyhow::{Context, Result, anyhow};
use polish_calculator::{Evaluator, OperatorRegistry, ResultSink, StdoutSink, TracingSink};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

pub const CONFIG_PATH_ENV: &str = "POLISH_CONFIG_PATH";
pub const LOG_FORMAT_ENV: &str = "POLISH_LOG_FORMAT";
pub const RESULT_SINK_ENV: &str = "POLISH_RESULT_SINK";
pub const DEFAULT_CONFIG_FILE: &str = "polish.toml";

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow!("unknown log format '{other}' (expected compact or json)")),
        }
    }
}

/// Where `result: <value>` records go
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    Tracing,
    Stdout,
}

impl FromStr for SinkKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "tracing" => Ok(SinkKind::Tracing),
            "stdout" => Ok(SinkKind::Stdout),
            other => Err(anyhow!("unknown result sink '{other}' (expected tracing or stdout)")),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { format: LogFormat::default(), filter: default_log_filter() }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub result_sink: SinkKind,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct PolishConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
    /// alias -> operator
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// The default file was absent
    Defaults(PathBuf),
}

impl PolishConfig {
    /// Load configuration from `explicit`, `$POLISH_CONFIG_PATH`, or `polish.toml`.
    ///
    /// Only the implicit default file may be missing; a path the user named
    /// must exist. Environment overrides are applied last.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, ConfigSource)> {
        Self::load_with(explicit, Path::new(DEFAULT_CONFIG_FILE), |key| std::env::var(key).ok())
    }

    /// `load` with the default file and the variable lookup supplied by the caller
    pub fn load_with(
        explicit: Option<&Path>,
        default_file: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(Self, ConfigSource)> {
        let named = explicit
            .map(Path::to_path_buf)
            .or_else(|| lookup(CONFIG_PATH_ENV).map(PathBuf::from));

        let (config, source) = match named {
            Some(path) => (Self::from_file(&path)?, ConfigSource::File(path)),
            None if default_file.exists() => {
                (Self::from_file(default_file)?, ConfigSource::File(default_file.to_path_buf()))
            }
            None => (Self::default(), ConfigSource::Defaults(default_file.to_path_buf())),
        };

        Ok((config.apply_overrides(lookup)?, source))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration file '{}'", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("failed to parse configuration file '{}'", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply `POLISH_LOG_FORMAT` and `POLISH_RESULT_SINK` as resolved by `lookup`
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(format) = lookup(LOG_FORMAT_ENV) {
            self.logging.format =
                format.parse().with_context(|| format!("invalid {LOG_FORMAT_ENV}"))?;
        }
        if let Some(sink) = lookup(RESULT_SINK_ENV) {
            self.output.result_sink =
                sink.parse().with_context(|| format!("invalid {RESULT_SINK_ENV}"))?;
        }
        Ok(self)
    }

    pub fn result_sink(&self) -> Arc<dyn ResultSink> {
        match self.output.result_sink {
            SinkKind::Tracing => Arc::new(TracingSink),
            SinkKind::Stdout => Arc::new(StdoutSink),
        }
    }

    /// Build the evaluator: built-in operators plus the configured aliases
    pub fn build_evaluator(&self) -> Result<Evaluator> {
        let mut registry = OperatorRegistry::with_builtins(self.result_sink());

        for (alias, target) in &self.aliases {
            registry
                .register_alias(alias, target)
                .with_context(|| format!("invalid alias '{alias}' -> '{target}'"))?;
        }

        Ok(Evaluator::new(registry))
    }
}

fn default_log_filter() -> String {
    "polish=info".to_string()
}
