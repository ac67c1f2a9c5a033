//! Chart configuration: parsing, validation, and loading.
//!
//! A TOML file with three optional tables:
//!
//! ```toml
//! [generator]
//! bucket_count = 200
//! base_price   = 4750.0
//! bucket_secs  = 3
//! start_time   = "2022-01-03T09:00:00Z"
//!
//! [slider]
//! min = 20
//! max = 200
//! step = 10
//! default = 80
//!
//! [style]
//! buy_color  = "green"
//! sell_color = "red"
//! ```
//!
//! Missing tables and fields take their defaults; unknown keys are errors.
//!
//! Entrypoints:
//! - Parse + validate from a TOML string: [`load_config_str`]
//! - Parse + validate from a file path: [`load_config_path`]
//! - `--config`, then `$BUBBLE_CHART_CONFIG`, then defaults: [`resolve_config`]

use std::path::Path;

use anyhow::{Context, bail};
use market_sim::GeneratorConfig;
use serde::{Deserialize, Serialize};
use shared_utils::env::{EnvVarError, get_env_path};
use tracing::info;

use crate::slider::WindowSlider;
use crate::style::ChartStyle;

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "BUBBLE_CHART_CONFIG";

/// Top-level chart configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Synthetic series parameters.
    pub generator: GeneratorConfig,
    /// Window sizes offered by the host.
    pub slider: WindowSlider,
    /// Colors, labels and scale factors.
    pub style: ChartStyle,
}

impl ChartConfig {
    /// Validates every section.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.generator.validate().context("[generator]")?;
        self.slider.check().context("[slider]")?;
        self.style.validate().context("[style]")?;
        if self.slider.min > self.generator.bucket_count {
            bail!(
                "slider min {} exceeds generator bucket_count {}",
                self.slider.min,
                self.generator.bucket_count
            );
        }
        Ok(())
    }
}

/// Parse and validate a chart config from a TOML string.
///
/// Errors:
/// - TOML parse failures (including unknown keys)
/// - Validation failures (see [`ChartConfig::validate`])
pub fn load_config_str(toml_str: &str) -> anyhow::Result<ChartConfig> {
    let cfg: ChartConfig = toml::from_str(toml_str).context("failed to parse chart config TOML")?;
    cfg.validate().context("invalid chart config")?;
    Ok(cfg)
}

/// Read a chart config TOML file from disk, parse, and validate it.
pub fn load_config_path(path: impl AsRef<Path>) -> anyhow::Result<ChartConfig> {
    let text = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("read chart config file {}", path.as_ref().display()))?;
    load_config_str(&text)
}

/// Loads `explicit` if given, else the file named by [`CONFIG_ENV_VAR`],
/// else the built-in defaults.
pub fn resolve_config(explicit: Option<&Path>) -> anyhow::Result<ChartConfig> {
    resolve_config_from(explicit, CONFIG_ENV_VAR)
}

/// [`resolve_config`] with the environment variable name supplied by the caller.
///
/// An unset variable falls back to defaults; a blank one is an error.
pub fn resolve_config_from(explicit: Option<&Path>, env_var: &str) -> anyhow::Result<ChartConfig> {
    if let Some(path) = explicit {
        info!(path = %path.display(), "loading chart config");
        return load_config_path(path);
    }
    match get_env_path(env_var) {
        Ok(path) => {
            info!(path = %path.display(), "loading chart config from {env_var}");
            load_config_path(path)
        }
        Err(EnvVarError::Missing(_)) => Ok(ChartConfig::default()),
        Err(e) => Err(e).context("chart config location"),
    }
}
