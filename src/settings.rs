//! Tunables shared by both networks.
//!
//! Settings are layered the usual way: built-in defaults, then an optional
//! configuration file (any format the `config` crate understands, e.g.
//! `knowrep.toml`), then `KNOWREP_*` environment variables.

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{KnowrepError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Running share below which `query_local_assoc` keeps adding values
    /// of a multi-valued association.
    pub multi_value_threshold: f64,
    /// Largest number of free variables `individual_prob` will enumerate.
    pub max_enumeration_variables: usize,
    /// Fallback filter for the tracing subscriber when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            multi_value_threshold: 0.75,
            max_enumeration_variables: 20,
            log_filter: String::from("info"),
        }
    }
}

impl Settings {
    pub const ENV_PREFIX: &'static str = "KNOWREP";

    /// Loads settings from `path` (extension optional, file optional) and
    /// the environment.
    pub fn load(path: &str) -> Result<Self> {
        let defaults = Settings::default();
        let settings: Settings = Config::builder()
            .set_default("multi_value_threshold", defaults.multi_value_threshold)?
            .set_default("max_enumeration_variables", defaults.max_enumeration_variables as u64)?
            .set_default("log_filter", defaults.log_filter)?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix(Self::ENV_PREFIX))
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        debug!(path, ?settings, "settings loaded");
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.multi_value_threshold > 0.0 && self.multi_value_threshold <= 1.0) {
            return Err(KnowrepError::Config(format!(
                "multi_value_threshold must be in (0, 1], got {}",
                self.multi_value_threshold
            )));
        }
        Ok(())
    }
}
