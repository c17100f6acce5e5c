//! User preferences.

use std::path::Path;

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");
const ENV_PREFIX: &str = "CUBESOLVE";

lazy_static! {
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Preferences {
    pub animation: AnimationPreferences,
    pub scramble: ScramblePreferences,
    pub solver: SolverPreferences,
    /// Default log filter, used when `RUST_LOG` is not set.
    pub log_level: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnimationPreferences {
    /// Whether to animate turns by default.
    pub animate: bool,
    /// Seconds per quarter turn.
    pub twist_duration: f32,
    /// Simulated ticks per second.
    pub tick_rate: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScramblePreferences {
    pub length: usize,
    pub seed: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SolverPreferences {
    /// Number of ticks after which to give up.
    pub max_ticks: usize,
}

impl Default for Preferences {
    fn default() -> Self {
        DEFAULT_PREFS.clone()
    }
}

impl Preferences {
    /// Loads preferences from the defaults, then `user_file` if there is one,
    /// then environment variables. If loading fails, the default preferences
    /// are returned.
    pub fn load(user_file: Option<&Path>) -> Self {
        let default_config_source = config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT);
        let mut config = config::Config::builder().add_source(default_config_source);

        if let Some(path) = user_file {
            config = config.add_source(config::File::from(path).format(PREFS_FILE_FORMAT));
        }

        config = config.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        config
            .build()
            .and_then(|c| c.try_deserialize())
            .unwrap_or_else(|e| {
                log::warn!("Error loading preferences: {e}");
                Self::default()
            })
    }

    /// Serializes the preferences as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_norway::to_string(self).context("error serializing preferences")
    }

    /// Writes the preferences to a YAML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_yaml()?)
            .wrap_err_with(|| format!("error writing preferences to {}", path.display()))
    }
}
