use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use dirs::config_dir;
use serde::Deserialize;
use tracing::debug;

use crate::{bar::BarStyle, report::DEFAULT_BAR_LENGTH, size_source::du::DEFAULT_PROGRAM};

#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Program invoked as `<du_command> -d 1 <target>`.
    pub du_command: String,
    pub bar_length: i64,
    pub human_readable: bool,
    pub of_total: bool,
    pub bar: BarStyle,
}

/// `<config dir>/duim/config.yaml`, if the platform has a config dir.
pub fn default_config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("duim").join("config.yaml"))
}

impl Settings {
    /// Defaults, then the config file, then `DUIM_*` environment variables.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = BarStyle::default();
        let settings = Config::builder()
            .set_default("du_command", DEFAULT_PROGRAM)?
            .set_default("bar_length", DEFAULT_BAR_LENGTH)?
            .set_default("human_readable", true)?
            .set_default("of_total", false)?
            .set_default("bar.filled", defaults.filled.to_string())?
            .set_default("bar.empty", defaults.empty.to_string())?;

        let settings = match path {
            Some(path) => settings.add_source(File::from(path).required(true)),
            None => match default_config_file() {
                Some(file) => settings.add_source(File::from(file).required(false)),
                None => settings,
            },
        };

        let settings = settings
            .add_source(
                Environment::with_prefix("DUIM")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = settings.try_deserialize::<Settings>()?;
        debug!(?settings, "loaded settings");
        Ok(settings)
    }
}
