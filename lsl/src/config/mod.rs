use crate::error::{ConfigErrorKind, LslError, Result};
use crate::formatter::time::ZoneSetting;
use crate::utils::logging::parse_level;
use crate::utils::symlink::DEFAULT_MAX_LINK_TARGET;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_PATH_ENV: &str = "LSL_CONFIG";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub time_zone: ZoneSetting,
    #[serde(default = "default_max_link_target")]
    pub max_link_target: usize,
    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_max_link_target() -> usize {
    DEFAULT_MAX_LINK_TARGET
}

impl Default for Config {
    fn default() -> Self {
        Config {
            time_zone: ZoneSetting::default(),
            max_link_target: default_max_link_target(),
            log_level: None,
        }
    }
}

impl Config {
    pub fn get_config_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("lsl").join("config.toml")
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|err| {
            LslError::Config(ConfigErrorKind::InvalidPath(format!(
                "{}: {}",
                path.display(),
                err
            )))
        })?;
        Self::parse(&contents)
    }

    /// Resolves the config file to read: an explicit path first, then
    /// `LSL_CONFIG`, then the default location. Only an explicitly named
    /// file has to exist; the tool never writes one.
    pub fn load_from(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Some(path) = env::var_os(CONFIG_PATH_ENV) {
            return Self::load(Path::new(&path));
        }

        let default_path = Self::get_config_path();
        if default_path.is_file() {
            Self::load(&default_path)
        } else {
            Ok(Config::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_link_target == 0 {
            return Err(LslError::Config(ConfigErrorKind::InvalidValue(
                "max_link_target".to_string(),
                "must be greater than zero".to_string(),
            )));
        }

        if let Some(level) = &self.log_level {
            if parse_level(level).is_none() {
                return Err(LslError::Config(ConfigErrorKind::InvalidValue(
                    "log_level".to_string(),
                    format!("unknown level '{}'", level),
                )));
            }
        }

        Ok(())
    }
}
