use anyhow::{bail, Result};
use serde::Deserialize;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::utils::{abbreviated_git_url_to_full_remote, home};

pub const APP_CONFIG_FILE_NAME: &str = ".frontinit.toml";
pub const REACT_TS_REPOSITORY: &str = "https://github.com/aryan1306/react-ts.git";

/// User defaults read from `$HOME/.frontinit.toml` or `--config`
#[derive(Deserialize, Serialize, Debug, PartialEq, Default, Clone)]
pub struct AppConfig {
    pub templates: Option<TemplatesConfig>,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Default, Clone)]
pub struct TemplatesConfig {
    /// Repository cloned by the react-ts template, shorthands like `gh:` allowed
    pub react_ts: Option<String>,
}

impl TryFrom<String> for AppConfig {
    type Error = toml::de::Error;

    fn try_from(contents: String) -> Result<Self, Self::Error> {
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

impl AppConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let config = match fs::read_to_string(path) {
            Ok(contents) => Self::try_from(contents)?,
            Err(e) => match e.kind() {
                ErrorKind::NotFound => Self::default(),
                _ => anyhow::bail!(e),
            },
        };
        Ok(config)
    }

    pub fn react_ts_repository(&self) -> String {
        self.templates
            .as_ref()
            .and_then(|t| t.react_ts.as_deref())
            .map(|repo| abbreviated_git_url_to_full_remote(repo).unwrap_or_else(|| repo.to_owned()))
            .unwrap_or_else(|| REACT_TS_REPOSITORY.to_owned())
    }
}

/// An explicit file must exist; otherwise the home one is used if present.
pub fn locate_config_file(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.exists() {
            bail!("Cannot find the config file {}", path.display());
        }
        return Ok(Some(path.to_path_buf()));
    }

    let Ok(home) = home() else {
        return Ok(None);
    };
    let config_file = home.join(APP_CONFIG_FILE_NAME);
    Ok(config_file.exists().then_some(config_file))
}

/// Read the user's defaults, falling back to built-ins
pub fn load(explicit: Option<&Path>) -> Result<AppConfig> {
    match locate_config_file(explicit)? {
        Some(path) => AppConfig::from_path(&path),
        None => Ok(AppConfig::default()),
    }
}
