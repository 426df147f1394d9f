use std::{
    fs, io,
    path::{Path, PathBuf},
};

use derive_more::{Display, Error};
use serde::Deserialize;

/// Where the rendered report goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Stdout,
}

/// What to do with a line the parser rejects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Skip the line, log a warning, and report the skipped count.
    #[default]
    Skip,
    /// Abort the whole run on the first malformed line.
    Fail,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub log_file: PathBuf,
    /// How many addresses the top-IP ranking keeps. Deserialization rejects
    /// negative values, so queries only ever see a valid count.
    pub top_ip_count: usize,
    pub user_agent_filter: String,
    #[serde(default)]
    pub output: OutputTarget,
    #[serde(default)]
    pub on_malformed: MalformedPolicy,
}

#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display("cannot read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[display("invalid configuration in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.into(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.into(),
            source,
        })
    }
}
