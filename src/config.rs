//! Vehicle profiles loaded from a TOML file.
//!
//! ```toml
//! [[vehicles]]
//! name = "Hatchback"
//! price = 24000
//! loanTermMonths = 72
//!
//! [[vehicles]]
//! name = "SUV"
//! price = 41000
//! ```
//!
//! Keys match the HTTP payload and any key left out keeps its default.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::api::{ProfileError, VehiclePayload, build_profiles};
use crate::core::VehicleProfile;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Invalid(#[from] ProfileError),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProfileFile {
    vehicles: Vec<VehiclePayload>,
}

pub fn load_profiles(path: &Path) -> Result<Vec<VehicleProfile>, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_profiles(&raw).map_err(|err| match err {
        ConfigError::Parse { source, .. } => ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

pub fn parse_profiles(raw: &str) -> Result<Vec<VehicleProfile>, ConfigError> {
    let file: ProfileFile = toml::from_str(raw).map_err(|source| ConfigError::Parse {
        path: PathBuf::from("<inline>"),
        source,
    })?;
    Ok(build_profiles(file.vehicles)?)
}
