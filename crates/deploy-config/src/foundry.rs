//! Reading the compiler settings out of a Foundry project file.
//!
//! The file is owned by Foundry, so only the keys needed here are modelled
//! and everything else in it is ignored.

use {
    serde::Deserialize,
    std::{
        collections::HashMap,
        path::{Path, PathBuf},
    },
    thiserror::Error,
};

pub const DEFAULT_PATH: &str = "foundry.toml";
pub const DEFAULT_PROFILE: &str = "default";

/// Profiles are kept as raw tables until one is selected. A selected profile
/// only holds its overrides, the remaining keys come from `default`.
#[derive(Clone, Debug, Deserialize)]
pub struct FoundryConfig {
    #[serde(default)]
    profile: HashMap<String, toml::Table>,
}

/// The subset of a `[profile.<name>]` table the compiler settings are taken
/// from.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FoundryProfile {
    pub solc_version: String,
    pub via_ir: bool,
    pub optimizer_runs: u64,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error while reading {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    // Not printing the detailed error by default because the file could
    // contain RPC URLs with embedded API keys.
    #[error("failed to parse TOML config at {path:?}{}", detail_hint(.detail))]
    Parse {
        path: PathBuf,
        detail: Option<String>,
    },
    #[error("profile {0:?} not found in Foundry config")]
    MissingProfile(String),
    #[error("profile {name:?} in {path:?} has no valid compiler settings: {reason}")]
    InvalidProfile {
        path: PathBuf,
        name: String,
        reason: String,
    },
}

fn detail_hint(detail: &Option<String>) -> String {
    match detail {
        Some(detail) => format!(": {detail}"),
        None => ". Set TOML_TRACE_ERROR=1 to print parsing error but this may leak secrets."
            .to_string(),
    }
}

impl FoundryConfig {
    /// Reads and parses the Foundry config at `path`.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let data = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml(&data).map_err(|err| parse_error(path, err))
    }

    pub fn from_toml(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(data)
    }

    /// Returns the compiler settings of profile `name` layered over the
    /// `default` profile, `None` if the file has no such profile.
    pub fn profile(&self, name: &str) -> Option<Result<FoundryProfile, toml::de::Error>> {
        let selected = self.profile.get(name)?;
        let mut table = self.profile.get(DEFAULT_PROFILE).cloned().unwrap_or_default();
        table.extend(selected.clone());
        Some(toml::Value::Table(table).try_into::<FoundryProfile>())
    }
}

fn parse_error(path: &Path, err: toml::de::Error) -> LoadError {
    LoadError::Parse {
        path: path.to_owned(),
        detail: std::env::var("TOML_TRACE_ERROR")
            .is_ok_and(|v| v == "1")
            .then(|| format!("{err:#?}")),
    }
}

/// Loads the profile `name` from the Foundry config at `path`.
pub fn load(path: &Path, name: &str) -> Result<FoundryProfile, LoadError> {
    let profile = FoundryConfig::from_path(path)?
        .profile(name)
        .ok_or_else(|| LoadError::MissingProfile(name.to_owned()))?
        .map_err(|err| LoadError::InvalidProfile {
            path: path.to_owned(),
            name: name.to_owned(),
            reason: err.message().to_owned(),
        })?;
    tracing::debug!(?path, name, ?profile, "loaded foundry profile");
    Ok(profile)
}
