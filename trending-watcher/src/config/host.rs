//! The repository hosting the trending issues.

use super::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Environment variable carrying `owner/repo` in GitHub Actions.
pub const REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";

/// Repository whose issues are read and written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRepository {
    /// Repository owner.
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl HostRepository {
    /// Uses `explicit` when given, otherwise reads [`REPOSITORY_ENV`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRepository`] if neither is set, or
    /// [`ConfigError::InvalidRepository`] if the value is malformed.
    pub fn resolve(explicit: Option<&str>) -> Result<Self, ConfigError> {
        match explicit {
            Some(value) => value.parse(),
            None => std::env::var(REPOSITORY_ENV)
                .map_err(|_| ConfigError::MissingRepository)?
                .parse(),
        }
    }
}

impl FromStr for HostRepository {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidRepository {
            value: value.to_string(),
        };
        let (owner, name) = value.trim().split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }
        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for HostRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
