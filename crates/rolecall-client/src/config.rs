//! Client configuration: base URL, resource path, request timeout.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

/// Which directory collection the client talks to.
///
/// The backend exposes the same contract under `/api/companies` and
/// `/api/roles`; deployments pick one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    /// `/api/companies`
    #[default]
    Companies,
    /// `/api/roles`
    Roles,
}

impl Resource {
    /// The path segment under `/api/`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Companies => "companies",
            Resource::Roles => "roles",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "companies" => Ok(Resource::Companies),
            "roles" => Ok(Resource::Roles),
            other => Err(ConfigError::UnknownResource {
                resource: other.to_string(),
            }),
        }
    }
}

/// Configuration for [`crate::DirectoryClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend (e.g., `http://127.0.0.1:8000`).
    pub base_url: Url,
    /// Collection served by this deployment.
    pub resource: Resource,
    /// Per-request timeout in seconds (default: 10).
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Parse and validate a base URL, using default resource and timeout.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            source,
        })?;
        Ok(ClientConfig {
            base_url,
            resource: Resource::default(),
            timeout_secs: 10,
        })
    }

    /// Select the collection.
    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resource = resource;
        self
    }

    /// Override the request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// The collection endpoint, without a trailing slash.
    pub fn collection_url(&self) -> String {
        format!(
            "{}/api/{}",
            self.base_url.as_str().trim_end_matches('/'),
            self.resource
        )
    }

    /// The health-probe endpoint.
    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url.as_str().trim_end_matches('/'))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The base URL did not parse.
    #[error("invalid base URL {base_url:?}: {source}")]
    InvalidBaseUrl {
        base_url: String,
        source: url::ParseError,
    },

    /// The resource name is not part of the contract.
    #[error("unknown resource {resource:?} (expected \"companies\" or \"roles\")")]
    UnknownResource { resource: String },
}
