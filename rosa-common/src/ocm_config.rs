// Copyright 2023 The ROSA Rust Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Client configuration for the cluster management API
//!
//! The configuration is read from the file named by `$OCM_CONFIG`, falling back to
//! `<config_dir>/ocm/ocm.json`. Variables prefixed with `OCM_` override file values,
//! e.g. `OCM_ACCESS_TOKEN` or `OCM_URL`.

use std::path::PathBuf;

use rosa_error::RosaResult;
use serde::Deserialize;
use serde::Serialize;

use crate::utils::parse_config_file::parse_config_file;

/// Environment variable naming an explicit configuration file
pub const OCM_CONFIG_ENV: &str = "OCM_CONFIG";

/// Prefix of the variables that override individual fields
pub const OCM_ENV_PREFIX: &str = "OCM";

/// Default API gateway
pub const DEFAULT_URL: &str = "https://api.openshift.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcmConfig {
    /// Base URL of the API gateway
    pub url: String,

    /// Bearer token sent with every request
    pub access_token: String,

    /// Skip TLS certificate verification
    pub insecure: bool,
}

impl Default for OcmConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            access_token: String::new(),
            insecure: false,
        }
    }
}

impl OcmConfig {
    /// Load the configuration from its default location, applying environment overrides
    pub fn load() -> RosaResult<Self> {
        let path = Self::config_path(std::env::var(OCM_CONFIG_ENV).ok());
        tracing::debug!("Loading OCM configuration from '{}'", path.display());
        parse_config_file(&path, Some(OCM_ENV_PREFIX))
    }

    /// Load the configuration from an explicit file, without environment overrides
    pub fn load_from(path: impl Into<PathBuf>) -> RosaResult<Self> {
        parse_config_file(&path.into(), None)
    }

    /// Resolve the configuration file location
    pub fn config_path(explicit: Option<String>) -> PathBuf {
        match explicit.filter(|value| !value.trim().is_empty()) {
            Some(value) => PathBuf::from(value),
            None => dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("ocm")
                .join("ocm.json"),
        }
    }

    /// Whether a bearer token is available
    #[inline]
    pub fn is_logged_in(&self) -> bool {
        !self.access_token.trim().is_empty()
    }
}
