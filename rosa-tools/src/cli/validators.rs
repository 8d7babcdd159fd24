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

//! CLI input validators
//!
//! Identifiers are checked before anything is sent to the management API.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::RosaResult;
use crate::core::ToolsError;

/// Machine pool that every cluster has and that cannot be deleted
pub const DEFAULT_MACHINE_POOL: &str = "Default";

static MACHINE_POOL_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]([-a-z0-9]*[a-z0-9])?$").expect("machine pool id pattern is valid"));

static CLUSTER_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w-]+$").expect("cluster key pattern is valid"));

/// Whether `id` is a well-formed machine pool identifier
pub fn is_valid_machine_pool_id(id: &str) -> bool {
    MACHINE_POOL_ID_RE.is_match(id)
}

/// Validate a machine pool identifier for deletion
///
/// The reserved `Default` pool is rejected with its own error before the
/// format check.
pub fn validate_machine_pool_id(id: &str, cluster_key: &str) -> RosaResult<()> {
    if id == DEFAULT_MACHINE_POOL {
        return Err(ToolsError::protected_machine_pool(id, cluster_key).into());
    }
    if !is_valid_machine_pool_id(id) {
        return Err(ToolsError::invalid_identifier("machine pool", id).into());
    }
    Ok(())
}

/// Validate a cluster name, identifier or external identifier
pub fn validate_cluster_key(key: &str) -> RosaResult<()> {
    if CLUSTER_KEY_RE.is_match(key) {
        Ok(())
    } else {
        Err(ToolsError::invalid_cluster_key(key).into())
    }
}
