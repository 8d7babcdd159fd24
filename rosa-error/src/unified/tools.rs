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

//! Tools and admin command specific errors
//!
//! The `Display` text of every variant is the message shown to the operator.

use thiserror::Error;

use super::ErrorKind;

/// Tools-specific errors for admin commands
#[derive(Debug, Error)]
pub enum ToolsError {
    // ============================================================================
    // Validation Errors
    // ============================================================================
    /// Identifier does not match the accepted format
    #[error("Expected a valid identifier for the {resource}")]
    InvalidIdentifier { resource: String, value: String },

    /// Cluster key contains characters that cannot be used in a search
    #[error(
        "Cluster name, identifier or external identifier '{key}' isn't valid: it must contain only letters, \
         digits, dashes and underscores"
    )]
    InvalidClusterKey { key: String },

    /// The reserved default machine pool
    #[error("Machine pool '{machine_pool}' cannot be deleted from cluster '{cluster}'")]
    ProtectedMachinePool { machine_pool: String, cluster: String },

    // ============================================================================
    // Lookup Errors
    // ============================================================================
    /// Cluster key did not resolve to exactly one cluster
    #[error("Failed to get cluster '{cluster}': {reason}")]
    ClusterLookupFailed { cluster: String, reason: String },

    /// Listing the machine pools of a cluster failed
    #[error("Failed to get machine pools for cluster '{cluster}': {reason}")]
    MachinePoolsLookupFailed { cluster: String, reason: String },

    /// Machine pool not present on the cluster
    #[error("Failed to get machine pool '{machine_pool}' for cluster '{cluster}'")]
    MachinePoolNotFound { machine_pool: String, cluster: String },

    /// Listing the users of a group failed
    #[error("Failed to get {group} for cluster '{cluster}': {reason}")]
    GroupUsersLookupFailed {
        group: String,
        cluster: String,
        reason: String,
    },

    // ============================================================================
    // State Errors
    // ============================================================================
    #[error("Cluster '{cluster}' is not yet ready")]
    ClusterNotReady { cluster: String },

    // ============================================================================
    // Action Errors
    // ============================================================================
    #[error("Failed to delete machine pool '{machine_pool}' on cluster '{cluster}': {reason}")]
    MachinePoolDeleteFailed {
        machine_pool: String,
        cluster: String,
        reason: String,
    },

    // ============================================================================
    // Empty Results
    // ============================================================================
    #[error("There are no users configured for cluster '{cluster}'")]
    NoUsersConfigured { cluster: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Not logged in, run the 'rosa login' command")]
    NotLoggedIn,
}

impl ToolsError {
    // ============================================================================
    // Convenience Constructors
    // ============================================================================

    /// Create an invalid identifier error
    #[inline]
    pub fn invalid_identifier(resource: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            resource: resource.into(),
            value: value.into(),
        }
    }

    /// Create an invalid cluster key error
    #[inline]
    pub fn invalid_cluster_key(key: impl Into<String>) -> Self {
        Self::InvalidClusterKey { key: key.into() }
    }

    /// Create a protected machine pool error
    #[inline]
    pub fn protected_machine_pool(machine_pool: impl Into<String>, cluster: impl Into<String>) -> Self {
        Self::ProtectedMachinePool {
            machine_pool: machine_pool.into(),
            cluster: cluster.into(),
        }
    }

    /// Create a cluster lookup error
    #[inline]
    pub fn cluster_lookup_failed(cluster: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ClusterLookupFailed {
            cluster: cluster.into(),
            reason: reason.into(),
        }
    }

    /// Create a machine pool listing error
    #[inline]
    pub fn machine_pools_lookup_failed(cluster: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MachinePoolsLookupFailed {
            cluster: cluster.into(),
            reason: reason.into(),
        }
    }

    /// Create a machine pool not found error
    #[inline]
    pub fn machine_pool_not_found(machine_pool: impl Into<String>, cluster: impl Into<String>) -> Self {
        Self::MachinePoolNotFound {
            machine_pool: machine_pool.into(),
            cluster: cluster.into(),
        }
    }

    /// Create a group users listing error
    #[inline]
    pub fn group_users_lookup_failed(
        group: impl Into<String>,
        cluster: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::GroupUsersLookupFailed {
            group: group.into(),
            cluster: cluster.into(),
            reason: reason.into(),
        }
    }

    /// Create a cluster not ready error
    #[inline]
    pub fn cluster_not_ready(cluster: impl Into<String>) -> Self {
        Self::ClusterNotReady {
            cluster: cluster.into(),
        }
    }

    /// Create a machine pool deletion error
    #[inline]
    pub fn machine_pool_delete_failed(
        machine_pool: impl Into<String>,
        cluster: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MachinePoolDeleteFailed {
            machine_pool: machine_pool.into(),
            cluster: cluster.into(),
            reason: reason.into(),
        }
    }

    /// Create a no users configured error
    #[inline]
    pub fn no_users_configured(cluster: impl Into<String>) -> Self {
        Self::NoUsersConfigured {
            cluster: cluster.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ToolsError::InvalidIdentifier { .. }
            | ToolsError::InvalidClusterKey { .. }
            | ToolsError::ProtectedMachinePool { .. } => ErrorKind::InvalidInput,
            ToolsError::ClusterLookupFailed { .. }
            | ToolsError::MachinePoolsLookupFailed { .. }
            | ToolsError::MachinePoolNotFound { .. }
            | ToolsError::GroupUsersLookupFailed { .. } => ErrorKind::LookupFailure,
            ToolsError::ClusterNotReady { .. } => ErrorKind::StatePrecondition,
            ToolsError::MachinePoolDeleteFailed { .. } => ErrorKind::ActionFailure,
            ToolsError::NoUsersConfigured { .. } => ErrorKind::EmptyResult,
            ToolsError::NotLoggedIn => ErrorKind::Configuration,
        }
    }
}
