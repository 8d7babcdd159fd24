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

//! Cluster lookup - Core business logic

use rosa_error::RosaResult;
use rosa_error::ToolsError;

use crate::ocm::types::Cluster;
use crate::ocm::OcmApi;

/// Cluster operations service
pub struct ClusterService;

impl ClusterService {
    /// Search expression matching a cluster by identifier, name or external identifier
    ///
    /// The key must have passed [`crate::cli::validators::validate_cluster_key`], which
    /// rules out quotes and whitespace.
    pub fn search_expression(key: &str) -> String {
        format!("id = '{key}' or name = '{key}' or external_id = '{key}'")
    }

    /// Resolve a cluster key to exactly one cluster
    ///
    /// # Errors
    ///
    /// Fails with a lookup error when the search call fails, when nothing matches
    /// or when the key is ambiguous.
    pub async fn get_cluster<A: OcmApi>(api: &A, key: &str) -> RosaResult<Cluster> {
        let page = api
            .search_clusters(&Self::search_expression(key), 1)
            .await
            .map_err(|e| ToolsError::cluster_lookup_failed(key, e.to_string()))?;

        let total = usize::try_from(page.total).unwrap_or(0).max(page.items.len());
        match total {
            0 => Err(Self::no_such_cluster(key)),
            1 => page.items.into_iter().next().ok_or_else(|| Self::no_such_cluster(key)),
            n => Err(ToolsError::cluster_lookup_failed(
                key,
                format!("There are {n} clusters with identifier or name '{key}'"),
            )
            .into()),
        }
    }

    /// Fail unless the cluster is ready to serve requests
    pub fn ensure_ready(cluster: &Cluster, key: &str) -> RosaResult<()> {
        if cluster.is_ready() {
            Ok(())
        } else {
            Err(ToolsError::cluster_not_ready(key).into())
        }
    }

    fn no_such_cluster(key: &str) -> rosa_error::RosaError {
        ToolsError::cluster_lookup_failed(key, format!("There is no cluster with identifier or name '{key}'")).into()
    }
}
