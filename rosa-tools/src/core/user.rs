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

//! Cluster user operations - Core business logic

use std::collections::BTreeMap;

use rosa_error::RosaResult;
use rosa_error::ToolsError;
use serde::Serialize;

use crate::ocm::types::Cluster;
use crate::ocm::types::User;
use crate::ocm::OcmApi;

/// Group granting full administrative access
pub const CLUSTER_ADMINS_GROUP: &str = "cluster-admins";

/// Group granting dedicated administrator access
pub const DEDICATED_ADMINS_GROUP: &str = "dedicated-admins";

/// Built-in account that is always a member of `cluster-admins`
pub const CLUSTER_ADMIN_USER: &str = "cluster-admin";

/// A user and the administrative groups it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserGroups {
    pub id: String,
    pub groups: Vec<String>,
}

/// Merge the members of both administrative groups into one row per user
///
/// The built-in `cluster-admin` account is dropped from `cluster_admins`
/// before merging. Groups are listed in fetch order and rows are ordered by
/// user id.
pub fn merge_user_groups(cluster_admins: &[User], dedicated_admins: &[User]) -> Vec<UserGroups> {
    let mut merged: BTreeMap<&str, Vec<String>> = BTreeMap::new();

    let members = cluster_admins
        .iter()
        .filter(|user| user.id != CLUSTER_ADMIN_USER)
        .map(|user| (user, CLUSTER_ADMINS_GROUP))
        .chain(dedicated_admins.iter().map(|user| (user, DEDICATED_ADMINS_GROUP)));

    for (user, group) in members {
        let groups = merged.entry(user.id.as_str()).or_default();
        if !groups.iter().any(|g| g == group) {
            groups.push(group.to_string());
        }
    }

    merged
        .into_iter()
        .map(|(id, groups)| UserGroups {
            id: id.to_string(),
            groups,
        })
        .collect()
}

/// Cluster user operations service
pub struct UserService;

impl UserService {
    /// List the administrators of a cluster
    ///
    /// # Errors
    ///
    /// Fails when either group cannot be fetched, or with
    /// [`ToolsError::NoUsersConfigured`] when nobody besides the built-in
    /// account is configured.
    pub async fn list_cluster_users<A: OcmApi>(
        api: &A,
        cluster: &Cluster,
        cluster_key: &str,
    ) -> RosaResult<Vec<UserGroups>> {
        let mut cluster_admins = Self::group_users(api, cluster, cluster_key, CLUSTER_ADMINS_GROUP).await?;
        cluster_admins.retain(|user| user.id != CLUSTER_ADMIN_USER);

        let dedicated_admins = Self::group_users(api, cluster, cluster_key, DEDICATED_ADMINS_GROUP).await?;

        if cluster_admins.is_empty() && dedicated_admins.is_empty() {
            return Err(ToolsError::no_users_configured(cluster_key).into());
        }

        Ok(merge_user_groups(&cluster_admins, &dedicated_admins))
    }

    async fn group_users<A: OcmApi>(api: &A, cluster: &Cluster, cluster_key: &str, group: &str) -> RosaResult<Vec<User>> {
        api.list_group_users(&cluster.id, group)
            .await
            .map_err(|e| ToolsError::group_users_lookup_failed(group, cluster_key, e.to_string()).into())
    }
}
