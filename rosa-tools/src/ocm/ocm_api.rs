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

use rosa_error::RosaResult;

use crate::ocm::types::ClusterList;
use crate::ocm::types::MachinePool;
use crate::ocm::types::User;

/// Operations of the cluster management API used by the commands.
///
/// Every call is a single request; failures are returned as-is, without retries.
#[allow(dead_code)]
#[trait_variant::make(OcmApi: Send)]
pub trait LocalOcmApi: Sync {
    /// Search clusters with a search expression, returning at most `size` items.
    ///
    /// The returned page carries the total number of matches.
    async fn search_clusters(&self, search: &str, size: i32) -> RosaResult<ClusterList>;

    /// List every machine pool of a cluster.
    async fn list_machine_pools(&self, cluster_id: &str) -> RosaResult<Vec<MachinePool>>;

    /// Delete a machine pool from a cluster.
    async fn delete_machine_pool(&self, cluster_id: &str, machine_pool_id: &str) -> RosaResult<()>;

    /// List every user of a cluster group, e.g. `dedicated-admins`.
    async fn list_group_users(&self, cluster_id: &str, group_id: &str) -> RosaResult<Vec<User>>;
}
