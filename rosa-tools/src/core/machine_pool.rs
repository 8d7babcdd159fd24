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

//! Machine pool operations - Core business logic

use rosa_error::RosaResult;
use rosa_error::ToolsError;

use crate::ocm::types::Cluster;
use crate::ocm::types::MachinePool;
use crate::ocm::OcmApi;

/// Machine pool operations service
pub struct MachinePoolService;

impl MachinePoolService {
    /// Find a machine pool by exact identifier
    ///
    /// Identifiers are unique within a cluster, so the first match is returned.
    pub fn find_machine_pool<'a>(machine_pools: &'a [MachinePool], id: &str) -> Option<&'a MachinePool> {
        machine_pools.iter().find(|machine_pool| machine_pool.id == id)
    }

    /// Fetch the machine pools of a cluster and locate one of them
    ///
    /// # Arguments
    /// * `api` - Management API client
    /// * `cluster` - Resolved cluster
    /// * `cluster_key` - Key the operator used for the cluster, for messages
    /// * `id` - Machine pool identifier
    pub async fn get_machine_pool<A: OcmApi>(
        api: &A,
        cluster: &Cluster,
        cluster_key: &str,
        id: &str,
    ) -> RosaResult<MachinePool> {
        let machine_pools = api
            .list_machine_pools(&cluster.id)
            .await
            .map_err(|e| ToolsError::machine_pools_lookup_failed(cluster_key, e.to_string()))?;

        Self::find_machine_pool(&machine_pools, id)
            .cloned()
            .ok_or_else(|| ToolsError::machine_pool_not_found(id, cluster_key).into())
    }

    /// Delete a machine pool from a cluster
    pub async fn delete_machine_pool<A: OcmApi>(
        api: &A,
        cluster: &Cluster,
        cluster_key: &str,
        machine_pool: &MachinePool,
    ) -> RosaResult<()> {
        api.delete_machine_pool(&cluster.id, &machine_pool.id)
            .await
            .map_err(|e| ToolsError::machine_pool_delete_failed(&machine_pool.id, cluster_key, e.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocm::types::ClusterState;
    use crate::test_support::cluster;
    use crate::test_support::machine_pool;
    use crate::test_support::StubOcmApi;

    #[test]
    fn test_find_machine_pool() {
        let pools = vec![machine_pool("Default"), machine_pool("mp-1"), machine_pool("mp-2")];

        assert_eq!(MachinePoolService::find_machine_pool(&pools, "mp-2").map(|p| p.id.as_str()), Some("mp-2"));
        assert!(MachinePoolService::find_machine_pool(&pools, "mp-3").is_none());
        assert!(MachinePoolService::find_machine_pool(&pools, "MP-1").is_none());
        assert!(MachinePoolService::find_machine_pool(&[], "mp-1").is_none());
    }

    #[test]
    fn test_find_machine_pool_every_position() {
        let ids: Vec<String> = (0..16).map(|i| format!("mp-{i}")).collect();
        let pools: Vec<MachinePool> = ids.iter().map(|id| machine_pool(id)).collect();

        for id in &ids {
            let found = MachinePoolService::find_machine_pool(&pools, id).unwrap();
            assert_eq!(&found.id, id);
        }
    }

    #[tokio::test]
    async fn test_get_machine_pool() {
        let c = cluster("c-1", "mycluster", ClusterState::Ready);
        let api = StubOcmApi::new()
            .with_cluster(c.clone())
            .with_machine_pool(machine_pool("mp-1"));

        let found = MachinePoolService::get_machine_pool(&api, &c, "mycluster", "mp-1").await.unwrap();
        assert_eq!(found.id, "mp-1");

        let err = MachinePoolService::get_machine_pool(&api, &c, "mycluster", "mp-9")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to get machine pool 'mp-9' for cluster 'mycluster'");
    }

    #[tokio::test]
    async fn test_get_machine_pool_listing_failure() {
        let c = cluster("c-1", "mycluster", ClusterState::Ready);
        let api = StubOcmApi::new().with_cluster(c.clone()).failing_machine_pools();

        let err = MachinePoolService::get_machine_pool(&api, &c, "mycluster", "mp-1")
            .await
            .unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Failed to get machine pools for cluster 'mycluster': "));
    }

    #[tokio::test]
    async fn test_delete_machine_pool_failure() {
        let c = cluster("c-1", "mycluster", ClusterState::Ready);
        let api = StubOcmApi::new()
            .with_cluster(c.clone())
            .with_machine_pool(machine_pool("mp-1"))
            .failing_delete();

        let err = MachinePoolService::delete_machine_pool(&api, &c, "mycluster", &machine_pool("mp-1"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), rosa_error::ErrorKind::ActionFailure);
        assert!(err
            .to_string()
            .starts_with("Failed to delete machine pool 'mp-1' on cluster 'mycluster': "));
        assert_eq!(api.delete_calls(), 1);
    }
}
