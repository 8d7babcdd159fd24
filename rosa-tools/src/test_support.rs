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

//! In-memory management API and scripted prompt for tests

use std::collections::HashSet;
use std::io;
use std::io::Write;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use rosa_error::ApiError;
use rosa_error::RosaResult;

use crate::core::runtime::RuntimeContext;
use crate::core::user::CLUSTER_ADMINS_GROUP;
use crate::core::user::DEDICATED_ADMINS_GROUP;
use crate::ocm::types::Cluster;
use crate::ocm::types::ClusterList;
use crate::ocm::types::ClusterState;
use crate::ocm::types::MachinePool;
use crate::ocm::types::User;
use crate::ocm::OcmApi;
use crate::ui::output::Reporter;
use crate::ui::prompt::Prompt;

pub(crate) fn cluster(id: &str, name: &str, state: ClusterState) -> Cluster {
    Cluster {
        kind: "Cluster".to_string(),
        id: id.to_string(),
        href: format!("/api/clusters_mgmt/v1/clusters/{id}"),
        name: name.to_string(),
        external_id: format!("ext-{id}"),
        state,
    }
}

pub(crate) fn machine_pool(id: &str) -> MachinePool {
    MachinePool {
        kind: "MachinePool".to_string(),
        id: id.to_string(),
        ..Default::default()
    }
}

pub(crate) fn user(id: &str) -> User {
    User {
        kind: "User".to_string(),
        id: id.to_string(),
        ..Default::default()
    }
}

fn server_error() -> rosa_error::RosaError {
    ApiError::new(500, "Internal server error").into()
}

/// Management API backed by fixed data, counting every call
#[derive(Default)]
pub(crate) struct StubOcmApi {
    clusters: Vec<Cluster>,
    machine_pools: Vec<MachinePool>,
    cluster_admins: Vec<User>,
    dedicated_admins: Vec<User>,
    fail_search: bool,
    fail_machine_pools: bool,
    fail_delete: bool,
    failing_groups: HashSet<String>,
    search_calls: AtomicUsize,
    machine_pool_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    group_calls: AtomicUsize,
    deleted: Mutex<Vec<(String, String)>>,
}

impl StubOcmApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_cluster(mut self, cluster: Cluster) -> Self {
        self.clusters.push(cluster);
        self
    }

    pub(crate) fn with_machine_pool(mut self, machine_pool: MachinePool) -> Self {
        self.machine_pools.push(machine_pool);
        self
    }

    pub(crate) fn with_cluster_admins(mut self, ids: &[&str]) -> Self {
        self.cluster_admins = ids.iter().map(|id| user(id)).collect();
        self
    }

    pub(crate) fn with_dedicated_admins(mut self, ids: &[&str]) -> Self {
        self.dedicated_admins = ids.iter().map(|id| user(id)).collect();
        self
    }

    pub(crate) fn failing_search(mut self) -> Self {
        self.fail_search = true;
        self
    }

    pub(crate) fn failing_machine_pools(mut self) -> Self {
        self.fail_machine_pools = true;
        self
    }

    pub(crate) fn failing_delete(mut self) -> Self {
        self.fail_delete = true;
        self
    }

    pub(crate) fn failing_group(mut self, group: &str) -> Self {
        self.failing_groups.insert(group.to_string());
        self
    }

    pub(crate) fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn machine_pool_calls(&self) -> usize {
        self.machine_pool_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn group_calls(&self) -> usize {
        self.group_calls.load(Ordering::SeqCst)
    }

    /// Total number of remote calls of any kind
    pub(crate) fn total_calls(&self) -> usize {
        self.search_calls() + self.machine_pool_calls() + self.delete_calls() + self.group_calls()
    }

    /// `(cluster id, machine pool id)` pairs deleted so far
    pub(crate) fn deleted(&self) -> Vec<(String, String)> {
        self.deleted.lock().map(|d| d.clone()).unwrap_or_default()
    }
}

impl OcmApi for StubOcmApi {
    async fn search_clusters(&self, search: &str, size: i32) -> RosaResult<ClusterList> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_search {
            return Err(server_error());
        }

        let key = search.split('\'').nth(1).unwrap_or_default();
        let matches: Vec<Cluster> = self
            .clusters
            .iter()
            .filter(|c| c.id == key || c.name == key || c.external_id == key)
            .cloned()
            .collect();
        let total = matches.len() as i32;
        let mut page = ClusterList::from_items("ClusterList", matches);
        page.items.truncate(size.max(0) as usize);
        page.size = page.items.len() as i32;
        page.total = total;
        Ok(page)
    }

    async fn list_machine_pools(&self, _cluster_id: &str) -> RosaResult<Vec<MachinePool>> {
        self.machine_pool_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_machine_pools {
            return Err(server_error());
        }
        Ok(self.machine_pools.clone())
    }

    async fn delete_machine_pool(&self, cluster_id: &str, machine_pool_id: &str) -> RosaResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_delete {
            return Err(server_error());
        }
        if let Ok(mut deleted) = self.deleted.lock() {
            deleted.push((cluster_id.to_string(), machine_pool_id.to_string()));
        }
        Ok(())
    }

    async fn list_group_users(&self, _cluster_id: &str, group_id: &str) -> RosaResult<Vec<User>> {
        self.group_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_groups.contains(group_id) {
            return Err(server_error());
        }
        Ok(match group_id {
            CLUSTER_ADMINS_GROUP => self.cluster_admins.clone(),
            DEDICATED_ADMINS_GROUP => self.dedicated_admins.clone(),
            _ => Vec::new(),
        })
    }
}

/// Prompt with a fixed answer that counts how often it was asked
pub(crate) struct ScriptedPrompt {
    answer: bool,
    pub(crate) asked: Arc<AtomicUsize>,
}

impl ScriptedPrompt {
    pub(crate) fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&self, _message: &str) -> bool {
        self.asked.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

/// In-memory writer whose contents stay readable after it is boxed
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        self.0
            .lock()
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .unwrap_or_default()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.0.lock() {
            Ok(mut bytes) => {
                bytes.extend_from_slice(buf);
                Ok(buf.len())
            }
            Err(_) => Err(io::Error::other("buffer lock poisoned")),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Everything a test runtime wrote, uncolored
pub(crate) struct CapturedOutput {
    pub(crate) stdout: SharedBuffer,
    pub(crate) stderr: SharedBuffer,
}

/// Runtime over a stub API whose prompt always gives `answer`, capturing its output
pub(crate) fn captured_runtime(
    api: StubOcmApi,
    answer: bool,
) -> (RuntimeContext<StubOcmApi>, Arc<AtomicUsize>, CapturedOutput) {
    let prompt = ScriptedPrompt::answering(answer);
    let asked = prompt.asked.clone();
    let output = CapturedOutput {
        stdout: SharedBuffer::default(),
        stderr: SharedBuffer::default(),
    };
    let reporter = Reporter::with_writers(
        Box::new(output.stdout.clone()),
        Box::new(output.stderr.clone()),
        false,
    );
    (RuntimeContext::new(api, reporter, Box::new(prompt)), asked, output)
}

/// Runtime over a stub API whose prompt always gives `answer`
pub(crate) fn runtime(api: StubOcmApi, answer: bool) -> (RuntimeContext<StubOcmApi>, Arc<AtomicUsize>) {
    let (runtime, asked, _) = captured_runtime(api, answer);
    (runtime, asked)
}
