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

//! Wire types of the cluster management API
//!
//! Only the fields read by the commands are modelled; unknown fields are ignored.

use rosa_error::ApiError;
use serde::Deserialize;
use serde::Serialize;

/// Lifecycle state of a cluster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterState {
    Error,
    Hibernating,
    Installing,
    Pending,
    PoweringDown,
    Ready,
    Resuming,
    Uninstalling,
    Validating,
    Waiting,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cluster {
    pub kind: String,
    pub id: String,
    pub href: String,
    pub name: String,
    pub external_id: String,
    pub state: ClusterState,
}

impl Cluster {
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.state == ClusterState::Ready
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachinePool {
    pub kind: String,
    pub id: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub kind: String,
    pub id: String,
    pub href: String,
}

/// One page of a collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List<T> {
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub page: i32,
    #[serde(default)]
    pub size: i32,
    #[serde(default)]
    pub total: i32,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> List<T> {
    /// Build a single page holding every item
    pub fn from_items(kind: impl Into<String>, items: Vec<T>) -> Self {
        let count = i32::try_from(items.len()).unwrap_or(i32::MAX);
        Self {
            kind: kind.into(),
            page: 1,
            size: count,
            total: count,
            items,
        }
    }
}

pub type ClusterList = List<Cluster>;
pub type MachinePoolList = List<MachinePool>;
pub type UserList = List<User>;

/// Body of an error response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub kind: String,
    pub id: String,
    pub href: String,
    pub code: String,
    pub reason: String,
    pub operation_id: String,
}

impl ErrorBody {
    pub fn into_api_error(self, status: u16) -> ApiError {
        ApiError {
            status,
            id: self.id,
            code: self.code,
            reason: self.reason,
            operation_id: self.operation_id,
        }
    }
}
