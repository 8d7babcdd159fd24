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

//! Errors returned by the cluster management API

use thiserror::Error;

/// Error response sent by the management API
///
/// Fields the server did not send are left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error(
    "status is {status}, identifier is '{id}', code is '{code}' and operation identifier is '{operation_id}': \
     {reason}"
)]
pub struct ApiError {
    pub status: u16,
    pub id: String,
    pub code: String,
    pub reason: String,
    pub operation_id: String,
}

impl ApiError {
    /// Create an error that only carries a status and a reason
    #[inline]
    pub fn new(status: u16, reason: impl Into<String>) -> Self {
        Self {
            status,
            id: status.to_string(),
            reason: reason.into(),
            ..Default::default()
        }
    }

    /// Whether the server reported the resource as missing
    #[inline]
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}
