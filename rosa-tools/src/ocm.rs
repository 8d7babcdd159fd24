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

//! Cluster management API client
//!
//! [`OcmApi`] is the seam between commands and the remote service;
//! [`DefaultOcmClient`] implements it over HTTPS.

mod default_ocm_client;
mod ocm_api;
pub mod types;

pub use default_ocm_client::DefaultOcmClient;
pub use ocm_api::LocalOcmApi;
pub use ocm_api::OcmApi;
