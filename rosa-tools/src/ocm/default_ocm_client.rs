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

use reqwest::header::ACCEPT;
use reqwest::Client;
use reqwest::RequestBuilder;
use reqwest::Response;
use rosa_common::OcmConfig;
use rosa_error::ApiError;
use rosa_error::RosaError;
use rosa_error::RosaResult;
use rosa_error::ToolsError;
use serde::de::DeserializeOwned;
use url::Url;

use crate::ocm::types::ClusterList;
use crate::ocm::types::ErrorBody;
use crate::ocm::types::MachinePool;
use crate::ocm::types::MachinePoolList;
use crate::ocm::types::User;
use crate::ocm::types::UserList;
use crate::ocm::OcmApi;

const CLUSTERS_MGMT_PATH: [&str; 3] = ["api", "clusters_mgmt", "v1"];

/// Query requesting every item of a collection in a single page
const ALL_ITEMS: [(&str, &str); 2] = [("page", "1"), ("size", "-1")];

/// REST client for the cluster management API
#[derive(Debug, Clone)]
pub struct DefaultOcmClient {
    http: Client,
    base_url: Url,
    access_token: String,
}

impl DefaultOcmClient {
    /// Create a client from the loaded configuration
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - no access token is configured
    /// - the API URL cannot be parsed
    /// - the HTTP client cannot be initialised
    pub fn new(config: &OcmConfig) -> RosaResult<Self> {
        if !config.is_logged_in() {
            return Err(ToolsError::NotLoggedIn.into());
        }

        let base_url = Url::parse(config.url.trim())
            .map_err(|e| RosaError::config(format!("Invalid API URL '{}': {e}", config.url)))?;
        if base_url.cannot_be_a_base() {
            return Err(RosaError::config(format!("Invalid API URL '{}'", config.url)));
        }

        let http = Client::builder()
            .user_agent(format!("rosa-rust/{}", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(config.insecure)
            .build()
            .map_err(|e| RosaError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            access_token: config.access_token.trim().to_string(),
        })
    }

    #[inline]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn send(&self, request: RequestBuilder, url: &Url) -> RosaResult<Response> {
        let response = request
            .bearer_auth(&self.access_token)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| RosaError::network(url.as_str(), e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = api_error(status.as_u16(), status.canonical_reason(), &body);
        tracing::debug!(status = err.status, code = %err.code, operation_id = %err.operation_id, "Request to '{url}' failed");
        Err(err.into())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, query: &[(&str, &str)]) -> RosaResult<T> {
        tracing::debug!("GET {url}");
        let response = self.send(self.http.get(url.clone()).query(query), &url).await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| RosaError::network(url.as_str(), e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| RosaError::decode("JSON", e.to_string()))
    }
}

impl OcmApi for DefaultOcmClient {
    async fn search_clusters(&self, search: &str, size: i32) -> RosaResult<ClusterList> {
        let url = endpoint_url(&self.base_url, &["clusters"])?;
        let size = size.to_string();
        self.get_json(url, &[("search", search), ("size", size.as_str())]).await
    }

    async fn list_machine_pools(&self, cluster_id: &str) -> RosaResult<Vec<MachinePool>> {
        let url = endpoint_url(&self.base_url, &["clusters", cluster_id, "machine_pools"])?;
        let list: MachinePoolList = self.get_json(url, &ALL_ITEMS).await?;
        Ok(list.items)
    }

    async fn delete_machine_pool(&self, cluster_id: &str, machine_pool_id: &str) -> RosaResult<()> {
        let url = endpoint_url(&self.base_url, &["clusters", cluster_id, "machine_pools", machine_pool_id])?;
        tracing::debug!("DELETE {url}");
        self.send(self.http.delete(url.clone()), &url).await?;
        Ok(())
    }

    async fn list_group_users(&self, cluster_id: &str, group_id: &str) -> RosaResult<Vec<User>> {
        let url = endpoint_url(&self.base_url, &["clusters", cluster_id, "groups", group_id, "users"])?;
        let list: UserList = self.get_json(url, &ALL_ITEMS).await?;
        Ok(list.items)
    }
}

/// Build the URL of a clusters management resource below `base`.
///
/// Segments are percent-encoded, so identifiers can never escape their path position.
pub(crate) fn endpoint_url(base: &Url, segments: &[&str]) -> RosaResult<Url> {
    let mut url = base.clone();
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| RosaError::config(format!("API URL '{base}' cannot be used as a base")))?;
        path.pop_if_empty();
        path.extend(CLUSTERS_MGMT_PATH.iter().chain(segments.iter()));
    }
    url.set_query(None);
    Ok(url)
}

/// Decode an error response, falling back to the raw body or the status reason
pub(crate) fn api_error(status: u16, canonical_reason: Option<&str>, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(error_body) if !error_body.reason.is_empty() => error_body.into_api_error(status),
        _ => {
            let body = body.trim();
            let reason = if body.is_empty() {
                canonical_reason.unwrap_or("unknown error")
            } else {
                body
            };
            ApiError::new(status, reason)
        }
    }
}
