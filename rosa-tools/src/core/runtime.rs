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

//! Runtime context and builder
//!
//! Every command receives an immutable [`RuntimeContext`] holding the
//! management API client, the [`Reporter`] and the confirmation [`Prompt`].
//! The context is built once by the caller and dropped before the process
//! exits, whichever way the command ended.

use rosa_common::OcmConfig;

use crate::core::RosaResult;
use crate::ocm::DefaultOcmClient;
use crate::ocm::OcmApi;
use crate::ui::output::Reporter;
use crate::ui::prompt::InteractivePrompt;
use crate::ui::prompt::Prompt;

/// Immutable per-invocation context shared by all command steps
pub struct RuntimeContext<A: OcmApi> {
    api: A,
    reporter: Reporter,
    prompt: Box<dyn Prompt>,
}

impl<A: OcmApi> RuntimeContext<A> {
    pub fn new(api: A, reporter: Reporter, prompt: Box<dyn Prompt>) -> Self {
        Self { api, reporter, prompt }
    }

    #[inline]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[inline]
    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    /// Ask the operator to confirm an action
    pub fn confirm(&self, message: &str) -> bool {
        self.prompt.confirm(message)
    }
}

impl<A: OcmApi> Drop for RuntimeContext<A> {
    fn drop(&mut self) {
        tracing::debug!("Releasing runtime context");
        self.reporter.flush();
    }
}

/// Builder for the runtime context used by the CLI
///
/// # Examples
///
/// ```rust,ignore
/// use rosa_tools::core::runtime::RuntimeBuilder;
///
/// let runtime = RuntimeBuilder::new().build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuntimeBuilder {
    config: Option<OcmConfig>,
}

impl RuntimeBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this configuration instead of loading it from disk and environment
    #[inline]
    pub fn config(mut self, config: OcmConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Load configuration if needed and create the API client
    ///
    /// # Errors
    ///
    /// Returns error if the configuration cannot be read or holds no access token.
    pub fn build(self) -> RosaResult<RuntimeContext<DefaultOcmClient>> {
        let config = match self.config {
            Some(config) => config,
            None => OcmConfig::load()?,
        };
        let api = DefaultOcmClient::new(&config)?;
        tracing::debug!("Using API at {}", api.base_url());

        Ok(RuntimeContext::new(api, Reporter::new(), Box::new(InteractivePrompt)))
    }
}
