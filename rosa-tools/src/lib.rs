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

//! ROSA Tools - administration commands for managed OpenShift clusters
//!
//! This crate provides both:
//! - **Core**: Reusable cluster, machine pool and user operations
//! - **CLI**: Command-line interface with formatting, validation and prompts
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           CLI Layer (commands/)         │
//! │  - Command parsing (clap)               │
//! │  - Output formatting (formatters/)      │
//! │  - Input validation (validators/)       │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │         Core Logic (core/)              │
//! │  - Runtime context                      │
//! │  - Cluster lookup                       │
//! │  - Machine pool operations              │
//! │  - Cluster user operations              │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │        Management API (ocm/)            │
//! │  - OcmApi trait                         │
//! │  - DefaultOcmClient (REST)              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Usage Examples
//!
//! ## As a Library (using core)
//!
//! ```rust,ignore
//! use rosa_tools::core::cluster::ClusterService;
//! use rosa_tools::core::runtime::RuntimeBuilder;
//!
//! let runtime = RuntimeBuilder::new().build()?;
//! let cluster = ClusterService::get_cluster(runtime.api(), "mycluster").await?;
//! ```
//!
//! ## As a CLI Tool
//!
//! ```bash
//! rosa delete machinepool --cluster=mycluster mp-1
//! rosa list users --cluster=mycluster
//! ```

// Core business logic - reusable across different interfaces
pub mod core {
    //! Core business logic module
    //!
    //! Operations here talk to the management API through [`crate::ocm::OcmApi`]
    //! and never print; reporting is left to the command layer.
    //!
    //! - [`runtime`] - Runtime context bundling client, reporter and prompt
    //! - [`cluster`] - Cluster lookup and state checks
    //! - [`machine_pool`] - Machine pool lookup and deletion
    //! - [`user`] - Cluster administrator listing

    pub mod cluster;
    pub mod machine_pool;
    pub mod runtime;
    pub mod user;

    pub use rosa_error::ErrorKind;
    pub use rosa_error::RosaError;
    pub use rosa_error::RosaResult;
    pub use rosa_error::ToolsError;
}

// CLI presentation layer
pub mod cli {
    //! CLI presentation layer
    //!
    //! - [`formatters`] - Output formatters (Table, JSON, YAML)
    //! - [`validators`] - Input validators

    pub mod formatters;
    pub mod validators;
}

// UI utilities for operator interaction
pub mod ui;

// Management API client
pub mod ocm;

// Command tree
pub mod commands;

// CLI entry point
pub mod rosa_cli;

#[cfg(test)]
pub(crate) mod test_support;
