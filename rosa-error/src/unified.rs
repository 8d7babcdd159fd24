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

//! Unified error system for the ROSA Rust tools
//!
//! All errors are grouped into a small number of categories ([`ErrorKind`]) so
//! that the top-level command runner can translate any failure into an exit
//! status with a single match.

mod api;
mod tools;

use std::io;

pub use api::ApiError;
use thiserror::Error;
pub use tools::ToolsError;

/// Main error type for all ROSA operations
#[derive(Debug, Error)]
pub enum RosaError {
    // ============================================================================
    // Tools Errors
    // ============================================================================
    /// Command level failures (validation, lookup, preconditions, actions)
    #[error(transparent)]
    Tools(#[from] ToolsError),

    // ============================================================================
    // Remote API Errors
    // ============================================================================
    /// The management API answered with an error response
    #[error(transparent)]
    Api(#[from] ApiError),

    // ============================================================================
    // Network Errors
    // ============================================================================
    /// The request never produced a response
    #[error("Failed to send request to '{url}': {reason}")]
    Network { url: String, reason: String },

    // ============================================================================
    // Serialization Errors
    // ============================================================================
    /// Encoding or decoding of a payload failed
    #[error("Failed to {operation} {format}: {message}")]
    Serialization {
        operation: &'static str,
        format: &'static str,
        message: String,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// The client configuration could not be loaded
    #[error("Failed to load configuration: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Error classification used to pick the reporting level and exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed identifier or protected-resource violation
    InvalidInput,
    /// Parent or child resource not found, or the listing call failed
    LookupFailure,
    /// The resource exists but is not in a usable state
    StatePrecondition,
    /// The mutating or reading call itself failed
    ActionFailure,
    /// The command completed but had nothing to show
    EmptyResult,
    /// Missing credentials or unreadable configuration
    Configuration,
    /// Transport, encoding or local IO failure
    Internal,
}

impl ErrorKind {
    /// Process exit status for a command that failed with this kind
    #[inline]
    pub fn exit_code(self) -> u8 {
        1
    }

    /// Whether the failure is reported as a warning instead of an error
    #[inline]
    pub fn is_warning(self) -> bool {
        matches!(self, ErrorKind::EmptyResult)
    }
}

impl RosaError {
    /// Create a network error
    #[inline]
    pub fn network(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Network {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a decoding error
    #[inline]
    pub fn decode(format: &'static str, message: impl Into<String>) -> Self {
        Self::Serialization {
            operation: "decode",
            format,
            message: message.into(),
        }
    }

    /// Create an encoding error
    #[inline]
    pub fn encode(format: &'static str, message: impl Into<String>) -> Self {
        Self::Serialization {
            operation: "encode",
            format,
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            RosaError::Tools(e) => e.kind(),
            RosaError::Api(_) => ErrorKind::ActionFailure,
            RosaError::Config(_) => ErrorKind::Configuration,
            RosaError::Network { .. } | RosaError::Serialization { .. } | RosaError::Io(_) => ErrorKind::Internal,
        }
    }

    /// Process exit status for this error
    #[inline]
    pub fn exit_code(&self) -> u8 {
        self.kind().exit_code()
    }
}

/// Result type alias for ROSA operations
pub type RosaResult<T> = std::result::Result<T, RosaError>;
