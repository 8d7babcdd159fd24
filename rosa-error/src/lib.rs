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

//! # ROSA Error Handling System
//!
//! Unified error handling for the ROSA Rust command-line tools.
//!
//! Every failure a command can hit is expressed as a [`RosaError`]. Each error
//! is classified into an [`ErrorKind`], and the kind alone decides how the
//! failure is reported and which exit status the process terminates with.
//!
//! ```rust
//! use rosa_error::ErrorKind;
//! use rosa_error::RosaError;
//! use rosa_error::RosaResult;
//! use rosa_error::ToolsError;
//!
//! fn check_ready(ready: bool) -> RosaResult<()> {
//!     if !ready {
//!         return Err(ToolsError::cluster_not_ready("mycluster").into());
//!     }
//!     Ok(())
//! }
//!
//! let err = check_ready(false).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::StatePrecondition);
//! assert_eq!(err.to_string(), "Cluster 'mycluster' is not yet ready");
//! ```

pub mod unified;

pub use unified::ApiError;
pub use unified::ErrorKind;
pub use unified::RosaError;
pub use unified::RosaResult;
pub use unified::ToolsError;
