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

pub mod delete_commands;
pub mod list_commands;

use clap::Parser;
use clap::Subcommand;

use crate::cli::validators;
use crate::core::runtime::RuntimeContext;
use crate::core::RosaResult;
use crate::ocm::OcmApi;

/// A trait that defines the execution behavior for commands.
///
/// Commands receive the runtime context by reference and report every
/// failure through the returned error; nothing below the top-level CLI
/// decides the process exit status.
pub trait CommandExecute {
    /// Check arguments without touching the network.
    ///
    /// Called before the runtime context is built, so malformed input fails
    /// even when no credentials are configured.
    fn validate(&self) -> RosaResult<()> {
        Ok(())
    }

    /// Executes the command.
    ///
    /// # Parameters
    /// - `runtime`: The immutable context holding the API client, reporter and prompt.
    async fn execute<A: OcmApi>(&self, runtime: &RuntimeContext<A>) -> RosaResult<()>;
}

#[derive(Debug, Parser, Clone)]
pub struct ClusterArgs {
    /// Name, identifier or external identifier of the cluster
    #[arg(
        short = 'c',
        long = "cluster",
        required = true,
        help = "Name or ID of the cluster"
    )]
    pub cluster: String,
}

impl ClusterArgs {
    /// The validated cluster key
    pub fn cluster_key(&self) -> RosaResult<&str> {
        validators::validate_cluster_key(&self.cluster)?;
        Ok(&self.cluster)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(subcommand)]
    #[command(about = "Delete a specific resource")]
    Delete(delete_commands::DeleteCommands),

    #[command(subcommand)]
    #[command(about = "List all resources of a specific type")]
    List(list_commands::ListCommands),
}

impl CommandExecute for Commands {
    fn validate(&self) -> RosaResult<()> {
        match self {
            Commands::Delete(value) => value.validate(),
            Commands::List(value) => value.validate(),
        }
    }

    async fn execute<A: OcmApi>(&self, runtime: &RuntimeContext<A>) -> RosaResult<()> {
        match self {
            Commands::Delete(value) => value.execute(runtime).await,
            Commands::List(value) => value.execute(runtime).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    #[test]
    fn test_cluster_args() {
        let args = ClusterArgs::try_parse_from(["cluster", "--cluster", "mycluster"]).unwrap();
        assert_eq!(args.cluster_key().unwrap(), "mycluster");

        let args = ClusterArgs::try_parse_from(["cluster", "-c", "my cluster"]).unwrap();
        assert_eq!(args.cluster_key().unwrap_err().kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_cluster_args_required() {
        assert!(ClusterArgs::try_parse_from(["cluster"]).is_err());
    }
}
