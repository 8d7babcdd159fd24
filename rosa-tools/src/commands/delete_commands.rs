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

mod delete_machine_pool_sub_command;

use clap::Subcommand;
pub use delete_machine_pool_sub_command::DeleteMachinePoolSubCommand;

use crate::commands::CommandExecute;
use crate::core::runtime::RuntimeContext;
use crate::core::RosaResult;
use crate::ocm::OcmApi;

#[derive(Subcommand)]
pub enum DeleteCommands {
    #[command(
        name = "machinepool",
        visible_aliases = ["machinepools", "machine-pool", "machine-pools"],
        about = "Delete machine pool",
        long_about = r#"Delete a machine pool from a cluster.

The 'Default' machine pool cannot be deleted."#
    )]
    MachinePool(DeleteMachinePoolSubCommand),
}

impl CommandExecute for DeleteCommands {
    fn validate(&self) -> RosaResult<()> {
        match self {
            DeleteCommands::MachinePool(value) => value.validate(),
        }
    }

    async fn execute<A: OcmApi>(&self, runtime: &RuntimeContext<A>) -> RosaResult<()> {
        match self {
            DeleteCommands::MachinePool(value) => value.execute(runtime).await,
        }
    }
}
