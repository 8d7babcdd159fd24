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

use clap::Parser;

use crate::cli::validators;
use crate::commands::ClusterArgs;
use crate::commands::CommandExecute;
use crate::core::cluster::ClusterService;
use crate::core::machine_pool::MachinePoolService;
use crate::core::runtime::RuntimeContext;
use crate::core::RosaResult;
use crate::ocm::OcmApi;
use crate::ui::progress;
use crate::ui::prompt;

#[derive(Debug, Clone, Parser)]
pub struct DeleteMachinePoolSubCommand {
    #[command(flatten)]
    cluster_args: ClusterArgs,

    /// Skip confirmation prompts (automatically answer 'yes')
    #[arg(short = 'y', long = "yes", help = "Automatically answer yes to confirm operation")]
    yes: bool,

    #[arg(value_name = "ID", required = true, help = "Identifier of the machine pool to delete")]
    machine_pool_id: String,
}

impl CommandExecute for DeleteMachinePoolSubCommand {
    fn validate(&self) -> RosaResult<()> {
        let cluster_key = self.cluster_args.cluster_key()?;
        validators::validate_machine_pool_id(&self.machine_pool_id, cluster_key)
    }

    async fn execute<A: OcmApi>(&self, runtime: &RuntimeContext<A>) -> RosaResult<()> {
        self.validate()?;
        let cluster_key = self.cluster_args.cluster_key()?;
        let machine_pool_id = self.machine_pool_id.as_str();
        let reporter = runtime.reporter();

        reporter.debug(&format!("Loading cluster '{cluster_key}'"));
        let cluster = ClusterService::get_cluster(runtime.api(), cluster_key).await?;

        reporter.debug(&format!("Loading machine pools for cluster '{cluster_key}'"));
        let machine_pool =
            MachinePoolService::get_machine_pool(runtime.api(), &cluster, cluster_key, machine_pool_id).await?;

        if !self.yes {
            let message = prompt::confirm_action_message(&format!(
                "delete machine pool '{machine_pool_id}' on cluster '{cluster_key}'"
            ));
            if !runtime.confirm(&message) {
                reporter.debug(&format!("Deletion of machine pool '{machine_pool_id}' not confirmed"));
                return Ok(());
            }
        }

        reporter.debug(&format!(
            "Deleting machine pool '{machine_pool_id}' on cluster '{cluster_key}'"
        ));
        let spinner = progress::create_spinner(&format!("Deleting machine pool '{machine_pool_id}'..."));
        let deleted = MachinePoolService::delete_machine_pool(runtime.api(), &cluster, cluster_key, &machine_pool).await;
        spinner.finish_and_clear();
        deleted?;

        reporter.info(&format!(
            "Successfully deleted machine pool '{machine_pool_id}' from cluster '{cluster_key}'"
        ));
        Ok(())
    }
}
