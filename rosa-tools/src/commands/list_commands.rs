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

mod list_users_sub_command;

use clap::Subcommand;
pub use list_users_sub_command::ListUsersSubCommand;

use crate::commands::CommandExecute;
use crate::core::runtime::RuntimeContext;
use crate::core::RosaResult;
use crate::ocm::OcmApi;

#[derive(Subcommand)]
pub enum ListCommands {
    #[command(
        name = "users",
        visible_alias = "user",
        about = "List cluster users",
        long_about = r#"List administrative users of a cluster and the groups they belong to."#
    )]
    Users(ListUsersSubCommand),
}

impl CommandExecute for ListCommands {
    fn validate(&self) -> RosaResult<()> {
        match self {
            ListCommands::Users(value) => value.validate(),
        }
    }

    async fn execute<A: OcmApi>(&self, runtime: &RuntimeContext<A>) -> RosaResult<()> {
        match self {
            ListCommands::Users(value) => value.execute(runtime).await,
        }
    }
}
