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
use tabled::Tabled;

use crate::cli::formatters::Formatter;
use crate::cli::formatters::JsonFormatter;
use crate::cli::formatters::OutputFormat;
use crate::cli::formatters::TableFormatter;
use crate::cli::formatters::YamlFormatter;
use crate::commands::ClusterArgs;
use crate::commands::CommandExecute;
use crate::core::cluster::ClusterService;
use crate::core::runtime::RuntimeContext;
use crate::core::user::UserGroups;
use crate::core::user::UserService;
use crate::core::RosaResult;
use crate::ocm::OcmApi;
use crate::ui::output::format_count;

#[derive(Tabled)]
struct UserRow<'a> {
    #[tabled(rename = "ID")]
    id: &'a str,
    #[tabled(rename = "GROUPS")]
    groups: String,
}

impl<'a> From<&'a UserGroups> for UserRow<'a> {
    fn from(user: &'a UserGroups) -> Self {
        Self {
            id: &user.id,
            groups: user.groups.join(", "),
        }
    }
}

#[derive(Debug, Clone, Parser)]
pub struct ListUsersSubCommand {
    #[command(flatten)]
    cluster_args: ClusterArgs,

    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Output format"
    )]
    output: OutputFormat,
}

impl ListUsersSubCommand {
    fn render(&self, users: &[UserGroups]) -> RosaResult<String> {
        match self.output {
            OutputFormat::Table => {
                let rows: Vec<UserRow> = users.iter().map(UserRow::from).collect();
                Ok(TableFormatter::format_tabled(&rows))
            }
            OutputFormat::Json => JsonFormatter.format(&users),
            OutputFormat::Yaml => YamlFormatter.format(&users),
        }
    }
}

impl CommandExecute for ListUsersSubCommand {
    fn validate(&self) -> RosaResult<()> {
        self.cluster_args.cluster_key().map(|_| ())
    }

    async fn execute<A: OcmApi>(&self, runtime: &RuntimeContext<A>) -> RosaResult<()> {
        let cluster_key = self.cluster_args.cluster_key()?;
        let reporter = runtime.reporter();

        reporter.debug(&format!("Loading cluster '{cluster_key}'"));
        let cluster = ClusterService::get_cluster(runtime.api(), cluster_key).await?;
        ClusterService::ensure_ready(&cluster, cluster_key)?;

        reporter.debug(&format!("Loading users for cluster '{cluster_key}'"));
        let users = UserService::list_cluster_users(runtime.api(), &cluster, cluster_key).await?;
        reporter.debug(&format!(
            "Found {} in cluster '{cluster_key}'",
            format_count(users.len(), "user", "users")
        ));

        let rendered = self.render(&users)?;
        reporter.output(rendered.trim_end())
    }
}
