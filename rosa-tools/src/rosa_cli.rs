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

use std::process::ExitCode;

use clap::CommandFactory;
use clap::Parser;
use clap_complete::generate;
use clap_complete::Shell;
use rosa_common::log;

use crate::commands::CommandExecute;
use crate::commands::Commands;
use crate::core::runtime::RuntimeBuilder;
use crate::core::RosaResult;
use crate::ui::output::Reporter;

const BIN_NAME: &str = "rosa";

#[derive(Parser)]
#[command(name = BIN_NAME, version)]
#[command(about = "Command line tool for Red Hat OpenShift Service on AWS", long_about = None)]
pub struct RosaCli {
    /// Enable debug mode
    #[arg(long = "debug", global = true, help = "Enable debug mode")]
    debug: bool,

    /// Generate shell completion script
    #[arg(
        long = "generate-completion",
        value_name = "SHELL",
        help = "Generate shell completion script"
    )]
    completion: Option<Shell>,

    #[command(subcommand)]
    commands: Option<Commands>,
}

impl RosaCli {
    /// Run the parsed command line and translate the outcome into an exit code
    pub async fn handle(&self) -> ExitCode {
        if self.debug {
            log::init_logger_with_level(log::Level::DEBUG);
        } else {
            log::init_logger();
        }

        let result = self.run().await;
        report_outcome(&Reporter::new(), &result);
        ExitCode::from(exit_status(&result))
    }

    async fn run(&self) -> RosaResult<()> {
        if let Some(shell) = self.completion {
            let mut cmd = RosaCli::command();
            generate(shell, &mut cmd, BIN_NAME, &mut std::io::stdout());
            return Ok(());
        }

        let Some(commands) = &self.commands else {
            RosaCli::command().print_help()?;
            return Ok(());
        };

        commands.validate()?;
        let runtime = RuntimeBuilder::new().build()?;
        commands.execute(&runtime).await
    }
}

/// Print a failed outcome, as a warning when nothing was wrong but nothing was found
pub fn report_outcome(reporter: &Reporter, result: &RosaResult<()>) {
    if let Err(e) = result {
        if e.kind().is_warning() {
            reporter.warn(&e.to_string());
        } else {
            reporter.error(&e.to_string());
        }
    }
    reporter.flush();
}

/// Process exit status for a command outcome
pub fn exit_status(result: &RosaResult<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => e.exit_code(),
    }
}

/// Process exit status for a command line clap could not parse
///
/// Help and version requests are not failures.
pub fn parse_error_exit_code(error: &clap::Error) -> u8 {
    if error.use_stderr() {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ToolsError;

    #[test]
    fn test_parse_delete_machine_pool() {
        let cli = RosaCli::try_parse_from(["rosa", "delete", "machinepool", "--cluster=mycluster", "mp-1"]).unwrap();
        assert!(matches!(cli.commands, Some(Commands::Delete(_))));
        assert!(!cli.debug);
    }

    #[test]
    fn test_parse_aliases() {
        for alias in ["machinepools", "machine-pool", "machine-pools"] {
            let cli = RosaCli::try_parse_from(["rosa", "delete", alias, "-c", "mycluster", "mp-1"]);
            assert!(cli.is_ok(), "alias {alias} should parse");
        }
        assert!(RosaCli::try_parse_from(["rosa", "list", "user", "-c", "mycluster"]).is_ok());
    }

    #[test]
    fn test_parse_global_debug() {
        let cli = RosaCli::try_parse_from(["rosa", "list", "users", "-c", "mycluster", "--debug"]).unwrap();
        assert!(cli.debug);
    }

    #[test]
    fn test_parse_completion() {
        let cli = RosaCli::try_parse_from(["rosa", "--generate-completion", "zsh"]).unwrap();
        assert_eq!(cli.completion, Some(Shell::Zsh));
        assert!(RosaCli::try_parse_from(["rosa", "--generate-completion", "cmd"]).is_err());
    }

    #[test]
    fn test_exit_status() {
        assert_eq!(exit_status(&Ok(())), 0);
        assert_eq!(exit_status(&Err(ToolsError::no_users_configured("c").into())), 1);
        assert_eq!(exit_status(&Err(ToolsError::cluster_not_ready("c").into())), 1);
    }

    #[test]
    fn test_parse_error_exit_code() {
        let err = RosaCli::try_parse_from(["rosa", "delete", "machinepool", "mp-1"]).err().unwrap();
        assert_eq!(parse_error_exit_code(&err), 1);

        let err = RosaCli::try_parse_from(["rosa", "--help"]).err().unwrap();
        assert_eq!(parse_error_exit_code(&err), 0);

        let err = RosaCli::try_parse_from(["rosa", "--version"]).err().unwrap();
        assert_eq!(parse_error_exit_code(&err), 0);
    }

    #[tokio::test]
    async fn test_invalid_input_fails_before_login() {
        let cli = RosaCli::try_parse_from(["rosa", "delete", "machinepool", "-c", "mycluster", "Default"]).unwrap();
        let err = cli.run().await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Machine pool 'Default' cannot be deleted from cluster 'mycluster'"
        );
    }
}
