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

//! Interactive prompts for operator confirmation

use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;

/// Source of yes/no answers for destructive operations
pub trait Prompt: Send + Sync {
    /// Ask the operator; anything other than an explicit yes is a no
    fn confirm(&self, message: &str) -> bool;
}

/// Asks on the terminal, defaulting to no
#[derive(Debug, Default)]
pub struct InteractivePrompt;

impl Prompt for InteractivePrompt {
    fn confirm(&self, message: &str) -> bool {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

/// Build the confirmation question for an action
pub fn confirm_action_message(action: &str) -> String {
    format!("Are you sure you want to {action}?")
}
