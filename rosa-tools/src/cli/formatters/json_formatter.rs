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

//! JSON formatter

use rosa_error::RosaError;
use serde::Serialize;

use super::Formatter;
use crate::core::RosaResult;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format<T: Serialize>(&self, data: &T) -> RosaResult<String> {
        serde_json::to_string_pretty(data).map_err(|e| RosaError::encode("JSON", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_formatter() {
        let formatter = JsonFormatter;
        let data = serde_json::json!([{"id": "alice", "groups": ["cluster-admins"]}]);
        let output = formatter.format(&data).unwrap();
        assert!(output.contains("\"id\": \"alice\""));
        assert!(output.contains("\"cluster-admins\""));
    }
}
