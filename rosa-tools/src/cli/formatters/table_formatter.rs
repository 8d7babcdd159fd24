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

//! Table formatter using tabled

use tabled::settings::Padding;
use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

/// Column gap between table cells
const COLUMN_GAP: usize = 4;

pub struct TableFormatter;

impl TableFormatter {
    /// Format rows as a borderless, space-aligned table with a header line
    pub fn format_tabled<T: Tabled>(data: &[T]) -> String {
        let mut table = Table::new(data);
        table.with(Style::empty()).with(Padding::new(0, COLUMN_GAP, 0, 0));

        table
            .to_string()
            .lines()
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled)]
    struct TestData {
        #[tabled(rename = "ID")]
        id: String,
        #[tabled(rename = "GROUPS")]
        groups: String,
    }

    #[test]
    fn test_table_formatter() {
        let data = vec![
            TestData {
                id: "alice".to_string(),
                groups: "cluster-admins, dedicated-admins".to_string(),
            },
            TestData {
                id: "bob".to_string(),
                groups: "dedicated-admins".to_string(),
            },
        ];

        let output = TableFormatter::format_tabled(&data);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID "));
        assert!(lines[0].ends_with("GROUPS"));
        assert!(lines[1].starts_with("alice "));
        assert!(lines[1].ends_with("cluster-admins, dedicated-admins"));
        assert!(lines[2].starts_with("bob "));

        // Second column is aligned
        let column = lines[0].find("GROUPS").unwrap();
        assert_eq!(lines[1].find("cluster-admins"), Some(column));
        assert_eq!(lines[2].find("dedicated-admins"), Some(column));
    }
}
