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

//! Operator-facing output with colors and prefixes

use std::io;
use std::io::IsTerminal;
use std::io::Write;
use std::sync::Mutex;
use std::sync::PoisonError;

use colored::ColoredString;
use colored::Colorize;

use crate::core::RosaResult;

type Sink = Mutex<Box<dyn Write + Send>>;

/// Reports progress and outcomes to the operator
///
/// Command output and informational messages go to the output stream,
/// warnings and errors to the error stream. Debug messages are diagnostics
/// and go through `tracing`.
pub struct Reporter {
    out: Sink,
    err: Sink,
    colored: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter {
    /// Reporter over the process stdout and stderr
    pub fn new() -> Self {
        let colored = io::stdout().is_terminal() && io::stderr().is_terminal();
        Self::with_writers(Box::new(io::stdout()), Box::new(io::stderr()), colored)
    }

    /// Reporter over arbitrary output and error streams
    pub fn with_writers(out: Box<dyn Write + Send>, err: Box<dyn Write + Send>, colored: bool) -> Self {
        Self {
            out: Mutex::new(out),
            err: Mutex::new(err),
            colored,
        }
    }

    pub fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }

    pub fn info(&self, message: &str) {
        let line = self.line("I:", |p| p.blue().bold(), message);
        Self::write_line(&self.out, &line);
    }

    pub fn warn(&self, message: &str) {
        let line = self.line("W:", |p| p.yellow().bold(), message);
        Self::write_line(&self.err, &line);
    }

    pub fn error(&self, message: &str) {
        let line = self.line("E:", |p| p.red().bold(), message);
        Self::write_line(&self.err, &line);
    }

    /// Write command output, such as a rendered table, followed by a newline
    pub fn output(&self, text: &str) -> RosaResult<()> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(out, "{text}")?;
        Ok(())
    }

    /// Flush both output streams
    pub fn flush(&self) {
        for (name, sink) in [("output", &self.out), ("error", &self.err)] {
            if let Err(e) = sink.lock().unwrap_or_else(PoisonError::into_inner).flush() {
                tracing::debug!("Failed to flush {name} stream: {e}");
            }
        }
    }

    fn line(&self, prefix: &str, paint: fn(&str) -> ColoredString, message: &str) -> String {
        if self.colored {
            format!("{} {message}", paint(prefix))
        } else {
            format!("{prefix} {message}")
        }
    }

    fn write_line(sink: &Sink, line: &str) {
        let mut writer = sink.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(writer, "{line}") {
            tracing::debug!("Failed to write '{line}': {e}");
        }
    }
}

/// Format count with proper pluralization
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}
