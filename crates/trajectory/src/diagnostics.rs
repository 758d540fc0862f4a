// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::TrajectoryFormat;

/// Side-channel information gathered while parsing.  Nothing recorded here affects the parsed
/// trajectory.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    format: Option<TrajectoryFormat>,
    skipped_lines: Vec<usize>,
    messages: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(&self) -> Option<TrajectoryFormat> {
        self.format
    }

    pub(crate) fn set_format(&mut self, format: TrajectoryFormat) {
        self.format = Some(format);
    }

    pub fn add(&mut self, message: String) {
        self.messages.push(message);
    }

    /// Records a malformed atom line that was dropped.
    pub(crate) fn skip_line(&mut self, line: usize) {
        log::trace!("skipping malformed atom line {}", line);
        self.skipped_lines.push(line);
    }

    /// 1-based numbers of the atom lines that were skipped as malformed.
    pub fn skipped_lines(&self) -> &[usize] {
        &self.skipped_lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.messages.iter()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

// End of File
