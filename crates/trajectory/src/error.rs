// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::str::FromStr;
use thiserror::Error;

/// Errors that abort a trajectory parse.  Malformed atom lines are not errors; they are skipped
/// and counted in [`Diagnostics`](crate::Diagnostics).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrajectoryError {
    #[error("Unsupported trajectory format: expected a LAMMPS dump or an XYZ file")]
    UnsupportedFormat,

    #[error("No frames were parsed from the file.")]
    EmptyTrajectory,

    #[error("Invalid {field} on line {line}: {token:?}")]
    InvalidNumber {
        /// 1-based line number in the input text.
        line: usize,
        field: &'static str,
        token: String,
    },
}

pub type TrajectoryResult<T> = Result<T, TrajectoryError>;

/// Parses one numeric column of an atom record.
pub(crate) fn parse_field<T: FromStr>(
    token: &str,
    field: &'static str,
    line: usize,
) -> TrajectoryResult<T> {
    token.parse().map_err(|_| TrajectoryError::InvalidNumber {
        line,
        field,
        token: token.to_string(),
    })
}

// End of File
