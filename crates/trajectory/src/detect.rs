// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Content-based format detection.

use std::fmt;

/// Marker line opening every block of a LAMMPS dump.
pub const LAMMPS_TIMESTEP_MARKER: &str = "ITEM: TIMESTEP";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TrajectoryFormat {
    LammpsDump,
    Xyz,
    Unknown,
}

impl fmt::Display for TrajectoryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrajectoryFormat::LammpsDump => write!(f, "LAMMPS dump"),
            TrajectoryFormat::Xyz => write!(f, "XYZ"),
            TrajectoryFormat::Unknown => write!(f, "unknown"),
        }
    }
}

/// Classifies `text` by content.  Any line containing [`LAMMPS_TIMESTEP_MARKER`] makes it a LAMMPS
/// dump; otherwise a first non-blank line starting with a non-negative integer makes it XYZ.
pub fn detect_format(text: &str) -> TrajectoryFormat {
    if text.lines().any(|line| line.contains(LAMMPS_TIMESTEP_MARKER)) {
        return TrajectoryFormat::LammpsDump;
    }

    let first_token = text
        .lines()
        .find(|line| !line.trim().is_empty())
        .and_then(|line| line.split_whitespace().next());

    match first_token.map(str::parse::<u64>) {
        Some(Ok(_)) => TrajectoryFormat::Xyz,
        _ => TrajectoryFormat::Unknown,
    }
}


// End of File
