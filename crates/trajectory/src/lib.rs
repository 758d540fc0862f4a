// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # Trajectory Import
//!
//! Reads molecular-dynamics trajectories from text into a [`Trajectory`]: an ordered list of
//! [`Frame`]s, each an ordered list of [`Atom`]s.  Two formats are understood, LAMMPS dumps and
//! multi-frame XYZ files, and the format is picked from the content with [`detect_format`].
//!
//! Parsing is lenient about individual atom lines: a line with too few columns is dropped and
//! recorded in the returned [`Diagnostics`], while a line with enough columns whose numbers do
//! not parse fails the whole parse.

mod atom;
mod detect;
mod diagnostics;
mod error;
pub mod lammps;
pub mod xyz;

pub use atom::{Atom, Frame, SpeciesToken, Trajectory, FALLBACK_SPECIES_CODE};
pub use detect::{detect_format, TrajectoryFormat, LAMMPS_TIMESTEP_MARKER};
pub use diagnostics::Diagnostics;
pub use error::{TrajectoryError, TrajectoryResult};

use std::time::Instant;

/// Detects the format of `text` and parses every frame in it.
///
/// Fails with [`TrajectoryError::UnsupportedFormat`] when the format is not recognized and with
/// [`TrajectoryError::EmptyTrajectory`] when no frame holds at least one atom.
pub fn parse(text: &str) -> TrajectoryResult<(Trajectory, Diagnostics)> {
    parse_as(text, detect_format(text))
}

/// Parses `text` as `format`, bypassing detection.
pub fn parse_as(
    text: &str,
    format: TrajectoryFormat,
) -> TrajectoryResult<(Trajectory, Diagnostics)> {
    let mut diagnostics = Diagnostics::new();
    diagnostics.set_format(format);

    let start = Instant::now();

    let frames = match format {
        TrajectoryFormat::LammpsDump => lammps::parse_lammps_dump(text, &mut diagnostics)?,
        TrajectoryFormat::Xyz => xyz::parse_xyz(text, &mut diagnostics)?,
        TrajectoryFormat::Unknown => return Err(TrajectoryError::UnsupportedFormat),
    };

    diagnostics.add(format!(
        "Parsed {} {} frames in {}ms",
        frames.len(),
        format,
        start.elapsed().as_millis()
    ));

    let skipped = diagnostics.skipped_lines().len();
    if skipped > 0 {
        diagnostics.add(format!("Skipped {} malformed atom lines", skipped));
    }

    if frames.is_empty() {
        return Err(TrajectoryError::EmptyTrajectory);
    }

    Ok((Trajectory::new(frames), diagnostics))
}

// End of File
