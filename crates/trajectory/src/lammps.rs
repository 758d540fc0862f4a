// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! LAMMPS dump reader.
//!
//! A dump is a sequence of blocks:
//!
//! ```text
//! ITEM: TIMESTEP
//! 0
//! ITEM: NUMBER OF ATOMS
//! 2
//! ITEM: BOX BOUNDS pp pp pp
//! ...
//! ITEM: ATOMS id type x y z
//! 1 1 0.0 0.0 0.0
//! 2 1 1.2 0.0 0.0
//! ```
//!
//! Header items are recognized only by their markers.  Atom records are always read as
//! `id type x y z`, whatever the `ITEM: ATOMS` line declares; extra columns are ignored.

use ultraviolet::DVec3;

use crate::detect::LAMMPS_TIMESTEP_MARKER;
use crate::error::{parse_field, TrajectoryResult};
use crate::{Atom, Diagnostics, Frame};

const ATOMS_MARKER: &str = "ITEM: ATOMS";
const ITEM_PREFIX: &str = "ITEM";
const MIN_ATOM_COLUMNS: usize = 5;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum State {
    /// Outside an atom section: before the first block or inside a block header.
    Seeking,
    InAtoms,
}

/// Line-driven state machine accumulating frames from a LAMMPS dump.
#[derive(Debug)]
pub struct LammpsDumpParser {
    state: State,
    current: Vec<Atom>,
    frames: Vec<Frame>,
}

impl LammpsDumpParser {
    pub fn new() -> Self {
        Self {
            state: State::Seeking,
            current: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Consumes one input line.  `line_number` is 1-based and only used for error reporting.
    pub fn feed(
        &mut self,
        line_number: usize,
        line: &str,
        diagnostics: &mut Diagnostics,
    ) -> TrajectoryResult<()> {
        let trimmed = line.trim();

        if trimmed.starts_with(LAMMPS_TIMESTEP_MARKER) {
            self.flush();
            self.state = State::Seeking;
            return Ok(());
        }

        if trimmed.starts_with(ATOMS_MARKER) {
            self.state = State::InAtoms;
            return Ok(());
        }

        if self.state != State::InAtoms || trimmed.is_empty() || trimmed.starts_with(ITEM_PREFIX) {
            return Ok(());
        }

        let columns: Vec<&str> = trimmed.split_whitespace().collect();
        if columns.len() < MIN_ATOM_COLUMNS {
            diagnostics.skip_line(line_number);
            return Ok(());
        }

        let id = parse_field(columns[0], "atom id", line_number)?;
        let species = parse_field(columns[1], "atom type", line_number)?;
        let x = parse_field(columns[2], "x coordinate", line_number)?;
        let y = parse_field(columns[3], "y coordinate", line_number)?;
        let z = parse_field(columns[4], "z coordinate", line_number)?;

        self.current.push(Atom::new(id, species, DVec3::new(x, y, z)));
        Ok(())
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            let atoms = std::mem::take(&mut self.current);
            self.frames.push(Frame::new(atoms));
        }
    }

    /// Flushes the block in progress and returns every completed frame.
    pub fn finish(mut self) -> Vec<Frame> {
        self.flush();
        self.frames
    }
}

impl Default for LammpsDumpParser {
    fn default() -> Self {
        Self::new()
    }
}

pub fn parse_lammps_dump(
    text: &str,
    diagnostics: &mut Diagnostics,
) -> TrajectoryResult<Vec<Frame>> {
    let mut parser = LammpsDumpParser::new();
    for (index, line) in text.lines().enumerate() {
        parser.feed(index + 1, line, diagnostics)?;
    }
    Ok(parser.finish())
}


// End of File
