// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Multi-frame XYZ reader.
//!
//! Each frame is an atom count, one comment line, then one `species x y z` line per atom.  Frames
//! follow each other directly.  Atom ids are the 1-based position of the atom within its frame.

use ultraviolet::DVec3;

use crate::error::{parse_field, TrajectoryResult};
use crate::{Atom, Diagnostics, Frame, SpeciesToken};

const MIN_ATOM_COLUMNS: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum State {
    AtomCount,
    Comment { expected: usize },
    Atoms { expected: usize, consumed: usize },
}

#[derive(Debug)]
pub struct XyzParser {
    state: State,
    current: Vec<Atom>,
    frames: Vec<Frame>,
}

impl XyzParser {
    pub fn new() -> Self {
        Self {
            state: State::AtomCount,
            current: Vec::new(),
            frames: Vec::new(),
        }
    }

    pub fn feed(
        &mut self,
        line_number: usize,
        line: &str,
        diagnostics: &mut Diagnostics,
    ) -> TrajectoryResult<()> {
        let trimmed = line.trim();

        match self.state {
            State::AtomCount => {
                let Some(token) = trimmed.split_whitespace().next() else {
                    return Ok(());
                };
                // Footer lines such as `END` are not frame headers.
                match token.parse() {
                    Ok(expected) => self.state = State::Comment { expected },
                    Err(_) => diagnostics.skip_line(line_number),
                }
            }
            State::Comment { expected: 0 } => {
                diagnostics.add(format!("Dropped empty XYZ frame ending on line {}", line_number));
                self.state = State::AtomCount;
            }
            State::Comment { expected } => {
                self.state = State::Atoms {
                    expected,
                    consumed: 0,
                };
            }
            State::Atoms { expected, consumed } => {
                if trimmed.is_empty() {
                    return Ok(());
                }

                self.read_atom(line_number, trimmed, diagnostics)?;

                let consumed = consumed + 1;
                if consumed == expected {
                    self.flush(line_number, diagnostics);
                    self.state = State::AtomCount;
                } else {
                    self.state = State::Atoms { expected, consumed };
                }
            }
        }

        Ok(())
    }

    fn read_atom(
        &mut self,
        line_number: usize,
        line: &str,
        diagnostics: &mut Diagnostics,
    ) -> TrajectoryResult<()> {
        let columns: Vec<&str> = line.split_whitespace().collect();
        if columns.len() < MIN_ATOM_COLUMNS {
            diagnostics.skip_line(line_number);
            return Ok(());
        }

        let species = SpeciesToken::parse(columns[0]).code();
        let x = parse_field(columns[1], "x coordinate", line_number)?;
        let y = parse_field(columns[2], "y coordinate", line_number)?;
        let z = parse_field(columns[3], "z coordinate", line_number)?;

        let id = self.current.len() as u64 + 1;
        self.current.push(Atom::new(id, species, DVec3::new(x, y, z)));
        Ok(())
    }

    fn flush(&mut self, line_number: usize, diagnostics: &mut Diagnostics) {
        let atoms = std::mem::take(&mut self.current);
        if atoms.is_empty() {
            diagnostics.add(format!(
                "Dropped XYZ frame ending on line {} with no readable atoms",
                line_number
            ));
        } else {
            self.frames.push(Frame::new(atoms));
        }
    }

    /// Returns the completed frames.  A frame still waiting for atom lines is discarded.
    pub fn finish(self, diagnostics: &mut Diagnostics) -> Vec<Frame> {
        match self.state {
            State::Comment { expected } | State::Atoms { expected, .. } if expected > 0 => {
                diagnostics.add(format!(
                    "Discarded truncated XYZ frame: expected {} atoms, input ended",
                    expected
                ));
            }
            _ => {}
        }
        self.frames
    }
}

impl Default for XyzParser {
    fn default() -> Self {
        Self::new()
    }
}

pub fn parse_xyz(text: &str, diagnostics: &mut Diagnostics) -> TrajectoryResult<Vec<Frame>> {
    let mut parser = XyzParser::new();
    for (index, line) in text.lines().enumerate() {
        parser.feed(index + 1, line, diagnostics)?;
    }
    Ok(parser.finish(diagnostics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FALLBACK_SPECIES_CODE;

    fn parse(text: &str) -> (Vec<Frame>, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let frames = parse_xyz(text, &mut diagnostics).unwrap();
        (frames, diagnostics)
    }

    #[test]
    fn single_frame() {
        let (frames, _) = parse("2\ncomment\n1 0 0 0\n1 1 0 0\n");
        assert_eq!(frames.len(), 1);
        let atoms = frames[0].atoms();
        assert_eq!(atoms.len(), 2);
        assert_eq!((atoms[0].id, atoms[0].species), (1, 1));
        assert_eq!((atoms[1].id, atoms[1].species), (2, 1));
        assert_eq!(atoms[1].position, DVec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn multiple_frames_restart_ids() {
        let text = "2\nframe 0\n8 0 0 0\n2 1 0 0\n2\nframe 1\n8 0 0 0.1\n2 1 0 0.1\n";
        let (frames, _) = parse(text);
        assert_eq!(frames.len(), 2);
        for frame in &frames {
            let ids: Vec<u64> = frame.iter().map(|atom| atom.id).collect();
            assert_eq!(ids, vec![1, 2]);
        }
        assert_eq!(frames[1].atoms()[0].species, 8);
        assert_eq!(frames[1].atoms()[0].position.z, 0.1);
    }

    #[test]
    fn element_symbols_use_fallback_code() {
        let (frames, _) = parse("3\nwater\nO 0 0 0\nH 0.96 0 0\nH -0.24 0.93 0\n");
        assert!(frames[0]
            .iter()
            .all(|atom| atom.species == FALLBACK_SPECIES_CODE));
    }

    #[test]
    fn comment_line_is_skipped_even_if_it_looks_like_an_atom() {
        let (frames, _) = parse("1\n6 9 9 9\n6 0 0 0\n");
        assert_eq!(frames[0].len(), 1);
        assert_eq!(frames[0].atoms()[0].position, DVec3::zero());
    }

    #[test]
    fn blank_lines_between_atoms_do_not_count() {
        let (frames, _) = parse("2\ncomment\n1 0 0 0\n\n1 1 0 0\n\n");
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].len(), 2);
    }

    #[test]
    fn zero_atom_frame_is_dropped() {
        let (frames, diagnostics) = parse("0\nempty\n1\nnext\n6 0 0 0\n");
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].len(), 1);
        assert_eq!(diagnostics.messages().len(), 1);
    }

    #[test]
    fn truncated_frame_is_discarded() {
        let (frames, diagnostics) = parse("1\na\n6 0 0 0\n3\nb\n6 0 0 0\n6 1 0 0\n");
        assert_eq!(frames.len(), 1);
        assert!(diagnostics
            .iter()
            .any(|message| message.contains("truncated")));
    }

    #[test]
    fn malformed_atom_line_consumes_a_slot() {
        let (frames, diagnostics) = parse("3\nc\n6 0 0 0\n6 1 0\n6 2 0 0\n");
        assert_eq!(frames.len(), 1);
        let ids: Vec<u64> = frames[0].iter().map(|atom| atom.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(frames[0].atoms()[1].position.x, 2.0);
        assert_eq!(diagnostics.skipped_lines(), &[4]);
    }

    #[test]
    fn trailing_footer_keeps_parsed_frames() {
        let (frames, diagnostics) = parse("2\nc\n1 0 0 0\n1 1 0 0\nEND\n");
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].len(), 2);
        assert_eq!(diagnostics.skipped_lines(), &[5]);
    }

    #[test]
    fn non_count_line_between_frames_is_skipped() {
        let (frames, diagnostics) = parse("1\nc\n6 0 0 0\nnext\n1\nd\n6 1 0 0\n");
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].atoms()[0].position.x, 1.0);
        assert_eq!(diagnostics.skipped_lines(), &[4]);
    }

    #[test]
    fn integral_float_species_is_a_code() {
        let (frames, _) = parse("3\nc\n6.0 0 0 0\n-3 1 0 0\n8.5 2 0 0\n");
        let species: Vec<u32> = frames[0].iter().map(|atom| atom.species).collect();
        assert_eq!(species, vec![6, FALLBACK_SPECIES_CODE, FALLBACK_SPECIES_CODE]);
    }

    #[test]
    fn bad_coordinate_is_an_error() {
        use crate::TrajectoryError;

        let mut diagnostics = Diagnostics::new();
        let err = parse_xyz("1\nc\nC 0 0 nan?\n", &mut diagnostics).unwrap_err();
        assert!(matches!(
            err,
            TrajectoryError::InvalidNumber {
                line: 3,
                field: "z coordinate",
                ..
            }
        ));
    }
}

// End of File
