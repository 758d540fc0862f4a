// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use ultraviolet::DVec3;

/// Species code assigned to atoms whose species column is not a number.
pub const FALLBACK_SPECIES_CODE: u32 = 1;

/// A single atom of one frame.
///
/// The `id` is taken from the file (LAMMPS) or from the atom's position in its frame (XYZ) and is
/// never reassigned, so the same physical atom carries the same id in every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atom {
    pub id: u64,
    pub species: u32,
    pub position: DVec3,
}

impl Atom {
    pub fn new(id: u64, species: u32, position: DVec3) -> Self {
        Self {
            id,
            species,
            position,
        }
    }

    pub fn distance(&self, other: &Atom) -> f64 {
        (self.position - other.position).mag()
    }
}

/// Serializes as the flat `{id, type, x, y, z}` record consumed by viewers.
impl Serialize for Atom {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("Atom", 5)?;
        record.serialize_field("id", &self.id)?;
        record.serialize_field("type", &self.species)?;
        record.serialize_field("x", &self.position.x)?;
        record.serialize_field("y", &self.position.y)?;
        record.serialize_field("z", &self.position.z)?;
        record.end()
    }
}

/// The species column of an XYZ atom line, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeciesToken<'a> {
    Code(u32),
    Symbol(&'a str),
}

impl<'a> SpeciesToken<'a> {
    /// Integers and integral floats such as `6.0` are codes.  Anything else, including negative
    /// numbers, is kept as a symbol.
    pub fn parse(token: &'a str) -> Self {
        if let Ok(code) = token.parse::<u32>() {
            return SpeciesToken::Code(code);
        }
        match token.parse::<f64>() {
            Ok(value) if value.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&value) => {
                SpeciesToken::Code(value as u32)
            }
            _ => SpeciesToken::Symbol(token),
        }
    }

    /// Canonical numeric species code.  Element symbols are not looked up; they all map to
    /// [`FALLBACK_SPECIES_CODE`].
    pub fn code(&self) -> u32 {
        match *self {
            SpeciesToken::Code(code) => code,
            SpeciesToken::Symbol(_) => FALLBACK_SPECIES_CODE,
        }
    }
}

/// One timestep: the atoms in input order.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Frame {
    atoms: Vec<Atom>,
}

impl Frame {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Self { atoms }
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Atom> {
        self.atoms.iter()
    }

    /// Mean position of the frame's atoms, or `None` for an empty frame.
    pub fn centroid(&self) -> Option<DVec3> {
        if self.atoms.is_empty() {
            return None;
        }
        let sum = self
            .atoms
            .iter()
            .fold(DVec3::zero(), |acc, atom| acc + atom.position);
        Some(sum / self.atoms.len() as f64)
    }
}

impl From<Vec<Atom>> for Frame {
    fn from(atoms: Vec<Atom>) -> Self {
        Self::new(atoms)
    }
}

impl<'a> IntoIterator for &'a Frame {
    type Item = &'a Atom;
    type IntoIter = std::slice::Iter<'a, Atom>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.iter()
    }
}

/// Frames in the temporal order they appear in the file.  There is no mutable access once built.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Trajectory {
    frames: Vec<Frame>,
}

impl Trajectory {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The reference frame used for bond inference.
    pub fn first(&self) -> Option<&Frame> {
        self.frames.first()
    }

    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    pub fn max_atom_count(&self) -> usize {
        self.frames.iter().map(Frame::len).max().unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}


// End of File
