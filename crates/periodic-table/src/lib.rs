// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # Covalent Radii
//!
//! Reference bonding radii, in Ångström, keyed by the integer species code that trajectory files
//! use for an atom's type.  Trajectory formats do not agree on what a type code means: XYZ files
//! written by most tools use the atomic number, while LAMMPS dumps use whatever numbering the
//! simulation input declared.  The [`CovalentRadii`] table therefore maps raw species codes, not
//! elements, and can be overridden per code by the caller.

use lazy_static::lazy_static;
use std::collections::BTreeMap;

/// Radius used for species codes that are missing from a [`CovalentRadii`] table.
pub const DEFAULT_FALLBACK_RADIUS: f64 = 1.5;

/// The handful of elements that the default radius table knows about.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Element {
    Hydrogen = 1,
    Carbon = 6,
    Nitrogen = 7,
    Oxygen = 8,
    Fluorine = 9,
    Silicon = 14,
    Phosphorus = 15,
    Sulfur = 16,
}

impl Element {
    pub fn atomic_number(self) -> u32 {
        self as u32
    }

    /// Single-bond covalent radius in Ångström.
    pub fn covalent_radius(self) -> f64 {
        match self {
            Element::Hydrogen => 0.37,
            Element::Carbon => 0.77,
            Element::Nitrogen => 0.75,
            Element::Oxygen => 0.73,
            Element::Fluorine => 0.71,
            Element::Silicon => 1.11,
            Element::Phosphorus => 1.06,
            Element::Sulfur => 1.02,
        }
    }
}

lazy_static! {
    static ref DEFAULT_RADII: BTreeMap<u32, f64> = {
        let mut radii = BTreeMap::new();

        for element in [
            Element::Carbon,
            Element::Nitrogen,
            Element::Oxygen,
            Element::Fluorine,
            Element::Silicon,
            Element::Phosphorus,
            Element::Sulfur,
        ] {
            radii.insert(element.atomic_number(), element.covalent_radius());
        }

        // Codes 1 and 2 are reference-table entries, not atomic numbers.
        radii.insert(1, Element::Carbon.covalent_radius());
        radii.insert(2, Element::Hydrogen.covalent_radius());

        radii
    };
}

/// A table mapping species codes to covalent radii, with a fallback for unlisted codes.
#[derive(Debug, Clone, PartialEq)]
pub struct CovalentRadii {
    radii: BTreeMap<u32, f64>,
    fallback: f64,
}

impl CovalentRadii {
    pub fn radius(&self, species: u32) -> f64 {
        self.radii.get(&species).copied().unwrap_or(self.fallback)
    }

    pub fn fallback(&self) -> f64 {
        self.fallback
    }

    pub fn set_fallback(&mut self, fallback: f64) {
        self.fallback = fallback;
    }

    /// Sets the radius for `species`, returning the previous entry if there was one.
    pub fn insert(&mut self, species: u32, radius: f64) -> Option<f64> {
        self.radii.insert(species, radius)
    }

    pub fn contains(&self, species: u32) -> bool {
        self.radii.contains_key(&species)
    }

    /// Iterates over the explicit entries in ascending species order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.radii.iter().map(|(&species, &radius)| (species, radius))
    }

    pub fn len(&self) -> usize {
        self.radii.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }
}

impl Default for CovalentRadii {
    fn default() -> Self {
        Self {
            radii: DEFAULT_RADII.clone(),
            fallback: DEFAULT_FALLBACK_RADIUS,
        }
    }
}


// End of File
