// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::collections::HashSet;
use std::time::Instant;

use trajectory::Frame;

use crate::{Bond, BondConfig};

/// Infers bonds between every pair of atoms in `frame` closer than their cutoff distance.
///
/// Bonds are returned in discovery order (by position of the first atom, then the second), with
/// duplicate and self pairs removed.  Atoms sharing an id never bond to each other.
pub fn infer_bonds(frame: &Frame, config: &BondConfig) -> Vec<Bond> {
    let start = Instant::now();
    let atoms = frame.atoms();

    let mut bonds = Vec::new();
    let mut processed_pairs: HashSet<Bond> = HashSet::new();

    for (i, atom) in atoms.iter().enumerate() {
        for other in &atoms[i + 1..] {
            if atom.id == other.id {
                continue;
            }

            let distance = atom.distance(other);
            if distance < config.cutoff(atom.species, other.species) {
                let bond = Bond::new(atom.id, other.id);
                if processed_pairs.insert(bond) {
                    bonds.push(bond);
                }
            }
        }
    }

    log::debug!(
        "Inferred {} bonds among {} atoms in {}ms",
        bonds.len(),
        atoms.len(),
        start.elapsed().as_millis()
    );

    bonds
}

#[cfg(test)]
mod tests {
    use super::*;
    use trajectory::Atom;
    use ultraviolet::DVec3;

    fn atom(id: u64, species: u32, x: f64, y: f64, z: f64) -> Atom {
        Atom::new(id, species, DVec3::new(x, y, z))
    }

    #[test]
    fn bonds_close_pairs_only() {
        let frame = Frame::new(vec![
            atom(1, 1, 0.0, 0.0, 0.0),
            atom(2, 1, 1.2, 0.0, 0.0),
            atom(3, 8, 5.0, 5.0, 5.0),
        ]);
        let bonds = infer_bonds(&frame, &BondConfig::default());
        assert_eq!(bonds, vec![Bond::new(1, 2)]);
        assert!(bonds.iter().all(|bond| !bond.contains(3)));
    }

    #[test]
    fn cutoff_is_strict() {
        // Exactly at the threshold: (1.0 + 1.0) * 1.0.
        let config = BondConfig::default()
            .with_cutoff_factor(1.0)
            .with_radius(1, 1.0);
        let frame = Frame::new(vec![atom(1, 1, 0.0, 0.0, 0.0), atom(2, 1, 2.0, 0.0, 0.0)]);
        assert!(infer_bonds(&frame, &config).is_empty());

        let frame = Frame::new(vec![atom(1, 1, 0.0, 0.0, 0.0), atom(2, 1, 1.999, 0.0, 0.0)]);
        assert_eq!(infer_bonds(&frame, &config).len(), 1);
    }

    #[test]
    fn unlisted_species_use_fallback_radius() {
        // Fallback cutoff is (1.5 + 1.5) * 1.2 = 3.6.
        let frame = Frame::new(vec![atom(1, 42, 0.0, 0.0, 0.0), atom(2, 42, 3.5, 0.0, 0.0)]);
        assert_eq!(infer_bonds(&frame, &BondConfig::default()).len(), 1);

        let frame = Frame::new(vec![atom(1, 42, 0.0, 0.0, 0.0), atom(2, 42, 3.7, 0.0, 0.0)]);
        assert!(infer_bonds(&frame, &BondConfig::default()).is_empty());
    }

    #[test]
    fn duplicate_ids_do_not_produce_self_or_repeated_bonds() {
        let frame = Frame::new(vec![
            atom(1, 1, 0.0, 0.0, 0.0),
            atom(1, 1, 0.1, 0.0, 0.0),
            atom(2, 1, 0.5, 0.0, 0.0),
        ]);
        let bonds = infer_bonds(&frame, &BondConfig::default());
        assert_eq!(bonds, vec![Bond::new(1, 2)]);
    }

    #[test]
    fn result_does_not_depend_on_atom_order() {
        let atoms = vec![
            atom(1, 6, 0.0, 0.0, 0.0),
            atom(2, 2, 1.09, 0.0, 0.0),
            atom(3, 2, -0.36, 1.03, 0.0),
            atom(4, 2, -0.36, -0.51, 0.89),
            atom(5, 2, -0.36, -0.51, -0.89),
            atom(6, 8, 4.0, 4.0, 4.0),
        ];
        let config = BondConfig::default();

        let mut forward = infer_bonds(&Frame::new(atoms.clone()), &config);
        let mut reversed: Vec<Atom> = atoms;
        reversed.reverse();
        let mut backward = infer_bonds(&Frame::new(reversed), &config);

        forward.sort();
        backward.sort();
        assert_eq!(forward.len(), 4);
        assert_eq!(forward, backward);
    }

    #[test]
    fn tiny_frames_have_no_bonds() {
        let config = BondConfig::default();
        assert!(infer_bonds(&Frame::default(), &config).is_empty());
        assert!(infer_bonds(&Frame::new(vec![atom(1, 1, 0.0, 0.0, 0.0)]), &config).is_empty());
    }
}

// End of File
