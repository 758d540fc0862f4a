// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # Bond Inference
//!
//! Infers covalent bonds from the geometry of a single [`Frame`](trajectory::Frame).  Two atoms
//! are bonded when they are closer than the sum of their covalent radii scaled by a cutoff
//! factor.  Every pair is checked, so the cost grows with the square of the atom count; frames of
//! a few thousand atoms are the practical limit.
//!
//! Topology is computed once, from the first frame of a trajectory, and reused for every later
//! frame.

mod bond;
mod config;
mod infer;

pub use bond::Bond;
pub use config::{BondConfig, BondConfigError, DEFAULT_CUTOFF_FACTOR};
pub use infer::infer_bonds;
pub use periodic_table::{CovalentRadii, DEFAULT_FALLBACK_RADIUS};

// End of File
