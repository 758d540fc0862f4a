// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use serde::Serialize;

/// An undirected bond between two atom ids.  The smaller id is always stored first, so two bonds
/// over the same atoms compare equal whichever way round they were created.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Bond {
    atom1: u64,
    atom2: u64,
}

impl Bond {
    pub fn new(a: u64, b: u64) -> Self {
        if a <= b {
            Self { atom1: a, atom2: b }
        } else {
            Self { atom1: b, atom2: a }
        }
    }

    pub fn ids(&self) -> (u64, u64) {
        (self.atom1, self.atom2)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.atom1 == id || self.atom2 == id
    }
}


// End of File
