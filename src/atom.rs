// SPDX-License-Identifier: BSD-3-Clause
//
// See LICENSE at the project root for full text.

use std::collections::BTreeSet;

/// A single atom in a molecular graph.
///
/// Atoms are addressed by their stable index in the owning
/// [`Molecule`](crate::molecule::Molecule); they hold no references to their
/// bonds. Once a parse returns, atoms are never mutated again. Render-time
/// state (positions, traversal flags) belongs in the consumer's own side
/// table, keyed by atom index.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Atom {
    /// Element symbol, one or two letters (`"C"`, `"Cl"`, `"Fe"`).
    pub symbol: String,

    /// Formal charge. Zero unless a bracket atom specified one.
    pub charge: i32,

    /// True if the atom was created while scanning the outermost group.
    pub main_chain: bool,

    /// Ids of the rings this atom is a member of. Ring ids are assigned
    /// sequentially in closure order during a parse; they are not the
    /// ring-closure labels, which may be reused.
    pub rings: BTreeSet<usize>,
}

impl Atom {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            charge: 0,
            main_chain: false,
            rings: BTreeSet::new(),
        }
    }

    pub fn with_charge(symbol: impl Into<String>, charge: i32) -> Self {
        Self {
            charge,
            ..Self::new(symbol)
        }
    }

    pub fn is_hydrogen(&self) -> bool {
        self.symbol == "H"
    }
}
