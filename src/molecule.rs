use std::collections::VecDeque;
use std::ops::Index;

use crate::{
    atom::Atom,
    bond::{Bond, BondOrder},
    connectivity::Connectivity,
};

/// A molecular graph produced by one parse: an arena of atoms addressed by
/// index, plus the bonds between them.
///
/// The public surface is read-only. Consumers (layout, drawing, hydrogen
/// completion callers) can traverse atoms and bonds but cannot alter the
/// topology; all mutation happens inside this crate while a parse is
/// running.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Molecule {
    /// Atoms in the molecule, in creation order
    atoms: Vec<Atom>,

    /// Connectivity of the molecule
    connect: Connectivity,
}

impl Index<usize> for Molecule {
    type Output = Atom;

    fn index(&self, index: usize) -> &Self::Output {
        &self.atoms[index]
    }
}

impl Molecule {
    pub fn size(&self) -> usize {
        self.atoms.len()
    }

    pub fn atom(&self, index: usize) -> &Atom {
        &self.atoms[index]
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// The root atom: the first atom created while parsing the outermost
    /// group. A successfully parsed molecule always has at least one atom.
    pub fn root(&self) -> usize {
        0
    }

    pub fn bond_count(&self) -> usize {
        self.connect.bonds().len()
    }

    pub fn bonds(&self) -> &[Bond] {
        self.connect.bonds()
    }

    pub fn bond_orders(&self) -> &[BondOrder] {
        self.connect.bond_orders()
    }

    pub fn bond_order(&self, i: usize, j: usize) -> Option<BondOrder> {
        self.connect.bond_order(i, j)
    }

    /// Indices into [`bonds`](Self::bonds) of the bonds incident to `atom`,
    /// in the order the bonds were created.
    pub fn bonds_of(&self, atom: usize) -> &[usize] {
        self.connect.bonds_of(atom)
    }

    pub fn neighbors(&self, atom: usize) -> impl Iterator<Item = usize> + '_ {
        self.connect.neighbors(atom)
    }

    /// Whether every atom is reachable from the root via bonds. Holds for
    /// every molecule this crate produces, since the grammar has no
    /// disconnection operator.
    pub fn is_connected(&self) -> bool {
        if self.atoms.is_empty() {
            return true;
        }

        let mut seen = vec![false; self.atoms.len()];
        let mut queue = VecDeque::from([self.root()]);
        seen[self.root()] = true;
        while let Some(atom) = queue.pop_front() {
            for neighbor in self.neighbors(atom) {
                if !seen[neighbor] {
                    seen[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }
        seen.iter().all(|&s| s)
    }

    pub(crate) fn atom_mut(&mut self, index: usize) -> &mut Atom {
        &mut self.atoms[index]
    }

    pub(crate) fn add_atom(&mut self, atom: Atom) -> usize {
        self.atoms.push(atom);
        self.atoms.len() - 1
    }

    pub(crate) fn add_bond(&mut self, i: usize, j: usize, bond_order: BondOrder) {
        debug_assert!(
            i < self.atoms.len() && j < self.atoms.len(),
            "out of bounds atomic index. We have {}, but the bond indices are {i} and {j}",
            self.atoms.len(),
        );
        self.connect.add_bond(i, j, bond_order);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_atom_chain() -> Molecule {
        let mut mol = Molecule::default();
        mol.add_atom(Atom::new("C"));
        mol.add_atom(Atom::new("C"));
        mol.add_atom(Atom::new("O"));
        mol.add_bond(0, 1, BondOrder::Single);
        mol.add_bond(1, 2, BondOrder::Single);
        mol
    }

    #[test]
    fn indexing_and_size() {
        let mol = three_atom_chain();
        assert_eq!(mol.size(), 3);
        assert_eq!(mol[0].symbol, "C");
        assert_eq!(mol[2].symbol, "O");
        assert_eq!(mol.atom(2), &mol[2]);
    }

    #[test]
    fn chain_is_connected() {
        let mol = three_atom_chain();
        assert!(mol.is_connected());
    }

    #[test]
    fn lone_atom_is_not_reachable() {
        let mut mol = three_atom_chain();
        mol.add_atom(Atom::new("N"));
        assert!(!mol.is_connected());
    }

    #[test]
    fn empty_molecule_counts_as_connected() {
        assert!(Molecule::default().is_connected());
    }

    #[test]
    fn neighbor_traversal() {
        let mol = three_atom_chain();
        let neighbors: Vec<usize> = mol.neighbors(1).collect();
        assert_eq!(neighbors, vec![0, 2]);
        assert_eq!(mol.bonds_of(0), &[0][..]);
        assert_eq!(mol.bond_order(0, 1), Some(BondOrder::Single));
        assert_eq!(mol.bond_order(0, 2), None);
    }
}
