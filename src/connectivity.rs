use crate::bond::{Bond, BondOrder};

/// Bond storage for a molecule: an edge list in insertion order, the bond
/// order of each edge, and per-atom incidence lists.
///
/// Atoms themselves live in the owning molecule's arena; this container only
/// deals in indices, so there are no cross-references between atom and bond
/// objects.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Connectivity {
    /// Bonds, in the order they were added
    bonds: Vec<Bond>,

    /// Bond order of `bonds[i]`
    bond_orders: Vec<BondOrder>,

    /// For each atom index, the indices into `bonds` of its incident bonds,
    /// in the order they were added
    incidence: Vec<Vec<usize>>,
}

impl Connectivity {
    /// Add a bond between atoms `i` and `j`. Adding a bond that already
    /// exists is a no-op: the first insertion wins, order included.
    pub fn add_bond(&mut self, i: usize, j: usize, bond_order: BondOrder) {
        let bond = Bond::new(i, j);
        if self.bonds.contains(&bond) {
            return;
        }

        let bond_index = self.bonds.len();
        self.bonds.push(bond);
        self.bond_orders.push(bond_order);

        let biggest = i.max(j);
        if self.incidence.len() <= biggest {
            self.incidence.resize_with(biggest + 1, Vec::new);
        }
        self.incidence[i].push(bond_index);
        self.incidence[j].push(bond_index);

        debug_assert_eq!(self.bond_orders.len(), self.bonds.len());
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn bond_orders(&self) -> &[BondOrder] {
        &self.bond_orders
    }

    /// Get the bond order of the bond between `i` and `j`, if such a bond
    /// exists.
    pub fn bond_order(&self, i: usize, j: usize) -> Option<BondOrder> {
        let bond = Bond::new(i, j);
        let pos = self.bonds.iter().position(|b| *b == bond)?;
        Some(self.bond_orders[pos])
    }

    /// Indices into [`bonds`](Self::bonds) of the bonds incident to `atom`,
    /// in insertion order.
    pub fn bonds_of(&self, atom: usize) -> &[usize] {
        self.incidence.get(atom).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Atoms bonded to `atom`, in bond insertion order.
    pub fn neighbors(&self, atom: usize) -> impl Iterator<Item = usize> + '_ {
        self.bonds_of(atom)
            .iter()
            .map(move |&bond_index| self.bonds[bond_index].other(atom))
    }
}
