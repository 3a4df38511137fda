use std::ops::Index;

/// Covalent bond order.
///
/// Aromatic and higher orders are not part of the supported grammar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BondOrder {
    /// Single bond
    #[default]
    Single,

    /// Double bond
    Double,

    /// Triple bond
    Triple,
}

impl BondOrder {
    /// Number of bonding electrons pairs this order contributes, used when
    /// summing an atom's occupied valence.
    pub fn weight(&self) -> u32 {
        match self {
            BondOrder::Single => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
        }
    }
}

/// An unordered pair of atom indices: the bond between A and B is the same
/// bond as the one between B and A, so the pair is stored sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Bond {
    pub data: [usize; 2],
}

impl Index<usize> for Bond {
    type Output = usize;

    /// Access one of the two atom indices in the bond.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 2`.
    fn index(&self, index: usize) -> &Self::Output {
        if index >= 2 {
            panic!("can not access atom n° {} in bond", index);
        }
        &self.data[index]
    }
}

impl Bond {
    /// Create a new bond between `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i == j`.
    pub fn new(i: usize, j: usize) -> Self {
        if i == j {
            panic!("can not have a bond between an atom and itself");
        }
        let (a, b) = if i < j { (i, j) } else { (j, i) };
        Bond { data: [a, b] }
    }

    /// The endpoint of this bond that is not `atom`.
    ///
    /// # Panics
    ///
    /// Panics if `atom` is not an endpoint of this bond.
    pub fn other(&self, atom: usize) -> usize {
        if self.data[0] == atom {
            self.data[1]
        } else if self.data[1] == atom {
            self.data[0]
        } else {
            panic!("atom {} is not part of this bond", atom);
        }
    }

    pub fn contains(&self, atom: usize) -> bool {
        self.data[0] == atom || self.data[1] == atom
    }
}
