use std::collections::HashMap;

/// An open ring label: where it was opened and the atoms accumulated since.
///
/// `atoms[0]` is the atom that opened the label; every atom created while
/// the label stays open is appended, the closing atom included.
#[derive(Debug)]
struct RingEntry {
    pos: usize,
    atoms: Vec<usize>,
}

/// Transient ring-closure bookkeeping for one parse.
///
/// A single registry is shared by every group frame of a parse, because a
/// label may open in one branch and close in a sibling or ancestor branch.
/// It lives on the stack of the parse call and never outlives it.
#[derive(Debug, Default)]
pub struct RingRegistry {
    open: HashMap<u32, RingEntry>,
    next_ring_id: usize,
}

impl RingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, label: u32) -> bool {
        self.open.contains_key(&label)
    }

    /// Open `label` with `atom` as the pending closure partner. `pos` is the
    /// position of the label token, kept for the unclosed-label error.
    pub fn register(&mut self, label: u32, atom: usize, pos: usize) {
        self.open.insert(
            label,
            RingEntry {
                pos,
                atoms: vec![atom],
            },
        );
    }

    /// Record a newly created atom in every currently open entry.
    pub fn note_atom(&mut self, atom: usize) {
        for entry in self.open.values_mut() {
            entry.atoms.push(atom);
        }
    }

    /// Close `label`, handing back a fresh ring id and the accumulated
    /// member atoms. Returns `None` if the label is not open.
    pub fn resolve(&mut self, label: u32) -> Option<(usize, Vec<usize>)> {
        let entry = self.open.remove(&label)?;
        let ring_id = self.next_ring_id;
        self.next_ring_id += 1;
        Some((ring_id, entry.atoms))
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// The lowest still-open label and the position where it was opened.
    /// Used to report an unclosed ring at the end of a parse.
    pub fn first_open(&self) -> Option<(u32, usize)> {
        self.open
            .iter()
            .min_by_key(|(label, _)| **label)
            .map(|(label, entry)| (*label, entry.pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_accumulate_resolve() {
        let mut rings = RingRegistry::new();
        rings.register(1, 0, 1);
        rings.note_atom(1);
        rings.note_atom(2);

        assert!(rings.is_open(1));
        let (ring_id, members) = rings.resolve(1).unwrap();
        assert_eq!(ring_id, 0);
        assert_eq!(members, vec![0, 1, 2]);
        assert!(rings.is_empty());
    }

    #[test]
    fn resolve_unknown_label() {
        let mut rings = RingRegistry::new();
        assert!(rings.resolve(4).is_none());
    }

    #[test]
    fn note_atom_feeds_every_open_label() {
        let mut rings = RingRegistry::new();
        rings.register(1, 0, 1);
        rings.register(2, 0, 2);
        rings.note_atom(1);

        let (_, members_one) = rings.resolve(1).unwrap();
        let (_, members_two) = rings.resolve(2).unwrap();
        assert_eq!(members_one, vec![0, 1]);
        assert_eq!(members_two, vec![0, 1]);
    }

    #[test]
    fn ring_ids_are_sequential() {
        let mut rings = RingRegistry::new();
        rings.register(1, 0, 1);
        rings.register(5, 1, 3);
        let (first, _) = rings.resolve(5).unwrap();
        let (second, _) = rings.resolve(1).unwrap();
        assert_eq!((first, second), (0, 1));
    }

    #[test]
    fn first_open_reports_lowest_label() {
        let mut rings = RingRegistry::new();
        rings.register(7, 0, 4);
        rings.register(2, 1, 9);
        assert_eq!(rings.first_open(), Some((2, 9)));

        rings.resolve(2).unwrap();
        assert_eq!(rings.first_open(), Some((7, 4)));
    }
}
