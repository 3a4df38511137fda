use log::warn;

use crate::atom::Atom;
use crate::bond::BondOrder;
use crate::molecule::Molecule;
use crate::valence::implicit_hydrogen_count;

/// Complete every atom of `mol` up to its first fitting allowed valence by
/// attaching hydrogen child atoms.
///
/// This is a separate, caller-invoked pass: `parse_smiles` never adds
/// hydrogens to organic-subset atoms on its own. The decision is purely
/// table-driven from the occupied bond weight; explicit hydrogens already
/// attached by a bracket atom count toward it, so they are never doubled
/// up. Elements missing from the valence table are left alone with a
/// warning.
pub fn add_implicit_hydrogens(mol: &mut Molecule) {
    for index in 0..mol.size() {
        let occupied: u32 = mol
            .bonds_of(index)
            .iter()
            .map(|&bond_index| mol.bond_orders()[bond_index].weight())
            .sum();

        let Some(missing) = implicit_hydrogen_count(&mol[index].symbol, occupied) else {
            warn!(
                "no valence entry for '{}', leaving atom {} as written",
                mol[index].symbol, index
            );
            continue;
        };

        for _ in 0..missing {
            let hydrogen = mol.add_atom(Atom::new("H"));
            mol.add_bond(index, hydrogen, BondOrder::Single);
        }
    }
}
