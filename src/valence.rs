use phf::{phf_map, Map};

/// Allowed total-bond counts per element, lowest first.
///
/// Only the handful of elements the drawing pipeline cares about; the
/// parser never consults this table.
static VALENCES: Map<&'static str, &'static [u32]> = phf_map! {
    "H" => &[1],
    "B" => &[3],
    "C" => &[4],
    "N" => &[3, 5],
    "O" => &[2],
    "F" => &[1],
    "Na" => &[1],
    "Mg" => &[1],
    "P" => &[3, 5],
    "S" => &[2, 4, 6],
    "Cl" => &[1],
    "Br" => &[1],
    "I" => &[1],
};

/// The allowed total-bond counts for `symbol`, or `None` for elements the
/// table does not cover.
pub fn allowed_valences(symbol: &str) -> Option<&'static [u32]> {
    VALENCES.get(symbol).copied()
}

/// How many hydrogens complete an atom of `symbol` that already uses
/// `bonded` valence: the distance to the first allowed total that fits,
/// zero when the atom already exceeds every allowed total.
pub fn implicit_hydrogen_count(symbol: &str, bonded: u32) -> Option<u32> {
    let allowed = allowed_valences(symbol)?;
    Some(
        allowed
            .iter()
            .find(|&&total| bonded <= total)
            .map_or(0, |&total| total - bonded),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_symbols() {
        assert_eq!(allowed_valences("C"), Some(&[4][..]));
        assert_eq!(allowed_valences("S"), Some(&[2, 4, 6][..]));
        assert_eq!(allowed_valences("Xx"), None);
    }

    #[test]
    fn first_fitting_total_wins() {
        assert_eq!(implicit_hydrogen_count("C", 1), Some(3));
        assert_eq!(implicit_hydrogen_count("C", 4), Some(0));
        // nitrogen jumps to its next allowed total
        assert_eq!(implicit_hydrogen_count("N", 4), Some(1));
        assert_eq!(implicit_hydrogen_count("S", 3), Some(1));
    }

    #[test]
    fn oversaturated_atoms_get_nothing() {
        assert_eq!(implicit_hydrogen_count("O", 3), Some(0));
        assert_eq!(implicit_hydrogen_count("C", 7), Some(0));
    }

    #[test]
    fn unknown_symbols_are_reported() {
        assert_eq!(implicit_hydrogen_count("Fe", 2), None);
    }
}
