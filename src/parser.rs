// SPDX-License-Identifier: BSD-3-Clause
//
// See LICENSE at the project root for full text.

use crate::atom::Atom;
use crate::bond::BondOrder;
use crate::bracket::BracketAtom;
use crate::error::ParseError;
use crate::molecule::Molecule;
use crate::rings::RingRegistry;

/// One group of the input: the outermost chain, or a `(...)` branch.
///
/// Frames live on an explicit stack rather than the call stack, so the
/// nesting depth of the input cannot overflow anything but the heap.
struct GroupFrame {
    /// Most recently completed atom in this group
    current: Option<usize>,

    /// Bond order the next atom in this group will be attached with
    pending: BondOrder,

    /// Atom in the enclosing group that opened this branch
    parent: Option<usize>,

    /// True only for the outermost group
    main: bool,

    /// Whether any atom was created in this group
    produced: bool,

    /// Position of the `(` that opened this frame
    open_pos: usize,
}

impl GroupFrame {
    fn root() -> Self {
        GroupFrame {
            current: None,
            pending: BondOrder::Single,
            parent: None,
            main: true,
            produced: false,
            open_pos: 0,
        }
    }

    fn branch(parent: usize, open_pos: usize) -> Self {
        GroupFrame {
            current: None,
            pending: BondOrder::Single,
            parent: Some(parent),
            main: false,
            produced: false,
            open_pos,
        }
    }
}

/// Parse a SMILES string into a [`Molecule`].
///
/// Supported grammar: the organic subset (B, C, N, O, P, S, F, Cl, Br, I),
/// bracket atoms with charge and explicit hydrogen counts, `(...)` branches,
/// ring-closure labels (single digit or `%` followed by digits), and the
/// bond markers `=` and `#`. Aromatic symbols, chirality, directional
/// bonds, and the `.` disconnection operator are rejected.
///
/// The returned molecule is fully owned by the caller and is always
/// connected. Two calls on the same input produce structurally identical,
/// independent molecules: the parser keeps no state between calls.
pub fn parse_smiles(input: &str) -> Result<Molecule, ParseError> {
    let s = input.trim();
    let bytes = s.as_bytes();

    let mut mol = Molecule::default();
    let mut rings = RingRegistry::new();
    let mut stack = vec![GroupFrame::root()];
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'(' => {
                let frame = stack.last().expect("the root frame is never popped");
                let Some(parent) = frame.current else {
                    return Err(ParseError::MalformedGroup { pos: i });
                };
                stack.push(GroupFrame::branch(parent, i));
                i += 1;
            }
            b')' => {
                if stack.len() == 1 {
                    return Err(ParseError::UnrecognizedCharacter { ch: ')', pos: i });
                }
                let frame = stack.pop().expect("the root frame is never popped");
                if !frame.produced {
                    return Err(ParseError::MalformedGroup { pos: frame.open_pos });
                }
                i += 1;
            }
            b'=' => {
                let frame = stack.last_mut().expect("the root frame is never popped");
                frame.pending = BondOrder::Double;
                i += 1;
            }
            b'#' => {
                let frame = stack.last_mut().expect("the root frame is never popped");
                frame.pending = BondOrder::Triple;
                i += 1;
            }
            b'[' => {
                let Some(end) = s[i + 1..].find(']').map(|off| i + 1 + off) else {
                    return Err(ParseError::UnterminatedBracketAtom { pos: i });
                };
                let bracket = BracketAtom::parse(&s[i + 1..end], i + 1)?;

                let frame = stack.last_mut().expect("the root frame is never popped");
                let atom = Atom::with_charge(bracket.symbol, bracket.charge);
                let index = place_atom(&mut mol, &mut rings, frame, atom);

                // explicit hydrogens become real child atoms; they never
                // join open ring entries and never become the current atom
                for _ in 0..bracket.hydrogens {
                    let hydrogen = mol.add_atom(Atom::new("H"));
                    mol.add_bond(index, hydrogen, BondOrder::Single);
                }

                i = end + 1;
            }
            byte if byte.is_ascii_digit() || byte == b'%' => {
                let Some((label, token_len)) = read_ring_label(s, i) else {
                    return Err(ParseError::UnrecognizedCharacter { ch: '%', pos: i });
                };
                let frame = stack.last_mut().expect("the root frame is never popped");
                let Some(current) = frame.current else {
                    return Err(ParseError::InvalidRingClosure { label, pos: i });
                };

                if rings.is_open(label) {
                    let (ring_id, members) = rings.resolve(label).expect("label is open");
                    let opener = members[0];
                    if members.len() < 3 || opener == current {
                        return Err(ParseError::InvalidRingClosure { label, pos: i });
                    }
                    // the closure bond is always single; a pending `=`/`#`
                    // is left for the next atom
                    mol.add_bond(opener, current, BondOrder::Single);
                    for member in members {
                        mol.atom_mut(member).rings.insert(ring_id);
                    }
                } else {
                    rings.register(label, current, i);
                }

                i += token_len;
            }
            _ => {
                let Some(symbol) = match_organic(bytes, i) else {
                    return Err(ParseError::UnrecognizedCharacter {
                        ch: s[i..].chars().next().expect("i is on a char boundary"),
                        pos: i,
                    });
                };
                let frame = stack.last_mut().expect("the root frame is never popped");
                place_atom(&mut mol, &mut rings, frame, Atom::new(symbol));
                i += symbol.len();
            }
        }
    }

    if stack.len() > 1 {
        return Err(ParseError::UnterminatedBranch {
            pos: stack[1].open_pos,
        });
    }
    if !stack[0].produced {
        return Err(ParseError::EmptyMolecule);
    }
    if let Some((label, pos)) = rings.first_open() {
        return Err(ParseError::InvalidRingClosure { label, pos });
    }

    Ok(mol)
}

/// Create an atom in the current group and wire it up: to the group's
/// current atom if there is one, otherwise to the parent atom that opened
/// the branch. The first atom of the whole input has neither; a bond marker
/// before it is allowed and goes unused.
fn place_atom(
    mol: &mut Molecule,
    rings: &mut RingRegistry,
    frame: &mut GroupFrame,
    mut atom: Atom,
) -> usize {
    atom.main_chain = frame.main;
    let index = mol.add_atom(atom);
    rings.note_atom(index);

    match (frame.current, frame.parent) {
        (Some(previous), _) => mol.add_bond(previous, index, frame.pending),
        (None, Some(parent)) => mol.add_bond(parent, index, frame.pending),
        (None, None) => {}
    }

    frame.pending = BondOrder::Single;
    frame.current = Some(index);
    frame.produced = true;
    index
}

/// Read a ring-closure label at position `i`: a single digit, or `%`
/// followed by a digit run. Returns the label and the token length, or
/// `None` when `%` is not followed by a readable number.
fn read_ring_label(s: &str, i: usize) -> Option<(u32, usize)> {
    let bytes = s.as_bytes();
    if bytes[i] != b'%' {
        return Some(((bytes[i] - b'0') as u32, 1));
    }

    let mut j = i + 1;
    while j < bytes.len() && bytes[j].is_ascii_digit() {
        j += 1;
    }
    let label = s[i + 1..j].parse().ok()?;
    Some((label, j - i))
}

/// Match an organic-subset symbol at position `i`, longest first so that
/// `Br` and `Cl` are not read as boron and carbon.
fn match_organic(bytes: &[u8], i: usize) -> Option<&'static str> {
    match bytes[i] {
        b'B' if bytes.get(i + 1) == Some(&b'r') => Some("Br"),
        b'C' if bytes.get(i + 1) == Some(&b'l') => Some("Cl"),
        b'B' => Some("B"),
        b'C' => Some("C"),
        b'N' => Some("N"),
        b'O' => Some("O"),
        b'P' => Some("P"),
        b'S' => Some("S"),
        b'F' => Some("F"),
        b'I' => Some("I"),
        _ => None,
    }
}
