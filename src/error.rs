use thiserror::Error;

/// Errors produced while parsing a SMILES string.
///
/// Positions are byte offsets into the trimmed input. Every error is
/// terminal: no partial molecule is ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A branch opened with no preceding atom, or a group produced no atoms.
    #[error("malformed group at position {pos}")]
    MalformedGroup { pos: usize },

    #[error("unterminated branch: `(` at position {pos} has no matching `)`")]
    UnterminatedBranch { pos: usize },

    #[error("unterminated bracket atom: `[` at position {pos} has no matching `]`")]
    UnterminatedBracketAtom { pos: usize },

    /// A ring label appeared before any atom, closed a cycle of fewer than
    /// three atoms, or was still open when the input ended.
    #[error("invalid ring closure {label} at position {pos}")]
    InvalidRingClosure { label: u32, pos: usize },

    #[error("invalid charge in bracket atom at position {pos}")]
    InvalidCharge { pos: usize },

    #[error("hydrogen count at a disallowed position in bracket atom at position {pos}")]
    InvalidHydrogenSpec { pos: usize },

    #[error("unrecognized character `{ch}` at position {pos}")]
    UnrecognizedCharacter { ch: char, pos: usize },

    #[error("input contains no atoms")]
    EmptyMolecule,
}
