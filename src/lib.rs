pub mod atom;
pub mod bond;
pub mod bracket;
pub mod connectivity;
pub mod error;
pub mod hydrogens;
pub mod molecule;
pub mod parser;
pub mod rings;
pub mod valence;

pub use atom::Atom;
pub use bond::{Bond, BondOrder};
pub use error::ParseError;
pub use molecule::Molecule;
pub use parser::parse_smiles;
