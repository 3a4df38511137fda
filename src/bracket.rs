// SPDX-License-Identifier: BSD-3-Clause
//
// See LICENSE at the project root for full text.

use crate::error::ParseError;

/// The parsed interior of a `[...]` atom expression.
///
/// Grammar, left to right: optional isotope digits (discarded), an element
/// symbol (one uppercase letter, optionally followed by one lowercase
/// letter), an optional hydrogen count (`H` with an optional digit run, `H`
/// alone meaning 1), and an optional charge (a run of identical `+`/`-`
/// signs, or a single sign followed by digits). The element symbol is not
/// checked against a periodic table: `[Fe]` and `[Db]` parse fine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketAtom {
    pub symbol: String,
    pub hydrogens: u32,
    pub charge: i32,
}

impl BracketAtom {
    /// Parse the text between `[` and `]`. `offset` is the byte position of
    /// the interior's first character in the full input, so that errors
    /// point into the original string.
    pub fn parse(interior: &str, offset: usize) -> Result<Self, ParseError> {
        let bytes = interior.as_bytes();
        let mut i = 0;

        // isotope digits are recognized but not kept
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }

        if i >= bytes.len() {
            return Err(ParseError::UnrecognizedCharacter {
                ch: ']',
                pos: offset + bytes.len(),
            });
        }
        if !bytes[i].is_ascii_uppercase() {
            return Err(unrecognized(interior, offset, i));
        }
        let mut symbol = String::from(bytes[i] as char);
        i += 1;
        if i < bytes.len() && bytes[i].is_ascii_lowercase() {
            symbol.push(bytes[i] as char);
            i += 1;
        }

        let mut hydrogens = 0;
        if i < bytes.len() && bytes[i] == b'H' {
            let h_pos = offset + i;
            i += 1;
            let digits = read_digits(bytes, &mut i);
            hydrogens = match digits {
                "" => 1,
                run => run
                    .parse()
                    .map_err(|_| ParseError::InvalidHydrogenSpec { pos: h_pos })?,
            };
        }

        let mut charge = 0;
        if i < bytes.len() && is_sign(bytes[i]) {
            let sign_char = bytes[i];
            let sign: i32 = if sign_char == b'+' { 1 } else { -1 };
            let mut run = 1;
            i += 1;
            while i < bytes.len() && bytes[i] == sign_char {
                run += 1;
                i += 1;
            }

            let magnitude: i32 = if run == 1 && i < bytes.len() && bytes[i].is_ascii_digit() {
                let digit_pos = offset + i;
                read_digits(bytes, &mut i)
                    .parse()
                    .map_err(|_| ParseError::InvalidCharge { pos: digit_pos })?
            } else {
                run
            };

            // a second sign means + and - were mixed; digits after a
            // repeated-sign run have no readable magnitude
            if i < bytes.len() && (is_sign(bytes[i]) || bytes[i].is_ascii_digit()) {
                return Err(ParseError::InvalidCharge { pos: offset + i });
            }

            charge = sign * magnitude;
        }

        if i < bytes.len() {
            if bytes[i] == b'H' {
                return Err(ParseError::InvalidHydrogenSpec { pos: offset + i });
            }
            return Err(unrecognized(interior, offset, i));
        }

        Ok(BracketAtom {
            symbol,
            hydrogens,
            charge,
        })
    }
}

fn is_sign(byte: u8) -> bool {
    byte == b'+' || byte == b'-'
}

fn read_digits<'a>(bytes: &'a [u8], i: &mut usize) -> &'a str {
    let start = *i;
    while *i < bytes.len() && bytes[*i].is_ascii_digit() {
        *i += 1;
    }
    // the run is all ASCII digits
    std::str::from_utf8(&bytes[start..*i]).unwrap()
}

fn unrecognized(interior: &str, offset: usize, i: usize) -> ParseError {
    ParseError::UnrecognizedCharacter {
        ch: interior[i..].chars().next().unwrap(),
        pos: offset + i,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(interior: &str) -> Result<BracketAtom, ParseError> {
        BracketAtom::parse(interior, 0)
    }

    #[test]
    fn plain_element() {
        let atom = parse("Fe").unwrap();
        assert_eq!(atom.symbol, "Fe");
        assert_eq!(atom.hydrogens, 0);
        assert_eq!(atom.charge, 0);
    }

    #[test]
    fn ammonium() {
        let atom = parse("NH4+").unwrap();
        assert_eq!(atom.symbol, "N");
        assert_eq!(atom.hydrogens, 4);
        assert_eq!(atom.charge, 1);
    }

    #[test]
    fn hydroxide() {
        let atom = parse("OH-").unwrap();
        assert_eq!(atom.symbol, "O");
        assert_eq!(atom.hydrogens, 1);
        assert_eq!(atom.charge, -1);
    }

    #[test]
    fn bare_hydrogen_means_one() {
        let atom = parse("CH").unwrap();
        assert_eq!(atom.hydrogens, 1);
    }

    #[test]
    fn repeated_signs() {
        assert_eq!(parse("Fe+++").unwrap().charge, 3);
        assert_eq!(parse("O--").unwrap().charge, -2);
    }

    #[test]
    fn sign_with_magnitude() {
        assert_eq!(parse("Mn+2").unwrap().charge, 2);
        assert_eq!(parse("Ti-4").unwrap().charge, -4);
    }

    #[test]
    fn isotope_digits_are_discarded() {
        let atom = parse("13C").unwrap();
        assert_eq!(atom.symbol, "C");
        assert_eq!(atom.charge, 0);

        let atom = parse("2H").unwrap();
        assert_eq!(atom.symbol, "H");
    }

    #[test]
    fn hydrogen_as_element() {
        let atom = parse("H+").unwrap();
        assert_eq!(atom.symbol, "H");
        assert_eq!(atom.hydrogens, 0);
        assert_eq!(atom.charge, 1);
    }

    #[test]
    fn mixed_signs_rejected() {
        assert!(matches!(
            parse("C+-"),
            Err(ParseError::InvalidCharge { .. })
        ));
        assert!(matches!(
            parse("C-+2"),
            Err(ParseError::InvalidCharge { .. })
        ));
    }

    #[test]
    fn digits_after_repeated_signs_rejected() {
        assert!(matches!(
            parse("C++2"),
            Err(ParseError::InvalidCharge { .. })
        ));
    }

    #[test]
    fn misplaced_hydrogen_rejected() {
        assert!(matches!(
            parse("CH2H"),
            Err(ParseError::InvalidHydrogenSpec { .. })
        ));
        assert!(matches!(
            parse("C+H"),
            Err(ParseError::InvalidHydrogenSpec { .. })
        ));
    }

    #[test]
    fn lowercase_element_rejected() {
        assert!(matches!(
            parse("c"),
            Err(ParseError::UnrecognizedCharacter { ch: 'c', .. })
        ));
    }

    #[test]
    fn empty_interior_rejected() {
        assert!(matches!(
            parse(""),
            Err(ParseError::UnrecognizedCharacter { ch: ']', .. })
        ));
    }

    #[test]
    fn chirality_markup_rejected() {
        assert!(matches!(
            parse("C@"),
            Err(ParseError::UnrecognizedCharacter { ch: '@', .. })
        ));
    }

    #[test]
    fn error_positions_use_the_offset() {
        let err = BracketAtom::parse("C@", 10).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnrecognizedCharacter { ch: '@', pos: 11 }
        );
    }
}
