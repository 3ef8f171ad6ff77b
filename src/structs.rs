use std::str::FromStr;

use crate::constants::ALPHABET_LEN;
use crate::error::CipherError;

/// A rotation key, kept reduced into `0..26`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Shift {
    offset: u8,
}

impl Shift {
    pub fn new(shift: i64) -> Self {
        Shift {
            offset: shift.rem_euclid(i64::from(ALPHABET_LEN)) as u8,
        }
    }

    pub fn offset(&self) -> u8 {
        self.offset
    }

    /// The shift that undoes this one.
    pub fn inverse(&self) -> Self {
        Shift {
            offset: (ALPHABET_LEN - self.offset) % ALPHABET_LEN,
        }
    }
}

/// Parses a decimal integer of any magnitude: optional sign, digits, and single
/// underscores between digits, with surrounding whitespace ignored.
impl FromStr for Shift {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CipherError::InvalidShiftFormat {
            input: s.to_string(),
        };

        let trimmed = s.trim();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') {
            return Err(invalid());
        }

        let modulus = u32::from(ALPHABET_LEN);
        let mut remainder = 0u32;
        let mut previous_underscore = false;

        for b in digits.bytes() {
            match b {
                b'0'..=b'9' => {
                    remainder = (remainder * 10 + u32::from(b - b'0')) % modulus;
                    previous_underscore = false;
                }
                b'_' if !previous_underscore => previous_underscore = true,
                _ => return Err(invalid()),
            }
        }

        let shift = Shift {
            offset: remainder as u8,
        };

        Ok(if negative { shift.inverse() } else { shift })
    }
}

/// A Caesar cipher bound to one key.
#[derive(Debug, Clone, Copy)]
pub struct Caesar {
    shift: Shift,
}

impl Caesar {
    pub fn new(shift: Shift) -> Self {
        Caesar { shift }
    }

    pub fn shift(&self) -> Shift {
        self.shift
    }
}
