use crate::constants::{ALPHABET_LEN, FIRST_CHAR};
use crate::structs::Shift;

/// Rotates every ASCII letter of `text` by `shift` places within A-Z.
///
/// The text is uppercased first, so the output alphabet is always A-Z. Anything that is
/// not an ASCII letter (digits, punctuation, whitespace, non-ASCII) is copied as is.
pub fn caesar_cipher(text: &str, shift: i64) -> String {
    rotate(text, Shift::new(shift))
}

pub fn rotate(text: &str, shift: Shift) -> String {
    let shift = shift.offset();

    text.chars()
        .map(|c| {
            let c = c.to_ascii_uppercase();
            if c.is_ascii_uppercase() {
                let position = c as u8 - FIRST_CHAR;
                ((position + shift) % ALPHABET_LEN + FIRST_CHAR) as char
            } else {
                c
            }
        })
        .collect()
}
