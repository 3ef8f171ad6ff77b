pub const FIRST_CHAR: u8 = b'A';
pub const LAST_CHAR: u8 = b'Z';
pub const ALPHABET_LEN: u8 = LAST_CHAR - FIRST_CHAR + 1;

pub const MESSAGE_PROMPT: &str = "message encoded:";
pub const SHIFT_PROMPT: &str = "shift number:";
pub const PASSWORD_PROMPT: &str = "password:";

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 128;

pub const COMMON_PASSWORDS: [&str; 20] = [
    "password", "123456", "12345678", "qwerty", "abc123", "monkey", "letmein", "trustno1",
    "dragon", "baseball", "iloveyou", "master", "sunshine", "ashley", "bailey", "shadow",
    "superman", "qazwsx", "michael", "football",
];
