//! Password strength scoring along the lines of the OWASP password guidance.

use std::fmt;

use regex::RegexSet;

use crate::constants::{COMMON_PASSWORDS, MAX_PASSWORD_LEN, MIN_PASSWORD_LEN};

lazy_static! {
    static ref COMMON_PATTERNS: RegexSet = RegexSet::new([
        r"^123+",
        r"(?i)password",
        r"(?i)qwerty",
        r"(?i)abc+",
        r"111+",
        r"000+",
        r"(?i)admin",
        r"(?i)letmein",
        r"(?i)welcome",
        r"(?i)monkey",
        r"(?i)dragon",
    ])
    .expect("common password patterns are valid");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLevel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    fn from_score(score: u32) -> Self {
        match score {
            0..=39 => StrengthLevel::Weak,
            40..=59 => StrengthLevel::Fair,
            60..=79 => StrengthLevel::Good,
            _ => StrengthLevel::Strong,
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Good => "Good",
            StrengthLevel::Strong => "Strong",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthChecks {
    pub min_length: bool,
    pub max_length: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_number: bool,
    pub has_special: bool,
    pub no_common_patterns: bool,
    pub no_sequential: bool,
    pub no_repeating: bool,
    pub not_common: bool,
}

impl StrengthChecks {
    /// Number of character classes present.
    pub fn diversity(&self) -> usize {
        [
            self.has_uppercase,
            self.has_lowercase,
            self.has_number,
            self.has_special,
        ]
        .iter()
        .filter(|&&passed| passed)
        .count()
    }

    /// Checklist lines in display order.
    pub fn items(&self) -> [(&'static str, bool); 10] {
        [
            ("At least 8 characters", self.min_length),
            ("Maximum 128 characters", self.max_length),
            ("Contains uppercase letters (A-Z)", self.has_uppercase),
            ("Contains lowercase letters (a-z)", self.has_lowercase),
            ("Contains numbers (0-9)", self.has_number),
            ("Contains special characters (!@#$%)", self.has_special),
            ("Not a commonly used password", self.not_common),
            (
                "No common patterns (123, abc, etc.)",
                self.no_common_patterns,
            ),
            ("No sequential characters", self.no_sequential),
            ("No excessive repeating characters", self.no_repeating),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    pub checks: StrengthChecks,
    pub score: u32,
    pub level: StrengthLevel,
}

/// Scores `password`. Returns `None` for an empty password.
pub fn analyze(password: &str) -> Option<StrengthReport> {
    if password.is_empty() {
        return None;
    }

    let chars: Vec<char> = password.chars().collect();
    let len = chars.len();

    let checks = StrengthChecks {
        min_length: len >= MIN_PASSWORD_LEN,
        max_length: len <= MAX_PASSWORD_LEN,
        has_uppercase: chars.iter().any(|c| c.is_ascii_uppercase()),
        has_lowercase: chars.iter().any(|c| c.is_ascii_lowercase()),
        has_number: chars.iter().any(|c| c.is_ascii_digit()),
        has_special: chars.iter().any(|c| !c.is_ascii_alphanumeric()),
        no_common_patterns: !COMMON_PATTERNS.is_match(password),
        no_sequential: !has_sequential_run(&chars),
        no_repeating: !has_repeating_run(&chars),
        not_common: !is_common_password(password),
    };

    let score = score(&checks, len);

    Some(StrengthReport {
        checks,
        score,
        level: StrengthLevel::from_score(score),
    })
}

fn score(checks: &StrengthChecks, len: usize) -> u32 {
    let mut score = 0;

    if checks.min_length {
        score += 15;
    }
    if checks.max_length {
        score += 5;
    }

    score += match checks.diversity() {
        3.. => 30,
        2 => 15,
        _ => 0,
    };

    for (threshold, bonus) in [(12, 15), (16, 10), (20, 10)] {
        if len >= threshold {
            score += bonus;
        }
    }

    for (passed, bonus) in [
        (checks.no_common_patterns, 10),
        (checks.no_sequential, 10),
        (checks.no_repeating, 10),
        (checks.not_common, 15),
    ] {
        if passed {
            score += bonus;
        }
    }

    score
}

fn has_sequential_run(chars: &[char]) -> bool {
    chars.windows(3).any(|w| {
        let (a, b, c) = (w[0] as u32, w[1] as u32, w[2] as u32);
        (b == a + 1 && c == b + 1) || (b + 1 == a && c + 1 == b)
    })
}

fn has_repeating_run(chars: &[char]) -> bool {
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

fn is_common_password(password: &str) -> bool {
    let lowered = password.to_lowercase();
    COMMON_PASSWORDS
        .iter()
        .any(|common| lowered.contains(common))
}
