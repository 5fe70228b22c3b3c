//! # Character policy
//!
//! Classifies strings against sets of character classes. Fields such as
//! logins, custom URLs, schedule names and passwords each carry their own
//! allowed set; passwords also carry a required set.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use serde::{Deserialize, Serialize};

/// Character classes a field may consist of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AllowedCharacterType {
    SmallLetters,
    BigLetters,
    Digits,
    Symbols,
    Spaces,
}

/// Character classes a field must contain at least once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequiredCharacterType {
    SmallLetter,
    BigLetter,
    Digit,
    Symbol,
}

/// Tests one character against a Unicode general category pattern.
fn in_class(c: char, cell: &'static OnceLock<Regex>, pattern: &str) -> bool {
    let regex = cell.get_or_init(|| Regex::new(pattern).expect("character class pattern"));
    let mut buf = [0; 4];
    regex.is_match(c.encode_utf8(&mut buf))
}

fn is_small_letter(c: char) -> bool {
    static SMALL: OnceLock<Regex> = OnceLock::new();
    in_class(c, &SMALL, r"^\p{Ll}$")
}

fn is_big_letter(c: char) -> bool {
    static BIG: OnceLock<Regex> = OnceLock::new();
    in_class(c, &BIG, r"^\p{Lu}$")
}

/// Decimal digits only; fractions, superscripts and numerals are not digits.
fn is_digit(c: char) -> bool {
    static DIGIT: OnceLock<Regex> = OnceLock::new();
    in_class(c, &DIGIT, r"^\p{Nd}$")
}

/// Symbols and punctuation. Combining marks and format characters are neither.
fn is_symbol(c: char) -> bool {
    static SYMBOL: OnceLock<Regex> = OnceLock::new();
    in_class(c, &SYMBOL, r"^[\p{S}\p{P}]$")
}

impl AllowedCharacterType {
    pub fn matches(self, c: char) -> bool {
        match self {
            AllowedCharacterType::SmallLetters => is_small_letter(c),
            AllowedCharacterType::BigLetters => is_big_letter(c),
            AllowedCharacterType::Digits => is_digit(c),
            AllowedCharacterType::Symbols => is_symbol(c),
            AllowedCharacterType::Spaces => c == ' ',
        }
    }
}

impl RequiredCharacterType {
    pub fn matches(self, c: char) -> bool {
        match self {
            RequiredCharacterType::SmallLetter => is_small_letter(c),
            RequiredCharacterType::BigLetter => is_big_letter(c),
            RequiredCharacterType::Digit => is_digit(c),
            RequiredCharacterType::Symbol => is_symbol(c),
        }
    }
}

/// Returns true when every character of `value` belongs to one of the
/// classes in `allowed`. An unset policy allows nothing, not even the
/// empty string.
pub fn allowed(value: &str, allowed: Option<&[AllowedCharacterType]>) -> bool {
    let Some(allowed) = allowed else {
        return false;
    };

    value
        .chars()
        .all(|c| allowed.iter().any(|class| class.matches(c)))
}

/// Returns true when `value` contains at least one character of every
/// class in `required`. An unset policy requires nothing.
pub fn required(value: &str, required: Option<&[RequiredCharacterType]>) -> bool {
    let Some(required) = required else {
        return true;
    };

    required
        .iter()
        .all(|class| value.chars().any(|c| class.matches(c)))
}

/// Joins class names the way they appear in error messages
pub fn describe<T: fmt::Debug>(classes: Option<&[T]>) -> String {
    classes
        .unwrap_or_default()
        .iter()
        .map(|class| format!("{:?}", class))
        .collect::<Vec<_>>()
        .join(", ")
}

impl FromStr for AllowedCharacterType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "smallletters" | "lowercase" => Ok(AllowedCharacterType::SmallLetters),
            "bigletters" | "uppercase" => Ok(AllowedCharacterType::BigLetters),
            "digits" => Ok(AllowedCharacterType::Digits),
            "symbols" => Ok(AllowedCharacterType::Symbols),
            "spaces" => Ok(AllowedCharacterType::Spaces),
            other => Err(format!("Unknown character class: {}", other)),
        }
    }
}

impl FromStr for RequiredCharacterType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "smallletter" | "lowercase" => Ok(RequiredCharacterType::SmallLetter),
            "bigletter" | "uppercase" => Ok(RequiredCharacterType::BigLetter),
            "digit" => Ok(RequiredCharacterType::Digit),
            "symbol" => Ok(RequiredCharacterType::Symbol),
            other => Err(format!("Unknown character class: {}", other)),
        }
    }
}
