use crate::character::{AllowedCharacterType, RequiredCharacterType};

use AllowedCharacterType::*;
use RequiredCharacterType::*;

pub const MINIMUM_PASSWORD_LENGTH: usize = 8;
pub const MAXIMUM_PASSWORD_LENGTH: usize = 256;

/// Character and length rules applied to user-supplied identifiers.
///
/// A `None` set is "unset": nothing is allowed, or nothing is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicySettings {
    pub login_characters: Option<Vec<AllowedCharacterType>>,
    pub custom_url_characters: Option<Vec<AllowedCharacterType>>,
    pub schedule_name_characters: Option<Vec<AllowedCharacterType>>,
    pub password_characters: Option<Vec<AllowedCharacterType>>,
    pub password_required_characters: Option<Vec<RequiredCharacterType>>,
    pub password_min_length: usize,
    pub password_max_length: usize,
}

impl Default for PolicySettings {
    fn default() -> Self {
        Self {
            login_characters: Some(vec![SmallLetters, BigLetters, Digits]),
            custom_url_characters: Some(vec![SmallLetters, BigLetters, Digits]),
            schedule_name_characters: Some(vec![SmallLetters, BigLetters, Digits]),
            password_characters: Some(vec![SmallLetters, BigLetters, Digits, Symbols, Spaces]),
            password_required_characters: Some(vec![SmallLetter, BigLetter, Digit, Symbol]),
            password_min_length: MINIMUM_PASSWORD_LENGTH,
            password_max_length: MAXIMUM_PASSWORD_LENGTH,
        }
    }
}
