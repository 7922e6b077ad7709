//! Character pools and per-class draw counts

use std::ops::RangeInclusive;

pub const LETTERS: [char; 52] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L',
    'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

pub const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

pub const SYMBOLS: [char; 9] = ['!', '#', '$', '%', '&', '(', ')', '*', '+'];

pub const LETTER_COUNT: RangeInclusive<usize> = 8..=10;
pub const SYMBOL_COUNT: RangeInclusive<usize> = 2..=4;
pub const DIGIT_COUNT: RangeInclusive<usize> = 2..=4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Letter,
    Symbol,
    Digit,
}

impl CharClass {
    pub const ALL: [CharClass; 3] = [CharClass::Letter, CharClass::Symbol, CharClass::Digit];

    /// Classify a character, or `None` if it belongs to no pool
    pub fn of(c: char) -> Option<CharClass> {
        if c.is_ascii_alphabetic() {
            Some(CharClass::Letter)
        } else if c.is_ascii_digit() {
            Some(CharClass::Digit)
        } else if SYMBOLS.contains(&c) {
            Some(CharClass::Symbol)
        } else {
            None
        }
    }

    pub fn pool(&self) -> &'static [char] {
        match self {
            CharClass::Letter => &LETTERS,
            CharClass::Symbol => &SYMBOLS,
            CharClass::Digit => &DIGITS,
        }
    }

    /// How many characters of this class go into one password
    pub fn count_range(&self) -> RangeInclusive<usize> {
        match self {
            CharClass::Letter => LETTER_COUNT,
            CharClass::Symbol => SYMBOL_COUNT,
            CharClass::Digit => DIGIT_COUNT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CharClass::Letter => "letter",
            CharClass::Symbol => "symbol",
            CharClass::Digit => "digit",
        }
    }
}

impl std::fmt::Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pools_are_classified_consistently() {
        for class in CharClass::ALL {
            for &c in class.pool() {
                assert_eq!(CharClass::of(c), Some(class), "{c:?} should be a {class}");
            }
        }
    }

    #[test]
    fn test_foreign_characters_have_no_class() {
        for c in ['@', '-', '_', ' ', 'é', '^', '~'] {
            assert_eq!(CharClass::of(c), None);
        }
    }

    #[test]
    fn test_pool_sizes() {
        assert_eq!(CharClass::Letter.pool().len(), 52);
        assert_eq!(CharClass::Symbol.pool().len(), 9);
        assert_eq!(CharClass::Digit.pool().len(), 10);
    }
}
