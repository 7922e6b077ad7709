//! Passbook Password Generator
//!
//! Builds a password from three character pools:
//! - 8 to 10 letters from a-z and A-Z
//! - 2 to 4 symbols from `! # $ % & ( ) * +`
//! - 2 to 4 digits from 0-9
//!
//! Every draw is with replacement and the combined sequence is shuffled
//! before being joined, so the classes are not grouped in the output.

mod charset;
mod generator;

pub use charset::{CharClass, DIGITS, DIGIT_COUNT, LETTERS, LETTER_COUNT, SYMBOLS, SYMBOL_COUNT};
pub use generator::PasswordGenerator;

/// Generate a password with the thread-local RNG.
pub fn generate() -> String {
    PasswordGenerator::new().generate()
}
