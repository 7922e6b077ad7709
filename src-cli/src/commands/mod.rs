//! CLI command handlers
//!
//! Each handler takes the app state plus explicit input/output streams,
//! so nothing here reads or writes the terminal directly.

pub mod add;
pub mod generate;
pub mod search;
