//! User interface and presentation
//!
//! Presenters format board state and game messages for the console,
//! reading the board only through its accessors.

pub mod presenters;
