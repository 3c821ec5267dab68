//! Domain models
//!
//! Board state and the value types it is built from. Models hold no I/O;
//! rendering and input handling live in `ui` and `services`.

pub mod constants;
pub mod player;
pub mod position;
pub mod line;
pub mod board;
pub mod errors;
