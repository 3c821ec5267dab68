//! Game services
//!
//! Input classification and the console play session built on top of
//! the game engine.

pub mod command;
pub mod game;
