//! Data model shared by the navigator engine and its collaborators.

pub mod hand;

pub use hand::*;
