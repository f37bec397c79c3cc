// Boss Raid Schema - Shared type definitions
// This crate holds the fixed enums shared by the battle engine and the
// roster documents it loads.

// Re-export the main types
pub use ability_types::*;

pub mod ability_types;
