// Pokedex Schema - Shared type definitions
// This crate contains the catalog record shape that is shared between the
// main pokedex crate's collection type and its query functions.

// Re-export the main types
pub use pokemon::*;

pub mod pokemon;
