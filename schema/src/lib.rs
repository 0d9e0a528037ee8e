// Pokefinder Schema - Shared type definitions
// This crate contains the data records shared between the pokefinder
// library, its fetch layer, and any renderer built on top of them.

// Re-export the main types
pub use evolution::*;
pub use pokemon::*;
pub use types::*;

pub mod evolution;
pub mod pokemon;
pub mod types;
