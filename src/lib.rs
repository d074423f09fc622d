//! Reusable library API, shared by the CLI, the helper binaries and the WASM build
pub mod crossing;
pub mod direction;
pub mod errors;
pub mod grid;
pub mod log;
pub mod matcher;
pub mod report;
pub mod scanner;
pub mod search_term;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use crossing::{find_crossings, is_crossing, Crossing};
pub use direction::Direction;
pub use errors::SearchError;
pub use grid::Grid;
pub use matcher::matches;
pub use scanner::{find_locations, Location};
