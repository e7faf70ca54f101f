// Local storage module.
// Resolves platform directories and reads/writes JSON files atomically.

pub mod json;
pub mod paths;

pub use json::{delete, read_json, write_json};
