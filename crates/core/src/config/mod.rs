//! Configuration loading and schema definitions
//!
//! Settings live in a TOML file with `[search]` and `[logging]` tables.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
