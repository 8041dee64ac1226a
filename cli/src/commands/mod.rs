//! CLI Commands
//!
//! All riptide CLI commands organized as separate modules.

mod derive;

pub use derive::{run_derive, DeriveArgs};
