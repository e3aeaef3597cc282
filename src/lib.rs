//! TUI Tanks (workspace facade crate).
//!
//! Re-exports the `tui_tanks::{core,input,journal,term,types}` API from the
//! dedicated crates under `crates/`, plus the startup glue shared by the
//! binaries: environment configuration and resource loading.

pub use tui_tanks_core as core;
pub use tui_tanks_input as input;
pub use tui_tanks_journal as journal;
pub use tui_tanks_term as term;
pub use tui_tanks_types as types;

pub mod assets;
pub mod config;

pub use assets::load_resources;
pub use config::GameConfig;
