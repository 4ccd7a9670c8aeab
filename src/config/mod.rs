//! Configuration management for svcprobe.
//!
//! Settings only supply defaults for command-line flags; nothing is ever
//! written back to disk.

mod settings;

pub use settings::{AppSettings, Paths};
