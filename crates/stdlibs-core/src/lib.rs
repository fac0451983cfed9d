//! # stdlibs-core
//!
//! Core types and error types shared by every stdlibs crate:
//! - `PythonVersion` and the embedded table of tracked `Release`s
//! - `ModuleNames`, the deduplicated name set built per release
//! - `Aggregates`, the running per-major-version unions
//! - Generated table rendering and atomic file writes

pub mod errors;
pub mod names;
pub mod release;
pub mod table;
pub mod version;

pub use errors::CoreError;
pub use names::{Aggregates, ModuleNames};
pub use release::{RELEASES, Release};
pub use table::{TableTemplate, render_table, write_table};
pub use version::PythonVersion;
