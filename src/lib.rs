//! Mochi ANSI Rendering Library
//!
//! Emits terminal control sequences without depending on any terminal library.
//! This crate provides:
//!
//! - `core`: SGR attribute codes, color consolidation, CP437 glyph table
//! - `sequence`: SGR serialization and cursor/erase control sequences
//! - `app`: Configuration for the `mochi-sgr` command line tool
//!
//! Parsing escape sequences out of terminal output is not handled here; this
//! crate only produces them.

pub mod app;
pub mod core;
pub mod error;
pub mod sequence;

pub use error::{Error, Result};
