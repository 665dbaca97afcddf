//! Control sequence rendering
//!
//! String builders for the escape sequences the crate emits:
//! - SGR attribute sequences (`ESC[<n>;...m`) and attribute runs
//! - Cursor movement, scrolling and erase sequences

pub mod cursor;
mod sgr;

pub use sgr::{describe_runs, serialize, set, AttributeRun, CSI, ESC, RESET};
