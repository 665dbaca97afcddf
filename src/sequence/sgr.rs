//! SGR (Select Graphic Rendition) sequences
//!
//! Codes are written in decimal and joined with `;`. No range checking is
//! done; whatever codes the caller hands in end up on the wire.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Attribute, AttributeList};

/// Escape character (decimal 27)
pub const ESC: char = '\x1b';

/// Control Sequence Introducer
pub const CSI: &str = "\x1b[";

/// Bare reset, also used for an empty attribute list
pub const RESET: &str = "\x1b[0m";

/// Render a full SGR sequence for `attrs`
pub fn serialize(attrs: &[Attribute]) -> String {
    if attrs.is_empty() {
        return RESET.to_string();
    }

    let mut out = String::with_capacity(CSI.len() + attrs.len() * 4);
    out.push_str(CSI);
    for (i, attr) in attrs.iter().enumerate() {
        if i > 0 {
            out.push(';');
        }
        out.push_str(&attr.0.to_string());
    }
    out.push('m');
    out
}

/// Convenience entry point with fast paths for short lists.
///
/// Always produces the same text as [`serialize`].
pub fn set(attrs: &[Attribute]) -> String {
    match attrs {
        [] => RESET.to_string(),
        [a] => format!("\x1b[{}m", a.0),
        [a, b] => format!("\x1b[{};{}m", a.0, b.0),
        _ => serialize(attrs),
    }
}

impl AttributeList {
    /// SGR sequence for this list
    pub fn to_ansi(&self) -> String {
        serialize(self)
    }
}

impl fmt::Display for AttributeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}

/// Attributes that take effect at a given offset into a text buffer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRun {
    /// Index into the text where these attributes start applying
    pub text_offset: usize,
    pub attributes: AttributeList,
}

impl AttributeRun {
    pub fn new(text_offset: usize, attributes: AttributeList) -> Self {
        Self {
            text_offset,
            attributes,
        }
    }

    /// SGR sequence for the run's attributes
    pub fn to_ansi(&self) -> String {
        self.attributes.to_ansi()
    }
}

/// Debug form: the offset followed by each code and a `;` (offset 4 with
/// `[1, 31]` renders as `41;31;`)
impl fmt::Display for AttributeRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text_offset)?;
        for attr in &self.attributes {
            write!(f, "{};", attr.0)?;
        }
        Ok(())
    }
}

/// Render a slice of runs as `[run, run, ]` for logging
pub fn describe_runs(runs: &[AttributeRun]) -> String {
    let mut out = String::from("[");
    for run in runs {
        out.push_str(&run.to_string());
        out.push_str(", ");
    }
    out.push(']');
    out
}
