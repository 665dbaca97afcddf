//! Attribute Core Module
//!
//! Platform-independent SGR state handling. This module contains:
//! - Attribute codes and their range-based categories
//! - The two-pass foreground/background resolver
//! - The CP437 extended glyph table
//!
//! Everything here is value-typed and deterministic: the same attribute
//! lists always resolve to the same colors.

mod attribute;
mod codepage;
mod resolver;

pub use attribute::{Attribute, AttributeKind, AttributeList, HIGH_INTENSITY_OFFSET};
pub use codepage::{ibm_extend, ibm_extend_str, CP437_HIGH};
pub use resolver::{resolve_colors, ResolvedStyle, Resolver, UnknownCodePolicy};
