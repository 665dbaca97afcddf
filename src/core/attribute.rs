//! SGR Attributes
//!
//! An attribute is the raw 8-bit parameter of an SGR sequence. Its category
//! is derived from the numeric range it falls in, so any `u8` is a valid
//! attribute; values outside the known ranges classify as
//! [`AttributeKind::Unrecognized`].

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Distance between a standard color code and its high-intensity variant
pub const HIGH_INTENSITY_OFFSET: u8 = Attribute::FG_HI_BLACK.0 - Attribute::FG_BLACK.0;

/// A single SGR parameter code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attribute(pub u8);

impl Attribute {
    /// Base attributes (0-9)
    pub const RESET: Attribute = Attribute(0);
    pub const BOLD: Attribute = Attribute(1);
    pub const FAINT: Attribute = Attribute(2);
    pub const ITALIC: Attribute = Attribute(3);
    pub const UNDERLINE: Attribute = Attribute(4);
    pub const BLINK_SLOW: Attribute = Attribute(5);
    pub const BLINK_RAPID: Attribute = Attribute(6);
    pub const REVERSE_VIDEO: Attribute = Attribute(7);
    pub const CONCEALED: Attribute = Attribute(8);
    pub const CROSSED_OUT: Attribute = Attribute(9);

    /// Foreground colors (30-37) and default (39)
    pub const FG_BLACK: Attribute = Attribute(30);
    pub const FG_RED: Attribute = Attribute(31);
    pub const FG_GREEN: Attribute = Attribute(32);
    pub const FG_YELLOW: Attribute = Attribute(33);
    pub const FG_BLUE: Attribute = Attribute(34);
    pub const FG_MAGENTA: Attribute = Attribute(35);
    pub const FG_CYAN: Attribute = Attribute(36);
    pub const FG_WHITE: Attribute = Attribute(37);
    pub const FG_DEFAULT: Attribute = Attribute(39);

    /// Background colors (40-47) and default (49)
    pub const BG_BLACK: Attribute = Attribute(40);
    pub const BG_RED: Attribute = Attribute(41);
    pub const BG_GREEN: Attribute = Attribute(42);
    pub const BG_YELLOW: Attribute = Attribute(43);
    pub const BG_BLUE: Attribute = Attribute(44);
    pub const BG_MAGENTA: Attribute = Attribute(45);
    pub const BG_CYAN: Attribute = Attribute(46);
    pub const BG_WHITE: Attribute = Attribute(47);
    pub const BG_DEFAULT: Attribute = Attribute(49);

    /// High-intensity foreground colors (90-97)
    pub const FG_HI_BLACK: Attribute = Attribute(90);
    pub const FG_HI_RED: Attribute = Attribute(91);
    pub const FG_HI_GREEN: Attribute = Attribute(92);
    pub const FG_HI_YELLOW: Attribute = Attribute(93);
    pub const FG_HI_BLUE: Attribute = Attribute(94);
    pub const FG_HI_MAGENTA: Attribute = Attribute(95);
    pub const FG_HI_CYAN: Attribute = Attribute(96);
    pub const FG_HI_WHITE: Attribute = Attribute(97);

    /// High-intensity background colors (100-107)
    pub const BG_HI_BLACK: Attribute = Attribute(100);
    pub const BG_HI_RED: Attribute = Attribute(101);
    pub const BG_HI_GREEN: Attribute = Attribute(102);
    pub const BG_HI_YELLOW: Attribute = Attribute(103);
    pub const BG_HI_BLUE: Attribute = Attribute(104);
    pub const BG_HI_MAGENTA: Attribute = Attribute(105);
    pub const BG_HI_CYAN: Attribute = Attribute(106);
    pub const BG_HI_WHITE: Attribute = Attribute(107);

    /// Numeric code as written on the wire
    pub fn code(self) -> u8 {
        self.0
    }

    /// Classify this code by numeric range
    pub fn kind(self) -> AttributeKind {
        match self.0 {
            0 => AttributeKind::Reset,
            1 => AttributeKind::Bold,
            2..=9 => AttributeKind::StyleFlag,
            30..=37 => AttributeKind::Foreground,
            39 => AttributeKind::ForegroundDefault,
            40..=47 => AttributeKind::Background,
            49 => AttributeKind::BackgroundDefault,
            90..=97 => AttributeKind::ForegroundBright,
            100..=107 => AttributeKind::BackgroundBright,
            _ => AttributeKind::Unrecognized,
        }
    }

    /// High-intensity counterpart of a standard color.
    ///
    /// Only meaningful for [`AttributeKind::Foreground`] and
    /// [`AttributeKind::Background`]; every other code is returned unchanged.
    pub fn brighten(self) -> Attribute {
        match self.kind() {
            AttributeKind::Foreground | AttributeKind::Background => {
                Attribute(self.0 + HIGH_INTENSITY_OFFSET)
            }
            _ => self,
        }
    }

    pub fn is_recognized(self) -> bool {
        self.kind() != AttributeKind::Unrecognized
    }
}

impl From<u8> for Attribute {
    fn from(code: u8) -> Self {
        Attribute(code)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category of an attribute code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeKind {
    /// 0
    Reset,
    /// 1
    Bold,
    /// Faint through CrossedOut (2-9)
    StyleFlag,
    /// Standard foreground (30-37)
    Foreground,
    /// 39
    ForegroundDefault,
    /// Standard background (40-47)
    Background,
    /// 49
    BackgroundDefault,
    /// High-intensity foreground (90-97)
    ForegroundBright,
    /// High-intensity background (100-107)
    BackgroundBright,
    /// Anything else
    Unrecognized,
}

/// Ordered list of attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeList(Vec<Attribute>);

impl AttributeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, attr: Attribute) {
        self.0.push(attr);
    }

    pub fn as_slice(&self) -> &[Attribute] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Attribute> {
        self.0
    }

    /// Sort ascending by numeric code
    pub fn sort(&mut self) {
        self.0.sort_unstable();
    }

    /// Fail on the first code outside every known category
    pub fn validate(&self) -> Result<()> {
        match self.0.iter().find(|attr| !attr.is_recognized()) {
            Some(attr) => Err(Error::UnrecognizedAttribute(attr.0)),
            None => Ok(()),
        }
    }
}

impl Deref for AttributeList {
    type Target = [Attribute];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Attribute>> for AttributeList {
    fn from(attrs: Vec<Attribute>) -> Self {
        Self(attrs)
    }
}

impl From<&[Attribute]> for AttributeList {
    fn from(attrs: &[Attribute]) -> Self {
        Self(attrs.to_vec())
    }
}

impl FromIterator<Attribute> for AttributeList {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a AttributeList {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Parse decimal codes separated by `;` or `,` (e.g. `"1;31"`).
///
/// Whitespace around codes is ignored and empty input yields an empty list.
impl FromStr for AttributeList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.split([';', ','])
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<u8>()
                    .map(Attribute)
                    .map_err(|_| Error::InvalidCode {
                        input: part.to_string(),
                    })
            })
            .collect()
    }
}
