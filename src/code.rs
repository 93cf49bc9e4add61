//! Display code registry
//!
//! The closed vocabulary of codes that can annotate console text:
//! - 16 named colors
//! - 5 text-format modifiers
//! - 1 reset
//!
//! Each code is identified by a single lowercase character and is written
//! into text as the two-character sequence `MARKER` + identifying character.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The sentinel character that prefixes every code embedded in text.
///
/// Exposed so callers matching externally-sourced marked-up text can build
/// their own patterns against it.
pub const MARKER: char = '\u{00A7}';

/// A display code from the fixed vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Code {
    // Colors ('0'-'9', 'a'-'f')
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    // Format modifiers ('k'-'o')
    Obfuscated,
    Bold,
    Strikethrough,
    Underline,
    Italic,
    // Reset ('r')
    Reset,
}

/// What a code does to the text that follows it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Paints a color
    Color,
    /// Applies a format modifier on top of the current color
    Format,
    /// Clears all active color and format state
    Reset,
}

impl Code {
    /// Every defined code, exactly once: colors, then formats, then reset
    pub const ALL: [Code; 22] = [
        Code::Black,
        Code::DarkBlue,
        Code::DarkGreen,
        Code::DarkAqua,
        Code::DarkRed,
        Code::DarkPurple,
        Code::Gold,
        Code::Gray,
        Code::DarkGray,
        Code::Blue,
        Code::Green,
        Code::Aqua,
        Code::Red,
        Code::LightPurple,
        Code::Yellow,
        Code::White,
        Code::Obfuscated,
        Code::Bold,
        Code::Strikethrough,
        Code::Underline,
        Code::Italic,
        Code::Reset,
    ];

    /// Look up a code by its identifying character.
    ///
    /// The match is exact: identifying characters are lowercase, so callers
    /// wanting case-insensitive lookup lowercase first. Characters outside
    /// the defined set return `None`.
    pub fn from_char(c: char) -> Option<Code> {
        match c {
            '0' => Some(Code::Black),
            '1' => Some(Code::DarkBlue),
            '2' => Some(Code::DarkGreen),
            '3' => Some(Code::DarkAqua),
            '4' => Some(Code::DarkRed),
            '5' => Some(Code::DarkPurple),
            '6' => Some(Code::Gold),
            '7' => Some(Code::Gray),
            '8' => Some(Code::DarkGray),
            '9' => Some(Code::Blue),
            'a' => Some(Code::Green),
            'b' => Some(Code::Aqua),
            'c' => Some(Code::Red),
            'd' => Some(Code::LightPurple),
            'e' => Some(Code::Yellow),
            'f' => Some(Code::White),
            'k' => Some(Code::Obfuscated),
            'l' => Some(Code::Bold),
            'm' => Some(Code::Strikethrough),
            'n' => Some(Code::Underline),
            'o' => Some(Code::Italic),
            'r' => Some(Code::Reset),
            _ => None,
        }
    }

    /// Get the identifying character for this code
    pub fn to_char(self) -> char {
        match self {
            Code::Black => '0',
            Code::DarkBlue => '1',
            Code::DarkGreen => '2',
            Code::DarkAqua => '3',
            Code::DarkRed => '4',
            Code::DarkPurple => '5',
            Code::Gold => '6',
            Code::Gray => '7',
            Code::DarkGray => '8',
            Code::Blue => '9',
            Code::Green => 'a',
            Code::Aqua => 'b',
            Code::Red => 'c',
            Code::LightPurple => 'd',
            Code::Yellow => 'e',
            Code::White => 'f',
            Code::Obfuscated => 'k',
            Code::Bold => 'l',
            Code::Strikethrough => 'm',
            Code::Underline => 'n',
            Code::Italic => 'o',
            Code::Reset => 'r',
        }
    }

    /// Get the category of this code
    pub fn category(self) -> Category {
        match self {
            Code::Black
            | Code::DarkBlue
            | Code::DarkGreen
            | Code::DarkAqua
            | Code::DarkRed
            | Code::DarkPurple
            | Code::Gold
            | Code::Gray
            | Code::DarkGray
            | Code::Blue
            | Code::Green
            | Code::Aqua
            | Code::Red
            | Code::LightPurple
            | Code::Yellow
            | Code::White => Category::Color,
            Code::Obfuscated
            | Code::Bold
            | Code::Strikethrough
            | Code::Underline
            | Code::Italic => Category::Format,
            Code::Reset => Category::Reset,
        }
    }

    /// Check if this code paints a color (as opposed to a format or reset)
    pub fn is_color(self) -> bool {
        self.category() == Category::Color
    }

    /// Check if this code is a format modifier (as opposed to a color or reset)
    pub fn is_format(self) -> bool {
        self.category() == Category::Format
    }

    /// Stable lowercase name, as written in config and content files
    pub fn name(self) -> &'static str {
        match self {
            Code::Black => "black",
            Code::DarkBlue => "dark_blue",
            Code::DarkGreen => "dark_green",
            Code::DarkAqua => "dark_aqua",
            Code::DarkRed => "dark_red",
            Code::DarkPurple => "dark_purple",
            Code::Gold => "gold",
            Code::Gray => "gray",
            Code::DarkGray => "dark_gray",
            Code::Blue => "blue",
            Code::Green => "green",
            Code::Aqua => "aqua",
            Code::Red => "red",
            Code::LightPurple => "light_purple",
            Code::Yellow => "yellow",
            Code::White => "white",
            Code::Obfuscated => "obfuscated",
            Code::Bold => "bold",
            Code::Strikethrough => "strikethrough",
            Code::Underline => "underline",
            Code::Italic => "italic",
            Code::Reset => "reset",
        }
    }
}

/// A code displays as its canonical in-text form: `MARKER` + identifying char
impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", MARKER, self.to_char())
    }
}

/// Error returned when parsing a code name fails
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown display code name: {0:?}")]
pub struct ParseCodeError(pub String);

/// Parse a code from its name, ignoring ASCII case (`"gold"`, `"DARK_BLUE"`)
impl FromStr for Code {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Code::ALL
            .iter()
            .copied()
            .find(|code| code.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseCodeError(s.to_string()))
    }
}
