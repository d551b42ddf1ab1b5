use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Foreground escape used to close a colored span
pub const RESET_FOREGROUND: &str = "\x1b[39";
/// Background escape used to close a colored span
pub const RESET_BACKGROUND: &str = ";49m";

/// One entry of the fixed 8-color ANSI palette.
///
/// `None` resolves to no escape at all. `Reset` restores the terminal
/// default and is accepted wherever a color name is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    #[default]
    None,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Reset,
}

impl Color {
    pub const ALL: [Color; 10] = [
        Color::None,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::Reset,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Color::None => "none",
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Reset => "reset",
        }
    }

    /// Foreground prefix: `ESC[3x`, without the closing `m`.
    pub fn foreground(&self) -> &'static str {
        match self {
            Color::None => "",
            Color::Black => "\x1b[30",
            Color::Red => "\x1b[31",
            Color::Green => "\x1b[32",
            Color::Yellow => "\x1b[33",
            Color::Blue => "\x1b[34",
            Color::Magenta => "\x1b[35",
            Color::Cyan => "\x1b[36",
            Color::White => "\x1b[37",
            Color::Reset => RESET_FOREGROUND,
        }
    }

    /// Background suffix: `;4xm`, appended to a foreground prefix.
    pub fn background(&self) -> &'static str {
        match self {
            Color::None => "",
            Color::Black => ";40m",
            Color::Red => ";41m",
            Color::Green => ";42m",
            Color::Yellow => ";43m",
            Color::Blue => ";44m",
            Color::Magenta => ";45m",
            Color::Cyan => ";46m",
            Color::White => ";47m",
            Color::Reset => RESET_BACKGROUND,
        }
    }

    /// Case-insensitive lookup. Unknown names are an error, never a fallback.
    pub fn parse(name: &str) -> Result<Color> {
        let lowered = name.to_lowercase();
        Color::ALL
            .into_iter()
            .find(|c| c.name() == lowered)
            .ok_or_else(|| Error::UnknownColor(name.to_string()))
    }
}

/// Opening escape for a span: foreground prefix followed by background suffix.
pub fn open_span(foreground: Color, background: Color) -> String {
    format!("{}{}", foreground.foreground(), background.background())
}

/// Closing escape for a span, always `ESC[39;49m`.
pub fn close_span() -> String {
    format!("{}{}", RESET_FOREGROUND, RESET_BACKGROUND)
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.name().to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
