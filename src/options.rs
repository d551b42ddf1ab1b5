use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;

pub const DEFAULT_TEXT: &str = "APPLICATION HEADER";
pub const DEFAULT_WIDTH: usize = 32;
pub const DEFAULT_HEIGHT: usize = 3;
pub const DEFAULT_PATTERN: &str = "-";

/// Horizontal placement of the text inside the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

impl Align {
    /// Never fails: anything other than `left` or `right` is `Center`.
    pub fn parse(value: &str) -> Align {
        match value.to_lowercase().as_str() {
            "left" => Align::Left,
            "right" => Align::Right,
            "center" => Align::Center,
            other => {
                log::debug!("unrecognized align {:?}, using center", other);
                Align::Center
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

impl From<&str> for Align {
    fn from(value: &str) -> Self {
        Align::parse(value)
    }
}

impl From<String> for Align {
    fn from(value: String) -> Self {
        Align::parse(&value)
    }
}

impl From<Align> for String {
    fn from(align: Align) -> Self {
        align.name().to_string()
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything that shapes one rendered header.
///
/// `width` and `height` are requests: the renderer widens a width that is
/// far too narrow for the text and clamps the height to 1..=9 lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderOptions {
    pub text: String,
    pub text_color: Color,
    pub text_background_color: Color,
    pub width: usize,
    pub height: usize,
    pub decorative_pattern: String,
    pub decorative_pattern_color: Color,
    pub decorative_pattern_background_color: Color,
    pub align: Align,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            text_color: Color::None,
            text_background_color: Color::None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            decorative_pattern: DEFAULT_PATTERN.to_string(),
            decorative_pattern_color: Color::None,
            decorative_pattern_background_color: Color::None,
            align: Align::Center,
        }
    }
}

impl HeaderOptions {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn text_color(mut self, foreground: Color, background: Color) -> Self {
        self.text_color = foreground;
        self.text_background_color = background;
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.decorative_pattern = pattern.into();
        self
    }

    pub fn pattern_color(mut self, foreground: Color, background: Color) -> Self {
        self.decorative_pattern_color = foreground;
        self.decorative_pattern_background_color = background;
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}
