use std::io::{self, Write};

use crate::banner::render;
use crate::color::Color;
use crate::error::Result;
use crate::options::{Align, HeaderOptions};

/// The three headers shown when the CLI runs without a text
pub fn showcase_options() -> [HeaderOptions; 3] {
    [
        // Defaults
        HeaderOptions::default(),
        // A custom header to show off some of the features
        HeaderOptions::new("PYTHON.ORG")
            .text_color(Color::Green, Color::Black)
            .width(48)
            .pattern("-=")
            .pattern_color(Color::Black, Color::Green)
            .align(Align::Left),
        // Demo scene style
        HeaderOptions::new("░TALKPYTHON.FM░")
            .text_color(Color::Blue, Color::Yellow)
            .width(64)
            .height(5)
            .pattern("   ░░▒▒▓▓███▓▓▒▒░░   ")
            .pattern_color(Color::Magenta, Color::Blue)
            .align(Align::Center),
    ]
}

pub fn showcase() -> Result<Vec<String>> {
    showcase_options().iter().map(render).collect()
}

/// Print every showcase header followed by a blank line
pub fn print_showcase() -> Result<()> {
    let mut out = io::stdout().lock();
    for header in showcase()? {
        writeln!(out, "{}", header)?;
    }
    out.flush()?;
    Ok(())
}
