use crate::color::{close_span, open_span, Color};
use crate::error::{Error, Result};
use crate::options::{Align, HeaderOptions};

/// Tallest header, text line included
pub const MAX_HEIGHT: usize = 9;

/// Resolved dimensions of a header before any string is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Characters per line, after widening
    pub width: usize,
    /// Decorative lines above the text
    pub top: usize,
    /// Decorative lines below the text
    pub bottom: usize,
}

impl Geometry {
    pub fn for_options(options: &HeaderOptions) -> Self {
        let width = effective_width(options.text.chars().count(), options.width);
        let (top, bottom) = vertical_split(options.height);
        Self { width, top, bottom }
    }

    /// Lines in the rendered header, text line included
    pub fn lines(&self) -> usize {
        self.top + 1 + self.bottom
    }
}

/// Widen `width` to `text_len + 2`, but only once `width + 2 < text_len`.
///
/// A width between `text_len - 2` and `text_len + 1` is left as is.
pub fn effective_width(text_len: usize, width: usize) -> usize {
    if width + 2 < text_len {
        log::debug!("widening header from {} to {}", width, text_len + 2);
        text_len + 2
    } else {
        width
    }
}

/// Split the decorative lines of a `height`-line header into (top, bottom).
///
/// Height is clamped to 1..=9 and one line goes to the text. The top half is
/// rounded half to even, so odd counts of 1 and 5 put the extra line below
/// while 3 and 7 put it above.
pub fn vertical_split(height: usize) -> (usize, usize) {
    let decorative = height.clamp(1, MAX_HEIGHT) - 1;
    let half = decorative / 2;
    let top = if decorative % 2 == 1 && half % 2 == 1 {
        half + 1
    } else {
        half
    };
    (top, decorative - top)
}

/// Tile `pattern` across exactly `width` characters.
pub fn decorative_line(pattern: &str, width: usize) -> Result<String> {
    let pattern_len = pattern.chars().count();
    if pattern_len == 0 {
        return Err(Error::EmptyPattern);
    }

    let repeats = width / pattern_len;
    let mut line = pattern.repeat(repeats);
    if 2 * repeats < width {
        line.push_str(pattern);
        line = line.chars().take(width).collect();
    }

    Ok(line)
}

/// Center `text` in a field of `width` spaces.
///
/// When the padding is odd, the extra space goes on the left only if both
/// the padding and `width` are odd.
pub fn center(text: &str, width: usize) -> String {
    let text_len = text.chars().count();
    if width <= text_len {
        return text.to_string();
    }

    let margin = width - text_len;
    let left = margin / 2 + (margin & width & 1);
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(margin - left))
}

/// Place `text` in a `width`-character line according to `align`.
pub fn aligned_text(text: &str, width: usize, align: Align) -> String {
    let padding = width.saturating_sub(1 + text.chars().count());
    match align {
        Align::Left => format!(" {}{}", text, " ".repeat(padding)),
        Align::Center => center(text, width),
        Align::Right => format!("{}{} ", " ".repeat(padding), text),
    }
}

/// Render a header from typed options.
pub fn render(options: &HeaderOptions) -> Result<String> {
    let geometry = Geometry::for_options(options);
    log::debug!(
        "rendering {:?} at width {} with {}+1+{} lines",
        options.text,
        geometry.width,
        geometry.top,
        geometry.bottom
    );

    let decoration = format!(
        "{}{}{}",
        open_span(
            options.decorative_pattern_color,
            options.decorative_pattern_background_color
        ),
        decorative_line(&options.decorative_pattern, geometry.width)?,
        close_span()
    );

    let text_line = format!(
        "{}{}{}",
        open_span(options.text_color, options.text_background_color),
        aligned_text(&options.text, geometry.width, options.align),
        close_span()
    );

    let decoration_row = format!("{}\n", decoration);
    let mut output = String::with_capacity(decoration_row.len() * geometry.lines());
    output.push_str(&decoration_row.repeat(geometry.top));
    output.push_str(&text_line);
    output.push('\n');
    output.push_str(&decoration_row.repeat(geometry.bottom));

    Ok(output)
}

/// Render a header from color and alignment names.
///
/// All four color names are resolved before anything is built, so an
/// unknown color fails without doing any layout work. `align` never fails.
#[allow(clippy::too_many_arguments)]
pub fn header(
    text: &str,
    text_color: &str,
    text_background_color: &str,
    width: usize,
    height: usize,
    decorative_pattern: &str,
    decorative_pattern_color: &str,
    decorative_pattern_background_color: &str,
    align: &str,
) -> Result<String> {
    let options = HeaderOptions {
        text: text.to_string(),
        text_color: Color::parse(text_color)?,
        text_background_color: Color::parse(text_background_color)?,
        width,
        height,
        decorative_pattern: decorative_pattern.to_string(),
        decorative_pattern_color: Color::parse(decorative_pattern_color)?,
        decorative_pattern_background_color: Color::parse(decorative_pattern_background_color)?,
        align: Align::parse(align),
    };

    render(&options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_width() {
        assert_eq!(effective_width(8, 3), 10);
        assert_eq!(effective_width(2, 10), 10);
        // 6 + 2 is not below 8, so the width stays narrow
        assert_eq!(effective_width(8, 6), 6);
        assert_eq!(effective_width(8, 5), 10);
        assert_eq!(effective_width(0, 0), 0);
    }

    #[test]
    fn test_vertical_split_rounds_half_to_even() {
        assert_eq!(vertical_split(0), (0, 0));
        assert_eq!(vertical_split(1), (0, 0));
        assert_eq!(vertical_split(2), (0, 1));
        assert_eq!(vertical_split(3), (1, 1));
        assert_eq!(vertical_split(4), (2, 1));
        assert_eq!(vertical_split(5), (2, 2));
        assert_eq!(vertical_split(6), (2, 3));
        assert_eq!(vertical_split(7), (3, 3));
        assert_eq!(vertical_split(8), (4, 3));
        assert_eq!(vertical_split(9), (4, 4));
        assert_eq!(vertical_split(100), (4, 4));
    }

    #[test]
    fn test_vertical_split_sums_to_clamped_height() {
        for height in 0..20 {
            let (top, bottom) = vertical_split(height);
            assert_eq!(top + bottom, height.clamp(1, 9) - 1);
        }
    }

    #[test]
    fn test_decorative_line_tiles_and_truncates() {
        assert_eq!(decorative_line("-", 5).unwrap(), "-----");
        assert_eq!(decorative_line("abc", 7).unwrap(), "abcabca");
        assert_eq!(decorative_line("abc", 5).unwrap(), "abcab");
        assert_eq!(decorative_line("-=", 48).unwrap(), "-=".repeat(24));
        assert_eq!(decorative_line("longer than width", 4).unwrap(), "long");
        assert_eq!(decorative_line("-", 0).unwrap(), "");
    }

    #[test]
    fn test_decorative_line_always_fills_width() {
        for pattern in ["-", "-=", "abc", "   ░░▒▒▓▓███▓▓▒▒░░   "] {
            for width in 0..80 {
                let line = decorative_line(pattern, width).unwrap();
                assert_eq!(line.chars().count(), width, "{:?} at {}", pattern, width);
            }
        }
    }

    #[test]
    fn test_empty_pattern_is_error() {
        assert!(matches!(decorative_line("", 10), Err(Error::EmptyPattern)));
    }

    #[test]
    fn test_center_matches_classic_rule() {
        assert_eq!(center("abc", 6), " abc  ");
        assert_eq!(center("ab", 5), "  ab ");
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abc", 3), "abc");
        assert_eq!(center("abcd", 2), "abcd");
        assert_eq!(center("", 4), "    ");
    }

    #[test]
    fn test_aligned_text() {
        assert_eq!(aligned_text("HI", 10, Align::Left), " HI       ");
        assert_eq!(aligned_text("HI", 10, Align::Right), "       HI ");
        assert_eq!(aligned_text("HI", 10, Align::Center), "    HI    ");
        // too narrow: padding collapses to nothing
        assert_eq!(aligned_text("LONG", 3, Align::Left), " LONG");
        assert_eq!(aligned_text("LONG", 3, Align::Right), "LONG ");
    }

    #[test]
    fn test_render_defaults() {
        let output = render(&HeaderOptions::default()).unwrap();
        let rule = format!("{}\x1b[39;49m\n", "-".repeat(32));
        let expected = format!(
            "{}       APPLICATION HEADER       \x1b[39;49m\n{}",
            rule, rule
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_render_with_colors() {
        let options = HeaderOptions::new("HI")
            .width(6)
            .height(1)
            .text_color(Color::Green, Color::Black);
        assert_eq!(
            render(&options).unwrap(),
            "\x1b[32;40m  HI  \x1b[39;49m\n"
        );
    }

    #[test]
    fn test_header_resolves_names() {
        let output = header("HI", "RED", "white", 10, 1, "-", "none", "none", "LEFT").unwrap();
        assert_eq!(output, "\x1b[31;47m HI       \x1b[39;49m\n");
    }

    #[test]
    fn test_header_unknown_color() {
        let result = header("HI", "none", "none", 10, 3, "-", "purple", "none", "center");
        assert!(matches!(result, Err(Error::UnknownColor(name)) if name == "purple"));
    }

    #[test]
    fn test_unknown_color_wins_over_empty_pattern() {
        let result = header("HI", "purple", "none", 10, 3, "", "none", "none", "center");
        assert!(matches!(result, Err(Error::UnknownColor(_))));
    }
}
