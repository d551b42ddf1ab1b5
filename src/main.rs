use std::io::{self, Write};

use clap::Parser;
use console::style;

use header::color::Color;
use header::error::Result;
use header::options::{self as defaults, Align, HeaderOptions};
use header::{demo, logging, render, terminal};

#[derive(Parser, Debug, Clone)]
#[command(name = "header")]
#[command(version = "0.1.0")]
#[command(about = "Print nifty console application headers", long_about = None)]
struct Args {
    /// Header text (shows the demo headers when omitted)
    text: Option<String>,

    /// Text color: none, black, red, green, yellow, blue, magenta, cyan, white
    #[arg(long, default_value = "none", value_parser = parse_color)]
    text_color: Color,

    /// Text background color
    #[arg(long, default_value = "none", value_parser = parse_color)]
    text_background_color: Color,

    /// Width in characters (widened when far too narrow for the text)
    #[arg(short, long, default_value_t = defaults::DEFAULT_WIDTH)]
    width: usize,

    /// Height in lines, text line included (1 to 9)
    #[arg(short = 'H', long, default_value_t = defaults::DEFAULT_HEIGHT)]
    height: usize,

    /// Decorative pattern repeated across the width
    #[arg(short, long, default_value = defaults::DEFAULT_PATTERN)]
    pattern: String,

    /// Decorative pattern color
    #[arg(long, default_value = "none", value_parser = parse_color)]
    pattern_color: Color,

    /// Decorative pattern background color
    #[arg(long, default_value = "none", value_parser = parse_color)]
    pattern_background_color: Color,

    /// Alignment: left, center or right (anything else is center)
    #[arg(short, long, default_value = "center")]
    align: String,

    /// Full options as inline JSON, replacing every other flag
    #[arg(long, conflicts_with = "text")]
    options_json: Option<String>,

    /// Do not prepare the terminal for ANSI escapes
    #[arg(long)]
    no_ansi_compat: bool,

    /// More logging on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_color(name: &str) -> std::result::Result<Color, String> {
    Color::parse(name).map_err(|e| e.to_string())
}

impl Args {
    fn header_options(&self) -> Result<Option<HeaderOptions>> {
        if let Some(json) = &self.options_json {
            return Ok(Some(serde_json::from_str(json)?));
        }

        let Some(text) = &self.text else {
            return Ok(None);
        };

        Ok(Some(HeaderOptions {
            text: text.clone(),
            text_color: self.text_color,
            text_background_color: self.text_background_color,
            width: self.width,
            height: self.height,
            decorative_pattern: self.pattern.clone(),
            decorative_pattern_color: self.pattern_color,
            decorative_pattern_background_color: self.pattern_background_color,
            align: Align::parse(&self.align),
        }))
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    logging::init(logging::level_for_verbosity(args.verbose));

    if !args.no_ansi_compat {
        terminal::enable_ansi_compatibility();
    }

    match args.header_options()? {
        Some(options) => {
            let mut out = io::stdout().lock();
            write!(out, "{}", render(&options)?)?;
            out.flush()?;
            Ok(())
        }
        None => demo::print_showcase(),
    }
}
