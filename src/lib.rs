//! Nifty colorized headers for console applications.
//!
//! ```no_run
//! let header = header::render(&header::HeaderOptions::new("MY TOOL")).unwrap();
//! print!("{}", header);
//! ```

pub mod banner;
pub mod color;
pub mod demo;
pub mod error;
pub mod logging;
pub mod options;
pub mod terminal;

pub use banner::{header, render, Geometry};
pub use color::Color;
pub use error::{Error, Result};
pub use options::{Align, HeaderOptions};
pub use terminal::enable_ansi_compatibility;
