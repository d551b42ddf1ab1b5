//! Opt-in terminal setup for hosts that print headers.
//!
//! Nothing here runs on its own. Call [`enable_ansi_compatibility`] once at
//! startup, before the first header is written.

use console::Term;

/// Prepare stdout for ANSI escapes and report whether they will render.
///
/// On Windows the feature probe switches the console into virtual terminal
/// mode. On other platforms it only inspects the terminal. The result is
/// also stored with `console::set_colors_enabled` so styled diagnostics
/// follow the same decision.
pub fn enable_ansi_compatibility() -> bool {
    let supported = Term::stdout().features().colors_supported();
    console::set_colors_enabled(supported);
    log::debug!("ANSI colors supported on stdout: {}", supported);
    supported
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_is_idempotent() {
        let first = enable_ansi_compatibility();
        let second = enable_ansi_compatibility();
        assert_eq!(first, second);
        assert_eq!(console::colors_enabled(), second);
    }
}
