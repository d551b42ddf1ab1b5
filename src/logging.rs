use std::io::Write;

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Environment variable that overrides the log level
pub const LOG_ENV: &str = "HEADER_LOG";

/// Send logs to stderr at `level`, unless `HEADER_LOG` says otherwise.
///
/// Headers go to stdout, so logging never interleaves with them in a pipe.
pub fn init(level: LevelFilter) {
    let env = Env::default().filter_or(LOG_ENV, level.as_str());

    let _ = Builder::from_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{:<5} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}

/// Level for the `-v` flag count: warn, then debug, then trace.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
