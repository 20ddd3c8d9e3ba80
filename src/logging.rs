//! Log verbosity for the command-line tool
//!
//! The library only talks to the `log` facade. The binary installs `env_logger` on stderr,
//! so search progress shows up with `-v` flags without mixing into stdout results.

use log::LevelFilter;

/// Map a `-v` count to a level: warnings by default, up to trace at three or more
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
