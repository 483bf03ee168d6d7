pub mod error;
pub mod harness;
pub mod list;

pub use error::{ListError, Result, status_code};
pub use list::{Iter, List, Node, push_front};

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

pub const LOG_ENV: &str = "SLL_LOG";

pub fn log_level() -> LevelFilter {
    std::env::var(LOG_ENV)
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Logs go to stderr only; stdout is reserved for harness output.
pub fn init_logging() {
    if let Err(e) = TermLogger::init(
        log_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        // 已经有 logger 了，沿用它
        log::debug!("logger already initialised: {e}");
    }
}
