//! Browser console logging
//!
//! Core crates log through `tracing`; with no subscriber installed those
//! events are forwarded to the `log` facade, which `console_log` prints to
//! the devtools console.

use std::str::FromStr;

use portfolio_core::{Error, LoggingSettings, Result};

/// Level used when the configured one is not recognized
pub const DEFAULT_LEVEL: log::Level = log::Level::Debug;

/// Initialize the console logger at the configured level
pub fn init(settings: &LoggingSettings) -> Result<()> {
    let level = parse_level(&settings.level);
    console_log::init_with_level(level).map_err(|e| Error::LoggingInit(e.to_string()))?;

    tracing::info!("Portfolio starting (log level {})", level);
    Ok(())
}

/// Map a config level name to a `log::Level`, defaulting to debug
pub fn parse_level(name: &str) -> log::Level {
    log::Level::from_str(name.trim()).unwrap_or(DEFAULT_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_names() {
        assert_eq!(parse_level("warn"), log::Level::Warn);
        assert_eq!(parse_level("INFO"), log::Level::Info);
        assert_eq!(parse_level(" trace "), log::Level::Trace);
    }

    #[test]
    fn test_parse_level_falls_back() {
        assert_eq!(parse_level("chatty"), DEFAULT_LEVEL);
        assert_eq!(parse_level(""), DEFAULT_LEVEL);
    }
}
