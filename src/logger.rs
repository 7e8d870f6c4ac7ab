//! Stderr logging for the binaries.
//!
//! stdout carries the UCI protocol, so records go to stderr. The backend's
//! own filter accepts everything; `log::set_max_level` is the only switch,
//! which lets `debug on|off` change verbosity while the engine runs.

use std::str::FromStr;

use log::{LevelFilter, SetLoggerError};
use once_cell::sync::OnceCell;

/// Environment variable holding the initial level (`error` .. `trace`, `off`).
pub const LOG_ENV: &str = "MAILBOX_LOG";

/// Level used when [`LOG_ENV`] is unset or unreadable.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

static BASE_LEVEL: OnceCell<LevelFilter> = OnceCell::new();

/// Parse a level name, falling back to `default`.
#[must_use]
pub fn level_from_env(value: Option<&str>, default: LevelFilter) -> LevelFilter {
    value
        .and_then(|v| LevelFilter::from_str(v.trim()).ok())
        .unwrap_or(default)
}

/// Level to run at with debug mode `enabled` on top of `base`.
#[must_use]
pub fn debug_level(enabled: bool, base: LevelFilter) -> LevelFilter {
    if enabled {
        base.max(LevelFilter::Debug)
    } else {
        base
    }
}

/// Install the stderr logger at the level named by [`LOG_ENV`].
pub fn init() -> Result<(), SetLoggerError> {
    init_with_default(DEFAULT_LEVEL)
}

/// Like [`init`], with a different fallback level.
pub fn init_with_default(default: LevelFilter) -> Result<(), SetLoggerError> {
    let env = std::env::var(LOG_ENV).ok();
    let level = level_from_env(env.as_deref(), default);
    let base = *BASE_LEVEL.get_or_init(|| level);

    env_logger::Builder::new()
        .filter_level(LevelFilter::Trace)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init()?;

    // try_init opens the max level to match its filter
    log::set_max_level(base);
    Ok(())
}

/// Toggle debug output (UCI `debug on|off`).
pub fn set_debug(enabled: bool) {
    let base = BASE_LEVEL.get().copied().unwrap_or(DEFAULT_LEVEL);
    log::set_max_level(debug_level(enabled, base));
}
