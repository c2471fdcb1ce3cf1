//! Application-wide constants.
//!
//! Timing, layout and path defaults live here so the rest of the code
//! never has to carry magic numbers around.

use std::path::PathBuf;

// ── Timing ────────────────────────────────────────────────────────
/// Default delay before the bot reply is appended (ms).
pub const DEFAULT_REPLY_DELAY_MS: u64 = 600;
/// Upper bound for the configurable reply delay (ms).
pub const MAX_REPLY_DELAY_MS: u64 = 10_000;
/// Event poll timeout (ms) -- how often the UI checks for input.
pub const EVENT_POLL_MS: u64 = 50;
/// Ticks between spinner frames (at EVENT_POLL_MS intervals).
pub const SPINNER_TICK_DIVISOR: u64 = 4;
/// Status message display duration (seconds).
pub const STATUS_MESSAGE_TIMEOUT_SECS: u64 = 4;

// ── UI Layout ─────────────────────────────────────────────────────
/// Header height (title, subtitle, tab strip).
pub const HEADER_HEIGHT: u16 = 5;
/// Row of the tab strip inside the header, for click detection.
pub const TAB_STRIP_ROW: u16 = 3;
/// Width of one tab label slot in the tab strip, for click detection.
pub const TAB_SLOT_WIDTH: u16 = 24;
/// Main chat panel width as a percentage of the body.
pub const MAIN_CHAT_PERCENT: u16 = 38;
/// Page up/down step size for content scrolling.
pub const PAGE_SIZE: usize = 10;
/// Default floating widget width (columns).
pub const DEFAULT_FLOATING_WIDTH: u16 = 44;
/// Default floating widget height (rows).
pub const DEFAULT_FLOATING_HEIGHT: u16 = 20;
/// Smallest floating widget that still fits a header, a bubble and an input.
pub const MIN_FLOATING_WIDTH: u16 = 28;
pub const MIN_FLOATING_HEIGHT: u16 = 10;
/// Margin between the floating widget and the screen edge.
pub const FLOATING_MARGIN: u16 = 1;
/// Help overlay dimensions.
pub const HELP_POPUP_WIDTH: u16 = 56;
pub const HELP_POPUP_HEIGHT: u16 = 27;

// ── Spinner Animation ─────────────────────────────────────────────
/// Spinner character sequence for the typing indicator.
pub const SPINNER_CHARS: &[&str] = &["◐", "◓", "◑", "◒"];

// ── Logging ───────────────────────────────────────────────────────
/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "TRAFFIC_ADVISOR_LOG";
/// Filter used when the environment variable is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

// ── Paths ─────────────────────────────────────────────────────────

/// Returns the user's home directory, falling back to /tmp.
pub fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string()))
}

/// Returns `~/.config/traffic-advisor/`.
pub fn config_dir() -> PathBuf {
    home_dir().join(".config").join("traffic-advisor")
}

/// Returns `~/.config/traffic-advisor/config.toml`.
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Returns `~/.config/traffic-advisor/themes/<name>.toml`.
pub fn custom_theme_path(name: &str) -> PathBuf {
    config_dir().join("themes").join(format!("{}.toml", name))
}

/// Returns `~/.local/share/traffic-advisor/`.
pub fn data_dir() -> PathBuf {
    home_dir().join(".local").join("share").join("traffic-advisor")
}

/// Returns `~/.local/share/traffic-advisor/traffic-advisor.log`.
pub fn log_file_path() -> PathBuf {
    data_dir().join("traffic-advisor.log")
}
