use log::Level;

pub const PRODUCT_NAME: &str = "LingoSpark";

/// Local storage key holding the cookie banner decision ("true" / "false").
pub const CONSENT_STORAGE_KEY: &str = "lingospark-cookies-accepted";

/// How long the cookie banner waits after mount before showing up.
pub const CONSENT_BANNER_DELAY_MS: u32 = 2_000;

/// Deferred sections give the event loop one turn before materialising, so the
/// eager part of the page always paints first.
pub const DEFERRED_LOAD_YIELD_MS: u32 = 0;

/// A deferred section that hasn't resolved by then gets its static fallback.
pub const DEFERRED_LOAD_TIMEOUT_MS: u32 = 8_000;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px";

/// Header switches to its opaque style past this scroll offset.
pub const HEADER_SCROLL_THRESHOLD: f64 = 20.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
pub fn show_crash_details() -> bool {
    true
}

#[cfg(not(debug_assertions))]
pub fn show_crash_details() -> bool {
    false
}
