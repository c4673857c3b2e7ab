//! A plain snapshot of the browser facts the page adapts to.
//!
//! Everything downstream (classification, motion policy) works on this value
//! instead of reaching into `window` itself, so it can be built by hand in tests.

use log::debug;
use web_sys::Window;

use crate::error::{js_error_text, PageError};

#[derive(Clone, Debug, PartialEq)]
pub struct EnvironmentSnapshot {
    /// `None` when the viewport width couldn't be read.
    pub viewport_width: Option<f64>,
    pub user_agent: String,
    pub prefers_reduced_motion: bool,
    pub prefers_dark: bool,
}

impl Default for EnvironmentSnapshot {
    /// The least surprising environment: unknown width, no UA hints,
    /// full motion, light scheme. Classifies as desktop.
    fn default() -> Self {
        Self {
            viewport_width: None,
            user_agent: String::new(),
            prefers_reduced_motion: false,
            prefers_dark: false,
        }
    }
}

impl EnvironmentSnapshot {
    #[cfg(test)]
    pub fn new(viewport_width: f64, user_agent: impl Into<String>, prefers_reduced_motion: bool) -> Self {
        Self {
            viewport_width: Some(viewport_width),
            user_agent: user_agent.into(),
            prefers_reduced_motion,
            prefers_dark: false,
        }
    }

    /// Reads the live browser environment. Each read that fails falls back to
    /// the default for that field; this never errors.
    pub fn capture() -> Self {
        let Some(window) = web_sys::window() else {
            debug!("No window object, using default environment");
            return Self::default();
        };

        let mut snapshot = Self::default();

        match viewport_width(&window) {
            Ok(width) => snapshot.viewport_width = Some(width),
            Err(e) => debug!("{}", e),
        }
        match window.navigator().user_agent() {
            Ok(ua) => snapshot.user_agent = ua,
            Err(e) => debug!("User agent unreadable: {}", js_error_text(&e)),
        }
        snapshot.prefers_reduced_motion = media_matches(&window, "(prefers-reduced-motion: reduce)");
        snapshot.prefers_dark = media_matches(&window, "(prefers-color-scheme: dark)");

        debug!("Captured environment: {:?}", snapshot);
        snapshot
    }
}

fn viewport_width(window: &Window) -> Result<f64, PageError> {
    window
        .inner_width()
        .map_err(|e| PageError::Environment(js_error_text(&e)))?
        .as_f64()
        .ok_or_else(|| PageError::Environment("innerWidth is not a number".to_string()))
}

/// Unsupported or failing media queries count as "no preference".
fn media_matches(window: &Window, query: &str) -> bool {
    match window.match_media(query) {
        Ok(Some(list)) => list.matches(),
        Ok(None) => false,
        Err(e) => {
            debug!("Media query {} failed: {}", query, js_error_text(&e));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_is_full_motion_without_hints() {
        let env = EnvironmentSnapshot::default();
        assert_eq!(env.viewport_width, None);
        assert!(env.user_agent.is_empty());
        assert!(!env.prefers_reduced_motion);
        assert!(!env.prefers_dark);
    }

    #[test]
    fn new_fills_width_and_agent() {
        let env = EnvironmentSnapshot::new(1280.0, "Mozilla/5.0", true);
        assert_eq!(env.viewport_width, Some(1280.0));
        assert_eq!(env.user_agent, "Mozilla/5.0");
        assert!(env.prefers_reduced_motion);
    }
}
