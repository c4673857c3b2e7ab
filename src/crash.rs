//! Page-wide recovery view.
//!
//! Yew can't recover from a panic inside a component, so the panic hook
//! takes over the whole document and offers a reload. There is no
//! per-section isolation: one broken section replaces the entire page.

use std::panic;

use log::error;
use web_sys::window;

use crate::config;

const RECOVERY_CSS: &str = r#"
    .crash-screen {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
        background: linear-gradient(135deg, #f8fafc, #eef2ff);
        font-family: Inter, -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
    }
    .crash-card {
        max-width: 28rem;
        width: 100%;
        text-align: center;
        background: rgba(255, 255, 255, 0.6);
        border: 1px solid rgba(255, 255, 255, 0.2);
        border-radius: 1rem;
        padding: 2rem;
        box-shadow: 0 10px 25px rgba(15, 23, 42, 0.1);
    }
    .crash-icon {
        width: 4rem;
        height: 4rem;
        margin: 0 auto 1rem;
        border-radius: 9999px;
        background: #fee2e2;
        color: #ef4444;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 2rem;
    }
    .crash-card h1 { font-size: 1.25rem; color: #0f172a; margin-bottom: 0.5rem; }
    .crash-card p { color: #475569; margin-bottom: 1.5rem; }
    .crash-card button {
        background: #5865f2;
        color: white;
        border: none;
        border-radius: 0.75rem;
        padding: 0.75rem 1.5rem;
        font-weight: 500;
        cursor: pointer;
    }
    .crash-card details { margin-top: 1.5rem; text-align: left; }
    .crash-card pre {
        margin-top: 0.5rem;
        padding: 0.75rem;
        background: #fef2f2;
        color: #b91c1c;
        border-radius: 0.5rem;
        font-size: 0.75rem;
        overflow: auto;
        white-space: pre-wrap;
    }
"#;

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Markup for the recovery view; `details` only goes in when given.
pub fn recovery_markup(details: Option<&str>) -> String {
    let details = details
        .map(|d| {
            format!(
                "<details><summary>Error Details (Development)</summary><pre>{}</pre></details>",
                escape_html(d)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<style>{css}</style>
<div class="crash-screen">
  <div class="crash-card">
    <div class="crash-icon">⚠</div>
    <h1>Oops! Something went wrong</h1>
    <p>We're sorry, but something unexpected happened. Please try refreshing the page.</p>
    <button type="button" onclick="window.location.reload()">↻ Refresh Page</button>
    {details}
  </div>
</div>"#,
        css = RECOVERY_CSS,
        details = details,
    )
}

fn show_recovery_view(message: &str) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let details = config::show_crash_details().then_some(message);
    body.set_inner_html(&recovery_markup(details));
}

/// Keeps the console panic output and then swaps the page for the recovery view.
pub fn install() {
    panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        let message = info.to_string();
        error!("Unrecoverable page error: {}", message);
        show_recovery_view(&message);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_offers_reload() {
        let html = recovery_markup(None);
        assert!(html.contains("Oops! Something went wrong"));
        assert!(html.contains("window.location.reload()"));
        assert!(!html.contains("<details>"));
    }

    #[test]
    fn details_are_escaped() {
        let html = recovery_markup(Some("panicked at <Hero> & \"friends\""));
        assert!(html.contains("<details>"));
        assert!(html.contains("panicked at &lt;Hero&gt; &amp; &quot;friends&quot;"));
    }
}
