//! Page-wide styles shared by every section.

use log::{debug, error};
use stylist::GlobalStyle;

const THEME_CSS: &str = r#"
    :root {
        --primary: #5865f2;
        --accent: #ffb86b;
        --text-primary: #0f172a;
        --text-secondary: #475569;
        --background-start: #f8fafc;
        --background-end: #eef2ff;
    }
    *, *::before, *::after {
        box-sizing: border-box;
    }
    html {
        scroll-behavior: smooth;
    }
    @media (prefers-reduced-motion: reduce) {
        html {
            scroll-behavior: auto;
        }
    }
    body {
        margin: 0;
        font-family: Inter, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
        color: var(--text-primary);
        background: linear-gradient(135deg, var(--background-start), var(--background-end));
        overflow-x: hidden;
    }
    h1, h2, h3, h4 {
        font-family: Poppins, Inter, sans-serif;
        margin: 0;
    }
    p {
        margin: 0;
    }
    .container {
        width: 100%;
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1rem;
    }
    .section {
        position: relative;
        padding: 5rem 0;
    }
    .section-title {
        font-size: 2.25rem;
        font-weight: 700;
        margin-bottom: 1.5rem;
        line-height: 1.2;
    }
    .section-lead {
        font-size: 1.125rem;
        color: var(--text-secondary);
        max-width: 48rem;
    }
    .gradient-text {
        background: linear-gradient(90deg, var(--primary), var(--accent));
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .btn-primary {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        background: var(--primary);
        color: white;
        border: none;
        border-radius: 0.75rem;
        padding: 0.75rem 1.5rem;
        font-weight: 600;
        font-size: 1rem;
        cursor: pointer;
        transition: transform 0.2s ease, box-shadow 0.2s ease;
    }
    .btn-secondary {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        background: rgba(255, 255, 255, 0.7);
        color: var(--text-primary);
        border: 1px solid rgba(88, 101, 242, 0.2);
        border-radius: 0.75rem;
        padding: 0.75rem 1.5rem;
        font-weight: 600;
        font-size: 1rem;
        cursor: pointer;
        transition: transform 0.2s ease;
    }
    .lift:hover {
        transform: scale(var(--hover-scale, 1));
    }
    @keyframes enterFrom {
        from {
            opacity: 0;
            transform: translate3d(var(--enter-x, 0), var(--enter-y, 0), 0);
        }
    }
    .card-glass {
        background: rgba(255, 255, 255, 0.6);
        backdrop-filter: blur(12px);
        border: 1px solid rgba(255, 255, 255, 0.2);
        border-radius: 1rem;
        box-shadow: 0 10px 25px rgba(15, 23, 42, 0.08);
    }
    .level-badge {
        font-size: 0.75rem;
        font-weight: 600;
        padding: 0.25rem 0.5rem;
        border-radius: 9999px;
    }
    .level-badge.beginner {
        background: #dcfce7;
        color: #15803d;
    }
    .level-badge.intermediate {
        background: #dbeafe;
        color: #1d4ed8;
    }
    .level-badge.advanced {
        background: #fee2e2;
        color: #b91c1c;
    }
    @media (min-width: 1024px) {
        .section {
            padding: 8rem 0;
        }
        .section-title {
            font-size: 3rem;
        }
        .container {
            padding: 0 2rem;
        }
    }
"#;

/// Mounts the theme into `<head>`. A parse failure leaves the page
/// unstyled but working.
pub fn mount() {
    match GlobalStyle::new(THEME_CSS) {
        Ok(_style) => debug!("Theme mounted"),
        Err(e) => error!("Failed to mount theme: {}", e),
    }
}
