use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::adaptive::context::use_adaptive;
use crate::adaptive::motion::Direction;
use crate::config;

const NAV_ITEMS: &[(&str, &str)] = &[
    ("Why LingoSpark", "features"),
    ("Dictionary", "dictionary"),
    ("Games", "games"),
    ("Courses", "courses"),
    ("Pricing", "pricing"),
];

fn scroll_behavior(reduced_motion: bool) -> ScrollBehavior {
    if reduced_motion {
        ScrollBehavior::Instant
    } else {
        ScrollBehavior::Smooth
    }
}

/// Scrolls the section with the given anchor id into view. Missing targets
/// are ignored (a deferred section may still be a placeholder with the same id).
pub fn scroll_to_section(anchor: &str, reduced_motion: bool) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(anchor))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(scroll_behavior(reduced_motion));
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "unset" });
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let adaptive = use_adaptive();
    let reduced_motion = adaptive.profile.reduced_motion;
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > config::HEADER_SCROLL_THRESHOLD;

    // Lock page scrolling while the mobile menu covers it
    {
        use_effect_with_deps(
            move |open: &bool| {
                set_body_scroll_locked(*open);
                || set_body_scroll_locked(false)
            },
            *menu_open,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let go_to = {
        let menu_open = menu_open.clone();
        move |anchor: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                scroll_to_section(anchor, reduced_motion);
                menu_open.set(false);
            })
        }
    };

    let to_top = Callback::from(move |_: MouseEvent| {
        if let Some(window) = window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    let header_style = if adaptive.policy.is_static() {
        "transform: none;".to_string()
    } else {
        format!("animation: headerDrop {:.2}s ease-out both;", adaptive.policy.duration)
    };

    html! {
        <header class={classes!("site-header", is_scrolled.then(|| "scrolled"))} style={header_style}>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .site-header.scrolled {
                        background: rgba(255, 255, 255, 0.8);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 10px 25px rgba(15, 23, 42, 0.08);
                    }
                    @keyframes headerDrop {
                        from { transform: translateY(-100px); }
                        to { transform: translateY(0); }
                    }
                    .nav-bar {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        height: 4rem;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        cursor: pointer;
                        background: none;
                        border: none;
                        padding: 0;
                    }
                    .logo-mark {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 0.5rem;
                        background: linear-gradient(135deg, var(--primary), var(--accent));
                        color: white;
                        font-weight: 700;
                        font-size: 0.875rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .logo-text {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: var(--text-primary);
                    }
                    .nav-links, .nav-actions {
                        display: none;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        color: var(--text-secondary);
                        font-weight: 500;
                        font-size: 1rem;
                        cursor: pointer;
                        text-decoration: none;
                    }
                    .nav-link:hover {
                        color: var(--primary);
                    }
                    .menu-toggle {
                        padding: 0.75rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: rgba(255, 255, 255, 0.1);
                        font-size: 1.25rem;
                        cursor: pointer;
                    }
                    .mobile-menu {
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.2);
                        box-shadow: 0 20px 25px rgba(15, 23, 42, 0.1);
                        padding: 1rem 0;
                    }
                    .mobile-menu .nav-link {
                        display: block;
                        width: 100%;
                        text-align: left;
                        padding: 0.75rem 1rem;
                        font-weight: 600;
                        color: var(--text-primary);
                        border-left: 4px solid transparent;
                    }
                    .mobile-menu .nav-link:hover {
                        border-left-color: var(--primary);
                    }
                    .mobile-menu .menu-actions {
                        border-top: 1px solid #e5e7eb;
                        margin-top: 1rem;
                        padding-top: 1rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    @media (min-width: 1024px) {
                        .nav-bar { height: 5rem; }
                        .nav-links, .nav-actions { display: flex; }
                        .menu-toggle, .mobile-menu { display: none; }
                    }
                "#}
            </style>
            <nav class="container">
                <div class="nav-bar">
                    <button class="nav-logo" onclick={to_top} aria-label="Back to top">
                        <span class="logo-mark">{"LS"}</span>
                        <span class="logo-text">{config::PRODUCT_NAME}</span>
                    </button>

                    <div class="nav-links">
                        { for NAV_ITEMS.iter().map(|(label, anchor)| html! {
                            <a class="nav-link" href={format!("#{}", anchor)} onclick={go_to(*anchor)}>
                                {*label}
                            </a>
                        }) }
                    </div>

                    <div class="nav-actions">
                        <button class="nav-link">{"Sign In"}</button>
                        <button class="btn-primary lift" style={adaptive.policy.hover_style()}>
                            {"Get Started"}
                        </button>
                    </div>

                    <button class="menu-toggle" onclick={toggle_menu} aria-label="Toggle menu">
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </nav>

            if *menu_open {
                <div class="mobile-menu">
                    <div class="container">
                        { for NAV_ITEMS.iter().enumerate().map(|(i, (label, anchor))| html! {
                            <a
                                class="nav-link"
                                href={format!("#{}", anchor)}
                                onclick={go_to(*anchor)}
                                style={adaptive.policy.mount_entrance_style(i, Direction::Left)}
                            >
                                {*label}
                            </a>
                        }) }
                        <div class="menu-actions">
                            <button class="nav-link">{"Sign In"}</button>
                            <button class="btn-primary">{"Get Started"}</button>
                        </div>
                    </div>
                </div>
            }
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_targets_point_at_page_sections() {
        use crate::adaptive::loader::SectionId;
        let anchors: Vec<_> = SectionId::DOCUMENT_ORDER.iter().map(|s| s.name()).collect();
        for (_, anchor) in NAV_ITEMS.iter().filter(|(_, a)| *a != "pricing") {
            assert!(anchors.contains(anchor), "{} is not a section", anchor);
        }
    }

    #[test]
    fn reduced_motion_jumps_instead_of_scrolling() {
        assert_eq!(scroll_behavior(true), ScrollBehavior::Instant);
        assert_eq!(scroll_behavior(false), ScrollBehavior::Smooth);
    }
}
