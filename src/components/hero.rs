use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::adaptive::context::use_adaptive;
use crate::adaptive::device::DeviceClass;
use crate::adaptive::motion::{AnimationPolicy, Direction};
use crate::adaptive::reveal::{use_reveal, RevealOptions};
use crate::components::floating_bits::FloatingBits;
use crate::components::header::scroll_to_section;
use crate::config;
use crate::error::js_error_text;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Badge {
    pub text: &'static str,
    pub gradient: &'static str,
    /// `(top, right)` in percent.
    pub position: (u8, u8),
}

const BADGE_TEXT: [(&str, &str); 3] = [
    ("🏆 A+", "linear-gradient(135deg, #4ade80, #10b981)"),
    ("⭐ ★", "linear-gradient(135deg, #facc15, #f97316)"),
    ("📘 📚", "linear-gradient(135deg, #60a5fa, #a855f7)"),
];

pub fn badges(class: DeviceClass) -> Vec<Badge> {
    let positions = match class {
        DeviceClass::Mobile => [(15, 10), (65, 5), (40, 15)],
        DeviceClass::Tablet | DeviceClass::Desktop => [(20, 15), (60, 5), (40, 25)],
    };
    BADGE_TEXT
        .iter()
        .zip(positions)
        .map(|(&(text, gradient), position)| Badge { text, gradient, position })
        .collect()
}

/// Badges pop in after the copy: a longer base delay, scaled duration.
pub fn badge_entrance(policy: &AnimationPolicy, class: DeviceClass, index: usize, visible: bool) -> String {
    if policy.is_static() {
        return "opacity: 1; transform: scale(1); transition: none;".to_string();
    }
    if !visible {
        return "opacity: 0; transform: scale(0);".to_string();
    }
    let (base, step) = match class {
        DeviceClass::Mobile => (0.8, 0.1),
        DeviceClass::Tablet | DeviceClass::Desktop => (1.0, 0.2),
    };
    let duration = policy.duration * 1.2;
    let delay = base + step * index as f64;
    format!(
        "opacity: 1; transform: scale(1); transition: opacity {d:.2}s ease-out {delay:.2}s, transform {d:.2}s ease-out {delay:.2}s;",
        d = duration,
        delay = delay,
    )
}

/// Share of the pointer offset each badge follows; deeper badges move more.
fn badge_factor(index: usize) -> f64 {
    0.2 + index as f64 * 0.1
}

fn parallax_style(policy: &AnimationPolicy, offset: (f64, f64), factor: f64) -> String {
    match policy.parallax {
        Some(parallax) => format!(
            "transform: translate3d({:.1}px, {:.1}px, 0); transition: {};",
            offset.0 * factor,
            offset.1 * factor,
            parallax.css_transition()
        ),
        None => String::new(),
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let adaptive = use_adaptive();
    let policy = adaptive.policy;
    let class = adaptive.profile.class;
    let reveal = use_reveal(RevealOptions::default());
    let visible = reveal.is_visible();
    let pointer = use_state(|| (0.0_f64, 0.0_f64));

    // Pointer parallax, only when the policy enables it
    {
        let pointer = pointer.clone();
        use_effect_with_deps(
            move |policy: &AnimationPolicy| {
                let mut listener = None;
                if let Some(window) = web_sys::window().filter(|_| policy.parallax.is_some()) {
                    let policy = *policy;
                    let size_source = window.clone();
                    let on_move = Closure::wrap(Box::new(move |e: MouseEvent| {
                        let width = size_source.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                        let height = size_source.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                        if let Some(offset) =
                            policy.pointer_offset(e.client_x() as f64, e.client_y() as f64, width, height)
                        {
                            pointer.set(offset);
                        }
                    }) as Box<dyn FnMut(MouseEvent)>);

                    match window.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref()) {
                        Ok(()) => {
                            debug!("Pointer parallax on");
                            listener = Some((window, on_move));
                        }
                        Err(e) => warn!("Pointer parallax unavailable: {}", js_error_text(&e)),
                    }
                }

                move || {
                    if let Some((window, on_move)) = listener {
                        let _ = window.remove_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
                    }
                }
            },
            policy,
        );
    }

    let mascot_factor = policy.parallax.map(|p| p.mascot_factor).unwrap_or(0.0);
    let go_features = {
        let reduced_motion = adaptive.profile.reduced_motion;
        Callback::from(move |_: MouseEvent| scroll_to_section("features", reduced_motion))
    };

    html! {
        <section class="hero" id="hero" ref={reveal.node.clone()}>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                        padding-top: 5rem;
                    }
                    .hero-grid {
                        position: relative;
                        z-index: 1;
                        display: grid;
                        gap: 2rem;
                        align-items: center;
                    }
                    .hero-copy {
                        text-align: center;
                    }
                    .hero h1 {
                        font-size: 2.25rem;
                        line-height: 1.15;
                        margin-bottom: 1.5rem;
                    }
                    .hero-lead {
                        font-size: 1.125rem;
                        color: var(--text-secondary);
                        margin: 0 auto 2rem;
                        max-width: 42rem;
                    }
                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                    }
                    .hero-stats {
                        display: flex;
                        justify-content: center;
                        gap: 2rem;
                        margin-top: 2rem;
                        color: var(--text-secondary);
                        text-align: center;
                    }
                    .hero-stats strong {
                        display: block;
                        font-size: 1.5rem;
                        color: var(--text-primary);
                    }
                    .hero-art {
                        position: relative;
                        display: flex;
                        justify-content: center;
                    }
                    .mascot {
                        width: 16rem;
                        height: 16rem;
                        filter: drop-shadow(0 25px 25px rgba(15, 23, 42, 0.15));
                    }
                    .hero-badge {
                        position: absolute;
                        z-index: 2;
                    }
                    .hero-badge span {
                        display: inline-block;
                        color: white;
                        font-weight: 700;
                        font-size: 0.875rem;
                        padding: 0.75rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        box-shadow: 0 10px 15px rgba(15, 23, 42, 0.15);
                    }
                    @media (min-width: 1024px) {
                        .hero-grid { grid-template-columns: 1fr 1fr; gap: 3rem; }
                        .hero-copy { text-align: left; }
                        .hero h1 { font-size: 3.75rem; }
                        .hero-lead { margin-left: 0; }
                        .hero-actions, .hero-stats { justify-content: flex-start; }
                        .mascot { width: 24rem; height: 24rem; }
                    }
                "#}
            </style>
            <FloatingBits />
            <div class="container hero-grid">
                <div class="hero-copy" style={policy.entrance_style(visible, 0, Direction::Left)}>
                    <h1 style={policy.entrance_style(visible, 1, Direction::Below)}>
                        {"Learn English the "}
                        <span class="gradient-text">{"Fun Way"}</span>
                        {format!(" with {}", config::PRODUCT_NAME)}
                    </h1>
                    <p class="hero-lead" style={policy.entrance_style(visible, 2, Direction::Below)}>
                        {"Master English through interactive games, personalized learning paths, and \
                          AI-powered practice sessions. Join thousands of learners worldwide."}
                    </p>
                    <div class="hero-actions" style={policy.entrance_style(visible, 3, Direction::Below)}>
                        <button class="btn-primary lift" style={policy.hover_style()}>{"Start Free ▶"}</button>
                        <button class="btn-secondary lift" style={policy.hover_style()} onclick={go_features}>
                            {"Explore Features"}
                        </button>
                    </div>
                    <div class="hero-stats" style={policy.entrance_style(visible, 4, Direction::None)}>
                        <div><strong>{"50K+"}</strong>{"Active Learners"}</div>
                        <div><strong>{"4.9★"}</strong>{"App Rating"}</div>
                        <div><strong>{"30+"}</strong>{"Languages"}</div>
                    </div>
                </div>

                <div class="hero-art" style={policy.entrance_style(visible, 1, Direction::Right)}>
                    <div style={parallax_style(&policy, *pointer, mascot_factor)}>
                        <Mascot />
                    </div>
                    { for badges(class).iter().enumerate().map(|(i, badge)| html! {
                        <div
                            class="hero-badge"
                            style={format!(
                                "top: {}%; right: {}%; {}",
                                badge.position.0,
                                badge.position.1,
                                badge_entrance(&policy, class, i, visible)
                            )}
                        >
                            <span style={format!("background: {}; {}", badge.gradient, parallax_style(&policy, *pointer, badge_factor(i)))}>
                                {badge.text}
                            </span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Mascot)]
fn mascot() -> Html {
    html! {
        <svg class="mascot" viewBox="0 0 200 200" xmlns="http://www.w3.org/2000/svg" role="img" aria-label="Owl mascot">
            <ellipse cx="100" cy="120" rx="45" ry="55" fill="#5865F2" opacity="0.9" />
            <circle cx="100" cy="70" r="40" fill="#5865F2" />
            <circle cx="88" cy="65" r="12" fill="white" />
            <circle cx="112" cy="65" r="12" fill="white" />
            <circle cx="88" cy="65" r="8" fill="#0F172A" />
            <circle cx="112" cy="65" r="8" fill="#0F172A" />
            <circle cx="90" cy="63" r="3" fill="white" />
            <circle cx="114" cy="63" r="3" fill="white" />
            <circle cx="88" cy="65" r="15" fill="none" stroke="#FFB86B" stroke-width="3" />
            <circle cx="112" cy="65" r="15" fill="none" stroke="#FFB86B" stroke-width="3" />
            <line x1="103" y1="65" x2="97" y2="65" stroke="#FFB86B" stroke-width="3" />
            <polygon points="100,75 95,85 105,85" fill="#FFB86B" />
            <ellipse cx="70" cy="110" rx="15" ry="25" fill="#4C51BF" transform="rotate(-20 70 110)" />
            <ellipse cx="130" cy="110" rx="15" ry="25" fill="#4C51BF" transform="rotate(20 130 110)" />
            <ellipse cx="85" cy="165" rx="8" ry="12" fill="#FFB86B" />
            <ellipse cx="115" cy="165" rx="8" ry="12" fill="#FFB86B" />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_badges_sit_closer_to_the_edge() {
        let mobile = badges(DeviceClass::Mobile);
        let desktop = badges(DeviceClass::Desktop);
        assert_eq!(mobile[0].position, (15, 10));
        assert_eq!(desktop[2].position, (40, 25));
        assert_eq!(mobile[1].text, desktop[1].text);
    }

    #[test]
    fn badge_timing_depends_on_class() {
        let mobile = badge_entrance(&AnimationPolicy::MOBILE, DeviceClass::Mobile, 2, true);
        assert!(mobile.contains("0.36s ease-out 1.00s"), "{}", mobile);

        let desktop = badge_entrance(&AnimationPolicy::DESKTOP, DeviceClass::Desktop, 1, true);
        assert!(desktop.contains("0.60s ease-out 1.20s"), "{}", desktop);
    }

    #[test]
    fn static_badges_are_already_in_place() {
        let hidden = badge_entrance(&AnimationPolicy::STATIC, DeviceClass::Desktop, 0, false);
        assert!(hidden.contains("scale(1)"));
        assert!(hidden.contains("transition: none"));
    }

    #[test]
    fn parallax_is_empty_without_policy_block() {
        assert!(parallax_style(&AnimationPolicy::MOBILE, (10.0, 10.0), 0.5).is_empty());
        let desktop = parallax_style(&AnimationPolicy::DESKTOP, (10.0, -4.0), 0.5);
        assert!(desktop.starts_with("transform: translate3d(5.0px, -2.0px, 0);"), "{}", desktop);
    }
}
