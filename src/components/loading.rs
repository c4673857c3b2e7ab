use yew::prelude::*;

use crate::adaptive::context::use_adaptive;
use crate::adaptive::loader::SectionId;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct SectionPlaceholderProps {
    pub section: SectionId,
}

/// Holds a deferred section's slot until its content is ready.
#[function_component(SectionPlaceholder)]
pub fn section_placeholder(props: &SectionPlaceholderProps) -> Html {
    let adaptive = use_adaptive();
    let animate = adaptive.policy.ambient;

    html! {
        <div class="section-placeholder" id={props.section.name()} aria-busy="true">
            <style>
                {r#"
                    .section-placeholder {
                        min-height: 60vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                    }
                    .placeholder-logo {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 1rem;
                        background: linear-gradient(135deg, var(--primary), var(--accent));
                        color: white;
                        font-weight: 700;
                        font-size: 1.25rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        box-shadow: 0 10px 25px rgba(88, 101, 242, 0.25);
                    }
                    .placeholder-dots {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .placeholder-dots span {
                        width: 0.75rem;
                        height: 0.75rem;
                        border-radius: 9999px;
                        background: var(--primary);
                        opacity: 0.7;
                    }
                    .placeholder-dots.pulsing span {
                        animation: placeholderPulse 1s ease-in-out infinite;
                    }
                    .placeholder-text {
                        color: var(--text-secondary);
                    }
                    @keyframes placeholderPulse {
                        0%, 100% { transform: scale(1); opacity: 0.7; }
                        50% { transform: scale(1.2); opacity: 1; }
                    }
                "#}
            </style>
            <div class="placeholder-logo">{"LS"}</div>
            <div class={classes!("placeholder-dots", animate.then(|| "pulsing"))}>
                { for (0..3).map(|i| html! {
                    <span style={format!("animation-delay: {:.1}s;", i as f64 * 0.2)}></span>
                }) }
            </div>
            <p class="placeholder-text">{"Loading your learning experience..."}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionFallbackProps {
    pub section: SectionId,
}

/// Static stand-in for a section that failed or timed out. No retry.
#[function_component(SectionFallback)]
pub fn section_fallback(props: &SectionFallbackProps) -> Html {
    html! {
        <section class="section section-fallback" id={props.section.name()}>
            <style>
                {r#"
                    .section-fallback .card-glass {
                        max-width: 32rem;
                        margin: 0 auto;
                        padding: 2rem;
                        text-align: center;
                        color: var(--text-secondary);
                    }
                "#}
            </style>
            <div class="container">
                <div class="card-glass">
                    <h3>{format!("More from {} is on its way", config::PRODUCT_NAME)}</h3>
                    <p>{"This part of the page couldn't be loaded right now. Refresh to try again."}</p>
                </div>
            </div>
        </section>
    }
}
