use yew::prelude::*;

use crate::adaptive::context::use_adaptive;
use crate::adaptive::motion::Direction;
use crate::adaptive::reveal::{use_reveal, RevealOptions};
use crate::config;

#[function_component(CtaBand)]
pub fn cta_band() -> Html {
    let adaptive = use_adaptive();
    let policy = adaptive.policy;
    let reveal = use_reveal(RevealOptions::default());
    let visible = reveal.is_visible();

    html! {
        <section class="section cta-band" id="cta" ref={reveal.node.clone()}>
            <style>
                {r#"
                    .cta-band {
                        overflow: hidden;
                        background: linear-gradient(135deg, var(--primary), #9333ea, var(--accent));
                        color: white;
                    }
                    .cta-band::after {
                        content: "";
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.2), transparent);
                        pointer-events: none;
                    }
                    .cta-glow {
                        position: absolute;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.1);
                        filter: blur(24px);
                    }
                    .cta-inner {
                        position: relative;
                        z-index: 1;
                        text-align: center;
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .cta-spark {
                        display: inline-flex;
                        width: 5rem;
                        height: 5rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.2);
                        align-items: center;
                        justify-content: center;
                        font-size: 2.5rem;
                        margin-bottom: 2rem;
                    }
                    .cta-band h2 {
                        font-size: 2.25rem;
                        line-height: 1.2;
                        margin-bottom: 1.5rem;
                    }
                    .cta-band h2 span {
                        color: #fde047;
                    }
                    .cta-band p {
                        font-size: 1.125rem;
                        color: rgba(255, 255, 255, 0.9);
                        max-width: 42rem;
                        margin: 0 auto 2.5rem;
                        line-height: 1.7;
                    }
                    .cta-actions {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                    }
                    .cta-trial {
                        background: white;
                        color: var(--primary);
                        font-weight: 700;
                        font-size: 1.125rem;
                        padding: 1rem 2rem;
                        border-radius: 1rem;
                        border: none;
                        cursor: pointer;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
                    }
                    .cta-demo {
                        background: rgba(255, 255, 255, 0.2);
                        color: white;
                        font-size: 1.125rem;
                        padding: 1rem 2rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        cursor: pointer;
                    }
                    .cta-proof {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 2rem;
                        margin-top: 3rem;
                        color: rgba(255, 255, 255, 0.8);
                        font-size: 0.875rem;
                    }
                    .cta-avatars span {
                        display: inline-flex;
                        width: 2rem;
                        height: 2rem;
                        margin-right: -0.5rem;
                        border-radius: 9999px;
                        border: 2px solid white;
                        background: linear-gradient(135deg, #facc15, #f97316);
                        align-items: center;
                        justify-content: center;
                        font-size: 0.75rem;
                        font-weight: 700;
                    }
                    @media (min-width: 1024px) {
                        .cta-band h2 { font-size: 3.75rem; }
                    }
                "#}
            </style>
            <div class="cta-glow" style="top: 2.5rem; left: 2.5rem; width: 5rem; height: 5rem;"></div>
            <div class="cta-glow" style="bottom: 2.5rem; right: 2.5rem; width: 8rem; height: 8rem;"></div>
            <div class="cta-glow" style="top: 50%; left: 25%; width: 4rem; height: 4rem;"></div>
            <div class="container cta-inner">
                <div class="cta-spark" style={policy.entrance_style(visible, 0, Direction::None)}>{"✨"}</div>
                <h2 style={policy.entrance_style(visible, 1, Direction::Below)}>
                    {"Ready to Transform Your "}
                    <span>{"English Skills?"}</span>
                </h2>
                <p style={policy.entrance_style(visible, 2, Direction::Below)}>
                    {format!(
                        "Join thousands of learners who have already improved their English with {}. \
                         Start your journey today with our free trial and experience the difference.",
                        config::PRODUCT_NAME
                    )}
                </p>
                <div class="cta-actions" style={policy.entrance_style(visible, 3, Direction::Below)}>
                    <button class="cta-trial lift" style={policy.hover_style()}>{"Start Free Trial ▶"}</button>
                    <button class="cta-demo lift" style={policy.hover_style()}>{"Watch Demo →"}</button>
                </div>
                <div class="cta-proof" style={policy.entrance_style(visible, 4, Direction::Below)}>
                    <div class="cta-avatars">
                        { for ['B', 'C', 'D', 'E', 'F'].iter().map(|c| html! { <span>{c.to_string()}</span> }) }
                        <em style="margin-left: 1rem;">{"50,000+ happy learners"}</em>
                    </div>
                    <div>{"★★★★★ 4.9/5 average rating"}</div>
                    <div>{"✓ No credit card required"}</div>
                </div>
            </div>
        </section>
    }
}
