use yew::prelude::*;

use crate::adaptive::context::use_adaptive;
use crate::adaptive::loader::SectionId;
use crate::adaptive::motion::Direction;
use crate::adaptive::reveal::{use_reveal, RevealOptions};
use crate::components::loading::SectionFallback;
use crate::config;
use crate::content::{self, Feature};

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub feature: Feature,
    pub index: usize,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let adaptive = use_adaptive();
    let reveal = use_reveal(RevealOptions::default());
    let feature = &props.feature;

    html! {
        <div
            class="feature-slot"
            ref={reveal.node.clone()}
            style={adaptive.policy.entrance_style(reveal.is_visible(), props.index, Direction::Below)}
        >
            <div class="feature-card card-glass lift" style={adaptive.policy.hover_style()}>
                <div class="feature-icon" style={format!("background: {};", feature.gradient)}>
                    {&feature.icon}
                </div>
                <h3>{&feature.title}</h3>
                <p>{&feature.description}</p>
            </div>
        </div>
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    let adaptive = use_adaptive();
    let reveal = use_reveal(RevealOptions::default());

    let Ok(catalog) = content::catalog() else {
        return html! { <SectionFallback section={SectionId::Features} /> };
    };

    html! {
        <section class="section features" id="features">
            <style>
                {r#"
                    .features-head {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .features-head .section-lead {
                        margin: 0 auto;
                    }
                    .features-grid {
                        display: grid;
                        gap: 2rem;
                    }
                    .feature-slot {
                        display: flex;
                    }
                    .feature-card {
                        flex: 1;
                        padding: 2rem;
                    }
                    .feature-card h3 {
                        font-size: 1.25rem;
                        margin-bottom: 0.75rem;
                    }
                    .feature-card p {
                        color: var(--text-secondary);
                        line-height: 1.6;
                    }
                    .feature-icon {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.75rem;
                        margin-bottom: 1.5rem;
                    }
                    .features-more {
                        text-align: center;
                        margin-top: 4rem;
                    }
                    @media (min-width: 768px) {
                        .features-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .features-grid { grid-template-columns: repeat(3, 1fr); gap: 2.5rem; }
                    }
                "#}
            </style>
            <div class="container">
                <div
                    class="features-head"
                    ref={reveal.node.clone()}
                    style={adaptive.policy.entrance_style(reveal.is_visible(), 0, Direction::Below)}
                >
                    <h2 class="section-title">
                        {"Why Learn with "}
                        <span class="gradient-text">{config::PRODUCT_NAME}</span>
                    </h2>
                    <p class="section-lead">
                        {"Experience the future of language learning with our innovative approach \
                          that makes mastering English engaging, effective, and enjoyable."}
                    </p>
                </div>

                <div class="features-grid">
                    { for catalog.features.iter().enumerate().map(|(index, feature)| html! {
                        <FeatureCard key={feature.id.clone()} feature={feature.clone()} index={index} />
                    }) }
                </div>

                <div class="features-more">
                    <button class="btn-primary lift" style={adaptive.policy.hover_style()}>
                        {"Explore All Features"}
                    </button>
                </div>
            </div>
        </section>
    }
}
