use std::time::Duration;

use gloo_timers::callback::Timeout;
use log::{debug, info};
use yew::prelude::*;

use crate::adaptive::context::use_adaptive;
use crate::config;
use crate::consent::{banner_visible, ConsentChoice, ConsentState, ConsentStore};

fn banner_style(is_static: bool) -> &'static str {
    if is_static {
        "animation: none;"
    } else {
        "animation: consentRise 0.35s cubic-bezier(0.34, 1.3, 0.64, 1) both;"
    }
}

/// Bottom banner asking for cookie consent. Shown once, after a short delay,
/// to visitors who haven't decided yet.
#[function_component(CookieNotice)]
pub fn cookie_notice() -> Html {
    let adaptive = use_adaptive();
    let consent = use_state(|| ConsentStore::browser().read());
    let since_mount = use_state(|| Duration::ZERO);

    {
        let since_mount = since_mount.clone();
        use_effect_with_deps(
            move |state: &ConsentState| {
                let timer = (*state == ConsentState::Unset).then(|| {
                    debug!("Consent unset, banner in {} ms", config::CONSENT_BANNER_DELAY_MS);
                    Timeout::new(config::CONSENT_BANNER_DELAY_MS, move || {
                        since_mount.set(Duration::from_millis(u64::from(config::CONSENT_BANNER_DELAY_MS)));
                    })
                });
                move || drop(timer)
            },
            *consent,
        );
    }

    if !banner_visible(*consent, *since_mount) {
        return html! {};
    }

    let choose = |choice: ConsentChoice| {
        let consent = consent.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Cookie consent: {:?}", choice);
            consent.set(ConsentStore::browser().record(choice));
        })
    };

    html! {
        <div class="cookie-notice" role="dialog" aria-label="Cookie consent" style={banner_style(adaptive.policy.is_static())}>
            <style>
                {r#"
                    .cookie-notice {
                        position: fixed;
                        bottom: 1rem;
                        left: 1rem;
                        right: 1rem;
                        z-index: 50;
                    }
                    .cookie-card {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        padding: 1rem;
                    }
                    .cookie-card h3 {
                        font-size: 1rem;
                        margin-bottom: 0.5rem;
                    }
                    .cookie-card p {
                        font-size: 0.875rem;
                        color: var(--text-secondary);
                        margin-bottom: 1rem;
                    }
                    .cookie-actions {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .cookie-actions button {
                        flex: 1;
                        padding: 0.5rem 1rem;
                        border-radius: 0.5rem;
                        border: none;
                        font-size: 0.875rem;
                        font-weight: 500;
                        cursor: pointer;
                    }
                    .cookie-accept {
                        background: var(--primary);
                        color: white;
                    }
                    .cookie-decline {
                        background: #f3f4f6;
                        color: #374151;
                    }
                    .cookie-close {
                        background: none;
                        border: none;
                        padding: 0.25rem;
                        cursor: pointer;
                        color: var(--text-secondary);
                    }
                    @keyframes consentRise {
                        from { transform: translateY(100px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    @media (min-width: 640px) {
                        .cookie-actions { flex-direction: row; }
                    }
                    @media (min-width: 768px) {
                        .cookie-notice { left: auto; max-width: 28rem; }
                    }
                "#}
            </style>
            <div class="cookie-card card-glass">
                <span aria-hidden="true">{"🍪"}</span>
                <div>
                    <h3>{"We use cookies"}</h3>
                    <p>
                        {"We use cookies to enhance your learning experience and analyze site usage. \
                          By continuing, you agree to our use of cookies."}
                    </p>
                    <div class="cookie-actions">
                        <button class="cookie-accept" onclick={choose(ConsentChoice::Accept)}>{"Accept All"}</button>
                        <button class="cookie-decline" onclick={choose(ConsentChoice::Decline)}>{"Decline"}</button>
                    </div>
                </div>
                <button class="cookie-close" aria-label="Close cookie notice" onclick={choose(ConsentChoice::Decline)}>
                    {"✕"}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_skips_entrance_under_reduced_motion() {
        assert_eq!(banner_style(true), "animation: none;");
        assert!(banner_style(false).contains("consentRise"));
    }
}
