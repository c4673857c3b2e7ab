use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::consent::{ConsentChoice, ConsentStore};
use crate::Route;

/// Explains what is stored and lets the visitor change their decision.
#[function_component(CookiePolicy)]
pub fn cookie_policy() -> Html {
    let consent = use_state(|| ConsentStore::browser().read());

    let choose = |choice: ConsentChoice| {
        let consent = consent.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Cookie consent changed on policy page: {:?}", choice);
            consent.set(ConsentStore::browser().record(choice));
        })
    };

    html! {
        <div class="cookie-policy section">
            <style>
                {r#"
                    .cookie-policy .container {
                        max-width: 48rem;
                    }
                    .cookie-policy h1 {
                        font-size: 2.25rem;
                        margin-bottom: 1.5rem;
                    }
                    .cookie-policy h2 {
                        font-size: 1.25rem;
                        margin: 2rem 0 0.75rem;
                    }
                    .cookie-policy p {
                        color: var(--text-secondary);
                        line-height: 1.7;
                    }
                    .cookie-policy code {
                        background: rgba(88, 101, 242, 0.1);
                        padding: 0.125rem 0.375rem;
                        border-radius: 0.25rem;
                    }
                    .consent-panel {
                        margin-top: 2rem;
                        padding: 1.5rem;
                    }
                    .consent-panel .consent-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        margin-top: 1rem;
                    }
                    .back-link {
                        display: inline-block;
                        margin-bottom: 2rem;
                        color: var(--primary);
                        text-decoration: none;
                        font-weight: 600;
                    }
                "#}
            </style>
            <div class="container">
                <Link<Route> to={Route::Home} classes="back-link">
                    {"← Back to home"}
                </Link<Route>>
                <h1>{"Cookie Policy"}</h1>
                <p>
                    {format!(
                        "{} keeps a single entry in your browser's local storage to remember \
                         whether you accepted or declined cookies. Nothing else is stored and \
                         nothing is sent to a server.",
                        config::PRODUCT_NAME
                    )}
                </p>
                <h2>{"What we store"}</h2>
                <p>
                    <code>{config::CONSENT_STORAGE_KEY}</code>
                    {" holds "}<code>{"true"}</code>{" when you accept and "}<code>{"false"}</code>
                    {" when you decline. Clearing your browser data resets it and the banner will ask again."}
                </p>

                <div class="consent-panel card-glass">
                    <h2>{"Your choice"}</h2>
                    <p>{format!("Current setting: {}", consent.label())}</p>
                    <div class="consent-actions">
                        <button class="btn-primary" onclick={choose(ConsentChoice::Accept)}>{"Accept All"}</button>
                        <button class="btn-secondary" onclick={choose(ConsentChoice::Decline)}>{"Decline"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
