use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod consent;
mod content;
mod crash;
mod error;
mod theme;
mod adaptive {
    pub mod context;
    pub mod device;
    pub mod environment;
    pub mod loader;
    pub mod motion;
    pub mod reveal;
}
mod components {
    pub mod calendar_preview;
    pub mod cookie_notice;
    pub mod courses;
    pub mod cta_band;
    pub mod deferred;
    pub mod dictionary_preview;
    pub mod features;
    pub mod floating_bits;
    pub mod footer;
    pub mod games_preview;
    pub mod header;
    pub mod hero;
    pub mod loading;
}
mod pages {
    pub mod cookie_policy;
    pub mod landing;
}

use adaptive::context::Adaptive;
use adaptive::environment::EnvironmentSnapshot;
use pages::{cookie_policy::CookiePolicy, landing::Landing};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/cookies")]
    CookiePolicy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::CookiePolicy => {
            info!("Rendering Cookie Policy page");
            html! { <CookiePolicy /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    // Classified once; resizing or rotating later keeps the mount-time profile
    let adaptive = use_state(|| {
        let adaptive = Adaptive::from_environment(&EnvironmentSnapshot::capture());
        info!(
            "Device profile: {} (reduced motion: {})",
            adaptive.profile.class.as_str(),
            adaptive.profile.reduced_motion
        );
        adaptive
    });

    html! {
        <ContextProvider<Adaptive> context={(*adaptive).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Adaptive>>
    }
}

fn main() {
    crash::install();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        // Logging is best-effort; the page still renders without it
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    theme::mount();

    info!("Starting {}", config::PRODUCT_NAME);
    match web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        Some(_) => {
            yew::Renderer::<App>::new().render();
        }
        None => error!("No document body to render into"),
    }
}
