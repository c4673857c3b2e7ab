use log::info;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::adaptive::context::use_adaptive;
use crate::adaptive::motion::Direction;
use crate::adaptive::reveal::{use_reveal, RevealOptions};
use crate::config;
use crate::content::{self, FooterLink};
use crate::Route;

const CONTACT: [(&str, &str); 3] = [
    ("✉", "hello@lingospark.com"),
    ("☎", "+1 (555) 123-4567"),
    ("📍", "San Francisco, CA"),
];

const SOCIAL: [(&str, &str); 4] = [
    ("Facebook", "f"),
    ("Twitter", "𝕏"),
    ("Instagram", "◎"),
    ("YouTube", "▶"),
];

/// Footer hrefs starting with `/` are app routes, everything else is a plain link.
pub fn route_for(href: &str) -> Option<Route> {
    if href.starts_with('/') {
        Route::recognize(href)
    } else {
        None
    }
}

fn footer_link(link: &FooterLink) -> Html {
    match route_for(&link.href) {
        Some(route) => html! { <Link<Route> to={route}>{&link.label}</Link<Route>> },
        None => html! { <a href={link.href.clone()}>{&link.label}</a> },
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let adaptive = use_adaptive();
    let policy = adaptive.policy;
    let reveal = use_reveal(RevealOptions::default());
    let visible = reveal.is_visible();
    let language = use_state(|| "English".to_string());

    let on_language = {
        let language = language.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            info!("Language selected: {}", select.value());
            language.set(select.value());
        })
    };

    let (sections, languages) = match content::catalog() {
        Ok(catalog) => (catalog.footer_sections.as_slice(), catalog.languages.as_slice()),
        Err(_) => (&[][..], &[][..]),
    };

    html! {
        <footer class="site-footer" ref={reveal.node.clone()}>
            <style>
                {r#"
                    .site-footer {
                        background: var(--text-primary);
                        color: white;
                        position: relative;
                        overflow: hidden;
                    }
                    .footer-top {
                        display: grid;
                        gap: 2rem;
                        padding: 4rem 0 3rem;
                    }
                    .footer-brand p {
                        color: #d1d5db;
                        max-width: 28rem;
                        margin: 1.5rem 0;
                    }
                    .footer-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    .footer-logo span:first-child {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.5rem;
                        background: linear-gradient(135deg, var(--primary), var(--accent));
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.125rem;
                    }
                    .footer-contact {
                        list-style: none;
                        padding: 0;
                        margin: 0 0 1.5rem;
                        display: grid;
                        gap: 0.75rem;
                        color: #d1d5db;
                    }
                    .footer-social {
                        display: flex;
                        gap: 1rem;
                    }
                    .footer-social a {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.5rem;
                        background: rgba(255, 255, 255, 0.1);
                        color: white;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-decoration: none;
                    }
                    .footer-links {
                        display: grid;
                        gap: 2rem;
                    }
                    .footer-links h3 {
                        font-size: 1rem;
                        margin-bottom: 1rem;
                    }
                    .footer-links ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        display: grid;
                        gap: 0.75rem;
                    }
                    .site-footer a {
                        color: #d1d5db;
                        text-decoration: none;
                    }
                    .site-footer a:hover {
                        color: white;
                    }
                    .footer-bottom {
                        border-top: 1px solid #374151;
                        padding: 2rem 0;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1.5rem;
                        font-size: 0.875rem;
                        color: #d1d5db;
                    }
                    .footer-bottom select {
                        background: rgba(255, 255, 255, 0.1);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 0.5rem;
                        padding: 0.5rem 1rem;
                        color: white;
                        font-size: 0.875rem;
                    }
                    .footer-bottom select option {
                        background: #1f2937;
                    }
                    .footer-legal {
                        display: flex;
                        gap: 1.5rem;
                    }
                    @media (min-width: 640px) {
                        .footer-links { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .footer-top { grid-template-columns: 2fr 3fr; gap: 3rem; }
                        .footer-links { grid-template-columns: repeat(4, 1fr); }
                        .footer-bottom { flex-direction: row; justify-content: space-between; }
                    }
                "#}
            </style>
            <div class="container">
                <div class="footer-top">
                    <div class="footer-brand" style={policy.entrance_style(visible, 0, Direction::Below)}>
                        <div class="footer-logo">
                            <span>{"LS"}</span>
                            <span>{config::PRODUCT_NAME}</span>
                        </div>
                        <p>
                            {"Transform your English learning journey with our innovative platform. \
                              Join thousands of learners worldwide and master English the fun way."}
                        </p>
                        <ul class="footer-contact">
                            { for CONTACT.iter().map(|(icon, text)| html! { <li>{format!("{}  {}", icon, text)}</li> }) }
                        </ul>
                        <div class="footer-social">
                            { for SOCIAL.iter().map(|(label, glyph)| html! {
                                <a href="#" aria-label={*label} class="lift" style={policy.hover_style()}>{*glyph}</a>
                            }) }
                        </div>
                    </div>
                    <div class="footer-links">
                        { for sections.iter().enumerate().map(|(i, section)| html! {
                            <div key={section.title.clone()} style={policy.entrance_style(visible, i + 1, Direction::Below)}>
                                <h3>{&section.title}</h3>
                                <ul>
                                    { for section.links.iter().map(|link| html! { <li>{footer_link(link)}</li> }) }
                                </ul>
                            </div>
                        }) }
                    </div>
                </div>
                <div class="footer-bottom">
                    <div>{format!("© 2024 {}. All rights reserved.", config::PRODUCT_NAME)}</div>
                    <select aria-label="Language" onchange={on_language}>
                        { for languages.iter().map(|lang| html! {
                            <option value={lang.clone()} selected={*lang == *language}>{lang}</option>
                        }) }
                    </select>
                    <div class="footer-legal">
                        <a href="#">{"Privacy"}</a>
                        <a href="#">{"Terms"}</a>
                        <Link<Route> to={Route::CookiePolicy}>{"Cookies"}</Link<Route>>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_hrefs_become_routes() {
        assert_eq!(route_for("/cookies"), Some(Route::CookiePolicy));
        assert_eq!(route_for("/"), Some(Route::Home));
        assert_eq!(route_for("#features"), None);
        assert_eq!(route_for("#"), None);
    }

    #[test]
    fn cookie_policy_link_is_in_the_legal_group() {
        let catalog = content::catalog().unwrap();
        let legal = catalog.footer_sections.iter().find(|s| s.title == "Legal").unwrap();
        assert!(legal
            .links
            .iter()
            .any(|l| l.label == "Cookie Policy" && route_for(&l.href) == Some(Route::CookiePolicy)));
    }
}
