use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::adaptive::context::use_adaptive;
use crate::adaptive::loader::SectionId;
use crate::adaptive::motion::Direction;
use crate::adaptive::reveal::{use_reveal, RevealOptions};
use crate::components::loading::SectionFallback;
use crate::content::{self, filter_words};

/// Clicking the open word closes it; clicking another one switches.
pub fn toggle_selection(current: Option<&str>, word: &str) -> Option<String> {
    match current {
        Some(open) if open == word => None,
        _ => Some(word.to_string()),
    }
}

/// Keys that activate a `role="button"` element, like a native button.
fn activates(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

const HIGHLIGHTS: [(&str, &str); 3] = [
    ("var(--primary)", "Smart spaced repetition algorithm"),
    ("var(--accent)", "Audio pronunciations & examples"),
    ("#22c55e", "Progress tracking & analytics"),
];

#[function_component(DictionaryPreview)]
pub fn dictionary_preview() -> Html {
    let adaptive = use_adaptive();
    let policy = adaptive.policy;
    let reveal = use_reveal(RevealOptions::default());
    let visible = reveal.is_visible();
    let query = use_state(String::new);
    let selected = use_state(|| None::<String>);

    let Ok(catalog) = content::catalog() else {
        return html! { <SectionFallback section={SectionId::Dictionary} /> };
    };
    let words = filter_words(&catalog.dictionary, &query);

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    html! {
        <section class="section dictionary" id="dictionary" ref={reveal.node.clone()}>
            <style>
                {r#"
                    .dictionary {
                        background: linear-gradient(135deg, rgba(239, 246, 255, 0.5), rgba(245, 243, 255, 0.5));
                    }
                    .dictionary-grid {
                        display: grid;
                        gap: 3rem;
                        align-items: center;
                    }
                    .dictionary-points {
                        list-style: none;
                        padding: 0;
                        margin: 2rem 0;
                        display: grid;
                        gap: 1rem;
                        color: var(--text-secondary);
                    }
                    .dictionary-points li {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .dictionary-points i {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 9999px;
                    }
                    .dictionary-app {
                        padding: 1.5rem;
                        max-width: 28rem;
                        margin: 0 auto;
                        width: 100%;
                    }
                    .dictionary-app header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 1.5rem;
                    }
                    .dictionary-search {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: rgba(255, 255, 255, 0.7);
                        font-size: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .word-list {
                        display: grid;
                        gap: 0.75rem;
                        max-height: 20rem;
                        overflow-y: auto;
                    }
                    .word-item {
                        background: rgba(255, 255, 255, 0.6);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 0.5rem;
                        padding: 1rem;
                        cursor: pointer;
                        text-align: left;
                        width: 100%;
                        font: inherit;
                    }
                    .word-item:hover {
                        background: rgba(255, 255, 255, 0.8);
                    }
                    .word-head {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 0.5rem;
                    }
                    .word-head h4 {
                        margin: 0;
                    }
                    .word-saved {
                        margin-left: auto;
                        color: var(--primary);
                    }
                    .word-pron, .word-def {
                        font-size: 0.875rem;
                        color: var(--text-secondary);
                    }
                    .word-example {
                        margin-top: 0.75rem;
                        padding-top: 0.75rem;
                        border-top: 1px solid rgba(148, 163, 184, 0.3);
                        font-style: italic;
                        font-size: 0.875rem;
                    }
                    .word-empty {
                        text-align: center;
                        color: var(--text-secondary);
                        padding: 2rem 0;
                    }
                    @media (min-width: 1024px) {
                        .dictionary-grid { grid-template-columns: 1fr 1fr; gap: 4rem; }
                    }
                "#}
            </style>
            <div class="container dictionary-grid">
                <div style={policy.entrance_style(visible, 0, Direction::Left)}>
                    <h2 class="section-title">
                        {"Your Personal "}
                        <span class="gradient-text">{"Dictionary"}</span>
                    </h2>
                    <p class="section-lead">
                        {"Build your vocabulary with our intelligent dictionary that uses spaced repetition \
                          to help you remember words effectively. Save words, track your progress, and \
                          master new vocabulary at your own pace."}
                    </p>
                    <ul class="dictionary-points">
                        { for HIGHLIGHTS.iter().map(|(color, text)| html! {
                            <li><i style={format!("background: {};", color)}></i>{*text}</li>
                        }) }
                    </ul>
                    <button class="btn-primary lift" style={policy.hover_style()}>{"📖 Create Your Dictionary"}</button>
                </div>

                <div class="dictionary-app card-glass" style={policy.entrance_style(visible, 1, Direction::Right)}>
                    <header>
                        <h3>{"My Dictionary"}</h3>
                        <span class="word-pron">{"⭐ 247 words"}</span>
                    </header>
                    <input
                        class="dictionary-search"
                        type="text"
                        placeholder="Search words..."
                        value={(*query).clone()}
                        oninput={on_search}
                    />
                    <div class="word-list">
                        if words.is_empty() {
                            <p class="word-empty">{format!("No words match \"{}\"", query.trim())}</p>
                        }
                        { for words.iter().enumerate().map(|(i, entry)| {
                            let open = selected.as_deref() == Some(entry.word.as_str());
                            let onclick = {
                                let selected = selected.clone();
                                let word = entry.word.clone();
                                Callback::from(move |_: MouseEvent| {
                                    selected.set(toggle_selection(selected.as_deref(), &word));
                                })
                            };
                            let onkeydown = {
                                let selected = selected.clone();
                                let word = entry.word.clone();
                                Callback::from(move |e: KeyboardEvent| {
                                    if activates(&e.key()) {
                                        e.prevent_default();
                                        selected.set(toggle_selection(selected.as_deref(), &word));
                                    }
                                })
                            };
                            html! {
                                <div
                                    key={entry.word.clone()}
                                    class="word-item"
                                    role="button"
                                    tabindex="0"
                                    onclick={onclick}
                                    onkeydown={onkeydown}
                                    aria-expanded={open.to_string()}
                                    style={policy.entrance_style(visible, i + 2, Direction::Below)}
                                >
                                    <div class="word-head">
                                        <h4>{&entry.word}</h4>
                                        <span class={entry.level.badge_class()}>{entry.level.as_str()}</span>
                                        if entry.saved {
                                            <span class="word-saved" title="Saved">{"🔖"}</span>
                                        }
                                    </div>
                                    <p class="word-pron">{&entry.pronunciation}</p>
                                    <p class="word-def">{&entry.definition}</p>
                                    if open {
                                        <div class="word-example">
                                            { for entry.examples.iter().map(|example| html! { <p>{format!("\"{}\"", example)}</p> }) }
                                        </div>
                                    }
                                </div>
                            }
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_toggles_the_open_word() {
        let opened = toggle_selection(None, "eloquent");
        assert_eq!(opened.as_deref(), Some("eloquent"));
        assert_eq!(toggle_selection(opened.as_deref(), "eloquent"), None);
        assert_eq!(toggle_selection(Some("eloquent"), "ephemeral").as_deref(), Some("ephemeral"));
    }

    #[test]
    fn enter_and_space_activate_a_word() {
        assert!(activates("Enter"));
        assert!(activates(" "));
        assert!(!activates("Tab"));
        assert!(!activates("a"));
    }
}
