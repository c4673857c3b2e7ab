use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::adaptive::context::use_adaptive;
use crate::adaptive::loader::SectionId;
use crate::adaptive::motion::Direction;
use crate::adaptive::reveal::{use_reveal, RevealOptions};
use crate::components::loading::SectionFallback;
use crate::content;

const SAMPLE_SCORE: u32 = 1250;
const SAMPLE_LIVES: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameTab {
    Matching,
    Typing,
    Puzzle,
}

impl GameTab {
    pub const ALL: [GameTab; 3] = [GameTab::Matching, GameTab::Typing, GameTab::Puzzle];

    pub fn label(self) -> &'static str {
        match self {
            GameTab::Matching => "Word Match",
            GameTab::Typing => "Speed Type",
            GameTab::Puzzle => "Word Puzzle",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            GameTab::Matching => "🎯",
            GameTab::Typing => "⚡",
            GameTab::Puzzle => "🧩",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharMark {
    Correct,
    Wrong,
    Pending,
}

impl CharMark {
    fn class(self) -> &'static str {
        match self {
            CharMark::Correct => "char correct",
            CharMark::Wrong => "char wrong",
            CharMark::Pending => "char pending",
        }
    }
}

/// Marks each character of `target` against what has been typed so far.
/// Extra typed characters past the end of the target are ignored.
fn lives_label(lives: usize) -> String {
    "❤".repeat(lives)
}

pub fn typing_marks(target: &str, typed: &str) -> Vec<(char, CharMark)> {
    let mut typed = typed.chars();
    target
        .chars()
        .map(|expected| {
            let mark = match typed.next() {
                Some(actual) if actual == expected => CharMark::Correct,
                Some(_) => CharMark::Wrong,
                None => CharMark::Pending,
            };
            (expected, mark)
        })
        .collect()
}

#[function_component(GamesPreview)]
pub fn games_preview() -> Html {
    let adaptive = use_adaptive();
    let policy = adaptive.policy;
    let reveal = use_reveal(RevealOptions::default());
    let visible = reveal.is_visible();
    let tab = use_state(|| GameTab::Matching);
    let typed = use_state(|| {
        content::catalog()
            .map(|c| c.games.typing_sample.clone())
            .unwrap_or_default()
    });

    let Ok(catalog) = content::catalog() else {
        return html! { <SectionFallback section={SectionId::Games} /> };
    };
    let games = &catalog.games;

    let on_type = {
        let typed = typed.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            typed.set(input.value());
        })
    };

    let body = match *tab {
        GameTab::Matching => html! {
            <div class="game-body">
                <div class="game-prompt">
                    <h4>{"Match words with definitions"}</h4>
                    <p>{format!("{}/{} completed", catalog.matched_pairs(), games.matching_pairs.len())}</p>
                </div>
                { for games.matching_pairs.iter().map(|pair| html! {
                    <div class={classes!("pair", pair.matched.then(|| "matched"))}>
                        <span class="pair-word">{&pair.word}</span>
                        <span class="pair-def">{&pair.definition}</span>
                    </div>
                }) }
            </div>
        },
        GameTab::Typing => {
            // typing_words is non-empty once the catalog parsed
            let target = games.typing_words.first().map(String::as_str).unwrap_or_default();
            html! {
                <div class="game-body">
                    <div class="game-prompt">
                        <h4>{"Type the word"}</h4>
                        <p>{"Speed: 45 WPM"}</p>
                    </div>
                    <div class="typing-box">
                        <div class="typing-target">
                            { for typing_marks(target, &typed).into_iter().map(|(c, mark)| html! {
                                <span class={mark.class()}>{c.to_string()}</span>
                            }) }
                        </div>
                        <input
                            class="typing-input"
                            type="text"
                            placeholder="Start typing..."
                            value={(*typed).clone()}
                            oninput={on_type}
                        />
                    </div>
                </div>
            }
        }
        GameTab::Puzzle => html! {
            <div class="game-body">
                <div class="game-prompt">
                    <h4>{"Unscramble the word"}</h4>
                    <p>{format!("Hint: {}", games.puzzle_hint)}</p>
                </div>
                <div class="puzzle-row">
                    { for games.puzzle_letters.iter().map(|letter| html! { <span class="tile">{letter}</span> }) }
                </div>
                <div class="puzzle-row">
                    { for games.puzzle_letters.iter().enumerate().map(|(i, letter)| html! {
                        <span class="slot">
                            if i < games.puzzle_placed {
                                {letter}
                            }
                        </span>
                    }) }
                </div>
            </div>
        },
    };

    html! {
        <section class="section games" id="games" ref={reveal.node.clone()}>
            <style>
                {r#"
                    .games {
                        background: linear-gradient(135deg, rgba(250, 245, 255, 0.5), rgba(253, 242, 248, 0.5));
                    }
                    .games-grid {
                        display: grid;
                        gap: 3rem;
                        align-items: center;
                    }
                    .games-title {
                        background: linear-gradient(90deg, #a855f7, #ec4899);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .games-points {
                        list-style: none;
                        padding: 0;
                        margin: 2rem 0;
                        display: grid;
                        gap: 1rem;
                        color: var(--text-secondary);
                    }
                    .games-card {
                        padding: 1.5rem;
                        max-width: 28rem;
                        margin: 0 auto;
                        width: 100%;
                    }
                    .games-card header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 1.5rem;
                    }
                    .games-score {
                        display: flex;
                        gap: 1rem;
                        font-weight: 700;
                    }
                    .game-tabs {
                        display: flex;
                        gap: 0.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .game-tab {
                        flex: 1;
                        padding: 0.75rem;
                        border-radius: 0.75rem;
                        border: none;
                        background: rgba(255, 255, 255, 0.6);
                        color: var(--text-secondary);
                        font-size: 0.875rem;
                        font-weight: 500;
                        cursor: pointer;
                    }
                    .game-tab.active {
                        background: linear-gradient(90deg, #a855f7, #ec4899);
                        color: white;
                    }
                    .game-tab span {
                        display: block;
                        font-size: 1.125rem;
                        margin-bottom: 0.25rem;
                    }
                    .game-body {
                        display: grid;
                        gap: 0.5rem;
                    }
                    .game-prompt {
                        text-align: center;
                        margin-bottom: 1rem;
                    }
                    .game-prompt p {
                        font-size: 0.875rem;
                        color: var(--text-secondary);
                    }
                    .pair {
                        display: flex;
                        justify-content: space-between;
                        padding: 0.75rem;
                        border-radius: 0.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: rgba(255, 255, 255, 0.6);
                    }
                    .pair.matched {
                        background: #dcfce7;
                        border-color: #86efac;
                        color: #166534;
                    }
                    .pair-def {
                        font-size: 0.875rem;
                        color: var(--text-secondary);
                    }
                    .typing-box {
                        background: rgba(255, 255, 255, 0.6);
                        padding: 1rem;
                        border-radius: 0.5rem;
                    }
                    .typing-target {
                        font-family: ui-monospace, monospace;
                        font-size: 1.5rem;
                        text-align: center;
                        margin-bottom: 1rem;
                    }
                    .char { padding: 0 0.25rem; border-radius: 0.25rem; }
                    .char.correct { color: #16a34a; background: #dcfce7; }
                    .char.wrong { color: #dc2626; background: #fee2e2; }
                    .char.pending { color: #9ca3af; }
                    .typing-input {
                        width: 100%;
                        padding: 0.75rem;
                        border-radius: 0.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: rgba(255, 255, 255, 0.7);
                        font-size: 1rem;
                    }
                    .puzzle-row {
                        display: flex;
                        justify-content: center;
                        gap: 0.5rem;
                        margin-bottom: 1rem;
                    }
                    .tile, .slot {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 700;
                        color: var(--primary);
                    }
                    .tile {
                        background: white;
                        border: 2px solid rgba(88, 101, 242, 0.2);
                    }
                    .slot {
                        border: 2px dashed #d1d5db;
                    }
                    .game-actions {
                        display: flex;
                        gap: 0.75rem;
                        margin-top: 1.5rem;
                    }
                    .game-actions .continue {
                        flex: 1;
                        background: linear-gradient(90deg, #a855f7, #ec4899);
                        color: white;
                        border: none;
                        border-radius: 0.75rem;
                        padding: 0.75rem;
                        font-weight: 500;
                        cursor: pointer;
                    }
                    .game-actions .boost {
                        padding: 0.75rem 1rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: rgba(255, 255, 255, 0.6);
                        cursor: pointer;
                    }
                    @media (min-width: 1024px) {
                        .games-grid { grid-template-columns: 1fr 1fr; gap: 4rem; }
                    }
                "#}
            </style>
            <div class="container games-grid">
                <div style={policy.entrance_style(visible, 0, Direction::Left)}>
                    <h2 class="section-title">
                        {"Learn with "}
                        <span class="games-title">{"Mini-Games"}</span>
                    </h2>
                    <p class="section-lead">
                        {"Make learning fun and engaging with our collection of interactive games. \
                          From word matching to speed typing, each game is designed to reinforce \
                          your vocabulary and improve your English skills naturally."}
                    </p>
                    <ul class="games-points">
                        <li>{"🟣 Multiple game types for varied learning"}</li>
                        <li>{"🩷 Progressive difficulty levels"}</li>
                        <li>{"🔵 Real-time feedback & scoring"}</li>
                    </ul>
                    <button class="btn-primary lift" style={policy.hover_style()}>{"🎮 Play & Learn"}</button>
                </div>

                <div class="games-card card-glass" style={policy.entrance_style(visible, 1, Direction::Right)}>
                    <header>
                        <h3>{"Word Games"}</h3>
                        <div class="games-score">
                            <span>{format!("⭐ {}", SAMPLE_SCORE)}</span>
                            <span aria-label={format!("{} lives", SAMPLE_LIVES)}>{lives_label(SAMPLE_LIVES)}</span>
                        </div>
                    </header>
                    <div class="game-tabs" role="tablist">
                        { for GameTab::ALL.iter().map(|game| {
                            let game = *game;
                            let onclick = {
                                let tab = tab.clone();
                                Callback::from(move |_: MouseEvent| tab.set(game))
                            };
                            html! {
                                <button
                                    class={classes!("game-tab", (*tab == game).then(|| "active"))}
                                    role="tab"
                                    aria-selected={(*tab == game).to_string()}
                                    onclick={onclick}
                                >
                                    <span>{game.icon()}</span>
                                    {game.label()}
                                </button>
                            }
                        }) }
                    </div>
                    {body}
                    <div class="game-actions">
                        <button class="continue">{"Continue"}</button>
                        <button class="boost" aria-label="Boost">{"⚡"}</button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CharMark::*;

    #[test]
    fn partial_input_marks_prefix() {
        let marks: Vec<_> = typing_marks("serendipity", "seren").into_iter().map(|(_, m)| m).collect();
        assert_eq!(&marks[..5], &[Correct; 5]);
        assert!(marks[5..].iter().all(|m| *m == Pending));
    }

    #[test]
    fn mismatches_are_wrong_not_shifted() {
        let marks = typing_marks("eloquent", "elx");
        assert_eq!(marks[0], ('e', Correct));
        assert_eq!(marks[2], ('o', Wrong));
        assert_eq!(marks[3], ('q', Pending));
    }

    #[test]
    fn overlong_input_is_ignored() {
        let marks = typing_marks("cat", "cats");
        assert_eq!(marks.len(), 3);
        assert!(marks.iter().all(|(_, m)| *m == Correct));
    }

    #[test]
    fn lives_render_one_heart_each() {
        assert_eq!(lives_label(SAMPLE_LIVES), "❤❤❤");
        assert_eq!(lives_label(0), "");
    }

    #[test]
    fn tabs_have_distinct_labels() {
        let labels: Vec<_> = GameTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Word Match", "Speed Type", "Word Puzzle"]);
    }
}
