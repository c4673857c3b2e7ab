use chrono::{Datelike, Local, NaiveDate};
use yew::prelude::*;

use crate::adaptive::context::use_adaptive;
use crate::adaptive::loader::SectionId;
use crate::adaptive::motion::Direction;
use crate::adaptive::reveal::{use_reveal, RevealOptions};
use crate::components::loading::SectionFallback;
use crate::content;

const WEEKDAYS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayStatus {
    /// Leading blank before the 1st.
    Empty,
    Today,
    Completed,
    Missed,
    Future,
}

impl DayStatus {
    fn class(self) -> &'static str {
        match self {
            DayStatus::Empty => "day empty",
            DayStatus::Today => "day today",
            DayStatus::Completed => "day completed",
            DayStatus::Missed => "day missed",
            DayStatus::Future => "day future",
        }
    }
}

/// Today wins over the completion list, the list wins over missed/future.
pub fn day_status(day: u32, today: u32, completed: &[u32]) -> DayStatus {
    if day == today {
        DayStatus::Today
    } else if completed.contains(&day) {
        DayStatus::Completed
    } else if day > today {
        DayStatus::Future
    } else {
        DayStatus::Missed
    }
}

fn days_in_month(date: NaiveDate) -> u32 {
    (28..=31).rev().find(|d| date.with_day(*d).is_some()).unwrap_or(28)
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonthGrid {
    pub title: String,
    /// Sunday-first cells; `None` for leading blanks.
    pub cells: Vec<(Option<u32>, DayStatus)>,
}

impl MonthGrid {
    pub fn new(today: NaiveDate, completed: &[u32]) -> Self {
        let first = today.with_day(1).unwrap_or(today);
        let blanks = first.weekday().num_days_from_sunday() as usize;
        let mut cells = vec![(None, DayStatus::Empty); blanks];
        cells.extend((1..=days_in_month(today)).map(|day| (Some(day), day_status(day, today.day(), completed))));

        Self {
            title: today.format("%B %Y").to_string(),
            cells,
        }
    }

    pub fn count(&self, status: DayStatus) -> usize {
        self.cells.iter().filter(|(_, s)| *s == status).count()
    }
}

const HABITS: [(&str, &str, &str, &str); 3] = [
    ("🔥", "#ffedd5", "Daily Streak Tracking", "Never miss a day of learning"),
    ("🎯", "#dcfce7", "Personalized Goals", "Set and achieve your targets"),
    ("🏆", "#fef9c3", "Achievement Rewards", "Earn badges and unlock content"),
];

#[function_component(CalendarPreview)]
pub fn calendar_preview() -> Html {
    let adaptive = use_adaptive();
    let policy = adaptive.policy;
    let reveal = use_reveal(RevealOptions::default());
    let visible = reveal.is_visible();

    let Ok(catalog) = content::catalog() else {
        return html! { <SectionFallback section={SectionId::Calendar} /> };
    };
    let practice = &catalog.practice;
    let grid = MonthGrid::new(Local::now().date_naive(), &practice.completed_days);

    html! {
        <section class="section calendar" id="calendar" ref={reveal.node.clone()}>
            <style>
                {r#"
                    .calendar-grid-layout {
                        display: grid;
                        gap: 3rem;
                        align-items: center;
                    }
                    .calendar-card {
                        padding: 1.5rem;
                        max-width: 28rem;
                        margin: 0 auto;
                        width: 100%;
                    }
                    .calendar-card header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 1.5rem;
                    }
                    .streak-flame {
                        font-weight: 700;
                        color: #f97316;
                    }
                    .calendar-month {
                        text-align: center;
                        margin-bottom: 1rem;
                    }
                    .calendar-days {
                        display: grid;
                        grid-template-columns: repeat(7, 1fr);
                        gap: 0.25rem;
                    }
                    .weekday {
                        text-align: center;
                        font-size: 0.875rem;
                        color: var(--text-secondary);
                        padding: 0.5rem 0;
                    }
                    .day {
                        aspect-ratio: 1;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 0.875rem;
                        border-radius: 0.5rem;
                    }
                    .day.today { background: var(--primary); color: white; font-weight: 700; box-shadow: 0 0 0 2px rgba(88, 101, 242, 0.5); }
                    .day.completed { background: #22c55e; color: white; }
                    .day.missed { background: #fee2e2; color: #ef4444; }
                    .day.future { background: #f3f4f6; color: #9ca3af; }
                    .calendar-summary {
                        font-size: 0.875rem;
                        color: var(--text-secondary);
                        margin-bottom: 1rem;
                    }
                    .calendar-stats {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1rem;
                        margin-top: 1.5rem;
                        padding-top: 1.5rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.2);
                        text-align: center;
                    }
                    .calendar-stats strong {
                        display: block;
                        font-size: 1.125rem;
                    }
                    .calendar-stats small {
                        color: var(--text-secondary);
                    }
                    .streak-title {
                        background: linear-gradient(90deg, #f97316, #ef4444);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .habit-list {
                        display: grid;
                        gap: 1rem;
                        margin: 2rem 0;
                    }
                    .habit {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .habit-icon {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 0.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .habit small {
                        display: block;
                        color: var(--text-secondary);
                    }
                    .calendar-copy { order: -1; }
                    @media (min-width: 1024px) {
                        .calendar-grid-layout { grid-template-columns: 1fr 1fr; gap: 4rem; }
                        .calendar-copy { order: 0; }
                    }
                "#}
            </style>
            <div class="container calendar-grid-layout">
                <div class="calendar-card card-glass" style={policy.entrance_style(visible, 0, Direction::Left)}>
                    <header>
                        <h3>{"Practice Calendar"}</h3>
                        <span class="streak-flame">{format!("🔥 {}", practice.current_streak)}</span>
                    </header>
                    <h4 class="calendar-month">{&grid.title}</h4>
                    <p class="calendar-summary">
                        {format!("{} days practiced this month", grid.count(DayStatus::Completed))}
                    </p>
                    <div class="calendar-days">
                        { for WEEKDAYS.iter().map(|d| html! { <div class="weekday">{*d}</div> }) }
                        { for grid.cells.iter().map(|(day, status)| html! {
                            <div class={status.class()}>
                                { day.map(|d| d.to_string()).unwrap_or_default() }
                            </div>
                        }) }
                    </div>
                    <div class="calendar-stats">
                        <div>{"🔥"}<strong>{practice.current_streak.to_string()}</strong><small>{"Current"}</small></div>
                        <div>{"🏆"}<strong>{practice.longest_streak.to_string()}</strong><small>{"Best"}</small></div>
                        <div>{"🎯"}<strong>{format!("{}%", practice.success_rate)}</strong><small>{"Success"}</small></div>
                    </div>
                </div>

                <div class="calendar-copy" style={policy.entrance_style(visible, 1, Direction::Right)}>
                    <h2 class="section-title">
                        {"Keep Your "}
                        <span class="streak-title">{"Streak Alive"}</span>
                    </h2>
                    <p class="section-lead">
                        {"Build consistent learning habits with our streak system. Track your daily progress, \
                          set goals, and stay motivated with visual feedback that celebrates your dedication \
                          to mastering English."}
                    </p>
                    <div class="habit-list">
                        { for HABITS.iter().map(|(icon, tint, title, detail)| html! {
                            <div class="habit">
                                <span class="habit-icon" style={format!("background: {};", tint)}>{*icon}</span>
                                <div><strong>{*title}</strong><small>{*detail}</small></div>
                            </div>
                        }) }
                    </div>
                    <button class="btn-primary lift" style={policy.hover_style()}>{"📅 Start Your Streak"}</button>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn status_precedence() {
        let completed = [1, 2, 10, 25];
        assert_eq!(day_status(10, 10, &completed), DayStatus::Today);
        assert_eq!(day_status(2, 10, &completed), DayStatus::Completed);
        assert_eq!(day_status(25, 10, &completed), DayStatus::Completed);
        assert_eq!(day_status(3, 10, &completed), DayStatus::Missed);
        assert_eq!(day_status(11, 10, &completed), DayStatus::Future);
    }

    #[test]
    fn month_grid_has_weekday_offset() {
        // 1 March 2026 is a Sunday, 1 October 2026 a Thursday
        let march = MonthGrid::new(date(2026, 3, 15), &[]);
        assert_eq!(march.count(DayStatus::Empty), 0);
        assert_eq!(march.cells.len(), 31);
        assert_eq!(march.title, "March 2026");

        let october = MonthGrid::new(date(2026, 10, 19), &[]);
        assert_eq!(october.count(DayStatus::Empty), 4);
        assert_eq!(october.cells[4], (Some(1), DayStatus::Missed));
        assert_eq!(october.cells.len(), 4 + 31);
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(date(2026, 2, 10)), 28);
        assert_eq!(days_in_month(date(2028, 2, 10)), 29);
        assert_eq!(days_in_month(date(2026, 4, 30)), 30);
        assert_eq!(days_in_month(date(2026, 12, 1)), 31);
    }

    #[test]
    fn statuses_partition_the_month() {
        let grid = MonthGrid::new(date(2026, 10, 19), &[1, 2, 3, 5, 30]);
        assert_eq!(grid.count(DayStatus::Today), 1);
        assert_eq!(grid.count(DayStatus::Completed), 5);
        assert_eq!(grid.count(DayStatus::Missed), 18 - 4);
        assert_eq!(grid.count(DayStatus::Future), 12 - 1);
    }
}
