use yew::prelude::*;

use crate::adaptive::context::use_adaptive;
use crate::adaptive::loader::SectionId;
use crate::adaptive::motion::Direction;
use crate::adaptive::reveal::{use_reveal, RevealOptions};
use crate::components::loading::SectionFallback;
use crate::content::{self, Course};

#[derive(Properties, PartialEq)]
struct CourseCardProps {
    course: Course,
    index: usize,
}

#[function_component(CourseCard)]
fn course_card(props: &CourseCardProps) -> Html {
    let adaptive = use_adaptive();
    let reveal = use_reveal(RevealOptions::default());
    let course = &props.course;

    html! {
        <div
            class="course-slot"
            ref={reveal.node.clone()}
            style={adaptive.policy.entrance_style(reveal.is_visible(), props.index, Direction::Below)}
        >
            <article class="course-card card-glass lift" style={adaptive.policy.hover_style()}>
                <div class="course-banner" style={format!("background: {};", course.color)}>
                    <span class={course.level.badge_class()}>{course.level.as_str()}</span>
                    <span class="course-learners">{"👥 2.5k"}</span>
                    <span class="course-icon">{"📖"}</span>
                </div>
                <div class="course-body">
                    <h3>{&course.title}</h3>
                    <div class="course-stats">
                        <span>{format!("📚 {} lessons", course.lessons)}</span>
                        <span>{format!("⏱ {}", course.duration)}</span>
                    </div>
                    <div class="course-tags">
                        { for course.tags.iter().map(|tag| html! { <span key={tag.clone()}>{tag}</span> }) }
                    </div>
                    <button class="course-start">{"Start Course →"}</button>
                </div>
            </article>
        </div>
    }
}

#[function_component(Courses)]
pub fn courses() -> Html {
    let adaptive = use_adaptive();
    let reveal = use_reveal(RevealOptions::default());

    let Ok(catalog) = content::catalog() else {
        return html! { <SectionFallback section={SectionId::Courses} /> };
    };

    html! {
        <section class="section courses" id="courses">
            <style>
                {r#"
                    .courses-head {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .courses-head .section-lead {
                        margin: 0 auto;
                    }
                    .courses-grid {
                        display: grid;
                        gap: 2rem;
                    }
                    .course-slot {
                        display: flex;
                    }
                    .course-card {
                        flex: 1;
                        overflow: hidden;
                        padding: 0;
                        cursor: pointer;
                    }
                    .course-banner {
                        position: relative;
                        height: 8rem;
                        padding: 1rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-start;
                    }
                    .course-learners {
                        color: rgba(255, 255, 255, 0.85);
                        font-size: 0.875rem;
                    }
                    .course-icon {
                        position: absolute;
                        right: 1rem;
                        bottom: 1rem;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.2);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .course-body {
                        padding: 1.5rem;
                    }
                    .course-body h3 {
                        font-size: 1.25rem;
                        margin-bottom: 0.75rem;
                    }
                    .course-stats {
                        display: flex;
                        gap: 1rem;
                        font-size: 0.875rem;
                        color: var(--text-secondary);
                        margin-bottom: 1rem;
                    }
                    .course-tags {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .course-tags span {
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: #f3f4f6;
                        color: #374151;
                        font-size: 0.875rem;
                    }
                    .course-start {
                        width: 100%;
                        padding: 0.75rem;
                        border-radius: 0.75rem;
                        border: none;
                        background: #f3f4f6;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .course-card:hover .course-start {
                        background: var(--primary);
                        color: white;
                    }
                    .courses-more {
                        text-align: center;
                        margin-top: 4rem;
                    }
                    @media (min-width: 768px) {
                        .courses-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .courses-grid { grid-template-columns: repeat(3, 1fr); gap: 2.5rem; }
                    }
                "#}
            </style>
            <div class="container">
                <div
                    class="courses-head"
                    ref={reveal.node.clone()}
                    style={adaptive.policy.entrance_style(reveal.is_visible(), 0, Direction::Below)}
                >
                    <h2 class="section-title">
                        {"Courses & "}
                        <span class="gradient-text">{"Lessons by Topic"}</span>
                    </h2>
                    <p class="section-lead">
                        {"Choose from our comprehensive collection of structured courses designed \
                          to take you from beginner to advanced English speaker."}
                    </p>
                </div>
                <div class="courses-grid">
                    { for catalog.courses.iter().enumerate().map(|(index, course)| html! {
                        <CourseCard key={course.id.clone()} course={course.clone()} index={index} />
                    }) }
                </div>
                <div class="courses-more">
                    <button class="btn-secondary lift" style={adaptive.policy.hover_style()}>
                        {"View All Courses"}
                    </button>
                </div>
            </div>
        </section>
    }
}
