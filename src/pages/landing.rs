use log::debug;
use yew::prelude::*;

use crate::adaptive::context::use_adaptive;
use crate::adaptive::loader::SectionId;
use crate::components::calendar_preview::CalendarPreview;
use crate::components::cookie_notice::CookieNotice;
use crate::components::courses::Courses;
use crate::components::cta_band::CtaBand;
use crate::components::deferred::DeferredSection;
use crate::components::dictionary_preview::DictionaryPreview;
use crate::components::features::Features;
use crate::components::footer::Footer;
use crate::components::games_preview::GamesPreview;
use crate::components::header::Header;
use crate::components::hero::Hero;

fn section_view(section: SectionId) -> Html {
    match section {
        SectionId::Hero => html! { <Hero /> },
        SectionId::Features => html! { <Features /> },
        SectionId::Dictionary => html! { <DictionaryPreview /> },
        SectionId::Calendar => html! { <CalendarPreview /> },
        SectionId::Games => html! { <GamesPreview /> },
        SectionId::Courses => html! { <Courses /> },
        SectionId::CallToAction => html! { <CtaBand /> },
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let adaptive = use_adaptive();

    {
        let plan = adaptive.plan.clone();
        use_effect_with_deps(
            move |_| {
                debug!(
                    "Landing mounted: {} eager, {} deferred",
                    plan.eager().count(),
                    plan.deferred().count()
                );
                || ()
            },
            (),
        );
    }

    html! {
        <>
            <Header />
            <main>
                { for adaptive.plan.slots().iter().map(|&(section, mode)| html! {
                    <DeferredSection key={section.name()} section={section} mode={mode}>
                        { section_view(section) }
                    </DeferredSection>
                }) }
            </main>
            <Footer />
            <CookieNotice />
        </>
    }
}
