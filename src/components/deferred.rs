use std::rc::Rc;

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use log::{debug, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::adaptive::loader::{LoadMode, LoadTicket, SectionId, Slot, SlotPhase};
use crate::components::loading::{SectionFallback, SectionPlaceholder};
use crate::config;
use crate::content;
use crate::error::PageError;

/// Everything a section needs before it can render. Catalog-backed sections
/// fail here when the embedded content is broken.
pub fn materialise(section: SectionId) -> Result<(), PageError> {
    match section {
        SectionId::Hero | SectionId::CallToAction => Ok(()),
        SectionId::Features
        | SectionId::Dictionary
        | SectionId::Calendar
        | SectionId::Games
        | SectionId::Courses => content::catalog().map(|_| ()),
    }
}

impl Reducible for Slot {
    type Action = Result<(), String>;

    fn reduce(self: Rc<Self>, outcome: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.settle(outcome) {
            debug!("Section {} settled: {:?}", next.id.name(), next.phase());
            Rc::new(next)
        } else {
            self
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DeferredSectionProps {
    pub section: SectionId,
    pub mode: LoadMode,
    pub children: Children,
}

/// One slot of the page. Immediate slots render their children right away;
/// deferred ones show a placeholder until the content resolves, times out,
/// or fails. The slot itself never moves, so siblings keep document order.
#[function_component(DeferredSection)]
pub fn deferred_section(props: &DeferredSectionProps) -> Html {
    let section = props.section;
    let mode = props.mode;

    let slot = use_reducer(move || match mode {
        LoadMode::Immediate => match materialise(section) {
            Ok(()) => Slot::ready(section),
            Err(e) => {
                warn!("Section {} failed to render: {}", section.name(), e);
                let mut slot = Slot::pending(section);
                slot.settle(Err(e.to_string()));
                slot
            }
        },
        LoadMode::Deferred => Slot::pending(section),
    });

    {
        let slot = slot.dispatcher();
        use_effect_with_deps(
            move |&(section, mode): &(SectionId, LoadMode)| {
                let ticket = LoadTicket::new();
                let mut timeout = None;

                if mode == LoadMode::Deferred {
                    debug!("Deferring section {}", section.name());

                    let load_ticket = ticket.clone();
                    let load_slot = slot.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(config::DEFERRED_LOAD_YIELD_MS).await;
                        let outcome = materialise(section).map_err(|e| {
                            warn!("Section {} failed to load: {}", section.name(), e);
                            e.to_string()
                        });
                        if !load_ticket.deliver(|| load_slot.dispatch(outcome)) {
                            debug!("Section {} unmounted before it loaded", section.name());
                        }
                    });

                    let timeout_ticket = ticket.clone();
                    timeout = Some(Timeout::new(config::DEFERRED_LOAD_TIMEOUT_MS, move || {
                        let err = PageError::LoadTimedOut {
                            section: section.name(),
                            after_ms: config::DEFERRED_LOAD_TIMEOUT_MS,
                        };
                        timeout_ticket.deliver(|| slot.dispatch(Err(err.to_string())));
                    }));
                }

                move || {
                    ticket.cancel();
                    drop(timeout);
                }
            },
            (section, mode),
        );
    }

    match slot.phase() {
        SlotPhase::Placeholder => html! { <SectionPlaceholder section={section} /> },
        SlotPhase::Ready => html! { <>{ for props.children.iter() }</> },
        SlotPhase::Fallback(reason) => {
            debug!("Section {} showing fallback: {}", section.name(), reason);
            html! { <SectionFallback section={section} /> }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_materialises_with_embedded_content() {
        for section in SectionId::DOCUMENT_ORDER {
            assert!(materialise(section).is_ok(), "{}", section.name());
        }
    }

    #[test]
    fn reducer_keeps_first_outcome() {
        let slot = Rc::new(Slot::pending(SectionId::Courses));
        let settled = slot.reduce(Ok(()));
        assert_eq!(settled.phase(), &SlotPhase::Ready);

        let again = settled.clone().reduce(Err("late timeout".into()));
        assert!(Rc::ptr_eq(&settled, &again));
    }
}
