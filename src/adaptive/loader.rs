//! Which sections render up front and which wait behind a placeholder.

use std::cell::Cell;
use std::rc::Rc;

use log::debug;

use super::device::DeviceClass;

/// Page sections between the header and the footer, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Features,
    Dictionary,
    Calendar,
    Games,
    Courses,
    CallToAction,
}

impl SectionId {
    pub const DOCUMENT_ORDER: [SectionId; 7] = [
        SectionId::Hero,
        SectionId::Features,
        SectionId::Dictionary,
        SectionId::Calendar,
        SectionId::Games,
        SectionId::Courses,
        SectionId::CallToAction,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Features => "features",
            SectionId::Dictionary => "dictionary",
            SectionId::Calendar => "calendar",
            SectionId::Games => "games",
            SectionId::Courses => "courses",
            SectionId::CallToAction => "cta",
        }
    }

    /// Above the fold: the hero and the primary feature list.
    pub fn is_eager(self) -> bool {
        matches!(self, SectionId::Hero | SectionId::Features)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadMode {
    Immediate,
    Deferred,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoadPlan {
    slots: Vec<(SectionId, LoadMode)>,
}

impl LoadPlan {
    /// Phones materialise everything synchronously to avoid a second layout
    /// pass; larger screens defer everything below the fold.
    pub fn for_device(class: DeviceClass) -> Self {
        let slots = SectionId::DOCUMENT_ORDER
            .iter()
            .map(|&id| {
                let mode = if id.is_eager() || class == DeviceClass::Mobile {
                    LoadMode::Immediate
                } else {
                    LoadMode::Deferred
                };
                (id, mode)
            })
            .collect();
        Self { slots }
    }

    /// All slots, always in document order.
    pub fn slots(&self) -> &[(SectionId, LoadMode)] {
        &self.slots
    }

    #[cfg(test)]
    pub fn mode_of(&self, id: SectionId) -> LoadMode {
        self.slots
            .iter()
            .find(|(slot, _)| *slot == id)
            .map(|(_, mode)| *mode)
            .unwrap_or(LoadMode::Immediate)
    }

    pub fn eager(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.slots.iter().filter(|(id, _)| id.is_eager()).map(|(id, _)| *id)
    }

    pub fn deferred(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.slots
            .iter()
            .filter(|(_, mode)| *mode == LoadMode::Deferred)
            .map(|(id, _)| *id)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SlotPhase {
    Placeholder,
    Ready,
    /// Static fallback, with the reason for the log.
    Fallback(String),
}

/// Lifecycle of one deferred section. The first outcome wins; anything
/// arriving afterwards (a late load after a timeout, a timeout after a
/// load) is ignored.
#[derive(Clone, Debug, PartialEq)]
pub struct Slot {
    pub id: SectionId,
    phase: SlotPhase,
}

impl Slot {
    pub fn pending(id: SectionId) -> Self {
        Self {
            id,
            phase: SlotPhase::Placeholder,
        }
    }

    pub fn ready(id: SectionId) -> Self {
        Self {
            id,
            phase: SlotPhase::Ready,
        }
    }

    pub fn phase(&self) -> &SlotPhase {
        &self.phase
    }

    pub fn is_settled(&self) -> bool {
        self.phase != SlotPhase::Placeholder
    }

    /// Returns whether the slot changed.
    pub fn settle(&mut self, outcome: Result<(), String>) -> bool {
        if self.is_settled() {
            debug!("Section {} already settled, dropping late outcome", self.id.name());
            return false;
        }
        self.phase = match outcome {
            Ok(()) => SlotPhase::Ready,
            Err(reason) => SlotPhase::Fallback(reason),
        };
        debug!("Section {} -> {:?}", self.id.name(), self.phase);
        true
    }
}

/// Liveness flag shared between a mounted section and its in-flight load.
/// Unmounting cancels it and the load's result is thrown away.
#[derive(Clone, Debug)]
pub struct LoadTicket {
    live: Rc<Cell<bool>>,
}

impl LoadTicket {
    pub fn new() -> Self {
        Self {
            live: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    pub fn cancel(&self) {
        self.live.set(false);
    }

    /// Runs `f` only if the owning section is still mounted.
    pub fn deliver<F: FnOnce()>(&self, f: F) -> bool {
        if self.is_live() {
            f();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_renders_everything_immediately() {
        let plan = LoadPlan::for_device(DeviceClass::Mobile);
        assert_eq!(plan.deferred().count(), 0);
        assert!(plan.slots().iter().all(|(_, m)| *m == LoadMode::Immediate));
    }

    #[test]
    fn larger_screens_defer_below_the_fold() {
        for class in [DeviceClass::Tablet, DeviceClass::Desktop] {
            let plan = LoadPlan::for_device(class);
            assert_eq!(plan.eager().collect::<Vec<_>>(), vec![SectionId::Hero, SectionId::Features]);
            assert_eq!(plan.mode_of(SectionId::Hero), LoadMode::Immediate);
            assert_eq!(plan.mode_of(SectionId::Features), LoadMode::Immediate);
            assert_eq!(
                plan.deferred().collect::<Vec<_>>(),
                vec![
                    SectionId::Dictionary,
                    SectionId::Calendar,
                    SectionId::Games,
                    SectionId::Courses,
                    SectionId::CallToAction,
                ]
            );
        }
    }

    #[test]
    fn plan_keeps_document_order_for_every_class() {
        for class in [DeviceClass::Mobile, DeviceClass::Tablet, DeviceClass::Desktop] {
            let order: Vec<_> = LoadPlan::for_device(class).slots().iter().map(|(id, _)| *id).collect();
            assert_eq!(order, SectionId::DOCUMENT_ORDER.to_vec());
        }
    }

    #[test]
    fn first_outcome_wins() {
        let mut slot = Slot::pending(SectionId::Courses);
        assert!(slot.settle(Err("timed out".into())));
        assert!(!slot.settle(Ok(())));
        assert_eq!(slot.phase(), &SlotPhase::Fallback("timed out".into()));

        let mut slot = Slot::pending(SectionId::Games);
        assert!(slot.settle(Ok(())));
        assert!(!slot.settle(Err("timed out".into())));
        assert_eq!(slot.phase(), &SlotPhase::Ready);
    }

    // One deferred section never resolves: the eager part of the page is
    // unaffected and the stuck slot eventually falls back instead of hanging.
    #[test]
    fn stuck_deferred_section_does_not_block_eager_content() {
        let plan = LoadPlan::for_device(DeviceClass::Desktop);
        let mut slots: Vec<Slot> = plan
            .slots()
            .iter()
            .map(|(id, mode)| match mode {
                LoadMode::Immediate => Slot::ready(*id),
                LoadMode::Deferred => Slot::pending(*id),
            })
            .collect();

        for slot in slots.iter_mut().filter(|s| s.id != SectionId::Games && !s.is_settled()) {
            slot.settle(Ok(()));
        }
        for id in plan.eager() {
            let slot = slots.iter().find(|s| s.id == id).unwrap();
            assert_eq!(slot.phase(), &SlotPhase::Ready);
        }

        let games = slots.iter_mut().find(|s| s.id == SectionId::Games).unwrap();
        assert_eq!(games.phase(), &SlotPhase::Placeholder);
        games.settle(Err("did not load in time".into()));
        assert!(matches!(games.phase(), SlotPhase::Fallback(_)));
    }

    #[test]
    fn cancelled_ticket_discards_result() {
        let ticket = LoadTicket::new();
        let clone = ticket.clone();
        let mut rendered = 0;

        assert!(clone.deliver(|| rendered += 1));
        ticket.cancel();
        assert!(!clone.deliver(|| rendered += 1));
        assert_eq!(rendered, 1);
        assert!(!clone.is_live());
    }
}
