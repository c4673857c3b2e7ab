//! Reveal-on-scroll: flips a section to "visible" once it enters the viewport.
//!
//! An observation is a resource owned by the component that started it. It's
//! released as soon as a one-shot trigger fires, and in any case when the
//! owner goes away (`Drop`), so unmounted sections never leave callbacks behind.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::error::{js_error_text, PageError};

#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: String,
    pub trigger_once: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: config::REVEAL_THRESHOLD,
            root_margin: config::REVEAL_ROOT_MARGIN.to_string(),
            trigger_once: true,
        }
    }
}

impl RevealOptions {
    /// Toggles with every enter/leave instead of latching.
    pub fn continuous() -> Self {
        Self {
            trigger_once: false,
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    pub is_intersecting: bool,
    /// Latches in one-shot mode.
    pub has_triggered: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AfterEntry {
    KeepObserving,
    Release,
}

impl RevealState {
    /// Final state, used when observation isn't possible at all.
    pub fn revealed() -> Self {
        Self {
            is_intersecting: true,
            has_triggered: true,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.has_triggered || self.is_intersecting
    }

    pub fn on_entry(&mut self, intersecting: bool, trigger_once: bool) -> AfterEntry {
        if intersecting {
            self.is_intersecting = true;
            if trigger_once {
                self.has_triggered = true;
                return AfterEntry::Release;
            }
        } else if !trigger_once {
            self.is_intersecting = false;
        }
        AfterEntry::KeepObserving
    }
}

/// A source of intersection callbacks that must be released when done.
pub trait Observation {
    fn release(&mut self);
}

/// Owns an observation. `release` is idempotent and also runs on drop.
pub struct ObservationHandle<O: Observation> {
    inner: Option<O>,
}

impl<O: Observation> ObservationHandle<O> {
    pub fn new(observation: O) -> Self {
        Self {
            inner: Some(observation),
        }
    }

    pub fn is_active(&self) -> bool {
        self.inner.is_some()
    }

    pub fn release(&mut self) {
        if let Some(mut observation) = self.inner.take() {
            observation.release();
        }
    }
}

impl<O: Observation> Drop for ObservationHandle<O> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Reveal state for one element plus the observation feeding it.
pub struct RevealTracker<O: Observation> {
    state: RevealState,
    trigger_once: bool,
    handle: ObservationHandle<O>,
}

impl<O: Observation> RevealTracker<O> {
    pub fn new(options: &RevealOptions, observation: O) -> Self {
        Self {
            state: RevealState::default(),
            trigger_once: options.trigger_once,
            handle: ObservationHandle::new(observation),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> RevealState {
        self.state
    }

    #[cfg(test)]
    pub fn is_observing(&self) -> bool {
        self.handle.is_active()
    }

    /// Feeds one intersection entry. Returns `None` once the observation has
    /// been released; nothing is delivered after that.
    pub fn handle_entry(&mut self, intersecting: bool) -> Option<RevealState> {
        if !self.handle.is_active() {
            return None;
        }
        if self.state.on_entry(intersecting, self.trigger_once) == AfterEntry::Release {
            self.handle.release();
        }
        Some(self.state)
    }

    /// Feeds a batch of entries in delivery order and returns the state after
    /// the last one that was accepted.
    pub fn handle_entries(&mut self, entries: impl IntoIterator<Item = bool>) -> Option<RevealState> {
        entries
            .into_iter()
            .fold(None, |last, intersecting| self.handle_entry(intersecting).or(last))
    }
}

/// `IntersectionObserver` watching a single element.
pub struct DomObservation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl DomObservation {
    pub fn start(
        element: &Element,
        options: &RevealOptions,
        callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    ) -> Result<Self, PageError> {
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| PageError::Environment(js_error_text(&e)))?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Observation for DomObservation {
    fn release(&mut self) {
        self.observer.disconnect();
    }
}

#[derive(Clone, PartialEq)]
pub struct Reveal {
    pub node: NodeRef,
    pub state: RevealState,
}

impl Reveal {
    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }
}

/// Attach `node` to the element to watch.
#[hook]
pub fn use_reveal(options: RevealOptions) -> Reveal {
    let node = use_node_ref();
    let state = use_state(RevealState::default);

    {
        let node = node.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |options: &RevealOptions| {
                let tracker: Rc<RefCell<Option<RevealTracker<DomObservation>>>> = Rc::new(RefCell::new(None));

                match node.cast::<Element>() {
                    Some(element) => {
                        let callback_tracker = tracker.clone();
                        let callback_state = state.clone();
                        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                            move |entries: Array, _observer: IntersectionObserver| {
                                let batch = entries
                                    .iter()
                                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                                    .map(|entry| entry.is_intersecting());
                                if let Some(tracker) = callback_tracker.borrow_mut().as_mut() {
                                    if let Some(next) = tracker.handle_entries(batch) {
                                        callback_state.set(next);
                                    }
                                }
                            },
                        );
                        match DomObservation::start(&element, options, callback) {
                            Ok(observation) => {
                                *tracker.borrow_mut() = Some(RevealTracker::new(options, observation));
                            }
                            Err(e) => {
                                warn!("Reveal observer unavailable, showing content: {}", e);
                                state.set(RevealState::revealed());
                            }
                        }
                    }
                    None => {
                        debug!("Reveal target not mounted, showing content");
                        state.set(RevealState::revealed());
                    }
                }

                // Dropping the tracker releases the observer and breaks the
                // tracker -> closure -> tracker cycle.
                move || {
                    tracker.borrow_mut().take();
                }
            },
            options,
        );
    }

    Reveal {
        node,
        state: *state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Stands in for the browser: counts releases, and the test only pushes
    /// entries through `deliver`, which mirrors "no callbacks after release".
    struct CountingObservation {
        released: Rc<Cell<u32>>,
    }

    impl Observation for CountingObservation {
        fn release(&mut self) {
            self.released.set(self.released.get() + 1);
        }
    }

    fn tracker(options: RevealOptions) -> (RevealTracker<CountingObservation>, Rc<Cell<u32>>) {
        let released = Rc::new(Cell::new(0));
        let observation = CountingObservation {
            released: released.clone(),
        };
        (RevealTracker::new(&options, observation), released)
    }

    fn deliver(tracker: &mut RevealTracker<CountingObservation>, entries: &[bool]) -> usize {
        entries
            .iter()
            .filter_map(|&e| tracker.handle_entry(e))
            .count()
    }

    #[test]
    fn defaults() {
        let options = RevealOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "0px");
        assert!(options.trigger_once);
    }

    #[test]
    fn one_shot_fires_once_and_releases() {
        let (mut tracker, released) = tracker(RevealOptions::default());

        let callbacks = deliver(&mut tracker, &[true, false, true, false]);

        assert_eq!(callbacks, 1);
        assert_eq!(released.get(), 1);
        assert!(!tracker.is_observing());
        assert!(tracker.state().has_triggered);
        assert!(tracker.state().is_visible());
    }

    #[test]
    fn one_shot_ignores_leaving_before_trigger() {
        let (mut tracker, released) = tracker(RevealOptions::default());

        assert_eq!(deliver(&mut tracker, &[false, false]), 2);
        assert_eq!(tracker.state(), RevealState::default());
        assert_eq!(released.get(), 0);

        deliver(&mut tracker, &[true]);
        assert!(tracker.state().has_triggered);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn triggered_never_reverts() {
        let mut state = RevealState::default();
        state.on_entry(true, true);
        for intersecting in [false, true, false] {
            state.on_entry(intersecting, true);
            assert!(state.has_triggered);
        }
    }

    #[test]
    fn continuous_mode_toggles_and_keeps_observing() {
        let (mut tracker, released) = tracker(RevealOptions::continuous());

        assert_eq!(tracker.handle_entry(true).map(|s| s.is_intersecting), Some(true));
        assert_eq!(tracker.handle_entry(false).map(|s| s.is_intersecting), Some(false));
        assert_eq!(tracker.handle_entry(true).map(|s| s.is_intersecting), Some(true));
        assert!(!tracker.state().has_triggered);
        assert!(tracker.is_observing());
        assert_eq!(released.get(), 0);
    }

    #[test]
    fn batched_entries_settle_on_the_last_one() {
        let (mut tracker, _) = tracker(RevealOptions::continuous());
        let state = tracker.handle_entries([true, false]);
        assert_eq!(state.map(|s| s.is_intersecting), Some(false));

        let state = tracker.handle_entries([false, true]);
        assert_eq!(state.map(|s| s.is_intersecting), Some(true));
    }

    #[test]
    fn batched_enter_then_leave_still_fires_one_shot() {
        let (mut tracker, released) = tracker(RevealOptions::default());
        let state = tracker.handle_entries([true, false]);
        assert_eq!(state.map(|s| s.has_triggered), Some(true));
        assert_eq!(released.get(), 1);
        assert_eq!(tracker.handle_entries([true]), None);
    }

    #[test]
    fn dropping_tracker_releases_exactly_once() {
        let (tracker, released) = tracker(RevealOptions::continuous());
        drop(tracker);
        assert_eq!(released.get(), 1);

        let (mut tracker, released) = self::tracker(RevealOptions::default());
        tracker.handle_entry(true);
        drop(tracker);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn handle_release_is_idempotent() {
        let released = Rc::new(Cell::new(0));
        let mut handle = ObservationHandle::new(CountingObservation {
            released: released.clone(),
        });
        handle.release();
        handle.release();
        drop(handle);
        assert_eq!(released.get(), 1);
    }
}
