// Copyright 2026 the Shuffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM card surface.
//!
//! Applies [`CardStack`] state to a set of card elements by writing their
//! inline `z-index` and `transform` styles and toggling the animating class.
//! It also owns the per-card transition-end listeners and the completion
//! timer, registering them only while a shift is pending.
//!
//! [`CardStack`]: shuffle_core::stack::CardStack

use alloc::boxed::Box;
use alloc::string::ToString as _;
use alloc::vec::Vec;

use shuffle_core::surface::CardSurface;
use shuffle_core::time::Duration;
use shuffle_core::transform::CardTransform;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, HtmlElement};

type EventClosure = Closure<dyn FnMut(Event)>;
type TimerClosure = Closure<dyn FnMut()>;

/// Maps card indices to live DOM elements.
///
/// Card keys are indices into the element list given to
/// [`new`](Self::new). Style writes that the browser rejects are dropped.
pub struct DomSurface {
    cards: Vec<HtmlElement>,
    animating_class: &'static str,
    transition_end: &'static str,
    /// One transition-end callback per card, installed by the widget.
    listeners: Vec<Option<EventClosure>>,
    /// Index of the card whose listener is registered, if any.
    listening: Option<usize>,
    timer: Option<TimerClosure>,
    timer_handle: Option<i32>,
    completion_timeout: Duration,
}

impl core::fmt::Debug for DomSurface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomSurface")
            .field("cards_len", &self.cards.len())
            .field("animating_class", &self.animating_class)
            .field("transition_end", &self.transition_end)
            .field("listening", &self.listening)
            .field("timer_handle", &self.timer_handle)
            .finish_non_exhaustive()
    }
}

impl DomSurface {
    /// Creates a surface over `cards`.
    ///
    /// `transition_end` is the event name that ends a transition on this
    /// host; `completion_timeout` is how long a pending shift waits for it.
    #[must_use]
    pub fn new(
        cards: Vec<HtmlElement>,
        animating_class: &'static str,
        transition_end: &'static str,
        completion_timeout: Duration,
    ) -> Self {
        let mut listeners = Vec::new();
        listeners.resize_with(cards.len(), || None);
        Self {
            cards,
            animating_class,
            transition_end,
            listeners,
            listening: None,
            timer: None,
            timer_handle: None,
            completion_timeout,
        }
    }

    /// Number of card elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the surface has no card elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the element for card `idx`.
    #[must_use]
    pub fn card(&self, idx: usize) -> Option<&HtmlElement> {
        self.cards.get(idx)
    }

    /// Installs the transition-end callback of card `idx`.
    pub(crate) fn set_listener(&mut self, idx: usize, listener: EventClosure) {
        if let Some(slot) = self.listeners.get_mut(idx) {
            *slot = Some(listener);
        }
    }

    /// Installs the callback run when the completion timer fires.
    pub(crate) fn set_timer(&mut self, timer: TimerClosure) {
        self.timer = Some(timer);
    }

    /// Schedules the completion timer `delay` from now, replacing any
    /// scheduled one.
    pub(crate) fn arm_timer(&mut self, delay: Duration) {
        self.clear_timer();
        let (Some(window), Some(timer)) = (web_sys::window(), self.timer.as_ref()) else {
            return;
        };
        let ms = i32::try_from(delay.as_millis_ceil()).unwrap_or(i32::MAX);
        if let Ok(handle) = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(timer.as_ref().unchecked_ref(), ms)
        {
            self.timer_handle = Some(handle);
        }
    }

    /// Forgets the handle of a timer that has already fired.
    pub(crate) fn timer_fired(&mut self) {
        self.timer_handle = None;
    }

    fn clear_timer(&mut self) {
        if let (Some(handle), Some(window)) = (self.timer_handle.take(), web_sys::window()) {
            window.clear_timeout_with_handle(handle);
        }
    }

    fn remove_listener(&mut self) {
        let Some(idx) = self.listening.take() else {
            return;
        };
        if let (Some(el), Some(Some(listener))) = (self.cards.get(idx), self.listeners.get(idx)) {
            let _ = el.remove_event_listener_with_callback(
                self.transition_end,
                listener.as_ref().unchecked_ref(),
            );
        }
    }

    /// Unregisters everything that could call back into a dropped widget.
    pub(crate) fn detach(&mut self) {
        self.remove_listener();
        self.clear_timer();
    }
}

impl CardSurface<usize> for DomSurface {
    fn set_z_index(&mut self, card: usize, z_index: i32) {
        if let Some(el) = self.cards.get(card) {
            let _ = el.style().set_property("z-index", &z_index.to_string());
        }
    }

    fn set_transform(&mut self, card: usize, transform: &CardTransform) {
        if let Some(el) = self.cards.get(card) {
            let _ = el.style().set_property("transform", &transform.to_css());
        }
    }

    fn set_animating_out(&mut self, card: usize, animating: bool) {
        if let Some(el) = self.cards.get(card) {
            let classes = el.class_list();
            let _ = if animating {
                classes.add_1(self.animating_class)
            } else {
                classes.remove_1(self.animating_class)
            };
        }
    }

    fn begin_transition(&mut self, card: usize) {
        self.remove_listener();
        if let (Some(el), Some(Some(listener))) = (self.cards.get(card), self.listeners.get(card))
            && el
                .add_event_listener_with_callback(
                    self.transition_end,
                    listener.as_ref().unchecked_ref(),
                )
                .is_ok()
        {
            self.listening = Some(card);
        }
        self.arm_timer(self.completion_timeout);
    }

    fn end_transition(&mut self, card: usize) {
        _ = card;
        self.remove_listener();
        self.clear_timer();
    }
}

/// Boxes a transition-end callback for [`DomSurface::set_listener`].
pub(crate) fn event_closure(f: impl FnMut(Event) + 'static) -> EventClosure {
    Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>)
}

/// Boxes a timer callback for [`DomSurface::set_timer`].
pub(crate) fn timer_closure(f: impl FnMut() + 'static) -> TimerClosure {
    Closure::wrap(Box::new(f) as Box<dyn FnMut()>)
}
