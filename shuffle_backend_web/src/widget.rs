// Copyright 2026 the Shuffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The card stack widget.
//!
//! [`Shuffle`] binds a [`CardStack`] to a container element:
//!
//! ```text
//! <div class="shuffle">              ← container
//!   <button class="nav prev">        ← created when `show_prev`
//!   <button class="nav next">        ← created when `show_next`
//!   <div class="image_container">
//!     <img data-left data-top data-rotation>   ← one card each
//!     ...
//! ```
//!
//! The cards, their metadata, and the host's transition support are read
//! once, when the widget is attached. Clicks, transition-end events, and the
//! completion timer all funnel into the same shared state; anything that
//! arrives while that state is already borrowed is dropped.

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;

use shuffle_core::card::{CardMetrics, LEFT_ATTRIBUTE, ROTATION_ATTRIBUTE, TOP_ATTRIBUTE};
use shuffle_core::config::StackConfig;
use shuffle_core::direction::Direction;
use shuffle_core::stack::{Card, CardStack, Step};
use shuffle_core::trace::{TraceSink, Tracer};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, HtmlButtonElement, HtmlElement, Node};

use crate::features::TransitionSupport;
use crate::surface::{DomSurface, event_closure, timer_closure};

/// Class of the element holding the card images.
///
/// When the container has no such descendant, the container itself holds
/// the images.
pub const IMAGE_CONTAINER_CLASS: &str = "image_container";

struct Inner {
    stack: CardStack<usize>,
    surface: DomSurface,
    sink: Option<Box<dyn TraceSink>>,
}

impl Inner {
    fn with_tracer<R>(
        &mut self,
        f: impl FnOnce(&mut CardStack<usize>, &mut DomSurface, &mut Tracer<'_>) -> R,
    ) -> R {
        let Self {
            stack,
            surface,
            sink,
        } = self;
        let mut tracer = match sink {
            Some(sink) => Tracer::new(sink.as_mut()),
            None => Tracer::none(),
        };
        f(stack, surface, &mut tracer)
    }

    fn shift(&mut self, direction: Direction) -> Step<usize> {
        let now = crate::now();
        self.with_tracer(|stack, surface, tracer| stack.shift(direction, now, surface, tracer))
    }

    fn finish(&mut self, card: usize) -> bool {
        let now = crate::now();
        self.with_tracer(|stack, surface, tracer| stack.finish(card, now, surface, tracer))
    }

    fn expire(&mut self) {
        let now = crate::now();
        self.surface.timer_fired();
        self.with_tracer(|stack, surface, tracer| {
            if stack.expire(now, surface, tracer) {
                return;
            }
            // Timers can fire a little early; wait out the rest.
            if let Some(pending) = stack.pending() {
                surface.arm_timer(pending.deadline.saturating_duration_since(now));
            }
        });
    }
}

struct NavButton {
    element: HtmlButtonElement,
    on_click: Closure<dyn FnMut(Event)>,
}

impl NavButton {
    fn create(
        document: &Document,
        container: &HtmlElement,
        image_container: &HtmlElement,
        direction: Direction,
        inner: &Rc<RefCell<Inner>>,
    ) -> Result<Self, JsValue> {
        let element: HtmlButtonElement = document.create_element("button")?.unchecked_into();
        let (class, label) = match direction {
            Direction::Prev => ("nav prev", "\u{25C0}"),
            Direction::Next => ("nav next", "\u{25B6}"),
        };
        element.set_class_name(class);
        element.set_text_content(Some(label));

        // Buttons go right before the image container when it is a direct
        // child; otherwise they are appended.
        let container_node: &Node = container;
        let image_node: &Node = image_container;
        let anchor = image_node
            .parent_node()
            .is_some_and(|parent| parent.is_same_node(Some(container_node)))
            .then_some(image_node);
        container_node.insert_before(&element, anchor)?;

        let weak = Rc::downgrade(inner);
        let on_click = event_closure(move |_event: Event| {
            with_inner(&weak, |inner| {
                inner.shift(direction);
            });
        });
        element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        Ok(Self { element, on_click })
    }

    fn remove(&self) {
        let _ = self
            .element
            .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref());
        self.element.remove();
    }
}

/// Runs `f` on the shared state if the widget is alive and not already busy.
fn with_inner(weak: &Weak<RefCell<Inner>>, f: impl FnOnce(&mut Inner)) {
    if let Some(inner) = weak.upgrade()
        && let Ok(mut inner) = inner.try_borrow_mut()
    {
        f(&mut inner);
    }
}

/// A shuffling card stack bound to a container element.
///
/// Dropping the widget unregisters its listeners and removes the buttons it
/// created; the card elements keep their last styles.
pub struct Shuffle {
    inner: Rc<RefCell<Inner>>,
    container: HtmlElement,
    buttons: Vec<NavButton>,
}

impl core::fmt::Debug for Shuffle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let inner = self.inner.try_borrow();
        f.debug_struct("Shuffle")
            .field("container", &"HtmlElement")
            .field("buttons_len", &self.buttons.len())
            .field("stack", &inner.as_ref().map(|i| &i.stack).ok())
            .finish_non_exhaustive()
    }
}

impl Shuffle {
    /// Attaches a widget to the first element matching `selector`.
    ///
    /// # Errors
    ///
    /// Fails if there is no document, no element matches, the match is not an
    /// HTML element, or a button cannot be created.
    pub fn new(selector: &str, config: StackConfig) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("shuffle: no document"))?;
        let container = document
            .query_selector(selector)?
            .ok_or_else(|| JsValue::from_str(&format!("shuffle: nothing matches `{selector}`")))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| JsValue::from_str(&format!("shuffle: `{selector}` is not an HTML element")))?;
        Self::attach(&document, container, config)
    }

    /// Attaches a widget to `container`.
    ///
    /// # Errors
    ///
    /// Fails if a navigation button cannot be created or inserted.
    pub fn attach(
        document: &Document,
        container: HtmlElement,
        config: StackConfig,
    ) -> Result<Self, JsValue> {
        let image_container = container
            .get_elements_by_class_name(IMAGE_CONTAINER_CLASS)
            .item(0)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .unwrap_or_else(|| container.clone());

        let images = image_container.get_elements_by_tag_name("img");
        let mut elements = Vec::new();
        let mut cards = Vec::new();
        for i in 0..images.length() {
            if let Some(el) = images.item(i).and_then(|el| el.dyn_into::<HtmlElement>().ok()) {
                cards.push(Card::new(elements.len(), read_metrics(&el)));
                elements.push(el);
            }
        }

        let support = TransitionSupport::detect(document);
        let mut surface = DomSurface::new(
            elements,
            config.animating_class,
            support.end_event(),
            config.completion_timeout,
        );
        let stack = CardStack::new(cards, &config, support.is_supported(), &mut surface);
        let inner = Rc::new(RefCell::new(Inner {
            stack,
            surface,
            sink: None,
        }));

        {
            let mut state = inner.borrow_mut();
            for idx in 0..state.surface.len() {
                let weak = Rc::downgrade(&inner);
                state.surface.set_listener(
                    idx,
                    event_closure(move |event: Event| {
                        event.stop_propagation();
                        with_inner(&weak, |inner| {
                            inner.finish(idx);
                        });
                    }),
                );
            }
            let weak = Rc::downgrade(&inner);
            state
                .surface
                .set_timer(timer_closure(move || with_inner(&weak, Inner::expire)));
        }

        let mut shuffle = Self {
            inner,
            container,
            buttons: Vec::new(),
        };
        for (show, direction) in [
            (config.show_prev, Direction::Prev),
            (config.show_next, Direction::Next),
        ] {
            if show {
                let button = NavButton::create(
                    document,
                    &shuffle.container,
                    &image_container,
                    direction,
                    &shuffle.inner,
                )?;
                shuffle.buttons.push(button);
            }
        }
        Ok(shuffle)
    }

    /// Moves to the next card.
    ///
    /// Returns [`Step::Ignored`] while a shift is pending.
    pub fn advance(&self) -> Step<usize> {
        self.shift(Direction::Next)
    }

    /// Moves to the previous card.
    ///
    /// Returns [`Step::Ignored`] while a shift is pending.
    pub fn retreat(&self) -> Step<usize> {
        self.shift(Direction::Prev)
    }

    /// Shifts one card in `direction`.
    pub fn shift(&self, direction: Direction) -> Step<usize> {
        match self.inner.try_borrow_mut() {
            Ok(mut inner) => inner.shift(direction),
            Err(_) => Step::Ignored(shuffle_core::trace::IgnoreReason::Busy),
        }
    }

    /// Returns `true` while a shift is pending.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.inner
            .try_borrow()
            .map_or(true, |inner| inner.stack.is_animating())
    }

    /// Current order as card indices, bottom to top.
    #[must_use]
    pub fn order(&self) -> Vec<usize> {
        self.inner
            .try_borrow()
            .map(|inner| inner.stack.order().collect())
            .unwrap_or_default()
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.try_borrow().map_or(0, |inner| inner.stack.len())
    }

    /// Returns `true` if the container holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The container element.
    #[must_use]
    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    /// The element of card `idx`.
    #[must_use]
    pub fn card_element(&self, idx: usize) -> Option<HtmlElement> {
        self.inner.try_borrow().ok()?.surface.card(idx).cloned()
    }

    /// Routes trace events to `sink`, returning the previous sink.
    ///
    /// Events are only delivered when the `trace` feature is enabled.
    pub fn set_trace_sink(&self, sink: Box<dyn TraceSink>) -> Option<Box<dyn TraceSink>> {
        self.inner.borrow_mut().sink.replace(sink)
    }

    /// Stops tracing, returning the current sink.
    pub fn take_trace_sink(&self) -> Option<Box<dyn TraceSink>> {
        self.inner.borrow_mut().sink.take()
    }
}

impl Drop for Shuffle {
    fn drop(&mut self) {
        for button in &self.buttons {
            button.remove();
        }
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.surface.detach();
        }
    }
}

fn read_metrics(el: &HtmlElement) -> CardMetrics {
    let left = el.get_attribute(LEFT_ATTRIBUTE);
    let top = el.get_attribute(TOP_ATTRIBUTE);
    let rotation = el.get_attribute(ROTATION_ATTRIBUTE);
    CardMetrics::from_attributes(left.as_deref(), top.as_deref(), rotation.as_deref())
}
