// Copyright 2026 the Shuffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS transition capability probe.
//!
//! Older engines only expose vendor-prefixed transition properties, and each
//! prefix comes with its own name for the transition-end event. The probe
//! runs once per widget and settles both.

use wasm_bindgen::JsValue;
use web_sys::Document;

/// Style properties to probe, each paired with its transition-end event.
const CANDIDATES: [(&str, &str); 4] = [
    ("transition", "transitionend"),
    ("OTransition", "oTransitionEnd"),
    ("MozTransition", "transitionend"),
    ("WebkitTransition", "webkitTransitionEnd"),
];

/// Whether the host animates CSS transitions, and which event ends one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransitionSupport {
    end_event: Option<&'static str>,
}

impl TransitionSupport {
    /// A host without CSS transitions.
    pub const NONE: Self = Self { end_event: None };

    /// A host with unprefixed CSS transitions.
    pub const STANDARD: Self = Self {
        end_event: Some("transitionend"),
    };

    /// Probes a scratch element of `document` for transition support.
    #[must_use]
    pub fn detect(document: &Document) -> Self {
        let Ok(probe) = document.create_element("div") else {
            return Self::NONE;
        };
        let Some(probe) = wasm_bindgen::JsCast::dyn_ref::<web_sys::HtmlElement>(&probe) else {
            return Self::NONE;
        };
        let style = probe.style();
        Self::from_probe(|property| {
            js_sys::Reflect::get(&style, &JsValue::from_str(property))
                .is_ok_and(|value| !value.is_undefined())
        })
    }

    /// Settles support from a property check, trying the unprefixed name
    /// first.
    #[must_use]
    pub fn from_probe(mut has_property: impl FnMut(&str) -> bool) -> Self {
        CANDIDATES
            .iter()
            .find(|(property, _)| has_property(property))
            .map_or(Self::NONE, |&(_, event)| Self {
                end_event: Some(event),
            })
    }

    /// Returns `true` if the host animates transitions.
    #[inline]
    #[must_use]
    pub const fn is_supported(self) -> bool {
        self.end_event.is_some()
    }

    /// Name of the transition-end event, `transitionend` when unsupported.
    #[inline]
    #[must_use]
    pub const fn end_event(self) -> &'static str {
        match self.end_event {
            Some(event) => event,
            None => "transitionend",
        }
    }
}
