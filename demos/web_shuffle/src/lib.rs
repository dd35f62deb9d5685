// Copyright 2026 the Shuffle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two shuffling card stacks on one page.
//!
//! The first stack animates with CSS transitions; the second is forced into
//! instant mode and only shows a "next" button. The left and right arrow
//! keys drive every stack at once through a [`StackRegistry`].
//!
//! Build with: `wasm-pack build --target web demos/web_shuffle`
//! Then serve `demos/web_shuffle/` and open `index.html`.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;

use shuffle_backend_web::{ConsoleSink, IMAGE_CONTAINER_CLASS, Shuffle};
use shuffle_core::config::StackConfig;
use shuffle_core::direction::Direction;
use shuffle_core::registry::StackRegistry;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, KeyboardEvent};

const TRANSITION: &str = "transform 0.45s ease-in-out";

/// `(left, top, rotation)` for each card, bottom to top.
const LAYOUT: [(&str, &str, &str); 5] = [
    ("-3", "2", "-6deg"),
    ("2", "-2", "4deg"),
    ("-1", "1", "-2deg"),
    ("3", "3", "0.02turn"),
    ("0", "0", "0"),
];

const PALETTES: [[&str; 5]; 2] = [
    ["264653", "2a9d8f", "e9c46a", "f4a261", "e76f51"],
    ["3d405b", "81b29a", "f2cc8f", "e07a5f", "f4f1de"],
];

#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("web_shuffle: no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("web_shuffle: no body"))?;

    install_styles(&document, &body)?;

    let mut registry = StackRegistry::new();
    let stacks = [
        ("#animated", StackConfig::web()),
        ("#instant", StackConfig::instant().with_prev(false)),
    ];
    for ((selector, config), palette) in stacks.into_iter().zip(PALETTES) {
        let gallery = build_gallery(&document, &selector[1..], &palette)?;
        body.append_child(&gallery)?;
        let shuffle = Shuffle::attach(&document, gallery, config)?;
        shuffle.set_trace_sink(Box::new(ConsoleSink::labeled(selector)));
        registry.insert(selector, shuffle);
    }

    let registry = Rc::new(RefCell::new(registry));
    let keys = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        let direction = match event.key().as_str() {
            "ArrowRight" => Direction::Next,
            "ArrowLeft" => Direction::Prev,
            _ => return,
        };
        event.prevent_default();
        if let Ok(registry) = registry.try_borrow() {
            for (_, shuffle) in registry.iter() {
                shuffle.shift(direction);
            }
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    document.add_event_listener_with_callback("keydown", keys.as_ref().unchecked_ref())?;
    // The page never tears the stacks down.
    keys.forget();

    Ok(())
}

fn install_styles(document: &Document, body: &HtmlElement) -> Result<(), JsValue> {
    let style = document.create_element("style")?;
    style.set_text_content(Some(&format!(
        "body {{ font-family: sans-serif; background: #f6f4ef; display: flex; gap: 48px; padding: 48px; }}\n\
         .shuffle {{ position: relative; width: 280px; }}\n\
         .{IMAGE_CONTAINER_CLASS} {{ position: relative; width: 240px; height: 160px; margin: 24px auto; }}\n\
         .{IMAGE_CONTAINER_CLASS} img {{ position: absolute; inset: 0; border-radius: 8px; \
         box-shadow: 0 6px 18px rgba(0,0,0,0.2); transition: {TRANSITION}; }}\n\
         .{IMAGE_CONTAINER_CLASS} img.animatingOut {{ box-shadow: 0 12px 30px rgba(0,0,0,0.35); }}\n\
         .nav {{ font-size: 18px; border: none; background: none; cursor: pointer; }}\n"
    )));
    body.append_child(&style)?;
    Ok(())
}

fn build_gallery(
    document: &Document,
    id: &str,
    palette: &[&str; 5],
) -> Result<HtmlElement, JsValue> {
    let gallery: HtmlElement = document.create_element("div")?.unchecked_into();
    gallery.set_id(id);
    gallery.set_class_name("shuffle");

    let images = document.create_element("div")?;
    images.set_class_name(IMAGE_CONTAINER_CLASS);
    for (i, ((left, top, rotation), color)) in LAYOUT.iter().zip(palette).enumerate() {
        let img = document.create_element("img")?;
        img.set_attribute("src", &card_image(color, i + 1))?;
        img.set_attribute("alt", &format!("card {}", i + 1))?;
        img.set_attribute("data-left", left)?;
        img.set_attribute("data-top", top)?;
        img.set_attribute("data-rotation", rotation)?;
        images.append_child(&img)?;
    }
    gallery.append_child(&images)?;
    Ok(gallery)
}

/// A numbered placeholder card as an SVG data URL.
fn card_image(color: &str, number: usize) -> String {
    format!(
        "data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' width='240' height='160'>\
         <rect width='100%25' height='100%25' fill='%23{color}'/>\
         <text x='50%25' y='58%25' font-size='56' text-anchor='middle' fill='white'>{number}</text>\
         </svg>"
    )
}
