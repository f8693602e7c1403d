//! Browser tests for the document-backed particle surface.
//!
//! Run with: wasm-pack test --headless --chrome

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use clover_site::effects::dom::DomSurface;
use clover_site::effects::particles::{Surface, DUST_TAG, SPARKLE_TAG};

fn surface() -> DomSurface {
    let document = web_sys::window().unwrap().document().unwrap();
    DomSurface::new(document)
}

#[wasm_bindgen_test]
fn place_inserts_a_tagged_node() {
    let surface = surface();
    surface.place(1, SPARKLE_TAG, "left: 10px; top: 20px;");

    let document = web_sys::window().unwrap().document().unwrap();
    let node = document
        .get_element_by_id("magic-sparkle-1")
        .expect("node placed on the body");
    assert_eq!(node.class_name(), SPARKLE_TAG);
    assert_eq!(node.get_attribute("style").unwrap(), "left: 10px; top: 20px;");

    surface.sweep(SPARKLE_TAG);
}

#[wasm_bindgen_test]
fn clear_removes_once_and_only_once() {
    let surface = surface();
    surface.place(2, SPARKLE_TAG, "left: 0px; top: 0px;");

    assert!(surface.clear(2, SPARKLE_TAG));
    assert!(!surface.clear(2, SPARKLE_TAG));
    assert_eq!(surface.count(SPARKLE_TAG), 0);
}

#[wasm_bindgen_test]
fn sweep_leaves_other_tags_alone() {
    let surface = surface();
    for id in 0..5 {
        surface.place(id, DUST_TAG, "left: 50%;");
    }
    surface.place(10, SPARKLE_TAG, "left: 1px; top: 1px;");

    surface.sweep(DUST_TAG);
    assert_eq!(surface.count(DUST_TAG), 0);
    assert_eq!(surface.count(SPARKLE_TAG), 1);

    surface.sweep(SPARKLE_TAG);
    assert_eq!(surface.count(SPARKLE_TAG), 0);
}

#[wasm_bindgen_test]
fn sweep_with_nothing_present_is_a_no_op() {
    let surface = surface();
    surface.sweep(DUST_TAG);
    assert_eq!(surface.count(DUST_TAG), 0);
}
