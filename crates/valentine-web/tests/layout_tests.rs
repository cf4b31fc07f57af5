// Host-side tests for the pure layout helpers.
// The web crate is wasm-only, so we include the module directly.

#![allow(dead_code)]
mod layout {
    include!("../src/layout.rs");
}

use layout::*;

#[test]
fn pointer_corners_map_to_ndc_extremes() {
    assert_eq!(pointer_ndc(0.0, 0.0, 800.0, 600.0), [-1.0, 1.0]);
    assert_eq!(pointer_ndc(800.0, 600.0, 800.0, 600.0), [1.0, -1.0]);
    assert_eq!(pointer_ndc(400.0, 300.0, 800.0, 600.0), [0.0, 0.0]);
}

#[test]
fn pointer_outside_element_is_clamped() {
    assert_eq!(pointer_ndc(-50.0, 900.0, 800.0, 600.0), [-1.0, -1.0]);
}

#[test]
fn zero_sized_element_centres_pointer() {
    assert_eq!(pointer_ndc(10.0, 10.0, 0.0, 0.0), [0.0, 0.0]);
}

#[test]
fn button_transforms_are_css() {
    assert_eq!(no_button_transform(12.34, -5.0), "translate(12.3px, -5.0px)");
    assert_eq!(yes_button_transform(1.3), "scale(1.30)");
}

#[test]
fn letter_lists_every_reason() {
    let html = letter_html("Hi", "Open", "Body", &["a", "b", "c"], "Bye");
    assert!(html.starts_with("<h2>Hi</h2>"));
    assert_eq!(html.matches("<li>").count(), 3);
    assert!(html.ends_with("<p class='sign-off'>Bye</p>"));
}
