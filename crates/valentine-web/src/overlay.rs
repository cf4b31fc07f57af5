use crate::dom;
use crate::layout;
use valentine_core::content;
use valentine_core::Phase;
use web_sys as web;

const LETTER_ID: &str = "letter-overlay";
const LETTER_BODY_ID: &str = "letter-body";

/// Fill in the static text once at start-up.
pub fn populate(document: &web::Document, no_label: &str) {
    apply_phase(document, Phase::Asking);
    dom::set_text(document, "yes-button", content::YES_LABEL);
    dom::set_text(document, "no-button", no_label);
    if let Some(el) = document.get_element_by_id(LETTER_BODY_ID) {
        el.set_inner_html(&layout::letter_html(
            content::LETTER_HEADING,
            content::LETTER_OPENING,
            content::LETTER_BODY,
            &content::WHOLESOME_REASONS,
            content::LETTER_SIGN_OFF,
        ));
    }
    hide_letter(document);
}

/// Headline text and button visibility for `phase`.
pub fn apply_phase(document: &web::Document, phase: Phase) {
    dom::set_text(document, "title", content::title(phase));
    dom::set_text(document, "subtitle", content::subtitle(phase));
    dom::set_hidden(document, "buttons", phase == Phase::Accepted);
}

pub fn apply_reject(document: &web::Document, label: &str, yes_growth: f32, no_offset: glam::Vec2) {
    dom::set_text(document, "no-button", label);
    dom::set_transform(
        document,
        "no-button",
        &layout::no_button_transform(no_offset.x, no_offset.y),
    );
    dom::set_transform(document, "yes-button", &layout::yes_button_transform(yes_growth));
}

#[inline]
pub fn show_letter(document: &web::Document) {
    dom::set_hidden(document, LETTER_ID, false);
}

#[inline]
pub fn hide_letter(document: &web::Document) {
    dom::set_hidden(document, LETTER_ID, true);
}
