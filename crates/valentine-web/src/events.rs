use crate::audio::BackgroundMusic;
use crate::dom;
use crate::layout;
use crate::overlay;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use valentine_core::{RejectTrigger, Scene};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct Wiring {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub music: Option<BackgroundMusic>,
}

pub fn wire_all(w: Wiring) {
    wire_buttons(&w);
    wire_letter_close(&w);
    wire_music_toggle(&w);
    wire_pointermove(&w);
    wire_resize(&w);
}

fn handle_reject(w: &Wiring, trigger: RejectTrigger) {
    let mut scene = w.scene.borrow_mut();
    if let Some(out) = scene.reject(trigger) {
        overlay::apply_reject(&w.document, scene.no_label(), out.yes_growth, out.no_offset);
    }
}

fn wire_buttons(w: &Wiring) {
    let hover = w.clone();
    dom::add_listener(&w.document, "no-button", "pointerenter", move || {
        handle_reject(&hover, RejectTrigger::Hover);
    });
    let click = w.clone();
    dom::add_click_listener(&w.document, "no-button", move || {
        handle_reject(&click, RejectTrigger::Click);
    });

    let yes = w.clone();
    dom::add_click_listener(&w.document, "yes-button", move || {
        let accepted = yes.scene.borrow_mut().confirm();
        if accepted {
            overlay::apply_phase(&yes.document, valentine_core::Phase::Accepted);
        }
    });
}

fn wire_letter_close(w: &Wiring) {
    let w2 = w.clone();
    dom::add_click_listener(&w.document, "letter-close", move || {
        w2.scene.borrow_mut().dismiss_letter();
        overlay::hide_letter(&w2.document);
    });
}

fn wire_music_toggle(w: &Wiring) {
    let w2 = w.clone();
    dom::add_click_listener(&w.document, "music-toggle", move || {
        let cmd = w2.scene.borrow_mut().toggle_music();
        if let Some(m) = &w2.music {
            m.apply(cmd);
        }
        let label = match cmd {
            valentine_core::MusicCommand::Play => "🔊",
            valentine_core::MusicCommand::Pause => "🔇",
        };
        dom::set_text(&w2.document, "music-toggle", label);
    });
}

fn wire_pointermove(w: &Wiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let rect = w.canvas.get_bounding_client_rect();
        let [x, y] = layout::pointer_ndc(
            ev.client_x() as f32 - rect.left() as f32,
            ev.client_y() as f32 - rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        );
        w.scene.borrow_mut().set_pointer(Vec2::new(x, y));
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_resize(w: &Wiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&w.canvas);
        if let Some((width, height)) = dom::viewport_css() {
            w.scene.borrow_mut().set_viewport(width, height);
        }
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
