#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use valentine_core::{DeviceClass, Scene, SceneConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod dom;
mod events;
mod frame;
mod layout;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("valentine-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn seed_from_clock() -> u64 {
    let jitter = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (js_sys::Date::now() as u64) ^ (jitter << 20)
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);

    let (width, height) = dom::viewport_css().unwrap_or((1280.0, 720.0));
    let device = DeviceClass::from_viewport_width(width as f64);
    let config = SceneConfig {
        seed: seed_from_clock(),
        ..Default::default()
    };
    let mut scene = Scene::new(config, device)?;
    scene.set_viewport(width, height);
    log::info!("[init] {:?} viewport {:.0}x{:.0}", device, width, height);
    overlay::populate(&document, scene.no_label());
    let scene = Rc::new(RefCell::new(scene));

    let music = audio::BackgroundMusic::from_document(&document, "bg-music");
    if music.is_none() {
        log::warn!("[music] no #bg-music element; toggle is visual only");
    }
    events::wire_all(events::Wiring {
        document: document.clone(),
        canvas: canvas.clone(),
        scene: scene.clone(),
        music,
    });

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        scene, document, canvas, gpu,
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
