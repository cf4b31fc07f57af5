use crate::dom;
use crate::overlay;
use crate::render;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use valentine_core::{EntityTransform, Scene, SpriteInstance};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<Scene>>,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub started: Instant,
    pub last_instant: Instant,
    pub entities: Vec<EntityTransform>,
    pub sprites: Vec<SpriteInstance>,
    pub overlay: Vec<SpriteInstance>,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        scene: Rc<RefCell<Scene>>,
        document: web::Document,
        canvas: web::HtmlCanvasElement,
        gpu: Option<render::GpuState<'a>>,
    ) -> Self {
        let now = Instant::now();
        Self {
            scene,
            document,
            canvas,
            gpu,
            started: now,
            last_instant: now,
            entities: Vec::new(),
            sprites: Vec::new(),
            overlay: Vec::new(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let elapsed = (now - self.started).as_secs_f64();

        let camera = {
            let mut scene = self.scene.borrow_mut();
            let report = scene.tick(elapsed, &mut self.entities);
            if report.letter_revealed {
                overlay::show_letter(&self.document);
            }
            if report.bloom_started > 0 {
                log::debug!(
                    "[bloom] +{} -{} blooming={}",
                    report.bloom_started,
                    report.bloom_ended,
                    report.blooming
                );
            }
            self.overlay.clear();
            self.overlay
                .extend(scene.confetti().map(|p| SpriteInstance::from_confetti(&p)));
            scene.camera()
        };

        self.sprites.clear();
        self.sprites
            .extend(self.entities.iter().map(SpriteInstance::from_entity));

        if let Some(g) = &mut self.gpu {
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            let viewport = dom::viewport_css()
                .map(|(w, h)| Vec2::new(w, h))
                .unwrap_or(Vec2::new(w as f32, h as f32));
            if let Err(e) = g.render(dt_sec, &camera, &mut self.sprites, &self.overlay, viewport) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
