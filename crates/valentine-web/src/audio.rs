use valentine_core::MusicCommand;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// The page's looping background track.
#[derive(Clone)]
pub struct BackgroundMusic {
    element: web::HtmlAudioElement,
}

impl BackgroundMusic {
    pub fn from_document(document: &web::Document, element_id: &str) -> Option<Self> {
        let element = document
            .get_element_by_id(element_id)?
            .dyn_into::<web::HtmlAudioElement>()
            .ok()?;
        element.set_loop(true);
        Some(Self { element })
    }

    pub fn apply(&self, cmd: MusicCommand) {
        match cmd {
            MusicCommand::Play => match self.element.play() {
                Ok(promise) => {
                    // autoplay policies may reject; nothing to do about it
                    spawn_local(async move {
                        if let Err(e) = JsFuture::from(promise).await {
                            log::debug!("[music] play rejected: {:?}", e);
                        }
                    });
                }
                Err(e) => log::debug!("[music] play failed: {:?}", e),
            },
            MusicCommand::Pause => {
                _ = self.element.pause();
            }
        }
    }
}
