#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod config;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;

use config::SceneConfig;
use constants::{CANVAS_SELECTOR, LABEL_RASTER_PADDING_PX, LABEL_RASTER_PX};
use frame::{FrameContext, LoopHandle};

/// A running scene: the frame loop and the listeners feeding it.
struct Session {
    frame_loop: LoopHandle,
    resize: Option<events::ResizeListener>,
}

impl Session {
    fn teardown(self) {
        self.frame_loop.cancel();
        if let Some(r) = self.resize {
            r.remove();
        }
    }
}

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("landing-scene starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stops the frame loop and detaches the resize listener.
#[wasm_bindgen]
pub fn stop() {
    if let Some(session) = SESSION.with(|s| s.borrow_mut().take()) {
        session.teardown();
        log::info!("landing-scene stopped");
    }
}

async fn init() -> anyhow::Result<()> {
    if SESSION.with(|s| s.borrow().is_some()) {
        log::warn!("scene already running; ignoring start");
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::query_canvas(&document, CANVAS_SELECTOR)?;
    let config = SceneConfig::from_canvas(&canvas);

    // Size the canvas before the surface is created so it starts at the
    // right resolution.
    let viewport = dom::viewport_size();
    if let Some(v) = viewport {
        dom::size_canvas(&canvas, v);
    }

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(FrameContext::new(canvas, viewport, gpu)));
    let resize = events::wire_resize(frame_ctx.clone());

    spawn_background_load(frame_ctx.clone(), config.background_url.clone());
    spawn_label_load(frame_ctx.clone(), config);

    let frame_loop = frame::start_loop(frame_ctx);
    SESSION.with(|s| {
        *s.borrow_mut() = Some(Session { frame_loop, resize });
    });
    Ok(())
}

fn spawn_background_load(frame_ctx: Rc<RefCell<FrameContext<'static>>>, url: String) {
    spawn_local(async move {
        let max_side = frame_ctx.borrow().max_texture_dimension();
        match assets::load_background(&url, max_side).await {
            Ok(loaded) => frame_ctx.borrow_mut().apply_background(loaded),
            Err(e) => log::warn!("background not loaded: {:?}", e),
        }
    });
}

fn spawn_label_load(frame_ctx: Rc<RefCell<FrameContext<'static>>>, config: SceneConfig) {
    spawn_local(async move {
        match assets::load_label(
            &config.font_family,
            &config.font_url,
            &config.label_text,
            LABEL_RASTER_PX,
            LABEL_RASTER_PADDING_PX,
        )
        .await
        {
            Ok(image) => frame_ctx.borrow_mut().apply_label(&image),
            Err(e) => log::warn!("label omitted: {:?}", e),
        }
    });
}
