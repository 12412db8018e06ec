use crate::assets::LoadedBackground;
use crate::core::{
    refit, BackgroundFit, Bobber, ImageSize, PerspectiveCamera, ViewportSize, CAMERA_FAR,
    CAMERA_FOV_Y_DEG, CAMERA_NEAR, CAMERA_POSITION, LABEL_Y, LABEL_Z,
};
use crate::dom::{self, RgbaImage};
use crate::render;
use glam::Vec3;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one scene instance needs per frame and per event.
pub struct FrameContext<'a> {
    pub canvas: web::HtmlCanvasElement,
    pub camera: PerspectiveCamera,
    pub gpu: Option<render::GpuState<'a>>,

    pub started: Instant,
    pub bobber: Bobber,
    pub sphere_position: Vec3,

    // natural size of the background once loaded; its presence gates fitting
    pub background: Option<ImageSize>,
    pub fit: BackgroundFit,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        viewport: Option<ViewportSize>,
        gpu: Option<render::GpuState<'a>>,
    ) -> Self {
        let aspect = viewport.map(|v| v.aspect()).unwrap_or(1.0);
        let sphere_position = Vec3::ZERO;
        Self {
            canvas,
            camera: PerspectiveCamera::new(
                CAMERA_FOV_Y_DEG,
                aspect,
                CAMERA_NEAR,
                CAMERA_FAR,
                CAMERA_POSITION,
            ),
            gpu,
            started: Instant::now(),
            bobber: Bobber::new(sphere_position.y),
            sphere_position,
            background: None,
            fit: BackgroundFit::IDENTITY,
        }
    }

    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f64();
        self.sphere_position.y = self.bobber.step(elapsed);

        if let Some(g) = &mut self.gpu {
            g.set_sphere_position(self.sphere_position);
            if let Err(e) = g.render(&self.camera) {
                log::error!("render error: {:?}", e);
            }
        }
    }

    /// Window resize: viewport, camera projection, surface size, and the
    /// background fit when a background is set. A zero-sized viewport leaves
    /// everything as it was.
    pub fn on_resize(&mut self) {
        let Some(viewport) = dom::viewport_size() else {
            log::debug!("resize skipped: empty viewport");
            return;
        };
        let (w_px, h_px) = dom::size_canvas(&self.canvas, viewport);
        self.camera.set_aspect(viewport.aspect());
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w_px, h_px);
        }
        if self.background.is_some() {
            self.refit_background(Some(viewport));
        }
    }

    /// Recomputes the fit and uploads it. An unusable viewport keeps the
    /// previous fit, which is still uploaded so a freshly bound texture never
    /// samples with stale uniforms.
    fn refit_background(&mut self, viewport: Option<ViewportSize>) {
        self.fit = refit(self.fit, self.background, viewport);
        if let Some(g) = &self.gpu {
            g.set_background_fit(self.fit);
        }
    }

    /// Largest texture side the device accepts; the WebGPU baseline when no
    /// device is available.
    pub fn max_texture_dimension(&self) -> u32 {
        self.gpu
            .as_ref()
            .map(|g| g.max_texture_dimension())
            .unwrap_or_else(|| wgpu::Limits::default().max_texture_dimension_2d)
    }

    pub fn apply_background(&mut self, loaded: LoadedBackground) {
        self.background = Some(loaded.size);
        if let Some(g) = &mut self.gpu {
            g.set_background(&loaded.image);
        }
        self.refit_background(dom::viewport_size());
        log::info!(
            "background {}x{} fit offset=({:.3},{:.3}) repeat=({:.3},{:.3})",
            loaded.size.width(),
            loaded.size.height(),
            self.fit.offset.x,
            self.fit.offset.y,
            self.fit.repeat.x,
            self.fit.repeat.y
        );
    }

    pub fn apply_label(&mut self, image: &RgbaImage) {
        if let Some(g) = &mut self.gpu {
            g.set_label(image, Vec3::new(0.0, LABEL_Y, LABEL_Z));
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

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Stops the animation-frame chain started by `start_loop`.
pub struct LoopHandle {
    cancelled: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: TickClosure,
}

impl LoopHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's reference to itself.
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &TickClosure, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        pending.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> LoopHandle {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let cancelled = Rc::new(Cell::new(false));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let cancelled_tick = cancelled.clone();
    let pending_tick = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        if cancelled_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &pending_tick);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &pending);

    LoopHandle {
        cancelled,
        pending,
        tick,
    }
}
