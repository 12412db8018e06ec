use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Registered window `resize` listener; `remove` detaches it.
pub struct ResizeListener {
    closure: Closure<dyn FnMut()>,
}

impl ResizeListener {
    pub fn remove(self) {
        if let Some(window) = web::window() {
            _ = window.remove_event_listener_with_callback(
                "resize",
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

pub fn wire_resize(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> Option<ResizeListener> {
    let window = web::window()?;
    let closure = Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().on_resize();
    }) as Box<dyn FnMut()>);
    if let Err(e) =
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
    {
        log::warn!("resize listener not installed: {:?}", e);
        return None;
    }
    Some(ResizeListener { closure })
}
