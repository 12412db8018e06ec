use crate::constants::MAX_PIXEL_RATIO;
use crate::core::{clamp_extent, scrollbar_adjusted_width, ViewportSize};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Tightly packed RGBA8 pixels, rows top to bottom.
pub struct RgbaImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn query_canvas(
    document: &web::Document,
    selector: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("bad selector {}: {:?}", selector, e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", selector))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Current window size, less the vertical scrollbar. `None` while the window
/// reports a zero dimension (e.g. minimized).
pub fn viewport_size() -> Option<ViewportSize> {
    let window = web::window()?;
    let inner_w = window.inner_width().ok()?.as_f64()? as f32;
    let inner_h = window.inner_height().ok()?.as_f64()? as f32;
    let client_w = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.client_width() as f32)
        .unwrap_or(0.0);
    ViewportSize::new(scrollbar_adjusted_width(inner_w, client_w), inner_h)
}

#[inline]
pub fn pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .min(MAX_PIXEL_RATIO)
}

/// Sizes the canvas to `viewport` CSS pixels with a backing store scaled by
/// the capped device pixel ratio. Returns the backing size in pixels.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, viewport: ViewportSize) -> (u32, u32) {
    let dpr = pixel_ratio();
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.width()));
    _ = style.set_property("height", &format!("{}px", viewport.height()));
    let w_px = ((viewport.width() as f64 * dpr) as u32).max(1);
    let h_px = ((viewport.height() as f64 * dpr) as u32).max(1);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px, h_px)
}

fn scratch_context(
    width: u32,
    height: u32,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    let document = window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_width(width.max(1));
    canvas.set_height(height.max(1));
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("get_context: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

fn read_pixels(
    ctx: &web::CanvasRenderingContext2d,
    width: u32,
    height: u32,
) -> anyhow::Result<RgbaImage> {
    let data = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(|e| anyhow::anyhow!("get_image_data: {:?}", e))?;
    Ok(RgbaImage {
        width,
        height,
        pixels: data.data().0,
    })
}

/// Pixels of a decoded image, downscaled so neither side exceeds `max_side`.
pub fn rasterize_image(img: &web::HtmlImageElement, max_side: u32) -> anyhow::Result<RgbaImage> {
    let (nw, nh) = (img.natural_width(), img.natural_height());
    if nw == 0 || nh == 0 {
        anyhow::bail!("image has no natural size");
    }
    let (w, h) = clamp_extent(nw, nh, max_side);
    if (w, h) != (nw, nh) {
        log::info!("downscaling {}x{} image to {}x{}", nw, nh, w, h);
    }
    let ctx = scratch_context(w, h)?;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(img, 0.0, 0.0, w as f64, h as f64)
        .map_err(|e| anyhow::anyhow!("draw_image: {:?}", e))?;
    read_pixels(&ctx, w, h)
}

/// Renders `text` in `font_family` on a transparent canvas sized to fit it.
pub fn rasterize_text(
    text: &str,
    font_family: &str,
    font_px: u32,
    padding_px: u32,
    color_css: &str,
) -> anyhow::Result<RgbaImage> {
    let font = format!("{}px {}", font_px, font_family);
    let measure = scratch_context(1, 1)?;
    measure.set_font(&font);
    let text_w = measure
        .measure_text(text)
        .map_err(|e| anyhow::anyhow!("measure_text: {:?}", e))?
        .width()
        .ceil() as u32;
    let w = text_w + 2 * padding_px;
    let h = font_px + 2 * padding_px;

    let ctx = scratch_context(w, h)?;
    // Resizing a canvas resets its state, so style only after sizing.
    ctx.set_font(&font);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str(color_css);
    ctx.fill_text(text, w as f64 / 2.0, h as f64 / 2.0)
        .map_err(|e| anyhow::anyhow!("fill_text: {:?}", e))?;
    read_pixels(&ctx, w, h)
}
