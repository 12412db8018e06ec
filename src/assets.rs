use crate::core::ImageSize;
use crate::dom::{self, RgbaImage};
use js_sys::Promise;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub struct LoadedBackground {
    pub size: ImageSize,
    pub image: RgbaImage,
}

/// Fetches and decodes the background image. The natural size is only known
/// once `decode()` resolves; the pixels are downscaled to `max_side` if needed
/// while the fit keeps using the natural aspect ratio.
pub async fn load_background(url: &str, max_side: u32) -> anyhow::Result<LoadedBackground> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_src(url);
    let decoding: Promise = img.decode();
    JsFuture::from(decoding)
        .await
        .map_err(|e| anyhow::anyhow!("decode {}: {:?}", url, e))?;
    let size = ImageSize::new(img.natural_width() as f32, img.natural_height() as f32)
        .ok_or_else(|| anyhow::anyhow!("{} decoded to an empty image", url))?;
    let image = dom::rasterize_image(&img, max_side)?;
    Ok(LoadedBackground { size, image })
}

/// Loads a font face and registers it with the document so canvas text can
/// use `family`.
pub async fn load_font(family: &str, url: &str) -> anyhow::Result<()> {
    let face = web::FontFace::new_with_str(family, &format!("url({})", url))
        .map_err(|e| anyhow::anyhow!("FontFace {}: {:?}", url, e))?;
    let loading: Promise = face
        .load()
        .map_err(|e| anyhow::anyhow!("load {}: {:?}", url, e))?;
    JsFuture::from(loading)
        .await
        .map_err(|e| anyhow::anyhow!("load {}: {:?}", url, e))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    document
        .fonts()
        .add(&face)
        .map_err(|e| anyhow::anyhow!("register font: {:?}", e))?;
    Ok(())
}

/// Loads the font, then rasterizes `text` with it in white; the renderer
/// tints it.
pub async fn load_label(
    family: &str,
    url: &str,
    text: &str,
    font_px: u32,
    padding_px: u32,
) -> anyhow::Result<RgbaImage> {
    load_font(family, url).await?;
    dom::rasterize_text(text, family, font_px, padding_px, "#ffffff")
}
