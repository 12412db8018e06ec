use crate::constants::{BACKGROUND_URL, FONT_FAMILY, FONT_URL};
use crate::core::LABEL_TEXT;
use web_sys as web;

/// Asset locations and label text for one scene instance.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub background_url: String,
    pub font_url: String,
    pub font_family: String,
    pub label_text: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            background_url: BACKGROUND_URL.to_string(),
            font_url: FONT_URL.to_string(),
            font_family: FONT_FAMILY.to_string(),
            label_text: LABEL_TEXT.to_string(),
        }
    }
}

impl SceneConfig {
    /// Defaults, overridden by non-empty `data-background`, `data-font`,
    /// `data-font-family` and `data-label` attributes on the canvas.
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> Self {
        let attr = |name: &str| canvas.get_attribute(name).filter(|v| !v.trim().is_empty());
        let mut cfg = Self::default();
        if let Some(v) = attr("data-background") {
            cfg.background_url = v;
        }
        if let Some(v) = attr("data-font") {
            cfg.font_url = v;
        }
        if let Some(v) = attr("data-font-family") {
            cfg.font_family = v;
        }
        if let Some(v) = attr("data-label") {
            cfg.label_text = v;
        }
        cfg
    }
}
