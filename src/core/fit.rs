use glam::Vec2;

/// Errors for fit inputs that would otherwise divide by zero or produce NaN.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum FitError {
    #[error("image size must be positive and finite, got {width}x{height}")]
    InvalidImage { width: f32, height: f32 },
    #[error("viewport size must be positive and finite, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
}

#[inline]
fn is_positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

/// Size of the drawable viewport in CSS pixels. Both sides are positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    width: f32,
    height: f32,
}

impl ViewportSize {
    /// Returns `None` for a zero, negative or non-finite dimension so callers
    /// can skip the recompute and keep the previous fit.
    pub fn new(width: f32, height: f32) -> Option<Self> {
        (is_positive(width) && is_positive(height)).then_some(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// Natural size of a decoded image. Unknown until the image has loaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageSize {
    width: f32,
    height: f32,
}

impl ImageSize {
    pub fn new(width: f32, height: f32) -> Option<Self> {
        (is_positive(width) && is_positive(height)).then_some(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// Texture-space offset and repeat for a centered "cover" fit.
///
/// `repeat` components lie in (0, 1] with at least one exactly 1, `offset`
/// components in [0, 0.5). Sampling `uv * repeat + offset` fills the viewport
/// without distortion, cropping the overflowing axis evenly on both sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundFit {
    pub offset: Vec2,
    pub repeat: Vec2,
}

impl Default for BackgroundFit {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl BackgroundFit {
    pub const IDENTITY: Self = Self {
        offset: Vec2::ZERO,
        repeat: Vec2::ONE,
    };

    pub fn cover(image: ImageSize, viewport: ViewportSize) -> Self {
        let factor = image.aspect() / viewport.aspect();
        if factor > 1.0 {
            // Image relatively wider: crop left and right.
            let repeat_x = 1.0 / factor;
            Self {
                offset: Vec2::new((1.0 - repeat_x) / 2.0, 0.0),
                repeat: Vec2::new(repeat_x, 1.0),
            }
        } else {
            Self {
                offset: Vec2::new(0.0, (1.0 - factor) / 2.0),
                repeat: Vec2::new(1.0, factor),
            }
        }
    }
}

/// Cover fit from raw dimensions, rejecting anything that is not a positive
/// finite size.
pub fn compute_fit(
    image_width: f32,
    image_height: f32,
    viewport_width: f32,
    viewport_height: f32,
) -> Result<BackgroundFit, FitError> {
    let image = ImageSize::new(image_width, image_height).ok_or(FitError::InvalidImage {
        width: image_width,
        height: image_height,
    })?;
    let viewport =
        ViewportSize::new(viewport_width, viewport_height).ok_or(FitError::InvalidViewport {
            width: viewport_width,
            height: viewport_height,
        })?;
    Ok(BackgroundFit::cover(image, viewport))
}

/// Window width minus the vertical scrollbar, if one takes up space.
///
/// `client_width` is the layout width of the document element, which excludes
/// the scrollbar; without this correction the canvas would overflow by the
/// scrollbar width and keep toggling it on every resize.
#[inline]
pub fn scrollbar_adjusted_width(inner_width: f32, client_width: f32) -> f32 {
    let scrollbar = inner_width - client_width;
    if client_width > 0.0 && scrollbar > 0.0 {
        inner_width - scrollbar
    } else {
        inner_width
    }
}

/// Fit to use after a recompute trigger. Without a background there is
/// nothing to fit and the previous value stands; without a usable viewport
/// the previous fit is kept as well.
pub fn refit(
    prev: BackgroundFit,
    image: Option<ImageSize>,
    viewport: Option<ViewportSize>,
) -> BackgroundFit {
    match (image, viewport) {
        (Some(image), Some(viewport)) => BackgroundFit::cover(image, viewport),
        _ => prev,
    }
}

/// Scales `width`x`height` down, keeping the aspect ratio, so neither side
/// exceeds `max_side`. Sizes already within bounds are returned unchanged.
pub fn clamp_extent(width: u32, height: u32, max_side: u32) -> (u32, u32) {
    let max_side = max_side.max(1);
    let longest = width.max(height);
    if longest <= max_side {
        return (width, height);
    }
    let scale = max_side as f64 / longest as f64;
    let side = |v: u32| ((v as f64 * scale).round() as u32).clamp(1, max_side);
    (side(width), side(height))
}
