use crate::foundation::error::{TitleError, TitleResult};

/// Output frame dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create validated frame dimensions.
    pub fn new(width: u32, height: u32) -> TitleResult<Self> {
        if width == 0 || height == 0 {
            return Err(TitleError::validation("canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Width as `f64`.
    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as `f64`.
    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }

    /// The shorter side, used for size-relative defaults.
    pub fn min_side(self) -> f64 {
        f64::from(self.width.min(self.height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
