/// Direction of the zoom/pan motion applied over a title's lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomDirection {
    /// Grow from `1` to `1 + amount`.
    #[default]
    In,
    /// Shrink from `1 + amount` to `1`.
    Out,
    /// Pan towards the left at a fixed enlarged scale.
    Left,
    /// Pan towards the right at a fixed enlarged scale.
    Right,
    /// No motion.
    None,
}

/// Scale and translation curves driven by normalized progress.
pub trait ZoomCurve {
    /// Uniform scale factor at `progress`.
    fn scale(&self, progress: f64, direction: ZoomDirection, amount: f64) -> f64;
    /// Horizontal pixel offset at `progress`.
    fn translation(&self, progress: f64, direction: ZoomDirection, amount: f64) -> f64;
}

/// Linear zoom in/out and linear left/right pans.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultZoom;

/// Scale held while panning so frame edges never show.
const PAN_BASE_SCALE: f64 = 1.3;
/// Pixels of pan travel per unit of zoom amount.
const PAN_RANGE_PER_AMOUNT: f64 = 1000.0;

impl ZoomCurve for DefaultZoom {
    fn scale(&self, progress: f64, direction: ZoomDirection, amount: f64) -> f64 {
        match direction {
            ZoomDirection::Left | ZoomDirection::Right => PAN_BASE_SCALE + amount,
            ZoomDirection::In => 1.0 + amount * progress,
            ZoomDirection::Out => 1.0 + amount * (1.0 - progress),
            ZoomDirection::None => 1.0,
        }
    }

    fn translation(&self, progress: f64, direction: ZoomDirection, amount: f64) -> f64 {
        let range = amount * PAN_RANGE_PER_AMOUNT;
        match direction {
            ZoomDirection::Right => progress * range - range / 2.0,
            ZoomDirection::Left => -(progress * range - range / 2.0),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/zoom.rs"]
mod tests;
