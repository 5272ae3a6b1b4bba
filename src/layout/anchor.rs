use crate::foundation::core::Canvas;

/// Fraction of the frame kept clear around edge-anchored titles.
pub const EDGE_MARGIN: f64 = 0.05;

/// Horizontal origin of a positioned layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginX {
    /// `left` is the layer's left edge.
    Left,
    /// `left` is the layer's horizontal center.
    #[default]
    Center,
    /// `left` is the layer's right edge.
    Right,
}

/// Vertical origin of a positioned layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginY {
    /// `top` is the layer's top edge.
    Top,
    /// `top` is the layer's vertical center.
    #[default]
    Center,
    /// `top` is the layer's bottom edge.
    Bottom,
}

/// Line alignment inside the text box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Flush left.
    Left,
    /// Centered.
    #[default]
    Center,
    /// Flush right.
    Right,
}

impl From<OriginX> for TextAlign {
    fn from(origin: OriginX) -> Self {
        match origin {
            OriginX::Left => Self::Left,
            OriginX::Right => Self::Right,
            OriginX::Center => Self::Center,
        }
    }
}

/// Pixel anchor a title is positioned around.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAnchor {
    /// Horizontal anchor coordinate in pixels.
    pub left: f64,
    /// Vertical anchor coordinate in pixels.
    pub top: f64,
    /// Which horizontal edge `left` refers to.
    pub origin_x: OriginX,
    /// Which vertical edge `top` refers to.
    pub origin_y: OriginY,
}

impl ResolvedAnchor {
    /// Alignment implied by the horizontal origin.
    pub fn text_align(&self) -> TextAlign {
        self.origin_x.into()
    }
}

/// Named anchor positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositionKeyword {
    /// Top edge, horizontally centered.
    Top,
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Frame center.
    #[default]
    Center,
    /// Left edge, vertically centered.
    CenterLeft,
    /// Right edge, vertically centered.
    CenterRight,
    /// Bottom edge, horizontally centered.
    Bottom,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}

/// Where a title sits in the frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Position {
    /// One of the named anchor positions.
    Keyword(PositionKeyword),
    /// Frame-relative coordinates (`0..1`) with optional explicit origins.
    #[serde(rename_all = "camelCase")]
    Custom {
        /// Horizontal fraction of the frame width.
        #[serde(default)]
        x: Option<f64>,
        /// Vertical fraction of the frame height.
        #[serde(default)]
        y: Option<f64>,
        /// Horizontal origin; `left` when `x` is set and this is absent.
        #[serde(default)]
        origin_x: Option<OriginX>,
        /// Vertical origin; `top` when `y` is set and this is absent.
        #[serde(default)]
        origin_y: Option<OriginY>,
    },
}

impl Default for Position {
    fn default() -> Self {
        Self::Keyword(PositionKeyword::Center)
    }
}

/// Resolves a logical [`Position`] to a pixel anchor for a given frame size.
pub trait Positioner {
    /// Compute the anchor for `position` inside `canvas`.
    fn resolve_position(&self, position: &Position, canvas: Canvas) -> ResolvedAnchor;
}

/// Keyword positions with a 5% edge margin; custom positions scale by frame size.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultPositioner;

impl Positioner for DefaultPositioner {
    fn resolve_position(&self, position: &Position, canvas: Canvas) -> ResolvedAnchor {
        let width = canvas.width_f64();
        let height = canvas.height_f64();

        let mut anchor = ResolvedAnchor {
            left: width / 2.0,
            top: height / 2.0,
            origin_x: OriginX::Center,
            origin_y: OriginY::Center,
        };

        match *position {
            Position::Keyword(kw) => {
                use PositionKeyword as K;
                if matches!(kw, K::Top | K::TopLeft | K::TopRight) {
                    anchor.origin_y = OriginY::Top;
                    anchor.top = height * EDGE_MARGIN;
                }
                if matches!(kw, K::Bottom | K::BottomLeft | K::BottomRight) {
                    anchor.origin_y = OriginY::Bottom;
                    anchor.top = height * (1.0 - EDGE_MARGIN);
                }
                if matches!(kw, K::TopLeft | K::CenterLeft | K::BottomLeft) {
                    anchor.origin_x = OriginX::Left;
                    anchor.left = width * EDGE_MARGIN;
                }
                if matches!(kw, K::TopRight | K::CenterRight | K::BottomRight) {
                    anchor.origin_x = OriginX::Right;
                    anchor.left = width * (1.0 - EDGE_MARGIN);
                }
            }
            Position::Custom {
                x,
                y,
                origin_x,
                origin_y,
            } => {
                if let Some(x) = x {
                    anchor.origin_x = origin_x.unwrap_or(OriginX::Left);
                    anchor.left = width * x;
                }
                if let Some(y) = y {
                    anchor.origin_y = origin_y.unwrap_or(OriginY::Top);
                    anchor.top = height * y;
                }
            }
        }

        anchor
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/anchor.rs"]
mod tests;
