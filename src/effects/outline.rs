use crate::foundation::color::Color;
use crate::model::title::OutlineStyle;

/// Maximum stroke kept under a drop shadow.
const SHADOW_MAX_STROKE: f64 = 2.0;
/// Maximum stroke kept under a glow.
const GLOW_MAX_STROKE: f64 = 1.5;
const SHADOW_BLUR_PER_WIDTH: f64 = 1.5;
const GLOW_BLUR_PER_WIDTH: f64 = 3.0;

/// Drop shadow parameters attached to a layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    /// Shadow color.
    pub color: Color,
    /// Blur radius in pixels.
    pub blur: f64,
    /// Horizontal offset in pixels.
    pub offset_x: f64,
    /// Vertical offset in pixels.
    pub offset_y: f64,
}

/// Concrete stroke and shadow parameters for an outline style.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectProfile {
    /// Stroke width in pixels, `>= 0`.
    pub stroke_width: f64,
    /// Optional shadow.
    pub shadow: Option<Shadow>,
}

/// Resolve an outline style to stroke/shadow parameters.
///
/// A zero width disables both stroke and shadow whatever the style.
pub fn resolve_effect(
    style: OutlineStyle,
    width: f64,
    outline_color: Option<Color>,
    text_color: Option<Color>,
) -> EffectProfile {
    if width == 0.0 {
        return EffectProfile::default();
    }

    match style {
        OutlineStyle::Outline => EffectProfile {
            stroke_width: width,
            shadow: None,
        },
        OutlineStyle::Shadow => EffectProfile {
            stroke_width: width.min(SHADOW_MAX_STROKE),
            shadow: Some(Shadow {
                color: outline_color.unwrap_or(Color::BLACK),
                blur: width * SHADOW_BLUR_PER_WIDTH,
                offset_x: width,
                offset_y: width,
            }),
        },
        OutlineStyle::Glow => EffectProfile {
            stroke_width: width.min(GLOW_MAX_STROKE),
            shadow: Some(Shadow {
                color: outline_color.or(text_color).unwrap_or(Color::WHITE),
                blur: width * GLOW_BLUR_PER_WIDTH,
                offset_x: 0.0,
                offset_y: 0.0,
            }),
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/outline.rs"]
mod tests;
