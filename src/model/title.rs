use serde::{Deserialize, Deserializer};

use crate::foundation::color::Color;
use crate::foundation::core::Canvas;
use crate::foundation::error::{TitleError, TitleResult};
use crate::layout::anchor::Position;
use crate::motion::zoom::ZoomDirection;

/// Family used when a title does not name one.
pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";
/// Default zoom amount applied over a title's lifetime.
pub const DEFAULT_ZOOM_AMOUNT: f64 = 0.2;
/// Default font size as a fraction of the frame's shorter side.
pub const DEFAULT_FONT_SIZE_FRACTION: f64 = 0.1;

/// Presentation style of a title.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TitleStyle {
    /// Fully visible for the whole duration, with zoom/pan motion.
    #[default]
    #[serde(rename = "none", alias = "static")]
    Static,
    /// Opacity ramps from 0 to 1 over the first 30% of the duration.
    FadeIn,
    /// Words appear one after another.
    WordByWord,
    /// Characters appear one after another.
    LetterByLetter,
}

/// How a non-zero outline width is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutlineStyle {
    /// Plain stroke around the glyphs.
    #[default]
    Outline,
    /// Thin stroke plus an offset, blurred drop shadow.
    Shadow,
    /// Hairline stroke plus a centered, wide blur.
    Glow,
}

/// Optional outline/shadow/glow decoration.
///
/// A zero width (the default) disables decoration entirely.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OutlineSpec {
    /// Stroke or shadow color.
    #[serde(rename = "outlineColor", default)]
    pub color: Option<Color>,
    /// Nominal outline width in pixels.
    #[serde(rename = "outlineWidth", default)]
    pub width: f64,
    /// Rendering style for the outline.
    #[serde(rename = "outlineStyle", default)]
    pub style: OutlineStyle,
}

impl OutlineSpec {
    /// Return `true` when an outline layer should be drawn beneath the fill.
    pub fn draws_layer(&self) -> bool {
        self.width > 0.0 && self.color.is_some()
    }
}

/// Font family and pixel size.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FontSpec {
    /// Family name (CSS-style family list accepted).
    pub family: String,
    /// Size in pixels.
    pub size: f64,
}

/// Configuration of one animated title element.
///
/// Deserializes from the camelCase title layer JSON; every field except `text` is optional.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleRequest {
    /// Text to display.
    pub text: String,
    /// Glyph fill color.
    #[serde(default = "default_text_color")]
    pub text_color: Color,
    /// Font family name.
    #[serde(default = "default_font_family")]
    pub font_family: String,
    /// Font size in pixels; derived from the frame size when absent or zero.
    #[serde(default)]
    pub font_size: Option<f64>,
    /// Anchor position in the frame.
    #[serde(default)]
    pub position: Position,
    /// Zoom/pan motion; `null` disables it.
    #[serde(default, deserialize_with = "zoom_or_none")]
    pub zoom_direction: ZoomDirection,
    /// Strength of the zoom/pan motion.
    #[serde(default = "default_zoom_amount")]
    pub zoom_amount: f64,
    /// Presentation style; `null` or absent means static.
    #[serde(default, deserialize_with = "style_or_static")]
    pub style: TitleStyle,
    /// Seconds over which token reveals complete; frame progress is used when absent.
    #[serde(default)]
    pub animation_duration: Option<f64>,
    /// Outline decoration.
    #[serde(flatten)]
    pub outline: OutlineSpec,
}

fn default_text_color() -> Color {
    Color::WHITE
}

fn default_font_family() -> String {
    DEFAULT_FONT_FAMILY.to_owned()
}

fn default_zoom_amount() -> f64 {
    DEFAULT_ZOOM_AMOUNT
}

fn zoom_or_none<'de, D>(deserializer: D) -> Result<ZoomDirection, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ZoomDirection>::deserialize(deserializer)?.unwrap_or(ZoomDirection::None))
}

fn style_or_static<'de, D>(deserializer: D) -> Result<TitleStyle, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<TitleStyle>::deserialize(deserializer)?.unwrap_or_default())
}

impl TitleRequest {
    /// Plain title with every optional field at its default.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            text_color: default_text_color(),
            font_family: default_font_family(),
            font_size: None,
            position: Position::default(),
            zoom_direction: ZoomDirection::default(),
            zoom_amount: DEFAULT_ZOOM_AMOUNT,
            style: TitleStyle::default(),
            animation_duration: None,
            outline: OutlineSpec::default(),
        }
    }

    /// Parse a title from its JSON representation.
    pub fn from_json(json: &str) -> TitleResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject values the renderer cannot work with.
    pub fn validate(&self) -> TitleResult<()> {
        if self.font_family.trim().is_empty() {
            return Err(TitleError::validation("fontFamily must be non-empty"));
        }
        if let Some(size) = self.configured_font_size()
            && (!size.is_finite() || size.round() <= 0.0)
        {
            return Err(TitleError::validation(
                "fontSize must be finite and round to > 0",
            ));
        }
        if !self.zoom_amount.is_finite() {
            return Err(TitleError::validation("zoomAmount must be finite"));
        }
        if let Some(d) = self.animation_duration
            && !d.is_finite()
        {
            return Err(TitleError::validation("animationDuration must be finite"));
        }
        if !self.outline.width.is_finite() || self.outline.width < 0.0 {
            return Err(TitleError::validation(
                "outlineWidth must be finite and >= 0",
            ));
        }
        Ok(())
    }

    /// Configured font size, with `0` treated as unset.
    pub fn configured_font_size(&self) -> Option<f64> {
        self.font_size.filter(|&size| size != 0.0)
    }

    /// Font size in pixels: the configured size rounded, else 10% of the shorter frame side.
    pub fn resolved_font_size(&self, canvas: Canvas) -> f64 {
        match self.configured_font_size() {
            Some(size) => size.round(),
            None => (canvas.min_side() * DEFAULT_FONT_SIZE_FRACTION).round(),
        }
    }

    /// Resolved family and pixel size for the given frame size.
    pub fn font(&self, canvas: Canvas) -> FontSpec {
        FontSpec {
            family: self.font_family.clone(),
            size: self.resolved_font_size(canvas),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/title.rs"]
mod tests;
