use smallvec::SmallVec;

use crate::effects::outline::Shadow;
use crate::foundation::color::Color;
use crate::foundation::error::TitleResult;
use crate::layout::anchor::{OriginX, OriginY, TextAlign};
use crate::model::title::FontSpec;

/// Layers emitted for one frame, bottom first. A title never emits more than two.
pub type LayerPlan = SmallVec<[TextLayer; 2]>;

/// Corner style where stroke segments meet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    /// Sharp corners.
    #[default]
    Miter,
    /// Rounded corners.
    Round,
    /// Cut-off corners.
    Bevel,
}

/// Stroke applied around glyph outlines.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f64,
    /// Join style.
    pub join: LineJoin,
}

/// Placement of a layer on the output frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerTransform {
    /// Horizontal anchor in pixels.
    pub left: f64,
    /// Vertical anchor in pixels.
    pub top: f64,
    /// Horizontal origin `left` refers to.
    pub origin_x: OriginX,
    /// Vertical origin `top` refers to.
    pub origin_y: OriginY,
    /// Horizontal scale around the origin.
    pub scale_x: f64,
    /// Vertical scale around the origin.
    pub scale_y: f64,
    /// Layer opacity in `[0, 1]`.
    pub opacity: f64,
}

/// One positioned, styled text draw instruction.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLayer {
    /// Text content.
    pub text: String,
    /// Glyph fill color.
    pub fill: Color,
    /// Font family and size.
    pub font: FontSpec,
    /// Line alignment inside the text box.
    pub align: TextAlign,
    /// Wrapping width of the text box in pixels.
    pub width: f64,
    /// Optional stroke.
    pub stroke: Option<Stroke>,
    /// Optional shadow.
    pub shadow: Option<Shadow>,
    /// Placement on the frame.
    pub transform: LayerTransform,
}

/// Rendering surface that receives layers in draw order.
///
/// Later layers paint over earlier ones.
pub trait LayerSurface {
    /// Append `layer` on top of everything added so far.
    fn add_layer(&mut self, layer: TextLayer) -> TitleResult<()>;
}

impl<T: LayerSurface + ?Sized> LayerSurface for &mut T {
    fn add_layer(&mut self, layer: TextLayer) -> TitleResult<()> {
        (**self).add_layer(layer)
    }
}

/// In-memory surface for tests, batch planning and debugging.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayerList {
    layers: Vec<TextLayer>,
}

impl LayerList {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the layers in draw order.
    pub fn layers(&self) -> &[TextLayer] {
        &self.layers
    }

    /// Take the layers, leaving the surface empty.
    pub fn take(&mut self) -> Vec<TextLayer> {
        std::mem::take(&mut self.layers)
    }

    /// Number of layers added.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Return `true` when no layer was added.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl LayerSurface for LayerList {
    fn add_layer(&mut self, layer: TextLayer) -> TitleResult<()> {
        self.layers.push(layer);
        Ok(())
    }
}

impl LayerSurface for Vec<TextLayer> {
    fn add_layer(&mut self, layer: TextLayer) -> TitleResult<()> {
        self.push(layer);
        Ok(())
    }
}

impl LayerSurface for LayerPlan {
    fn add_layer(&mut self, layer: TextLayer) -> TitleResult<()> {
        self.push(layer);
        Ok(())
    }
}
