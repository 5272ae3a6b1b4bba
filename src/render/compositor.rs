use crate::effects::outline::resolve_effect;
use crate::foundation::color::Color;
use crate::foundation::error::TitleResult;
use crate::layout::anchor::{OriginY, ResolvedAnchor, TextAlign};
use crate::layout::measure::TextMeasure;
use crate::model::title::{FontSpec, OutlineSpec};
use crate::render::layer::{LayerPlan, LayerTransform, LineJoin, Stroke, TextLayer};

/// Inputs for composing one frame of title text.
#[derive(Clone, Copy, Debug)]
pub struct ComposeParams<'a> {
    /// Text to draw.
    pub text: &'a str,
    /// Fill color.
    pub text_color: Color,
    /// Font family and size.
    pub font: &'a FontSpec,
    /// Line alignment.
    pub align: TextAlign,
    /// Wrapping width in pixels.
    pub box_width: f64,
    /// Anchor with any translation already applied.
    pub anchor: ResolvedAnchor,
    /// Uniform scale.
    pub scale: f64,
    /// Opacity shared by every emitted layer.
    pub opacity: f64,
    /// Outline decoration.
    pub outline: &'a OutlineSpec,
}

/// Vertical center of a block of `height` pixels placed at `anchor`.
///
/// Computed from the unstroked block so stroke width never moves the requested edge.
pub fn center_y(anchor: &ResolvedAnchor, height: f64) -> f64 {
    match anchor.origin_y {
        OriginY::Center => anchor.top,
        OriginY::Top => anchor.top + height / 2.0,
        OriginY::Bottom => anchor.top - height / 2.0,
    }
}

/// Build the layers for one frame: an optional outline/shadow layer, then the fill layer.
///
/// Both layers are vertically centered on the same point so the decoration lines up with the
/// glyph fill, and the fill is never covered by a wide stroke.
pub fn compose<M: TextMeasure + ?Sized>(
    params: &ComposeParams<'_>,
    measure: &mut M,
) -> TitleResult<LayerPlan> {
    let outline = params.outline;
    let profile = resolve_effect(
        outline.style,
        outline.width,
        outline.color,
        Some(params.text_color),
    );

    let height = measure.measure_text_height(params.text, params.font, params.box_width)?;
    let transform = LayerTransform {
        left: params.anchor.left,
        top: center_y(&params.anchor, height),
        origin_x: params.anchor.origin_x,
        origin_y: OriginY::Center,
        scale_x: params.scale,
        scale_y: params.scale,
        opacity: params.opacity,
    };

    let mut plan = LayerPlan::new();
    if let Some(color) = outline.color
        && outline.width > 0.0
    {
        plan.push(TextLayer {
            text: params.text.to_owned(),
            fill: color,
            font: params.font.clone(),
            align: params.align,
            width: params.box_width,
            stroke: Some(Stroke {
                color,
                width: profile.stroke_width,
                join: LineJoin::Round,
            }),
            shadow: profile.shadow,
            transform,
        });
    }

    plan.push(TextLayer {
        text: params.text.to_owned(),
        fill: params.text_color,
        font: params.font.clone(),
        align: params.align,
        width: params.box_width,
        stroke: None,
        shadow: None,
        transform,
    });

    Ok(plan)
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
