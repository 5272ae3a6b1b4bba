use std::borrow::Cow;

use crate::foundation::core::Canvas;
use crate::foundation::error::TitleResult;
use crate::layout::anchor::{DefaultPositioner, Positioner, ResolvedAnchor, TextAlign};
use crate::layout::measure::TextMeasure;
use crate::model::frame::FrameContext;
use crate::model::title::{FontSpec, TitleRequest, TitleStyle};
use crate::motion::zoom::{DefaultZoom, ZoomCurve, ZoomDirection};
use crate::render::compositor::{ComposeParams, compose};
use crate::render::layer::{LayerPlan, LayerSurface};
use crate::reveal::scheduler::{Tokenizer, reveal, reveal_progress};

/// Progress at which a fade-in reaches full opacity.
pub const FADE_IN_END: f64 = 0.3;
/// Text box width as a fraction of the frame width.
pub const BOX_WIDTH_FRACTION: f64 = 0.8;

/// Opacity of a fade-in title at `progress`.
pub fn fade_in_opacity(progress: f64) -> f64 {
    (progress / FADE_IN_END).clamp(0.0, 1.0)
}

/// Per-style rendering rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StylePlan {
    /// Token granularity for reveal styles; `None` draws the whole text.
    pub tokenizer: Option<Tokenizer>,
    /// Ramp opacity in over the first part of the duration.
    pub fade_in: bool,
    /// Replace the configured zoom direction with no motion.
    pub suppress_zoom: bool,
    /// Apply the motion translation to `top` as well as `left`.
    pub translate_top: bool,
    /// Drive the reveal from elapsed time over `animationDuration` when one is set.
    pub timed_by_duration: bool,
}

const STYLE_TABLE: [(TitleStyle, StylePlan); 4] = [
    (
        TitleStyle::Static,
        StylePlan {
            tokenizer: None,
            fade_in: false,
            suppress_zoom: false,
            translate_top: true,
            timed_by_duration: false,
        },
    ),
    (
        TitleStyle::FadeIn,
        StylePlan {
            tokenizer: None,
            fade_in: true,
            suppress_zoom: false,
            translate_top: true,
            timed_by_duration: false,
        },
    ),
    (
        TitleStyle::WordByWord,
        StylePlan {
            tokenizer: Some(Tokenizer::Word),
            fade_in: false,
            suppress_zoom: true,
            translate_top: false,
            timed_by_duration: true,
        },
    ),
    (
        TitleStyle::LetterByLetter,
        StylePlan {
            tokenizer: Some(Tokenizer::Letter),
            fade_in: false,
            suppress_zoom: true,
            translate_top: false,
            timed_by_duration: true,
        },
    ),
];

impl TitleStyle {
    /// Rendering rules for this style.
    pub fn plan(self) -> StylePlan {
        STYLE_TABLE
            .iter()
            .find(|(style, _)| *style == self)
            .map(|(_, plan)| *plan)
            .unwrap_or(STYLE_TABLE[0].1)
    }
}

/// Renders one title element frame by frame.
///
/// Everything that depends only on the request and frame size is resolved once at construction;
/// [`TitleRenderer::render_frame`] keeps no state between calls and can be shared across threads.
#[derive(Clone, Debug)]
pub struct TitleRenderer<Z = DefaultZoom> {
    request: TitleRequest,
    canvas: Canvas,
    font: FontSpec,
    anchor: ResolvedAnchor,
    box_width: f64,
    plan: StylePlan,
    zoom: Z,
}

impl TitleRenderer<DefaultZoom> {
    /// Set up a title with the default positioner and zoom curves.
    pub fn new(canvas: Canvas, request: TitleRequest) -> TitleResult<Self> {
        Self::with_collaborators(canvas, request, &DefaultPositioner, DefaultZoom)
    }
}

impl<Z: ZoomCurve> TitleRenderer<Z> {
    /// Set up a title with custom position and motion collaborators.
    #[tracing::instrument(skip(request, positioner, zoom), fields(style = ?request.style))]
    pub fn with_collaborators(
        canvas: Canvas,
        request: TitleRequest,
        positioner: &impl Positioner,
        zoom: Z,
    ) -> TitleResult<Self> {
        request.validate()?;

        let font = request.font(canvas);
        let anchor = positioner.resolve_position(&request.position, canvas);
        let plan = request.style.plan();
        tracing::debug!(
            font_size = font.size,
            left = anchor.left,
            top = anchor.top,
            "title set up"
        );

        Ok(Self {
            box_width: canvas.width_f64() * BOX_WIDTH_FRACTION,
            request,
            canvas,
            font,
            anchor,
            plan,
            zoom,
        })
    }

    /// The request this renderer was built from.
    pub fn request(&self) -> &TitleRequest {
        &self.request
    }

    /// Frame dimensions.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Resolved font.
    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    /// Anchor before any motion is applied.
    pub fn anchor(&self) -> ResolvedAnchor {
        self.anchor
    }

    /// Alignment derived from the anchor's horizontal origin.
    pub fn text_align(&self) -> TextAlign {
        self.anchor.text_align()
    }

    /// Wrapping width of the text box.
    pub fn box_width(&self) -> f64 {
        self.box_width
    }

    /// Rendering rules selected by the request's style.
    pub fn style_plan(&self) -> StylePlan {
        self.plan
    }

    /// Draw the title at `frame` onto `surface`, returning how many layers were added.
    ///
    /// Token styles add nothing while the revealed text is blank.
    pub fn render_frame<M, S>(
        &self,
        frame: FrameContext,
        measure: &mut M,
        surface: &mut S,
    ) -> TitleResult<usize>
    where
        M: TextMeasure + ?Sized,
        S: LayerSurface + ?Sized,
    {
        let progress = frame.progress;
        let req = &self.request;

        let direction = if self.plan.suppress_zoom {
            ZoomDirection::None
        } else {
            req.zoom_direction
        };
        let scale = self.zoom.scale(progress, direction, req.zoom_amount);
        let translation = self.zoom.translation(progress, direction, req.zoom_amount);

        let mut anchor = self.anchor;
        anchor.left += translation;
        if self.plan.translate_top {
            anchor.top += translation;
        }

        let (text, opacity): (Cow<'_, str>, f64) = match self.plan.tokenizer {
            None => {
                let opacity = if self.plan.fade_in {
                    fade_in_opacity(progress)
                } else {
                    1.0
                };
                (Cow::Borrowed(req.text.as_str()), opacity)
            }
            Some(tokenizer) => {
                let reveal_at = if self.plan.timed_by_duration {
                    reveal_progress(progress, frame.elapsed(), req.animation_duration)
                } else {
                    progress
                };
                let tokens = tokenizer.tokenize(&req.text);
                let revealed = reveal(&tokens, tokenizer.separator(), tokenizer.delay(), reveal_at);
                if revealed.is_blank() {
                    tracing::debug!(progress, reveal_at, "blank reveal, nothing to draw");
                    return Ok(0);
                }
                tracing::trace!(
                    reveal_at,
                    visible_tokens = revealed.visible_tokens,
                    total_tokens = tokens.len(),
                    "token reveal"
                );
                (Cow::Owned(revealed.visible_text), revealed.terminal_opacity)
            }
        };

        let layers = compose(
            &ComposeParams {
                text: &text,
                text_color: req.text_color,
                font: &self.font,
                align: self.text_align(),
                box_width: self.box_width,
                anchor,
                scale,
                opacity,
                outline: &req.outline,
            },
            measure,
        )?;

        let count = layers.len();
        tracing::trace!(progress, opacity, scale, layers = count, "title frame");
        for layer in layers {
            surface.add_layer(layer)?;
        }
        Ok(count)
    }

    /// Render `frame` into a fresh layer list.
    pub fn plan_frame<M>(&self, frame: FrameContext, measure: &mut M) -> TitleResult<LayerPlan>
    where
        M: TextMeasure + ?Sized,
    {
        let mut plan = LayerPlan::new();
        self.render_frame(frame, measure, &mut plan)?;
        Ok(plan)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/title.rs"]
mod tests;
