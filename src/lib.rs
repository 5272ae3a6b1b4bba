//! Animated title layers for Wavyte compositions.
//!
//! A title element is configured once ([`TitleRequest`] + [`Canvas`]) and then asked, frame by
//! frame, which text layers to draw for a normalized progress value.
//!
//! # Frame pipeline
//!
//! 1. **Dispatch**: the title's [`TitleStyle`] selects a [`StylePlan`] (tokenizer, zoom
//!    suppression, timing source).
//! 2. **Reveal**: token styles compute the visible prefix and its opacity with [`reveal`];
//!    static and fade-in titles draw the whole text.
//! 3. **Compose**: [`compose`] resolves the outline [`EffectProfile`] and emits an optional
//!    outline/shadow layer beneath the fill layer, both centered on the same point.
//! 4. **Submit**: layers go to a [`LayerSurface`] in draw order.
//!
//! Text measurement ([`TextMeasure`]), positioning ([`Positioner`]) and motion curves
//! ([`ZoomCurve`]) are injected so the timing and effect math runs without a font backend.
//!
//! ```
//! use wavyte_title::{Canvas, FixedLineHeight, FrameContext, TitleRenderer, TitleRequest};
//!
//! let req = TitleRequest::from_json(r#"{"text": "Hello there", "style": "word-by-word"}"#)?;
//! let title = TitleRenderer::new(Canvas::new(1280, 720)?, req)?;
//! let layers = title.plan_frame(FrameContext::at(0.25), &mut FixedLineHeight::default())?;
//! assert_eq!(layers[0].text, "Hello");
//! # Ok::<(), wavyte_title::TitleError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod effects;
mod foundation;
mod layout;
mod model;
mod motion;
mod render;
mod reveal;

pub use effects::outline::{EffectProfile, Shadow, resolve_effect};
pub use foundation::color::Color;
pub use foundation::core::Canvas;
pub use foundation::error::{TitleError, TitleResult};
pub use layout::anchor::{
    DefaultPositioner, EDGE_MARGIN, OriginX, OriginY, Position, PositionKeyword, Positioner,
    ResolvedAnchor, TextAlign,
};
pub use layout::measure::{FixedLineHeight, MeasureCache, ParleyMeasure, TextMeasure};
pub use model::frame::FrameContext;
pub use model::title::{
    DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE_FRACTION, DEFAULT_ZOOM_AMOUNT, FontSpec, OutlineSpec,
    OutlineStyle, TitleRequest, TitleStyle,
};
pub use motion::zoom::{DefaultZoom, ZoomCurve, ZoomDirection};
pub use render::batch::{render_frames, render_frames_parallel};
pub use render::compositor::{ComposeParams, center_y, compose};
pub use render::layer::{
    LayerList, LayerPlan, LayerSurface, LayerTransform, LineJoin, Stroke, TextLayer,
};
pub use render::title::{
    BOX_WIDTH_FRACTION, FADE_IN_END, StylePlan, TitleRenderer, fade_in_opacity,
};
pub use reveal::scheduler::{
    FORCE_OPAQUE_PROGRESS, LETTER_DELAY, RevealFrame, Tokenizer, WORD_DELAY, reveal,
    reveal_progress,
};
