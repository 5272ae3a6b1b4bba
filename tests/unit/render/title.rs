use super::*;
use crate::foundation::color::Color;
use crate::layout::anchor::{OriginY, Position, PositionKeyword};
use crate::model::title::{OutlineSpec, OutlineStyle};
use crate::render::layer::LayerList;

struct FixedHeight(f64);

impl TextMeasure for FixedHeight {
    fn measure_text_height(&mut self, _: &str, _: &FontSpec, _: f64) -> TitleResult<f64> {
        Ok(self.0)
    }
}

/// Scales by 2 and shifts by 7px for every direction, including `None`.
#[derive(Debug)]
struct LoudZoom;

impl ZoomCurve for LoudZoom {
    fn scale(&self, _: f64, direction: ZoomDirection, _: f64) -> f64 {
        if direction == ZoomDirection::None {
            1.0
        } else {
            2.0
        }
    }

    fn translation(&self, _: f64, _: ZoomDirection, _: f64) -> f64 {
        7.0
    }
}

fn canvas() -> Canvas {
    Canvas::new(1000, 500).unwrap()
}

fn renderer(request: TitleRequest) -> TitleRenderer {
    TitleRenderer::new(canvas(), request).unwrap()
}

fn styled(text: &str, style: TitleStyle) -> TitleRequest {
    TitleRequest {
        style,
        ..TitleRequest::new(text)
    }
}

#[test]
fn style_table_covers_every_style() {
    let s = TitleStyle::Static.plan();
    assert_eq!(s.tokenizer, None);
    assert!(!s.fade_in && !s.suppress_zoom && s.translate_top);

    let f = TitleStyle::FadeIn.plan();
    assert!(f.fade_in && !f.suppress_zoom && f.translate_top);

    let w = TitleStyle::WordByWord.plan();
    assert_eq!(w.tokenizer, Some(Tokenizer::Word));
    assert!(w.suppress_zoom && !w.translate_top && w.timed_by_duration);

    let l = TitleStyle::LetterByLetter.plan();
    assert_eq!(l.tokenizer, Some(Tokenizer::Letter));
    assert!(l.suppress_zoom && !l.translate_top && l.timed_by_duration);
}

#[test]
fn fade_in_reaches_full_opacity_at_thirty_percent() {
    assert_eq!(fade_in_opacity(0.0), 0.0);
    assert_eq!(fade_in_opacity(0.15), 0.5);
    assert_eq!(fade_in_opacity(0.3), 1.0);
    assert_eq!(fade_in_opacity(0.9), 1.0);
    assert_eq!(fade_in_opacity(-0.2), 0.0);

    let mut last = 0.0;
    for i in 0..=30 {
        let o = fade_in_opacity(f64::from(i) / 100.0);
        assert!(o >= last);
        last = o;
    }
}

#[test]
fn setup_resolves_font_anchor_and_box() {
    let r = renderer(TitleRequest {
        position: Position::Keyword(PositionKeyword::TopRight),
        ..TitleRequest::new("Hi")
    });
    assert_eq!(r.font().size, 50.0);
    assert_eq!(r.box_width(), 800.0);
    assert_eq!(r.text_align(), TextAlign::Right);
    assert_eq!(r.anchor().origin_y, OriginY::Top);
}

#[test]
fn setup_rejects_invalid_request() {
    let mut req = TitleRequest::new("Hi");
    req.outline.width = -2.0;
    assert!(TitleRenderer::new(canvas(), req).is_err());
}

#[test]
fn static_title_zooms_and_stays_opaque() {
    let r = renderer(TitleRequest::new("Hello world"));
    let plan = r
        .plan_frame(FrameContext::at(0.5), &mut FixedHeight(40.0))
        .unwrap();
    assert_eq!(plan.len(), 1);
    let t = plan[0].transform;
    assert_eq!(plan[0].text, "Hello world");
    assert_eq!(t.opacity, 1.0);
    assert!((t.scale_x - 1.1).abs() < 1e-12);
    assert_eq!(t.scale_x, t.scale_y);
    assert_eq!((t.left, t.top), (500.0, 250.0));
}

#[test]
fn static_and_fade_in_translate_both_axes() {
    for style in [TitleStyle::Static, TitleStyle::FadeIn] {
        let r = TitleRenderer::with_collaborators(
            canvas(),
            styled("Hello", style),
            &DefaultPositioner,
            LoudZoom,
        )
        .unwrap();
        let plan = r
            .plan_frame(FrameContext::at(0.6), &mut FixedHeight(40.0))
            .unwrap();
        let t = plan[0].transform;
        assert_eq!((t.left, t.top), (507.0, 257.0));
        assert_eq!(t.scale_x, 2.0);
    }
}

#[test]
fn token_styles_suppress_zoom_and_translate_left_only() {
    for style in [TitleStyle::WordByWord, TitleStyle::LetterByLetter] {
        let r = TitleRenderer::with_collaborators(
            canvas(),
            styled("Hello there", style),
            &DefaultPositioner,
            LoudZoom,
        )
        .unwrap();
        let plan = r
            .plan_frame(FrameContext::at(0.9), &mut FixedHeight(40.0))
            .unwrap();
        let t = plan[0].transform;
        assert_eq!(t.scale_x, 1.0);
        assert_eq!((t.left, t.top), (507.0, 250.0));
    }
}

#[test]
fn default_zoom_is_inert_for_token_styles() {
    let r = renderer(TitleRequest {
        zoom_direction: ZoomDirection::Right,
        ..styled("Hello there", TitleStyle::WordByWord)
    });
    let plan = r
        .plan_frame(FrameContext::at(1.0), &mut FixedHeight(40.0))
        .unwrap();
    let t = plan[0].transform;
    assert_eq!(t.scale_x, 1.0);
    assert_eq!((t.left, t.top), (500.0, 250.0));
}

#[test]
fn fade_in_opacity_is_applied() {
    let r = renderer(styled("Fade", TitleStyle::FadeIn));
    let plan = r
        .plan_frame(FrameContext::at(0.15), &mut FixedHeight(40.0))
        .unwrap();
    assert_eq!(plan[0].transform.opacity, 0.5);
}

#[test]
fn word_by_word_reveals_prefix() {
    let r = renderer(styled("one two three four", TitleStyle::WordByWord));
    let plan = r
        .plan_frame(FrameContext::at(0.3), &mut FixedHeight(40.0))
        .unwrap();
    assert_eq!(plan[0].text, "one two");
    assert_eq!(plan[0].transform.opacity, 1.0);
}

#[test]
fn letter_by_letter_reveals_characters() {
    let r = renderer(styled("abcdefghij", TitleStyle::LetterByLetter));
    let plan = r
        .plan_frame(FrameContext::at(0.35), &mut FixedHeight(40.0))
        .unwrap();
    assert_eq!(plan[0].text, "abcd");
}

#[test]
fn blank_reveal_emits_nothing() {
    let r = renderer(styled("   spaced", TitleStyle::LetterByLetter));
    let mut surface = LayerList::new();
    let n = r
        .render_frame(FrameContext::at(0.0), &mut FixedHeight(40.0), &mut surface)
        .unwrap();
    assert_eq!(n, 0);
    assert!(surface.is_empty());

    let r = renderer(styled("", TitleStyle::WordByWord));
    let plan = r
        .plan_frame(FrameContext::at(0.5), &mut FixedHeight(40.0))
        .unwrap();
    assert!(plan.is_empty());
}

#[test]
fn animation_duration_drives_reveal_from_elapsed_time() {
    let timed = renderer(TitleRequest {
        animation_duration: Some(4.0),
        ..styled("a b c d e f g h", TitleStyle::WordByWord)
    });
    let untimed = renderer(styled("a b c d e f g h", TitleStyle::WordByWord));

    for (elapsed, progress) in [(1.0, 0.25), (2.2, 0.55), (6.0, 1.0)] {
        let a = timed
            .plan_frame(
                FrameContext::with_offset(0.99, elapsed),
                &mut FixedHeight(40.0),
            )
            .unwrap();
        let b = untimed
            .plan_frame(FrameContext::at(progress), &mut FixedHeight(40.0))
            .unwrap();
        assert_eq!(a[0].text, b[0].text, "elapsed={elapsed}");
        assert_eq!(a[0].transform.opacity, b[0].transform.opacity);
    }
}

#[test]
fn missing_offset_falls_back_to_progress_as_elapsed() {
    let timed = renderer(TitleRequest {
        animation_duration: Some(2.0),
        ..styled("a b c d", TitleStyle::WordByWord)
    });
    // Elapsed falls back to progress 0.8, normalized to 0.4.
    let plan = timed
        .plan_frame(FrameContext::at(0.8), &mut FixedHeight(40.0))
        .unwrap();
    assert_eq!(plan[0].text, "a b");
}

#[test]
fn non_positive_duration_uses_frame_progress() {
    for duration in [Some(0.0), Some(-1.0), None] {
        let r = renderer(TitleRequest {
            animation_duration: duration,
            ..styled("a b c d", TitleStyle::WordByWord)
        });
        let plan = r
            .plan_frame(FrameContext::with_offset(0.6, 100.0), &mut FixedHeight(40.0))
            .unwrap();
        assert_eq!(plan[0].text, "a b c");
    }
}

#[test]
fn outlined_titles_emit_two_layers_for_every_style() {
    for style in [
        TitleStyle::Static,
        TitleStyle::FadeIn,
        TitleStyle::WordByWord,
        TitleStyle::LetterByLetter,
    ] {
        let mut req = styled("Outlined title", style);
        req.outline = OutlineSpec {
            color: Some(Color::BLACK),
            width: 3.0,
            style: OutlineStyle::Outline,
        };
        let r = renderer(req);
        let mut surface = LayerList::new();
        let n = r
            .render_frame(FrameContext::at(0.8), &mut FixedHeight(40.0), &mut surface)
            .unwrap();
        assert_eq!(n, 2, "{style:?}");
        let layers = surface.layers();
        assert!(layers[0].stroke.is_some());
        assert!(layers[1].stroke.is_none());
        assert_eq!(layers[0].transform, layers[1].transform);
    }
}

#[test]
fn bottom_anchor_centers_on_measured_block() {
    let r = renderer(TitleRequest {
        position: Position::Keyword(PositionKeyword::Bottom),
        zoom_direction: ZoomDirection::None,
        ..TitleRequest::new("Lower third")
    });
    let plan = r
        .plan_frame(FrameContext::at(0.5), &mut FixedHeight(60.0))
        .unwrap();
    let t = plan[0].transform;
    assert_eq!(t.origin_y, OriginY::Center);
    assert_eq!(t.top, 475.0 - 30.0);
}
