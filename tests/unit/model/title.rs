use super::*;
use crate::layout::anchor::PositionKeyword;
use serde_json::json;

#[test]
fn minimal_json_fills_defaults() {
    let t: TitleRequest = serde_json::from_value(json!({"text": "Hello"})).unwrap();
    assert_eq!(t, TitleRequest::new("Hello"));
    assert_eq!(t.text_color, Color::WHITE);
    assert_eq!(t.font_family, "sans-serif");
    assert_eq!(t.zoom_direction, ZoomDirection::In);
    assert_eq!(t.zoom_amount, 0.2);
    assert_eq!(t.style, TitleStyle::Static);
    assert_eq!(t.outline.width, 0.0);
    assert_eq!(t.outline.style, OutlineStyle::Outline);
    assert!(t.outline.color.is_none());
}

#[test]
fn full_json_uses_camel_case_fields() {
    let t: TitleRequest = serde_json::from_value(json!({
        "text": "Big News",
        "textColor": "#ff0000",
        "fontFamily": "Inter",
        "fontSize": 47.6,
        "position": "bottom-left",
        "zoomDirection": "out",
        "zoomAmount": 0.1,
        "style": "word-by-word",
        "animationDuration": 2.5,
        "outlineColor": "#000000",
        "outlineWidth": 4,
        "outlineStyle": "glow"
    }))
    .unwrap();

    assert_eq!(t.text_color, Color::rgba(1.0, 0.0, 0.0, 1.0));
    assert_eq!(t.font_family, "Inter");
    assert_eq!(t.position, Position::Keyword(PositionKeyword::BottomLeft));
    assert_eq!(t.zoom_direction, ZoomDirection::Out);
    assert_eq!(t.style, TitleStyle::WordByWord);
    assert_eq!(t.animation_duration, Some(2.5));
    assert_eq!(t.outline.color, Some(Color::BLACK));
    assert_eq!(t.outline.width, 4.0);
    assert_eq!(t.outline.style, OutlineStyle::Glow);
    assert!(t.outline.draws_layer());
}

#[test]
fn null_style_and_zoom_mean_static_without_motion() {
    let t: TitleRequest =
        serde_json::from_value(json!({"text": "x", "style": null, "zoomDirection": null}))
            .unwrap();
    assert_eq!(t.style, TitleStyle::Static);
    assert_eq!(t.zoom_direction, ZoomDirection::None);

    let t: TitleRequest =
        serde_json::from_value(json!({"text": "x", "style": "fade-in"})).unwrap();
    assert_eq!(t.style, TitleStyle::FadeIn);
}

#[test]
fn unknown_style_is_rejected() {
    assert!(TitleRequest::from_json(r#"{"text": "x", "style": "typewriter"}"#).is_err());
}

#[test]
fn font_size_defaults_to_tenth_of_short_side() {
    let canvas = Canvas::new(1920, 1080).unwrap();
    let mut t = TitleRequest::new("x");
    assert_eq!(t.resolved_font_size(canvas), 108.0);

    t.font_size = Some(31.4);
    assert_eq!(t.resolved_font_size(canvas), 31.0);

    let canvas = Canvas::new(645, 1000).unwrap();
    t.font_size = None;
    assert_eq!(t.font(canvas).size, 65.0);
}

#[test]
fn zero_font_size_falls_back_to_derived_size() {
    let t: TitleRequest = serde_json::from_value(json!({"text": "x", "fontSize": 0})).unwrap();
    assert!(t.validate().is_ok());
    assert_eq!(t.configured_font_size(), None);
    assert_eq!(t.resolved_font_size(Canvas::new(1920, 1080).unwrap()), 108.0);
}

#[test]
fn validate_rejects_bad_numbers() {
    let mut t = TitleRequest::new("x");
    assert!(t.validate().is_ok());

    t.outline.width = -1.0;
    assert!(t.validate().is_err());
    t.outline.width = 2.0;

    t.font_size = Some(0.2);
    assert!(t.validate().is_err());
    t.font_size = Some(12.0);

    t.zoom_amount = f64::NAN;
    assert!(t.validate().is_err());
    t.zoom_amount = 0.2;

    t.animation_duration = Some(f64::INFINITY);
    assert!(t.validate().is_err());
    t.animation_duration = None;

    t.font_family = "  ".to_owned();
    assert!(t.validate().is_err());
}

#[test]
fn outline_layer_requires_width_and_color() {
    let mut o = OutlineSpec {
        width: 3.0,
        ..OutlineSpec::default()
    };
    assert!(!o.draws_layer());
    o.color = Some(Color::BLACK);
    assert!(o.draws_layer());
    o.width = 0.0;
    assert!(!o.draws_layer());
}
