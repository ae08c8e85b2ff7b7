use super::*;
use crate::field::boundary::BoundaryMetric;
use crate::render::pipeline::CompositeMode;

const TWO_RINGS: &str = r#"{
  "canvas": { "height": 48, "width": 64 },
  "shapes": [
    { "center": { "x": 32.0, "y": 24.0 }, "radius": { "circle": { "radius": 15.0 } }, "brightness": 0.3 },
    { "center": { "x": 32.0, "y": 24.0 }, "radius": { "circle": { "radius": 12.0 } }, "brightness": 0.0 }
  ],
  "opts": { "metric": "pixel" }
}"#;

#[test]
fn parses_shapes_and_partial_opts() {
    let scene = SceneConfig::from_json_str(TWO_RINGS).unwrap();
    assert_eq!(scene.canvas, CanvasSize::new(48, 64).unwrap());
    assert_eq!(scene.shapes.len(), 2);
    assert_eq!(scene.opts.metric, BoundaryMetric::Pixel);
    assert_eq!(scene.opts.mode, CompositeMode::WeightedBlend);
    assert!(!scene.opts.threading.parallel);
}

#[test]
fn renders_with_its_own_opts() {
    let scene = SceneConfig::from_json_str(TWO_RINGS).unwrap();
    let f = scene.render().unwrap();
    // Inner boundary shows the outer brightness, outer boundary the inner one.
    assert!((f.get(44, 24) - 0.3).abs() < 1e-6);
    assert!((f.get(47, 24) - 0.0).abs() < 1e-6);
    assert_eq!(f.get(32, 24), 0.0);
}

#[test]
fn json_roundtrip_preserves_scene() {
    let scene = SceneConfig::from_json_str(TWO_RINGS).unwrap();
    let json = scene.to_json_pretty().unwrap();
    assert_eq!(SceneConfig::from_json_str(&json).unwrap(), scene);
}

#[test]
fn invalid_shapes_fail_as_serde_errors() {
    let bad = TWO_RINGS.replace("\"radius\": 12.0", "\"radius\": 0.0");
    let err = SceneConfig::from_json_str(&bad).unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
    assert!(err.to_string().contains("shape 1"));
}

#[test]
fn empty_canvas_is_rejected() {
    let bad = TWO_RINGS.replace("\"height\": 48", "\"height\": 0");
    assert!(SceneConfig::from_json_str(&bad).is_err());
}

#[test]
fn missing_file_is_a_validation_error() {
    let err = SceneConfig::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("open scene JSON"));
}

#[test]
fn from_path_reads_fixture() {
    let path =
        std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/triple_rings.json");
    let scene = SceneConfig::from_path(path).unwrap();
    assert_eq!(scene.shapes.len(), 3);
    assert!(scene.shapes.nesting_violations().is_empty());
}
