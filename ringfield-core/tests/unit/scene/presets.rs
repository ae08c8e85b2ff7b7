use super::*;
use crate::field::grid::Field;

#[test]
fn names_round_trip_through_from_str() {
    for p in Preset::ALL {
        assert_eq!(p.name().parse::<Preset>().unwrap(), p);
        assert_eq!(p.to_string(), p.name());
    }
    let err = "spiral".parse::<Preset>().unwrap_err();
    assert!(err.to_string().contains("gradient-ring"));
}

#[test]
fn serde_names_match_display_names() {
    let json = serde_json::to_string(&Preset::QuintupleAsymmetricEllipses).unwrap();
    assert_eq!(json, "\"quintuple-asymmetric-ellipses\"");
}

#[test]
fn still_presets_reject_offsets() {
    assert!(Preset::EccentricRing.scene_at(1).is_err());
    assert!(Preset::EccentricRing.scene_at(0).is_ok());
}

#[test]
fn shape_counts_and_canvases() {
    let expected = [2, 2, 3, 5, 5, 5];
    for (p, n) in Preset::ALL.into_iter().zip(expected) {
        let scene = p.scene().unwrap();
        assert_eq!(scene.shapes.len(), n, "{p}");
    }
    assert_eq!(
        Preset::GradientRing.scene().unwrap().canvas,
        CanvasSize::new(480, 640).unwrap()
    );
    assert_eq!(
        Preset::EllipseAnimation.scene().unwrap().canvas,
        CanvasSize::new(800, 1000).unwrap()
    );
}

#[test]
fn still_presets_are_properly_nested() {
    for p in Preset::ALL.into_iter().filter(|p| !p.is_animated()) {
        assert!(p.scene().unwrap().shapes.nesting_violations().is_empty(), "{p}");
    }
}

#[test]
fn gradient_ring_blend_matches_direct_ring() {
    let scene = Preset::GradientRing.scene().unwrap();
    let ring = Preset::GradientRing.ring().unwrap();
    let blend: Field = scene.render().unwrap();
    let direct = ring.render(scene.canvas);
    for x in 440..=470 {
        let (a, b) = (blend.get(x, 240), direct.get(x, 240));
        assert!((a - b).abs() < 1e-6, "x={x}: blend {a} vs ring {b}");
    }
    assert!(Preset::EccentricRing.ring().is_none());
}

#[test]
fn animation_scene_moves_with_offset() {
    let anim = EllipseAnimation::stock();
    let seq = anim.sequence().unwrap();
    let left = anim.scene_at(&seq, -15).unwrap();
    let mid = anim.scene_at(&seq, 0).unwrap();
    assert_eq!(mid.opts.mode, CompositeMode::Peak);
    assert_eq!(mid.shapes.inner().center, Point::new(460.0, 240.0));
    assert_eq!(left.shapes.inner().center, Point::new(410.0, 240.0));
    assert_eq!(left.shapes.outer().center, Point::new(450.0, 240.0));
    assert!(anim.scene_at(&seq, 16).is_err());
}

#[test]
fn animation_peak_sits_on_the_innermost_center() {
    let scene = Preset::EllipseAnimation.scene().unwrap();
    let f = scene.render().unwrap();
    assert_eq!(f.get(460, 240), 200.0);
    assert_eq!(f.stats().max, 200.0);
    assert_eq!(Preset::EllipseAnimation.tone_map(), ToneMap::Direct);
}
