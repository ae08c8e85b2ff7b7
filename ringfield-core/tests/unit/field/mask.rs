use super::*;
use crate::foundation::core::Point;
use crate::shape::model::Shape;

fn ring(outer: f64, inner: f64) -> ShapeSet {
    let c = Point::new(10.0, 10.0);
    ShapeSet::new(vec![
        Shape::circle(c, outer, 0.0).unwrap(),
        Shape::circle(c, inner, 0.3).unwrap(),
    ])
    .unwrap()
}

#[test]
fn ring_rule_is_inclusive_on_both_boundaries() {
    assert!(is_valid(1.0, 1.0, MaskMode::Ring));
    assert!(is_valid(0.5, 2.0, MaskMode::Ring));
    assert!(!is_valid(1.01, 2.0, MaskMode::Ring));
    assert!(!is_valid(0.5, 0.99, MaskMode::Ring));
}

#[test]
fn filled_rule_ignores_inner() {
    assert!(is_valid(0.5, 0.0, MaskMode::Filled));
    assert!(!is_valid(1.5, 3.0, MaskMode::Filled));
}

#[test]
fn single_shape_ring_keeps_only_the_boundary() {
    let canvas = CanvasSize::new(21, 21).unwrap();
    let shape = Shape::circle(Point::new(10.0, 10.0), 5.0, 0.6).unwrap();
    let set = ShapeSet::new(vec![shape]).unwrap();
    let ring_mask = RegionMask::build(&set, canvas, MaskMode::Ring);
    assert!(!ring_mask.contains(10, 10));
    assert!(!ring_mask.contains(12, 10));
    assert!(ring_mask.contains(15, 10));
    assert!(ring_mask.contains(10, 5));
    assert!(ring_mask.count() >= 4);

    let filled = RegionMask::build(&set, canvas, MaskMode::Filled);
    assert!(filled.contains(10, 10));
    assert!(filled.contains(15, 10));
}

#[test]
fn ring_mask_is_an_annulus() {
    let canvas = CanvasSize::new(21, 21).unwrap();
    let mask = RegionMask::build(&ring(8.0, 4.0), canvas, MaskMode::Ring);
    assert!(!mask.contains(10, 10));
    assert!(!mask.contains(13, 10));
    assert!(mask.contains(14, 10));
    assert!(mask.contains(16, 10));
    assert!(mask.contains(18, 10));
    assert!(!mask.contains(19, 10));
    assert!(!mask.contains(40, 10));
}

#[test]
fn filled_mask_includes_center() {
    let canvas = CanvasSize::new(21, 21).unwrap();
    let ring_mask = RegionMask::build(&ring(8.0, 4.0), canvas, MaskMode::Ring);
    let filled = RegionMask::build(&ring(8.0, 4.0), canvas, MaskMode::Filled);
    assert!(filled.contains(10, 10));
    assert!(filled.count() > ring_mask.count());
}
