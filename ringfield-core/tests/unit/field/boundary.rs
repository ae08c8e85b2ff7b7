use super::*;
use crate::foundation::core::{CanvasSize, Point};

#[test]
fn outer_is_signed() {
    assert_eq!(boundary_distance(0.25, ShapeRole::Outer), 0.75);
    assert_eq!(boundary_distance(1.0, ShapeRole::Outer), 0.0);
    assert_eq!(boundary_distance(1.5, ShapeRole::Outer), -0.5);
}

#[test]
fn interior_is_absolute() {
    assert_eq!(boundary_distance(0.25, ShapeRole::Interior), 0.75);
    assert_eq!(boundary_distance(1.0, ShapeRole::Interior), 0.0);
    assert_eq!(boundary_distance(1.5, ShapeRole::Interior), 0.5);
}

#[test]
fn pixel_metric_is_raw_distance_for_circles() {
    let c = Shape::circle(Point::new(0.0, 0.0), 120.0, 0.0).unwrap();
    // 135px from center, 15px outside the circle.
    let d = boundary_distance_in(
        &c,
        ShapeRole::Interior,
        BoundaryMetric::Pixel,
        135.0,
        0.0,
        135.0 / 120.0,
    );
    assert!((d - 15.0).abs() < 1e-9);

    let o = Shape::circle(Point::new(0.0, 0.0), 150.0, 0.0).unwrap();
    let d = boundary_distance_in(
        &o,
        ShapeRole::Outer,
        BoundaryMetric::Pixel,
        0.0,
        135.0,
        135.0 / 150.0,
    );
    assert!((d - 15.0).abs() < 1e-9);
}

#[test]
fn normalized_metric_ignores_radius() {
    let c = Shape::circle(Point::new(0.0, 0.0), 120.0, 0.0).unwrap();
    let d = boundary_distance_in(
        &c,
        ShapeRole::Interior,
        BoundaryMetric::Normalized,
        60.0,
        0.0,
        0.5,
    );
    assert_eq!(d, 0.5);
}

#[test]
fn boundary_field_maps_each_value() {
    let canvas = CanvasSize::new(1, 3).unwrap();
    let dist = Field::from_fn(canvas, |x, _| f64::from(x) * 0.75);
    let outer = boundary_field(&dist, ShapeRole::Outer);
    assert_eq!(outer.as_slice(), &[1.0, 0.25, -0.5]);
    let inner = boundary_field(&dist, ShapeRole::Interior);
    assert_eq!(inner.as_slice(), &[1.0, 0.25, 0.5]);
}
