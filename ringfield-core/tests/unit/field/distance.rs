use super::*;
use crate::foundation::core::Point;

fn circle(r: f64) -> Shape {
    Shape::circle(Point::new(320.0, 240.0), r, 0.5).unwrap()
}

#[test]
fn circle_boundary_is_one() {
    let s = circle(150.0);
    assert_eq!(normalized_distance(&s, 470.0, 240.0), 1.0);
    assert_eq!(normalized_distance(&s, 320.0, 90.0), 1.0);
    assert_eq!(normalized_distance(&s, 320.0, 240.0), 0.0);
    assert_eq!(normalized_distance(&s, 395.0, 240.0), 0.5);
}

#[test]
fn ellipse_scales_each_axis() {
    let s = Shape::ellipse(Point::new(0.0, 0.0), 150.0, 120.0, 0.5).unwrap();
    assert_eq!(normalized_distance(&s, 150.0, 0.0), 1.0);
    assert_eq!(normalized_distance(&s, 0.0, -120.0), 1.0);
    assert!((normalized_distance(&s, 75.0, 60.0) - 0.5f64.hypot(0.5)).abs() < 1e-12);
}

#[test]
fn asymmetric_ellipse_switches_axis_at_center_column() {
    let c = Point::new(100.0, 100.0);
    let s = Shape::asymmetric_ellipse(c, 180.0, 120.0, 120.0, 0.5).unwrap();
    assert_eq!(normalized_distance(&s, -80.0, 100.0), 1.0);
    assert_eq!(normalized_distance(&s, 220.0, 100.0), 1.0);
    // Just left of center uses the left axis, the center column uses the right one.
    assert!((normalized_distance(&s, 99.0, 100.0) - 1.0 / 180.0).abs() < 1e-12);
    assert_eq!(normalized_distance(&s, 100.0, 160.0), 0.5);
}

#[test]
fn ray_radius_matches_axes() {
    let c = circle(70.0);
    assert_eq!(ray_radius(&c, 0.0, 0.0), 70.0);

    let e = Shape::ellipse(Point::new(0.0, 0.0), 150.0, 120.0, 0.5).unwrap();
    assert!((ray_radius(&e, 10.0, 0.0) - 150.0).abs() < 1e-9);
    assert!((ray_radius(&e, 0.0, 10.0) - 120.0).abs() < 1e-9);
    assert_eq!(ray_radius(&e, 0.0, 0.0), 150.0);
}

#[test]
fn distance_field_covers_canvas() {
    let canvas = CanvasSize::new(4, 6).unwrap();
    let s = Shape::circle(Point::new(0.0, 0.0), 2.0, 0.5).unwrap();
    let f = distance_field(&s, canvas);
    assert_eq!((f.width(), f.height()), (6, 4));
    assert_eq!(f.get(0, 0), 0.0);
    assert_eq!(f.get(2, 0), 1.0);
    assert_eq!(f.get(0, 3), 1.5);
}
