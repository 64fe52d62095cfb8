use gravity_engine::collision::{
    detect_collisions, find_separating_axis, find_separating_axis_observed, overlaps, AxisProbe,
    AxisSource,
};
use gravity_engine::math::vec2::Vec2;
use gravity_engine::objects::Body;
use gravity_engine::shapes::Polygon;
use gravity_engine::GeometryError;

/// Clockwise box spanning `[min_x, max_x] x [min_y, max_y]`.
fn span(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Polygon {
    Polygon::new(vec![
        Vec2::new(min_x, max_y),
        Vec2::new(max_x, max_y),
        Vec2::new(max_x, min_y),
        Vec2::new(min_x, min_y),
    ])
    .unwrap()
}

#[test]
fn test_disjoint_boxes_separate_on_x_normal() {
    let a = span(0.0, 10.0, 0.0, 10.0);
    let b = span(20.0, 30.0, 0.0, 10.0);
    assert!(!overlaps(&a, &b).unwrap());

    let probe = find_separating_axis(&a, &b).unwrap().unwrap();
    assert_eq!(probe.axis, Vec2::new(1.0, 0.0));
    assert_eq!(probe.source, AxisSource::First);
    assert!(probe.first.max < probe.second.min);
}

#[test]
fn test_identical_squares_coincide_on_every_axis() {
    let a = span(0.0, 10.0, 0.0, 10.0);
    let b = a.clone();
    let mut probes: Vec<AxisProbe> = Vec::new();
    let found =
        find_separating_axis_observed(&a, &b, &mut |probe: &AxisProbe| probes.push(*probe)).unwrap();

    assert!(found.is_none());
    assert_eq!(probes.len(), 8);
    assert!(probes.iter().all(|probe| probe.first == probe.second));
}

#[test]
fn test_edge_contact_counts_as_overlap() {
    let a = span(0.0, 10.0, 0.0, 10.0);
    let b = span(10.0, 20.0, 0.0, 10.0);
    assert!(overlaps(&a, &b).unwrap());
    assert!(overlaps(&b, &a).unwrap());

    // Corner contact only
    let c = span(10.0, 20.0, 10.0, 20.0);
    assert!(overlaps(&a, &c).unwrap());

    // Any gap at all separates
    let d = span(10.000001, 20.0, 0.0, 10.0);
    assert!(!overlaps(&a, &d).unwrap());
}

#[test]
fn test_winding_does_not_change_decision() {
    let a = span(0.0, 10.0, 0.0, 10.0);
    let b = Polygon::new(vec![
        Vec2::new(8.0, 5.0),
        Vec2::new(8.0, 15.0),
        Vec2::new(18.0, 5.0),
    ])
    .unwrap();
    let mut reversed = b.vertices().to_vec();
    reversed.reverse();
    let b_ccw = Polygon::new(reversed).unwrap();

    assert_ne!(b.normals().unwrap(), b_ccw.normals().unwrap());
    assert_eq!(overlaps(&a, &b).unwrap(), overlaps(&a, &b_ccw).unwrap());
}

#[test]
fn test_degenerate_polygons_fail_fast() {
    assert_eq!(
        Polygon::new(vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)]),
        Err(GeometryError::InvalidPolygon { count: 2 })
    );

    let pinched = Polygon::new(vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(4.0, 4.0),
        Vec2::new(4.0, 4.0),
    ])
    .unwrap();
    let square = span(0.0, 10.0, 0.0, 10.0);
    assert_eq!(overlaps(&square, &pinched), Err(GeometryError::DegenerateVector));
    assert_eq!(overlaps(&pinched, &square), Err(GeometryError::DegenerateVector));
}

#[test]
fn test_non_finite_vertex_is_not_an_overlap() {
    // Far from the square; a NaN normal would make every axis look overlapping
    let broken = Polygon::new(vec![
        Vec2::new(f64::NAN, 0.0),
        Vec2::new(1000.0, 10.0),
        Vec2::new(1010.0, 0.0),
    ])
    .unwrap();
    let square = span(-5.0, 5.0, -5.0, 5.0);
    assert_eq!(overlaps(&square, &broken), Err(GeometryError::DegenerateVector));

    let bodies = [
        Body::new(square.clone()),
        Body::new(broken),
        Body::at(Polygon::rectangle(10.0, 10.0), Vec2::new(2000.0, 0.0)),
    ];
    let report = detect_collisions(&bodies);
    assert!(report.collisions.is_empty());
    assert_eq!(report.failures.len(), 2);
}

#[test]
fn test_dot_and_wall_start_apart() {
    let dot = Body::at(Polygon::rectangle(10.0, 10.0), Vec2::new(100.0, 100.0));
    let wall = Body::at(Polygon::rectangle(10.0, 100.0), Vec2::new(600.0, 200.0));

    assert!(!overlaps(&dot.world_polygon(), &wall.world_polygon()).unwrap());

    let report = detect_collisions(&[dot, wall]);
    assert_eq!(report.tested, 1);
    assert!(report.collisions.is_empty());
    assert!(report.failures.is_empty());
}
