//! 分段级别的集成测试

use zpath_core::prelude::*;

fn p(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

/// 直线、圆弧、曲线混合的闭合路径
fn rounded_slot() -> Path {
    let mut path = Path::new();
    path.move_to(p(0.0, 0.0))
        .line_to(p(10.0, 0.0))
        .arc_to(p(15.0, 5.0), p(10.0, 10.0))
        .curve_to(p(6.0, 12.0), p(4.0, 12.0), p(0.0, 10.0))
        .close();
    path
}

#[test]
fn test_mixed_segment_structure() {
    let path = rounded_slot();
    let segment = Segment::from_commands(path.commands()).unwrap();

    assert!(segment.is_closed());
    let kinds: Vec<PrimitiveKind> = segment.primitives().iter().map(Primitive::kind).collect();
    assert_eq!(
        kinds,
        vec![
            PrimitiveKind::Line,
            PrimitiveKind::Arc,
            PrimitiveKind::Curve,
            PrimitiveKind::Line
        ]
    );

    for pair in segment.primitives().windows(2) {
        assert_eq!(pair[0].endpoint(), pair[1].origin());
    }
}

#[test]
fn test_arc_ends_on_circle() {
    let segment = Segment::from_commands(rounded_slot().commands()).unwrap();
    let Primitive::Arc(arc) = segment.primitives()[1] else {
        panic!("expected an arc");
    };
    for t in [0.0, 1.0] {
        let d = (arc.pair_at(t) - arc.center()).norm();
        assert!((d - arc.radius()).abs() < EPSILON);
    }
    assert!((arc.radius() - 5.0).abs() < EPSILON);
}

#[test]
fn test_reverse_twice() {
    let segment = Segment::from_commands(rounded_slot().commands()).unwrap();
    let twice = segment.reverse().reverse();

    assert_eq!(twice.len(), segment.len());
    for (a, b) in segment.primitives().iter().zip(twice.primitives()) {
        assert_eq!(a.kind(), b.kind());
        for (pa, pb) in a.points().iter().zip(b.points()) {
            assert!((pa - pb).norm() < EPSILON);
        }
    }
}

#[test]
fn test_offset_keeps_continuity() {
    // 顺时针闭合路径，正偏移向外
    let segment = Segment::from_commands(rounded_slot().commands())
        .unwrap()
        .reverse();
    let offset = segment.offset(0.5).unwrap();

    assert!(offset.is_closed());
    assert!(offset.len() >= segment.len());
    for pair in offset.primitives().windows(2) {
        assert!((pair[0].endpoint() - pair[1].origin()).norm() < EPSILON);
    }
    assert!((offset.endpoint() - offset.origin()).norm() < EPSILON);

    let inner = segment.extents();
    let outer = offset.extents();
    assert!(outer.contains(&inner.origin));
    assert!(outer.contains(&inner.max()));
}

#[test]
fn test_parallel_tangent_curve_fallback() {
    let curve = Curve::new(p(0.0, 0.0), p(1.0, 0.0), p(9.0, 0.0), p(10.0, 0.0));
    let Primitive::Curve(offset) = Primitive::Curve(curve).offset(2.0).unwrap() else {
        panic!("offset changed the primitive kind");
    };

    let v0 = curve.control1 - curve.origin;
    let v3 = curve.end - curve.control2;
    let vm = curve.vector_at(0.5).set_length(2.0).unwrap().normal();
    assert_eq!(offset.origin, p(0.0, 2.0));
    assert_eq!(offset.end, p(10.0, 2.0));
    assert_eq!(offset.control1, offset.origin + v0 + vm * (4.0 / 3.0));
    assert_eq!(offset.control2, offset.end - v3 + vm * (4.0 / 3.0));
}

#[test]
fn test_path_round_trip_through_segments() {
    let mut path = rounded_slot();
    path.move_to(p(30.0, 0.0)).line_to(p(40.0, 5.0));

    let segments: Vec<Segment> = path.segments().collect::<Result<_>>().unwrap();
    assert_eq!(segments.len(), 2);

    let rebuilt = Path::from_segments(&segments);
    let again: Vec<Segment> = rebuilt.segments().collect::<Result<_>>().unwrap();
    assert_eq!(again, segments);
}

#[test]
fn test_segment_intersections() {
    let square = {
        let mut path = Path::new();
        path.move_to(p(0.0, 0.0))
            .line_to(p(10.0, 0.0))
            .line_to(p(10.0, 10.0))
            .line_to(p(0.0, 10.0))
            .close();
        Segment::from_commands(path.commands()).unwrap()
    };
    let circle = Segment::new(
        vec![Primitive::Arc(
            Arc::from_center(p(5.0, 5.0), 5.0, 0.0, std::f64::consts::TAU).unwrap(),
        )],
        true,
    )
    .unwrap();

    // 内切圆与正方形相切于四条边的中点
    let points = square.intersections(&circle);
    assert_eq!(points.len(), 4);
    for expected in [p(5.0, 0.0), p(10.0, 5.0), p(5.0, 10.0), p(0.0, 5.0)] {
        assert!(points.iter().any(|q| (q - expected).norm() < 1e-6));
    }
}

#[test]
fn test_transform_segment() {
    let segment = Segment::from_commands(rounded_slot().commands()).unwrap();
    let transform = Transform2D::rotation(std::f64::consts::FRAC_PI_2).then(&Transform2D::translation(1.0, 2.0));
    let moved = segment.transform(&transform).unwrap();

    let origin = moved.origin();
    assert!((origin - p(1.0, 2.0)).norm() < EPSILON);
    assert!((moved.length() - segment.length()).abs() < 1e-6);
}
