use approx::{assert_abs_diff_eq, assert_relative_eq};
use assert_matches::assert_matches;
use geomeasure::geomeasure_types::{
    Annotated, Coord, Curve, Geom, GeometryCollection, GeometryKind, MetadataFactory, MultiCurve,
    MultiPoint, MultiSurface, Point, Ring, Surface,
};
use geomeasure::{DispatchMatrix, MeasureError, MeasurementOperator, ScratchBackend};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn square(min: f64, max: f64) -> Ring {
    Ring::new(vec![
        Coord::xy(min, min),
        Coord::xy(max, min),
        Coord::xy(max, max),
        Coord::xy(min, max),
    ])
}

fn point(x: f64, y: f64, z: f64) -> Point {
    Point::from_xyz(x, y, z)
}

fn curve(points: &[(f64, f64, f64)]) -> Curve {
    points
        .iter()
        .map(|&(x, y, z)| Coord::new(x, y, z))
        .collect()
}

fn bowtie() -> Ring {
    Ring::new(vec![
        Coord::xy(0.0, 0.0),
        Coord::xy(2.0, 2.0),
        Coord::xy(2.0, 0.0),
        Coord::xy(0.0, 4.0),
    ])
}

fn samples() -> Vec<Geom> {
    vec![
        point(0.0, 0.0, 0.0).into(),
        point(10.0, 1.0, 2.0).into(),
        curve(&[(2.0, 2.0, 0.0), (5.0, 2.0, 0.0), (5.0, 6.0, 0.0)]).into(),
        curve(&[(0.0, 10.0, 3.0), (4.0, 10.0, 3.0)]).into(),
        curve(&[(7.0, 7.0, 0.0)]).into(),
        Surface::new(square(0.0, 4.0), vec![square(1.0, 3.0)]).into(),
        Surface::from(square(20.0, 22.0)).into(),
        MultiPoint::new(vec![point(-3.0, 0.0, 0.0), point(30.0, 30.0, 0.0)]).into(),
        MultiCurve::new(vec![
            curve(&[(12.0, 0.0, 0.0), (12.0, 8.0, 0.0)]),
            Curve::default(),
        ])
        .into(),
        MultiSurface::new(vec![
            Surface::from(square(40.0, 41.0)),
            Surface::from(square(50.0, 52.0)),
        ])
        .into(),
        GeometryCollection::new(vec![
            point(15.0, 15.0, 0.0).into(),
            MultiSurface::new(vec![Surface::from(square(-10.0, -8.0))]).into(),
            MultiPoint::default().into(),
        ])
        .into(),
    ]
}

/// Near-degenerate, self-intersecting and very large or very small geometries.
fn extreme_samples() -> Vec<Geom> {
    vec![
        curve(&[(0.0, 0.0, 0.0), (1e-200, 0.0, 0.0)]).into(),
        curve(&[(1e-300, 1e-300, 0.0), (2e-300, -1e-300, 1e-300)]).into(),
        point(3e200, 4e200, 0.0).into(),
        curve(&[(-1e200, 5e199, 0.0), (2e200, -3e200, 1e200)]).into(),
        Surface::from(square(1e200, 3e200)).into(),
        Surface::from(bowtie()).into(),
    ]
}

#[test]
fn point_to_point() {
    init_logger();
    let operator = MeasurementOperator::new();
    let a = point(0.0, 0.0, 0.0).into();
    let b = point(3.0, 4.0, 0.0).into();

    assert_eq!(operator.distance(&a, &b), Ok(5.0));
}

#[test]
fn point_to_curve_with_foot_on_segment() {
    let operator = MeasurementOperator::new();
    let a = point(0.0, 0.0, 0.0).into();
    let b = curve(&[(1.0, 0.0, 0.0), (1.0, 1.0, 0.0)]).into();

    assert_eq!(operator.distance(&a, &b), Ok(1.0));
}

#[test]
fn point_to_curve_with_foot_beyond_segment() {
    let operator = MeasurementOperator::new();
    let a = point(5.0, 5.0, 0.0).into();
    let b = curve(&[(0.0, 0.0, 0.0), (1.0, 1.0, 0.0)]).into();

    assert_abs_diff_eq!(
        operator.distance(&a, &b).expect("distance"),
        32f64.sqrt(),
        epsilon = 1e-12
    );
}

#[test]
fn surface_area() {
    let operator = MeasurementOperator::new();

    let unit = Surface::from(square(0.0, 1.0)).into();
    assert_eq!(operator.area(&unit), Ok(1.0));

    let holed = Surface::new(square(0.0, 2.0), vec![square(0.5, 1.5)]).into();
    assert_eq!(operator.area(&holed), Ok(3.0));
}

#[test]
fn distance_to_multi_point_is_the_minimum() {
    let operator = MeasurementOperator::new();
    let origin = point(0.0, 0.0, 0.0).into();
    let points = MultiPoint::new(vec![point(0.0, 7.0, 0.0), point(3.0, 0.0, 0.0)]).into();

    assert_eq!(operator.distance(&origin, &points), Ok(3.0));
    assert_eq!(operator.distance(&points, &origin), Ok(3.0));
}

#[test]
fn distance_to_empty_collection_fails() {
    let operator = MeasurementOperator::new();
    let origin = point(0.0, 0.0, 0.0).into();
    let empty = MultiPoint::default().into();

    assert_eq!(
        operator.distance(&origin, &empty),
        Err(MeasureError::EmptyGeometry(GeometryKind::MultiPoint))
    );
    assert_eq!(
        operator.distance(&empty, &origin),
        Err(MeasureError::EmptyGeometry(GeometryKind::MultiPoint))
    );
}

#[test]
fn empty_members_are_skipped() {
    let operator = MeasurementOperator::new();
    let origin: Geom = point(0.0, 0.0, 0.0).into();

    let mixed = GeometryCollection::new(vec![
        MultiPoint::default().into(),
        Curve::default().into(),
        point(0.0, 2.0, 0.0).into(),
    ])
    .into();
    assert_eq!(operator.distance(&origin, &mixed), Ok(2.0));

    let hollow = GeometryCollection::new(vec![
        MultiPoint::default().into(),
        GeometryCollection::default().into(),
    ])
    .into();
    assert_eq!(
        operator.distance(&origin, &hollow),
        Err(MeasureError::EmptyGeometry(GeometryKind::GeometryCollection))
    );
}

#[test]
fn distance_is_symmetric() {
    init_logger();
    let operator = MeasurementOperator::new();
    let samples: Vec<_> = samples().into_iter().chain(extreme_samples()).collect();

    for a in &samples {
        for b in &samples {
            let ab = operator.distance(a, b).expect("distance");
            let ba = operator.distance(b, a).expect("distance");
            assert_eq!(ab, ba, "{} - {}", a.kind(), b.kind());
            assert!(ab.is_finite() && ab >= 0.0, "{} - {}", a.kind(), b.kind());
        }
    }
}

#[test]
fn distance_to_itself_is_zero() {
    let operator = MeasurementOperator::new();
    for geometry in samples().into_iter().chain(extreme_samples()) {
        assert_eq!(
            operator.distance(&geometry, &geometry),
            Ok(0.0),
            "{}",
            geometry.kind()
        );
    }
}

#[test]
fn single_vertex_curve_measures_as_point() {
    let operator = MeasurementOperator::new();
    let as_point: Geom = point(6.0, 3.0, 0.0).into();
    let as_curve: Geom = curve(&[(6.0, 3.0, 0.0)]).into();

    for other in samples() {
        let expected = operator.distance(&as_point, &other).expect("distance");
        let actual = operator.distance(&as_curve, &other).expect("distance");
        assert_abs_diff_eq!(actual, expected, epsilon = 1e-12);
    }
}

#[test]
fn pruning_does_not_change_distances() {
    let pruned = MeasurementOperator::new();
    let exhaustive = MeasurementOperator::builder()
        .with_envelope_pruning(false)
        .build();
    let samples = samples();

    for a in &samples {
        for b in &samples {
            assert_eq!(pruned.distance(a, b), exhaustive.distance(a, b));
        }
    }
}

#[test]
fn multi_surface_area_is_a_plain_sum() {
    let operator = MeasurementOperator::new();
    let parts = vec![
        Surface::from(square(0.0, 2.0)),
        Surface::from(square(1.0, 3.0)),
        Surface::new(square(10.0, 13.0), vec![square(11.0, 12.0)]),
    ];
    let expected: f64 = parts.iter().map(Surface::area).sum();
    assert_eq!(expected, 16.0);

    let multi = MultiSurface::new(parts).into();
    assert_eq!(operator.area(&multi), Ok(16.0));

    let empty = MultiSurface::default().into();
    assert_eq!(operator.area(&empty), Ok(0.0));
}

#[test]
fn degenerate_surface_has_no_area() {
    let operator = MeasurementOperator::new();
    let sliver = Surface::from(Ring::new(vec![
        Coord::xy(0.0, 0.0),
        Coord::xy(2.0, 2.0),
        Coord::xy(0.0, 0.0),
        Coord::xy(2.0, 2.0),
    ]))
    .into();

    assert_eq!(operator.area(&sliver), Ok(0.0));
}

#[test]
fn tiny_segment_measures_as_point() {
    let operator = MeasurementOperator::new();
    let above = point(0.0, 1.0, 0.0).into();
    let tiny = curve(&[(0.0, 0.0, 0.0), (1e-200, 0.0, 0.0)]).into();

    assert_eq!(operator.distance(&above, &tiny), Ok(1.0));
    assert_eq!(operator.distance(&tiny, &above), Ok(1.0));
}

#[test]
fn large_magnitudes_stay_finite() {
    let operator = MeasurementOperator::new();
    let origin = point(0.0, 0.0, 0.0).into();
    let far = point(3e200, 4e200, 0.0).into();
    assert_relative_eq!(
        operator.distance(&origin, &far).expect("distance"),
        5e200,
        max_relative = 1e-15
    );

    let line = curve(&[(-1e200, 3e200, 0.0), (1e200, 3e200, 0.0)]).into();
    assert_relative_eq!(
        operator.distance(&origin, &line).expect("distance"),
        3e200,
        max_relative = 1e-15
    );

    let region = Surface::from(square(1e200, 3e200)).into();
    assert_relative_eq!(
        operator.distance(&origin, &region).expect("distance"),
        2f64.sqrt() * 1e200,
        max_relative = 1e-15
    );
    assert_relative_eq!(
        operator.distance(&far, &line).expect("distance"),
        5f64.sqrt() * 1e200,
        max_relative = 1e-15
    );
}

#[test]
fn self_intersecting_surface() {
    let operator = MeasurementOperator::new();
    let lobes: Geom = Surface::from(bowtie()).into();

    assert_eq!(operator.area(&lobes), Ok(2.0));
    assert_eq!(operator.distance(&lobes, &point(5.0, 0.0, 0.0).into()), Ok(3.0));
    assert_eq!(operator.distance(&lobes, &point(1.9, 1.0, 0.0).into()), Ok(0.0));
    assert_abs_diff_eq!(
        operator
            .distance(&lobes, &Surface::from(square(10.0, 12.0)).into())
            .expect("distance"),
        128f64.sqrt(),
        epsilon = 1e-12
    );

    let balanced = Surface::from(Ring::new(vec![
        Coord::xy(0.0, 0.0),
        Coord::xy(2.0, 2.0),
        Coord::xy(2.0, 0.0),
        Coord::xy(0.0, 2.0),
    ]))
    .into();
    assert_eq!(operator.area(&balanced), Ok(0.0));
}

#[test]
fn surface_is_measured_on_the_xy_plane() {
    let operator = MeasurementOperator::new();
    let unit = square(0.0, 1.0);
    let surface: Geom = Surface::from(unit.clone()).into();
    let boundary: Geom = unit
        .points()
        .iter()
        .chain(unit.points().first())
        .copied()
        .collect::<Curve>()
        .into();

    let over_edge = point(1.0, 0.5, 10.0).into();
    assert_eq!(operator.distance(&surface, &over_edge), Ok(0.0));
    assert_eq!(operator.distance(&boundary, &over_edge), Ok(10.0));

    let past_edge = point(1.0 + 1e-9, 0.5, 10.0).into();
    assert_abs_diff_eq!(
        operator.distance(&surface, &past_edge).expect("distance"),
        1e-9,
        epsilon = 1e-15
    );
}

#[test]
fn restricted_matrix_reports_unsupported_pair() {
    let mut matrix = DispatchMatrix::builtin();
    matrix.unregister(GeometryKind::Surface, GeometryKind::Curve);
    let operator = MeasurementOperator::builder().with_matrix(matrix).build();

    let surface = Surface::from(square(0.0, 1.0)).into();
    let line = curve(&[(5.0, 0.0, 0.0), (5.0, 1.0, 0.0)]).into();

    assert_eq!(
        operator.distance(&line, &surface),
        Err(MeasureError::UnsupportedPair {
            first: GeometryKind::Curve,
            second: GeometryKind::Surface,
        })
    );
    assert_matches!(
        operator.distance(&surface, &line),
        Err(MeasureError::UnsupportedPair { .. })
    );
    assert_eq!(operator.distance(&surface, &surface), Ok(0.0));
}

#[test]
fn metadata_does_not_affect_measurement() {
    let operator = MeasurementOperator::new();
    let plain: Geom = Surface::from(square(0.0, 1.0)).into();
    let annotated = plain
        .clone()
        .with_metadata(MetadataFactory.create_collection_from([("name", "unit")]));
    let origin = point(-1.0, 0.5, 0.0).into();

    assert!(annotated.metadata().is_some());
    assert_eq!(
        operator.distance(&plain, &origin),
        operator.distance(&annotated, &origin)
    );
    assert_eq!(operator.area(&plain), operator.area(&annotated));
}

#[test]
fn concurrent_measurements() {
    init_logger();
    let operator = MeasurementOperator::builder().with_pool_capacity(2).build();
    let samples = samples();

    let expected: Vec<_> = samples
        .iter()
        .flat_map(|a| samples.iter().map(|b| operator.distance(a, b)))
        .collect();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..10 {
                    let actual: Vec<_> = samples
                        .iter()
                        .flat_map(|a| samples.iter().map(|b| operator.distance(a, b)))
                        .collect();
                    assert_eq!(actual, expected);
                }
            });
        }
    });
}

#[test]
fn release_is_idempotent() {
    init_logger();
    let mut operator = MeasurementOperator::builder()
        .with_backend(ScratchBackend::new(1))
        .build();
    let origin = point(0.0, 0.0, 0.0).into();

    assert_eq!(operator.distance(&origin, &origin), Ok(0.0));
    assert_eq!(operator.release(), Ok(()));
    assert_eq!(operator.release(), Ok(()));
    assert_eq!(
        operator.distance(&origin, &origin),
        Err(MeasureError::Released)
    );
}
