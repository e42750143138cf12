use crate::geom::{
    BSpline2, ControlPoint, Curve2, CurveError, KnotVector, Point2, RationalBezier2, Tolerance,
    sample_curve_uniform,
};

fn weighted_arch() -> Vec<ControlPoint> {
    vec![
        ControlPoint::new(0.0, 0.0, 1.0),
        ControlPoint::new(1.0, 2.0, 3.0),
        ControlPoint::new(3.0, 2.0, 0.5),
        ControlPoint::new(4.0, 0.0, 2.0),
    ]
}

/// Plain polynomial de Casteljau over bare positions, as an oracle for the
/// all-weights-one case.
fn de_casteljau_unweighted(points: &[Point2], t: f64) -> Point2 {
    let mut d = points.to_vec();
    let n = d.len();
    for r in 1..n {
        for i in 0..n - r {
            d[i] = d[i].lerp(d[i + 1], t);
        }
    }
    d[0]
}

/// Recursive Cox–de Boor basis function, kept as a test oracle only: it is
/// exponentially costlier than de Boor's blend but easy to read off the
/// textbook definition. Valid for interior parameters of a clamped vector.
fn basis_function(i: usize, p: usize, t: f64, knots: &[f64]) -> f64 {
    if p == 0 {
        return if knots[i] <= t && t < knots[i + 1] { 1.0 } else { 0.0 };
    }

    let mut value = 0.0;

    let denom_left = knots[i + p] - knots[i];
    if denom_left != 0.0 {
        value += (t - knots[i]) / denom_left * basis_function(i, p - 1, t, knots);
    }

    let denom_right = knots[i + p + 1] - knots[i + 1];
    if denom_right != 0.0 {
        value += (knots[i + p + 1] - t) / denom_right * basis_function(i + 1, p - 1, t, knots);
    }

    value
}

#[test]
fn bezier_interpolates_first_and_last_control_points_exactly() {
    let curve = RationalBezier2::new(weighted_arch()).expect("build");

    assert_eq!(curve.point_at(0.0), Point2::new(0.0, 0.0));
    assert_eq!(curve.point_at(1.0), Point2::new(4.0, 0.0));
}

#[test]
fn bezier_with_unit_weights_matches_polynomial_de_casteljau() {
    let positions = [
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 3.0),
        Point2::new(2.0, -1.0),
        Point2::new(4.0, 2.0),
        Point2::new(5.0, 0.0),
    ];
    let curve = RationalBezier2::new(
        positions
            .iter()
            .map(|p| ControlPoint::unweighted(p.x, p.y))
            .collect(),
    )
    .expect("build");

    let tol = Tolerance::LOOSE;
    for i in 0..=10 {
        let t = f64::from(i) / 10.0;
        let expected = de_casteljau_unweighted(&positions, t);
        assert!(tol.approx_eq_point2(curve.point_at(t), expected));
    }
}

#[test]
fn quadratic_bezier_midpoint() {
    let curve = RationalBezier2::new(vec![
        ControlPoint::unweighted(0.0, 0.0),
        ControlPoint::unweighted(1.0, 2.0),
        ControlPoint::unweighted(2.0, 0.0),
    ])
    .expect("build");

    let mid = curve.point_at(0.5);
    assert!(Tolerance::DEFAULT.approx_eq_point2(mid, Point2::new(1.0, 1.0)));
}

#[test]
fn raising_a_weight_pulls_the_curve_toward_its_control_point() {
    let flat = RationalBezier2::new(vec![
        ControlPoint::unweighted(0.0, 0.0),
        ControlPoint::unweighted(1.0, 2.0),
        ControlPoint::unweighted(2.0, 0.0),
    ])
    .expect("build");
    let pulled = RationalBezier2::new(vec![
        ControlPoint::unweighted(0.0, 0.0),
        ControlPoint::new(1.0, 2.0, 5.0),
        ControlPoint::unweighted(2.0, 0.0),
    ])
    .expect("build");

    let target = Point2::new(1.0, 2.0);
    assert!(pulled.point_at(0.5).distance_to(target) < flat.point_at(0.5).distance_to(target));
}

#[test]
fn bezier_rejects_empty_input() {
    assert!(matches!(
        RationalBezier2::new(Vec::new()),
        Err(CurveError::InsufficientControlPoints { min: 1, got: 0 })
    ));
}

#[test]
fn single_control_point_gives_a_constant_curve() {
    let curve = RationalBezier2::new(vec![ControlPoint::new(2.5, -1.0, 4.0)]).expect("build");
    for i in 0..=4 {
        let t = f64::from(i) / 4.0;
        assert_eq!(curve.point_at(t), Point2::new(2.5, -1.0));
    }
}

#[test]
fn bezier_parameter_is_clamped_to_unit_interval() {
    let curve = RationalBezier2::new(weighted_arch()).expect("build");
    assert_eq!(curve.point_at(-0.5), curve.point_at(0.0));
    assert_eq!(curve.point_at(1.5), curve.point_at(1.0));
}

#[test]
fn bspline_interpolates_clamped_endpoints() {
    let points = vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 3.0),
        Point2::new(3.0, 3.0),
        Point2::new(5.0, -1.0),
        Point2::new(6.0, 0.0),
    ];
    let spline = BSpline2::new(points.clone(), 3).expect("build");

    let tol = Tolerance::DEFAULT;
    assert!(tol.approx_eq_point2(spline.point_at(0.0), points[0]));
    assert!(tol.approx_eq_point2(spline.point_at(1.0), points[4]));
}

#[test]
fn bspline_without_interior_knots_equals_bezier() {
    let positions = vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 2.0),
        Point2::new(3.0, 2.0),
        Point2::new(4.0, 0.0),
    ];
    let spline = BSpline2::new(positions.clone(), 3).expect("build");
    let bezier = RationalBezier2::new(
        positions
            .iter()
            .map(|p| ControlPoint::unweighted(p.x, p.y))
            .collect(),
    )
    .expect("build");

    let tol = Tolerance::LOOSE;
    for i in 0..=20 {
        let t = f64::from(i) / 20.0;
        assert!(tol.approx_eq_point2(spline.point_at(t), bezier.point_at(t)));
    }
}

#[test]
fn de_boor_matches_cox_de_boor_basis_expansion() {
    let points = vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 2.0),
        Point2::new(2.0, -1.0),
        Point2::new(4.0, 3.0),
        Point2::new(5.0, 1.0),
        Point2::new(7.0, 0.0),
    ];
    let degree = 3;
    let spline = BSpline2::new(points.clone(), degree).expect("build");
    let knots = spline.knots().as_slice().to_vec();

    let tol = Tolerance::LOOSE;
    for i in 1..10 {
        let t = f64::from(i) / 10.0;
        let mut x = 0.0;
        let mut y = 0.0;
        for (j, point) in points.iter().enumerate() {
            let basis = basis_function(j, degree, t, &knots);
            x += point.x * basis;
            y += point.y * basis;
        }
        assert!(tol.approx_eq_point2(spline.point_at(t), Point2::new(x, y)));
    }
}

#[test]
fn repeated_interior_knot_keeps_the_curve_defined() {
    let points = vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 2.0),
        Point2::new(2.0, 2.0),
        Point2::new(3.0, 0.0),
        Point2::new(4.0, 1.0),
    ];
    let knots = KnotVector::from_values(
        5,
        2,
        vec![0.0, 0.0, 0.0, 0.5, 0.5, 1.0, 1.0, 1.0],
    )
    .expect("double interior knot is legal");
    let spline = BSpline2::with_knots(points.clone(), 2, knots).expect("build");

    for i in 0..=10 {
        let t = f64::from(i) / 10.0;
        assert!(spline.point_at(t).is_finite());
    }
    // Full-multiplicity knot: the curve passes through the middle control point.
    assert!(Tolerance::DEFAULT.approx_eq_point2(spline.point_at(0.5), points[2]));
}

#[test]
fn bspline_rejects_too_few_points_for_degree() {
    let points = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)];
    assert!(matches!(
        BSpline2::new(points, 3),
        Err(CurveError::InsufficientControlPoints { min: 4, got: 2 })
    ));
}

#[test]
fn uniform_sampling_covers_both_endpoints() {
    let curve = RationalBezier2::new(weighted_arch()).expect("build");
    let profile = sample_curve_uniform(&curve, 10);

    assert_eq!(profile.len(), 11);
    assert_eq!(profile[0], curve.point_at(0.0));
    assert_eq!(profile[10], curve.point_at(1.0));
}

#[test]
fn uniform_sampling_clamps_subdivisions_to_at_least_one() {
    let curve = RationalBezier2::new(weighted_arch()).expect("build");
    assert_eq!(sample_curve_uniform(&curve, 0).len(), 2);
}
