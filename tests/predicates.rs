use hemesh2::geometry::Point2;
use hemesh2::kernel::{PredicateError, barycentric, orient2d, point_in_triangle};

fn p(x: f64, y: f64) -> Point2<f64> {
    Point2::new(x, y)
}

#[test]
fn orientation_signs() {
    let (a, b, c) = (p(0.0, 0.0), p(2.0, 0.0), p(0.0, 2.0));
    assert!(orient2d(&a, &b, &c) > 0.0);
    assert!(orient2d(&a, &c, &b) < 0.0);
    assert_eq!(orient2d(&p(0.0, 0.0), &p(1.0, 2.0), &p(2.0, 4.0)), 0.0);
}

#[test]
fn centroid_is_inside_axis_aligned_triangle() {
    let (a, b, c) = (p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0));
    let centroid = p(1.0 / 3.0, 1.0 / 3.0);
    assert_eq!(point_in_triangle(&centroid, &a, &b, &c), Ok(true));
}

#[test]
fn centroid_is_inside_skewed_triangle() {
    let (a, b, c) = (p(-1.3, 0.7), p(4.1, 1.9), p(0.6, 5.2));
    let centroid = p((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0);
    assert_eq!(point_in_triangle(&centroid, &a, &b, &c), Ok(true));
}

#[test]
fn point_outside_hull_is_rejected() {
    let (a, b, c) = (p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0));
    assert_eq!(point_in_triangle(&p(1.0, 1.0), &a, &b, &c), Ok(false));
    assert_eq!(point_in_triangle(&p(-0.1, 0.5), &a, &b, &c), Ok(false));

    let (a, b, c) = (p(-1.3, 0.7), p(4.1, 1.9), p(0.6, 5.2));
    assert_eq!(point_in_triangle(&p(10.0, 10.0), &a, &b, &c), Ok(false));
}

#[test]
fn boundary_points_are_accepted() {
    let (a, b, c) = (p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0));
    // on an edge
    assert_eq!(point_in_triangle(&p(0.5, 0.5), &a, &b, &c), Ok(true));
    // on a vertex
    assert_eq!(point_in_triangle(&a, &a, &b, &c), Ok(true));
}

#[test]
fn clockwise_winding_gives_the_same_answers() {
    let (a, b, c) = (p(0.0, 0.0), p(0.0, 1.0), p(1.0, 0.0));
    assert!(orient2d(&a, &b, &c) < 0.0);
    assert_eq!(
        point_in_triangle(&p(0.25, 0.25), &a, &b, &c),
        Ok(true)
    );
    assert_eq!(point_in_triangle(&p(1.0, 1.0), &a, &b, &c), Ok(false));
}

#[test]
fn collinear_triangle_fails_explicitly() {
    let (a, b, c) = (p(0.0, 0.0), p(1.0, 1.0), p(3.0, 3.0));
    assert_eq!(
        point_in_triangle(&p(2.0, 2.0), &a, &b, &c),
        Err(PredicateError::DegenerateTriangle)
    );
}

#[test]
fn barycentric_coordinates_sum_to_one() {
    let (a, b, c) = (p(0.2, -0.4), p(3.3, 0.1), p(1.0, 2.8));
    let (alpha, beta, gamma) = barycentric(&p(1.4, 0.9), &a, &b, &c).unwrap();
    assert!((alpha + beta + gamma - 1.0).abs() <= 1e-9);
    assert!(alpha >= 0.0 && beta >= 0.0 && gamma >= 0.0);
}
