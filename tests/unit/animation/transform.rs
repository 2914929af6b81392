use super::*;
use crate::foundation::core::Point;
use crate::testutil::ProbeSurface;

fn assert_point(actual: Point, x: f64, y: f64) {
    assert!(
        (actual.x - x).abs() < 1e-9 && (actual.y - y).abs() < 1e-9,
        "expected ({x}, {y}), got {actual:?}"
    );
}

fn applied(t: Transform, origin: Vec2, rounding: Rounding) -> ProbeSurface {
    let mut s = ProbeSurface::default();
    t.apply(&mut s, origin, rounding);
    s
}

#[test]
fn rotate_interpolation_extrapolates_without_wrapping() {
    let from = Transform::rotate(0.0);
    let to = Transform::rotate(360.0);
    assert_eq!(from.interpolate(&to, 0.25), Some(Transform::rotate(90.0)));
    assert_eq!(from.interpolate(&to, 2.0), Some(Transform::rotate(720.0)));
    assert_eq!(from.interpolate(&to, -1.0), Some(Transform::rotate(-360.0)));
}

#[test]
fn interpolates_matching_lists() {
    let lhs = [
        Transform::translate(0.0, 0.0),
        Transform::scale(1.0, 1.0),
        Transform::rotate(0.0),
    ];
    let rhs = [
        Transform::translate(5.0, 5.0),
        Transform::scale(2.0, 2.0),
        Transform::rotate(180.0),
    ];
    assert_eq!(
        interpolate_transforms(&lhs, &rhs, 0.5),
        Some(vec![
            Transform::translate(2.5, 2.5),
            Transform::scale(1.5, 1.5),
            Transform::rotate(90.0),
        ])
    );
}

#[test]
fn mismatched_kinds_fail_as_a_whole() {
    let lhs = [Transform::scale(1.0, 1.0), Transform::translate(0.0, 0.0)];
    let rhs = [Transform::rotate(90.0), Transform::scale(2.0, 2.0)];
    assert_eq!(interpolate_transforms(&lhs, &rhs, 0.5), None);

    // A later mismatch discards the pairs that did match.
    let lhs = [Transform::translate(0.0, 0.0), Transform::rotate(0.0)];
    let rhs = [Transform::translate(4.0, 4.0), Transform::scale(2.0, 2.0)];
    assert_eq!(interpolate_transforms(&lhs, &rhs, 0.5), None);
}

#[test]
fn empty_lists_interpolate_to_empty() {
    assert_eq!(interpolate_transforms(&[], &[], 0.3), Some(vec![]));
}

#[test]
fn shorter_list_is_padded_with_matching_identities() {
    let long = [
        Transform::translate(5.0, 5.0),
        Transform::scale(2.0, 2.0),
        Transform::rotate(9.0),
        Transform::Matrix(Affine::scale(3.0)),
    ];
    assert_eq!(
        extend_transforms(&long[..1], &long),
        vec![
            Transform::translate(5.0, 5.0),
            Transform::scale(1.0, 1.0),
            Transform::rotate(0.0),
            Transform::Matrix(Affine::IDENTITY),
        ]
    );
    assert_eq!(extend_transforms(&long, &long[..2]), long.to_vec());

    let short = [Transform::translate(2.0, 2.0)];
    let longer = [Transform::translate(4.0, 4.0), Transform::rotate(90.0)];
    let expected = Some(vec![Transform::translate(3.0, 3.0), Transform::rotate(45.0)]);
    assert_eq!(interpolate_transforms(&short, &longer, 0.5), expected);
    assert_eq!(
        interpolate_transforms(&longer, &short, 0.5),
        Some(vec![Transform::translate(3.0, 3.0), Transform::rotate(45.0)])
    );
}

#[test]
fn translate_rounds_components() {
    let origin = Vec2::new(100.0, 100.0);
    let s = applied(Transform::translate(2.4, 2.6), origin, Rounding::Round);
    assert_point(s.transform_point(Point::ZERO), 2.0, 3.0);

    let s = applied(Transform::translate(2.4, 2.6), origin, Rounding::Floor);
    assert_point(s.transform_point(Point::ZERO), 2.0, 2.0);

    let s = applied(Transform::translate(2.4, 2.6), origin, Rounding::None);
    assert_point(s.transform_point(Point::ZERO), 2.4, 2.6);
}

#[test]
fn scale_keeps_origin_fixed() {
    let origin = Vec2::new(5.0, 5.0);
    let s = applied(Transform::scale(2.0, 0.5), origin, Rounding::Round);
    assert_point(s.transform_point(Point::new(5.0, 5.0)), 5.0, 5.0);
    assert_point(s.transform_point(Point::new(6.0, 7.0)), 7.0, 6.0);
}

#[test]
fn rotate_turns_about_origin() {
    let origin = Vec2::new(1.0, 1.0);
    let s = applied(Transform::rotate(90.0), origin, Rounding::Round);
    assert_point(s.transform_point(Point::new(1.0, 1.0)), 1.0, 1.0);
    assert_point(s.transform_point(Point::new(2.0, 1.0)), 1.0, 2.0);
}

#[test]
fn matrix_applies_decomposed_parts() {
    let origin = Vec2::new(10.0, 10.0);
    let s = applied(
        Transform::Matrix(Affine::translate((2.6, -1.2))),
        origin,
        Rounding::Round,
    );
    assert_point(s.transform_point(Point::ZERO), 3.0, -1.0);

    for rounding in [Rounding::Floor, Rounding::Ceil, Rounding::None] {
        let s = applied(Transform::Matrix(Affine::translate((2.6, -1.2))), origin, rounding);
        assert_point(s.transform_point(Point::ZERO), 3.0, -1.0);
    }

    let s = applied(
        Transform::Matrix(Affine::scale(2.0)),
        origin,
        Rounding::Round,
    );
    assert_point(s.transform_point(Point::new(10.0, 10.0)), 10.0, 10.0);
    assert_point(s.transform_point(Point::new(11.0, 10.0)), 12.0, 10.0);
}

#[test]
fn matrix_interpolation_goes_through_decomposition() {
    let from = Transform::Matrix(Affine::IDENTITY);
    let to = Transform::Matrix(Affine::scale(3.0));
    let Some(Transform::Matrix(m)) = from.interpolate(&to, 0.5) else {
        panic!("matrix pair must interpolate");
    };
    let p = m * Point::new(1.0, 1.0);
    assert_point(p, 2.0, 2.0);

    assert_eq!(from.interpolate(&Transform::rotate(1.0), 0.5), None);
}
