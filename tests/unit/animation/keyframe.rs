use super::*;
use crate::animation::ease::EASE_IN;

fn kf(p: f64, transforms: Vec<Transform>) -> Keyframe {
    Keyframe::new(Percentage(p), transforms, Curve::Linear)
}

fn percentages(list: &[Keyframe]) -> Vec<f64> {
    list.iter().map(|k| k.percentage.value()).collect()
}

#[test]
fn empty_list_gets_both_boundaries() {
    let list = normalize(Vec::new());
    assert_eq!(percentages(&list), vec![0.0, 1.0]);
    assert!(list.iter().all(|k| k.transforms.is_empty()));
    assert!(list.iter().all(|k| k.curve == Curve::Linear));
}

#[test]
fn sorts_stably_and_adds_missing_boundaries() {
    let a = kf(0.5, vec![Transform::rotate(1.0)]);
    let b = kf(0.5, vec![Transform::rotate(2.0)]);
    let c = kf(0.25, vec![]);
    let list = normalize(vec![a.clone(), c.clone(), b.clone()]);
    assert_eq!(percentages(&list), vec![0.0, 0.25, 0.5, 0.5, 1.0]);
    assert_eq!(list[2], a);
    assert_eq!(list[3], b);
}

#[test]
fn keeps_existing_boundaries() {
    let list = normalize(vec![kf(1.0, vec![]), kf(0.0, vec![Transform::rotate(5.0)])]);
    assert_eq!(percentages(&list), vec![0.0, 1.0]);
    assert_eq!(list[0].transforms, vec![Transform::rotate(5.0)]);
}

#[test]
fn normalize_is_idempotent() {
    let once = normalize(vec![kf(0.3, vec![]), kf(0.6, vec![])]);
    assert_eq!(normalize(once.clone()), once);
}

#[test]
fn find_adjacent_rejects_short_lists_and_out_of_range() {
    let list = normalize(Vec::new());
    assert!(find_adjacent(&list[..1], 0.5).is_none());
    assert!(find_adjacent(&list, -0.01).is_none());
    assert!(find_adjacent(&list, 1.01).is_none());
    assert!(find_adjacent(&list, 0.0).is_some());
    assert!(find_adjacent(&list, 1.0).is_some());
}

#[test]
fn find_adjacent_prefers_first_enclosing_pair() {
    let list = normalize(vec![kf(0.5, vec![Transform::rotate(1.0)])]);
    let (from, to) = find_adjacent(&list, 0.5).unwrap();
    assert_eq!(from.percentage.value(), 0.0);
    assert_eq!(to.percentage.value(), 0.5);

    let (from, to) = find_adjacent(&list, 0.75).unwrap();
    assert_eq!(from.percentage.value(), 0.5);
    assert_eq!(to.percentage.value(), 1.0);
}

#[test]
fn timeline_interpolates_within_segment() {
    let timeline = Timeline::new(vec![
        kf(0.0, vec![Transform::translate(0.0, 0.0)]),
        kf(0.5, vec![Transform::translate(10.0, 0.0)]),
        kf(1.0, vec![Transform::translate(10.0, 20.0)]),
    ]);
    assert_eq!(
        timeline.transforms_at(0.25),
        Some(vec![Transform::translate(5.0, 0.0)])
    );
    assert_eq!(
        timeline.transforms_at(0.75),
        Some(vec![Transform::translate(10.0, 10.0)])
    );
    assert_eq!(timeline.transforms_at(1.5), None);
}

#[test]
fn timeline_eases_with_the_earlier_keyframe_curve() {
    let timeline = Timeline::new(vec![
        Keyframe::new(Percentage(0.0), vec![Transform::rotate(0.0)], EASE_IN),
        Keyframe::new(Percentage(1.0), vec![Transform::rotate(100.0)], Curve::Linear),
    ]);
    let transforms = timeline.transforms_at(0.2192).unwrap();
    let [Transform::Rotate(angle)] = transforms[..] else {
        panic!("expected a single rotation, got {transforms:?}");
    };
    assert!((angle - 10.4).abs() < 1.0, "{angle}");
}

#[test]
fn coincident_keyframes_rescale_to_upper_bound() {
    let timeline = Timeline::new(vec![
        kf(0.0, vec![Transform::translate(0.0, 0.0)]),
        kf(1.0, vec![Transform::translate(8.0, 8.0)]),
        kf(1.0, vec![Transform::translate(100.0, 100.0)]),
    ]);
    // The first enclosing pair is (0%, 100%), so the coincident pair never wins.
    assert_eq!(
        timeline.transforms_at(1.0),
        Some(vec![Transform::translate(8.0, 8.0)])
    );

    let list = [kf(0.5, vec![Transform::rotate(0.0)]), kf(0.5, vec![Transform::rotate(40.0)])];
    let (from, to) = find_adjacent(&list, 0.5).unwrap();
    let local = rescale(from.percentage.value(), to.percentage.value(), 0.0, 1.0, 0.5);
    assert_eq!(local, 1.0);
}

#[test]
fn default_timeline_is_identity() {
    assert_eq!(Timeline::default().transforms_at(0.5), Some(vec![]));
}
