use std::sync::Arc;

use super::*;
use crate::foundation::core::Rgba8;
use crate::testutil::{BLUE, GREEN, RED, assert_frame};
use crate::widgets::{Block, Column, Row};

fn solid(w: i32, h: i32, color: Rgba8) -> WidgetRef {
    Arc::new(Block::new().size(w, h).color(color))
}

/// 2x2 grid with a single `fg` pixel at `(x, y)`.
fn dot(x: usize, y: usize, fg: Rgba8) -> WidgetRef {
    let mut rows = [
        vec![solid(1, 1, Rgba8::TRANSPARENT), solid(1, 1, Rgba8::TRANSPARENT)],
        vec![solid(1, 1, Rgba8::TRANSPARENT), solid(1, 1, Rgba8::TRANSPARENT)],
    ];
    rows[y][x] = solid(1, 1, fg);
    let [row0, row1] = rows;
    Arc::new(Column::new(vec![
        Arc::new(Row::new(row0)),
        Arc::new(Row::new(row1)),
    ]))
}

fn circling(fg: Rgba8) -> WidgetRef {
    Arc::new(Animation::new(vec![
        dot(0, 0, fg),
        dot(1, 0, fg),
        dot(1, 1, fg),
        dot(0, 1, fg),
    ]))
}

#[test]
fn sequence_shows_one_child_at_a_time() {
    let seq = Sequence::new(vec![
        solid(3, 3, RED),
        solid(6, 3, GREEN),
        solid(9, 3, BLUE),
    ]);
    let b = Bounds::sized(10, 3);
    assert_eq!(seq.frame_count(), 3);
    assert_frame(&seq, b, 0, &["rrr", "rrr", "rrr"]);
    assert_frame(&seq, b, 1, &["gggggg", "gggggg", "gggggg"]);
    assert_frame(&seq, b, 2, &["bbbbbbbbb", "bbbbbbbbb", "bbbbbbbbb"]);
}

#[test]
fn sequence_plays_animated_children_back_to_back() {
    let seq = Sequence::new(vec![circling(RED), circling(GREEN), circling(BLUE)]);
    assert_eq!(seq.frame_count(), 12);

    let expected = [
        ["r.", ".."],
        [".r", ".."],
        ["..", ".r"],
        ["..", "r."],
        ["g.", ".."],
        [".g", ".."],
        ["..", ".g"],
        ["..", "g."],
        ["b.", ".."],
        [".b", ".."],
        ["..", ".b"],
        ["..", "b."],
    ];
    for (i, rows) in expected.iter().enumerate() {
        assert_frame(&seq, Bounds::sized(2, 2), i, rows);
    }
}

#[test]
fn sequence_freezes_on_last_child() {
    let seq = Sequence::new(vec![solid(1, 1, RED), circling(BLUE)]);
    assert_eq!(seq.frame_count(), 5);
    // Frame 5 is local frame 4 of the last child, which wraps to its first frame.
    assert_frame(&seq, Bounds::sized(2, 2), 5, &["b.", ".."]);
    assert_frame(&seq, Bounds::sized(2, 2), 6, &[".b", ".."]);
}

#[test]
fn empty_sequence_paints_nothing() {
    let seq = Sequence::default();
    assert_eq!(seq.frame_count(), 0);
    assert_eq!(seq.paint_bounds(Bounds::sized(4, 4), 0), Bounds::default());
}

#[test]
fn animation_cycles_through_children() {
    let anim = Animation::new(vec![solid(1, 1, RED), solid(1, 1, GREEN)]);
    assert_eq!(anim.frame_count(), 2);
    let b = Bounds::sized(4, 4);
    assert_frame(&anim, b, 0, &["r"]);
    assert_frame(&anim, b, 1, &["g"]);
    assert_frame(&anim, b, 2, &["r"]);
    assert_frame(&anim, b, 7, &["g"]);

    let empty = Animation::default();
    assert_eq!(empty.frame_count(), 0);
    assert_eq!(empty.paint_bounds(b, 3), Bounds::default());
}
