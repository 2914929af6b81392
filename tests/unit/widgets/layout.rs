use std::sync::Arc;

use super::*;
use crate::testutil::{BLUE, GREEN, RED, assert_frame};
use crate::widgets::Animation;

fn solid(w: i32, h: i32, color: Rgba8) -> WidgetRef {
    Arc::new(Block::new().size(w, h).color(color))
}

#[test]
fn block_without_child_fills_its_size() {
    assert_frame(&Block::new(), Bounds::sized(3, 2), 0, &["...", "..."]);
    assert_frame(
        &Block::new().color(RED),
        Bounds::sized(3, 2),
        0,
        &["rrr", "rrr"],
    );
    assert_frame(
        &Block::new().size(2, 0).color(RED),
        Bounds::sized(5, 3),
        0,
        &["rr", "rr", "rr"],
    );
    assert_frame(
        &Block::new().size(2, 1).color(RED),
        Bounds::sized(5, 5),
        0,
        &["rr"],
    );
}

#[test]
fn block_centers_child_rounding_towards_top_left() {
    let b = Block::new().child(solid(2, 2, RED));
    assert_frame(&b, Bounds::sized(4, 4), 0, &["....", ".rr.", ".rr.", "...."]);
    assert_frame(
        &b,
        Bounds::sized(5, 5),
        0,
        &[".....", ".rr..", ".rr..", ".....", "....."],
    );
    assert_frame(&b, Bounds::sized(4, 2), 0, &[".rr.", ".rr."]);
}

#[test]
fn block_padding_shrinks_child_bounds() {
    let b = Block::new().child(Arc::new(Block::new().color(RED))).padding(1);
    assert_frame(&b, Bounds::sized(4, 4), 0, &["....", ".rr.", ".rr.", "...."]);

    let hidden = Block::new().child(Arc::new(Block::new().color(RED))).padding(3);
    assert_frame(&hidden, Bounds::sized(4, 4), 0, &["....", "....", "....", "...."]);
}

#[test]
fn row_packs_children_left_to_right() {
    let row = Row::new(vec![solid(1, 2, RED), solid(2, 1, GREEN), solid(1, 3, BLUE)]);
    assert_eq!(row.paint_bounds(Bounds::sized(10, 10), 0), Bounds::sized(4, 3));
    assert_frame(
        &row,
        Bounds::sized(10, 10),
        0,
        &["rggb", "r..b", "...b"],
    );
}

#[test]
fn row_is_clamped_to_bounds() {
    let row = Row::new(vec![solid(2, 1, RED), solid(2, 1, GREEN), solid(2, 1, BLUE)]);
    assert_frame(&row, Bounds::sized(3, 2), 0, &["rrg"]);

    let expanded = Row {
        children: vec![solid(1, 1, RED)],
        expanded: true,
    };
    assert_frame(&expanded, Bounds::sized(3, 2), 0, &["r.."]);
}

#[test]
fn column_packs_children_top_to_bottom() {
    let col = Column::new(vec![solid(2, 1, RED), solid(1, 2, GREEN)]);
    assert_frame(&col, Bounds::sized(10, 10), 0, &["rr", "g.", "g."]);
}

#[test]
fn stack_layers_children_in_order() {
    let stack = Stack::new(vec![solid(3, 2, RED), solid(1, 1, GREEN)]);
    assert_frame(&stack, Bounds::sized(10, 10), 0, &["grr", "rrr"]);
    assert_frame(&stack, Bounds::sized(2, 1), 0, &["gr"]);
}

#[test]
fn padding_wraps_child_regardless_of_bounds() {
    let pad = Padding::new(
        solid(3, 3, RED),
        Insets {
            left: 1,
            top: 2,
            right: 3,
            bottom: 4,
        },
    );
    let expected = [
        ".......", ".......", ".rrr...", ".rrr...", ".rrr...", ".......", ".......",
        ".......", ".......",
    ];
    assert_frame(&pad, Bounds::sized(20, 20), 0, &expected);
    assert_frame(&pad, Bounds::sized(4, 4), 0, &expected);
}

#[test]
fn expanded_padding_crops_child() {
    let pad = Padding {
        expanded: true,
        ..Padding::new(solid(3, 3, RED), Insets::uniform(1))
    };
    assert_frame(
        &pad,
        Bounds::sized(7, 7),
        0,
        &[
            ".......", ".rrr...", ".rrr...", ".rrr...", ".......", ".......", ".......",
        ],
    );
    assert_frame(&pad, Bounds::sized(3, 3), 0, &["...", ".r.", "..."]);
}

#[test]
fn padding_color_fills_own_box() {
    let pad = Padding {
        color: BLUE,
        ..Padding::new(solid(1, 1, RED), Insets::uniform(1))
    };
    assert_frame(&pad, Bounds::sized(9, 9), 0, &["bbb", "brb", "bbb"]);
}

#[test]
fn containers_report_max_child_frame_count() {
    let anim: WidgetRef = Arc::new(Animation::new(vec![
        solid(1, 1, RED),
        solid(1, 1, GREEN),
        solid(1, 1, BLUE),
    ]));
    assert_eq!(Row::new(vec![solid(1, 1, RED), anim.clone()]).frame_count(), 3);
    assert_eq!(Column::new(vec![]).frame_count(), 1);
    assert_eq!(Stack::new(vec![anim.clone()]).frame_count(), 3);
    assert_eq!(Block::new().child(anim.clone()).frame_count(), 3);
    assert_eq!(Block::new().frame_count(), 1);
    assert_eq!(Padding::new(anim, Insets::default()).frame_count(), 3);
}
