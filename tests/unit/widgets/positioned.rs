use std::sync::Arc;

use super::*;
use crate::animation::EASE_OUT;
use crate::foundation::core::Rgba8;
use crate::testutil::{GREEN, RED, assert_frame};
use crate::widgets::{Animation, Block};

fn solid(w: i32, h: i32, color: Rgba8) -> WidgetRef {
    Arc::new(Block::new().size(w, h).color(color))
}

#[test]
fn linear_moves_one_pixel_per_frame() {
    let p = AnimatedPositioned::new(solid(4, 3, RED), 6).x(0, 5).y(0, 5);
    assert_eq!(p.frame_count(), 6);

    let b = Bounds::sized(10, 6);
    assert_frame(
        &p,
        b,
        0,
        &[
            "rrrr......",
            "rrrr......",
            "rrrr......",
            "..........",
            "..........",
            "..........",
        ],
    );
    assert_frame(
        &p,
        b,
        2,
        &[
            "..........",
            "..........",
            "..rrrr....",
            "..rrrr....",
            "..rrrr....",
            "..........",
        ],
    );
    let last = [
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        ".....rrrr.",
    ];
    for frame in [5, 6, 7] {
        assert_frame(&p, b, frame, &last);
    }
}

#[test]
fn ease_out_decelerates_into_place() {
    let p = AnimatedPositioned::new(solid(2, 2, GREEN), 10)
        .x(-3, 4)
        .y(1, 1)
        .curve(EASE_OUT);

    let xs: Vec<_> = (0..10).map(|f| p.position(f).0).collect();
    assert_eq!(xs, [-3, 1, 2, 3, 3, 4, 4, 4, 4, 4]);
    assert!((0..10).all(|f| p.position(f).1 == 1));

    let b = Bounds::sized(10, 4);
    assert_frame(&p, b, 0, &["..........", "..........", "..........", ".........."]);
    assert_frame(&p, b, 1, &["..........", ".gg.......", ".gg.......", ".........."]);
    assert_frame(&p, b, 9, &["..........", "....gg....", "....gg....", ".........."]);
}

#[test]
fn delay_and_hold_pad_the_motion() {
    let p = AnimatedPositioned::new(solid(1, 2, GREEN), 5)
        .x(0, 4)
        .delay(3)
        .hold(2);
    assert_eq!(p.frame_count(), 10);

    let expected = [0, 0, 0, 0, 1, 2, 3, 4, 4, 4, 4];
    for (frame, x) in expected.into_iter().enumerate() {
        assert_eq!(p.position(frame), (x, 0), "frame {frame}");
    }
    assert_eq!(p.position(101_212), (4, 0));
    assert_frame(&p, Bounds::sized(5, 2), 6, &["...g.", "...g."]);
}

#[test]
fn child_keeps_animating_while_moving() {
    let child: WidgetRef = Arc::new(Animation::new(vec![solid(2, 2, RED), solid(1, 1, GREEN)]));
    let p = AnimatedPositioned::new(child, 6)
        .x(0, 5)
        .y(5, 0)
        .delay(1)
        .hold(1);
    assert_eq!(p.frame_count(), 8);

    let b = Bounds::sized(10, 6);
    assert_frame(
        &p,
        b,
        3,
        &[
            "..........",
            "..........",
            "..........",
            "..g.......",
            "..........",
            "..........",
        ],
    );
    // Past the hold the child still alternates at the end position.
    assert_frame(
        &p,
        b,
        8,
        &[
            ".....rr...",
            ".....rr...",
            "..........",
            "..........",
            "..........",
            "..........",
        ],
    );
    assert_frame(
        &p,
        b,
        9,
        &[
            ".....g....",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
        ],
    );
}

#[test]
fn zero_duration_jumps_to_the_end() {
    let p = AnimatedPositioned::new(solid(1, 1, RED), 0).x(2, -2).delay(1);
    assert_eq!(p.position(0), (2, 0));
    assert_eq!(p.position(1), (-2, 0));
    assert_eq!(p.frame_count(), 1);
}
