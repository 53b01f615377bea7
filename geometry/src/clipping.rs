//! Line segment clipping against a rect, using the Cohen–Sutherland
//! outcode algorithm.
//! https://en.wikipedia.org/wiki/Cohen%E2%80%93Sutherland_algorithm
//!
//! Lines are rasterized, so the clip box is the closed pixel range
//! `[x, x + w - 1] × [y, y + h - 1]`.

use crate::{saturate, Point, Rect};

type OutCode = u8;

const INSIDE: OutCode = 0;
const BOTTOM: OutCode = 1;
const TOP: OutCode = 2;
const LEFT: OutCode = 4;
const RIGHT: OutCode = 8;

/// Inclusive pixel bounds of a non-empty rect.
#[derive(Debug, Clone, Copy)]
struct ClipBox {
    left: i64,
    top: i64,
    right: i64,
    bottom: i64,
}

impl ClipBox {
    fn of(rect: &Rect) -> Self {
        ClipBox {
            left: rect.x() as i64,
            top: rect.y() as i64,
            right: rect.right_edge() - 1,
            bottom: rect.bottom_edge() - 1,
        }
    }

    fn outcode(&self, x: i64, y: i64) -> OutCode {
        let mut code = INSIDE;
        if y < self.top {
            code |= TOP;
        } else if y > self.bottom {
            code |= BOTTOM;
        }
        if x < self.left {
            code |= LEFT;
        } else if x > self.right {
            code |= RIGHT;
        }
        code
    }
}

/// Value of `a` on the line through `(a1, b1)` and `(a2, b2)` at `b`,
/// truncated toward zero. `b1` and `b2` must differ.
fn interpolate(a1: i64, b1: i64, a2: i64, b2: i64, b: i64) -> i64 {
    let offset = (a2 - a1) as i128 * (b - b1) as i128 / (b2 - b1) as i128;
    a1 + offset as i64
}

impl Rect {
    /// Clips the segment `p1 → p2` to the rect, keeping its direction.
    /// Returns `None` if no part of the segment lies inside.
    pub fn intersection_line(&self, p1: Point, p2: Point) -> Option<(Point, Point)> {
        if self.is_empty() {
            return None;
        }

        let clip_box = ClipBox::of(self);
        let (mut x1, mut y1) = (p1.x as i64, p1.y as i64);
        let (mut x2, mut y2) = (p2.x as i64, p2.y as i64);
        let mut code1 = clip_box.outcode(x1, y1);
        let mut code2 = clip_box.outcode(x2, y2);

        // Each pass moves one endpoint strictly toward the other, so this
        // terminates.
        while code1 | code2 != INSIDE {
            if code1 & code2 != INSIDE {
                log::trace!("line {:?} -> {:?} lies outside {:?}", p1, p2, self);
                return None;
            }

            let code = if code1 != INSIDE { code1 } else { code2 };
            let (x, y) = if code & TOP != 0 {
                let y = clip_box.top;
                (interpolate(x1, y1, x2, y2, y), y)
            } else if code & BOTTOM != 0 {
                let y = clip_box.bottom;
                (interpolate(x1, y1, x2, y2, y), y)
            } else if code & LEFT != 0 {
                let x = clip_box.left;
                (x, interpolate(y1, x1, y2, x2, x))
            } else {
                let x = clip_box.right;
                (x, interpolate(y1, x1, y2, x2, x))
            };

            if code1 != INSIDE {
                (x1, y1) = (x, y);
                code1 = clip_box.outcode(x1, y1);
            } else {
                (x2, y2) = (x, y);
                code2 = clip_box.outcode(x2, y2);
            }
        }

        Some((
            Point::new(saturate(x1), saturate(y1)),
            Point::new(saturate(x2), saturate(y2)),
        ))
    }
}
