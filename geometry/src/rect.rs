use serde::{Deserialize, Serialize};

use crate::{saturate, Point, Size};

/// Axis-aligned rectangle. The right and bottom edges are exclusive.
///
/// Fields are private so that `position()` and `size()` always hand out
/// copies; there is no way to hold a view into a rect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    pub const fn from_parts(position: Point, size: Size) -> Self {
        Rect::new(position.x, position.y, size.w, size.h)
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn w(&self) -> i32 {
        self.w
    }

    pub fn h(&self) -> i32 {
        self.h
    }

    pub fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: i32) {
        self.y = y;
    }

    pub fn set_w(&mut self, w: i32) {
        self.w = w;
    }

    pub fn set_h(&mut self, h: i32) {
        self.h = h;
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Moves the rect, keeping its size.
    pub fn set_position(&mut self, position: Point) {
        self.x = position.x;
        self.y = position.y;
    }

    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    /// Resizes the rect, keeping its position.
    pub fn set_size(&mut self, size: Size) {
        self.w = size.w;
        self.h = size.h;
    }

    /// Exclusive right edge, `x + w`.
    pub fn right(&self) -> i32 {
        saturate(self.right_edge())
    }

    /// Exclusive bottom edge, `y + h`.
    pub fn bottom(&self) -> i32 {
        saturate(self.bottom_edge())
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    pub(crate) fn right_edge(&self) -> i64 {
        self.x as i64 + self.w as i64
    }

    pub(crate) fn bottom_edge(&self) -> i64 {
        self.y as i64 + self.h as i64
    }
}

impl From<()> for Rect {
    fn from(_: ()) -> Self {
        Rect::default()
    }
}

impl From<(i32,)> for Rect {
    fn from((x,): (i32,)) -> Self {
        Rect::new(x, 0, 0, 0)
    }
}

impl From<(i32, i32)> for Rect {
    fn from((x, y): (i32, i32)) -> Self {
        Rect::new(x, y, 0, 0)
    }
}

impl From<(i32, i32, i32)> for Rect {
    fn from((x, y, w): (i32, i32, i32)) -> Self {
        Rect::new(x, y, w, 0)
    }
}

impl From<(i32, i32, i32, i32)> for Rect {
    fn from((x, y, w, h): (i32, i32, i32, i32)) -> Self {
        Rect::new(x, y, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{point, rect, size};

    fn fields(r: Rect) -> (i32, i32, i32, i32) {
        (r.x(), r.y(), r.w(), r.h())
    }

    #[test]
    fn default_rect_is_all_zero() {
        assert_eq!(fields(Rect::default()), (0, 0, 0, 0));
        assert_eq!(Rect::from(()), Rect::default());
    }

    #[test]
    fn omitted_trailing_fields_default_to_zero() {
        assert_eq!(fields(Rect::from((1,))), (1, 0, 0, 0));
        assert_eq!(fields(Rect::from((1, 2))), (1, 2, 0, 0));
        assert_eq!(fields(Rect::from((1, 2, 3))), (1, 2, 3, 0));
        assert_eq!(fields(Rect::from((1, 2, 3, 4))), (1, 2, 3, 4));
    }

    #[test]
    fn setters_only_touch_their_own_field() {
        let mut r = rect(1, 2, 3, 4);
        r.set_x(10);
        assert_eq!(fields(r), (10, 2, 3, 4));

        let mut r = rect(1, 2, 3, 4);
        r.set_y(10);
        assert_eq!(fields(r), (1, 10, 3, 4));

        let mut r = rect(1, 2, 3, 4);
        r.set_w(10);
        assert_eq!(fields(r), (1, 2, 10, 4));

        let mut r = rect(1, 2, 3, 4);
        r.set_h(10);
        assert_eq!(fields(r), (1, 2, 3, 10));
    }

    #[test]
    fn position_round_trips() {
        let mut r = rect(1, 2, 3, 4);
        assert_eq!(r.position(), point(1, 2));

        r.set_position(point(10, 20));
        assert_eq!(r.position(), point(10, 20));
        assert_eq!(fields(r), (10, 20, 3, 4));
    }

    #[test]
    fn size_round_trips() {
        let mut r = rect(1, 2, 3, 4);
        assert_eq!(r.size(), size(3, 4));

        r.set_size(size(30, 40));
        assert_eq!(r.size(), size(30, 40));
        assert_eq!(fields(r), (1, 2, 30, 40));
    }

    #[test]
    fn position_is_a_copy() {
        let r = rect(1, 2, 3, 4);
        let mut p = r.position();
        p.x = 99;
        assert_eq!(r.x(), 1);
    }

    #[test]
    fn from_parts_matches_new() {
        assert_eq!(Rect::from_parts(point(1, 2), size(3, 4)), rect(1, 2, 3, 4));
    }

    #[test]
    fn edges_are_exclusive() {
        let r = rect(-10, 5, 20, 7);
        assert_eq!((r.right(), r.bottom()), (10, 12));
    }

    #[test]
    fn edges_saturate_instead_of_wrapping() {
        let r = rect(i32::MAX, i32::MIN, 10, -10);
        assert_eq!((r.right(), r.bottom()), (i32::MAX, i32::MIN));
    }

    #[parameterized(
        w = { 0, 0, 1, 1, -1, 5, -3 },
        h = { 0, 1, 0, 1, 5, -1, -3 },
        expected = { true, true, true, false, true, true, true }
    )]
    fn empty_iff_an_extent_is_not_positive(w: i32, h: i32, expected: bool) {
        assert_eq!(rect(0, 0, w, h).is_empty(), expected);
        assert_eq!(rect(-50, 70, w, h).is_empty(), expected);
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(rect(0, 0, 0, 0), rect(0, 0, 0, 0));
        assert_eq!(rect(0, 0, 0, 1), rect(0, 0, 0, 1));
        assert_eq!(rect(0, 0, 1, 0), rect(0, 0, 1, 0));
        assert_eq!(rect(0, 0, 1, 1), rect(0, 0, 1, 1));
        assert_ne!(rect(1, 2, 3, 4), rect(1, 2, 1, 2));
        assert!(!(rect(1, 2, 3, 4) != rect(1, 2, 3, 4)));
    }

    #[test]
    fn negative_extent_is_not_normalized() {
        // same covered columns, different representation
        assert_ne!(rect(10, 0, -5, 1), rect(5, 0, 5, 1));
    }

    #[test]
    fn serializes_as_plain_fields() {
        let json = serde_json::to_string(&rect(1, -2, 3, 4)).unwrap();
        assert_eq!(json, r#"{"x":1,"y":-2,"w":3,"h":4}"#);
        let back: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rect(1, -2, 3, 4));
    }
}
