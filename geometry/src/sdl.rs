//! Marshalling to and from the SDL2 rect types used by draw calls.

use crate::{Point, Rect};

impl From<Rect> for sdl2::rect::Rect {
    /// The native rect stores unsigned extents of at least one pixel, so an
    /// empty rect comes out as a 1 pixel wide or tall one.
    fn from(rect: Rect) -> Self {
        sdl2::rect::Rect::new(
            rect.x(),
            rect.y(),
            rect.w().max(0) as u32,
            rect.h().max(0) as u32,
        )
    }
}

impl From<sdl2::rect::Rect> for Rect {
    fn from(rect: sdl2::rect::Rect) -> Self {
        Rect::new(
            rect.x(),
            rect.y(),
            i32::try_from(rect.width()).unwrap_or(i32::MAX),
            i32::try_from(rect.height()).unwrap_or(i32::MAX),
        )
    }
}

impl From<Point> for sdl2::rect::Point {
    fn from(point: Point) -> Self {
        sdl2::rect::Point::new(point.x, point.y)
    }
}

impl From<sdl2::rect::Point> for Point {
    fn from(point: sdl2::rect::Point) -> Self {
        Point::new(point.x(), point.y())
    }
}
