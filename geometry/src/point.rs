use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

impl From<(i32,)> for Point {
    fn from((x,): (i32,)) -> Self {
        Point::new(x, 0)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl From<glam::IVec2> for Point {
    fn from(v: glam::IVec2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for glam::IVec2 {
    fn from(p: Point) -> Self {
        glam::ivec2(p.x, p.y)
    }
}
