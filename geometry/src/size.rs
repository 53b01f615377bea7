use serde::{Deserialize, Serialize};

/// Width and height. Negative values are stored as given; a rect built from
/// a non-positive extent is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    pub const fn new(w: i32, h: i32) -> Self {
        Size { w, h }
    }
}

impl From<(i32,)> for Size {
    fn from((w,): (i32,)) -> Self {
        Size::new(w, 0)
    }
}

impl From<(i32, i32)> for Size {
    fn from((w, h): (i32, i32)) -> Self {
        Size::new(w, h)
    }
}
