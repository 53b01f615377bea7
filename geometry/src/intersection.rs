use itertools::Itertools;

use crate::{saturate, Point, Rect};

impl Rect {
    /// True when both rects overlap by at least one unit on each axis.
    /// Rects that only share an edge or a corner do not intersect.
    pub fn has_intersection(&self, other: &Rect) -> bool {
        self.intersection(other).is_some()
    }

    /// The region covered by both rects, or `None` if they don't overlap.
    /// A returned rect always has positive width and height.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x = self.x().max(other.x());
        let y = self.y().max(other.y());
        let right = self.right_edge().min(other.right_edge());
        let bottom = self.bottom_edge().min(other.bottom_edge());

        let horizontal_overlap = right > x as i64;
        let vertical_overlap = bottom > y as i64;
        if !(horizontal_overlap && vertical_overlap) {
            return None;
        }

        Some(Rect::new(
            x,
            y,
            saturate(right - x as i64),
            saturate(bottom - y as i64),
        ))
    }

    /// Smallest rect covering both rects. Empty and disjoint inputs are
    /// included as-is.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x().min(other.x());
        let y = self.y().min(other.y());
        let right = self.right_edge().max(other.right_edge());
        let bottom = self.bottom_edge().max(other.bottom_edge());

        Rect::new(
            x,
            y,
            saturate(right - x as i64),
            saturate(bottom - y as i64),
        )
    }

    pub fn contains_point(&self, point: Point) -> bool {
        let horizontal = self.x() <= point.x && (point.x as i64) < self.right_edge();
        let vertical = self.y() <= point.y && (point.y as i64) < self.bottom_edge();

        horizontal && vertical
    }

    /// Smallest rect covering every point, each point counting as one pixel.
    ///
    /// With a `clip` rect, points outside of it are skipped. Returns `None`
    /// if no point is left or the clip rect is empty.
    pub fn enclose_points(points: &[Point], clip: Option<&Rect>) -> Option<Rect> {
        if clip.map_or(false, Rect::is_empty) {
            return None;
        }

        let kept = || {
            points
                .iter()
                .filter(move |p| clip.map_or(true, |c| c.contains_point(**p)))
        };
        let (min_x, max_x) = kept().map(|p| p.x).minmax().into_option()?;
        let (min_y, max_y) = kept().map(|p| p.y).minmax().into_option()?;

        Some(Rect::new(
            min_x,
            min_y,
            saturate(max_x as i64 - min_x as i64 + 1),
            saturate(max_y as i64 - min_y as i64 + 1),
        ))
    }
}
