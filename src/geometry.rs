/// Integer screen-space rectangles and colours.
///
/// Coordinates are playfield pixels with the origin at the top-left corner,
/// y growing downward.
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect { x, y, width, height }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    pub fn center(&self) -> (i32, i32) {
        (self.center_x(), self.y + self.height / 2)
    }

    /// Rectangle of the given size whose centre sits on `(cx, cy)`.
    pub fn centered_at(cx: i32, cy: i32, width: i32, height: i32) -> Self {
        Rect::new(cx - width / 2, cy - height / 2, width, height)
    }

    /// True when the two rectangles share at least one pixel.
    /// Touching edges do not count, and empty rectangles never overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains_point(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&Rect::new(9, 9, 5, 5)));
    }

    #[test]
    fn empty_rect_never_overlaps() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.overlaps(&Rect::new(5, 5, 0, 0)));
    }

    #[test]
    fn contains_point_is_half_open() {
        let r = Rect::new(10, 20, 5, 5);
        assert!(r.contains_point(10, 20));
        assert!(r.contains_point(14, 24));
        assert!(!r.contains_point(15, 24));
        assert!(!r.contains_point(14, 25));
    }

    #[test]
    fn centered_at_places_centre() {
        let r = Rect::centered_at(600, 400, 200, 50);
        assert_eq!(r, Rect::new(500, 375, 200, 50));
        assert_eq!(r.center(), (600, 400));
    }
}
