use crate::units::*;

/// A rectangle, specified by two opposite corners in page space
/// (origin at the top-left, y growing downwards).
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rect {
    /// The x-coordinate of the left edge.
    pub x1: Pt,
    /// The y-coordinate of the top edge.
    pub y1: Pt,
    /// The x-coordinate of the right edge.
    pub x2: Pt,
    /// The y-coordinate of the bottom edge.
    pub y2: Pt,
}

impl Rect {
    pub fn new(x1: Pt, y1: Pt, x2: Pt, y2: Pt) -> Rect {
        Rect { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }

    /// Whether the point lies within the rectangle. The left and top edges are
    /// inclusive, the right and bottom edges exclusive, so that adjacent
    /// rectangles never both claim a point.
    pub fn contains(&self, x: Pt, y: Pt) -> bool {
        x >= self.x1 && x < self.x2 && y >= self.y1 && y < self.y2
    }

    /// The same rectangle moved down by `dy`
    pub fn offset_y(&self, dy: Pt) -> Rect {
        Rect {
            x1: self.x1,
            y1: self.y1 + dy,
            x2: self.x2,
            y2: self.y2 + dy,
        }
    }
}
