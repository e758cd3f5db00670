//! Axis-aligned bounding box collision between the player and the obstacles.
//!
//! Boxes are shrunk by an inset fraction before testing so that grazing a
//! sprite's transparent corner does not end the run. Edge-touching boxes are
//! defined as non-colliding (exclusive bounds).

/// Axis-aligned rectangle in logical units. Origin top-left, y grows down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Shrinks the rect by `frac` of its own size on every side.
    pub fn inset(&self, frac: f64) -> Rect {
        let dx = self.width * frac;
        let dy = self.height * frac;
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            width: (self.width - 2.0 * dx).max(0.0),
            height: (self.height - 2.0 * dy).max(0.0),
        }
    }

    /// Strict overlap test: rectangles that merely share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// True if any obstacle box (after inset) intersects the player box (after
/// inset). Short-circuits on the first hit.
pub fn collide_with<I>(player: Rect, obstacles: I, inset: f64) -> bool
where
    I: IntoIterator<Item = Rect>,
{
    let player = player.inset(inset);
    obstacles.into_iter().any(|o| player.overlaps(&o.inset(inset)))
}
