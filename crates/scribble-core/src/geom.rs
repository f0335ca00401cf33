//! Plain geometry: positions, pressure samples, and axis-aligned bounds.

/// A 2D position in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One stroke sample: a position plus the half-width derived from pressure.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Axis-aligned bounding box with a top-left origin.
///
/// Edges are closed: two boxes that only touch still overlap.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_corners(top_left: Vec2, bottom_right: Vec2) -> Self {
        Self {
            x: top_left.x,
            y: top_left.y,
            width: bottom_right.x - top_left.x,
            height: bottom_right.y - top_left.y,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    pub fn overlap(&self, other: &Aabb) -> bool {
        self.x <= other.right()
            && self.y <= other.bottom()
            && self.right() >= other.x
            && self.bottom() >= other.y
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb::from_corners(
            Vec2::new(self.x.min(other.x), self.y.min(other.y)),
            Vec2::new(
                self.right().max(other.right()),
                self.bottom().max(other.bottom()),
            ),
        )
    }

    /// Grow by `px` on every side; a negative `px` shrinks.
    ///
    /// Callers keep width and height non-negative, otherwise overlap
    /// queries against this box are meaningless.
    pub fn expand(&mut self, px: f32) {
        self.x -= px;
        self.y -= px;
        self.width += 2.0 * px;
        self.height += 2.0 * px;
    }
}
