//! Axis-aligned rectangle geometry for sprites
//!
//! Screen space: origin at the top-left corner, y grows downward.
//! - top/bottom: vertical extent (top < bottom)
//! - left/right: horizontal extent

use glam::Vec2;

/// An axis-aligned rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Build a rect whose bottom edge is centered on `anchor`
    pub fn from_midbottom(anchor: Vec2, w: f32, h: f32) -> Self {
        Self::new(anchor.x - w / 2.0, anchor.y - h, w, h)
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    /// Strict overlap test; rects that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
