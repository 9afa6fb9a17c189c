//! Collision and screen-edge checks for rectangular sprites
//!
//! Everything here is a pure predicate over rects; the session decides what
//! to do with the answers.

use super::rect::Rect;
use super::state::Platform;
use crate::consts::{HEIGHT, WIDTH};

/// Height of the line that triggers a camera scroll when the bird rises past it
pub const SCROLL_LINE: f32 = HEIGHT / 4.0;

/// Ids of every platform whose rect overlaps the bird's rect
pub fn platform_hits(player: &Rect, platforms: &[Platform]) -> Vec<u32> {
    platforms
        .iter()
        .filter(|p| player.intersects(&p.rect))
        .map(|p| p.id)
        .collect()
}

/// Bird has risen into the top quarter of the screen
#[inline]
pub fn reached_scroll_line(rect: &Rect) -> bool {
    rect.top() <= SCROLL_LINE
}

/// Rect has dropped out through the bottom edge
#[inline]
pub fn below_screen(rect: &Rect) -> bool {
    rect.bottom() > HEIGHT
}

/// Rect has been scrolled entirely past the bottom of the view
#[inline]
pub fn scrolled_off_bottom(rect: &Rect) -> bool {
    rect.top() >= HEIGHT
}

/// Rect has been scrolled entirely past the top of the view
#[inline]
pub fn scrolled_off_top(rect: &Rect) -> bool {
    rect.bottom() < 0.0
}

/// Whether a rect lies inside the horizontal play field
#[inline]
pub fn within_columns(rect: &Rect) -> bool {
    rect.left() >= 0.0 && rect.right() <= WIDTH
}
