//! Draw command types for one frame

use glam::Vec2;

use crate::sim::Rect;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = Color::rgb(10, 120, 150);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
}

/// Which loaded image a sprite draw uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Bird,
    Star,
}

/// Where a text label is pinned
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// The point is the middle of the label's top edge
    MidTop(Vec2),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpriteDraw {
    pub sprite: SpriteKind,
    pub dest: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextDraw {
    pub label: String,
    pub size: u32,
    pub color: Color,
    pub anchor: Anchor,
}

/// Everything the renderer needs to present one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub clear: Color,
    /// Drawn in order, later entries on top
    pub sprites: Vec<SpriteDraw>,
    pub texts: Vec<TextDraw>,
}

impl Frame {
    pub fn new(clear: Color) -> Self {
        Self {
            clear,
            sprites: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn sprite_count(&self, kind: SpriteKind) -> usize {
        self.sprites.iter().filter(|s| s.sprite == kind).count()
    }

    pub fn text(&self, prefix: &str) -> Option<&TextDraw> {
        self.texts.iter().find(|t| t.label.starts_with(prefix))
    }
}
