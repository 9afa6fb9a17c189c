//! Frame building
//!
//! Turns session state into a backend-agnostic list of draw commands. The
//! render collaborator in `host` turns those into pixels.

pub mod builder;
pub mod frame;

pub use builder::build_frame;
pub use frame::{Anchor, Color, Frame, SpriteDraw, SpriteKind, TextDraw, colors};
