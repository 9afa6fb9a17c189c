//! Frame generation from session state

use glam::Vec2;

use super::frame::{Anchor, Frame, SpriteDraw, SpriteKind, TextDraw, colors};
use crate::consts::WIDTH;
use crate::sim::{EntityRef, Session};

/// HUD font size
pub const HUD_TEXT_SIZE: u32 = 22;
/// Vertical position of the HUD row
const HUD_Y: f32 = 15.0;

/// Build the draw list for the current state of a session
pub fn build_frame(session: &Session) -> Frame {
    let mut frame = Frame::new(colors::BACKGROUND);

    frame.sprites.extend(session.entities().map(|entity| SpriteDraw {
        sprite: match entity {
            EntityRef::Player(_) => SpriteKind::Bird,
            EntityRef::Platform(_) => SpriteKind::Star,
        },
        dest: entity.rect(),
    }));

    frame.texts.push(hud_text(
        format!("Score:{}", session.score()),
        Vec2::new(WIDTH / 2.0, HUD_Y),
    ));
    frame.texts.push(hud_text(
        format!("Timer:{}", session.remaining_secs()),
        Vec2::new(50.0, HUD_Y),
    ));
    frame.texts.push(hud_text(
        format!("Best:{}", session.best_score()),
        Vec2::new(580.0, HUD_Y),
    ));

    frame
}

fn hud_text(label: String, at: Vec2) -> TextDraw {
    TextDraw {
        label,
        size: HUD_TEXT_SIZE,
        color: colors::WHITE,
        anchor: Anchor::MidTop(at),
    }
}
