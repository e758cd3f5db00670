//! Drawing seam between the logical-coordinate simulation and the canvas.
//!
//! Entities draw themselves through the [`Painter`] trait; the only concrete
//! painter multiplies logical coordinates by the viewport scale ratio, so the
//! simulation itself never sees the scale.

use web_sys::CanvasRenderingContext2d;

use crate::entity::Entity;
use crate::session::{GamePhase, GameSession};

pub const BACKGROUND: &str = "#f7f7f7";
pub const GROUND_COLOR: &str = "#8a7a5a";
pub const PLAYER_COLOR: &str = "#4a4a4a";
pub const OBSTACLE_COLOR: &str = "#2e8a3c";
pub const TEXT_COLOR: &str = "#525252";
pub const OVERLAY_COLOR: &str = "rgba(0, 0, 0, 0.55)";

/// Opaque draw surface. Coordinates and sizes are logical units.
pub trait Painter {
    fn clear(&mut self, color: &str);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str);
    fn text(&mut self, text: &str, x: f64, y: f64, size: f64, color: &str);
}

/// Canvas-backed painter applying the presentation scale at draw time.
pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
    scale: f64,
    logical_width: f64,
    logical_height: f64,
}

impl CanvasPainter {
    pub fn new(ctx: CanvasRenderingContext2d, scale: f64, logical_width: f64, logical_height: f64) -> Self {
        Self { ctx, scale, logical_width, logical_height }
    }

    /// Called from the resize path; the next frame redraws at the new scale.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(
            0.0,
            0.0,
            self.logical_width * self.scale,
            self.logical_height * self.scale,
        );
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(
            x * self.scale,
            y * self.scale,
            width * self.scale,
            height * self.scale,
        );
    }

    fn text(&mut self, text: &str, x: f64, y: f64, size: f64, color: &str) {
        self.ctx.set_font(&format!("{}px Verdana", size * self.scale));
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_text(text, x * self.scale, y * self.scale).ok();
    }
}

/// One full frame: clear, entities in draw order, then the phase overlay.
/// The final pre-game-over frame is still rendered because entity draws are
/// unconditional.
pub fn draw_frame(session: &GameSession, painter: &mut dyn Painter) {
    painter.clear(BACKGROUND);
    session.ground.draw(painter);
    session.obstacles.draw(painter);
    session.player.draw(painter);
    session.score.draw(painter);

    let w = session.config.game_width;
    let h = session.config.game_height;
    match session.phase() {
        GamePhase::WaitingToStart => {
            painter.text("Press W or tap to start", w / 14.0, h / 2.0, 36.0, TEXT_COLOR);
        }
        GamePhase::GameOver => {
            painter.text("GAME OVER", w / 4.5, h / 2.0, 70.0, TEXT_COLOR);
            if let Some(tier) = session.pending_prompt() {
                draw_prompt(painter, w, h, session.config.reward_labels[tier.index()].as_str());
            }
        }
        GamePhase::Running => {}
    }
}

fn draw_prompt(painter: &mut dyn Painter, w: f64, h: f64, label: &str) {
    painter.fill_rect(0.0, 0.0, w, h, OVERLAY_COLOR);
    painter.text(&format!("Claim {label}?"), w / 8.0, h / 2.0 - 10.0, 24.0, "#ffffff");
    painter.text(
        "Y or tap left: yes    N or tap right: no",
        w / 8.0,
        h / 2.0 + 24.0,
        18.0,
        "#ffffff",
    );
}
