//! Game entities and their common capability set.
//!
//! Each entity updates in logical coordinates from the shared GameSpeed and
//! frame delta, draws itself through the opaque [`Painter`] seam, and can be
//! restored to its start condition on reset.

use crate::render::Painter;

mod ground;
mod obstacles;
mod player;
mod score;

pub use ground::Ground;
pub use obstacles::{Obstacle, ObstacleSet};
pub use player::Player;
pub use score::ScoreCounter;

pub trait Entity {
    /// Advances the entity by `delta_ms` at the current GameSpeed.
    fn update(&mut self, speed: f64, delta_ms: f64);
    fn draw(&self, painter: &mut dyn Painter);
    /// Restores the entity to its start-of-run condition.
    fn reset(&mut self);
}
