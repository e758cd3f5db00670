//! Elapsed-time score with a session-only high score. The counter only ever
//! advances while the session is running; the session stops calling `update`
//! on game over, which freezes the displayed value.

use crate::config::GameConfig;
use crate::entity::Entity;
use crate::render::{Painter, TEXT_COLOR};

pub struct ScoreCounter {
    score: f64,
    high_score: f64,
    rate: f64,
    game_width: f64,
}

impl ScoreCounter {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            score: 0.0,
            high_score: 0.0,
            rate: config.score_rate,
            game_width: config.game_width,
        }
    }

    pub fn value(&self) -> f64 {
        self.score
    }

    /// Displayed / reported integer score.
    pub fn points(&self) -> u64 {
        self.score as u64
    }

    pub fn high_score(&self) -> u64 {
        self.high_score as u64
    }

    /// Commits the current run into the session high score if it beats it.
    pub fn commit_high(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }
}

impl Entity for ScoreCounter {
    fn update(&mut self, _speed: f64, delta_ms: f64) {
        self.score += delta_ms * self.rate;
    }

    fn draw(&self, painter: &mut dyn Painter) {
        let y = 20.0;
        painter.text(
            &format!("HI {:06}", self.high_score()),
            self.game_width - 170.0,
            y,
            20.0,
            TEXT_COLOR,
        );
        painter.text(
            &format!("{:06}", self.points()),
            self.game_width - 75.0,
            y,
            20.0,
            TEXT_COLOR,
        );
    }

    // High score survives: only the run counter goes back to zero.
    fn reset(&mut self) {
        self.score = 0.0;
    }
}
