//! The runner. Jump height is variable: the rise continues while the key is
//! held, bounded by the min/max jump heights, then gravity takes over.

use crate::collision::Rect;
use crate::config::{GameConfig, PlayerTuning};
use crate::entity::Entity;
use crate::render::{Painter, PLAYER_COLOR};

pub struct Player {
    tuning: PlayerTuning,
    game_height: f64,
    y: f64,
    jump_pressed: bool,
    jump_in_progress: bool,
    falling: bool,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        let mut p = Self {
            tuning: config.player,
            game_height: config.game_height,
            y: 0.0,
            jump_pressed: false,
            jump_in_progress: false,
            falling: false,
        };
        p.y = p.stand_y();
        p
    }

    // Slight lift keeps the sprite's feet off the ground strip edge.
    fn stand_y(&self) -> f64 {
        self.game_height - self.tuning.height - 1.5
    }

    pub fn press_jump(&mut self) {
        self.jump_pressed = true;
    }

    pub fn release_jump(&mut self) {
        self.jump_pressed = false;
    }

    pub fn on_ground(&self) -> bool {
        self.y >= self.stand_y()
    }

    pub fn hitbox(&self) -> Rect {
        Rect::new(self.tuning.x, self.y, self.tuning.width, self.tuning.height)
    }
}

impl Entity for Player {
    fn update(&mut self, _speed: f64, delta_ms: f64) {
        if self.jump_pressed {
            self.jump_in_progress = true;
        }
        if self.jump_in_progress && !self.falling {
            let forced_rise_above = self.game_height - self.tuning.min_jump_height;
            let ceiling = self.game_height - self.tuning.max_jump_height;
            if self.y > forced_rise_above || (self.y > ceiling && self.jump_pressed) {
                self.y -= self.tuning.jump_speed * delta_ms;
            } else {
                self.falling = true;
            }
        } else if self.y < self.stand_y() {
            self.y += self.tuning.gravity * delta_ms;
            if self.y > self.stand_y() {
                self.y = self.stand_y();
            }
        } else {
            self.falling = false;
            self.jump_in_progress = false;
        }
    }

    fn draw(&self, painter: &mut dyn Painter) {
        painter.fill_rect(
            self.tuning.x,
            self.y,
            self.tuning.width,
            self.tuning.height,
            PLAYER_COLOR,
        );
    }

    fn reset(&mut self) {
        self.y = self.stand_y();
        self.jump_pressed = false;
        self.jump_in_progress = false;
        self.falling = false;
    }
}
