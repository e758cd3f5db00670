//! Scrolling ground strip. Two copies are drawn back to back so the wrap
//! point is never visible.

use crate::config::GameConfig;
use crate::entity::Entity;
use crate::render::{Painter, GROUND_COLOR};

pub struct Ground {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    scroll_speed: f64,
}

impl Ground {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: 0.0,
            y: config.game_height - config.ground_height,
            width: config.ground_width,
            height: config.ground_height,
            scroll_speed: config.scroll_speed,
        }
    }

    pub fn offset(&self) -> f64 {
        self.x
    }
}

impl Entity for Ground {
    fn update(&mut self, speed: f64, delta_ms: f64) {
        self.x -= speed * delta_ms * self.scroll_speed;
        if self.x <= -self.width {
            self.x += self.width;
        }
    }

    fn draw(&self, painter: &mut dyn Painter) {
        painter.fill_rect(self.x, self.y, self.width, self.height, GROUND_COLOR);
        painter.fill_rect(self.x + self.width, self.y, self.width, self.height, GROUND_COLOR);
    }

    fn reset(&mut self) {
        self.x = 0.0;
    }
}
