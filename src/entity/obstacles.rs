//! Obstacle spawning and scrolling. New obstacles enter at the right edge on
//! a randomized interval, scroll left with the ground, and are dropped once
//! fully off screen. The active count stays small, so the per-frame collision
//! scan over `hitboxes()` is bounded.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::collision::Rect;
use crate::config::{GameConfig, ObstacleTemplate};
use crate::entity::Entity;
use crate::render::{Painter, OBSTACLE_COLOR};

pub struct Obstacle {
    pub rect: Rect,
}

pub struct ObstacleSet {
    templates: Vec<ObstacleTemplate>,
    obstacles: Vec<Obstacle>,
    rng: SmallRng,
    next_spawn_ms: f64,
    interval_min_ms: f64,
    interval_max_ms: f64,
    scroll_speed: f64,
    game_width: f64,
    game_height: f64,
}

impl ObstacleSet {
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let mut set = Self {
            templates: config.obstacle_templates.clone(),
            obstacles: Vec::new(),
            rng: SmallRng::seed_from_u64(seed),
            next_spawn_ms: 0.0,
            interval_min_ms: config.spawn_interval_min_ms,
            interval_max_ms: config.spawn_interval_max_ms,
            scroll_speed: config.scroll_speed,
            game_width: config.game_width,
            game_height: config.game_height,
        };
        set.schedule_next_spawn();
        set
    }

    fn schedule_next_spawn(&mut self) {
        self.next_spawn_ms = self.rng.gen_range(self.interval_min_ms..=self.interval_max_ms);
    }

    fn spawn(&mut self) {
        let template = self.templates[self.rng.gen_range(0..self.templates.len())];
        self.obstacles.push(Obstacle {
            rect: Rect::new(
                self.game_width,
                self.game_height - template.height - 1.5,
                template.width,
                template.height,
            ),
        });
    }

    pub fn hitboxes(&self) -> impl Iterator<Item = Rect> + '_ {
        self.obstacles.iter().map(|o| o.rect)
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

impl Entity for ObstacleSet {
    fn update(&mut self, speed: f64, delta_ms: f64) {
        self.next_spawn_ms -= delta_ms;
        if self.next_spawn_ms <= 0.0 {
            self.spawn();
            self.schedule_next_spawn();
        }
        for obstacle in &mut self.obstacles {
            obstacle.rect.x -= speed * delta_ms * self.scroll_speed;
        }
        self.obstacles.retain(|o| o.rect.right() > 0.0);
    }

    fn draw(&self, painter: &mut dyn Painter) {
        for obstacle in &self.obstacles {
            let r = obstacle.rect;
            painter.fill_rect(r.x, r.y, r.width, r.height, OBSTACLE_COLOR);
        }
    }

    fn reset(&mut self) {
        self.obstacles.clear();
        self.schedule_next_spawn();
    }
}
