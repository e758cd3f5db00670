//! Tunable game constants gathered into one injectable `GameConfig`.
//!
//! Everything here is expressed in logical units (the 800×200 playfield);
//! the presentation scale is applied only at draw time by the painter.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Width/height template for one obstacle variant.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObstacleTemplate {
    pub width: f64,
    pub height: f64,
}

/// Player geometry and jump tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayerTuning {
    pub x: f64,
    pub width: f64,
    pub height: f64,
    /// Rise rate in units per ms while the jump key is held.
    pub jump_speed: f64,
    /// Fall rate in units per ms once the jump apex is passed.
    pub gravity: f64,
    /// Releasing the key above this height ends the rise early.
    pub min_jump_height: f64,
    /// Hard ceiling for a held jump.
    pub max_jump_height: f64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    pub game_width: f64,
    pub game_height: f64,
    /// GameSpeed at the start of every run.
    pub speed_start: f64,
    /// GameSpeed gain per elapsed millisecond while running.
    pub speed_increment: f64,
    pub player: PlayerTuning,
    pub ground_width: f64,
    pub ground_height: f64,
    /// Scroll rate shared by the ground strip and the obstacles,
    /// multiplied by GameSpeed and the frame delta.
    pub scroll_speed: f64,
    pub obstacle_templates: Vec<ObstacleTemplate>,
    pub spawn_interval_min_ms: f64,
    pub spawn_interval_max_ms: f64,
    /// Score gain per elapsed millisecond while running.
    pub score_rate: f64,
    /// Fraction of each box trimmed per side before the overlap test.
    pub collision_inset: f64,
    /// Delay before a game-over accepts a restart input.
    pub restart_cooldown_ms: f64,
    /// Reward tier score thresholds, ascending.
    pub reward_thresholds: [f64; 3],
    pub reward_labels: [String; 3],
    /// Accepting a prompt navigates here with `?score=<n>` appended.
    pub reward_url: String,
    /// Score at which the progress bar reads 100%.
    pub progress_max_score: f64,
    pub progress_bar_id: String,
    pub progress_interval_ms: i32,
    pub canvas_id: String,
    pub resize_debounce_ms: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            game_width: 800.0,
            game_height: 200.0,
            speed_start: 0.9,
            speed_increment: 0.00002,
            player: PlayerTuning {
                x: 10.0,
                // Sprite assets are 88×94 px drawn at 2/3 size.
                width: 88.0 / 1.5,
                height: 94.0 / 1.5,
                jump_speed: 0.6,
                gravity: 0.4,
                min_jump_height: 150.0,
                max_jump_height: 200.0,
            },
            ground_width: 2400.0,
            ground_height: 24.0,
            scroll_speed: 0.4,
            obstacle_templates: vec![
                ObstacleTemplate { width: 68.0 / 1.5, height: 70.0 / 1.5 },
                ObstacleTemplate { width: 98.0 / 1.5, height: 100.0 / 1.5 },
                ObstacleTemplate { width: 68.0 / 1.5, height: 70.0 / 1.5 },
            ],
            spawn_interval_min_ms: 500.0,
            spawn_interval_max_ms: 2000.0,
            score_rate: 0.01,
            collision_inset: 0.125,
            restart_cooldown_ms: 1000.0,
            reward_thresholds: [1800.0, 2400.0, 3000.0],
            reward_labels: [
                "a 30% Graphic Tee voucher".to_string(),
                "a free Graphic Tee".to_string(),
                "an Art Tee".to_string(),
            ],
            reward_url: "https://giftinformation.rootrotation.com/".to_string(),
            progress_max_score: 3000.0,
            progress_bar_id: "myBar".to_string(),
            progress_interval_ms: 1000,
            canvas_id: "game".to_string(),
            resize_debounce_ms: 500,
        }
    }
}
