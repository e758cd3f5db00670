//! The owned game aggregate and its per-frame step function.
//!
//! All mutable game state lives in [`GameSession`]; the wasm shell only holds
//! it in a thread-local and feeds it timestamps and input events. Time is
//! injected through `frame`/`handle_input`, so the whole state machine runs
//! under native `cargo test` with synthetic clocks.

use crate::collision::collide_with;
use crate::config::GameConfig;
use crate::entity::{Entity, Ground, ObstacleSet, Player, ScoreCounter};
use crate::reward::{self, ProgressIndicator, RewardState, RewardTier};

/// Exactly one phase holds at any time. WaitingToStart -> Running on first
/// input, Running -> GameOver on collision, GameOver -> Running via reset
/// once the restart cooldown has elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    WaitingToStart,
    Running,
    GameOver,
}

/// Keyboard and touch collapse to one primary trigger plus the two prompt
/// answers. Touch presses carry their horizontal position so a pending
/// prompt stays answerable without a keyboard: the left half of the surface
/// accepts, the right half declines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PrimaryDown,
    PrimaryUp,
    /// Touch press at `frac_x` ∈ [0, 1] across the surface width.
    TapDown { frac_x: f64 },
    Accept,
    Decline,
}

/// Side effect the shell must perform on the session's behalf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Navigate(String),
}

pub struct GameSession {
    pub(crate) config: GameConfig,
    phase: GamePhase,
    previous_time: Option<f64>,
    speed: f64,
    pub(crate) ground: Ground,
    pub(crate) obstacles: ObstacleSet,
    pub(crate) player: Player,
    pub(crate) score: ScoreCounter,
    reward: RewardState,
    progress: ProgressIndicator,
    pending_prompt: Option<RewardTier>,
    restart_ready_at: Option<f64>,
}

impl GameSession {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let ground = Ground::new(&config);
        let obstacles = ObstacleSet::new(&config, seed);
        let player = Player::new(&config);
        let score = ScoreCounter::new(&config);
        let reward = RewardState::new(config.reward_thresholds);
        let progress = ProgressIndicator::new(config.progress_max_score);
        let speed = config.speed_start;
        Self {
            config,
            phase: GamePhase::WaitingToStart,
            previous_time: None,
            speed,
            ground,
            obstacles,
            player,
            score,
            reward,
            progress,
            pending_prompt: None,
            restart_ready_at: None,
        }
    }

    /// One step of the frame loop. The first call only records the timestamp;
    /// the delta is undefined on frame 0.
    pub fn frame(&mut self, now_ms: f64) {
        let Some(prev) = self.previous_time else {
            self.previous_time = Some(now_ms);
            return;
        };
        let delta = now_ms - prev;
        self.previous_time = Some(now_ms);

        if self.phase == GamePhase::Running {
            // Ground and obstacles must see the same delta as the player for
            // correct relative collision geometry.
            self.ground.update(self.speed, delta);
            self.obstacles.update(self.speed, delta);
            self.player.update(self.speed, delta);
            self.score.update(self.speed, delta);
            self.speed += delta * self.config.speed_increment;

            if collide_with(
                self.player.hitbox(),
                self.obstacles.hitboxes(),
                self.config.collision_inset,
            ) {
                self.phase = GamePhase::GameOver;
                self.restart_ready_at = Some(now_ms + self.config.restart_cooldown_ms);
                self.score.commit_high();
                self.progress.stop();
            }
        }

        if self.phase == GamePhase::Running {
            self.progress.start();
        }

        // Reward evaluation runs every frame; the per-run prompted guard in
        // RewardState keeps a frozen game-over score from re-prompting.
        if self.phase == GamePhase::GameOver && self.pending_prompt.is_none() {
            self.pending_prompt = self.reward.next_prompt(self.score.value());
        }

        if self.score.value() < 1.0 {
            self.progress.reset();
        }
    }

    /// Routes an input event. A pending prompt captures the primary trigger;
    /// a restart press before the cooldown arms is silently ignored.
    pub fn handle_input(&mut self, event: InputEvent, now_ms: f64) -> Option<Command> {
        match event {
            InputEvent::PrimaryDown => {
                match self.phase {
                    GamePhase::WaitingToStart => self.reset(),
                    GamePhase::Running => self.player.press_jump(),
                    GamePhase::GameOver => {
                        if self.pending_prompt.is_none()
                            && self.restart_ready_at.is_some_and(|t| now_ms >= t)
                        {
                            self.reset();
                        }
                    }
                }
                None
            }
            InputEvent::PrimaryUp => {
                self.player.release_jump();
                None
            }
            InputEvent::TapDown { frac_x } => {
                if self.pending_prompt.is_some() {
                    let answer = if frac_x < 0.5 { InputEvent::Accept } else { InputEvent::Decline };
                    self.handle_input(answer, now_ms)
                } else {
                    self.handle_input(InputEvent::PrimaryDown, now_ms)
                }
            }
            InputEvent::Accept => {
                self.pending_prompt.take().map(|_| {
                    Command::Navigate(reward::accept_url(
                        &self.config.reward_url,
                        self.score.points(),
                    ))
                })
            }
            InputEvent::Decline => {
                if self.pending_prompt.take().is_some() {
                    self.reset();
                }
                None
            }
        }
    }

    /// Back to start-of-run conditions, straight into Running.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Running;
        self.speed = self.config.speed_start;
        self.ground.reset();
        self.obstacles.reset();
        self.player.reset();
        self.score.reset();
        self.reward.reset_run();
        self.pending_prompt = None;
        self.restart_ready_at = None;
    }

    /// Called by the shell's periodic timer, never by the frame loop.
    pub fn sample_progress(&mut self) -> f64 {
        self.progress.sample(self.score.value())
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn score(&self) -> &ScoreCounter {
        &self.score
    }

    pub fn pending_prompt(&self) -> Option<RewardTier> {
        self.pending_prompt
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    pub fn progress(&self) -> &ProgressIndicator {
        &self.progress
    }

    /// True once the post-collision cooldown has elapsed.
    pub fn restart_armed(&self, now_ms: f64) -> bool {
        self.restart_ready_at.is_some_and(|t| now_ms >= t)
    }
}
