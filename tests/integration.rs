// Integration tests (native) for the `dino-dash` crate.
// These tests avoid wasm-specific functionality and drive the game session
// with synthetic clocks so they can run under `cargo test` on the host.

use dino_dash::config::GameConfig;
use dino_dash::entity::{Entity, Ground, ObstacleSet, Player};
use dino_dash::reward::{RewardTier, accept_url};
use dino_dash::session::{Command, GamePhase, GameSession, InputEvent};

const FRAME_MS: f64 = 16.0;

/// Deterministic spawns: first obstacle appears 500 ms in, then every 500 ms.
fn deterministic_config() -> GameConfig {
    let mut cfg = GameConfig::default();
    cfg.spawn_interval_min_ms = 500.0;
    cfg.spawn_interval_max_ms = 500.0;
    cfg
}

/// No obstacle will ever spawn; the run can only end by forced means.
fn quiet_config() -> GameConfig {
    let mut cfg = GameConfig::default();
    cfg.spawn_interval_min_ms = 1e9;
    cfg.spawn_interval_max_ms = 1e9;
    cfg
}

fn run_to_game_over(cfg: GameConfig, seed: u64) -> (GameSession, f64) {
    let mut session = GameSession::new(cfg, seed);
    session.frame(0.0);
    session.handle_input(InputEvent::PrimaryDown, 0.0);
    let mut now = 0.0;
    let mut frames = 0;
    while session.phase() == GamePhase::Running {
        now += FRAME_MS;
        session.frame(now);
        frames += 1;
        assert!(frames < 100_000, "no collision after {frames} frames");
    }
    (session, now)
}

#[test]
fn full_run_lifecycle() {
    let mut session = GameSession::new(deterministic_config(), 7);
    assert_eq!(session.phase(), GamePhase::WaitingToStart);

    // Frame 0 only records the timestamp; no state advances.
    session.frame(0.0);
    assert_eq!(session.phase(), GamePhase::WaitingToStart);
    assert_eq!(session.score().points(), 0);

    session.handle_input(InputEvent::PrimaryDown, 0.0);
    assert_eq!(session.phase(), GamePhase::Running);
    assert_eq!(session.speed(), 0.9);
    assert_eq!(session.score().points(), 0);

    let mut now = 0.0;
    for _ in 0..20 {
        now += FRAME_MS;
        session.frame(now);
    }
    assert_eq!(session.phase(), GamePhase::Running);
    assert!(session.speed() > 0.9);
    assert!(session.score().value() > 0.0);
    assert!(session.progress().is_running());

    // The 500 ms spawn eventually scrolls into the player.
    let mut frames = 0;
    while session.phase() == GamePhase::Running {
        now += FRAME_MS;
        session.frame(now);
        frames += 1;
        assert!(frames < 100_000, "no collision after {frames} frames");
    }
    assert_eq!(session.phase(), GamePhase::GameOver);
    assert!(!session.progress().is_running());
    let final_score = session.score().points();
    assert!(final_score > 0);
    assert_eq!(session.score().high_score(), final_score);

    // Score stays frozen while GameOver.
    for _ in 0..10 {
        now += FRAME_MS;
        session.frame(now);
    }
    assert_eq!(session.score().points(), final_score);

    // Restart input is ignored until the cooldown arms.
    assert!(!session.restart_armed(now));
    session.handle_input(InputEvent::PrimaryDown, now);
    assert_eq!(session.phase(), GamePhase::GameOver);

    now += 1000.0;
    session.frame(now);
    assert!(session.restart_armed(now));
    session.handle_input(InputEvent::PrimaryDown, now);
    assert_eq!(session.phase(), GamePhase::Running);
    assert_eq!(session.speed(), 0.9);
    assert_eq!(session.score().points(), 0);
    assert_eq!(session.obstacle_count(), 0);
    // The session high score survives the reset.
    assert_eq!(session.score().high_score(), final_score);
}

#[test]
fn speed_advances_by_delta_times_increment() {
    let cfg = quiet_config();
    let increment = cfg.speed_increment;
    let mut session = GameSession::new(cfg, 1);
    session.frame(0.0);
    session.handle_input(InputEvent::PrimaryDown, 0.0);

    let mut now = 0.0;
    let mut expected = session.speed();
    for delta in [16.0, 33.0, 7.5, 0.0, 100.0] {
        now += delta;
        session.frame(now);
        expected += delta * increment;
        assert_eq!(session.speed(), expected);
    }
}

#[test]
fn speed_is_monotone_while_running() {
    let mut session = GameSession::new(quiet_config(), 1);
    session.frame(0.0);
    session.handle_input(InputEvent::PrimaryDown, 0.0);
    let mut now = 0.0;
    let mut last = session.speed();
    for _ in 0..500 {
        now += FRAME_MS;
        session.frame(now);
        assert!(session.speed() >= last);
        last = session.speed();
    }
}

#[test]
fn score_is_non_decreasing_while_running() {
    let mut session = GameSession::new(quiet_config(), 1);
    session.frame(0.0);
    session.handle_input(InputEvent::PrimaryDown, 0.0);
    let mut now = 0.0;
    let mut last = session.score().value();
    for _ in 0..500 {
        now += FRAME_MS;
        session.frame(now);
        assert!(session.score().value() >= last);
        last = session.score().value();
    }
}

#[test]
fn progress_ratio_tracks_score_fraction() {
    let mut session = GameSession::new(quiet_config(), 1);
    session.frame(0.0);
    assert_eq!(session.sample_progress(), 0.0);

    session.handle_input(InputEvent::PrimaryDown, 0.0);
    // One large delta: 150 s of play puts the score at half of 3000.
    session.frame(150_000.0);
    let ratio = session.sample_progress();
    assert!((ratio - 0.5).abs() < 1e-9, "ratio was {ratio}");

    session.frame(400_000.0);
    assert_eq!(session.sample_progress(), 1.0);
}

#[test]
fn reward_prompt_appears_once_and_accept_navigates() {
    let mut cfg = deterministic_config();
    // Collisions land around score 20-30 with these spawns; thresholds below
    // that exercise the full tier ladder.
    cfg.reward_thresholds = [5.0, 10.0, 15.0];
    let reward_url = cfg.reward_url.clone();
    let (mut session, mut now) = run_to_game_over(cfg, 11);

    assert_eq!(session.pending_prompt(), Some(RewardTier::Tier3));

    // Re-evaluating the frozen score frame after frame does not re-prompt.
    for _ in 0..5 {
        now += FRAME_MS;
        session.frame(now);
    }
    assert_eq!(session.pending_prompt(), Some(RewardTier::Tier3));

    // The pending prompt captures the primary trigger even after the
    // restart cooldown has elapsed.
    now += 2000.0;
    session.frame(now);
    session.handle_input(InputEvent::PrimaryDown, now);
    assert_eq!(session.phase(), GamePhase::GameOver);

    let score = session.score().points();
    let cmd = session.handle_input(InputEvent::Accept, now);
    assert_eq!(cmd, Some(Command::Navigate(accept_url(&reward_url, score))));
    assert_eq!(session.pending_prompt(), None);
}

#[test]
fn reward_prompt_decline_resets_in_place() {
    let mut cfg = deterministic_config();
    cfg.reward_thresholds = [5.0, 10.0, 15.0];
    let (mut session, now) = run_to_game_over(cfg, 11);

    assert!(session.pending_prompt().is_some());
    let cmd = session.handle_input(InputEvent::Decline, now);
    assert_eq!(cmd, None);
    assert_eq!(session.phase(), GamePhase::Running);
    assert_eq!(session.score().points(), 0);
    assert_eq!(session.pending_prompt(), None);
}

// A touch-only player must be able to answer a prompt: plain presses are
// captured while it is pending, but a positioned tap resolves it.
#[test]
fn reward_prompt_is_answerable_by_touch_alone() {
    let mut cfg = deterministic_config();
    cfg.reward_thresholds = [5.0, 10.0, 15.0];
    let (mut session, mut now) = run_to_game_over(cfg, 11);
    assert!(session.pending_prompt().is_some());

    // Plain presses never get past the pending prompt, even long after the
    // restart cooldown.
    for _ in 0..100 {
        now += 2000.0;
        session.frame(now);
        session.handle_input(InputEvent::PrimaryDown, now);
        session.handle_input(InputEvent::PrimaryUp, now);
    }
    assert_eq!(session.phase(), GamePhase::GameOver);
    assert!(session.pending_prompt().is_some());

    // A tap on the right half declines and resumes play in place.
    let cmd = session.handle_input(InputEvent::TapDown { frac_x: 0.8 }, now);
    assert_eq!(cmd, None);
    assert_eq!(session.phase(), GamePhase::Running);
    assert_eq!(session.pending_prompt(), None);
}

#[test]
fn tap_on_left_half_accepts_pending_prompt() {
    let mut cfg = deterministic_config();
    cfg.reward_thresholds = [5.0, 10.0, 15.0];
    let reward_url = cfg.reward_url.clone();
    let (mut session, now) = run_to_game_over(cfg, 11);
    assert!(session.pending_prompt().is_some());

    let score = session.score().points();
    let cmd = session.handle_input(InputEvent::TapDown { frac_x: 0.2 }, now);
    assert_eq!(cmd, Some(Command::Navigate(accept_url(&reward_url, score))));
}

// Without a pending prompt a tap is just the primary trigger.
#[test]
fn tap_acts_as_primary_trigger_outside_prompts() {
    let mut session = GameSession::new(quiet_config(), 1);
    session.frame(0.0);
    assert_eq!(session.phase(), GamePhase::WaitingToStart);
    session.handle_input(InputEvent::TapDown { frac_x: 0.9 }, 0.0);
    assert_eq!(session.phase(), GamePhase::Running);
}

// Entering a fresh run with the fill still at a prior run's value must drop
// the indicator back to zero on the next frame at score < 1.
#[test]
fn frame_at_zero_score_resets_progress_fill() {
    let mut session = GameSession::new(quiet_config(), 1);
    session.frame(0.0);
    session.handle_input(InputEvent::PrimaryDown, 0.0);
    session.frame(400_000.0);
    assert_eq!(session.sample_progress(), 1.0);

    session.reset();
    session.frame(400_016.0);
    assert_eq!(session.progress().fill(), 0.0);
}

#[test]
fn no_prompt_below_first_threshold() {
    // Default thresholds start at 1800; a short run never reaches them.
    let (session, _) = run_to_game_over(deterministic_config(), 3);
    assert!(session.score().value() < 1800.0);
    assert_eq!(session.pending_prompt(), None);
}

// --- Entity behavior ----------------------------------------------------------

#[test]
fn player_jump_rises_and_returns_to_ground() {
    let cfg = GameConfig::default();
    let mut player = Player::new(&cfg);
    assert!(player.on_ground());
    let ground_y = player.hitbox().y;

    player.press_jump();
    player.update(cfg.speed_start, FRAME_MS);
    assert!(player.hitbox().y < ground_y);

    player.release_jump();
    let mut frames = 0;
    while !player.on_ground() {
        player.update(cfg.speed_start, FRAME_MS);
        frames += 1;
        assert!(frames < 1000, "player never landed");
    }
    assert_eq!(player.hitbox().y, ground_y);
}

#[test]
fn ground_scrolls_and_wraps() {
    let cfg = GameConfig::default();
    let mut ground = Ground::new(&cfg);
    assert_eq!(ground.offset(), 0.0);
    for _ in 0..100_000 {
        ground.update(cfg.speed_start, FRAME_MS);
        assert!(ground.offset() > -cfg.ground_width);
        assert!(ground.offset() <= 0.0);
    }
    ground.reset();
    assert_eq!(ground.offset(), 0.0);
}

#[test]
fn obstacles_spawn_scroll_and_despawn() {
    let cfg = deterministic_config();
    let mut set = ObstacleSet::new(&cfg, 42);
    assert!(set.is_empty());

    // First spawn lands exactly on the interval boundary.
    set.update(1.0, 500.0);
    assert_eq!(set.len(), 1);
    let spawn_x = set.hitboxes().next().unwrap().x;

    set.update(1.0, 100.0);
    let moved_x = set.hitboxes().next().unwrap().x;
    assert!(moved_x < spawn_x);

    // Everything still tracked is on the playfield; off-screen ones are gone.
    for _ in 0..10_000 {
        set.update(1.0, FRAME_MS);
    }
    assert!(set.hitboxes().all(|r| r.right() > 0.0));

    set.reset();
    assert!(set.is_empty());
}
