// Native tests for the reward tier machine and the progress indicator.

use dino_dash::reward::{ProgressIndicator, RewardState, RewardTier, accept_url};

const THRESHOLDS: [f64; 3] = [1800.0, 2400.0, 3000.0];

#[test]
fn tier_boundaries() {
    let state = RewardState::new(THRESHOLDS);
    assert_eq!(state.tier_for(0.0), None);
    assert_eq!(state.tier_for(1799.0), None);
    assert_eq!(state.tier_for(1800.0), Some(RewardTier::Tier1));
    assert_eq!(state.tier_for(2399.0), Some(RewardTier::Tier1));
    assert_eq!(state.tier_for(2400.0), Some(RewardTier::Tier2));
    assert_eq!(state.tier_for(2999.0), Some(RewardTier::Tier2));
    assert_eq!(state.tier_for(3000.0), Some(RewardTier::Tier3));
    assert_eq!(state.tier_for(9999.0), Some(RewardTier::Tier3));
}

// Polling the same frozen score frame after frame must prompt exactly once.
#[test]
fn tier_prompts_at_most_once_per_run() {
    let mut state = RewardState::new(THRESHOLDS);
    assert_eq!(state.next_prompt(1800.0), Some(RewardTier::Tier1));
    assert_eq!(state.next_prompt(1800.0), None);
    assert_eq!(state.next_prompt(1850.0), None);
}

#[test]
fn higher_tier_can_still_prompt_after_lower() {
    let mut state = RewardState::new(THRESHOLDS);
    assert_eq!(state.next_prompt(1900.0), Some(RewardTier::Tier1));
    assert_eq!(state.next_prompt(2500.0), Some(RewardTier::Tier2));
    assert_eq!(state.next_prompt(2500.0), None);
    assert_eq!(state.next_prompt(3100.0), Some(RewardTier::Tier3));
    assert_eq!(state.next_prompt(3100.0), None);
}

#[test]
fn reset_run_allows_prompting_again() {
    let mut state = RewardState::new(THRESHOLDS);
    assert_eq!(state.next_prompt(3000.0), Some(RewardTier::Tier3));
    state.reset_run();
    assert_eq!(state.next_prompt(3000.0), Some(RewardTier::Tier3));
}

#[test]
fn accept_url_appends_score_query() {
    assert_eq!(
        accept_url("https://giftinformation.rootrotation.com/", 2412),
        "https://giftinformation.rootrotation.com/?score=2412"
    );
}

#[test]
fn progress_ratio_is_score_fraction_clamped() {
    let mut progress = ProgressIndicator::new(3000.0);
    assert_eq!(progress.sample(0.0), 0.0);
    assert_eq!(progress.sample(1500.0), 0.5);
    assert_eq!(progress.sample(3000.0), 1.0);
    assert_eq!(progress.sample(4500.0), 1.0);
}

#[test]
fn start_is_idempotent() {
    let mut progress = ProgressIndicator::new(3000.0);
    assert!(progress.start());
    assert!(!progress.start());
    assert!(progress.is_running());
    progress.stop();
    assert!(!progress.is_running());
    assert!(progress.start());
}

#[test]
fn stop_caches_fill_for_resume() {
    let mut progress = ProgressIndicator::new(3000.0);
    progress.start();
    progress.sample(900.0);
    progress.stop();
    progress.sample(0.0);
    assert_eq!(progress.fill(), 0.0);
    assert_eq!(progress.resume(), 0.3);
}

#[test]
fn reset_clears_fill_and_resume_cache() {
    let mut progress = ProgressIndicator::new(3000.0);
    progress.start();
    progress.sample(1500.0);
    progress.stop();
    progress.reset();
    assert_eq!(progress.fill(), 0.0);
    assert_eq!(progress.resume(), 0.0);
}
