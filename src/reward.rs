//! Score-gated reward prompting and the out-of-band progress indicator.
//!
//! Prompts fire at most once per tier per run: `RewardState` remembers the
//! highest tier already presented, so re-evaluating the same frozen score on
//! every game-over frame never re-prompts. The indicator has an explicit
//! start/stop lifecycle instead of being re-armed each frame.

/// One of the three score thresholds unlocking a distinct reward prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RewardTier {
    Tier1,
    Tier2,
    Tier3,
}

impl RewardTier {
    /// Index into the configured threshold / label arrays.
    pub fn index(self) -> usize {
        match self {
            RewardTier::Tier1 => 0,
            RewardTier::Tier2 => 1,
            RewardTier::Tier3 => 2,
        }
    }
}

pub struct RewardState {
    thresholds: [f64; 3],
    prompted: Option<RewardTier>,
}

impl RewardState {
    pub fn new(thresholds: [f64; 3]) -> Self {
        Self { thresholds, prompted: None }
    }

    /// Highest tier whose threshold the score has reached, if any.
    pub fn tier_for(&self, score: f64) -> Option<RewardTier> {
        if score >= self.thresholds[2] {
            Some(RewardTier::Tier3)
        } else if score >= self.thresholds[1] {
            Some(RewardTier::Tier2)
        } else if score >= self.thresholds[0] {
            Some(RewardTier::Tier1)
        } else {
            None
        }
    }

    /// Returns the tier to prompt now, marking it as presented. Yields a
    /// given tier at most once per run even when polled every frame.
    pub fn next_prompt(&mut self, score: f64) -> Option<RewardTier> {
        let tier = self.tier_for(score)?;
        if self.prompted.is_some_and(|p| p >= tier) {
            return None;
        }
        self.prompted = Some(tier);
        Some(tier)
    }

    pub fn reset_run(&mut self) {
        self.prompted = None;
    }
}

/// Reward endpoint with the final score appended as a query parameter.
pub fn accept_url(base: &str, score: u64) -> String {
    format!("{base}?score={score}")
}

/// Fill state behind the external progress bar. Sampled on a periodic timer
/// independent of the frame clock; the shell owns the timer itself and keys
/// it off [`ProgressIndicator::start`]/[`ProgressIndicator::stop`].
pub struct ProgressIndicator {
    max_score: f64,
    fill: f64,
    resume_from: f64,
    running: bool,
}

impl ProgressIndicator {
    pub fn new(max_score: f64) -> Self {
        Self { max_score, fill: 0.0, resume_from: 0.0, running: false }
    }

    /// Idempotent: returns true only on the Stopped -> Running transition.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    /// Caches the current fill so a future continue path can resume from it.
    pub fn stop(&mut self) {
        if self.running {
            self.resume_from = self.fill;
            self.running = false;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Records and returns the fill ratio for the given score, clamped to [0, 1].
    pub fn sample(&mut self, score: f64) -> f64 {
        self.fill = (score / self.max_score).clamp(0.0, 1.0);
        self.fill
    }

    pub fn fill(&self) -> f64 {
        self.fill
    }

    pub fn reset(&mut self) {
        self.fill = 0.0;
        self.resume_from = 0.0;
    }

    /// Restores the cached fill from the last stop.
    pub fn resume(&mut self) -> f64 {
        self.fill = self.resume_from;
        self.resume_from = 0.0;
        self.fill
    }
}
