//! Game session: the public control surface
//!
//! [`GameSession`] owns the [`SessionState`] and the serve RNG and is the
//! only thing that mutates them. Illegal calls are ignored, never fatal.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::SIM_DT;
use crate::sim;
use crate::sim::state::{
    Difficulty, InputIntent, Key, Mode, Score, SessionState, Side, Snapshot, TickResult,
};
use crate::tuning::{Tuning, TuningError};

/// One continuous play session
#[derive(Debug, Clone)]
pub struct GameSession {
    state: SessionState,
    tuning: Tuning,
    rng: Pcg32,
}

impl GameSession {
    /// New paused session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(Tuning::default(), seed)
    }

    /// New paused session with custom tuning
    pub fn with_tuning(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(tuning, seed))
    }

    fn build(tuning: Tuning, seed: u64) -> Self {
        log::info!("New session (seed {seed})");
        Self {
            state: SessionState::new(&tuning),
            tuning,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Press or release a movement key. Ignored for an AI-controlled side.
    pub fn apply_input(&mut self, side: Side, key: Key, pressed: bool) {
        if self.state.is_ai_controlled(side) {
            return;
        }
        self.state.intent_mut(side).set(key, pressed);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.state.paused = paused;
    }

    pub fn toggle_pause(&mut self) {
        self.state.paused = !self.state.paused;
    }

    /// Switch control mode. Score and ball are kept.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.state.mode {
            return;
        }
        log::info!("Mode: {} -> {}", self.state.mode.as_str(), mode.as_str());
        self.state.mode = mode;
        if self.state.is_ai_controlled(Side::Right) {
            // Keys held before the switch must not leak back in later
            self.state.right_intent = InputIntent::default();
        }
    }

    /// Select the AI profile; only consulted in VsAi mode
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty != self.state.difficulty {
            log::info!("Difficulty: {}", difficulty.as_str());
        }
        self.state.difficulty = difficulty;
    }

    /// Recentre the ball with a new serve
    pub fn reset_round(&mut self) {
        self.state.reset_round(&self.tuning, &mut self.rng);
        log::debug!("Round reset");
    }

    /// Zero the score and recentre the ball
    pub fn reset_match(&mut self) {
        self.state.reset_match(&self.tuning, &mut self.rng);
        log::info!("Match reset");
    }

    /// Advance one fixed step.
    ///
    /// `dt` does not scale movement: the host must call at the fixed cadence
    /// of [`SIM_DT`].
    pub fn tick(&mut self, dt: f64) -> TickResult {
        if (dt - SIM_DT).abs() > SIM_DT * 0.5 {
            log::debug!("Off-cadence tick: dt={dt:.4}s, expected {SIM_DT:.4}s");
        }
        let events = sim::tick(&mut self.state, &self.tuning, &mut self.rng);
        TickResult {
            snapshot: self.state.snapshot(),
            events,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.state.difficulty
    }

    pub fn is_paused(&self) -> bool {
        self.state.paused
    }

    pub fn score(&self) -> Score {
        self.state.score
    }
}
