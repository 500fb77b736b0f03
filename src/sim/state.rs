//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`SessionState`]. Hosts only
//! ever see [`Snapshot`] copies.

use glam::DVec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Which end of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Defends the -x goal line
    Left,
    /// Defends the +x goal line
    Right,
}

impl Side {
    /// Direction along x the ball travels after this paddle returns it
    #[inline]
    pub fn direction(self) -> f64 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Paddle movement key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
}

impl Key {
    /// Up moves toward -z, Down toward +z
    #[inline]
    pub fn direction(self) -> f64 {
        match self {
            Key::Up => -1.0,
            Key::Down => 1.0,
        }
    }
}

/// Who controls the right paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    TwoPlayer,
    VsAi,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::TwoPlayer => "two-player",
            Mode::VsAi => "vs-ai",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "two-player" | "2p" | "pvp" => Some(Mode::TwoPlayer),
            "vs-ai" | "ai" | "cpu" => Some(Mode::VsAi),
            _ => None,
        }
    }
}

/// AI difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// AI behaviour for one difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Fraction of the remaining distance covered per tick (before the speed cap)
    pub speed: f64,
    /// How far ahead the AI extrapolates the ball's z
    pub prediction: f64,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: DVec3,
    pub vel: DVec3,
}

impl Ball {
    /// Ball at the centre with the opening serve
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Self::centre(tuning),
            vel: DVec3::from_array(tuning.opening_velocity),
        }
    }

    /// Resting position at the arena centre
    #[inline]
    pub fn centre(tuning: &Tuning) -> DVec3 {
        DVec3::new(0.0, tuning.ball_radius, 0.0)
    }

    /// Recentre and draw a fresh serve velocity
    pub fn serve<R: Rng>(&mut self, tuning: &Tuning, rng: &mut R) {
        let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let speed_x = rng.random_range(tuning.serve_speed_x_min..=tuning.serve_speed_x_max);
        let vel_z = (rng.random::<f64>() - 0.5) * 2.0 * tuning.serve_spread_z;

        self.pos = Self::centre(tuning);
        self.vel = DVec3::new(sign * speed_x, 0.0, vel_z);
    }
}

/// A paddle. Only `pos.z` changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub pos: DVec3,
}

impl Paddle {
    pub fn new(side: Side, tuning: &Tuning) -> Self {
        Self {
            side,
            pos: DVec3::new(tuning.paddle_x(side), tuning.paddle_y, 0.0),
        }
    }

    /// Move along z, staying inside the arena
    pub fn shift(&mut self, delta_z: f64, tuning: &Tuning) {
        self.pos.z = tuning.clamp_paddle_z(self.pos.z + delta_z);
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Held movement keys for one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputIntent {
    pub move_up: bool,
    pub move_down: bool,
}

impl InputIntent {
    pub fn set(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Up => self.move_up = pressed,
            Key::Down => self.move_down = pressed,
        }
    }

    /// Net direction along z; both keys held cancel out
    pub fn direction(&self) -> f64 {
        let mut dir = 0.0;
        if self.move_up {
            dir += Key::Up.direction();
        }
        if self.move_down {
            dir += Key::Down.direction();
        }
        dir
    }
}

/// Something that happened during a tick, for audio/UI cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off a side wall
    BounceWall,
    /// Ball was returned by a paddle
    BouncePaddle(Side),
    /// Side scored a point
    Score(Side),
    /// Ball was recentred with a new serve
    RoundReset,
}

/// Complete mutable session state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    pub score: Score,
    pub left_intent: InputIntent,
    pub right_intent: InputIntent,
    pub mode: Mode,
    pub difficulty: Difficulty,
    pub paused: bool,
    /// Simulated (unpaused) ticks so far
    pub time_ticks: u64,
}

impl SessionState {
    /// Fresh session: paused, centred ball, zero score
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            ball: Ball::new(tuning),
            left: Paddle::new(Side::Left, tuning),
            right: Paddle::new(Side::Right, tuning),
            score: Score::default(),
            left_intent: InputIntent::default(),
            right_intent: InputIntent::default(),
            mode: Mode::default(),
            difficulty: Difficulty::default(),
            paused: true,
            time_ticks: 0,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn intent(&self, side: Side) -> &InputIntent {
        match side {
            Side::Left => &self.left_intent,
            Side::Right => &self.right_intent,
        }
    }

    pub fn intent_mut(&mut self, side: Side) -> &mut InputIntent {
        match side {
            Side::Left => &mut self.left_intent,
            Side::Right => &mut self.right_intent,
        }
    }

    /// The AI drives the right paddle in VsAi mode
    pub fn is_ai_controlled(&self, side: Side) -> bool {
        self.mode == Mode::VsAi && side == Side::Right
    }

    /// Recentre the ball with a new serve. Score is untouched.
    pub fn reset_round<R: Rng>(&mut self, tuning: &Tuning, rng: &mut R) {
        self.ball.serve(tuning, rng);
    }

    /// Zero both scores and start a new round
    pub fn reset_match<R: Rng>(&mut self, tuning: &Tuning, rng: &mut R) {
        self.score = Score::default();
        self.reset_round(tuning, rng);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball: self.ball,
            left: self.left,
            right: self.right,
            score: self.score,
            paused: self.paused,
            mode: self.mode,
            difficulty: self.difficulty,
            time_ticks: self.time_ticks,
        }
    }
}

/// Read-only copy of what a renderer needs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    pub score: Score,
    pub paused: bool,
    pub mode: Mode,
    pub difficulty: Difficulty,
    pub time_ticks: u64,
}

/// Output of one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickResult {
    pub snapshot: Snapshot,
    /// Events in the order they occurred
    pub events: Vec<GameEvent>,
}
