//! Fixed-step simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed timestep only, one call per step
//! - Randomness only through the RNG passed in
//! - No rendering, audio or platform dependencies

pub mod ai;
pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{ball_paddle_overlap, ball_wall_collision, goal_crossed, paddle_bounce};
pub use state::{
    Ball, Difficulty, DifficultyProfile, GameEvent, InputIntent, Key, Mode, Paddle, Score,
    SessionState, Side, Snapshot, TickResult,
};
pub use tick::tick;
