//! Computer opponent
//!
//! Stateless: each tick the AI looks at the ball, extrapolates its z linearly
//! and eases the paddle toward that point. Wall bounces are not predicted.

use super::state::{Ball, DifficultyProfile, Paddle};
use crate::tuning::Tuning;

/// Where the AI wants its paddle centre to be
pub fn target_z(ball: &Ball, profile: DifficultyProfile, tuning: &Tuning) -> f64 {
    let future_z = ball.pos.z + ball.vel.z * profile.prediction * tuning.ai_lookahead_scale;
    tuning.clamp_paddle_z(future_z)
}

/// Paddle z movement for this tick, capped at the human paddle speed
pub fn paddle_delta(
    ball: &Ball,
    paddle: &Paddle,
    profile: DifficultyProfile,
    tuning: &Tuning,
) -> f64 {
    let target = target_z(ball, profile, tuning);
    let cap = tuning.paddle_speed;
    ((target - paddle.pos.z) * profile.speed).clamp(-cap, cap)
}
