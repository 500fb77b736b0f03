//! Data-driven game balance
//!
//! Every number the simulation reads lives in [`Tuning`]. Defaults mirror
//! [`crate::consts`]; hosts may load overrides from JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::state::{Difficulty, DifficultyProfile, Side};

/// Reasons a tuning table is rejected
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be finite (got {value})")]
    NonFinite { field: &'static str, value: f64 },
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("paddle depth {paddle} does not fit in arena depth {arena}")]
    PaddleTooDeep { paddle: f64, arena: f64 },
    #[error("serve speed range is empty ({min} > {max})")]
    EmptyServeRange { min: f64, max: f64 },
}

/// Simulation tuning table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub arena_width: f64,
    pub arena_height: f64,
    pub arena_depth: f64,

    pub paddle_width: f64,
    pub paddle_height: f64,
    pub paddle_depth: f64,
    pub paddle_y: f64,
    pub paddle_speed: f64,

    pub ball_radius: f64,
    pub opening_velocity: [f64; 3],
    pub serve_speed_x_min: f64,
    pub serve_speed_x_max: f64,
    pub serve_spread_z: f64,

    pub paddle_spin: f64,
    pub paddle_speedup: f64,

    pub ai_lookahead_scale: f64,
    pub easy: DifficultyProfile,
    pub medium: DifficultyProfile,
    pub hard: DifficultyProfile,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            arena_depth: ARENA_DEPTH,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_depth: PADDLE_DEPTH,
            paddle_y: PADDLE_Y,
            paddle_speed: PADDLE_SPEED,

            ball_radius: BALL_RADIUS,
            opening_velocity: OPENING_VELOCITY,
            serve_speed_x_min: SERVE_SPEED_X_MIN,
            serve_speed_x_max: SERVE_SPEED_X_MAX,
            serve_spread_z: SERVE_SPREAD_Z,

            paddle_spin: PADDLE_SPIN,
            paddle_speedup: PADDLE_SPEEDUP,

            ai_lookahead_scale: AI_LOOKAHEAD_SCALE,
            easy: DifficultyProfile {
                speed: 0.3,
                prediction: 0.15,
            },
            medium: DifficultyProfile {
                speed: 0.6,
                prediction: 0.3,
            },
            hard: DifficultyProfile {
                speed: 0.9,
                prediction: 0.5,
            },
        }
    }
}

impl Tuning {
    /// Parse and validate a tuning table. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check the table is playable
    pub fn validate(&self) -> Result<(), TuningError> {
        let [open_x, open_y, open_z] = self.opening_velocity;
        let all = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("arena_depth", self.arena_depth),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_depth", self.paddle_depth),
            ("paddle_y", self.paddle_y),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("opening_velocity.x", open_x),
            ("opening_velocity.y", open_y),
            ("opening_velocity.z", open_z),
            ("serve_speed_x_min", self.serve_speed_x_min),
            ("serve_speed_x_max", self.serve_speed_x_max),
            ("serve_spread_z", self.serve_spread_z),
            ("paddle_spin", self.paddle_spin),
            ("paddle_speedup", self.paddle_speedup),
            ("ai_lookahead_scale", self.ai_lookahead_scale),
            ("easy.speed", self.easy.speed),
            ("easy.prediction", self.easy.prediction),
            ("medium.speed", self.medium.speed),
            ("medium.prediction", self.medium.prediction),
            ("hard.speed", self.hard.speed),
            ("hard.prediction", self.hard.prediction),
        ];
        for (field, value) in all {
            if !value.is_finite() {
                return Err(TuningError::NonFinite { field, value });
            }
        }

        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("arena_depth", self.arena_depth),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_depth", self.paddle_depth),
            ("ball_radius", self.ball_radius),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(TuningError::NonPositive { field, value });
            }
        }

        let non_negative = [
            ("paddle_speed", self.paddle_speed),
            ("serve_speed_x_min", self.serve_speed_x_min),
            ("serve_spread_z", self.serve_spread_z),
            ("paddle_spin", self.paddle_spin),
            ("paddle_speedup", self.paddle_speedup),
            ("ai_lookahead_scale", self.ai_lookahead_scale),
            ("easy.speed", self.easy.speed),
            ("medium.speed", self.medium.speed),
            ("hard.speed", self.hard.speed),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(TuningError::Negative { field, value });
            }
        }

        if self.paddle_depth > self.arena_depth {
            return Err(TuningError::PaddleTooDeep {
                paddle: self.paddle_depth,
                arena: self.arena_depth,
            });
        }
        if self.serve_speed_x_min > self.serve_speed_x_max {
            return Err(TuningError::EmptyServeRange {
                min: self.serve_speed_x_min,
                max: self.serve_speed_x_max,
            });
        }
        Ok(())
    }

    /// Goal line distance from the centre along x
    #[inline]
    pub fn half_width(&self) -> f64 {
        self.arena_width / 2.0
    }

    /// Largest |z| the paddle centre may reach
    #[inline]
    pub fn paddle_z_limit(&self) -> f64 {
        self.arena_depth / 2.0 - self.paddle_depth / 2.0
    }

    /// |z| beyond which the ball bounces off a side wall
    #[inline]
    pub fn wall_z_limit(&self) -> f64 {
        self.arena_depth / 2.0 - self.ball_radius
    }

    /// Clamp a paddle centre to the arena's depth bounds
    pub fn clamp_paddle_z(&self, z: f64) -> f64 {
        let limit = self.paddle_z_limit();
        z.clamp(-limit, limit)
    }

    /// Paddle x position: flush with its goal line
    pub fn paddle_x(&self, side: Side) -> f64 {
        let x = self.half_width() - self.paddle_width / 2.0;
        match side {
            Side::Left => -x,
            Side::Right => x,
        }
    }

    /// AI profile for a difficulty level
    pub fn profile(&self, difficulty: Difficulty) -> DifficultyProfile {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}
