//! Arena Pong - two-paddle Pong simulated in a bounded 3D arena
//!
//! Core modules:
//! - `sim`: Fixed-step simulation (physics, collisions, AI, scoring)
//! - `session`: Public control API owning the session state
//! - `tuning`: Data-driven game balance
//! - `settings`: Serializable player preferences
//! - `platform`: Key code mapping for host input layers

pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use session::GameSession;
pub use settings::Preferences;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matches the host loop cadence)
    pub const SIM_DT: f64 = 1.0 / 60.0;

    /// Arena dimensions (x = width, y = height, z = depth)
    pub const ARENA_WIDTH: f64 = 40.0;
    pub const ARENA_HEIGHT: f64 = 2.0;
    pub const ARENA_DEPTH: f64 = 30.0;

    /// Paddle box size
    pub const PADDLE_WIDTH: f64 = 1.0;
    pub const PADDLE_HEIGHT: f64 = 1.0;
    pub const PADDLE_DEPTH: f64 = 7.0;
    /// Paddle centre height above the table
    pub const PADDLE_Y: f64 = 0.6;
    /// Paddle travel per tick per held key
    pub const PADDLE_SPEED: f64 = 0.5;

    /// Ball radius (also its resting height)
    pub const BALL_RADIUS: f64 = 0.5;
    /// Opening serve velocity at session start
    pub const OPENING_VELOCITY: [f64; 3] = [0.15, 0.0, 0.15];
    /// Serve speed along x after a round reset (sign is random)
    pub const SERVE_SPEED_X_MIN: f64 = 0.2;
    pub const SERVE_SPEED_X_MAX: f64 = 0.2;
    /// Serve z velocity is drawn from [-spread, spread)
    pub const SERVE_SPREAD_Z: f64 = 0.1;

    /// Lateral spin added per unit of normalized hit offset
    pub const PADDLE_SPIN: f64 = 0.2;
    /// Added to |vel.x| on every paddle hit
    pub const PADDLE_SPEEDUP: f64 = 0.02;

    /// AI extrapolation multiplier applied to the prediction horizon
    pub const AI_LOOKAHEAD_SCALE: f64 = 10.0;
}
