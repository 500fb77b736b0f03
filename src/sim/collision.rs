//! Collision detection and response
//!
//! Pure functions over positions and velocities. Detection always uses the
//! post-move ball position; there is no swept test, so a fast ball can skip
//! through a paddle in one step.

use glam::DVec3;

use super::state::Side;
use crate::tuning::Tuning;

/// Whether the ball is past a side wall
#[inline]
pub fn ball_wall_collision(ball_pos: DVec3, tuning: &Tuning) -> bool {
    ball_pos.z.abs() > tuning.wall_z_limit()
}

/// Wall response: z velocity flips, nothing else changes
#[inline]
pub fn reflect_off_wall(vel: DVec3) -> DVec3 {
    DVec3::new(vel.x, vel.y, -vel.z)
}

/// Axis-aligned overlap test between the ball and a paddle box (x and z only)
pub fn ball_paddle_overlap(ball_pos: DVec3, paddle_pos: DVec3, tuning: &Tuning) -> bool {
    let reach_x = tuning.paddle_width / 2.0 + tuning.ball_radius;
    let reach_z = tuning.paddle_depth / 2.0 + tuning.ball_radius;

    (ball_pos.x - paddle_pos.x).abs() < reach_x && (ball_pos.z - paddle_pos.z).abs() < reach_z
}

/// Where along the paddle face the ball struck, -1 at the Up edge, +1 at the
/// Down edge. Not clamped: the overlap test reaches a ball radius past the face.
#[inline]
pub fn normalized_hit(ball_z: f64, paddle_z: f64, tuning: &Tuning) -> f64 {
    (ball_z - paddle_z) / (tuning.paddle_depth / 2.0)
}

/// Velocity after `side`'s paddle returns the ball
///
/// Off-centre hits add spin along z. The x speed grows by
/// `paddle_speedup` on every hit with no upper bound.
pub fn paddle_bounce(
    ball_pos: DVec3,
    vel: DVec3,
    paddle_pos: DVec3,
    side: Side,
    tuning: &Tuning,
) -> DVec3 {
    let hit = normalized_hit(ball_pos.z, paddle_pos.z, tuning);
    DVec3::new(
        side.direction() * (vel.x.abs() + tuning.paddle_speedup),
        vel.y,
        vel.z + hit * tuning.paddle_spin,
    )
}

/// Side that scores if the ball has crossed a goal line.
/// The +x line (Left scores) is checked first.
pub fn goal_crossed(ball_pos: DVec3, tuning: &Tuning) -> Option<Side> {
    let half_width = tuning.half_width();
    if ball_pos.x > half_width {
        Some(Side::Left)
    } else if ball_pos.x < -half_width {
        Some(Side::Right)
    } else {
        None
    }
}
