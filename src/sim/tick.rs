//! Fixed timestep simulation tick
//!
//! One call advances the session by exactly one step. The step size is
//! implicit in the per-tick speeds; the host decides the cadence.

use rand::Rng;

use super::ai;
use super::collision::{
    ball_paddle_overlap, ball_wall_collision, goal_crossed, paddle_bounce, reflect_off_wall,
};
use super::state::{GameEvent, SessionState, Side};
use crate::tuning::Tuning;

/// Advance the session by one fixed timestep, returning events in order.
///
/// Does nothing while paused.
pub fn tick<R: Rng>(state: &mut SessionState, tuning: &Tuning, rng: &mut R) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.paused {
        return events;
    }

    // AI decides before anything moves
    let ai_delta = if state.is_ai_controlled(Side::Right) {
        let profile = tuning.profile(state.difficulty);
        Some(ai::paddle_delta(&state.ball, &state.right, profile, tuning))
    } else {
        None
    };

    // Paddles
    let left_delta = state.left_intent.direction() * tuning.paddle_speed;
    state.left.shift(left_delta, tuning);
    let right_delta = ai_delta.unwrap_or(state.right_intent.direction() * tuning.paddle_speed);
    state.right.shift(right_delta, tuning);

    // Ball moves a full step; collisions are judged at the new position
    state.ball.pos += state.ball.vel;

    if ball_wall_collision(state.ball.pos, tuning) {
        state.ball.vel = reflect_off_wall(state.ball.vel);
        log::trace!("wall bounce at z={:.2}", state.ball.pos.z);
        events.push(GameEvent::BounceWall);
    }

    for side in [Side::Left, Side::Right] {
        let paddle_pos = state.paddle(side).pos;
        if ball_paddle_overlap(state.ball.pos, paddle_pos, tuning) {
            state.ball.vel =
                paddle_bounce(state.ball.pos, state.ball.vel, paddle_pos, side, tuning);
            log::trace!("{:?} paddle hit, ball vel x={:.3}", side, state.ball.vel.x);
            events.push(GameEvent::BouncePaddle(side));
        }
    }

    if let Some(scorer) = goal_crossed(state.ball.pos, tuning) {
        state.score.award(scorer);
        events.push(GameEvent::Score(scorer));
        log::debug!(
            "{:?} scores ({} - {})",
            scorer,
            state.score.left,
            state.score.right
        );
        state.reset_round(tuning, rng);
        events.push(GameEvent::RoundReset);
    }

    state.time_ticks += 1;
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Difficulty, Key, Mode};
    use glam::DVec3;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const EPS: f64 = 1e-9;

    fn running_state(tuning: &Tuning) -> SessionState {
        let mut state = SessionState::new(tuning);
        state.paused = false;
        state
    }

    #[test]
    fn test_tick_paused_is_noop() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut state = SessionState::new(&tuning);
        state.left_intent.set(Key::Down, true);
        state.mode = Mode::VsAi;
        let before = state.clone();

        for _ in 0..100 {
            assert!(tick(&mut state, &tuning, &mut rng).is_empty());
        }
        assert_eq!(state, before);
    }

    #[test]
    fn test_score_scenario() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(2);
        let mut state = running_state(&tuning);
        // Keep the right paddle out of the ball's lane
        state.right.pos.z = tuning.paddle_z_limit();
        state.ball.pos = DVec3::new(19.6, 0.5, 0.0);
        state.ball.vel = DVec3::new(0.3, 0.0, 0.0);

        let events = tick(&mut state, &tuning, &mut rng);
        assert!(events.is_empty());
        assert!((state.ball.pos.x - 19.9).abs() < EPS);
        assert_eq!(state.score.left, 0);

        let events = tick(&mut state, &tuning, &mut rng);
        assert_eq!(events, vec![GameEvent::Score(Side::Left), GameEvent::RoundReset]);
        assert_eq!(state.score.left, 1);
        assert_eq!(state.score.right, 0);
        assert_eq!(state.ball.pos, DVec3::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn test_right_scores_on_left_goal() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut state = running_state(&tuning);
        state.left.pos.z = -tuning.paddle_z_limit();
        state.ball.pos = DVec3::new(-19.9, 0.5, 5.0);
        state.ball.vel = DVec3::new(-0.3, 0.0, 0.0);

        let events = tick(&mut state, &tuning, &mut rng);
        assert_eq!(events, vec![GameEvent::Score(Side::Right), GameEvent::RoundReset]);
        assert_eq!(state.score.right, 1);
        assert_eq!(state.score.left, 0);
    }

    #[test]
    fn test_ai_scenario() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(4);
        let mut state = running_state(&tuning);
        state.mode = Mode::VsAi;
        state.difficulty = Difficulty::Medium;
        state.ball.pos = DVec3::new(0.0, 0.5, 10.0);
        state.ball.vel = DVec3::new(0.2, 0.0, 0.1);

        tick(&mut state, &tuning, &mut rng);
        assert!((state.right.pos.z - 0.5).abs() < EPS);
    }

    #[test]
    fn test_ai_ignores_right_intent() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(5);
        let mut state = running_state(&tuning);
        state.mode = Mode::VsAi;
        state.right_intent.set(Key::Up, true);
        state.ball.pos = DVec3::new(0.0, 0.5, 0.0);
        state.ball.vel = DVec3::new(0.2, 0.0, 0.0);

        tick(&mut state, &tuning, &mut rng);
        assert_eq!(state.right.pos.z, 0.0);
    }

    #[test]
    fn test_wall_bounce_event() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(6);
        let mut state = running_state(&tuning);
        state.ball.pos = DVec3::new(0.0, 0.5, 14.4);
        state.ball.vel = DVec3::new(0.2, 0.0, 0.2);

        let events = tick(&mut state, &tuning, &mut rng);
        assert_eq!(events, vec![GameEvent::BounceWall]);
        assert!((state.ball.vel.z + 0.2).abs() < EPS);
        // No positional correction
        assert!((state.ball.pos.z - 14.6).abs() < EPS);

        let events = tick(&mut state, &tuning, &mut rng);
        assert!(events.is_empty());
        assert!((state.ball.vel.z + 0.2).abs() < EPS);
    }

    #[test]
    fn test_paddle_bounce_event() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut state = running_state(&tuning);
        state.ball.pos = DVec3::new(-18.6, 0.5, 1.75);
        state.ball.vel = DVec3::new(-0.3, 0.0, 0.0);

        let events = tick(&mut state, &tuning, &mut rng);
        assert_eq!(events, vec![GameEvent::BouncePaddle(Side::Left)]);
        assert!((state.ball.vel.x - 0.32).abs() < EPS);
        assert!((state.ball.vel.z - 0.1).abs() < EPS);
    }

    #[test]
    fn test_both_paddles_hit_left_first() {
        // Narrow arena: both paddles reach the centre line
        let tuning = Tuning {
            arena_width: 2.0,
            ..Tuning::default()
        };
        let mut rng = Pcg32::seed_from_u64(10);
        let mut state = running_state(&tuning);
        assert_eq!(state.left.pos.x, -0.5);
        assert_eq!(state.right.pos.x, 0.5);
        state.ball.pos = DVec3::new(0.0, 0.5, 0.0);
        state.ball.vel = DVec3::ZERO;

        let events = tick(&mut state, &tuning, &mut rng);
        assert_eq!(
            events,
            vec![
                GameEvent::BouncePaddle(Side::Left),
                GameEvent::BouncePaddle(Side::Right)
            ]
        );
        // Right hit resolves last: ball heads back toward -x
        assert!((state.ball.vel.x + 0.04).abs() < EPS);
    }

    #[test]
    fn test_late_paddle_hit_still_scores() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(8);
        let mut state = running_state(&tuning);
        // Ball ends the step past the goal line but still inside the paddle's reach
        state.ball.pos = DVec3::new(-19.8, 0.5, 0.0);
        state.ball.vel = DVec3::new(-0.3, 0.0, 0.0);

        let events = tick(&mut state, &tuning, &mut rng);
        assert_eq!(
            events,
            vec![
                GameEvent::BouncePaddle(Side::Left),
                GameEvent::Score(Side::Right),
                GameEvent::RoundReset
            ]
        );
    }

    #[test]
    fn test_intent_moves_and_clamps_paddles() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(9);
        let mut state = running_state(&tuning);
        state.left_intent.set(Key::Up, true);
        state.right_intent.set(Key::Down, true);
        state.ball.vel = DVec3::ZERO;

        tick(&mut state, &tuning, &mut rng);
        assert_eq!(state.left.pos.z, -0.5);
        assert_eq!(state.right.pos.z, 0.5);

        for _ in 0..100 {
            tick(&mut state, &tuning, &mut rng);
        }
        assert_eq!(state.left.pos.z, -tuning.paddle_z_limit());
        assert_eq!(state.right.pos.z, tuning.paddle_z_limit());
        assert_eq!(state.time_ticks, 101);
    }

    #[derive(Debug, Clone)]
    enum Command {
        Press(bool, bool, bool),
        Ai(bool),
        Tick,
    }

    fn command() -> impl Strategy<Value = Command> {
        prop_oneof![
            (any::<bool>(), any::<bool>(), any::<bool>())
                .prop_map(|(l, up, p)| Command::Press(l, up, p)),
            any::<bool>().prop_map(Command::Ai),
            Just(Command::Tick),
            Just(Command::Tick),
        ]
    }

    proptest! {
        #[test]
        fn prop_paddles_stay_in_bounds(
            seed in any::<u64>(),
            commands in prop::collection::vec(command(), 0..400),
        ) {
            let tuning = Tuning::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut state = running_state(&tuning);
            state.reset_round(&tuning, &mut rng);
            let limit = tuning.paddle_z_limit();

            for cmd in commands {
                match cmd {
                    Command::Press(left, up, pressed) => {
                        let side = if left { Side::Left } else { Side::Right };
                        let key = if up { Key::Up } else { Key::Down };
                        state.intent_mut(side).set(key, pressed);
                    }
                    Command::Ai(on) => {
                        state.mode = if on { Mode::VsAi } else { Mode::TwoPlayer };
                    }
                    Command::Tick => {
                        let events = tick(&mut state, &tuning, &mut rng);
                        let scores = events
                            .iter()
                            .filter(|e| matches!(e, GameEvent::Score(_)))
                            .count();
                        prop_assert!(scores <= 1);
                    }
                }
                prop_assert!(state.left.pos.z.abs() <= limit);
                prop_assert!(state.right.pos.z.abs() <= limit);
                prop_assert!(state.ball.pos.x.abs() <= tuning.half_width());
            }
        }
    }
}
