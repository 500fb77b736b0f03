//! Arena Pong headless driver
//!
//! Runs a session at the fixed cadence with a scripted left player against
//! the AI and logs what happens. Usage: `arena-pong [ticks] [difficulty] [seed]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use arena_pong::GameSession;
    use arena_pong::consts::SIM_DT;
    use arena_pong::platform::handle_key;
    use arena_pong::sim::{Difficulty, GameEvent, Mode, Side};

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let ticks: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(60 * 60);
    let difficulty = args
        .next()
        .and_then(|s| Difficulty::from_str(&s))
        .unwrap_or_default();
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or_else(rand::random::<u64>);

    log::info!(
        "Arena Pong (headless) starting: {} ticks, {} AI",
        ticks,
        difficulty.as_str()
    );

    let mut session = GameSession::new(seed);
    session.set_mode(Mode::VsAi);
    session.set_difficulty(difficulty);
    session.set_paused(false);

    let mut rallies = 0u32;
    for _ in 0..ticks {
        // Scripted player: chase the ball with the w/s keys, with a dead zone
        let snapshot = session.snapshot();
        let gap = snapshot.ball.pos.z - snapshot.left.pos.z;
        handle_key(&mut session, "w", gap < -1.0);
        handle_key(&mut session, "s", gap > 1.0);

        let result = session.tick(SIM_DT);
        for event in &result.events {
            match event {
                GameEvent::Score(side) => log::info!(
                    "{} scores after {} returns (now {})",
                    if *side == Side::Left { "Player" } else { "AI" },
                    rallies,
                    result.snapshot.score.get(*side)
                ),
                GameEvent::BouncePaddle(_) => rallies += 1,
                GameEvent::RoundReset => rallies = 0,
                GameEvent::BounceWall => {}
            }
        }
    }

    let score = session.score();
    println!("Final score: player {} - {} AI", score.left, score.right);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts embed the library directly on the web
}
