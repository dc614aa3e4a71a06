use std::time::Duration;

use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use trireme::driver::SessionDriver;
use trireme::{
    select_random_target, Coordinate, GameSession, Outcome, Phase, RandomStrategy, SessionConfig,
};

/// Play one game with a random stand-in for the human. Returns the finished
/// session.
async fn play_one(seed: u64) -> anyhow::Result<GameSession> {
    let config = SessionConfig {
        settle_delay: Duration::ZERO,
    };
    let session =
        GameSession::with_strategy(config, SmallRng::seed_from_u64(seed), RandomStrategy::new());
    let mut driver = SessionDriver::new(session);
    let mut stand_in = SmallRng::seed_from_u64(seed.wrapping_add(1));

    let session = driver.session_mut();
    session.randomize_player_fleet()?;
    session.confirm_placement()?;
    session.start_battle()?;

    while driver.session().phase() == Phase::InBattle {
        let fired = driver.session().opponent_board().shots();
        // late in a game random sampling can miss the last open cells
        let target = select_random_target(&mut stand_in, &fired)
            .or_else(|| Coordinate::all().find(|c| !fired.get(c.row(), c.col()).unwrap_or(true)))
            .ok_or_else(|| anyhow::anyhow!("no target left on an unfinished board"))?;
        driver.fire(target).await?;
    }
    Ok(driver.into_inner())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u64 = match args.get(2) {
        Some(n) => n.parse()?,
        None => 1,
    };

    let mut results = Vec::new();
    let mut wins = 0u64;
    for i in 0..games {
        let session = play_one(seed.wrapping_add(i * 2)).await?;
        let outcome = session.outcome();
        if outcome == Some(Outcome::Win) {
            wins += 1;
        }
        results.push(json!({
            "seed": seed.wrapping_add(i * 2),
            "winner": match outcome {
                Some(Outcome::Win) => Some("player"),
                Some(Outcome::Lose) => Some("opponent"),
                None => None,
            },
            "stats": session.stats(),
        }));
    }

    let summary = if games == 1 {
        results.remove(0)
    } else {
        json!({
            "games": games,
            "player_wins": wins,
            "opponent_wins": games - wins,
            "results": results,
        })
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
