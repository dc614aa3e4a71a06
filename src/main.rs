#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::time::Duration;
#[cfg(feature = "std")]
use trireme::{cli::run_interactive, init_logging, GameSession, RandomStrategy, SessionConfig};
#[cfg(feature = "std")]
use trireme::driver::SessionDriver;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(
            long,
            default_value_t = trireme::DEFAULT_SETTLE_DELAY_MS,
            help = "Pause before the computer answers each shot, in milliseconds"
        )]
        delay_ms: u64,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, delay_ms } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let config = SessionConfig {
                settle_delay: Duration::from_millis(delay_ms),
            };
            let session = GameSession::with_strategy(config, rng, RandomStrategy::new());
            let mut driver = SessionDriver::new(session);

            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            run_interactive(&mut driver, stdin.lock(), stdout.lock()).await?;
            log::info!("goodbye");
        }
    }
    Ok(())
}
