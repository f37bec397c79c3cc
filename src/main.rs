use anyhow::Result;
use boss_raid::{start_game_with, ConfigError, ConsoleReporter, TurnRng};

/// Optional override for a reproducible raid.
const SEED_VAR: &str = "BOSS_RAID_SEED";

fn rng_from_env() -> Result<TurnRng> {
    match std::env::var(SEED_VAR) {
        Ok(raw) => {
            let seed = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidSeed(raw.clone()))?;
            tracing::info!(seed, "using fixed seed");
            Ok(TurnRng::from_seed(seed))
        }
        Err(_) => Ok(TurnRng::new_random()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let rng = rng_from_env()?;
    if let Err(err) = start_game_with(rng, &mut ConsoleReporter) {
        tracing::error!(%err, "raid aborted");
        return Err(err.into());
    }
    Ok(())
}
