//! Coin Timer headless runner
//!
//! Plays one episode under an autopilot and reports the outcome.

use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::{Parser, ValueEnum};

use coin_timer::sim::{Episode, EpisodeStatus};
use coin_timer::{Autopilot, Config};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Policy {
    Idle,
    Random,
    Chase,
}

#[derive(Debug, Parser)]
#[command(name = "coin-timer", about = "Run a headless Coin Timer episode")]
struct Args {
    /// Episode seed (drives coin respawns)
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Stop after this many ticks even if the episode is still running
    #[arg(long, default_value_t = 10_000)]
    max_steps: u64,

    /// Who presses the buttons
    #[arg(long, value_enum, default_value = "chase")]
    policy: Policy,

    /// Seed for the random policy
    #[arg(long, default_value_t = 0)]
    policy_seed: u64,

    /// JSON config overriding the defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };

    let mut autopilot = match args.policy {
        Policy::Idle => Autopilot::Idle,
        Policy::Random => Autopilot::random(args.policy_seed),
        Policy::Chase => Autopilot::Chase,
    };

    log::info!(
        "Coin Timer starting: seed={} policy={} max_steps={}",
        args.seed,
        autopilot.name(),
        args.max_steps
    );

    let mut episode = Episode::new(config, args.seed);
    while episode.ticks() < args.max_steps {
        let actions = autopilot.actions(episode.config(), episode.state());
        let Some(events) = episode.step(&actions) else {
            break;
        };

        let agent = &episode.state().agent;
        ensure!(
            agent.is_finite(),
            "agent went non-finite at tick {}: {:?}",
            episode.ticks(),
            agent
        );

        if events.pickup {
            log::info!(
                "Pickup #{} at tick {}; timer reset to {:.2}s",
                episode.state().coins_collected,
                episode.ticks(),
                episode.state().time_left
            );
        }
        if episode.status().is_terminal() {
            break;
        }
    }

    let summary = episode.summary();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        let outcome = match summary.status {
            EpisodeStatus::Running => "running (step limit)".to_string(),
            EpisodeStatus::Won => "won".to_string(),
            EpisodeStatus::Failed(reason) => format!("failed ({})", reason.as_str()),
        };
        println!(
            "seed {}: {} after {} ticks, {} coins",
            summary.seed, outcome, summary.ticks, summary.coins_collected
        );
    }

    Ok(())
}
