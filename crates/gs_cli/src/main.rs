//! Grid Soccer CLI
//!
//! Runs seeded rollouts of the baseline policies and prints episode summaries.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gs_core::{
    registry, run_episode, AsciiRenderer, ChaserPolicy, EnvConfig, EnvError, GridSoccerEnv,
    Policy, RandomPolicy, RenderSession,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gs_cli")]
#[command(about = "Run two-player grid soccer episodes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered environment ids
    List,

    /// Run episodes with baseline policies
    Run {
        /// Registered environment id
        #[arg(long, default_value = "GridSoccer-6x4")]
        env: String,

        /// JSON config file (overrides --env)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Number of episodes
        #[arg(long, default_value_t = 1)]
        episodes: u32,

        /// RNG seed for the environment and the random policies
        #[arg(long)]
        seed: Option<u64>,

        /// Policy for player one
        #[arg(long, value_enum, default_value_t = PolicyKind::Chaser)]
        p1: PolicyKind,

        /// Policy for player two
        #[arg(long, value_enum, default_value_t = PolicyKind::Random)]
        p2: PolicyKind,

        /// Print a text frame after every step
        #[arg(long, default_value = "false")]
        render: bool,

        /// Emit one JSON summary per episode instead of text
        #[arg(long, default_value = "false")]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyKind {
    Random,
    Chaser,
}

fn build_policy(kind: PolicyKind, env: &GridSoccerEnv, seed: u64) -> Box<dyn Policy> {
    match kind {
        PolicyKind::Random => Box::new(RandomPolicy::with_seed(seed)),
        PolicyKind::Chaser => Box::new(ChaserPolicy::for_env(env)),
    }
}

fn load_env(env_id: &str, config: Option<PathBuf>, seed: Option<u64>) -> Result<GridSoccerEnv> {
    match config {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {}", path.display()))?;
            let mut cfg = EnvConfig::from_json(&text)?;
            if seed.is_some() {
                if cfg.seed.is_some() {
                    warn!("--seed overrides the seed in {}", path.display());
                }
                cfg.seed = seed;
            }
            Ok(GridSoccerEnv::new(cfg)?)
        }
        None => Ok(registry::make(env_id, seed)?),
    }
}

/// Exit status for a failed run: 2 when the environment parameters were
/// rejected, 1 for anything else.
fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<EnvError>() {
        Some(env_err) if env_err.is_config_error() => 2,
        _ => 1,
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::from(exit_status(&err))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List => {
            for spec in registry::REGISTRY {
                println!(
                    "{:<22} {}x{}  max_steps={:<4} {:?}",
                    spec.id, spec.width, spec.height, spec.max_steps, spec.variant
                );
            }
        }

        Commands::Run { env, config, episodes, seed, p1, p2, render, json } => {
            if episodes == 0 {
                bail!("--episodes must be at least 1");
            }

            let mut environment = load_env(&env, config, seed)?;
            let base_seed = seed.unwrap_or(0);
            let mut policy1 = build_policy(p1, &environment, base_seed.wrapping_add(1));
            let mut policy2 = build_policy(p2, &environment, base_seed.wrapping_add(2));
            info!(
                env = %env,
                p1 = policy1.name(),
                p2 = policy2.name(),
                episodes,
                "starting rollouts"
            );

            let mut wins = [0u32; 2];

            for episode in 1..=episodes {
                let summary = if render {
                    let mut renderer = AsciiRenderer::new(io::stdout());
                    let mut session = RenderSession::new(&mut renderer);
                    let mut render_failed = false;
                    run_episode(&mut environment, policy1.as_mut(), policy2.as_mut(), |snap| {
                        if render_failed {
                            return;
                        }
                        if let Err(err) = session.render(snap) {
                            warn!(error = %err, "rendering disabled for this episode");
                            render_failed = true;
                        }
                    })
                } else {
                    run_episode(&mut environment, policy1.as_mut(), policy2.as_mut(), |_| {})
                };

                match summary.reward {
                    1 => wins[0] += 1,
                    -1 => wins[1] += 1,
                    _ => {}
                }

                if json {
                    println!("{}", serde_json::to_string(&summary)?);
                } else {
                    println!(
                        "episode {episode}: steps={} reward={:+} reason={:?} possession_changes={} p1_possession={:.2}",
                        summary.steps,
                        summary.reward,
                        summary.reason,
                        summary.metrics.possession_changes,
                        summary.metrics.player_one_possession_rate(),
                    );
                }
            }

            info!(p1_goals = wins[0], p2_goals = wins[1], "rollouts finished");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_exit_with_two() {
        let err = load_env("GridSoccer-99x99", None, None).unwrap_err();
        assert_eq!(exit_status(&err), 2);

        let err = anyhow::Error::new(EnvError::InvalidMaxSteps(0)).context("loading env");
        assert_eq!(exit_status(&err), 2);
    }

    #[test]
    fn test_other_errors_exit_with_one() {
        let err = anyhow::Error::new(EnvError::InvalidAction { code: 9 });
        assert_eq!(exit_status(&err), 1);

        let err = load_env("ignored", Some(PathBuf::from("/nonexistent/gs.json")), None).unwrap_err();
        assert_eq!(exit_status(&err), 1);
    }
}
