//! Rollouts: drive an environment with two policies until the episode ends.

use serde::{Deserialize, Serialize};

use crate::engine::env::GridSoccerEnv;
use crate::engine::reward::{EpisodeMetrics, TerminationReason};
use crate::engine::snapshot::StateSnapshot;
use crate::engine::types::PlayerId;
use crate::policy::{world_action, Policy};

/// Outcome of one episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    pub steps: u32,
    /// Player-one perspective
    pub reward: i32,
    pub terminated: bool,
    pub truncated: bool,
    pub reason: TerminationReason,
    pub metrics: EpisodeMetrics,
}

/// Reset `env`, then step until `terminated` or `truncated`.
///
/// `observer` sees the snapshot after the reset and after every step.
///
/// # Arguments
/// * `env` - Environment to drive; it is reset first
/// * `p1`, `p2` - Policies for the two seats, acting in their own TeamView
/// * `observer` - Callback for renderers and loggers
///
/// # Returns
/// Summary of the finished episode
pub fn run_episode<A, B, F>(
    env: &mut GridSoccerEnv,
    p1: &mut A,
    p2: &mut B,
    mut observer: F,
) -> EpisodeSummary
where
    A: Policy + ?Sized,
    B: Policy + ?Sized,
    F: FnMut(&StateSnapshot),
{
    let [mut obs1, mut obs2] = env.reset();
    observer(&env.snapshot());

    loop {
        let a1 = world_action(PlayerId::One, p1.act(&obs1));
        let a2 = world_action(PlayerId::Two, p2.act(&obs2));
        let result = env.step(a1, a2);
        observer(&env.snapshot());

        [obs1, obs2] = result.observations;
        if result.is_done() {
            let metrics = env.metrics().clone();
            return EpisodeSummary {
                steps: env.step_count(),
                reward: metrics.cumulative_reward,
                terminated: result.terminated,
                truncated: result.truncated,
                reason: metrics.termination_reason,
                metrics,
            };
        }
    }
}
