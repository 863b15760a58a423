//! The `Coordinator` struct and its tick loop (§4.7).

use std::collections::HashSet;

use slam_agent::{move_agent, sense, AgentRoster};
use slam_core::{AgentId, Cell, SimClock, Tick};
use slam_env::Environment;
use slam_map::{FrontierSet, SharedMap};
use slam_plan::{plan_move, GoalTable, PathTable, PlanEvent, PlanningView, WaitCounters};

use crate::completion;
use crate::config::SimConfig;
use crate::error::{SimError, SimResult};
use crate::observer::{SimObserver, SimWarning};

/// The tick-driven coordinator: owns the environment, the agent roster, and
/// every piece of shared coordination state (§3 "mutated exclusively by the
/// coordinator").
///
/// Create via [`crate::SimBuilder`].
pub struct Coordinator {
    pub config: SimConfig,
    pub clock: SimClock,
    pub(crate) env: Environment,
    pub(crate) roster: AgentRoster,
    pub(crate) shared: SharedMap,
    pub(crate) reachable: slam_env::ReachableMask,
    pub(crate) frontier: FrontierSet,
    pub(crate) goals: GoalTable,
    pub(crate) paths: PathTable,
    pub(crate) waits: WaitCounters,
}

impl Coordinator {
    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn roster(&self) -> &AgentRoster {
        &self.roster
    }

    pub fn shared_map(&self) -> &SharedMap {
        &self.shared
    }

    pub fn frontier(&self) -> &FrontierSet {
        &self.frontier
    }

    /// `(known_reachable, total_reachable, progress_ratio)`.
    pub fn progress(&self) -> (usize, usize, f64) {
        completion::progress(&self.shared, &self.reachable)
    }

    pub fn is_complete(&self) -> bool {
        completion::is_complete(self.progress().2)
    }

    /// Run from the current tick until completion or timeout.
    ///
    /// Returns `Err(SimError::Timeout)` if `config.timeout_ticks` is set and
    /// exceeded before progress reaches 1.0; the observer still receives
    /// `on_sim_end(tick, false)` before the error is returned.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        log::info!("coordinator run starting at {}", self.clock.current_tick);
        loop {
            if self.is_complete() {
                break;
            }
            let now = self.clock.current_tick;
            if let Some(limit) = self.config.timeout_ticks {
                if now.0 >= limit {
                    let (_, _, ratio) = self.progress();
                    log::warn!("tick {now}: timeout before completion (progress {ratio:.3})");
                    observer.on_warning(&SimWarning::Timeout { tick: now, progress: ratio });
                    observer.on_sim_end(now, false);
                    return Err(SimError::Timeout { tick: now, progress: ratio });
                }
            }
            self.step(observer);
        }
        log::info!("coordinator run completed at {}", self.clock.current_tick);
        observer.on_sim_end(self.clock.current_tick, true);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position, stopping early if
    /// completion is reached. Ignores `timeout_ticks`. Useful for tests and
    /// incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            if self.is_complete() {
                break;
            }
            self.step(observer);
        }
    }

    /// Process exactly one tick and advance the clock. Returns the number of
    /// agents activated or moved this tick.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> usize {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let woken = self.process_tick(now, observer);
        observer.on_tick_end(now, woken);
        let (_, _, ratio) = self.progress();
        observer.on_snapshot(now, &self.shared, &self.roster, &self.frontier, ratio);
        self.clock.advance();
        woken
    }

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> usize {
        let mut activity_count = 0;

        // ── Step 1: activation ────────────────────────────────────────────
        // Every agent due to enter senses its entry cell immediately, per
        // §4.7's "activate and immediately perform one sense".
        for i in 0..self.roster.len() {
            let id = AgentId(i as u32);
            let activated = self.roster.get_mut(id).activate_if_due(now);
            if activated {
                activity_count += 1;
                let discoveries = sense(self.roster.get_mut(id), &self.env);
                self.shared.merge_observations(&discoveries);
            }
        }

        // ── Step 2: per-agent frontier refresh, plan, move ────────────────
        let mut assigned_goals: HashSet<Cell> = HashSet::new();
        for i in 0..self.roster.len() {
            let id = AgentId(i as u32);
            if !self.roster.get(id).active {
                continue;
            }
            activity_count += 1;

            self.frontier.recompute(&self.shared, &self.reachable);

            let position = self.roster.get(id).position;
            let other_positions = self.roster.active_positions_excluding(id);
            let peer_positions: Vec<Cell> =
                self.roster.agents.iter().filter(|a| a.active && a.id != id).map(|a| a.position).collect();

            let view = PlanningView {
                env: &self.env,
                shared: &self.shared,
                frontier: &self.frontier,
                other_positions: &other_positions,
                peer_positions: &peer_positions,
            };
            let rng = self.roster.rngs.get_mut(id);
            let (direction, event) = plan_move(
                self.config.planner_mode,
                id,
                position,
                &view,
                &mut self.goals,
                &mut self.paths,
                &mut self.waits,
                &mut assigned_goals,
                self.config.max_wait,
                rng,
            );

            match event {
                PlanEvent::None => {}
                PlanEvent::PlanningDeadend => {
                    log::debug!("tick {now}: agent {id} found no path to any frontier candidate");
                    observer.on_warning(&SimWarning::PlanningDeadend { agent: id, tick: now });
                }
                PlanEvent::PeerStandoff => {
                    log::debug!("tick {now}: agent {id} standoff at max_wait, falling back to random walk");
                    observer.on_warning(&SimWarning::PeerStandoff { agent: id, tick: now });
                }
            }

            let agent = self.roster.get_mut(id);
            let discoveries = move_agent(agent, direction, &self.env, &other_positions);
            self.shared.merge_observations(&discoveries);
        }

        activity_count
    }
}
