//! Integration tests for the coordinator's builder and tick loop.

use slam_core::{SimRng, Tick};
use slam_env::{parse_map, EnvironmentBuilder, Observation};
use slam_plan::PlannerMode;

use crate::config::SimConfig;
use crate::error::SimError;
use crate::observer::{NoopObserver, SimObserver, SimWarning};
use crate::SimBuilder;

fn env_from(text: &str, seed: u64) -> slam_env::Environment {
    let rows = parse_map(text).unwrap();
    let mut rng = SimRng::new(seed);
    EnvironmentBuilder::from_rows(rows).unwrap().build(&mut rng).unwrap()
}

/// Records every callback invocation for assertions.
#[derive(Default)]
struct RecordingObserver {
    tick_starts: usize,
    tick_ends: usize,
    snapshots: usize,
    warnings: Vec<SimWarning>,
    sim_end: Option<(Tick, bool)>,
}

impl SimObserver for RecordingObserver {
    fn on_tick_start(&mut self, _tick: Tick) {
        self.tick_starts += 1;
    }

    fn on_tick_end(&mut self, _tick: Tick, _woken: usize) {
        self.tick_ends += 1;
    }

    fn on_snapshot(
        &mut self,
        _tick: Tick,
        _shared: &slam_map::SharedMap,
        _roster: &slam_agent::AgentRoster,
        _frontier: &slam_map::FrontierSet,
        _progress_ratio: f64,
    ) {
        self.snapshots += 1;
    }

    fn on_warning(&mut self, warning: &SimWarning) {
        self.warnings.push(*warning);
    }

    fn on_sim_end(&mut self, final_tick: Tick, completed: bool) {
        self.sim_end = Some((final_tick, completed));
    }
}

// ── Builder ──────────────────────────────────────────────────────────────────

#[test]
fn builder_rejects_empty_entry_schedule() {
    let env = env_from("0 0\n0 0\n", 1);
    let config = SimConfig::new(Vec::new(), 1);
    let err = SimBuilder::new(config, env).build().unwrap_err();
    assert!(matches!(err, SimError::Config(_)));
}

#[test]
fn builder_places_one_agent_per_schedule_entry_cyclically() {
    // Two entry points, three agents — the third wraps back to the first.
    let env = env_from("2 0 2\n0 0 0\n", 2);
    let config = SimConfig::new(vec![Tick(0), Tick(0), Tick(0)], 2);
    let coordinator = SimBuilder::new(config, env).build().unwrap();

    let entry_points = coordinator.env().entry_points().to_vec();
    assert_eq!(entry_points.len(), 2);
    assert_eq!(coordinator.roster().len(), 3);
    assert_eq!(coordinator.roster().get(slam_core::AgentId(0)).position, entry_points[0]);
    assert_eq!(coordinator.roster().get(slam_core::AgentId(1)).position, entry_points[1]);
    assert_eq!(coordinator.roster().get(slam_core::AgentId(2)).position, entry_points[0]);
}

// ── End-to-end exploration ───────────────────────────────────────────────────

#[test]
fn solo_agent_fully_explores_a_short_corridor() {
    let env = env_from("2 0 0 0 0 0 0 0 0 0\n", 7);
    let mut config = SimConfig::new(vec![Tick(0)], 7);
    config.fov_radius = 1;
    config.timeout_ticks = Some(200);

    let mut coordinator = SimBuilder::new(config, env).build().unwrap();
    let mut observer = NoopObserver;
    coordinator.run(&mut observer).expect("corridor is fully reachable and should complete");
    assert!(coordinator.is_complete());
    let (known, total, ratio) = coordinator.progress();
    assert_eq!(known, total);
    assert!((ratio - 1.0).abs() < f64::EPSILON);
}

#[test]
fn two_agents_split_an_open_room_and_together_finish_it() {
    let env = env_from(
        "2 0 0 0 0 0\n\
         0 0 0 0 0 0\n\
         0 0 0 0 0 0\n\
         0 0 0 0 0 0\n\
         0 0 0 0 0 2\n",
        11,
    );
    let mut config = SimConfig::new(vec![Tick(0), Tick(0)], 11);
    config.fov_radius = 2;
    config.timeout_ticks = Some(500);

    let mut coordinator = SimBuilder::new(config, env).build().unwrap();
    let mut observer = NoopObserver;
    coordinator.run(&mut observer).expect("a fully open room with two agents should complete");
    assert!(coordinator.is_complete());
}

#[test]
fn progress_is_monotonically_non_decreasing_across_ticks() {
    let env = env_from(
        "2 0 0 0 0\n\
         0 0 0 0 0\n\
         0 0 0 0 0\n\
         0 0 0 0 0\n",
        3,
    );
    let mut config = SimConfig::new(vec![Tick(0)], 3);
    config.fov_radius = 1;

    let mut coordinator = SimBuilder::new(config, env).build().unwrap();
    let mut observer = NoopObserver;

    let mut last_known = 0;
    for _ in 0..60 {
        if coordinator.is_complete() {
            break;
        }
        coordinator.step(&mut observer);
        let (known, _, _) = coordinator.progress();
        assert!(known >= last_known, "known-reachable count must never decrease");
        last_known = known;
    }
}

#[test]
fn unreachable_pocket_behind_a_sealed_wall_is_never_observed() {
    // Column 2 is an unbroken wall; column 3 is walled off from the entry
    // side entirely and is excluded from the reachable set. The run should
    // still reach completion without ever seeing the sealed-off column.
    let env = env_from(
        "2 0 1 0\n\
         0 0 1 0\n\
         0 0 1 0\n",
        5,
    );
    let mut config = SimConfig::new(vec![Tick(0)], 5);
    config.fov_radius = 2;
    config.timeout_ticks = Some(300);

    let mut coordinator = SimBuilder::new(config, env).build().unwrap();
    let mut observer = NoopObserver;
    coordinator.run(&mut observer).expect("the reachable side of the wall should fully complete");
    assert!(coordinator.is_complete());

    for y in 0..3 {
        let sealed = slam_core::Cell::new(3, y);
        assert_eq!(coordinator.shared_map().get(sealed), Observation::Unknown);
    }
}

#[test]
fn random_planner_mode_runs_to_completion_without_panicking() {
    let env = env_from("2 0 0\n0 0 0\n0 0 0\n", 9);
    let mut config = SimConfig::new(vec![Tick(0)], 9);
    config.fov_radius = 1;
    config.planner_mode = PlannerMode::Random;
    config.timeout_ticks = Some(1000);

    let mut coordinator = SimBuilder::new(config, env).build().unwrap();
    let mut observer = NoopObserver;
    coordinator.run(&mut observer).expect("random walk eventually covers a 3x3 open room");
    assert!(coordinator.is_complete());
}

// ── Timeout and observer wiring ──────────────────────────────────────────────

#[test]
fn timeout_reports_failure_through_the_result_and_the_observer() {
    let env = env_from(
        "2 0 0 0 0 0 0 0\n\
         0 0 0 0 0 0 0 0\n\
         0 0 0 0 0 0 0 0\n\
         0 0 0 0 0 0 0 0\n",
        13,
    );
    let mut config = SimConfig::new(vec![Tick(0)], 13);
    config.fov_radius = 1;
    config.timeout_ticks = Some(2);

    let mut coordinator = SimBuilder::new(config, env).build().unwrap();
    let mut observer = RecordingObserver::default();
    let result = coordinator.run(&mut observer);

    assert!(matches!(result, Err(SimError::Timeout { tick: Tick(2), .. })));
    assert_eq!(observer.sim_end, Some((Tick(2), false)));
    assert!(observer.warnings.iter().any(|w| matches!(w, SimWarning::Timeout { .. })));
}

#[test]
fn run_ticks_invokes_tick_callbacks_exactly_once_per_tick() {
    let env = env_from(
        "2 0 0 0 0 0 0 0\n\
         0 0 0 0 0 0 0 0\n\
         0 0 0 0 0 0 0 0\n\
         0 0 0 0 0 0 0 0\n",
        17,
    );
    let mut config = SimConfig::new(vec![Tick(0)], 17);
    config.fov_radius = 1;

    let mut coordinator = SimBuilder::new(config, env).build().unwrap();
    let mut observer = RecordingObserver::default();
    coordinator.run_ticks(5, &mut observer);

    assert_eq!(observer.tick_starts, 5);
    assert_eq!(observer.tick_ends, 5);
    assert_eq!(observer.snapshots, 5);
    assert_eq!(observer.sim_end, None, "run_ticks never calls on_sim_end");
}
