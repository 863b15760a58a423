//! A thin, runnable illustration of the exploration coordinator: load a
//! text map, build a coordinator, run it to completion or timeout, and
//! print a progress line per tick. Not a batch driver or a visualizer —
//! just enough to see the thing work.

use anyhow::{Context, Result};

use slam_core::{SimRng, Tick};
use slam_env::{parse_map, EnvironmentBuilder};
use slam_sim::{SimBuilder, SimConfig, SimObserver, SimWarning};

const MAP_TEXT: &str = include_str!("../maps/demo.txt");
const SEED: u64 = 42;

struct ProgressPrinter;

impl SimObserver for ProgressPrinter {
    fn on_snapshot(
        &mut self,
        tick: Tick,
        _shared: &slam_map::SharedMap,
        roster: &slam_agent::AgentRoster,
        frontier: &slam_map::FrontierSet,
        progress_ratio: f64,
    ) {
        let active = roster.agents.iter().filter(|a| a.active).count();
        println!(
            "{tick}  active={active}  frontier={}  progress={:.1}%",
            frontier.len(),
            progress_ratio * 100.0
        );
    }

    fn on_warning(&mut self, warning: &SimWarning) {
        log::warn!("{warning:?}");
    }

    fn on_sim_end(&mut self, final_tick: Tick, completed: bool) {
        println!("--- finished at {final_tick}, completed={completed} ---");
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let rows = parse_map(MAP_TEXT).context("parsing the bundled demo map")?;
    let mut rng = SimRng::new(SEED);
    let env = EnvironmentBuilder::from_rows(rows)
        .context("validating the bundled demo map")?
        .build(&mut rng)
        .context("locating entry points in the demo map")?;

    println!("grid: {}x{}, entry points: {}", env.width(), env.height(), env.entry_points().len());

    let mut config = SimConfig::new(vec![Tick(0), Tick(0)], SEED);
    config.fov_radius = 3;
    config.timeout_ticks = Some(500);

    let mut coordinator = SimBuilder::new(config, env).build().context("building the coordinator")?;

    let mut observer = ProgressPrinter;
    match coordinator.run(&mut observer) {
        Ok(()) => println!("exploration complete"),
        Err(err) => println!("run ended without completing: {err}"),
    }

    Ok(())
}
