//! `SimOutputObserver<W>` — bridges `slam_sim::SimObserver` to an `OutputWriter`.

use slam_core::{SimClock, Tick};
use slam_sim::SimObserver;

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes agent snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value. After `coordinator.run()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer: W,
    start_unix_secs: i64,
    tick_duration_secs: u32,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `clock`'s wall-time
    /// mapping for the `unix_time_secs` column.
    pub fn new(writer: W, clock: &SimClock) -> Self {
        Self {
            writer,
            start_unix_secs: clock.start_unix_secs,
            tick_duration_secs: clock.tick_duration_secs,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `coordinator.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn unix_time(&self, tick: Tick) -> i64 {
        self.start_unix_secs + tick.0 as i64 * self.tick_duration_secs as i64
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_snapshot(
        &mut self,
        tick: Tick,
        _shared: &slam_map::SharedMap,
        roster: &slam_agent::AgentRoster,
        frontier: &slam_map::FrontierSet,
        progress_ratio: f64,
    ) {
        let active_agents = roster.agents.iter().filter(|a| a.active).count() as u64;

        let summary = TickSummaryRow {
            tick: tick.0,
            unix_time_secs: self.unix_time(tick),
            active_agents,
            progress_ratio,
            frontier_size: frontier.len() as u64,
            terminated: progress_ratio >= 1.0,
        };
        let result = self.writer.write_tick_summary(&summary);
        self.store_err(result);

        let rows: Vec<AgentSnapshotRow> = roster
            .agents
            .iter()
            .map(|a| AgentSnapshotRow { agent_id: a.id.0, tick: tick.0, x: a.position.x, y: a.position.y, active: a.active })
            .collect();
        let result = self.writer.write_snapshots(&rows);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _completed: bool) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
