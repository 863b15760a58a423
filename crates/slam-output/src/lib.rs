//! `slam-output` — CSV recording of simulation output.
//!
//! Implements §6 "Core outputs per tick" as a durable record for
//! applications that want one without writing their own observer: two
//! files, `agent_snapshots.csv` and `tick_summaries.csv`, produced by
//! [`CsvWriter`] and driven by [`SimOutputObserver`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use slam_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer, &coordinator.clock);
//! coordinator.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
