//! `slam-sim` — the tick-driven exploration coordinator.
//!
//! # Tick loop (§4.7)
//!
//! ```text
//! for tick in current_tick..:
//!   ① Activation — every agent due to enter this tick activates and
//!                  immediately senses its entry cell; observations merge
//!                  into the shared map right away.
//!   ② Per agent, in ascending AgentId order:
//!       - recompute the frontier (cheap; keeps goal picks from going stale
//!         across agents processed earlier this same tick)
//!       - plan_move: assign/validate a goal, advance one step of its path,
//!         or fall back to a random walk
//!       - move the agent and merge its newly sensed cells
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                      |
//! |------------|--------------------------------------------------------------|
//! | `parallel` | Forwards to `slam-plan`'s `parallel` feature (rayon probing). |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use slam_env::{parse_map, EnvironmentBuilder};
//! use slam_core::{SimRng, Tick};
//! use slam_sim::{NoopObserver, SimBuilder, SimConfig};
//!
//! let rows = parse_map(map_text)?;
//! let mut rng = SimRng::new(42);
//! let env = EnvironmentBuilder::from_rows(rows)?.build(&mut rng)?;
//! let config = SimConfig::new(vec![Tick(0), Tick(0)], 42);
//! let mut coordinator = SimBuilder::new(config, env).build()?;
//! coordinator.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod completion;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use completion::{is_complete, progress};
pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, SimWarning};
pub use sim::Coordinator;
