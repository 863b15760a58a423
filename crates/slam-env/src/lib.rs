//! `slam-env` — ground truth: the tile grid, the environment oracle, and
//! reachability analysis.
//!
//! | Module          | Contents                                          |
//! |-----------------|-----------------------------------------------------|
//! | [`tile`]        | `TileKind`, `Observation`                         |
//! | [`grid`]        | `Environment`, `EnvironmentBuilder`               |
//! | [`reachability`]| `ReachableMask`, `compute_reachable_mask`          |
//! | [`loader`]      | Text-matrix map parser (ambient test/demo tooling)|
//! | [`error`]       | `EnvError`, `EnvResult`                           |

pub mod error;
pub mod grid;
pub mod loader;
pub mod reachability;
pub mod tile;

#[cfg(test)]
mod tests;

pub use error::{EnvError, EnvResult};
pub use grid::{Environment, EnvironmentBuilder};
pub use loader::parse_map;
pub use reachability::{compute_reachable_mask, ReachableMask};
pub use tile::{Observation, TileKind};
