//! `slam-core` — foundational types shared by every other crate in this workspace.
//!
//! This crate has no workspace-internal dependencies and minimal external
//! ones (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                        |
//! |-----------|--------------------------------------------------|
//! | [`ids`]    | `AgentId`                                        |
//! | [`cell`]   | `Cell`, `Direction` — grid coordinates and moves |
//! | [`grid2d`] | `Grid2D<T>` — row-major grid-shaped storage      |
//! | [`time`]   | `Tick`, `SimClock`                               |
//! | [`rng`]    | `AgentRng` (per-agent), `SimRng` (global)        |
//! | [`error`]  | `CoreError`, `CoreResult`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |
//!           | Required by `slam-output`'s snapshot rows.           |

pub mod cell;
pub mod error;
pub mod grid2d;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{Cell, Direction};
pub use error::{CoreError, CoreResult};
pub use grid2d::Grid2D;
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, Tick};
