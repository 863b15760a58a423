//! `slam-plan` — goal assignment and path planning for the exploration
//! coordinator.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|------------------------------------------------------------|
//! | [`astar`]   | `find_path` — grid A* over the shared partial map           |
//! | [`tables`]  | `GoalTable`, `PathTable`, `WaitCounters`                    |
//! | [`planner`] | `PlannerMode`, `PlanningView`, `plan_move`                  |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|------------------------------------------------------------|
//! | `parallel` | Probe A* candidate goals concurrently via `rayon`.         |

pub mod astar;
pub mod planner;
pub mod tables;


pub use astar::find_path;
pub use planner::{plan_move, PlanEvent, PlannerMode, PlanningView};
pub use tables::{GoalTable, PathTable, WaitCounters, DEFAULT_MAX_WAIT};
