//! `slam-agent` — per-agent state, occlusion-aware sensing, and movement.
//!
//! | Module       | Contents                                         |
//! |--------------|-----------------------------------------------------|
//! | [`agent`]    | `Agent`                                          |
//! | [`sensor`]   | `sense` — symmetric-Bresenham FOV ray casting    |
//! | [`movement`] | `move_agent`                                     |
//! | [`store`]    | `AgentRoster`, `AgentRngs`, `AgentRosterBuilder`  |
//! | [`error`]    | `AgentError`, `AgentResult`                      |

pub mod agent;
pub mod error;
pub mod movement;
pub mod sensor;
pub mod store;


pub use agent::Agent;
pub use error::{AgentError, AgentResult};
pub use movement::move_agent;
pub use sensor::sense;
pub use store::{AgentRngs, AgentRoster, AgentRosterBuilder};
