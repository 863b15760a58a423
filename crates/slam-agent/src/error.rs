use slam_core::AgentId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent {id} start position ({x}, {y}) is outside the grid or not traversable")]
    AgentOutsideGrid { id: AgentId, x: i32, y: i32 },

    #[error("agent roster must contain at least one agent")]
    EmptyRoster,
}

pub type AgentResult<T> = Result<T, AgentError>;
