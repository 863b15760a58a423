use slam_agent::AgentError;
use slam_core::Tick;
use slam_env::EnvError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Env(#[from] EnvError),

    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error("timed out at tick {tick} with progress {progress:.3}")]
    Timeout { tick: Tick, progress: f64 },
}

pub type SimResult<T> = Result<T, SimError>;
