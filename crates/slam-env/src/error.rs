use thiserror::Error;

/// Construction-time failures for the environment oracle. None of these are
/// raised once a simulation is running — see `slam-sim::SimError` for
/// runtime, non-fatal conditions.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("invalid map: {0}")]
    InvalidMap(String),

    #[error("no entry point found and no traversable cell to fall back to")]
    NoEntryPoint,

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type EnvResult<T> = Result<T, EnvError>;
