use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SpatialHashError {
    #[error("grid dimensions must be non-zero (got {width}x{height})")]
    ZeroDimension { width: u32, height: u32 },
    #[error("cell size must be non-zero")]
    ZeroCellSize,
    #[error("unknown log level `{0}`")]
    InvalidLogLevel(String),
}
