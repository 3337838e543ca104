use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid persisted viewport: {0}")]
    InvalidViewportBytes(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
