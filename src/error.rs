use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid frame: width={width}, height={height}, padding={padding}")]
    InvalidFrame {
        width: f64,
        height: f64,
        padding: f64,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
