use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EaselError {
    #[error("unknown aspect ratio: {name}")]
    UnknownRatio { name: String },
    #[error("paper width {width} too wide to fit (widest slot is {max})")]
    OutOfRange { width: f64, max: f64 },
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, EaselError>;
