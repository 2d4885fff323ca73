use thiserror::Error;

pub type Result<T> = std::result::Result<T, RocketError>;

#[derive(Error, Debug)]
pub enum RocketError {
    #[error("Could not load rocket sprite '{path}': {reason}")]
    SpriteLoad { path: String, reason: String },

    #[error("Invalid {label}: '{value}'. Expected a number.")]
    InvalidInput { label: &'static str, value: String },

    #[error("{label} must be between {min} and {max}, got {value}.")]
    OutOfRange {
        label: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Plot backend error: {0}")]
    Plot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
