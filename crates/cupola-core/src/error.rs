use thiserror::Error;

/// Recoverable errors. Invariant violations inside layout and paint are
/// debug assertions, not variants here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("device pixel ratio must be finite and positive, got {0}")]
    InvalidDevicePixelRatio(f32),

    #[error("text scale factor must be finite and positive, got {0}")]
    InvalidTextScale(f32),

    #[error("divider thickness must be finite and non-negative, got {0}")]
    InvalidDividerThickness(f32),

    #[error("metric `{name}` must be finite and non-negative, got {value}")]
    InvalidMetric { name: &'static str, value: f32 },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
