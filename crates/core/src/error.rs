use thiserror::Error;

/// Top-level error type shared by every `segbar` crate.
///
/// The layout core itself never fails; these variants cover the model's
/// addressing errors and the outer surfaces (config, rendering, I/O).
#[derive(Debug, Error)]
pub enum SegBarError {
    #[error("config error: {0}")]
    Config(String),

    #[error("model error: {0}")]
    Model(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = SegBarError> = std::result::Result<T, E>;
