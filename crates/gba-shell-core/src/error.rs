use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum PageError {
    #[error("No element matches `{0}`")]
    MissingElement(String),

    #[error("Loader `{0}` is not a function on window")]
    LoaderUnavailable(String),

    #[error("Host error: {0}")]
    Host(String),
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("Logical resolution must be positive, got {width}x{height}")]
    InvalidResolution { width: f64, height: f64 },

    #[error("At least one guarded key code is required")]
    NoGuardedKeys,

    #[error("Config field `{0}` must not be empty")]
    EmptyField(&'static str),
}
