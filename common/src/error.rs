use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid log filter in {var}: {reason}")]
    InvalidLogFilter { var: &'static str, reason: String },
}
