use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the constellation core.
///
/// The frame loop itself cannot fail; only configuration is validated.
#[derive(Debug, Error)]
pub enum Error {
    /// A tunable in [`crate::config::Config`] is out of range.
    #[error("invalid config `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}
