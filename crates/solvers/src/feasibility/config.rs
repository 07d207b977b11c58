use thiserror::Error;

/// Configuration for the feasibility search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    max_iters: Option<usize>,
}

/// Errors that can occur when validating a feasibility search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be positive")]
    MaxIters,
}

impl Config {
    /// Creates a new config; `None` leaves the rectangle budget unlimited.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is `Some(0)`.
    pub fn new(max_iters: Option<usize>) -> Result<Self, ConfigError> {
        if max_iters == Some(0) {
            return Err(ConfigError::MaxIters);
        }
        Ok(Self { max_iters })
    }

    /// Returns the number of rectangles the search may examine.
    #[must_use]
    pub fn max_iters(&self) -> Option<usize> {
        self.max_iters
    }
}
