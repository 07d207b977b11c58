use thiserror::Error;

/// Configuration for the root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    max_roots: Option<usize>,
    max_iters: Option<usize>,
}

/// Errors that can occur when validating a root search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_roots must be positive")]
    MaxRoots,

    #[error("max_iters must be positive")]
    MaxIters,
}

impl Config {
    /// Creates a new config.
    ///
    /// `None` leaves the corresponding quantity unlimited.
    ///
    /// # Errors
    ///
    /// Returns an error if either limit is `Some(0)`.
    pub fn new(max_roots: Option<usize>, max_iters: Option<usize>) -> Result<Self, ConfigError> {
        if max_roots == Some(0) {
            return Err(ConfigError::MaxRoots);
        }
        if max_iters == Some(0) {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            max_roots,
            max_iters,
        })
    }

    /// Returns the number of roots after which the search stops.
    #[must_use]
    pub fn max_roots(&self) -> Option<usize> {
        self.max_roots
    }

    /// Returns the number of rectangles the search may examine.
    #[must_use]
    pub fn max_iters(&self) -> Option<usize> {
        self.max_iters
    }
}
