use std::collections::TryReserveError;

use thiserror::Error;

/// Error type for sampling, partitioning, and configuration failures.
#[derive(Debug, Error)]
pub enum DrawError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("could not allocate {buffer} buffer for {len} entries")]
    AllocationFailure {
        buffer: &'static str,
        len: usize,
        #[source]
        source: TryReserveError,
    },
}
