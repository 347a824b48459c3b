#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Command-line harness for one roster draw.
pub mod cli;
/// Draw configuration types.
pub mod config;
/// Centralized constants used across the sampler, generator, and harness.
pub mod constants;
/// Entry and draw result types.
pub mod data;
pub mod draw;
/// Even-length halving split.
pub mod partition;
pub mod rng;
/// Distinct sampling from a shuffled universe.
pub mod sampler;
/// In-place Fisher-Yates shuffle.
pub mod shuffle;

mod errors;

pub use config::{DrawConfig, OutputFormat};
pub use data::{Draw, Entry};
pub use draw::{draw_groups, draw_groups_with};
pub use errors::DrawError;
pub use partition::split_in_half;
pub use rng::{DeterministicRng, with_process_rng};
pub use sampler::{sample_distinct, sample_distinct_with};
pub use shuffle::shuffle;
