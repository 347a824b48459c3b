use std::collections::HashSet;

use tracing::warn;

use crate::constants::roster::DEFAULT_POOL;
use crate::errors::DrawError;

/// How a finished draw is written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Three labelled lines: roster, group A, group B.
    #[default]
    Text,
    /// The serialized draw as a single JSON object.
    Json,
}

/// Top-level draw configuration.
#[derive(Clone, Debug)]
pub struct DrawConfig {
    /// Seed for a reproducible draw; `None` uses the clock-seeded process generator.
    pub seed: Option<u64>,
    /// Roster size; `None` draws the whole pool.
    pub count: Option<usize>,
    /// Candidate names, in pool order.
    pub pool: Vec<String>,
    /// Output rendering.
    pub format: OutputFormat,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            seed: None,
            count: None,
            pool: DEFAULT_POOL.iter().map(|name| name.to_string()).collect(),
            format: OutputFormat::Text,
        }
    }
}

impl DrawConfig {
    /// Roster size after applying the whole-pool default.
    pub fn resolved_count(&self) -> usize {
        self.count.unwrap_or(self.pool.len())
    }

    /// Check that the requested roster fits the pool.
    ///
    /// Repeated names are allowed (entries stay distinct by pool position) but logged.
    pub fn validated(self) -> Result<Self, DrawError> {
        let count = self.resolved_count();
        if count > self.pool.len() {
            return Err(DrawError::InvalidRequest(format!(
                "count {count} exceeds pool size {}",
                self.pool.len()
            )));
        }
        let mut seen = HashSet::new();
        for name in &self.pool {
            if !seen.insert(name.as_str()) {
                warn!(name = %name, "pool contains a repeated name");
            }
        }
        Ok(self)
    }
}
