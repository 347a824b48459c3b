use std::fmt;

use serde::Serialize;

/// One selectable candidate drawn from a caller-supplied pool.
///
/// `label` borrows from the pool; `origin_index` is the pool position recorded
/// when the universe was built and never changes while the entry is shuffled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Entry<'a> {
    /// Name borrowed from the pool.
    pub label: &'a str,
    /// 0-based position of `label` in the original pool.
    pub origin_index: usize,
}

impl<'a> Entry<'a> {
    /// Create an entry for `label` found at `origin_index` in its pool.
    pub fn new(label: &'a str, origin_index: usize) -> Self {
        Self {
            label,
            origin_index,
        }
    }
}

impl fmt::Display for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Result of one sample-then-split run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Draw<'a> {
    /// Full shuffled roster.
    pub list: Vec<Entry<'a>>,
    /// First half of `list`.
    pub group_a: Vec<Entry<'a>>,
    /// Second half of `list`.
    pub group_b: Vec<Entry<'a>>,
}

/// Join entry labels with single spaces.
pub fn labels_line(entries: &[Entry<'_>]) -> String {
    entries
        .iter()
        .map(|entry| entry.label)
        .collect::<Vec<_>>()
        .join(" ")
}
