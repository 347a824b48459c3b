use rand::Rng;
use tracing::debug;

use crate::constants::buffers::{RESULT, UNIVERSE};
use crate::data::Entry;
use crate::errors::DrawError;
use crate::rng::with_process_rng;
use crate::shuffle::shuffle;

/// Draw `count` distinct entries from `pool` using the process-wide generator.
pub fn sample_distinct<S>(pool: &[S], count: usize) -> Result<Vec<Entry<'_>>, DrawError>
where
    S: AsRef<str>,
{
    with_process_rng(|rng| sample_distinct_with(pool, count, rng))
}

/// Draw `count` distinct entries from `pool` using `rng`.
///
/// The universe always covers the whole pool; `count` only caps how many of
/// the shuffled entries are copied out. Asking for more entries than the pool
/// holds is refused rather than truncated.
pub fn sample_distinct_with<'a, S, R>(
    pool: &'a [S],
    count: usize,
    rng: &mut R,
) -> Result<Vec<Entry<'a>>, DrawError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    if count > pool.len() {
        return Err(DrawError::InvalidRequest(format!(
            "requested {count} entries from a pool of {}",
            pool.len()
        )));
    }

    let mut universe: Vec<Entry<'a>> = Vec::new();
    let mut result: Vec<Entry<'a>> = Vec::new();
    let universe_reserved = universe.try_reserve_exact(pool.len());
    let result_reserved = result.try_reserve_exact(count);
    universe_reserved.map_err(|source| DrawError::AllocationFailure {
        buffer: UNIVERSE,
        len: pool.len(),
        source,
    })?;
    result_reserved.map_err(|source| DrawError::AllocationFailure {
        buffer: RESULT,
        len: count,
        source,
    })?;

    universe.extend(
        pool.iter()
            .enumerate()
            .map(|(origin_index, label)| Entry::new(label.as_ref(), origin_index)),
    );
    shuffle(&mut universe, rng);
    result.extend_from_slice(&universe[..count]);

    debug!(
        universe_len = universe.len(),
        count = result.len(),
        "sampled distinct entries"
    );
    Ok(result)
}
