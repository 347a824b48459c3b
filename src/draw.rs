//! Sample-then-split pipeline used by the command-line harness.

use rand::Rng;

use crate::data::Draw;
use crate::errors::DrawError;
use crate::partition::split_in_half;
use crate::rng::with_process_rng;
use crate::sampler::sample_distinct_with;

/// Draw `count` distinct entries and split them, using the process-wide generator.
pub fn draw_groups<S>(pool: &[S], count: usize) -> Result<Draw<'_>, DrawError>
where
    S: AsRef<str>,
{
    with_process_rng(|rng| draw_groups_with(pool, count, rng))
}

/// Draw `count` distinct entries from `pool` with `rng` and split them in half.
///
/// An odd `count` is rejected before any randomness is consumed.
pub fn draw_groups_with<'a, S, R>(
    pool: &'a [S],
    count: usize,
    rng: &mut R,
) -> Result<Draw<'a>, DrawError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    if count % 2 != 0 {
        return Err(DrawError::InvalidRequest(format!(
            "roster size {count} cannot be split into two equal groups"
        )));
    }
    let list = sample_distinct_with(pool, count, rng)?;
    let (group_a, group_b) = split_in_half(&list)?;
    Ok(Draw {
        list,
        group_a,
        group_b,
    })
}
