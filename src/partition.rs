use tracing::debug;

use crate::constants::buffers::{GROUP_A, GROUP_B};
use crate::errors::DrawError;

/// Split `items` into its first and second halves.
///
/// Both halves are cloned out in source order, so neither shares elements
/// with the other or with `items`. Odd lengths are rejected.
pub fn split_in_half<T: Clone>(items: &[T]) -> Result<(Vec<T>, Vec<T>), DrawError> {
    if items.len() % 2 != 0 {
        return Err(DrawError::InvalidRequest(format!(
            "cannot split {} entries into two equal groups",
            items.len()
        )));
    }
    let mid = items.len() / 2;

    let mut group_a = Vec::new();
    let mut group_b = Vec::new();
    let a_reserved = group_a.try_reserve_exact(mid);
    let b_reserved = group_b.try_reserve_exact(mid);
    a_reserved.map_err(|source| DrawError::AllocationFailure {
        buffer: GROUP_A,
        len: mid,
        source,
    })?;
    b_reserved.map_err(|source| DrawError::AllocationFailure {
        buffer: GROUP_B,
        len: mid,
        source,
    })?;

    let (first, second) = items.split_at(mid);
    group_a.extend_from_slice(first);
    group_b.extend_from_slice(second);

    debug!(group_len = mid, "split into halves");
    Ok((group_a, group_b))
}
