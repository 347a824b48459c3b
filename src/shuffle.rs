use rand::Rng;

/// Permute `items` in place with a backward Fisher-Yates pass.
///
/// For each `i` from `len - 1` down to `1` a uniform `j` in `0..=i` is drawn
/// and `items[i]` swaps with `items[j]`. Slot `0` is settled once `i == 1` has
/// been processed, so it is never drawn for on its own. Slices of length 0 or
/// 1 are left untouched and consume no randomness.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
