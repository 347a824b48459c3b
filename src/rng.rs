//! Seedable generator and the process-wide instance used by unseeded draws.

use std::sync::{Mutex, OnceLock};

use chrono::Utc;
use tracing::debug;

use crate::constants::rng::{SPLITMIX_GAMMA, SPLITMIX_MUL_A, SPLITMIX_MUL_B};

static PROCESS_RNG: OnceLock<Mutex<DeterministicRng>> = OnceLock::new();

#[derive(Debug, Clone)]
/// Small deterministic RNG (SplitMix64) used for reproducible draws.
pub struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    /// Create a generator whose output is fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Resume a generator from a value previously returned by [`Self::state`].
    pub fn from_state(state: u64) -> Self {
        Self { state }
    }

    /// Seed from the wall clock.
    pub fn from_clock() -> Self {
        Self::new(clock_seed())
    }

    /// Current internal state.
    pub fn state(&self) -> u64 {
        self.state
    }

    fn next_u64_internal(&mut self) -> u64 {
        let mut z = self.state.wrapping_add(SPLITMIX_GAMMA);
        self.state = z;
        z = (z ^ (z >> 30)).wrapping_mul(SPLITMIX_MUL_A);
        z = (z ^ (z >> 27)).wrapping_mul(SPLITMIX_MUL_B);
        z ^ (z >> 31)
    }
}

impl rand::RngCore for DeterministicRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64_internal() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_u64_internal()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut offset = 0;
        while offset < dest.len() {
            let value = self.next_u64_internal();
            let bytes = value.to_le_bytes();
            let remaining = dest.len() - offset;
            let copy_len = remaining.min(bytes.len());
            dest[offset..offset + copy_len].copy_from_slice(&bytes[..copy_len]);
            offset += copy_len;
        }
    }
}

/// Run `f` with exclusive access to the process-wide generator.
///
/// The generator is seeded from the clock on first use and never reseeded.
pub fn with_process_rng<T>(f: impl FnOnce(&mut DeterministicRng) -> T) -> T {
    let cell = PROCESS_RNG.get_or_init(|| {
        let rng = DeterministicRng::from_clock();
        debug!(seed = rng.state(), "process generator seeded from clock");
        Mutex::new(rng)
    });
    // A panic mid-draw cannot leave the u64 state torn, so a poisoned lock is still usable.
    let mut guard = cell.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut guard)
}

fn clock_seed() -> u64 {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros()) as u64
}
