/// Constants used by the roster draw harness.
pub mod roster {
    /// Pool used when no `--name` overrides are supplied.
    pub const DEFAULT_POOL: [&str; 6] = [
        "dlesieur", "anvilla", "jpantoja", "marimuno", "rocgarci", "vjan-nie",
    ];
    /// Prefix printed before the full shuffled roster.
    pub const LIST_PREFIX: &str = "Random distinct list:";
    /// Prefix printed before the first half of the roster.
    pub const GROUP_A_PREFIX: &str = "Group A:";
    /// Prefix printed before the second half of the roster.
    pub const GROUP_B_PREFIX: &str = "Group B:";
}

/// Constants used by the deterministic generator.
pub mod rng {
    /// SplitMix64 state increment (golden ratio).
    pub const SPLITMIX_GAMMA: u64 = 0x9E3779B97F4A7C15;
    /// First SplitMix64 finalizer multiplier.
    pub const SPLITMIX_MUL_A: u64 = 0xBF58476D1CE4E5B9;
    /// Second SplitMix64 finalizer multiplier.
    pub const SPLITMIX_MUL_B: u64 = 0x94D049BB133111EB;
}

/// Buffer names reported by allocation failures.
pub mod buffers {
    /// Scratch universe built from the whole pool.
    pub const UNIVERSE: &str = "universe";
    /// Prefix copied out of the shuffled universe.
    pub const RESULT: &str = "result";
    /// First half produced by a split.
    pub const GROUP_A: &str = "group_a";
    /// Second half produced by a split.
    pub const GROUP_B: &str = "group_b";
}
