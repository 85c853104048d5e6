/// Largest clause product a single Or-over-And distribution step may
/// create before the conversion is rejected.
pub const CNF_BLOWUP_LIMIT: u32 = 10_000;

/// Cap on executed resolution steps in one saturation run. Runs that hit
/// the cap report an indeterminate outcome instead of continuing.
pub const RESOLUTION_STEP_LIMIT: usize = 10_000;
