use std::num::NonZeroU32;

/// Number of hardware execution units, falling back to one when the platform
/// cannot report it.
#[must_use]
pub fn available_workers() -> NonZeroU32 {
    std::thread::available_parallelism()
        .ok()
        .and_then(|n| NonZeroU32::new(n.get() as u32))
        .unwrap_or(NonZeroU32::MIN)
}
