//! OS-backed random source

use std::time::{SystemTime, UNIX_EPOCH};

use log::warn;

use crate::core::ports::RandomSource;

/// Uniform indices from the operating system's entropy source
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl OsRandom {
    /// Create a source
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn next_u64() -> u64 {
        let mut bytes = [0u8; 8];
        match getrandom::fill(&mut bytes) {
            Ok(()) => u64::from_le_bytes(bytes),
            Err(e) => {
                warn!("OS entropy unavailable ({e}), falling back to clock");
                let nanos = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .unwrap_or_default()
                    .subsec_nanos();
                u64::from(nanos).wrapping_mul(0x9E37_79B9_7F4A_7C15)
            },
        }
    }
}

impl RandomSource for OsRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        let bound = u64::try_from(bound.max(1)).unwrap_or(u64::MAX);
        // Reject the tail above the largest multiple of `bound` to stay uniform
        let zone = u64::MAX - (u64::MAX % bound);
        loop {
            let value = Self::next_u64();
            if value < zone {
                return usize::try_from(value % bound).unwrap_or(0);
            }
        }
    }
}
