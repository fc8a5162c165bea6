//! Common test imports and utilities for BC4 tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::palette::{build_palette, nearest_index};

// Common types from bc4_codec_common
pub use bc4_codec_common::color_8888::Color8888;
pub use bc4_codec_common::decoded_4x4_block::Decoded4x4Block;
pub use bc4_codec_common::decoded_4x4_channel::Decoded4x4Channel;

// Re-export super for convenience in test modules
pub use super::*;

/// Deterministic LCG for reproducible test inputs.
pub(crate) struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub(crate) fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1);
        self.state
    }

    pub(crate) fn next_u8(&mut self) -> u8 {
        (self.next_u64() >> 56) as u8
    }

    /// A block mixing the patterns the encoder handles differently: noise, narrow ranges and
    /// blocks containing the reserved extremes.
    pub(crate) fn next_channel_block(&mut self) -> Decoded4x4Channel {
        let mut samples = [0u8; 16];
        match self.next_u8() % 4 {
            0 => samples.iter_mut().for_each(|s| *s = self.next_u8()),
            1 => {
                let base = self.next_u8();
                samples
                    .iter_mut()
                    .for_each(|s| *s = base.saturating_add(self.next_u8() % 12));
            }
            2 => {
                let base = self.next_u8();
                for s in samples.iter_mut() {
                    *s = match self.next_u8() % 6 {
                        0 => 0,
                        1 => 255,
                        _ => base.saturating_add(self.next_u8() % 20),
                    };
                }
            }
            _ => {
                let (a, b) = (self.next_u8(), self.next_u8());
                samples
                    .iter_mut()
                    .for_each(|s| *s = if self.next_u8() & 1 == 0 { a } else { b });
            }
        }
        Decoded4x4Channel::from_samples(samples)
    }
}
