//! # Decoded 4x4 Channel
//!
//! [`Decoded4x4Channel`] holds the 16 single-channel samples of one 4x4 tile. It is the input
//! to the BC4 encoder and the output of the BC4 decoder.
//!
//! Samples are stored in row-major order, like [`crate::decoded_4x4_block::Decoded4x4Block`].

/// Represents a 4x4 block of single-channel 8-bit samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Decoded4x4Channel {
    /// The 16 samples in the block (row-major order)
    pub samples: [u8; 16],
}

impl Decoded4x4Channel {
    /// Constructs a new block with all 16 samples set to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bc4_codec_common::decoded_4x4_channel::Decoded4x4Channel;
    ///
    /// let block = Decoded4x4Channel::new(10);
    /// assert_eq!(block.samples, [10; 16]);
    /// ```
    pub const fn new(value: u8) -> Self {
        Self {
            samples: [value; 16],
        }
    }

    /// Constructs a block from 16 row-major samples.
    pub const fn from_samples(samples: [u8; 16]) -> Self {
        Self { samples }
    }

    /// Returns the smallest and largest sample in the block, as `(min, max)`.
    #[inline]
    pub fn min_max(&self) -> (u8, u8) {
        self.samples
            .iter()
            .fold((u8::MAX, u8::MIN), |(lo, hi), &s| (lo.min(s), hi.max(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case([10; 16], (10, 10))]
    #[case([0, 255, 0, 255, 0, 255, 0, 255, 0, 255, 0, 255, 0, 255, 0, 255], (0, 255))]
    #[case([5, 9, 200, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 17, 3], (3, 200))]
    fn min_max_finds_extremes(#[case] samples: [u8; 16], #[case] expected: (u8, u8)) {
        assert_eq!(Decoded4x4Channel::from_samples(samples).min_max(), expected);
    }
}
