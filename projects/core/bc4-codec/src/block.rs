//! Layout of a compressed BC4 block.
//!
//! ```text
//! byte 0      endpoint A
//! byte 1      endpoint B
//! bytes 2..8  48 bits of indices, 3 bits per sample, sample 0 in the least significant bits
//! ```

use crate::palette::build_palette;

/// Size of a compressed BC4 block in bytes.
pub const BC4_BLOCK_SIZE: usize = 8;

/// Mask of the 48 index bits once loaded into a [`u64`].
const INDEX_BITS_MASK: u64 = (1 << 48) - 1;

/// Interpolation scheme of a block, implied by the ordering of its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bc4Mode {
    /// `A > B`: 8 levels linearly interpolated between A and B.
    EightLevel,
    /// `A <= B`: 6 levels interpolated between A and B, plus the fixed levels 0 and 255.
    SixLevel,
}

impl Bc4Mode {
    /// Determines the mode from the stored endpoints.
    #[inline(always)]
    pub const fn from_endpoints(endpoint_a: u8, endpoint_b: u8) -> Self {
        if endpoint_a > endpoint_b {
            Bc4Mode::EightLevel
        } else {
            Bc4Mode::SixLevel
        }
    }
}

/// A compressed 8-byte BC4 block.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bc4Block {
    /// Raw block bytes, as stored on disk or in GPU memory.
    pub bytes: [u8; BC4_BLOCK_SIZE],
}

impl Bc4Block {
    /// Wraps 8 raw bytes.
    #[inline(always)]
    pub const fn from_bytes(bytes: [u8; BC4_BLOCK_SIZE]) -> Self {
        Self { bytes }
    }

    /// Reads a block from the first 8 bytes of `src`.
    ///
    /// # Returns
    ///
    /// The block, else [`None`] if the slice is too short.
    #[inline]
    pub fn from_slice(src: &[u8]) -> Option<Self> {
        let bytes: [u8; BC4_BLOCK_SIZE] = src.get(..BC4_BLOCK_SIZE)?.try_into().ok()?;
        Some(Self { bytes })
    }

    /// Packs two endpoints and 16 three-bit indices into a block.
    ///
    /// Only the low 3 bits of each index are used.
    #[inline]
    pub fn from_parts(endpoint_a: u8, endpoint_b: u8, indices: &[u8; 16]) -> Self {
        let mut bits = 0u64;
        for (x, &index) in indices.iter().enumerate() {
            bits |= ((index & 0b111) as u64) << (x * 3);
        }

        let packed = bits.to_le_bytes();
        Self {
            bytes: [
                endpoint_a, endpoint_b, packed[0], packed[1], packed[2], packed[3], packed[4],
                packed[5],
            ],
        }
    }

    /// The raw bytes of this block.
    #[inline(always)]
    pub const fn as_bytes(&self) -> &[u8; BC4_BLOCK_SIZE] {
        &self.bytes
    }

    /// Endpoint A (byte 0).
    #[inline(always)]
    pub const fn endpoint_a(&self) -> u8 {
        self.bytes[0]
    }

    /// Endpoint B (byte 1).
    #[inline(always)]
    pub const fn endpoint_b(&self) -> u8 {
        self.bytes[1]
    }

    /// Interpolation mode implied by the endpoints.
    #[inline(always)]
    pub const fn mode(&self) -> Bc4Mode {
        Bc4Mode::from_endpoints(self.endpoint_a(), self.endpoint_b())
    }

    /// The 8-entry interpolation table selected by the endpoints.
    #[inline]
    pub fn palette(&self) -> [u8; 8] {
        build_palette(self.endpoint_a(), self.endpoint_b())
    }

    /// The 48 index bits, sample 0 in the least significant bits.
    #[inline(always)]
    pub const fn index_bits(&self) -> u64 {
        let b = &self.bytes;
        u64::from_le_bytes([b[2], b[3], b[4], b[5], b[6], b[7], 0, 0]) & INDEX_BITS_MASK
    }

    /// Unpacks all 16 indices in row-major order.
    #[inline]
    pub fn indices(&self) -> [u8; 16] {
        let bits = self.index_bits();
        core::array::from_fn(|x| ((bits >> (x * 3)) & 0b111) as u8)
    }
}

impl From<[u8; BC4_BLOCK_SIZE]> for Bc4Block {
    fn from(bytes: [u8; BC4_BLOCK_SIZE]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Bc4Block> for [u8; BC4_BLOCK_SIZE] {
    fn from(block: Bc4Block) -> Self {
        block.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(255, 0, Bc4Mode::EightLevel)]
    #[case(1, 0, Bc4Mode::EightLevel)]
    #[case(0, 255, Bc4Mode::SixLevel)]
    #[case(10, 10, Bc4Mode::SixLevel)]
    fn mode_follows_endpoint_order(#[case] a: u8, #[case] b: u8, #[case] expected: Bc4Mode) {
        assert_eq!(Bc4Mode::from_endpoints(a, b), expected);
        assert_eq!(Bc4Block::from_parts(a, b, &[0; 16]).mode(), expected);
    }

    #[test]
    fn index_zero_occupies_lowest_bits() {
        let mut indices = [0u8; 16];
        indices[0] = 0b101;
        let block = Bc4Block::from_parts(0, 0, &indices);
        assert_eq!(block.bytes[2], 0b0000_0101);
        assert_eq!(&block.bytes[3..], &[0; 5]);
    }

    #[test]
    fn index_straddling_byte_boundary() {
        // Index 2 covers bits 6..9, crossing from byte 2 into byte 3.
        let mut indices = [0u8; 16];
        indices[2] = 0b111;
        let block = Bc4Block::from_parts(0, 0, &indices);
        assert_eq!(block.bytes[2], 0b1100_0000);
        assert_eq!(block.bytes[3], 0b0000_0001);
    }

    #[test]
    fn last_index_occupies_highest_bits() {
        let mut indices = [0u8; 16];
        indices[15] = 0b111;
        let block = Bc4Block::from_parts(0, 0, &indices);
        assert_eq!(block.bytes[7], 0b1110_0000);
    }

    #[test]
    fn indices_unpack_in_packing_order() {
        let indices: [u8; 16] = core::array::from_fn(|x| (x % 8) as u8);
        let block = Bc4Block::from_parts(200, 100, &indices);
        assert_eq!(block.endpoint_a(), 200);
        assert_eq!(block.endpoint_b(), 100);
        assert_eq!(block.indices(), indices);
    }

    #[test]
    fn from_slice_too_small() {
        assert!(Bc4Block::from_slice(&[0u8; 7]).is_none());
        assert_eq!(
            Bc4Block::from_slice(&[1, 2, 3, 4, 5, 6, 7, 8, 9]),
            Some(Bc4Block::from_bytes([1, 2, 3, 4, 5, 6, 7, 8]))
        );
    }
}
