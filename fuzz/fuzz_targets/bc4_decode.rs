#![no_main]

// Checks decoder invariants on arbitrary 8-byte blocks.

use bc4_codec::{
    decode_bc4_block, decode_bc4_block_from_slice, decode_bc4_block_rgba_from_slice, Bc4Block,
    Bc4Mode,
};
use bc4_codec_common::color_8888::Color8888;
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct RawBlock {
    pub bytes: [u8; 8],
}

fuzz_target!(|block: RawBlock| {
    let decoded = decode_bc4_block_from_slice(&block.bytes).unwrap();
    let from_ptr = unsafe { decode_bc4_block(block.bytes.as_ptr()) };
    assert_eq!(decoded, from_ptr, "Pointer and slice decoders disagree");

    let parsed = Bc4Block::from_bytes(block.bytes);
    let palette = parsed.palette();
    let indices = parsed.indices();
    for (sample, index) in decoded.samples.iter().zip(indices.iter()) {
        assert_eq!(*sample, palette[*index as usize]);
    }

    // The fixed extremes only exist in the 6-level table.
    if parsed.mode() == Bc4Mode::SixLevel {
        assert_eq!(palette[6], 0);
        assert_eq!(palette[7], 255);
    }

    // Repacking the parsed parts gives back the same bytes.
    let repacked = Bc4Block::from_parts(parsed.endpoint_a(), parsed.endpoint_b(), &indices);
    assert_eq!(repacked, parsed);

    let rgba = decode_bc4_block_rgba_from_slice(&block.bytes).unwrap();
    for (pixel, sample) in rgba.pixels.iter().zip(decoded.samples.iter()) {
        assert_eq!(*pixel, Color8888::splat(*sample));
    }
});
