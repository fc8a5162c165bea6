#![no_main]

// Checks encoder invariants on arbitrary 4x4 blocks.

use bc4_codec::palette::{build_palette, nearest_index};
use bc4_codec::{encode_bc4_block, Bc4Options};
use bc4_codec_common::decoded_4x4_channel::Decoded4x4Channel;
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub samples: [u8; 16],
    pub quality: f32,
}

fn squared_error(samples: &[u8; 16], decoded: &[u8; 16]) -> u32 {
    samples
        .iter()
        .zip(decoded.iter())
        .map(|(&a, &b)| {
            let diff = a as i32 - b as i32;
            (diff * diff) as u32
        })
        .sum()
}

fuzz_target!(|input: Input| {
    let block = Decoded4x4Channel::from_samples(input.samples);
    let options = Bc4Options::new().with_quality(input.quality);
    assert!((0.0..=1.0).contains(&options.quality()));

    let encoded = encode_bc4_block(&block, &options);
    assert_eq!(encoded, encode_bc4_block(&block, &options), "Encoding is not deterministic");
    assert_eq!(
        encoded,
        encode_bc4_block(&block, &Bc4Options::default()),
        "Quality changed the output"
    );

    let palette = encoded.palette();
    let decoded = encoded.decode();
    for (&sample, &index) in input.samples.iter().zip(encoded.indices().iter()) {
        assert_eq!(nearest_index(&palette, sample).0, index);
    }

    let (lo, hi) = block.min_max();
    if lo == hi {
        assert_eq!(decoded, block, "Flat block is not exact");
        return;
    }

    // Never worse than the plain min/max 8-level fit.
    let baseline = build_palette(hi, lo);
    let baseline_decoded: [u8; 16] =
        core::array::from_fn(|x| baseline[nearest_index(&baseline, input.samples[x]).0 as usize]);
    assert!(
        squared_error(&input.samples, &decoded.samples)
            <= squared_error(&input.samples, &baseline_decoded)
    );
});
