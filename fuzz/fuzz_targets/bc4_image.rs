#![no_main]

// Drives the image API with arbitrary dimensions and edge policies.

use bc4_codec::Bc4Options;
use bc4_codec_api::{
    bc4_compressed_size, compress_bc4_image, decompress_bc4_image, EdgePolicy,
};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub enum Policy {
    Drop,
    Pad,
    Error,
}

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Input {
    pub width: u8,
    pub height: u8,
    pub policy: Policy,
    pub data: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let (width, height) = (input.width as usize, input.height as usize);
    let policy = match input.policy {
        Policy::Drop => EdgePolicy::Drop,
        Policy::Pad => EdgePolicy::Pad,
        Policy::Error => EdgePolicy::Error,
    };

    let Ok(size) = bc4_compressed_size(width, height, policy) else {
        return;
    };
    assert_eq!(size % 8, 0);

    let mut compressed = vec![0u8; size];
    let result = compress_bc4_image(
        &input.data,
        width,
        height,
        &mut compressed,
        &Bc4Options::default(),
        policy,
    );
    if input.data.len() < width * height {
        assert!(result.is_err());
        return;
    }
    result.unwrap();

    let mut restored = vec![0u8; width * height];
    decompress_bc4_image(&compressed, width, height, &mut restored, policy).unwrap();

    // A flat image must come back unchanged wherever tiles were written.
    if input.data[..width * height].iter().all(|&x| x == input.data[0]) && policy != EdgePolicy::Drop
    {
        assert_eq!(restored, input.data[..width * height]);
    }
});
