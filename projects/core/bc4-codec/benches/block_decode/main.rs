use core::alloc::Layout;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bc4_codec::{decode_bc4_block, decode_bc4_block_rgba, BC4_BLOCK_SIZE};
use bc4_codec_common::{
    decoded_4x4_block::Decoded4x4Block, decoded_4x4_channel::Decoded4x4Channel,
};
use safe_allocator_api::RawAlloc;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

pub(crate) fn allocate_align_64(num_bytes: usize) -> RawAlloc {
    let layout = Layout::from_size_align(num_bytes, 64).unwrap();
    RawAlloc::new(layout).unwrap()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("BC4 Decode Blocks");

    // 4MB of BC4 blocks, a 4096x1024 single channel image.
    let bc4_size = 4194304;
    let blocks_count = bc4_size / BC4_BLOCK_SIZE;

    let mut input = allocate_align_64(bc4_size);
    let mut channel_output =
        allocate_align_64(blocks_count * core::mem::size_of::<Decoded4x4Channel>());
    let mut rgba_output = allocate_align_64(blocks_count * core::mem::size_of::<Decoded4x4Block>());

    // Alternate 8-level and 6-level blocks with varying indices.
    for (block_idx, block) in input
        .as_mut_slice()
        .chunks_exact_mut(BC4_BLOCK_SIZE)
        .enumerate()
    {
        let (a, b) = if block_idx % 2 == 0 { (240, 16) } else { (16, 240) };
        block[0] = a;
        block[1] = b;
        for (x, byte) in block[2..].iter_mut().enumerate() {
            *byte = ((block_idx * (x + 2)) % 255) as u8;
        }
    }

    let input_ptr = input.as_ptr();
    let channel_blocks = channel_output.as_mut_ptr() as *mut Decoded4x4Channel;
    let rgba_blocks = rgba_output.as_mut_ptr() as *mut Decoded4x4Block;
    group.throughput(criterion::Throughput::Bytes(bc4_size as u64));

    group.bench_function("decode_bc4_block", |b| {
        b.iter(|| unsafe {
            for block_idx in 0..blocks_count {
                *channel_blocks.add(block_idx) =
                    decode_bc4_block(black_box(input_ptr.add(block_idx * BC4_BLOCK_SIZE)));
            }
        })
    });

    group.bench_function("decode_bc4_block_rgba", |b| {
        b.iter(|| unsafe {
            for block_idx in 0..blocks_count {
                *rgba_blocks.add(block_idx) =
                    decode_bc4_block_rgba(black_box(input_ptr.add(block_idx * BC4_BLOCK_SIZE)));
            }
        })
    });

    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
