use core::{alloc::Layout, time::Duration};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use bc4_codec::{encode_bc4_block, encode_bc4_block_strided, Bc4Block, Bc4Options};
use bc4_codec_common::decoded_4x4_channel::Decoded4x4Channel;
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

/// Fills an image with a gradient plus noise, and some saturated texels so both modes get picked.
fn fill_image(image: &mut [u8], width: usize) {
    let mut state = 0x2545F4914F6CDD1Du64;
    for (idx, sample) in image.iter_mut().enumerate() {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let (x, y) = (idx % width, idx / width);
        *sample = match state % 32 {
            0 => 0,
            1 => 255,
            noise => ((x + y) / 16 + noise as usize) as u8,
        };
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("BC4 Encode Blocks");
    let width = 2048;
    let height = 1024;
    let size = width * height;
    let blocks_count = size / 16;

    let mut input = allocate_align_64(size);
    let mut output = allocate_align_64(blocks_count * core::mem::size_of::<Bc4Block>());
    fill_image(input.as_mut_slice(), width);

    // Pre-gathered blocks, so the packed bench measures the fitter alone.
    let packed: Vec<Decoded4x4Channel> = input
        .as_slice()
        .chunks_exact(16)
        .map(|chunk| {
            let mut samples = [0u8; 16];
            samples.copy_from_slice(chunk);
            Decoded4x4Channel::from_samples(samples)
        })
        .collect();

    let options = Bc4Options::default();
    let output_blocks = output.as_mut_ptr() as *mut Bc4Block;

    group.throughput(criterion::Throughput::Bytes(size as u64));
    group.warm_up_time(Duration::from_secs(5));
    group.measurement_time(Duration::from_secs(10));

    group.bench_with_input(BenchmarkId::new("encode_bc4_block", size), &size, |b, _| {
        b.iter(|| unsafe {
            for (block_idx, block) in packed.iter().enumerate() {
                *output_blocks.add(block_idx) = encode_bc4_block(black_box(block), &options);
            }
        })
    });

    let input_ptr = input.as_ptr();
    let tiles_x = width / 4;
    group.bench_with_input(
        BenchmarkId::new("encode_bc4_block_strided", size),
        &size,
        |b, _| {
            b.iter(|| unsafe {
                for block_idx in 0..blocks_count {
                    let (tx, ty) = (block_idx % tiles_x, block_idx / tiles_x);
                    let src = input_ptr.add(ty * 4 * width + tx * 4);
                    *output_blocks.add(block_idx) =
                        encode_bc4_block_strided(black_box(src), width, &options);
                }
            })
        },
    );

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
