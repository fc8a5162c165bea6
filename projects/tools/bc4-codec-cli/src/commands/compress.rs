use crate::error::CliError;
use crate::pgm::Pgm;
use argh::FromArgs;
use bc4_codec_api::{compress_bc4_image_allocating, Bc4OptionsBuilder, EdgePolicy};
use bytesize::ByteSize;
use std::{fs, path::PathBuf, time::Instant};
use tracing::info;

#[derive(FromArgs, Debug)]
/// Compress an 8-bit greyscale PGM image into raw BC4 blocks
#[argh(subcommand, name = "compress")]
pub struct CompressCmd {
    /// input PGM file
    #[argh(option)]
    pub input: PathBuf,

    /// output file for the raw BC4 blocks
    #[argh(option)]
    pub output: PathBuf,

    /// encoder quality between 0.0 and 1.0 [default: 1.0]
    #[argh(option)]
    pub quality: Option<f32>,

    /// handling of partial edge tiles (drop, pad, error) [default: drop]
    #[argh(option, default = "EdgePolicy::Drop")]
    pub edge_policy: EdgePolicy,
}

pub fn handle_compress_command(cmd: CompressCmd) -> Result<(), CliError> {
    let start = Instant::now();
    let image = Pgm::open(&cmd.input)?;
    info!(
        input = %cmd.input.display(),
        width = image.width(),
        height = image.height(),
        "read image"
    );

    let mut builder = Bc4OptionsBuilder::new();
    if let Some(quality) = cmd.quality {
        builder = builder.quality(quality);
    }
    let options = builder.build();

    let compressed = compress_bc4_image_allocating(
        image.data(),
        image.width(),
        image.height(),
        &options,
        cmd.edge_policy,
    )?;
    fs::write(&cmd.output, compressed.as_slice())?;

    info!(
        output = %cmd.output.display(),
        "compressed {} to {} in {:.2?}",
        ByteSize(image.data().len() as u64),
        ByteSize(compressed.len() as u64),
        start.elapsed()
    );
    Ok(())
}
