use crate::error::CliError;
use crate::pgm::Pgm;
use argh::FromArgs;
use bc4_codec_api::{bc4_compressed_size, decompress_bc4_image_allocating, EdgePolicy};
use bytesize::ByteSize;
use std::{fs, path::PathBuf, time::Instant};
use tracing::info;

#[derive(FromArgs, Debug)]
/// Decompress raw BC4 blocks into an 8-bit greyscale PGM image
#[argh(subcommand, name = "decompress")]
pub struct DecompressCmd {
    /// input file with raw BC4 blocks
    #[argh(option)]
    pub input: PathBuf,

    /// output PGM file
    #[argh(option)]
    pub output: PathBuf,

    /// image width in pixels
    #[argh(option)]
    pub width: usize,

    /// image height in pixels
    #[argh(option)]
    pub height: usize,

    /// edge policy the blocks were compressed with (drop, pad, error) [default: drop]
    #[argh(option, default = "EdgePolicy::Drop")]
    pub edge_policy: EdgePolicy,
}

pub fn handle_decompress_command(cmd: DecompressCmd) -> Result<(), CliError> {
    let start = Instant::now();
    let compressed = fs::read(&cmd.input)?;

    let needed = bc4_compressed_size(cmd.width, cmd.height, cmd.edge_policy)?;
    if compressed.len() != needed {
        return Err(CliError::CompressedSizeMismatch {
            width: cmd.width,
            height: cmd.height,
            needed,
            actual: compressed.len(),
        });
    }

    let restored =
        decompress_bc4_image_allocating(&compressed, cmd.width, cmd.height, cmd.edge_policy)?;
    let image = Pgm::from_data(cmd.width, cmd.height, restored.as_slice().to_vec());
    image.save(&cmd.output)?;

    info!(
        output = %cmd.output.display(),
        "decompressed {} to {} in {:.2?}",
        ByteSize(compressed.len() as u64),
        ByteSize(image.data().len() as u64),
        start.elapsed()
    );
    Ok(())
}
