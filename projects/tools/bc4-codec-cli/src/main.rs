#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod logging;
mod pgm;
use argh::FromArgs;
use core::error::Error;

#[derive(FromArgs, Debug)]
/// BC4 (ATI1) compression tool for greyscale PGM images
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Compress(commands::compress::CompressCmd),
    Decompress(commands::decompress::DecompressCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli: TopLevel = argh::from_env();
    logging::init_logging();

    match cli.command {
        Commands::Compress(cmd) => {
            commands::compress::handle_compress_command(cmd)?;
        }
        Commands::Decompress(cmd) => {
            commands::decompress::handle_decompress_command(cmd)?;
        }
    }

    Ok(())
}
