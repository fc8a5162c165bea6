use bc4_codec_api::Bc4Error;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Codec(#[from] Bc4Error),
    #[error(transparent)]
    Pgm(#[from] PgmError),
    #[error("compressed input is {actual} bytes, but a {width}x{height} image needs {needed}")]
    CompressedSizeMismatch {
        width: usize,
        height: usize,
        needed: usize,
        actual: usize,
    },
}

#[derive(Debug, Error)]
pub enum PgmError {
    #[error("unsupported PGM magic {0:?}, expected P5 or P2")]
    UnsupportedMagic(String),
    #[error("unsupported maximum value {0}, only 8-bit (255) images are supported")]
    UnsupportedMaxValue(u32),
    #[error("malformed PGM header: {0}")]
    MalformedHeader(&'static str),
    #[error("PGM sample {0:?} is not an integer in 0..=255")]
    InvalidSample(String),
    #[error("PGM pixel data is truncated: expected {expected} samples, found {actual}")]
    Truncated { expected: usize, actual: usize },
}
