//! Minimal 8-bit greyscale PGM (P5 binary and P2 ASCII) reader and writer.

use crate::error::{CliError, PgmError};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

/// A single-channel 8-bit image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pgm {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Pgm {
    pub fn from_data(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn open(path: &Path) -> Result<Self, CliError> {
        let reader = BufReader::new(File::open(path)?);
        Self::read(reader)
    }

    /// Reads a P5 or P2 image. Header fields may share lines and `#` comments may appear
    /// between them.
    pub fn read<R: BufRead>(mut reader: R) -> Result<Self, CliError> {
        let magic = read_header_token(&mut reader)?;
        let binary = match magic.as_str() {
            "P5" => true,
            "P2" => false,
            _ => return Err(PgmError::UnsupportedMagic(magic).into()),
        };

        let width = parse_header_field::<usize, _>(&mut reader, "expected width")?;
        let height = parse_header_field::<usize, _>(&mut reader, "expected height")?;
        let max_value = parse_header_field::<u32, _>(&mut reader, "expected maximum value")?;
        if max_value != 255 {
            return Err(PgmError::UnsupportedMaxValue(max_value).into());
        }

        let expected = width
            .checked_mul(height)
            .ok_or(PgmError::MalformedHeader("image too large"))?;

        // Grown from the data actually present; the header size is untrusted.
        let data = if binary {
            let mut data = Vec::new();
            reader.take(expected as u64).read_to_end(&mut data)?;
            data
        } else {
            let mut text = String::new();
            reader.read_to_string(&mut text)?;
            text.split_whitespace()
                .take(expected)
                .map(|value| {
                    value
                        .parse::<u8>()
                        .map_err(|_| PgmError::InvalidSample(value.to_string()))
                })
                .collect::<Result<Vec<u8>, PgmError>>()?
        };

        if data.len() != expected {
            return Err(PgmError::Truncated {
                expected,
                actual: data.len(),
            }
            .into());
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Writes a binary (P5) PGM.
    pub fn save(&self, path: &Path) -> Result<(), CliError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<(), CliError> {
        write!(writer, "P5\n{} {}\n255\n", self.width, self.height)?;
        writer.write_all(&self.data)?;
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Reads the next whitespace-delimited header token, skipping `#` comments.
///
/// Exactly one whitespace byte after the token is consumed, so binary data that follows the
/// last header field is left intact.
fn read_header_token<R: BufRead>(reader: &mut R) -> Result<String, CliError> {
    let mut token = Vec::new();
    loop {
        let Some(byte) = next_byte(reader)? else {
            break;
        };
        if byte == b'#' && token.is_empty() {
            let mut comment = Vec::new();
            reader.read_until(b'\n', &mut comment)?;
        } else if byte.is_ascii_whitespace() {
            if !token.is_empty() {
                break;
            }
        } else {
            token.push(byte);
        }
    }

    if token.is_empty() {
        return Err(PgmError::MalformedHeader("unexpected end of header").into());
    }
    Ok(String::from_utf8_lossy(&token).into_owned())
}

fn parse_header_field<T: FromStr, R: BufRead>(
    reader: &mut R,
    what: &'static str,
) -> Result<T, CliError> {
    read_header_token(reader)?
        .parse()
        .map_err(|_| CliError::from(PgmError::MalformedHeader(what)))
}

fn next_byte<R: BufRead>(reader: &mut R) -> Result<Option<u8>, CliError> {
    let Some(&byte) = reader.fill_buf()?.first() else {
        return Ok(None);
    };
    reader.consume(1);
    Ok(Some(byte))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;

    #[test]
    fn reads_binary_pgm_with_comment() {
        let mut bytes = b"P5\n# made by hand\n3 2\n255\n".to_vec();
        bytes.extend_from_slice(&[0, 1, 2, 253, 254, 255]);
        let pgm = Pgm::read(Cursor::new(bytes)).unwrap();
        assert_eq!((pgm.width(), pgm.height()), (3, 2));
        assert_eq!(pgm.data(), &[0, 1, 2, 253, 254, 255]);
    }

    #[test]
    fn reads_ascii_pgm() {
        let text = "P2\n2 2\n255\n10 20\n30 40\n";
        let pgm = Pgm::read(Cursor::new(text)).unwrap();
        assert_eq!(pgm.data(), &[10, 20, 30, 40]);
    }

    #[test]
    fn write_then_read_preserves_image() {
        let pgm = Pgm::from_data(4, 2, (0..8).map(|x| x * 30).collect());
        let mut bytes = Vec::new();
        pgm.write(&mut bytes).unwrap();
        assert_eq!(Pgm::read(Cursor::new(bytes)).unwrap(), pgm);
    }

    #[rstest]
    #[case("P6\n1 1\n255\n\0")]
    #[case("P5\n1\n255\n\0")]
    #[case("P5\n")]
    #[case("P5\n1 1\n65535\n\0\0")]
    #[case("P5\n2 2\n255\n\0")]
    #[case("P2\n1 1\n255\n300\n")]
    fn rejects_invalid_files(#[case] contents: &str) {
        assert!(Pgm::read(Cursor::new(contents)).is_err());
    }

    #[rstest]
    #[case(b"P5 2 2 255\n\x01\x02\x03\x04".as_slice())]
    #[case(b"P5\n2 # width\n# height next\n2\n255 \x01\x02\x03\x04".as_slice())]
    #[case(b"P2 2 2\n255 1 2\n3 4".as_slice())]
    fn header_fields_may_share_lines(#[case] contents: &[u8]) {
        let pgm = Pgm::read(Cursor::new(contents.to_vec())).unwrap();
        assert_eq!((pgm.width(), pgm.height()), (2, 2));
        assert_eq!(pgm.data(), &[1, 2, 3, 4]);
    }

    #[test]
    fn binary_data_starting_with_whitespace_is_kept() {
        let pgm = Pgm::read(Cursor::new(b"P5\n2 1\n255\n\n ".to_vec())).unwrap();
        assert_eq!(pgm.data(), b"\n ");
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn oversized_header_is_rejected_without_allocating() {
        let result = Pgm::read(Cursor::new(b"P5\n4000000000 3000000000\n255\n\x07".to_vec()));
        assert!(matches!(
            result,
            Err(CliError::Pgm(PgmError::Truncated {
                expected: 12_000_000_000_000_000_000,
                actual: 1
            }))
        ));
    }

    #[test]
    fn ascii_sample_out_of_range_is_a_data_error() {
        let result = Pgm::read(Cursor::new("P2\n2 1\n255\n12 300\n"));
        assert!(matches!(
            result,
            Err(CliError::Pgm(PgmError::InvalidSample(ref value))) if value == "300"
        ));
    }

    #[test]
    fn truncated_data_reports_sizes() {
        let result = Pgm::read(Cursor::new(b"P5\n2 2\n255\n\x01\x02".to_vec()));
        assert!(matches!(
            result,
            Err(CliError::Pgm(PgmError::Truncated {
                expected: 4,
                actual: 2
            }))
        ));
    }

    #[test]
    fn save_and_open_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("image.pgm");
        let pgm = Pgm::from_data(2, 3, vec![9, 8, 7, 6, 5, 4]);
        pgm.save(&path).unwrap();
        assert_eq!(Pgm::open(&path).unwrap(), pgm);
    }
}
