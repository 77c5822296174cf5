//! PNM (Portable Any Map) format support
//!
//! Reads PGM and PPM in both ASCII (P2/P3) and binary (P5/P6) encodings,
//! with any maxval up to 65535. Writes binary PPM (P6).

use crate::{IoError, IoResult};
use hueframe_core::{PixelGrid, color};
use std::io::{Read, Write};

/// Cursor over a PNM header that skips whitespace and `#` comments.
struct Tokens<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn skip_separators(&mut self) {
        while let Some(&b) = self.data.get(self.pos) {
            if b == b'#' {
                while self.data.get(self.pos).is_some_and(|&c| c != b'\n') {
                    self.pos += 1;
                }
            } else if b.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn next_u32(&mut self, what: &str) -> IoResult<u32> {
        self.skip_separators();
        let start = self.pos;
        while self.data.get(self.pos).is_some_and(u8::is_ascii_digit) {
            self.pos += 1;
        }
        std::str::from_utf8(&self.data[start..self.pos])
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| IoError::InvalidData(format!("PNM: bad or missing {}", what)))
    }
}

/// Read a PNM image.
pub fn read_pnm<R: Read>(mut reader: R) -> IoResult<PixelGrid> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    if data.len() < 2 || data[0] != b'P' {
        return Err(IoError::InvalidData("not a PNM file".to_string()));
    }
    let kind = data[1];
    let (channels, binary) = match kind {
        b'2' => (1, false),
        b'3' => (3, false),
        b'5' => (1, true),
        b'6' => (3, true),
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNM type: P{}",
                kind as char
            )));
        }
    };

    let mut tokens = Tokens::new(&data[2..]);
    let width = tokens.next_u32("width")?;
    let height = tokens.next_u32("height")?;
    let maxval = tokens.next_u32("maxval")?;
    if maxval == 0 || maxval > 65535 {
        return Err(IoError::InvalidData(format!("PNM: invalid maxval {}", maxval)));
    }

    let count = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(channels))
        .ok_or_else(|| {
            IoError::InvalidData(format!("PNM: dimensions {}x{} too large", width, height))
        })?;
    // Every sample takes at least one byte of input
    if count > data.len() {
        return Err(IoError::InvalidData(format!(
            "PNM: {}x{} raster does not fit in {} bytes",
            width,
            height,
            data.len()
        )));
    }
    let mut samples = Vec::with_capacity(count);
    if binary {
        // Exactly one whitespace byte separates the header from the raster
        let start = 2 + tokens.pos + 1;
        let bytes_per_sample = if maxval > 255 { 2 } else { 1 };
        let raster = count
            .checked_mul(bytes_per_sample)
            .and_then(|len| data.get(start..start.checked_add(len)?))
            .ok_or_else(|| IoError::InvalidData("PNM: truncated raster".to_string()))?;
        if bytes_per_sample == 2 {
            samples.extend(
                raster
                    .chunks_exact(2)
                    .map(|s| u16::from_be_bytes([s[0], s[1]]) as u32),
            );
        } else {
            samples.extend(raster.iter().map(|&s| s as u32));
        }
    } else {
        for _ in 0..count {
            samples.push(tokens.next_u32("sample")?);
        }
    }

    let scale = |v: u32| -> u8 { ((v.min(maxval) * 255 + maxval / 2) / maxval) as u8 };
    let packed: Vec<u32> = samples
        .chunks_exact(channels)
        .map(|s| match s {
            [g] => {
                let g = scale(*g);
                color::compose_rgb(g, g, g)
            }
            _ => color::compose_rgb(scale(s[0]), scale(s[1]), scale(s[2])),
        })
        .collect();

    Ok(PixelGrid::from_packed(width, height, &packed)?)
}

/// Write a grid as binary PPM (P6, maxval 255). Alpha is discarded.
pub fn write_pnm<W: Write>(grid: &PixelGrid, mut writer: W) -> IoResult<()> {
    write!(writer, "P6\n{} {}\n255\n", grid.width(), grid.height())?;
    writer.write_all(&grid.to_rgb_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hueframe_core::Pixel;

    #[test]
    fn test_pnm_roundtrip() {
        let grid = PixelGrid::from_fn(4, 3, |x, y| Pixel::from_rgb(x as u8, y as u8, 255));
        let mut buffer = Vec::new();
        write_pnm(&grid, &mut buffer).unwrap();
        assert!(buffer.starts_with(b"P6\n4 3\n255\n"));
        assert_eq!(read_pnm(buffer.as_slice()).unwrap(), grid);
    }

    #[test]
    fn test_read_ascii_ppm_with_comments() {
        let text = b"P3\n# a comment\n2 1 # trailing\n255\n255 0 0   0 0 255\n";
        let grid = read_pnm(&text[..]).unwrap();
        assert_eq!(grid.get(0, 0).unwrap().rgb(), (255, 0, 0));
        assert_eq!(grid.get(1, 0).unwrap().rgb(), (0, 0, 255));
    }

    #[test]
    fn test_read_pgm_scales_maxval() {
        let grid = read_pnm(&b"P2 2 1 15 15 0"[..]).unwrap();
        assert_eq!(grid.get(0, 0).unwrap().rgb(), (255, 255, 255));
        assert!(grid.get(1, 0).unwrap().is_black());

        let mut binary = b"P5\n1 1\n65535\n".to_vec();
        binary.extend_from_slice(&[0x80, 0x00]);
        let grid = read_pnm(binary.as_slice()).unwrap();
        assert_eq!(grid.get(0, 0).unwrap().red(), 128);
    }

    #[test]
    fn test_read_pnm_errors() {
        assert!(read_pnm(&b"P6\n2 2\n255\n\x00\x00"[..]).is_err());
        assert!(read_pnm(&b"P4\n1 1\n\x00"[..]).is_err());
        assert!(read_pnm(&b"P2\n1 1\n0\n0"[..]).is_err());
    }

    #[test]
    fn test_read_pnm_oversized_header() {
        for data in [
            &b"P6\n4294967295 4294967295\n255\n\x00"[..],
            &b"P5\n4294967295 4294967295\n65535\n\x00\x00"[..],
            &b"P3\n2000000000 2000000000\n255\n1 2 3"[..],
            &b"P2\n100000 100000\n255\n7"[..],
        ] {
            assert!(
                matches!(read_pnm(data), Err(IoError::InvalidData(_))),
                "{:?}",
                String::from_utf8_lossy(&data[..2])
            );
        }
    }
}
