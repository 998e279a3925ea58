//! PNM (Portable Any Map) format support
//!
//! Reads binary PGM (P5), PPM (P6) and PAM (P7) images, and writes PPM
//! for opaque rasters or PAM `RGB_ALPHA` for rasters with alpha. Samples
//! with a maxval other than 255 are rescaled to 8 bits. ASCII variants
//! (P1/P2/P3) and bitmaps (P4) are not supported.

use crate::{IoError, IoResult};
use hqx_core::{Raster, RasterMut, color};
use std::io::{BufRead, Read, Write};

/// Largest decoded raster accepted, in bytes of packed colors.
const MAX_RASTER_BYTES: u64 = 1 << 28;

/// Read a PNM image (P5/P6/P7) from a reader.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Raster> {
    let magic = next_token(&mut reader)?;
    let header = match magic.as_str() {
        "P5" => read_pnm_header(&mut reader, 1)?,
        "P6" => read_pnm_header(&mut reader, 3)?,
        "P7" => read_pam_header(&mut reader)?,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNM magic: {magic}"
            )));
        }
    };
    if header.maxval == 0 || header.maxval > 65535 {
        return Err(IoError::InvalidData(format!(
            "invalid maxval {}",
            header.maxval
        )));
    }

    let (width, height) = (header.width, header.height);
    if width == 0 || height == 0 {
        return Err(hqx_core::Error::InvalidDimension { width, height }.into());
    }
    let pixels = u64::from(width) * u64::from(height);
    if pixels > MAX_RASTER_BYTES / 4 {
        return Err(IoError::InvalidData(format!(
            "PNM image {width}x{height} exceeds the decode limit"
        )));
    }

    let bytes_per_sample = if header.maxval > 255 { 2 } else { 1 };
    let stride = header.channels * bytes_per_sample;
    let row_len = width as usize * stride;
    let data_len = row_len * height as usize;
    let mut data = Vec::new();
    reader.take(data_len as u64).read_to_end(&mut data)?;
    if data.len() < data_len {
        return Err(IoError::DecodeError(format!(
            "PNM data truncated: expected {data_len} bytes, got {}",
            data.len()
        )));
    }

    let mut raster = RasterMut::new(width, height)?;
    raster.set_has_alpha(header.channels == 2 || header.channels == 4);

    for (y, row) in data.chunks_exact(row_len).enumerate() {
        for (out, px) in raster.row_data_mut(y as u32).iter_mut().zip(row.chunks_exact(stride)) {
            let s = |i: usize| {
                let raw = if bytes_per_sample == 2 {
                    (u32::from(px[2 * i]) << 8) | u32::from(px[2 * i + 1])
                } else {
                    u32::from(px[i])
                };
                (raw.min(header.maxval) * 255 / header.maxval) as u8
            };
            *out = match header.channels {
                1 => color::gray(s(0)),
                2 => color::compose_rgba(s(0), s(0), s(0), s(1)),
                3 => color::compose_rgb(s(0), s(1), s(2)),
                _ => color::compose_rgba(s(0), s(1), s(2), s(3)),
            };
        }
    }

    log::debug!(
        "read PNM {}x{} ({} channels, maxval {})",
        header.width,
        header.height,
        header.channels,
        header.maxval
    );
    Ok(raster.into())
}

/// Write a raster as binary PNM to a writer.
///
/// Chooses P6 for opaque rasters and P7 (`RGB_ALPHA`) when the raster
/// carries alpha.
pub fn write_pnm<W: Write>(raster: &Raster, mut writer: W) -> IoResult<()> {
    let (width, height) = (raster.width(), raster.height());
    let has_alpha = raster.has_alpha();
    if has_alpha {
        write!(
            writer,
            "P7\nWIDTH {width}\nHEIGHT {height}\nDEPTH 4\nMAXVAL 255\nTUPLTYPE RGB_ALPHA\nENDHDR\n"
        )?;
    } else {
        write!(writer, "P6\n{width} {height}\n255\n")?;
    }

    let samples = if has_alpha { 4 } else { 3 };
    let mut row_buf = Vec::with_capacity(width as usize * samples);
    for y in 0..height {
        row_buf.clear();
        for &pixel in raster.row_data(y) {
            let (r, g, b, a) = color::extract_rgba(pixel);
            row_buf.extend_from_slice(&[r, g, b]);
            if has_alpha {
                row_buf.push(a);
            }
        }
        writer.write_all(&row_buf)?;
    }
    writer.flush()?;

    log::debug!(
        "wrote {} {}x{}",
        if has_alpha { "PAM" } else { "PPM" },
        width,
        height
    );
    Ok(())
}

struct PnmHeader {
    width: u32,
    height: u32,
    channels: usize,
    maxval: u32,
}

fn read_pnm_header<R: BufRead>(reader: &mut R, channels: usize) -> IoResult<PnmHeader> {
    let width = parse_number(&next_token(reader)?)?;
    let height = parse_number(&next_token(reader)?)?;
    let maxval = parse_number(&next_token(reader)?)?;
    Ok(PnmHeader {
        width,
        height,
        channels,
        maxval,
    })
}

fn read_pam_header<R: BufRead>(reader: &mut R) -> IoResult<PnmHeader> {
    let (mut width, mut height, mut depth, mut maxval) = (None, None, None, None);
    let mut tupltype = String::new();
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(IoError::InvalidData("PAM header missing ENDHDR".to_string()));
        }
        let mut fields = line.split_whitespace();
        let Some(key) = fields.next() else { continue };
        let value = fields.next().unwrap_or_default();
        match key {
            "ENDHDR" => break,
            "WIDTH" => width = Some(parse_number(value)?),
            "HEIGHT" => height = Some(parse_number(value)?),
            "DEPTH" => depth = Some(parse_number(value)?),
            "MAXVAL" => maxval = Some(parse_number(value)?),
            "TUPLTYPE" => tupltype = value.to_string(),
            _ if key.starts_with('#') => {}
            _ => {
                return Err(IoError::InvalidData(format!(
                    "unknown PAM header field {key}"
                )));
            }
        }
    }

    let (Some(width), Some(height), Some(depth), Some(maxval)) = (width, height, depth, maxval)
    else {
        return Err(IoError::InvalidData("incomplete PAM header".to_string()));
    };
    let expected = match tupltype.as_str() {
        "GRAYSCALE" => 1,
        "GRAYSCALE_ALPHA" => 2,
        "RGB" => 3,
        "RGB_ALPHA" => 4,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PAM tuple type: {other}"
            )));
        }
    };
    if depth != expected {
        return Err(IoError::InvalidData(format!(
            "PAM depth {depth} does not match {tupltype}"
        )));
    }
    Ok(PnmHeader {
        width,
        height,
        channels: expected as usize,
        maxval,
    })
}

/// Read one whitespace-delimited header token, skipping `#` comments.
///
/// Consumes the single whitespace byte that ends the token.
fn next_token<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let mut token = String::new();
    let mut byte = [0u8; 1];
    loop {
        if reader.read(&mut byte)? == 0 {
            if token.is_empty() {
                return Err(IoError::InvalidData("truncated PNM header".to_string()));
            }
            return Ok(token);
        }
        match byte[0] {
            b'#' if token.is_empty() => {
                let mut comment = Vec::new();
                reader.read_until(b'\n', &mut comment)?;
            }
            b if b.is_ascii_whitespace() => {
                if !token.is_empty() {
                    return Ok(token);
                }
            }
            b => token.push(b as char),
        }
    }
}

fn parse_number(token: &str) -> IoResult<u32> {
    token
        .parse()
        .map_err(|_| IoError::InvalidData(format!("invalid PNM header value: {token:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_pgm() {
        let mut data = b"P5\n# comment\n3 1\n255\n".to_vec();
        data.extend_from_slice(&[0, 128, 255]);
        let raster = read_pnm(Cursor::new(data)).unwrap();
        assert_eq!((raster.width(), raster.height()), (3, 1));
        assert_eq!(
            raster.data(),
            &[color::gray(0), color::gray(128), color::gray(255)]
        );
        assert!(!raster.has_alpha());
    }

    #[test]
    fn test_read_ppm_maxval_rescale() {
        let mut data = b"P6 1 1 15\n".to_vec();
        data.extend_from_slice(&[15, 0, 5]);
        let raster = read_pnm(Cursor::new(data)).unwrap();
        assert_eq!(raster.get_rgb(0, 0), Some((255, 0, 85)));
    }

    #[test]
    fn test_read_ppm_16bit() {
        let mut data = b"P6\n1 1\n65535\n".to_vec();
        data.extend_from_slice(&[0xff, 0xff, 0x00, 0x00, 0x80, 0x00]);
        let raster = read_pnm(Cursor::new(data)).unwrap();
        assert_eq!(raster.get_rgb(0, 0), Some((255, 0, 127)));
    }

    #[test]
    fn test_ppm_roundtrip() {
        let mut raster = RasterMut::new(2, 2).unwrap();
        raster.set_rgb(0, 0, 1, 2, 3).unwrap();
        raster.set_rgb(1, 1, 250, 251, 252).unwrap();
        let raster: Raster = raster.into();

        let mut buffer = Vec::new();
        write_pnm(&raster, &mut buffer).unwrap();
        assert!(buffer.starts_with(b"P6\n2 2\n255\n"));

        let raster2 = read_pnm(Cursor::new(buffer)).unwrap();
        assert_eq!(raster2.data(), raster.data());
    }

    #[test]
    fn test_pam_roundtrip_alpha() {
        let mut raster = RasterMut::new(2, 1).unwrap();
        raster.set_has_alpha(true);
        raster.set_rgba(1, 0, 9, 8, 7, 6).unwrap();
        let raster: Raster = raster.into();

        let mut buffer = Vec::new();
        write_pnm(&raster, &mut buffer).unwrap();
        assert!(buffer.starts_with(b"P7\n"));

        let raster2 = read_pnm(Cursor::new(buffer)).unwrap();
        assert!(raster2.has_alpha());
        assert_eq!(raster2.get_rgba(1, 0), Some((9, 8, 7, 6)));
    }

    #[test]
    fn test_read_errors() {
        assert!(read_pnm(Cursor::new(b"P3\n1 1\n255\n0 0 0".to_vec())).is_err());
        assert!(read_pnm(Cursor::new(b"P6\n2 2\n255\n\x00\x00".to_vec())).is_err());
        assert!(read_pnm(Cursor::new(b"P6\n0 2\n255\n".to_vec())).is_err());
        assert!(read_pnm(Cursor::new(b"P5\n1 1\n0\n\x00".to_vec())).is_err());
        let pam = b"P7\nWIDTH 1\nHEIGHT 1\nDEPTH 3\nMAXVAL 255\nTUPLTYPE RGB_ALPHA\nENDHDR\n";
        assert!(read_pnm(Cursor::new(pam.to_vec())).is_err());
    }

    #[test]
    fn test_read_rejects_oversized_header() {
        let data = b"P6 4294967295 4294967295 255\n".to_vec();
        assert!(matches!(
            read_pnm(Cursor::new(data)),
            Err(IoError::InvalidData(_))
        ));
        let data = b"P5 20000 20000 255\n\x00".to_vec();
        assert!(matches!(
            read_pnm(Cursor::new(data)),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_read_truncated_data() {
        let data = b"P5 4000 4000 255\n\x00\x01".to_vec();
        assert!(matches!(
            read_pnm(Cursor::new(data)),
            Err(IoError::DecodeError(_))
        ));
    }
}
