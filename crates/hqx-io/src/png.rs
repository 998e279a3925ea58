//! PNG image format support
//!
//! Palette and sub-byte grayscale images are expanded by the decoder, so
//! every PNG arrives as 8- or 16-bit gray, gray+alpha, RGB or RGBA. 16-bit
//! samples keep their high byte.

use crate::{IoError, IoResult};
use hqx_core::{Raster, RasterMut, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    let (color_type, bit_depth) = reader.output_color_type();

    let channels = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "PNG palette was not expanded".to_string(),
            ));
        }
    };
    let bytes_per_sample = match bit_depth {
        BitDepth::Eight => 1,
        BitDepth::Sixteen => 2,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG format: {:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let mut raster = RasterMut::new(width, height)?;
    raster.set_has_alpha(matches!(
        color_type,
        ColorType::GrayscaleAlpha | ColorType::Rgba
    ));

    let bytes_per_row = output_info.line_size;
    let stride = channels * bytes_per_sample;
    let data = &buf[..output_info.buffer_size()];

    for y in 0..height {
        let row_start = y as usize * bytes_per_row;
        let row = raster.row_data_mut(y);
        for (x, out) in row.iter_mut().enumerate() {
            let idx = row_start + x * stride;
            // High byte of each sample
            let s = |i: usize| data[idx + i * bytes_per_sample];
            *out = match channels {
                1 => color::gray(s(0)),
                2 => color::compose_rgba(s(0), s(0), s(0), s(1)),
                3 => color::compose_rgb(s(0), s(1), s(2)),
                _ => color::compose_rgba(s(0), s(1), s(2), s(3)),
            };
        }
    }

    log::debug!(
        "read PNG {}x{} ({:?}, {:?})",
        width,
        height,
        color_type,
        bit_depth
    );
    Ok(raster.into())
}

/// Write a PNG image
///
/// Writes 8-bit RGBA when the raster carries alpha, 8-bit RGB otherwise.
pub fn write_png<W: Write>(raster: &Raster, writer: W) -> IoResult<()> {
    let width = raster.width();
    let height = raster.height();
    let color_type = if raster.has_alpha() {
        ColorType::Rgba
    } else {
        ColorType::Rgb
    };

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let samples = if raster.has_alpha() { 4 } else { 3 };
    let mut data = Vec::with_capacity(raster.data().len() * samples);
    for &pixel in raster.data() {
        let (r, g, b, a) = color::extract_rgba(pixel);
        data.extend_from_slice(&[r, g, b]);
        if raster.has_alpha() {
            data.push(a);
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    log::debug!("wrote PNG {}x{} ({:?})", width, height, color_type);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_png_roundtrip_rgb() {
        let mut raster = RasterMut::new(5, 5).unwrap();
        raster.set_rgb(0, 0, 255, 0, 0).unwrap();
        raster.set_rgb(1, 1, 0, 255, 0).unwrap();
        raster.set_rgb(2, 2, 0, 0, 255).unwrap();
        let raster: Raster = raster.into();

        let mut buffer = Vec::new();
        write_png(&raster, &mut buffer).unwrap();

        let raster2 = read_png(Cursor::new(buffer)).unwrap();
        assert!(!raster2.has_alpha());
        assert_eq!(raster2.get_rgb(0, 0), Some((255, 0, 0)));
        assert_eq!(raster2.get_rgb(1, 1), Some((0, 255, 0)));
        assert_eq!(raster2.get_rgb(2, 2), Some((0, 0, 255)));
        assert_eq!(raster2.data(), raster.data());
    }

    #[test]
    fn test_png_roundtrip_rgba() {
        let mut raster = RasterMut::new(3, 2).unwrap();
        raster.set_has_alpha(true);
        raster.set_rgba(2, 1, 10, 20, 30, 40).unwrap();
        let raster: Raster = raster.into();

        let mut buffer = Vec::new();
        write_png(&raster, &mut buffer).unwrap();

        let raster2 = read_png(Cursor::new(buffer)).unwrap();
        assert!(raster2.has_alpha());
        assert_eq!(raster2.get_rgba(2, 1), Some((10, 20, 30, 40)));
        assert_eq!(raster2.data(), raster.data());
    }

    #[test]
    fn test_read_grayscale() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 4, 1);
            encoder.set_color(ColorType::Grayscale);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[0, 64, 128, 255]).unwrap();
        }
        let raster = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(
            raster.data(),
            &[
                color::gray(0),
                color::gray(64),
                color::gray(128),
                color::gray(255)
            ]
        );
    }

    #[test]
    fn test_read_16bit_takes_high_byte() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 2, 1);
            encoder.set_color(ColorType::Grayscale);
            encoder.set_depth(BitDepth::Sixteen);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[0x12, 0x34, 0xab, 0xcd]).unwrap();
        }
        let raster = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(raster.data(), &[color::gray(0x12), color::gray(0xab)]);
    }

    #[test]
    fn test_read_garbage() {
        assert!(read_png(Cursor::new(b"not a png".to_vec())).is_err());
    }
}
