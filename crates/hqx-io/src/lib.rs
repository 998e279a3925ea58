//! hqx-io - Image I/O for the hqx magnification filters
//!
//! Reads and writes [`Raster`]s as:
//!
//! - PNG (feature `png-format`, via the `png` crate)
//! - Binary PGM / PPM / PAM (feature `pnm`)
//!
//! The format of an input is detected from its magic bytes.

mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use hqx_core::Raster;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Read, Write};
use std::path::Path;

/// Read an image from a file, detecting its format.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let data = std::fs::read(path)?;
    read_image_mem(&data)
}

/// Read an image from memory, detecting its format.
pub fn read_image_mem(data: &[u8]) -> IoResult<Raster> {
    match detect_format_from_bytes(data)? {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(Cursor::new(data)),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(Cursor::new(data)),
        other => Err(IoError::UnsupportedFormat(format!("{other:?} is not enabled"))),
    }
}

/// Write an image to a file in the given format.
pub fn write_image<P: AsRef<Path>>(
    raster: &Raster,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_image_to(raster, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image into memory in the given format.
pub fn write_image_mem(raster: &Raster, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_to(raster, &mut buffer, format)?;
    Ok(buffer)
}

/// Read an image from any reader, detecting its format.
///
/// The whole stream is read into memory first.
pub fn read_image_from<R: Read>(reader: R) -> IoResult<Raster> {
    let mut data = Vec::new();
    BufReader::new(reader).read_to_end(&mut data)?;
    read_image_mem(&data)
}

fn write_image_to<W: Write>(raster: &Raster, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(raster, writer),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(raster, writer),
        other => Err(IoError::UnsupportedFormat(format!("cannot write {other:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hqx_core::RasterMut;

    fn sample() -> Raster {
        let mut raster = RasterMut::new(3, 2).unwrap();
        raster.set_rgb(0, 0, 12, 34, 56).unwrap();
        raster.set_rgb(2, 1, 200, 100, 0).unwrap();
        raster.into()
    }

    #[test]
    fn test_mem_roundtrip_all_formats() {
        let raster = sample();
        for format in [ImageFormat::Png, ImageFormat::Pnm] {
            let bytes = write_image_mem(&raster, format).unwrap();
            assert_eq!(detect_format_from_bytes(&bytes).unwrap(), format);
            let back = read_image_mem(&bytes).unwrap();
            assert_eq!(back.data(), raster.data(), "{format:?}");
        }
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(write_image_mem(&sample(), ImageFormat::Unknown).is_err());
        assert!(read_image_mem(b"nothing here").is_err());
    }

    #[test]
    fn test_read_image_from_reader() {
        let bytes = write_image_mem(&sample(), ImageFormat::Pnm).unwrap();
        let back = read_image_from(bytes.as_slice()).unwrap();
        assert_eq!(back.data(), sample().data());
    }
}
