//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use hqx_core::Raster;
use hqx_io::ImageFormat;
use std::fs;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare computed results (default)
    #[default]
    Compare,
    /// Compare, and also write displayed rasters to the regout directory
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the index of the current check, the mode and
/// every failure seen so far. Each `compare_*` call advances the index,
/// so failures can be located by number.
pub struct RegParams {
    /// Name of the test (e.g., "scale")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters, with the mode taken from
    /// `REGTEST_MODE`.
    pub fn new(test_name: &str) -> Self {
        Self::with_mode(test_name, RegTestMode::from_env())
    }

    /// Create new regression test parameters with an explicit mode.
    pub fn with_mode(test_name: &str, mode: RegTestMode) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two numeric values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.fail(format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two rasters for exact equality of size and colors
    ///
    /// The first differing pixel is reported with both colors.
    pub fn compare_rasters(&mut self, expected: &Raster, actual: &Raster) -> bool {
        self.index += 1;

        if !expected.sizes_equal(actual) {
            self.fail(format!(
                "Failure in {}_reg: raster comparison for index {} - size {}x{} vs {}x{}",
                self.test_name,
                self.index,
                expected.width(),
                expected.height(),
                actual.width(),
                actual.height()
            ));
            return false;
        }

        let width = expected.width() as usize;
        let mismatch = expected
            .data()
            .iter()
            .zip(actual.data())
            .position(|(a, b)| a != b);
        if let Some(i) = mismatch {
            self.fail(format!(
                "Failure in {}_reg: raster comparison for index {} - pixel mismatch at ({}, {}): \
                 expected {:#010x}, got {:#010x}",
                self.test_name,
                self.index,
                i % width,
                i / width,
                expected.data()[i],
                actual.data()[i]
            ));
            return false;
        }

        true
    }

    /// Compare two binary data arrays
    ///
    /// # Returns
    ///
    /// `true` if data is identical, `false` otherwise.
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            self.fail(format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 sizes: {} vs {}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len()
            ));
            false
        } else {
            true
        }
    }

    /// Write a raster to the regout directory in display mode
    ///
    /// The file is named `<test>.<index>.<ext>`. Nothing is written in
    /// compare mode, but the index still advances so numbering stays
    /// stable across modes.
    pub fn display_raster(&mut self, raster: &Raster, format: ImageFormat) -> TestResult<()> {
        self.index += 1;
        if !self.display() {
            return Ok(());
        }

        let dir = regout_dir();
        fs::create_dir_all(&dir).map_err(|e| TestError::DirectoryCreate {
            path: dir.clone(),
            message: e.to_string(),
        })?;
        let path = format!(
            "{}/{}.{:02}.{}",
            dir,
            self.test_name,
            self.index,
            format.extension()
        );
        hqx_io::write_image(raster, &path, format).map_err(|e| TestError::ImageWrite {
            path: path.clone(),
            message: e.to_string(),
        })?;
        eprintln!("Wrote: {}", path);
        Ok(())
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_values() {
        let mut rp = RegParams::with_mode("test", RegTestMode::Compare);
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.index(), 3);
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_rasters() {
        let a = Raster::from_pixels(2, 1, vec![1, 2]).unwrap();
        let b = Raster::from_pixels(2, 1, vec![1, 3]).unwrap();
        let c = Raster::from_pixels(1, 2, vec![1, 2]).unwrap();
        let mut rp = RegParams::with_mode("test", RegTestMode::Compare);
        assert!(rp.compare_rasters(&a, &a.clone()));
        assert!(!rp.compare_rasters(&a, &b));
        assert!(rp.failures()[0].contains("(1, 0)"));
        assert!(!rp.compare_rasters(&a, &c));
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_strings() {
        let mut rp = RegParams::with_mode("test", RegTestMode::Compare);
        assert!(rp.compare_strings(b"abc", b"abc"));
        assert!(!rp.compare_strings(b"abc", b"abd"));
    }

    #[test]
    fn test_display_raster_compare_mode_writes_nothing() {
        let mut rp = RegParams::with_mode("test_nowrite", RegTestMode::Compare);
        let r = Raster::new(1, 1).unwrap();
        rp.display_raster(&r, ImageFormat::Png).unwrap();
        assert_eq!(rp.index(), 1);
        let path = format!("{}/test_nowrite.01.png", regout_dir());
        assert!(!std::path::Path::new(&path).exists());
    }
}
