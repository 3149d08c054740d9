//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::framebuffer::Framebuffer;

/// PNG encoder for framebuffer output.
#[derive(Debug, Clone, Copy)]
pub struct PngEncoder;

impl PngEncoder {
    /// Write a framebuffer to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        Self::encode(fb, BufWriter::new(file))?;
        debug!("wrote {}x{} PNG to {}", fb.width(), fb.height(), path.display());
        Ok(())
    }

    /// Encode a framebuffer to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(fb: &Framebuffer) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode(fb, &mut buffer)?;
        Ok(buffer)
    }

    fn encode<W: Write>(fb: &Framebuffer, writer: W) -> Result<()> {
        let mut encoder = png::Encoder::new(writer, fb.width(), fb.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(fb.pixels())?;
        writer.finish()?;
        Ok(())
    }
}
