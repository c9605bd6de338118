// src/export/mod.rs
//
// Booking confirmation export: paint the document onto a page bitmap, encode
// it, and wrap it in a single-page A4 PDF. Text is flattened into the image.

pub mod pdf;
pub mod raster;
mod shaping;
pub mod text;

use crate::config::ExportConfig;
use crate::document::BookingDocument;
use crate::domain::BookingReference;
use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

pub use raster::{PageRasterizer, Rasterizer};
pub use text::Typeface;

pub const PDF_EXTENSION: &str = "pdf";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("rasterization failed: {0}")]
    Raster(String),
    #[error("image encoding failed: {0}")]
    Encode(String),
    #[error("PDF assembly failed: {0}")]
    Pdf(String),
    #[error("font could not be loaded: {0}")]
    Font(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A finished download. Only ever built from a complete export.
#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ExportedFile {
    /// Writes into `dir` via a temp file that is renamed into place,
    /// so a failed write leaves nothing behind.
    pub fn write_into(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&self.bytes)?;
        tmp.flush()?;

        let path = dir.join(&self.file_name);
        tmp.persist(&path).map_err(|e| ExportError::Io(e.error))?;
        Ok(path)
    }
}

pub fn file_name(reference: &BookingReference) -> String {
    format!("Booking_Confirmation_{reference}.{PDF_EXTENSION}")
}

pub struct DocumentExporter {
    rasterizer: Box<dyn Rasterizer>,
    jpeg_quality: u8,
}

impl DocumentExporter {
    pub fn new(rasterizer: Box<dyn Rasterizer>, jpeg_quality: u8) -> Self {
        Self {
            rasterizer,
            jpeg_quality: jpeg_quality.clamp(1, 100),
        }
    }

    pub fn from_config(cfg: &ExportConfig) -> Result<Self, ExportError> {
        let typeface = match &cfg.font_path {
            Some(path) => Typeface::load(path)?,
            None => Typeface::bundled()?,
        };
        Ok(Self::new(
            Box::new(PageRasterizer::new(typeface)),
            cfg.jpeg_quality,
        ))
    }

    pub fn export(
        &self,
        document: &BookingDocument,
        reference: &BookingReference,
    ) -> Result<ExportedFile, ExportError> {
        match self.build(document) {
            Ok(bytes) => {
                tracing::info!(%reference, bytes = bytes.len(), "booking confirmation exported");
                Ok(ExportedFile {
                    file_name: file_name(reference),
                    bytes,
                })
            }
            Err(e) => {
                tracing::error!(%reference, error = %e, "booking confirmation export failed");
                Err(e)
            }
        }
    }

    fn build(&self, document: &BookingDocument) -> Result<Vec<u8>, ExportError> {
        let jpeg = {
            let bitmap = self.rasterizer.rasterize(document)?;
            encode_jpeg(&bitmap, self.jpeg_quality)?
        };
        pdf::single_image_page(jpeg.bytes, jpeg.width, jpeg.height)
    }
}

struct EncodedImage {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
}

fn encode_jpeg(bitmap: &RgbImage, quality: u8) -> Result<EncodedImage, ExportError> {
    let (width, height) = bitmap.dimensions();
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality)
        .encode_image(bitmap)
        .map_err(|e| ExportError::Encode(e.to_string()))?;
    Ok(EncodedImage {
        bytes,
        width,
        height,
    })
}
