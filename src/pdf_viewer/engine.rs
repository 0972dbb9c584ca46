use anyhow::{Context as _, Result};
use gpui::{Image as GpuiImage, ImageFormat as GpuiImageFormat};
use image::ImageFormat as RasterImageFormat;
use pdfium_render::prelude::*;
use std::io::Cursor;
use std::sync::Arc;

/// A page rendered to an image, with the logical size the layout should give
/// it. Width and height already include the requested zoom.
pub struct RenderedPage {
    pub image: Arc<GpuiImage>,
    pub width: f32,
    pub height: f32,
}

/// Wraps the Pdfium library binding. Bound once at startup and shared behind
/// an `Arc`; render tasks reopen the document from its in-memory bytes on the
/// background executor.
pub struct PdfEngine {
    pdfium: Pdfium,
}

impl PdfEngine {
    pub fn new() -> Result<Self> {
        let bindings =
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./lib"))
                .or_else(|_| {
                    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
                })
                .or_else(|_| Pdfium::bind_to_system_library())
                .context("Pdfium dynamic library not found (tried ./lib, ./ and system paths)")?;

        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }

    /// Opens `bytes` as a PDF and returns its page count.
    pub fn page_count(&self, bytes: &[u8]) -> Result<u32> {
        let document = self
            .pdfium
            .load_pdf_from_byte_slice(bytes, None)
            .context("Pdfium could not open the document")?;
        Ok(document.pages().len() as u32)
    }

    /// Renders one page (`page_number` is 1-based) at `scale`, where scale 1.0
    /// maps one PDF point to one pixel. Highlight boxes are stored in the same
    /// unscaled coordinates, so overlays line up by multiplying by `scale`.
    pub fn render_page(&self, bytes: &[u8], page_number: u32, scale: f32) -> Result<RenderedPage> {
        let document = self
            .pdfium
            .load_pdf_from_byte_slice(bytes, None)
            .context("Pdfium could not open the document")?;

        let page_index = page_number.saturating_sub(1);
        let page = document
            .pages()
            .get(page_index.min(u16::MAX as u32) as u16)
            .with_context(|| format!("page {page_number} is out of range"))?;

        let width = page.width().value * scale;
        let height = page.height().value * scale;
        let render_config = PdfRenderConfig::new().set_target_width(width.round().max(1.0) as i32);

        let bitmap = page
            .render_with_config(&render_config)
            .with_context(|| format!("failed to render page {page_number}"))?;

        let mut cursor = Cursor::new(Vec::new());
        bitmap
            .as_image()
            .write_to(&mut cursor, RasterImageFormat::Png)
            .context("failed to encode rendered page as PNG")?;

        Ok(RenderedPage {
            image: Arc::new(GpuiImage::from_bytes(
                GpuiImageFormat::Png,
                cursor.into_inner(),
            )),
            width,
            height,
        })
    }
}
