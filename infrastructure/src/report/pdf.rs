//! printpdf-backed [`ReportRenderer`]

use crate::report::layout::{self, Element, LaidOutPage, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use crate::report::metrics::FontStyle;
use coach_application::ports::report_renderer::{RenderError, ReportRenderer};
use coach_domain::{REPORT_MIME_TYPE, ReportDocument};
use printpdf::image_crate::GenericImageView;
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Point, Rgb,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const LAYER_NAME: &str = "Layer 1";
const IMAGE_DPI: f32 = 300.0;
const RULE_THICKNESS_PT: f32 = 0.57;

/// Renders reports as PDF with an optional cover logo.
#[derive(Debug, Clone, Default)]
pub struct PdfReportRenderer {
    logo: Option<PathBuf>,
}

impl PdfReportRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the image at `path` on the cover page if the file exists when
    /// the report is rendered.
    pub fn with_logo(path: impl Into<PathBuf>) -> Self {
        Self {
            logo: Some(path.into()),
        }
    }

    fn present_logo(&self) -> Option<&Path> {
        let logo = self.logo.as_deref()?;
        if logo.is_file() {
            Some(logo)
        } else {
            debug!("Logo {} not found, cover drawn without it", logo.display());
            None
        }
    }
}

impl ReportRenderer for PdfReportRenderer {
    fn mime_type(&self) -> &'static str {
        REPORT_MIME_TYPE
    }

    fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, RenderError> {
        let pages = layout::compose(document, self.present_logo())?;
        let bytes = write_pdf(&document.cover.title, &pages)?;
        info!(
            "Rendered report: {} pages, {} bytes",
            pages.len(),
            bytes.len()
        );
        Ok(bytes)
    }
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

impl Fonts {
    fn load(doc: &PdfDocumentReference) -> Result<Self, RenderError> {
        let font = |f: BuiltinFont| {
            doc.add_builtin_font(f)
                .map_err(|e| RenderError::Document(e.to_string()))
        };
        Ok(Self {
            regular: font(BuiltinFont::Helvetica)?,
            bold: font(BuiltinFont::HelveticaBold)?,
            italic: font(BuiltinFont::HelveticaOblique)?,
        })
    }

    fn get(&self, style: FontStyle) -> &IndirectFontRef {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
            FontStyle::Italic => &self.italic,
        }
    }
}

fn write_pdf(title: &str, pages: &[LaidOutPage]) -> Result<Vec<u8>, RenderError> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
    let fonts = Fonts::load(&doc)?;

    for (i, page) in pages.iter().enumerate() {
        let layer = if i == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (p, l) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
            doc.get_page(p).get_layer(l)
        };
        for element in &page.elements {
            draw(&layer, &fonts, element)?;
        }
    }

    doc.save_to_bytes()
        .map_err(|e| RenderError::Document(e.to_string()))
}

/// Flip a top-origin y coordinate to PDF space
fn pdf_y(y_mm: f32) -> Mm {
    Mm(PAGE_HEIGHT_MM - y_mm)
}

fn draw(layer: &PdfLayerReference, fonts: &Fonts, element: &Element) -> Result<(), RenderError> {
    match element {
        Element::Text {
            text,
            x_mm,
            baseline_mm,
            size_pt,
            style,
        } => {
            layer.use_text(
                text.as_str(),
                *size_pt,
                Mm(*x_mm),
                pdf_y(*baseline_mm),
                fonts.get(*style),
            );
        }
        Element::Rule {
            x1_mm,
            x2_mm,
            y_mm,
            color: (r, g, b),
        } => {
            layer.set_outline_color(Color::Rgb(Rgb::new(
                f32::from(*r) / 255.0,
                f32::from(*g) / 255.0,
                f32::from(*b) / 255.0,
                None,
            )));
            layer.set_outline_thickness(RULE_THICKNESS_PT);
            layer.add_line(Line {
                points: vec![
                    (Point::new(Mm(*x1_mm), pdf_y(*y_mm)), false),
                    (Point::new(Mm(*x2_mm), pdf_y(*y_mm)), false),
                ],
                is_closed: false,
            });
        }
        Element::Image {
            path,
            x_mm,
            y_mm,
            width_mm,
        } => draw_image(layer, path, *x_mm, *y_mm, *width_mm)?,
    }
    Ok(())
}

fn draw_image(
    layer: &PdfLayerReference,
    path: &Path,
    x_mm: f32,
    y_mm: f32,
    width_mm: f32,
) -> Result<(), RenderError> {
    let image_error = |reason: String| RenderError::Image {
        path: path.to_path_buf(),
        reason,
    };

    let decoded = printpdf::image_crate::open(path).map_err(|e| image_error(e.to_string()))?;
    let (px_width, px_height) = decoded.dimensions();
    if px_width == 0 || px_height == 0 {
        return Err(image_error("image has no pixels".to_string()));
    }

    // Native size at IMAGE_DPI, scaled to the requested width
    let native_width_mm = px_width as f32 / IMAGE_DPI * 25.4;
    let scale = width_mm / native_width_mm;
    let height_mm = width_mm * px_height as f32 / px_width as f32;

    Image::from_dynamic_image(&decoded).add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(x_mm)),
            translate_y: Some(pdf_y(y_mm + height_mm)),
            scale_x: Some(scale),
            scale_y: Some(scale),
            dpi: Some(IMAGE_DPI),
            ..Default::default()
        },
    );
    Ok(())
}
