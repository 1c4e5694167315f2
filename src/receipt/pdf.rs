use std::path::Path;

use printpdf::image_crate::{self, GenericImageView};
use printpdf::{
    BuiltinFont, Color as PdfColor, Image, ImageTransform, IndirectFontRef, Line, Mm,
    PdfDocument, PdfLayerReference, Point, Rgb,
};

use super::layout::{Color, DrawOp, ReceiptLayout, Weight, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use super::DocumentRenderer;
use crate::error::{document_error, Error};

const MM_PER_INCH: f32 = 25.4;

/// Renders receipt layouts to PDF with printpdf's built-in Helvetica faces.
#[derive(Clone, Debug, Default)]
pub struct PdfRenderer;

impl PdfRenderer {
    pub fn new() -> Self {
        Self
    }
}

struct Fonts {
    normal: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn get(&self, weight: Weight) -> &IndirectFontRef {
        match weight {
            Weight::Normal => &self.normal,
            Weight::Bold => &self.bold,
        }
    }
}

fn pdf_color(color: Color) -> PdfColor {
    PdfColor::Rgb(Rgb::new(
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
        None,
    ))
}

/// Layout positions are measured from the top edge, PDF ones from the bottom.
fn flip(y: f32) -> Mm {
    Mm(PAGE_HEIGHT_MM - y)
}

fn load_image(source: &Path) -> Result<image_crate::DynamicImage, Error> {
    let bytes = std::fs::read(source)?;
    image_crate::load_from_memory(&bytes).map_err(document_error)
}

fn draw_image(layer: &PdfLayerReference, source: &Path, x: f32, y: f32, width: f32, height: f32) {
    let decoded = match load_image(source) {
        Ok(decoded) => decoded,
        Err(err) => {
            tracing::warn!(source = %source.display(), %err, "skipping receipt logo");
            return;
        }
    };

    let (px_width, px_height) = (decoded.width() as f32, decoded.height() as f32);
    // at this dpi the image is exactly `width` mm wide
    let dpi = px_width * MM_PER_INCH / width;
    let natural_height = px_height * MM_PER_INCH / dpi;

    Image::from_dynamic_image(&decoded).add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(x)),
            translate_y: Some(flip(y + height)),
            scale_y: Some(height / natural_height),
            dpi: Some(dpi),
            ..Default::default()
        },
    );
}

impl DocumentRenderer for PdfRenderer {
    #[tracing::instrument(skip_all, fields(title = %layout.title))]
    fn render(&self, layout: &ReceiptLayout) -> Result<Vec<u8>, Error> {
        let (doc, page, layer) = PdfDocument::new(
            layout.title.as_str(),
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "receipt",
        );
        let layer = doc.get_page(page).get_layer(layer);

        let fonts = Fonts {
            normal: doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(document_error)?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(document_error)?,
        };

        for op in &layout.ops {
            match op {
                DrawOp::Image {
                    source,
                    x,
                    y,
                    width,
                    height,
                } => draw_image(&layer, source, *x, *y, *width, *height),
                DrawOp::Text {
                    text,
                    x,
                    y,
                    size,
                    weight,
                    color,
                } => {
                    layer.set_fill_color(pdf_color(*color));
                    layer.use_text(text.as_str(), *size, Mm(*x), flip(*y), fonts.get(*weight));
                }
                DrawOp::Line {
                    from,
                    to,
                    width,
                    color,
                } => {
                    // printpdf line widths are in points
                    layer.set_outline_color(pdf_color(*color));
                    layer.set_outline_thickness(*width * 72.0 / MM_PER_INCH);
                    layer.add_line(Line {
                        points: vec![
                            (Point::new(Mm(from.0), flip(from.1)), false),
                            (Point::new(Mm(to.0), flip(to.1)), false),
                        ],
                        is_closed: false,
                    });
                }
            }
        }

        doc.save_to_bytes().map_err(document_error)
    }
}
