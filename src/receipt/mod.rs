mod layout;
mod pdf;

pub use layout::{Color, DrawOp, ReceiptLayout, Weight, DARK, PRIMARY, SECONDARY};
pub use pdf::PdfRenderer;

use crate::error::Error;

/// Turns a receipt layout into the bytes of a downloadable document.
pub trait DocumentRenderer: Send + Sync {
    fn render(&self, layout: &ReceiptLayout) -> Result<Vec<u8>, Error>;
}
