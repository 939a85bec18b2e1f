//! PDF report rendering
//!
//! [`layout`] positions everything on A4 pages using static font metrics;
//! [`pdf`] writes the laid-out pages with the built-in Helvetica faces.

pub mod layout;
pub mod metrics;
pub mod pdf;

pub use pdf::PdfReportRenderer;
