//! Report domain.
//!
//! - [`sanitize::sanitize`]: restrict free text to the report's character set
//! - [`document::ReportDocument`]: the compiled, render-ready report

pub mod document;
pub mod sanitize;
