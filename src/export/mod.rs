//! Report export
//!
//! Turns a snapshot of the bookmark list into a downloadable PDF.

pub mod latin1;
pub mod layout;
mod metrics;
mod pdf;

pub use layout::{PT_PER_MM, Page, PageGeometry, PlacedLine};
pub use metrics::text_width;
pub use pdf::{ExportOptions, ReportExporter};
