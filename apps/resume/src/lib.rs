//! Resume builder core: a structured resume document, the controller that
//! edits it, and the printable preview derived from it.
//!
//! Printing itself is a host capability (`export::PrintTarget`); this crate
//! only hands the host the rendered preview.

pub mod config;
pub mod document;
pub mod errors;
pub mod export;
pub mod layout;
pub mod models;
pub mod preview;

pub use document::{DocumentController, EditEvent};
pub use errors::{DocumentError, ExportError};
pub use export::{ExportKind, Exporter, PrintJob, PrintTarget};
pub use models::ResumeDocument;
pub use preview::{build_preview, Preview, PREVIEW_HANDLE};
