//! Export / print: hands the current preview to a host print capability.
//!
//! The core never encodes PDFs or images and never tracks completion. It
//! builds a `PrintJob` from the current preview and submits it to whatever
//! `PrintTarget` the host supplied. Failures belong to the host and are only
//! logged.

pub mod command;
pub mod file;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::document::DocumentController;
use crate::errors::ExportError;
use crate::layout::page::PageFormat;
use crate::preview::html::{render_page, PAGE_TITLE};
use crate::preview::Preview;

pub use command::CommandTarget;
pub use file::FileTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    /// Standalone page that opens the print dialog on load ("Save as PDF").
    Pdf,
    /// Standalone page only, for the host to capture as an image.
    Image,
}

impl ExportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKind::Pdf => "pdf",
            ExportKind::Image => "image",
        }
    }

    pub fn auto_print(&self) -> bool {
        matches!(self, ExportKind::Pdf)
    }
}

impl FromStr for ExportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(ExportKind::Pdf),
            "image" => Ok(ExportKind::Image),
            other => Err(format!("unknown export kind '{other}' (expected pdf or image)")),
        }
    }
}

/// Everything a print target receives: the preview itself plus its
/// standalone HTML rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintJob {
    pub kind: ExportKind,
    pub title: String,
    /// Identifier of the printable region inside `html`.
    pub handle: String,
    pub preview: Preview,
    pub html: String,
}

impl PrintJob {
    pub fn new(kind: ExportKind, preview: Preview, format: &PageFormat) -> Self {
        let html = render_page(&preview, format, kind.auto_print());
        Self {
            kind,
            title: PAGE_TITLE.to_string(),
            handle: preview.handle.clone(),
            preview,
            html,
        }
    }
}

/// Host capability: "given rendered content, produce a print/export side effect".
pub trait PrintTarget {
    fn submit(&self, job: &PrintJob) -> Result<(), ExportError>;
}

/// Triggers exports against a host target.
pub struct Exporter<T: PrintTarget> {
    target: T,
    format: PageFormat,
}

impl<T: PrintTarget> Exporter<T> {
    pub fn new(target: T, format: PageFormat) -> Self {
        Self { target, format }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Fire-and-forget: builds a job from the current preview and submits it.
    /// Target failures are logged and dropped.
    pub fn export(&self, controller: &DocumentController, kind: ExportKind) {
        let job = PrintJob::new(kind, controller.preview(), &self.format);
        match self.target.submit(&job) {
            Ok(()) => info!(kind = kind.as_str(), handle = %job.handle, "export submitted"),
            Err(e) => warn!(kind = kind.as_str(), "export failed: {e}"),
        }
    }
}
