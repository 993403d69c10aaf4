use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::info;

use crate::errors::ExportError;
use crate::export::{PrintJob, PrintTarget};

/// Writes each job's standalone page into a directory, for the user to open
/// in a browser and print or capture.
#[derive(Debug, Clone)]
pub struct FileTarget {
    dir: PathBuf,
}

impl FileTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes the page and returns where it landed.
    pub fn write(&self, job: &PrintJob) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.dir)?;
        let stamp = Utc::now().format("%Y%m%dT%H%M%S%3fZ");
        let path = self
            .dir
            .join(format!("resume-{stamp}-{}.html", job.kind.as_str()));
        fs::write(&path, job.html.as_bytes())?;
        info!("Wrote {} export to {}", job.kind.as_str(), path.display());
        Ok(path)
    }
}

impl PrintTarget for FileTarget {
    fn submit(&self, job: &PrintJob) -> Result<(), ExportError> {
        self.write(job).map(|_| ())
    }
}
