use std::process::{Command, Stdio};

use tracing::info;

use crate::errors::ExportError;
use crate::export::{FileTarget, PrintJob, PrintTarget};

/// Writes the page through a `FileTarget`, then hands its path to an external
/// program (`xdg-open`, `lp`, a headless browser, ...).
///
/// The child is spawned and left running; its exit status is never collected.
#[derive(Debug, Clone)]
pub struct CommandTarget {
    file: FileTarget,
    program: String,
    args: Vec<String>,
}

impl CommandTarget {
    pub fn new(file: FileTarget, program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            file,
            program: program.into(),
            args,
        }
    }

    /// Splits a whitespace-separated command line such as `"lp -d office"`.
    /// Returns `None` for a blank line.
    pub fn from_command_line(file: FileTarget, line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self::new(file, program, parts.collect()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl PrintTarget for CommandTarget {
    fn submit(&self, job: &PrintJob) -> Result<(), ExportError> {
        let path = self.file.write(job)?;
        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(&path)
            .stdin(Stdio::null())
            .spawn()
            .map_err(|source| ExportError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        info!(
            "Spawned '{}' (pid {}) for {}",
            self.program,
            child.id(),
            path.display()
        );
        Ok(())
    }
}
