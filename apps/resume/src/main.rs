use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume::config::Config;
use resume::export::{CommandTarget, FileTarget, PrintTarget};
use resume::layout::page_format;
use resume::{DocumentController, EditEvent, ExportError, ExportKind, Exporter, PrintJob};

/// Either a configured print command or plain files in the export directory.
enum HostTarget {
    File(FileTarget),
    Command(CommandTarget),
}

impl PrintTarget for HostTarget {
    fn submit(&self, job: &PrintJob) -> Result<(), ExportError> {
        match self {
            HostTarget::File(t) => t.submit(job),
            HostTarget::Command(t) => t.submit(job),
        }
    }
}

/// One line of the session stream.
enum HostLine {
    Edit(EditEvent),
    Export(ExportKind),
}

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Starting resume builder v{}", env!("CARGO_PKG_VERSION"));

    let file_target = FileTarget::new(&config.export_dir);
    let target = match config
        .print_command
        .as_deref()
        .and_then(|line| CommandTarget::from_command_line(file_target.clone(), line))
    {
        Some(command) => {
            info!("Print command: {} {:?}", command.program(), command.args());
            HostTarget::Command(command)
        }
        None => {
            info!("Exporting to {}", file_target.dir().display());
            HostTarget::File(file_target)
        }
    };
    let exporter = Exporter::new(target, page_format(config.paper));
    info!("Page format: {:?}", config.paper);

    let reader: Box<dyn BufRead> = match &config.events_path {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Cannot open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let mut controller = DocumentController::new();
    let mut exported = false;

    for (n, line) in reader.lines().enumerate() {
        let line_no = n + 1;
        let line = line.with_context(|| format!("Failed to read event line {line_no}"))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match parse_line(trimmed).with_context(|| format!("Bad event on line {line_no}"))? {
            HostLine::Edit(event) => controller
                .apply(event)
                .with_context(|| format!("Edit on line {line_no} rejected"))?,
            HostLine::Export(kind) => {
                exporter.export(&controller, kind);
                exported = true;
            }
        }
    }

    if !exported {
        exporter.export(&controller, config.export_kind);
    }

    let doc = controller.document();
    if doc.personal_info.name.is_empty() {
        warn!("Session ended without a name set");
    }
    info!(
        "Session done: {} experience, {} education, {} skill rows",
        doc.experience.len(),
        doc.education.len(),
        doc.skills.len()
    );

    Ok(())
}

/// `{"export":"pdf"}` requests an export; anything else must be an `EditEvent`.
fn parse_line(line: &str) -> Result<HostLine> {
    let value: Value = serde_json::from_str(line).context("Line is not valid JSON")?;
    if let Some(kind) = value.get("export") {
        let kind: ExportKind =
            serde_json::from_value(kind.clone()).context("Unknown export kind")?;
        return Ok(HostLine::Export(kind));
    }
    let event: EditEvent = serde_json::from_value(value).context("Unrecognized edit event")?;
    Ok(HostLine::Edit(event))
}
