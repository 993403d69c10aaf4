use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::export::ExportKind;
use crate::layout::page::PaperSize;

/// Host configuration loaded from environment variables (and `.env` if present).
/// Every setting has a default, so an empty environment is valid.
#[derive(Debug, Clone)]
pub struct Config {
    /// Newline-delimited edit events. `None` reads stdin.
    pub events_path: Option<PathBuf>,
    pub export_dir: PathBuf,
    pub export_kind: ExportKind,
    pub paper: PaperSize,
    /// Program plus arguments to hand each exported page to.
    pub print_command: Option<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            events_path: optional_env("RESUME_EVENTS").map(PathBuf::from),
            export_dir: optional_env("RESUME_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("exports")),
            export_kind: parse_env("RESUME_EXPORT_KIND", ExportKind::Pdf)?,
            paper: parse_env("RESUME_PAPER", PaperSize::A4)?,
            print_command: optional_env("RESUME_PRINT_COMMAND"),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Unset and blank are treated the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr<Err = String>,
{
    match optional_env(key) {
        Some(raw) => parse_setting(key, &raw),
        None => Ok(default),
    }
}

fn parse_setting<T>(key: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr<Err = String>,
{
    raw.parse::<T>()
        .map_err(|e| anyhow!(e))
        .with_context(|| format!("Environment variable '{key}' is invalid"))
}
