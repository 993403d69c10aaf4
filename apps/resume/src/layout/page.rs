//! Page format for the printable resume.
//!
//! The host print facility owns pagination. All we decide is the paper size,
//! margins and type scale handed to it through the print stylesheet.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::preview::PREVIEW_HANDLE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    /// 210mm × 297mm.
    A4,
    /// 8.5" × 11".
    Letter,
}

impl PaperSize {
    /// (width, height) in millimetres.
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match self {
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::Letter => (215.9, 279.4),
        }
    }
}

impl FromStr for PaperSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a4" => Ok(PaperSize::A4),
            "letter" => Ok(PaperSize::Letter),
            other => Err(format!("unknown paper size '{other}' (expected a4 or letter)")),
        }
    }
}

/// Layout parameters for the printed page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageFormat {
    pub paper: PaperSize,
    /// Uniform margin on all four sides.
    pub margin_mm: f32,
    pub font_stack: String,
    pub text_color: String,
    pub body_color: String,
    pub h1_pt: f32,
    pub h2_pt: f32,
    pub h3_pt: f32,
    pub body_pt: f32,
    pub line_height: f32,
}

/// A4, 20mm margins, system sans-serif at 24/14/12/10pt.
pub fn default_page_format() -> PageFormat {
    page_format(PaperSize::A4)
}

/// The default type scale on the given paper.
pub fn page_format(paper: PaperSize) -> PageFormat {
    PageFormat {
        paper,
        margin_mm: 20.0,
        font_stack: r#"-apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif"#
            .to_string(),
        text_color: "#1d1d1f".to_string(),
        body_color: "#424245".to_string(),
        h1_pt: 24.0,
        h2_pt: 14.0,
        h3_pt: 12.0,
        body_pt: 10.0,
        line_height: 1.5,
    }
}

/// Emits the print stylesheet for `format`.
///
/// Only the `#resume-preview` region is visible when printing; buttons and
/// anything marked `.no-print` are hidden.
pub fn print_stylesheet(format: &PageFormat) -> String {
    let (width, height) = format.paper.dimensions_mm();
    let margin = format.margin_mm;
    let id = PREVIEW_HANDLE;
    let mut css = String::new();

    css.push_str(&format!(
        "@page {{\n  size: {width}mm {height}mm;\n  margin: {margin}mm;\n}}\n"
    ));

    css.push_str("@media print {\n");
    css.push_str("  body * { visibility: hidden; }\n");
    css.push_str(&format!("  #{id}, #{id} * {{ visibility: visible; }}\n"));
    css.push_str(&format!("  #{id} {{\n"));
    css.push_str("    position: absolute;\n    left: 0;\n    top: 0;\n");
    css.push_str(&format!("    width: {width}mm;\n    min-height: {height}mm;\n"));
    css.push_str(&format!("    padding: {margin}mm;\n"));
    css.push_str("    margin: 0;\n    background: white;\n  }\n");
    css.push_str("  .no-print, button { display: none !important; }\n");
    css.push_str("}\n");

    css.push_str(&format!(
        "#{id} {{ font-family: {}; color: {}; }}\n",
        format.font_stack, format.text_color
    ));
    css.push_str(&format!(
        "#{id} h1 {{ font-size: {}pt; font-weight: 300; letter-spacing: -0.5pt; margin-bottom: 16pt; }}\n",
        format.h1_pt
    ));
    css.push_str(&format!(
        "#{id} h2 {{ font-size: {}pt; font-weight: 500; margin-bottom: 12pt; }}\n",
        format.h2_pt
    ));
    css.push_str(&format!(
        "#{id} h3 {{ font-size: {}pt; font-weight: 500; }}\n",
        format.h3_pt
    ));
    css.push_str(&format!(
        "#{id} p, #{id} div {{ font-size: {}pt; line-height: {}; color: {}; }}\n",
        format.body_pt, format.line_height, format.body_color
    ));
    css.push_str(&format!("#{id} a {{ color: inherit; text-decoration: none; }}\n"));
    css.push_str(&format!(
        "#{id} .skill {{ display: inline-block; padding: 2pt 6pt; margin: 0 4pt 4pt 0; \
         background: #f3f4f6; border-radius: 3pt; \
         -webkit-print-color-adjust: exact; print-color-adjust: exact; }}\n"
    ));
    css
}
