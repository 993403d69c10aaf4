//! HTML rendering of the preview.
//!
//! `render_fragment` produces the printable region on its own; `render_page`
//! wraps it in a standalone document with the print stylesheet, which is what
//! print targets receive.

use crate::layout::page::{print_stylesheet, PageFormat};
use crate::preview::{EducationItem, ExperienceItem, HeaderBlock, Preview};

pub const PAGE_TITLE: &str = "Resume";

/// Prints once loaded, then closes the window after the print dialog is done.
const AUTO_PRINT_SCRIPT: &str =
    "window.onload = function () { window.onafterprint = function () { window.close(); }; window.print(); };";

/// Renders the printable region: a single `<div id="resume-preview">`.
pub fn render_fragment(preview: &Preview) -> String {
    let mut out = String::new();
    out.push_str(&format!(r#"<div id="{}">"#, escape_attr(&preview.handle)));
    out.push('\n');

    render_header(&mut out, &preview.header);

    if let Some(summary) = &preview.summary {
        open_section(&mut out, "Professional Summary");
        out.push_str(&format!("<p>{}</p>\n", escape_text(summary)));
        out.push_str("</section>\n");
    }

    if let Some(items) = &preview.experience {
        open_section(&mut out, "Experience");
        for item in items {
            render_experience(&mut out, item);
        }
        out.push_str("</section>\n");
    }

    if let Some(items) = &preview.education {
        open_section(&mut out, "Education");
        for item in items {
            render_education(&mut out, item);
        }
        out.push_str("</section>\n");
    }

    if let Some(skills) = &preview.skills {
        open_section(&mut out, "Skills");
        out.push_str("<div class=\"skills\">");
        for skill in skills {
            out.push_str(&format!(r#"<span class="skill">{}</span>"#, escape_text(skill)));
        }
        out.push_str("</div>\n</section>\n");
    }

    out.push_str("</div>\n");
    out
}

/// Renders a standalone printable document around the fragment.
///
/// With `auto_print` the page opens the print dialog as soon as it loads.
pub fn render_page(preview: &Preview, format: &PageFormat, auto_print: bool) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{PAGE_TITLE}</title>\n"));
    out.push_str("<style>\n");
    out.push_str(&print_stylesheet(format));
    out.push_str("</style>\n");
    if auto_print {
        out.push_str(&format!("<script>{AUTO_PRINT_SCRIPT}</script>\n"));
    }
    out.push_str("</head>\n<body>\n");
    out.push_str(&render_fragment(preview));
    out.push_str("</body>\n</html>\n");
    out
}

fn open_section(out: &mut String, title: &str) {
    out.push_str(&format!("<section>\n<h2>{title}</h2>\n"));
}

fn render_header(out: &mut String, header: &HeaderBlock) {
    out.push_str("<header>\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape_text(&header.name)));
    if !header.contact_line.is_empty() {
        out.push_str(&format!("<p>{}</p>\n", escape_text(&header.contact_line)));
    }

    let line = &header.location_line;
    if !line.is_empty() {
        out.push_str("<p>");
        out.push_str(&escape_text(&line.location));
        out.push_str(line.separator());
        if let (Some(url), Some(label)) = (&line.profile_url, line.profile_label()) {
            out.push_str(&format!(r#"<a href="{}">{label}</a>"#, escape_attr(url)));
        }
        out.push_str("</p>\n");
    }
    out.push_str("</header>\n");
}

fn render_experience(out: &mut String, item: &ExperienceItem) {
    out.push_str("<article>\n");
    out.push_str(&format!(
        "<div class=\"row\"><h3>{}</h3><span>{}</span></div>\n",
        escape_text(&item.title),
        escape_text(&item.date_range)
    ));
    out.push_str(&format!("<div>{}</div>\n", escape_text(&item.company_line)));
    out.push_str(&format!(
        "<p class=\"description\">{}</p>\n",
        escape_text(&item.description)
    ));
    out.push_str("</article>\n");
}

fn render_education(out: &mut String, item: &EducationItem) {
    out.push_str("<article>\n");
    out.push_str(&format!(
        "<div class=\"row\"><h3>{}</h3><span>{}</span></div>\n",
        escape_text(&item.degree),
        escape_text(&item.graduation_date)
    ));
    out.push_str(&format!("<div>{}</div>\n", escape_text(&item.school_line)));
    if let Some(gpa) = &item.gpa_line {
        out.push_str(&format!("<div>{}</div>\n", escape_text(gpa)));
    }
    out.push_str("</article>\n");
}

/// Escapes text content. Line breaks (`\n` or `\r\n`) become `<br>` so
/// multi-line descriptions keep their breaks.
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\r' => {}
            '\n' => out.push_str("<br>"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::page::default_page_format;
    use crate::models::fields::{ExperienceField, PersonalField};
    use crate::models::resume::ResumeDocument;
    use crate::preview::build_preview;

    fn sample() -> Preview {
        let doc = ResumeDocument::new()
            .with_personal_field(PersonalField::Name, "Ada Lovelace")
            .with_personal_field(PersonalField::Email, "ada@example.com")
            .with_personal_field(PersonalField::Location, "London")
            .with_personal_field(PersonalField::Linkedin, "https://linkedin.com/in/ada?a=1&b=2")
            .with_summary("Wrote the <first> program")
            .with_experience_field(0, ExperienceField::Title, "Analyst")
            .unwrap()
            .with_skill(0, "Math")
            .unwrap();
        build_preview(&doc)
    }

    #[test]
    fn test_fragment_carries_handle() {
        let html = render_fragment(&sample());
        assert!(html.starts_with(r#"<div id="resume-preview">"#));
        assert_eq!(html.matches("id=\"resume-preview\"").count(), 1);
    }

    #[test]
    fn test_user_text_is_escaped() {
        let html = render_fragment(&sample());
        assert!(html.contains("<p>Wrote the &lt;first&gt; program</p>"));
        assert!(!html.contains("<first>"));
    }

    #[test]
    fn test_profile_link_uses_raw_url() {
        let html = render_fragment(&sample());
        assert!(html.contains(
            r#"<p>London | <a href="https://linkedin.com/in/ada?a=1&amp;b=2">LinkedIn</a></p>"#
        ));
    }

    #[test]
    fn test_profile_link_without_location() {
        let doc = ResumeDocument::new().with_personal_field(PersonalField::Linkedin, "https://x");
        let html = render_fragment(&build_preview(&doc));
        assert!(html.contains("<p><a href=\"https://x\">LinkedIn</a></p>"));
        assert!(!html.contains(" | "));
    }

    #[test]
    fn test_location_without_profile_link() {
        let doc = ResumeDocument::new().with_personal_field(PersonalField::Location, "London");
        let html = render_fragment(&build_preview(&doc));
        assert!(html.contains("<p>London</p>"));
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_absent_sections_are_not_rendered() {
        let html = render_fragment(&build_preview(&ResumeDocument::new()));
        assert!(html.contains("<h1></h1>"));
        assert!(!html.contains("<section>"));
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_skills_render_as_tags_in_order() {
        let mut doc = ResumeDocument::new();
        doc.skills = vec!["".into(), "Go".into(), "".into(), "Rust".into()];
        let html = render_fragment(&build_preview(&doc));
        assert!(html.contains(
            r#"<div class="skills"><span class="skill">Go</span><span class="skill">Rust</span></div>"#
        ));
    }

    #[test]
    fn test_description_keeps_line_breaks() {
        assert_eq!(escape_text("a\nb & c"), "a<br>b &amp; c");
    }

    #[test]
    fn test_crlf_line_breaks() {
        assert_eq!(escape_text("one\r\ntwo\r\n"), "one<br>two<br>");

        let doc = ResumeDocument::new()
            .with_experience_field(0, ExperienceField::Title, "Analyst")
            .unwrap()
            .with_experience_field(0, ExperienceField::Description, "Led\r\nShipped")
            .unwrap();
        let html = render_fragment(&build_preview(&doc));
        assert!(html.contains("<p class=\"description\">Led<br>Shipped</p>"));
        assert!(!html.contains('\r'));
    }

    #[test]
    fn test_page_wraps_fragment_with_stylesheet() {
        let preview = sample();
        let page = render_page(&preview, &default_page_format(), false);
        assert!(page.contains("<title>Resume</title>"));
        assert!(page.contains("size: 210mm 297mm;"));
        assert!(page.contains(&render_fragment(&preview)));
        assert!(!page.contains("<script>"));
    }

    #[test]
    fn test_page_auto_print_script() {
        let page = render_page(&sample(), &default_page_format(), true);
        assert!(page.contains("window.print()"));
        assert!(page.contains("window.close()"));
    }
}
