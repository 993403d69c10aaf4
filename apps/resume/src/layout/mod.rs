// Page format and print stylesheet for the exported resume.
// Pagination is left to the host print facility.

pub mod page;

pub use page::{default_page_format, page_format, PageFormat, PaperSize};
