//! Printable result report.
//!
//! Export relies on the browser's print-to-PDF: the document title is
//! swapped to the report name for the duration of the print dialog so the
//! saved file picks it up as its default name.

const REPORT_PREFIX: &str = "PlagiGuard_Report_";

/// `PlagiGuard_Report_<fileName>.pdf`, with `document` for a missing name.
pub fn report_file_name(file_name: Option<&str>) -> String {
    let name = file_name.map(str::trim).filter(|n| !n.is_empty()).unwrap_or("document");
    format!("{REPORT_PREFIX}{name}.pdf")
}

/// Open the print dialog for the current page under the report name.
pub fn export_pdf(file_name: Option<&str>) {
    let title = report_file_name(file_name);
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let previous = document.title();
        document.set_title(&title);
        if let Err(err) = window.print() {
            log::warn!("print dialog failed: {err:?}");
        }
        document.set_title(&previous);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::debug!("report export requested outside the browser: {title}");
    }
}
