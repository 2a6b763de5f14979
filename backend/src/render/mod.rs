//! HTML output for the landing page and the result page.
//!
//! Pages are plain string templates with one `{{ content }}` slot; there is
//! no template engine.

use std::fmt::{self, Write};

use tracing::warn;

use crate::models::ResultTable;

const LANDING_PAGE: &str = include_str!("../../templates/index.html");
const RESULT_PAGE: &str = include_str!("../../templates/data.html");
const CONTENT_SLOT: &str = "{{ content }}";

/// Shown in place of the table when it cannot be formatted.
pub const TABLE_PLACEHOLDER: &str = "<p>Error converting table to HTML.</p>";

/// Inline style block placed ahead of the result table.
pub const TABLE_STYLE: &str = r#"<style>
    .table {
        width: 70%;
        margin: 20px auto;
        border-collapse: collapse;
    }
    .table thead {
        background-color: #39648f;
        color: white;
    }
    .table th, .table td {
        border: 1px solid #ddd;
        padding: 8px;
        text-align: center;
    }
    .table td {
        background-color: #a8dfe3;
    }
    .table-striped tbody tr:nth-of-type(odd) td {
        background-color: #c9ecef;
    }
</style>"#;

/// Landing page with the upload form.
pub fn render_landing_page() -> String {
    LANDING_PAGE.to_string()
}

/// Format the result table as an HTML `<table>`.
pub fn render_result_table(table: &ResultTable) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, r#"<table border="1" class="table table-striped">"#)?;
    writeln!(out, "  <thead>")?;
    write!(out, "    <tr>")?;
    for label in ResultTable::column_labels() {
        write!(out, "<th>{}</th>", label)?;
    }
    writeln!(out, "</tr>")?;
    writeln!(out, "  </thead>")?;
    writeln!(out, "  <tbody>")?;
    for row in &table.rows {
        write!(out, "    <tr><td>{}</td>", escape_html(&row.identifier))?;
        for value in row.components {
            write!(out, "<td>{:.6}</td>", value)?;
        }
        writeln!(out, "</tr>")?;
    }
    writeln!(out, "  </tbody>")?;
    write!(out, "</table>")?;
    Ok(out)
}

/// Full result document. A table that fails to format degrades to
/// [`TABLE_PLACEHOLDER`] instead of failing the request.
pub fn render_result_page(table: &ResultTable) -> String {
    render_result_page_with(table, render_result_table)
}

fn render_result_page_with<F>(table: &ResultTable, format_table: F) -> String
where
    F: FnOnce(&ResultTable) -> Result<String, fmt::Error>,
{
    let html_table = format_table(table).unwrap_or_else(|e| {
        warn!(error = %e, "HTML conversion error");
        TABLE_PLACEHOLDER.to_string()
    });
    let content = format!("{}\n{}", TABLE_STYLE, html_table);
    RESULT_PAGE.replace(CONTENT_SLOT, &content)
}

/// Escape text for use inside an HTML element.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResultRow;

    fn sample() -> ResultTable {
        ResultTable {
            rows: vec![
                ResultRow {
                    identifier: "Brown".to_string(),
                    components: [1.0, -2.5, 0.0, 0.125, 3.0, 4.0],
                },
                ResultRow {
                    identifier: "Texas A&M".to_string(),
                    components: [0.0; 6],
                },
            ],
        }
    }

    #[test]
    fn test_table_has_header_and_rows() {
        let html = render_result_table(&sample()).unwrap();
        assert!(html.starts_with("<table"));
        assert!(html.contains(r#"class="table table-striped""#));
        assert!(html.contains(
            "<tr><th>Univ</th><th>svd0</th><th>svd1</th><th>svd2</th><th>svd3</th><th>svd4</th><th>svd5</th></tr>"
        ));
        assert_eq!(html.matches("<tr><td>").count(), 2);
        assert!(html.contains("<td>-2.500000</td>"));
    }

    #[test]
    fn test_identifier_is_escaped() {
        let html = render_result_table(&sample()).unwrap();
        assert!(html.contains("<td>Texas A&amp;M</td>"));
    }

    #[test]
    fn test_result_page_embeds_style_and_table() {
        let page = render_result_page(&sample());
        assert!(page.contains("<!DOCTYPE html>"));
        assert!(page.contains("#39648f"));
        assert!(page.contains("#a8dfe3"));
        assert!(page.contains("<td>Brown</td>"));
        assert!(!page.contains(CONTENT_SLOT));
    }

    #[test]
    fn test_formatting_failure_degrades_to_placeholder() {
        let page = render_result_page_with(&sample(), |_| Err(fmt::Error));
        assert!(page.contains(TABLE_PLACEHOLDER));
        assert!(page.contains(TABLE_STYLE));
        assert!(!page.contains("<td>Brown</td>"));
    }

    #[test]
    fn test_landing_page_posts_to_upload() {
        let page = render_landing_page();
        assert!(page.contains(r#"action="/success""#));
        assert!(page.contains(r#"enctype="multipart/form-data""#));
        assert!(page.contains(r#"name="file""#));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
