//! Printable export document.
//!
//! The browser's print dialog turns the document into a PDF; the document
//! waits for layout to settle before printing and closes itself afterwards.

use std::time::Duration;

use crate::templates::render::escape_html;

#[derive(Debug, Clone, Copy)]
pub struct PrintTiming {
    pub settle: Duration,
    pub close: Duration,
}

/// Wraps rendered resume markup in a standalone A4 print document.
pub fn print_document(markup: &str, title: &str, timing: PrintTiming) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
@page {{ size: A4; margin: 0; }}
* {{ -webkit-print-color-adjust: exact; print-color-adjust: exact; }}
body {{ margin: 0; padding: 0; }}
</style>
</head>
<body>
{markup}
<script>
window.onload = function () {{
  setTimeout(function () {{
    window.print();
    setTimeout(function () {{ window.close(); }}, {close});
  }}, {settle});
}};
</script>
</body>
</html>
"#,
        title = escape_html(title),
        settle = timing.settle.as_millis(),
        close = timing.close.as_millis(),
    )
}

/// `Jane Q Doe` → `Jane_Q_Doe_Resume.pdf`; an empty name gives `Resume.pdf`.
pub fn export_filename(full_name: &str) -> String {
    let stem = full_name.split_whitespace().collect::<Vec<_>>().join("_");
    if stem.is_empty() {
        "Resume.pdf".to_string()
    } else {
        format!("{stem}_Resume.pdf")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing() -> PrintTiming {
        PrintTiming {
            settle: Duration::from_millis(500),
            close: Duration::from_millis(100),
        }
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("Jane Q  Doe"), "Jane_Q_Doe_Resume.pdf");
        assert_eq!(export_filename("Ada"), "Ada_Resume.pdf");
        assert_eq!(export_filename(""), "Resume.pdf");
        assert_eq!(export_filename("   "), "Resume.pdf");
    }

    #[test]
    fn test_print_document_embeds_markup_and_delays() {
        let doc = print_document("<div>resume</div>", "Ada_Resume.pdf", timing());
        assert!(doc.contains("<div>resume</div>"));
        assert!(doc.contains("@page { size: A4; margin: 0; }"));
        assert!(doc.contains("print-color-adjust: exact"));
        assert!(doc.contains("}, 500);"));
        assert!(doc.contains("window.close(); }, 100);"));
    }

    #[test]
    fn test_print_document_escapes_title() {
        let doc = print_document("", "<b>", timing());
        assert!(doc.contains("<title>&lt;b&gt;</title>"));
    }
}
