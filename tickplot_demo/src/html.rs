// Copyright 2025 the Tickplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt::Write as _;

/// One chart in the report.
#[derive(Clone, Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) markup: String,
}

const STYLE: &str = "\
body { font-family: sans-serif; margin: 24px; color: #333; }
section { margin-bottom: 40px; }
section > div { position: relative; }
.hint-container { position: absolute; display: none; flex-direction: column; \
padding: 4px 8px; background: #fff; border: 1px solid #c9c9c9; font-size: 12px; }
.hystogram-bar.highlighted { opacity: 0.7; }
";

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<!doctype html>");
    let _ = writeln!(out, "<html>\n<head>\n<meta charset=\"utf-8\">");
    let _ = writeln!(out, "<title>{}</title>", escape_html(title));
    let _ = writeln!(out, "<style>\n{STYLE}</style>\n</head>\n<body>");
    let _ = writeln!(out, "<h1>{}</h1>", escape_html(title));
    for section in sections {
        let _ = writeln!(out, "<section>");
        let _ = writeln!(out, "<h2>{}</h2>", escape_html(&section.title));
        let _ = writeln!(out, "<p>{}</p>", escape_html(&section.description));
        out.push_str(&section.markup);
        let _ = writeln!(out, "</section>");
    }
    let _ = writeln!(out, "</body>\n</html>");
    out
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_wraps_each_section() {
        let sections = [HtmlSection {
            title: "A & B".into(),
            description: "d".into(),
            markup: "<div id=\"x\"></div>\n".into(),
        }];
        let html = render_report("demo", &sections);
        assert!(html.contains("<h2>A &amp; B</h2>"));
        assert!(html.contains("<div id=\"x\"></div>"));
        assert_eq!(html.matches("<section>").count(), 1);
    }
}
