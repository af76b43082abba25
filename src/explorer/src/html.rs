use std::fmt::{Display, Write as _};

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// A plain text table. Every cell is escaped on render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<table>\n<thead>\n<tr>")?;
        for header in &self.headers {
            write!(f, "<th>{}</th>", escape(header))?;
        }
        f.write_str("</tr>\n</thead>\n<tbody>\n")?;
        for row in &self.rows {
            f.write_str("<tr>")?;
            for cell in row {
                write!(f, "<td>{}</td>", escape(cell))?;
            }
            f.write_str("</tr>\n")?;
        }
        f.write_str("</tbody>\n</table>")
    }
}

/// Wraps `body` in a complete HTML document.
pub fn document(title: &str, style: &str, body: &str) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<title>{}</title>\n<meta charset=\"utf-8\" />\n<style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        style,
        body
    );
    out
}
