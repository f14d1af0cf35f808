use anyhow::{Context, Result};
use std::io::{BufRead, Write};

const HTML_HEAD: &str = "<html>\n<head>\n\
<meta http-equiv=\"Content-Type\" value=\"text/html; charset=UTF-8\">\n\
</head>\n<body>\n<table>\n";
const HTML_TAIL: &str = "</table>\n</body>\n</html>\n";

/// Renders every input line as a table row, one cell per tab-separated field.
pub fn write_html_table<R: BufRead, W: Write>(input: R, mut w: W) -> Result<()> {
    w.write_all(HTML_HEAD.as_bytes())?;
    for (idx, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", idx + 1))?;
        writeln!(w, "{}", render_row(&line))?;
    }
    w.write_all(HTML_TAIL.as_bytes())?;
    w.flush()?;
    Ok(())
}

fn render_row(line: &str) -> String {
    let escaped = escape_html(line);
    let cells: Vec<&str> = escaped.trim_end().split('\t').collect();
    format!("<tr><td>{}</td></tr>", cells.join("</td><td>"))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
