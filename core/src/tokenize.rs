//! Line and whitespace tokenization of input texts.
//!
//! Every line contributes its whitespace-separated tokens followed by the
//! synthetic [`EOL_MARKER`] token, so line structure takes part in alignment
//! like any other token.

use std::borrow::Cow;

/// Token appended after each line. It is the two-character literal `\n` so it
/// stays on one line when written to tab-separated output.
pub const EOL_MARKER: &str = "\\n";

pub fn tokenize_text(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n");
    let mut lines: Vec<&str> = normalized.split(|c| c == '\n' || c == '\r').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }

    let mut tokens = Vec::new();
    for line in lines {
        tokens.extend(line.split_whitespace().map(str::to_owned));
        tokens.push(EOL_MARKER.to_owned());
    }
    tokens
}

/// Decodes raw bytes as UTF-8, dropping malformed sequences.
pub fn decode_lossy(bytes: &[u8]) -> Cow<'_, str> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    Cow::Owned(out)
}

pub fn tokenize_bytes(bytes: &[u8]) -> Vec<String> {
    tokenize_text(&decode_lossy(bytes))
}

pub fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut out = String::new();
    for (idx, token) in tokens.iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        out.push_str(token.as_ref());
    }
    out
}
