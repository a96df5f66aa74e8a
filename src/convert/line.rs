// src/convert/line.rs

//! Per-line rewrite rule for statement-style `print`
//!
//! A line is convertible when it consists of optional indentation, the
//! keyword `print`, at least one whitespace character, and the rest of the
//! line. The rest of the line is trimmed and wrapped in parentheses:
//!
//! ```text
//!     print "x", "y"      ->      print("x", "y")
//! ```
//!
//! # Known limitation
//!
//! Content is considered already call-style when its first character is `(`
//! and its last is `)`. No balance checking is done, so `print (a), (b)` and
//! `print (a) + (b)` are left untouched even though they are not a single
//! parenthesized argument list.
//!
//! Lines are split the way text-mode readers do: `\r\n`, a lone `\r` and
//! `\n` all end a line, and each is normalized to `\n`.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Anchored statement-print pattern; `$` stops before the line's own `\n`.
/// Whitespace includes the U+001C..U+001F separators, see [`is_line_space`].
static PRINT_STATEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^([\s\x1C-\x1F]*)print[\s\x1C-\x1F]+(.*)$")
        .expect("print statement pattern is valid")
});

/// Whitespace for matching and trimming: Unicode White_Space plus the
/// information separators U+001C..U+001F
pub fn is_line_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

/// Split text into lines, normalizing every terminator to `\n`
///
/// `\r\n`, `\r` and `\n` each end a line. Lines already ending in `\n`
/// are borrowed; the final line keeps its lack of terminator.
pub fn split_lines(text: &str) -> Vec<Cow<'_, str>> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(Cow::Borrowed(&text[start..=i]));
                start = i + 1;
            }
            b'\r' => {
                lines.push(Cow::Owned(format!("{}\n", &text[start..i])));
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }

    if start < bytes.len() {
        lines.push(Cow::Borrowed(&text[start..]));
    }
    lines
}

/// Check whether trimmed print content already looks like a call
///
/// Only the first and last characters are inspected.
pub fn is_call_style(content: &str) -> bool {
    content.starts_with('(') && content.ends_with(')')
}

/// Rewrite a single line from statement-style to call-style `print`
///
/// Lines that do not match, or that are already call-style, are returned
/// borrowed and byte-identical (terminator included). Converted lines always
/// end in a single `\n`, even when the original was the unterminated last
/// line of a file.
pub fn transform_line(line: &str) -> Cow<'_, str> {
    let Some(caps) = PRINT_STATEMENT.captures(line) else {
        return Cow::Borrowed(line);
    };

    let indent = caps.get(1).map_or("", |m| m.as_str());
    let content = caps
        .get(2)
        .map_or("", |m| m.as_str())
        .trim_matches(is_line_space);

    if is_call_style(content) {
        return Cow::Borrowed(line);
    }

    Cow::Owned(format!("{indent}print({content})\n"))
}
