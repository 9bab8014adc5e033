// Source extraction - de-indented, signature-free test bodies for display

use once_cell::sync::Lazy;
use regex::Regex;

static HEADER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(HEADER_PATTERN).expect("invalid body header regex"));

/// Leading body headers: classic function (optionally named), parenthesized
/// arrow, bare-identifier arrow. Other signature forms are left in place and
/// the rest of the pipeline degrades to indent stripping.
const HEADER_PATTERN: &str =
    r"^function(?:\s+[^\s(]+)?\s*\([^)]*\)\s*\{|^\([^)]*\)\s*=>\s*\{?|^[A-Za-z_$][A-Za-z0-9_$]*\s*=>\s*\{?";

static TRAILER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+\}$").expect("invalid body trailer regex"));

/// Clean a test body's source text for display
///
/// Normalizes line endings, strips a leading function or arrow header and the
/// trailing closing brace, removes the common leading indentation measured on
/// the first body line, and trims the result. Purely textual; malformed input
/// comes back best-effort rather than failing.
pub fn clean(source: &str) -> String {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let normalized = source.replace("\r\n", "\n").replace('\r', "\n");
    let headless = HEADER_REGEX.replace(&normalized, "");
    let body = TRAILER_REGEX.replace(&headless, "");
    strip_common_indent(&body).trim().to_string()
}

/// Strip the indentation run of the first body line from every line
///
/// Measured after one optional leading newline: a run of spaces, or of tabs
/// when the body is tab-indented. Lines carrying less than the measured run
/// are left as-is.
fn strip_common_indent(body: &str) -> String {
    let first = body.strip_prefix('\n').unwrap_or(body);
    let tabs = first.chars().take_while(|c| *c == '\t').count();
    let spaces = first.chars().take_while(|c| *c == ' ').count();
    let (indent_char, width) = if tabs > 0 { ('\t', tabs) } else { (' ', spaces) };
    if width == 0 {
        return body.to_string();
    }

    let prefix: String = std::iter::repeat(indent_char).take(width).collect();
    body.split('\n')
        .map(|line| line.strip_prefix(prefix.as_str()).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_classic_function() {
        assert_eq!(clean("function () {\n  return 1 + 1;\n}"), "return 1 + 1;");
    }

    #[test]
    fn test_clean_named_function() {
        assert_eq!(clean("function adds(a, b) {\n  return a + b;\n}"), "return a + b;");
    }

    #[test]
    fn test_clean_arrow_without_brace() {
        assert_eq!(clean("() => assert.ok(true)"), "assert.ok(true)");
    }

    #[test]
    fn test_clean_identifier_arrow() {
        assert_eq!(clean("done => {\n  done();\n}"), "done();");
    }

    #[test]
    fn test_clean_unknown_header_degrades_to_trim() {
        assert_eq!(clean("  just some text  "), "just some text");
    }
}
