//! Single-line previews of untrusted text for logging.
//!
//! Scanned QR payloads are arbitrary bytes-turned-strings: they can hold
//! control characters or run very long. `preview` renders them as one quoted,
//! bounded token so log lines stay readable.

/// Characters kept before the preview is cut.
const PREVIEW_CAP: usize = 120;

/// Quote untrusted text for a log line. Control characters become escapes,
/// embedded quotes and backslashes are escaped, and anything past the cap is
/// replaced by `...(+N)` with the count of dropped characters.
pub fn preview(text: &str) -> String {
    use std::fmt::Write;

    let total = text.chars().count();
    let mut out = String::with_capacity(text.len().min(PREVIEW_CAP) + 8);
    out.push('"');
    for ch in text.chars().take(PREVIEW_CAP) {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    if total > PREVIEW_CAP {
        let _ = write!(out, "...(+{})", total - PREVIEW_CAP);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::preview;

    #[test]
    fn quotes_and_escapes_control_characters() {
        assert_eq!(preview("pista1"), "\"pista1\"");
        assert_eq!(preview("a\nb\tc"), "\"a\\nb\\tc\"");
        assert_eq!(preview("say \"hi\"\\"), "\"say \\\"hi\\\"\\\\\"");
        assert_eq!(preview("\u{7}"), "\"\\x07\"");
    }

    #[test]
    fn long_input_is_cut_with_a_count() {
        let long = "x".repeat(130);
        let rendered = preview(&long);
        assert!(rendered.ends_with("...(+10)"));
        assert!(rendered.starts_with('"'));
    }
}
