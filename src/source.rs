//! Cleanup for command text received from a generator.
//!
//! Generated text often arrives wrapped in Markdown code fences and without
//! the leading reset. [`prepare`] is applied by callers before decoding;
//! the decoder itself never calls it.

/// Reset command placed at the start of prepared text.
pub const RESET_PREFIX: &str = "|*";

const FENCE: &str = "```";

/// Strip code fences, trim, and make sure the text begins with a reset.
///
/// A fence is removed together with a lower-case language tag directly
/// after it and one following newline.
pub fn prepare(raw: &str) -> String {
    let stripped = strip_fences(raw);
    let text = stripped.trim();
    if text.starts_with(RESET_PREFIX) {
        text.to_string()
    } else {
        format!("{RESET_PREFIX}\n{text}")
    }
}

fn strip_fences(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(pos) = rest.find(FENCE) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + FENCE.len()..];
        rest = rest.trim_start_matches(|c: char| c.is_ascii_lowercase());
        rest = rest.strip_prefix('\n').unwrap_or(rest);
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_gets_reset() {
        assert_eq!(prepare("|c0F|L00002S1E"), "|*\n|c0F|L00002S1E");
    }

    #[test]
    fn test_existing_reset_kept() {
        assert_eq!(prepare("  |*|c0F\n"), "|*|c0F");
    }

    #[test]
    fn test_fenced_block() {
        let raw = "```ripscrip\n|*\n|L00001010\n```\n";
        assert_eq!(prepare(raw), "|*\n|L00001010");
    }

    #[test]
    fn test_bare_fences_and_prose() {
        let raw = "Here you go:\n```\n|C0A0A05\n```";
        assert_eq!(prepare(raw), "|*\nHere you go:\n|C0A0A05");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(prepare(""), "|*\n");
        assert_eq!(prepare("```\n```"), "|*\n");
    }
}
