// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Normalize conti descriptions and keep internal thread markers out of user-facing text.

/// Reserved prefix written into a conti description when a chat thread is
/// linked to it. Values with this prefix are bookkeeping, not descriptions.
pub const DISCORD_THREAD_PREFIX: &str = "discord-thread:";

/// Trim whitespace plus U+FEFF, which pasted text and some stores carry as a leading BOM.
fn trim_description(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Turn a raw (stored or typed) description into a presentable one.
///
/// # Rules
/// - Trim surrounding whitespace (and byte-order marks) first.
/// - Absent or blank input yields `None`.
/// - A trimmed value starting with [`DISCORD_THREAD_PREFIX`] yields `None`.
/// - Anything else is returned trimmed, content untouched.
///
/// A `Some` result is therefore never blank and never a thread marker, so
/// feeding it back in returns the same value.
pub fn sanitize_conti_description(value: Option<&str>) -> Option<String> {
    let normalized = value.map(trim_description).filter(|v| !v.is_empty())?;

    if normalized.starts_with(DISCORD_THREAD_PREFIX) {
        log::debug!("suppressing thread marker stored as conti description");
        return None;
    }

    Some(normalized.to_string())
}

/// Build the description marker that links a conti to a chat thread.
pub fn conti_thread_marker(thread_id: &str) -> String {
    format!("{DISCORD_THREAD_PREFIX}{thread_id}")
}

/// Recover the thread id from a stored description, if it is a marker.
///
/// Returns `None` for plain descriptions and for a bare prefix without an id.
pub fn thread_id_from_description(value: Option<&str>) -> Option<&str> {
    trim_description(value?)
        .strip_prefix(DISCORD_THREAD_PREFIX)
        .filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Missing and blank values both collapse to "no description".
    #[test]
    fn sanitize_returns_none_for_absent_and_blank_values() {
        assert_eq!(sanitize_conti_description(None), None);
        assert_eq!(sanitize_conti_description(Some("")), None);
        assert_eq!(sanitize_conti_description(Some("   ")), None);
        assert_eq!(sanitize_conti_description(Some("\n\t ")), None);
    }

    // Ordinary text is trimmed but otherwise left alone.
    #[test]
    fn sanitize_trims_plain_text() {
        assert_eq!(
            sanitize_conti_description(Some("  hello  ")),
            Some("hello".to_string())
        );
        assert_eq!(
            sanitize_conti_description(Some("  주일 1부  예배 ")),
            Some("주일 1부  예배".to_string())
        );
    }

    // Thread markers never surface, even behind leading whitespace.
    #[test]
    fn sanitize_hides_thread_markers() {
        assert_eq!(sanitize_conti_description(Some("discord-thread:12345")), None);
        assert_eq!(
            sanitize_conti_description(Some("  discord-thread:12345  ")),
            None
        );
        assert_eq!(sanitize_conti_description(Some("discord-thread:")), None);
    }

    // A byte-order mark counts as padding, so it cannot smuggle a marker through.
    #[test]
    fn sanitize_strips_byte_order_marks() {
        assert_eq!(sanitize_conti_description(Some("\u{FEFF}")), None);
        assert_eq!(
            sanitize_conti_description(Some("\u{FEFF}discord-thread:1")),
            None
        );
        assert_eq!(
            sanitize_conti_description(Some("\u{FEFF} 찬양 \u{FEFF}")),
            Some("찬양".to_string())
        );
        assert_eq!(
            thread_id_from_description(Some("\u{FEFF}discord-thread:7")),
            Some("7")
        );
    }

    // Only the exact prefix counts; near misses and mid-string matches pass through.
    #[test]
    fn sanitize_keeps_values_that_only_resemble_the_marker() {
        assert_eq!(
            sanitize_conti_description(Some("discord-thread")),
            Some("discord-thread".to_string())
        );
        assert_eq!(
            sanitize_conti_description(Some("Discord-Thread:1")),
            Some("Discord-Thread:1".to_string())
        );
        assert_eq!(
            sanitize_conti_description(Some("see discord-thread:1")),
            Some("see discord-thread:1".to_string())
        );
    }

    // Sanitized output is a fixed point.
    #[test]
    fn sanitize_is_idempotent_on_its_output() {
        for raw in ["  hello  ", "a\nb", "discord-thread", " x discord-thread:9 "] {
            let once = sanitize_conti_description(Some(raw));
            let twice = once
                .as_deref()
                .and_then(|v| sanitize_conti_description(Some(v)));
            assert_eq!(once, twice, "input {raw:?}");
        }
    }

    // Markers we write are exactly the ones the sanitizer hides.
    #[test]
    fn thread_marker_round_trips_and_is_hidden() {
        let marker = conti_thread_marker("1199887766");
        assert_eq!(marker, "discord-thread:1199887766");
        assert_eq!(thread_id_from_description(Some(marker.as_str())), Some("1199887766"));
        assert_eq!(sanitize_conti_description(Some(marker.as_str())), None);
    }

    // Plain descriptions and bare prefixes carry no thread id.
    #[test]
    fn thread_id_is_absent_for_non_markers() {
        assert_eq!(thread_id_from_description(None), None);
        assert_eq!(thread_id_from_description(Some("hello")), None);
        assert_eq!(thread_id_from_description(Some("discord-thread:")), None);
        assert_eq!(
            thread_id_from_description(Some("  discord-thread:42 ")),
            Some("42")
        );
    }
}
