//! Version text validation

/// Check whether version text starts with a numeric/dot character.
///
/// This is deliberately a prefix match, not a full-string match: the
/// original pattern `(\d|\.)+` was anchored at the start only, so
/// pre-release suffixes pass (`1.2.3-beta`) while purely symbolic
/// values (`abc`, `$(Version)`, empty) are rejected. The full text is
/// reported, not the matched prefix.
pub fn is_version_like(text: &str) -> bool {
    text.chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '.')
}
