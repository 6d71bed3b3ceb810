//! Shared helpers for inspecting captured output streams.

/// Decodes captured output, replacing invalid UTF-8.
#[must_use]
pub fn captured(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Normalises line endings and strips trailing whitespace from every line.
#[must_use]
pub fn normalize(value: &str) -> String {
    value
        .replace("\r\n", "\n")
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Returns the trimmed line that mentions `needle`, if any.
#[must_use]
pub fn line_containing<'a>(value: &'a str, needle: &str) -> Option<&'a str> {
    value
        .lines()
        .find(|line| line.contains(needle))
        .map(str::trim)
}

/// Counts how many lines mention `needle`.
#[must_use]
pub fn count_lines(value: &str, needle: &str) -> usize {
    value.lines().filter(|line| line.contains(needle)).count()
}
