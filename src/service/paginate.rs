//! Splitting of long text into embed-sized chunks.

/// Maximum length of an embed field value.
pub const FIELD_VALUE_LIMIT: usize = 1024;

/// Splits `text` into chunks of at most `cap` characters.
///
/// While the remainder is longer than `cap`, the chunk ends after the last
/// newline within the first `cap` characters, else after the last period, else
/// after the last space, else after exactly `cap` characters. The break
/// character stays at the end of its chunk, so concatenating the chunks
/// reproduces `text`. Greedy and single pass; every iteration consumes at
/// least one character.
///
/// A `cap` of zero is treated as one.
///
/// # Returns
/// - `Vec<&str>` - One or more chunks; a single empty chunk for empty input
pub fn split_text(text: &str, cap: usize) -> Vec<&str> {
    let cap = cap.max(1);
    let mut chunks = Vec::new();
    let mut rest = text;

    // Byte offset just past the first `cap` characters, if there is more text.
    while let Some((window_end, _)) = rest.char_indices().nth(cap) {
        let window = &rest[..window_end];
        let split = window
            .rfind('\n')
            .or_else(|| window.rfind('.'))
            .or_else(|| window.rfind(' '))
            .map(|index| index + 1)
            .unwrap_or(window_end);

        let (chunk, remainder) = rest.split_at(split);
        chunks.push(chunk);
        rest = remainder;
    }
    chunks.push(rest);

    chunks
}
