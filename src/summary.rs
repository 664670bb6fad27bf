//! Head+tail previews for compact display of long chunk text.

/// Default length above which text is summarized.
pub const DEFAULT_PREVIEW_LENGTH: usize = 100;

/// Characters kept from each end of a summarized text.
const EDGE_CHARS: usize = 50;

const SEPARATOR: &str = " ... ";

/// Summarize `text` for display.
///
/// Text of at most `max_length` characters is returned unchanged. Longer text
/// becomes the first 50 characters, `" ... "`, and the last 50 characters,
/// whatever `max_length` is. Lengths count Unicode scalar values, never bytes.
pub fn summarize(text: &str, max_length: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_length {
        return text.to_string();
    }

    let head: String = text.chars().take(EDGE_CHARS).collect();
    let tail_start = char_count.saturating_sub(EDGE_CHARS);
    let tail: String = text.chars().skip(tail_start).collect();
    format!("{}{}{}", head, SEPARATOR, tail)
}
