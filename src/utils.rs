/// Shorten model output for log lines, respecting char boundaries.
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::preview;

    #[test]
    fn short_text_passes_through() {
        assert_eq!(preview("hi", 80), "hi");
    }

    #[test]
    fn long_text_cuts_on_char_boundary() {
        assert_eq!(preview("héllo world", 4), "héll");
    }
}
