/// Truncates to at most `max_chars` characters, always cutting on a
/// character boundary. Truncation is silent; the budget is a hard prompt-size
/// cap, not a semantic one.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_is_untouched() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 5), "hello");
    }

    #[test]
    fn long_input_is_cut_to_budget() {
        assert_eq!(truncate_chars("hello world", 5), "hello");
    }

    #[test]
    fn cuts_on_char_boundaries_not_bytes() {
        // Multi-byte characters must never be split.
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("🦀🦀🦀", 2), "🦀🦀");
    }

    #[test]
    fn zero_budget_is_empty() {
        assert_eq!(truncate_chars("hello", 0), "");
    }
}
