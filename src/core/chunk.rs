//! Splitting output into chat-sized messages.

/// Characters of content per message; the fence adds six more, staying well
/// under the chat platform's 2000-character cap.
pub const DEFAULT_MESSAGE_BUDGET: usize = 1900;

/// Sent instead of an empty message.
pub const NO_DATA_MESSAGE: &str = "No data available.";

/// Split `text` into consecutive slices of at most `limit` characters.
///
/// Slicing is by character, not byte, and ignores word or line boundaries.
/// Concatenating the result gives back `text` exactly. A `limit` of zero is
/// treated as one.
///
/// ```rust
/// use nba_stats::core::chunk::chunk;
///
/// assert_eq!(chunk("abcdefg", 3), vec!["abc", "def", "g"]);
/// assert!(chunk("", 3).is_empty());
/// ```
pub fn chunk(text: &str, limit: usize) -> Vec<&str> {
    let limit = limit.max(1);
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut count = 0;

    for (idx, _) in text.char_indices() {
        if count == limit {
            chunks.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    if start < text.len() {
        chunks.push(&text[start..]);
    }
    chunks
}

/// Wrap one chunk in a fixed-width code fence.
pub fn fence(chunk: &str) -> String {
    format!("```{}```", chunk)
}

/// Chunk `text` and fence each piece; empty text becomes [`NO_DATA_MESSAGE`].
pub fn fence_chunks(text: &str, limit: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![NO_DATA_MESSAGE.to_string()];
    }
    chunk(text, limit).into_iter().map(fence).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_count(text: &str, limit: usize) -> usize {
        let len = text.chars().count();
        (len + limit - 1) / limit
    }

    #[test]
    fn test_round_trip_and_bounds() {
        let texts = [
            "a",
            "short line",
            "LAL, 2003-04: PPG 20.9\nCLE, 2004-05: PPG 27.2\nCLE, 2005-06: PPG 31.4",
            "exactly ten",
        ];
        for text in texts {
            for limit in 1..=15 {
                let pieces = chunk(text, limit);
                assert_eq!(pieces.concat(), text);
                assert!(pieces.iter().all(|p| p.chars().count() <= limit));
                assert!(pieces.iter().all(|p| !p.is_empty()));
                assert_eq!(pieces.len(), expected_count(text, limit));
            }
        }
    }

    #[test]
    fn test_exact_multiple() {
        assert_eq!(chunk("abcdef", 3), vec!["abc", "def"]);
        assert_eq!(chunk("abc", 3), vec!["abc"]);
    }

    #[test]
    fn test_multibyte_characters_are_not_split() {
        let text = "Dončić – Jokić";
        let pieces = chunk(text, 4);
        assert_eq!(pieces.concat(), text);
        assert_eq!(pieces, vec!["Donč", "ić –", " Jok", "ić"]);
    }

    #[test]
    fn test_zero_limit_treated_as_one() {
        assert_eq!(chunk("abc", 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(chunk("", 5).is_empty());
        assert_eq!(fence_chunks("", 5), vec![NO_DATA_MESSAGE.to_string()]);
    }

    #[test]
    fn test_fence_chunks_wraps_each_piece() {
        let messages = fence_chunks("abcdefgh", 5);
        assert_eq!(messages, vec!["```abcde```", "```fgh```"]);
    }

    #[test]
    fn test_default_budget_fits_platform_limit() {
        let long = "x".repeat(5000);
        let messages = fence_chunks(&long, DEFAULT_MESSAGE_BUDGET);
        assert_eq!(messages.len(), 3);
        assert!(messages.iter().all(|m| m.chars().count() <= 2000));
    }
}
