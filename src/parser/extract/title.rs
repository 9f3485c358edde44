use tracing::debug;

/// Words below which a title is too weak to discriminate in a search query.
const MIN_TITLE_WORDS: usize = 4;
const MAX_TITLE_WORDS: usize = 7;

/// First 7 whitespace-separated words of the caption, quotes stripped.
pub fn title_words(caption: &str) -> String {
    caption
        .replace(['"', '\''], "")
        .split_whitespace()
        .take(MAX_TITLE_WORDS)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `title:"<words>"` search operator, or `None` when the title has fewer than
/// 4 words. Quotes were already stripped, so the operator cannot be broken by
/// an embedded quote.
pub fn title_operator(words: &str) -> Option<String> {
    if words.split_whitespace().count() >= MIN_TITLE_WORDS {
        Some(format!("title:\"{}\"", words))
    } else {
        debug!(
            "Omitiendo title operator para \"{}\" (menos de {} palabras)",
            words, MIN_TITLE_WORDS
        );
        None
    }
}

// ── Tests ──
