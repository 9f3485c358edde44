pub mod date;
pub mod platform;
pub mod title;

use platform::{Classified, Platform};
use tracing::debug;

use super::segments::RawSegment;

/// Canonical per-post record. Built once per segment, immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRow {
    /// Platform-specific content ID; `None` when it could not be resolved.
    pub identifier: Option<String>,
    pub platform: Platform,
    /// Up to the first 7 words of the sanitized caption.
    pub title_words: String,
    /// `title:"<words>"`, or `None` when the title is too weak to search on.
    pub title_operator: Option<String>,
    /// Canonical `DD/MM/YY`, or the raw date token if unparseable.
    pub formatted_date: String,
    /// Epoch milliseconds, 0 if the date was unparseable.
    pub sortable_date: i64,
    pub topic: String,
    /// The link with tracking parameters stripped.
    pub original_link: String,
}

impl ParsedRow {
    /// Full search operator string, e.g. `engagingWithGuid:921437093355563`.
    pub fn full_identifier(&self) -> Option<String> {
        self.identifier
            .as_ref()
            .map(|id| format!("{}{}", self.platform.operator(), id))
    }
}

/// Outcome of building one segment: a row, or an intentional LinkedIn skip.
#[derive(Debug)]
pub enum RowOutcome {
    Row(ParsedRow),
    SkippedLinkedIn,
}

/// Compose classification, title extraction and date normalization into one
/// `ParsedRow`. Every step is total with a soft fallback, so one malformed
/// segment can never abort the batch.
pub fn build_row(segment: &RawSegment, topic: &str) -> RowOutcome {
    let link = platform::strip_tracking(&segment.url);

    let (platform, identifier) = match platform::classify(link) {
        Classified::Skip => return RowOutcome::SkippedLinkedIn,
        Classified::Post {
            platform,
            identifier,
        } => (platform, identifier),
    };

    let title_words = title::title_words(&segment.caption);
    let title_operator = title::title_operator(&title_words);

    let normalized = date::normalize(&segment.date_token);

    let topic = if topic.trim().is_empty() {
        super::DEFAULT_TOPIC.to_string()
    } else {
        topic.to_string()
    };

    debug!(
        "Fila procesada: {} -> {} ({})",
        link,
        normalized.formatted,
        platform.name()
    );

    RowOutcome::Row(ParsedRow {
        identifier,
        platform,
        title_words,
        title_operator,
        formatted_date: normalized.formatted,
        sortable_date: normalized.sortable_ms,
        topic,
        original_link: link.to_string(),
    })
}

// ── Tests ──
