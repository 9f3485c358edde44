use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

// Captions are often pasted glued to the URL, so the trailing digits may be
// followed by caption text inside the same whitespace-delimited token. Taking
// the last underscore-digits run recovers the ID either way.
static FACEBOOK_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(\d+)").unwrap());
static TIKTOK_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/video/(\d+)").unwrap());
static INSTAGRAM_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:p|reel|tv)/([a-zA-Z0-9_-]+)(?:/|\?|$)").unwrap());

/// Platform recognized from a post link. Drives the search operator and the
/// abbreviation used in block headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Facebook,
    TikTok,
    Instagram,
    Unknown,
}

impl Platform {
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::TikTok => "TikTok",
            Platform::Instagram => "Instagram",
            Platform::Unknown => "Desconocida",
        }
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            Platform::Facebook => "FB",
            Platform::TikTok => "TK",
            Platform::Instagram => "IG",
            Platform::Unknown => "??",
        }
    }

    pub fn operator(&self) -> &'static str {
        match self {
            Platform::Facebook | Platform::TikTok => "engagingWithGuid:",
            Platform::Instagram => "url:",
            Platform::Unknown => "unknown:",
        }
    }
}

/// Outcome of classifying a cleaned link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    /// LinkedIn links are intentionally excluded; counted, never an error.
    Skip,
    /// A recognized (or unknown) platform. `identifier` is `None` when the
    /// platform was recognized but no ID could be extracted from the URL.
    Post {
        platform: Platform,
        identifier: Option<String>,
    },
}

/// Cut tracking parameters: everything from `?utm_campaign` onward.
pub fn strip_tracking(link: &str) -> &str {
    match link.find("?utm_campaign") {
        Some(idx) => &link[..idx],
        None => link,
    }
}

/// Classify a cleaned link by domain, in fixed precedence, and extract its
/// platform-specific identifier. First match wins.
pub fn classify(link: &str) -> Classified {
    if link.contains("linkedin.com") {
        warn!("Ignorando enlace de LinkedIn: {}", link);
        return Classified::Skip;
    }

    if link.contains("facebook.com") {
        let identifier = FACEBOOK_ID_RE
            .captures_iter(link)
            .last()
            .map(|c| c[1].to_string());
        return Classified::Post {
            platform: Platform::Facebook,
            identifier,
        };
    }

    if link.contains("tiktok.com") {
        let identifier = TIKTOK_ID_RE.captures(link).map(|c| c[1].to_string());
        return Classified::Post {
            platform: Platform::TikTok,
            identifier,
        };
    }

    if link.contains("instagram.com") {
        let identifier = INSTAGRAM_ID_RE.captures(link).map(|c| c[1].to_string());
        return Classified::Post {
            platform: Platform::Instagram,
            identifier,
        };
    }

    warn!("Plataforma desconocida para el enlace: {}", link);
    Classified::Post {
        platform: Platform::Unknown,
        identifier: None,
    }
}

// ── Tests ──
