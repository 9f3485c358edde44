use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());
static DATE_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{2}-\d{2}-\d{2}$").unwrap());

/// Date token assumed when a segment carries none.
pub const FALLBACK_DATE_TOKEN: &str = "01-01-00";

/// One post segment as pasted: a URL, the caption that follows it, and the
/// trailing `DD-MM-YY` token (or the fallback when absent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSegment {
    pub url: String,
    pub caption: String,
    pub date_token: String,
}

/// Split freely pasted text into ordered post segments. Each segment is
/// bounded by a URL and runs to the next URL or the end of input; the last
/// `DD-MM-YY` match at the end of the trimmed trailing text is its date token
/// and everything before it is the caption. Zero URLs yields an empty list.
pub fn split_segments(input: &str) -> Vec<RawSegment> {
    let urls: Vec<_> = URL_RE.find_iter(input).collect();
    let mut segments = Vec::with_capacity(urls.len());

    for (i, url) in urls.iter().enumerate() {
        let trailing_end = urls.get(i + 1).map_or(input.len(), |next| next.start());
        let trailing = input[url.end()..trailing_end].trim();

        let (caption, date_token) = match DATE_TOKEN_RE.find(trailing) {
            Some(m) => (trailing[..m.start()].trim(), m.as_str().to_string()),
            None => {
                warn!(
                    "No se pudo extraer la fecha DD-MM-YY para el enlace: {}. Usando fecha por defecto ({}).",
                    url.as_str(),
                    FALLBACK_DATE_TOKEN
                );
                (trailing, FALLBACK_DATE_TOKEN.to_string())
            }
        };

        segments.push(RawSegment {
            url: url.as_str().to_string(),
            caption: caption.to_string(),
            date_token,
        });
    }

    segments
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_segment_with_trailing_date() {
        let segs = split_segments("https://example.com/a un texto de prueba 29-08-24");
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].url, "https://example.com/a");
        assert_eq!(segs[0].caption, "un texto de prueba");
        assert_eq!(segs[0].date_token, "29-08-24");
    }

    #[test]
    fn caption_glued_to_url_and_date() {
        // No delimiter at all, as pasted from a spreadsheet cell.
        let segs =
            split_segments("https://www.facebook.com/1_22Hola mundo de seis palabras total29-08-24");
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].url, "https://www.facebook.com/1_22Hola");
        assert_eq!(segs[0].caption, "mundo de seis palabras total");
        assert_eq!(segs[0].date_token, "29-08-24");
    }

    #[test]
    fn missing_date_falls_back() {
        let segs = split_segments("http://example.com/b sin fecha al final");
        assert_eq!(segs[0].date_token, FALLBACK_DATE_TOKEN);
        assert_eq!(segs[0].caption, "sin fecha al final");
    }

    #[test]
    fn embedded_date_shape_is_not_the_token() {
        // Only a date at the very end of the trailing text counts.
        let segs = split_segments("https://example.com/c promo del 11-11-11 en tiendas 22-09-24");
        assert_eq!(segs[0].date_token, "22-09-24");
        assert_eq!(segs[0].caption, "promo del 11-11-11 en tiendas");
    }

    #[test]
    fn multiple_urls_bound_segments() {
        let input = "https://a.com/1 primero 29-08-24\nhttps://b.com/2 segundo 22-09-24";
        let segs = split_segments(input);
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].url, "https://a.com/1");
        assert_eq!(segs[0].date_token, "29-08-24");
        assert_eq!(segs[1].url, "https://b.com/2");
        assert_eq!(segs[1].caption, "segundo");
    }

    #[test]
    fn segment_without_date_before_next_url() {
        let input = "https://a.com/1 sin fecha https://b.com/2 con fecha 22-09-24";
        let segs = split_segments(input);
        assert_eq!(segs[0].date_token, FALLBACK_DATE_TOKEN);
        assert_eq!(segs[0].caption, "sin fecha");
        assert_eq!(segs[1].date_token, "22-09-24");
    }

    #[test]
    fn no_urls_yields_no_segments() {
        assert!(split_segments("texto pegado sin enlaces 29-08-24").is_empty());
        assert!(split_segments("").is_empty());
    }
}
