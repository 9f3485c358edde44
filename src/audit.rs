use std::collections::HashSet;

use serde::Serialize;

use crate::parser::extract::ParsedRow;
use crate::parser::extract::platform::Platform;

/// Result of cross-checking parsed rows against the identifiers that actually
/// made it into rendered blocks. Serializes to the shape the original tool
/// exported: a `type` tag plus camelCase fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum AuditFinding {
    #[serde(rename = "Éxito")]
    Success { message: String },
    #[serde(rename = "Identificador Ausente en Bloque Final")]
    #[serde(rename_all = "camelCase")]
    MissingIdentifier {
        title: String,
        message: String,
        original_link: String,
    },
}

/// Verify that every resolvable identifier appears in some emitted block.
///
/// Group omission (no operators) or platform misclassification can silently
/// drop a row's contribution; this check is the only detector for that class
/// of bug. Rows with an `unknown:` operator or no identifier are out of
/// scope. A clean pass yields a single success finding.
pub fn verify(rows: &[ParsedRow], block_identifiers: &HashSet<String>) -> Vec<AuditFinding> {
    let mut findings = Vec::new();

    for row in rows {
        if row.platform == Platform::Unknown {
            continue;
        }
        let Some(full) = row.full_identifier() else {
            continue;
        };
        if !block_identifiers.contains(&full) {
            findings.push(AuditFinding::MissingIdentifier {
                title: row.title_words.clone(),
                message: format!(
                    "El identificador \"{}\" (del link: {}) se esperaba en un bloque final pero no se encontró. Esto puede ocurrir si la fila fue ignorada (ej. LinkedIn), o si hubo un problema al generar el bloque.",
                    full, row.original_link
                ),
                original_link: row.original_link.clone(),
            });
        }
    }

    if findings.is_empty() {
        findings.push(AuditFinding::Success {
            message: "¡Auditoría completada! Todos los identificadores esperados se encontraron en los bloques generados.".to_string(),
        });
    }

    findings
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{process_input, DEFAULT_TOPIC};

    fn row(platform: Platform, identifier: Option<&str>) -> ParsedRow {
        ParsedRow {
            identifier: identifier.map(String::from),
            platform,
            title_words: "palabras del texto original".to_string(),
            title_operator: None,
            formatted_date: "29/08/24".to_string(),
            sortable_date: 0,
            topic: "Post".to_string(),
            original_link: "https://example.com/post".to_string(),
        }
    }

    #[test]
    fn clean_pass_yields_single_success() {
        let rows = vec![row(Platform::Facebook, Some("123"))];
        let mut present = HashSet::new();
        present.insert("engagingWithGuid:123".to_string());

        let findings = verify(&rows, &present);
        assert_eq!(findings.len(), 1);
        assert!(matches!(findings[0], AuditFinding::Success { .. }));
    }

    #[test]
    fn dropped_identifier_is_reported() {
        let rows = vec![
            row(Platform::Facebook, Some("123")),
            row(Platform::TikTok, Some("456")),
        ];
        let mut present = HashSet::new();
        present.insert("engagingWithGuid:123".to_string());

        let findings = verify(&rows, &present);
        assert_eq!(findings.len(), 1);
        match &findings[0] {
            AuditFinding::MissingIdentifier {
                message,
                original_link,
                ..
            } => {
                assert!(message.contains("engagingWithGuid:456"));
                assert_eq!(original_link, "https://example.com/post");
            }
            other => panic!("expected missing-identifier finding, got {:?}", other),
        }
    }

    #[test]
    fn unknown_platform_and_unresolved_rows_are_ignored() {
        let rows = vec![
            row(Platform::Unknown, Some("999")),
            row(Platform::Instagram, None),
        ];
        let findings = verify(&rows, &HashSet::new());
        assert!(matches!(findings[0], AuditFinding::Success { .. }));
    }

    #[test]
    fn pipeline_output_passes_its_own_audit() {
        let input = "https://www.facebook.com/a_11 un texto con varias palabras 29-08-24\n\
                     https://www.instagram.com/p/XYZ/ otro texto con varias palabras 22-09-24";
        let out = process_input(input, DEFAULT_TOPIC);
        let findings = verify(&out.rows, &out.block_identifiers);
        assert_eq!(findings.len(), 1);
        assert!(matches!(findings[0], AuditFinding::Success { .. }));
    }

    #[test]
    fn empty_pipeline_output_audits_clean() {
        // LinkedIn-only input creates no rows, so there is nothing to miss.
        let out = process_input(
            "https://www.linkedin.com/feed/update/1 texto 29-08-24",
            DEFAULT_TOPIC,
        );
        let findings = verify(&out.rows, &out.block_identifiers);
        assert!(matches!(findings[0], AuditFinding::Success { .. }));
    }

    #[test]
    fn serializes_to_original_shape() {
        let finding = AuditFinding::MissingIdentifier {
            title: "t".to_string(),
            message: "m".to_string(),
            original_link: "https://x".to_string(),
        };
        let json = serde_json::to_value(&finding).unwrap();
        assert_eq!(json["type"], "Identificador Ausente en Bloque Final");
        assert_eq!(json["originalLink"], "https://x");
    }
}
