pub mod extract;
pub mod groups;
pub mod segments;

use std::collections::HashSet;
use std::fmt;

use extract::{ParsedRow, RowOutcome};

/// Topic used in block headers; the input grammar carries no topic of its own.
pub const DEFAULT_TOPIC: &str = "Post";

/// Everything one pipeline run produces. Rows and the emitted-identifier set
/// are kept alongside the blocks so the audit can be run later against
/// exactly this snapshot, with no shared state in between.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub links_found: usize,
    pub skipped_linkedin: usize,
    pub rows: Vec<ParsedRow>,
    pub blocks: Vec<String>,
    pub block_identifiers: HashSet<String>,
}

impl PipelineOutput {
    /// The copy-all / download representation: blocks joined with `\nOR\n`.
    pub fn export(&self) -> String {
        self.blocks.join("\nOR\n")
    }

    pub fn status(&self) -> Status {
        if self.links_found == 0 {
            Status::NoLinks
        } else if !self.blocks.is_empty() {
            Status::Processed {
                blocks: self.blocks.len(),
                skipped_linkedin: self.skipped_linkedin,
            }
        } else if self.skipped_linkedin > 0 {
            Status::AllLinkedIn
        } else {
            Status::NothingProcessed
        }
    }
}

/// User-facing outcome of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Zero URLs detected in the raw input.
    NoLinks,
    /// Rows were parsed but no block could be produced from them.
    NothingProcessed,
    /// Every link was a LinkedIn link and was skipped.
    AllLinkedIn,
    Processed {
        blocks: usize,
        skipped_linkedin: usize,
    },
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::NoLinks => write!(
                f,
                "No se encontraron enlaces en el texto. Asegúrate de que los enlaces comiencen con \"http://\" o \"https://\"."
            ),
            Status::NothingProcessed => write!(
                f,
                "No se pudieron procesar las filas. Verifica el formato de tus datos."
            ),
            Status::AllLinkedIn => write!(
                f,
                "Todos los enlaces eran de LinkedIn y fueron ignorados. No se generaron bloques."
            ),
            Status::Processed {
                blocks,
                skipped_linkedin,
            } => {
                write!(f, "Se procesaron {} bloques.", blocks)?;
                if *skipped_linkedin > 0 {
                    write!(f, " Se ignoraron {} enlaces de LinkedIn.", skipped_linkedin)?;
                }
                Ok(())
            }
        }
    }
}

/// Full pipeline: segment -> classify -> title -> date -> group -> render.
/// Synchronous, single pass; re-running on the same input replaces all
/// derived state and yields identical output.
pub fn process_input(input: &str, topic: &str) -> PipelineOutput {
    let raw_segments = segments::split_segments(input);
    let links_found = raw_segments.len();

    let mut rows = Vec::with_capacity(raw_segments.len());
    let mut skipped_linkedin = 0;
    for segment in &raw_segments {
        match extract::build_row(segment, topic) {
            RowOutcome::Row(row) => rows.push(row),
            RowOutcome::SkippedLinkedIn => skipped_linkedin += 1,
        }
    }

    let folded = groups::fold_groups(&rows);
    let rendered = groups::render_blocks(&folded);

    PipelineOutput {
        links_found,
        skipped_linkedin,
        rows,
        blocks: rendered.blocks,
        block_identifiers: rendered.identifiers,
    }
}

// ── Tests ──
