use std::collections::{BTreeSet, HashSet};

use tracing::warn;

use super::extract::ParsedRow;

/// Accumulator for one distinct formatted date. Topic and timestamps come
/// from the first row that created the group; the sets only ever grow.
#[derive(Debug, Clone)]
pub struct Group {
    pub topic: String,
    pub formatted_date: String,
    pub sortable_date: i64,
    pub identifiers: BTreeSet<String>,
    pub platforms: BTreeSet<&'static str>,
    pub title_operators: BTreeSet<String>,
}

impl Group {
    fn seeded_from(row: &ParsedRow) -> Self {
        Group {
            topic: row.topic.clone(),
            formatted_date: row.formatted_date.clone(),
            sortable_date: row.sortable_date,
            identifiers: BTreeSet::new(),
            platforms: BTreeSet::new(),
            title_operators: BTreeSet::new(),
        }
    }

    fn accumulate(&mut self, row: &ParsedRow) {
        if let Some(full) = row.full_identifier() {
            self.identifiers.insert(full);
        }
        self.platforms.insert(row.platform.abbrev());
        if let Some(op) = &row.title_operator {
            self.title_operators.insert(op.clone());
        }
    }

    /// Render `<<<{topic} {date} {platforms}>>>\n{op1} OR {op2} ...`, or
    /// `None` when the group carries no operator at all.
    fn render(&self) -> Option<String> {
        let operators: Vec<&str> = self
            .identifiers
            .iter()
            .chain(self.title_operators.iter())
            .map(String::as_str)
            .collect();

        if operators.is_empty() {
            warn!(
                "Bloque omitido para la fecha \"{}\" porque no se encontraron identificadores ni títulos válidos.",
                self.formatted_date
            );
            return None;
        }

        let platforms = self
            .platforms
            .iter()
            .copied()
            .collect::<Vec<_>>()
            .join("+");
        Some(format!(
            "<<<{} {} {}>>>\n{}",
            self.topic,
            self.formatted_date,
            platforms,
            operators.join(" OR ")
        ))
    }
}

/// Rendered output of the grouping engine: ordered block strings plus the
/// union of identifier strings that made it into any emitted block.
#[derive(Debug, Clone)]
pub struct RenderedBlocks {
    pub blocks: Vec<String>,
    pub identifiers: HashSet<String>,
}

/// Fold rows into groups keyed by formatted date. A group is created on the
/// first occurrence of its key, so output order is first-appearance order in
/// the input, not chronological order.
pub fn fold_groups(rows: &[ParsedRow]) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();

    for row in rows {
        let idx = match groups
            .iter()
            .position(|g| g.formatted_date == row.formatted_date)
        {
            Some(idx) => idx,
            None => {
                groups.push(Group::seeded_from(row));
                groups.len() - 1
            }
        };
        groups[idx].accumulate(row);
    }

    groups
}

/// Render groups in creation order, dropping any group with no operators.
pub fn render_blocks(groups: &[Group]) -> RenderedBlocks {
    let mut blocks = Vec::new();
    let mut identifiers = HashSet::new();

    for group in groups {
        if let Some(block) = group.render() {
            blocks.push(block);
            identifiers.extend(group.identifiers.iter().cloned());
        }
    }

    RenderedBlocks {
        blocks,
        identifiers,
    }
}

// ── Tests ──
