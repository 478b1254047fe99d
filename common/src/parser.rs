//! Tolerant line parser for model output
//!
//! The models are asked for comma-separated lines; whatever comes back is
//! split on the literal `", "` separator and grouped by a key field. Lines
//! that do not fit are dropped whole, never defaulted, and an empty catalog
//! is the caller's signal that nothing usable came back.
//!
//! This is a plain string split, not a CSV parser: a field that legitimately
//! contains `", "` will corrupt the split. That fragility is inherited
//! behavior the rest of the pipeline is built around.

use crate::types::{Catalog, HatchCatalog, HatchEntry, MaterialCatalog, MaterialEntry};

/// Field separator the prompts instruct the model to use.
pub const SEPARATOR: &str = ", ";

/// Why a line was dropped instead of becoming a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Whitespace-only line (the worked examples are newline-padded).
    Blank,
    /// Fewer fields than the layout requires; no partial record is emitted.
    TooFewFields { found: usize, required: usize },
}

/// Split one line into at least `required` fields, or say why not.
pub fn split_line(line: &str, required: usize) -> Result<Vec<String>, SkipReason> {
    if line.trim().is_empty() {
        return Err(SkipReason::Blank);
    }
    let fields: Vec<String> = line.split(SEPARATOR).map(str::to_string).collect();
    if fields.len() < required {
        return Err(SkipReason::TooFewFields {
            found: fields.len(),
            required,
        });
    }
    Ok(fields)
}

/// Parse a block of model output into a keyed catalog.
///
/// Each line must split into at least `required_fields` fields; extras are
/// ignored. The field at `key_field` becomes the group key and the remaining
/// fields, in order, are handed to `build`. Malformed lines are skipped and
/// processing continues; first-seen key order and within-key line order are
/// preserved.
pub fn parse_delimited_lines<T>(
    text: &str,
    required_fields: usize,
    key_field: usize,
    mut build: impl FnMut(Vec<String>) -> T,
) -> Catalog<T> {
    let mut catalog = Catalog::new();
    for line in text.lines() {
        match split_line(line, required_fields) {
            Ok(mut fields) => {
                fields.truncate(required_fields);
                let key = fields.remove(key_field);
                catalog.push(&key, build(fields));
            }
            Err(_) => continue,
        }
    }
    catalog
}

/// Stage 1 layout: `Insect Species, Fly Pattern Name, Hook Size, Color
/// Description`, keyed by species.
pub fn parse_hatch_lines(text: &str) -> HatchCatalog {
    parse_delimited_lines(text, 4, 0, |fields| {
        let mut fields = fields.into_iter();
        HatchEntry {
            pattern: fields.next().unwrap_or_default(),
            hook_size: fields.next().unwrap_or_default(),
            description: fields.next().unwrap_or_default(),
        }
    })
}

/// Stage 2 layout: `Pattern, Component, Description`, keyed by pattern name.
pub fn parse_material_lines(text: &str) -> MaterialCatalog {
    parse_delimited_lines(text, 3, 0, |fields| {
        let mut fields = fields.into_iter();
        MaterialEntry {
            components: vec![fields.next().unwrap_or_default()],
            description: fields.next().unwrap_or_default(),
        }
    })
}
