//! Match the Hatch shared core
//!
//! The pure half of the trip planner, shared by the CLI (and any future
//! front-end):
//! - types: insect hatch / tying material catalogs
//! - prompts: templates for the two generation stages
//! - parser: tolerant delimited-line parsing of model output

pub mod parser;
pub mod prompts;
pub mod types;

pub use parser::{
    parse_delimited_lines, parse_hatch_lines, parse_material_lines, split_line, SkipReason,
};
pub use prompts::{
    build_hatch_prompt, build_materials_prompt, serialize_hatch_catalog, EXAMPLE_HATCH_OUTPUT,
    EXAMPLE_MATERIALS_OUTPUT,
};
pub use types::{Catalog, HatchCatalog, HatchEntry, MaterialCatalog, MaterialEntry};
