//! Shopping list CSV export
//!
//! One row per (pattern, component, description) triple, columns
//! `Pattern, Type, Material` — the same shape the trip tables show.

use crate::error::{HatchError, Result};
use crate::store::Trip;
use std::path::Path;

pub fn export_shopping_list(trip: &Trip, output: &Path) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(output).map_err(|e| HatchError::Export(e.to_string()))?;

    writer
        .write_record(["Pattern", "Type", "Material"])
        .map_err(|e| HatchError::Export(e.to_string()))?;

    for (pattern, materials) in trip.materials.iter() {
        for material in materials {
            let component = material.components.join(", ");
            writer
                .write_record([pattern, component.as_str(), material.description.as_str()])
                .map_err(|e| HatchError::Export(e.to_string()))?;
        }
    }

    writer
        .flush()
        .map_err(|e| HatchError::Export(e.to_string()))?;
    Ok(())
}
