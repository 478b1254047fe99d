//! Two-stage generation pipeline
//!
//! Stage 1: trip parameters -> hatch prompt -> completion -> hatch catalog.
//! Stage 2: hatch catalog -> materials prompt -> completion -> material
//! catalog.
//!
//! Neither stage returns an error: an empty catalog is the only failure
//! signal, and the caller decides what to show for it. Stage 1 gets one
//! extra attempt on the fallback provider when the first completion parses
//! to nothing; stage 2 deliberately does not.

use crate::client::CompletionClient;
use match_the_hatch_common::{
    build_hatch_prompt, build_materials_prompt, parse_hatch_lines, parse_material_lines,
    HatchCatalog, MaterialCatalog,
};

pub const HATCH_LABEL: &str = "hatch_list";
pub const MATERIALS_LABEL: &str = "materials_list";

/// Predict insect hatches and fly patterns for a trip.
pub async fn generate_hatch_catalog(
    client: &CompletionClient,
    location: &str,
    river: &str,
    target_species: &str,
    season: &str,
    verbose: bool,
) -> HatchCatalog {
    let prompt = build_hatch_prompt(location, river, target_species, season);
    if verbose {
        println!("  [hatches] prompt: {} chars", prompt.len());
    }

    let mut catalog = match client.complete(&prompt, HATCH_LABEL).await {
        Ok(text) => {
            if verbose {
                println!("  [hatches] response: {} chars", text.len());
            }
            parse_hatch_lines(&text)
        }
        Err(e) => {
            if verbose {
                println!("  [hatches] completion failed: {e}");
            }
            HatchCatalog::new()
        }
    };

    // Empty catalog means the model answered in some other shape (or not at
    // all). One more attempt on the fallback leg, then give up quietly.
    if catalog.is_empty() {
        if verbose {
            println!("  [hatches] nothing parsed, retrying on the fallback provider");
        }
        if let Ok(text) = client.complete_fallback(&prompt, HATCH_LABEL).await {
            catalog = parse_hatch_lines(&text);
        }
    }

    if verbose {
        println!(
            "  [hatches] parsed {} hatches / {} patterns",
            catalog.len(),
            catalog.entry_count()
        );
    }
    catalog
}

/// Build a consolidated tying material shopping list for every pattern in
/// the catalog. No fallback retry on an empty parse here.
pub async fn generate_materials_catalog(
    client: &CompletionClient,
    hatches: &HatchCatalog,
    verbose: bool,
) -> MaterialCatalog {
    let prompt = build_materials_prompt(hatches);
    if verbose {
        println!("  [materials] prompt: {} chars", prompt.len());
    }

    let catalog = match client.complete(&prompt, MATERIALS_LABEL).await {
        Ok(text) => {
            if verbose {
                println!("  [materials] response: {} chars", text.len());
            }
            parse_material_lines(&text)
        }
        Err(e) => {
            if verbose {
                println!("  [materials] completion failed: {e}");
            }
            MaterialCatalog::new()
        }
    };

    if verbose {
        println!(
            "  [materials] parsed {} patterns / {} materials",
            catalog.len(),
            catalog.entry_count()
        );
    }
    catalog
}
