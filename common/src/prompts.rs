//! Prompt templates for the two generation stages
//!
//! - build_hatch_prompt: stage 1, predict hatches and fly patterns
//! - build_materials_prompt: stage 2, turn a hatch catalog into a tying
//!   material shopping list
//!
//! Both templates end with a worked example to anchor the model on the
//! delimited line format the parser expects.

use crate::types::HatchCatalog;

/// Worked example appended to the hatch prompt; also the canonical fixture
/// for the four-field line format.
pub const EXAMPLE_HATCH_OUTPUT: &str = "
Green Drakes (Ephemera guttulata), Green Drake Dry Fly, 10-12, Olive body with gray wings and a touch of brown
Green Drakes (Ephemera guttulata), Green Drake Nymph, 10-12, Olive body with brown and gray accents
Golden Stoneflies, Golden Stonefly Dry, 6-10, Yellow or tan body with dark mottled wings and brown hackle
Golden Stoneflies, Pat's Rubber Legs, 6-10, Dark brown or black body with rubber legs and a touch of orange
Terrestrials, Dave's Hopper, 10-12, Tan or yellow body with a foam wing and rubber legs
Terrestrials, Black Foam Ant, 14-16, Black foam body with a sparse wing and black hackle
";

/// Worked example appended to the materials prompt (three-field format).
pub const EXAMPLE_MATERIALS_OUTPUT: &str = "
Elk Hair Caddis, Hook, Size 12-16 dry fly hook
Elk Hair Caddis, Thread, Pink or red 6/0 or 8/0 thread
Elk Hair Caddis, Tail, Medium dun hackle fibers
Elk Hair Caddis, Body, Dubbing in a pinkish-red color
Elk Hair Caddis, Post, White or pink synthetic yarn (for the parachute)
Elk Hair Caddis, Hackle, Brown or grizzly rooster hackle
Elk Hair Caddis, Wing, White or light gray calf body hair
";

/// Stage 1 prompt: trip context plus the output contract.
///
/// # Arguments
/// * `location` - destination, e.g. "Wyoming"
/// * `river` - body of water, e.g. "Green River"
/// * `target_species` - e.g. "Cutthroat Trout"
/// * `season` - timeframe, e.g. "Early July"
pub fn build_hatch_prompt(
    location: &str,
    river: &str,
    target_species: &str,
    season: &str,
) -> String {
    format!(
        r#"I am planning a fly-fishing trip to {location}, where I will be targeting {target_species} on the {river}.
The trip will be in {season}. Predict at least 5 of the insect hatches that will be going on in this area at this point in the season,
and suggest at least two patterns for each of the insect species. Include the hook sizes
and colors of the recommended fly patterns. Return each fly pattern on a new line in the following format:

Insect Species (optional latin name), Fly Pattern Name, Hook Size, Color Description

Example Output:
{EXAMPLE_HATCH_OUTPUT}"#
    )
}

/// Flatten a hatch catalog back into the four-field line format, one line
/// per pattern, for embedding in the materials prompt.
pub fn serialize_hatch_catalog(catalog: &HatchCatalog) -> String {
    let mut listing = String::from("\n");
    for (species, patterns) in catalog.iter() {
        for entry in patterns {
            listing.push_str(species);
            listing.push_str(", ");
            listing.push_str(&entry.pattern);
            listing.push_str(", Size ");
            listing.push_str(&entry.hook_size);
            listing.push_str(", ");
            listing.push_str(&entry.description);
            listing.push('\n');
        }
    }
    listing
}

/// Stage 2 prompt: consolidated shopping list for every pattern in the
/// catalog.
pub fn build_materials_prompt(catalog: &HatchCatalog) -> String {
    let pattern_list = serialize_hatch_catalog(catalog);
    format!(
        r#"Generate and combine a complete shopping list of materials for a list of fly fishing patterns. Do not include any other headers or information, only the cumulative list of recommended materials.
Format each line of the output in the following format:

Pattern, Component, Description

An example input list and desired output is given below:

Example fly pattern:
Caddisflies, Elk Hair Caddis, Size 14-18, Light tan or brown body with elk hair wings and a brown hackle

Example output:
{EXAMPLE_MATERIALS_OUTPUT}
Generate the material shopping list for the following list of patterns:
{pattern_list}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_hatch_lines;
    use crate::types::HatchEntry;

    // =============================================
    // build_hatch_prompt tests
    // =============================================

    #[test]
    fn test_hatch_prompt_contains_trip_context() {
        let prompt = build_hatch_prompt("Wyoming", "Green River", "Cutthroat Trout", "Early July");

        assert!(prompt.contains("trip to Wyoming"));
        assert!(prompt.contains("on the Green River"));
        assert!(prompt.contains("targeting Cutthroat Trout"));
        assert!(prompt.contains("will be in Early July"));
    }

    #[test]
    fn test_hatch_prompt_states_line_format() {
        let prompt = build_hatch_prompt("Germany", "River Elbe", "Brown Trout", "Early July");

        assert!(prompt
            .contains("Insect Species (optional latin name), Fly Pattern Name, Hook Size, Color Description"));
        assert!(prompt.contains("at least 5 of the insect hatches"));
        assert!(prompt.contains("at least two patterns"));
    }

    #[test]
    fn test_hatch_prompt_ends_with_worked_example() {
        let prompt = build_hatch_prompt("Montana", "Madison River", "Rainbow Trout", "June");

        assert!(prompt.contains("Example Output:"));
        assert!(prompt.contains("Green Drakes (Ephemera guttulata), Green Drake Dry Fly"));
    }

    // =============================================
    // serialize_hatch_catalog tests
    // =============================================

    #[test]
    fn test_serialize_adds_size_prefix() {
        let mut catalog = HatchCatalog::new();
        catalog.push(
            "Caddisflies",
            HatchEntry {
                pattern: "Elk Hair Caddis".into(),
                hook_size: "14-18".into(),
                description: "Light tan or brown body".into(),
            },
        );

        let listing = serialize_hatch_catalog(&catalog);
        assert_eq!(
            listing,
            "\nCaddisflies, Elk Hair Caddis, Size 14-18, Light tan or brown body\n"
        );
    }

    #[test]
    fn test_serialize_empty_catalog_has_no_pattern_lines() {
        let listing = serialize_hatch_catalog(&HatchCatalog::new());
        assert_eq!(listing, "\n");
    }

    /// Catalog -> text -> catalog keeps groupings, order, patterns and
    /// descriptions; hook sizes come back with the "Size " prefix the
    /// serialization adds.
    #[test]
    fn test_serialize_then_parse_round_trip() {
        let mut catalog = HatchCatalog::new();
        catalog.push(
            "Midges",
            HatchEntry {
                pattern: "Zebra Midge".into(),
                hook_size: "20-24".into(),
                description: "Black body with silver wire wrap".into(),
            },
        );
        catalog.push(
            "Stoneflies",
            HatchEntry {
                pattern: "Pat's Rubber Legs".into(),
                hook_size: "6-10".into(),
                description: "Dark brown body with rubber legs".into(),
            },
        );
        catalog.push(
            "Midges",
            HatchEntry {
                pattern: "Griffith's Gnat".into(),
                hook_size: "20-24".into(),
                description: "Black body with grizzly hackle".into(),
            },
        );

        let reparsed = parse_hatch_lines(&serialize_hatch_catalog(&catalog));

        let keys: Vec<&str> = reparsed.keys().collect();
        assert_eq!(keys, vec!["Midges", "Stoneflies"]);

        let midges = reparsed.get("Midges").expect("Midges group missing");
        assert_eq!(midges.len(), 2);
        assert_eq!(midges[0].pattern, "Zebra Midge");
        assert_eq!(midges[0].hook_size, "Size 20-24");
        assert_eq!(midges[0].description, "Black body with silver wire wrap");
        assert_eq!(midges[1].pattern, "Griffith's Gnat");
    }

    // =============================================
    // build_materials_prompt tests
    // =============================================

    #[test]
    fn test_materials_prompt_embeds_pattern_listing() {
        let mut catalog = HatchCatalog::new();
        catalog.push(
            "Blue Winged Olives",
            HatchEntry {
                pattern: "Pheasant Tail Nymph".into(),
                hook_size: "16-18".into(),
                description: "Brown body with copper bead head".into(),
            },
        );

        let prompt = build_materials_prompt(&catalog);
        assert!(prompt.contains("Pattern, Component, Description"));
        assert!(prompt
            .contains("Blue Winged Olives, Pheasant Tail Nymph, Size 16-18, Brown body with copper bead head"));
        assert!(prompt.contains("Elk Hair Caddis, Hook, Size 12-16 dry fly hook"));
    }

    #[test]
    fn test_materials_prompt_for_empty_catalog() {
        let prompt = build_materials_prompt(&HatchCatalog::new());

        // The request text is still complete, the pattern listing is just blank.
        assert!(prompt.trim_end().ends_with("for the following list of patterns:"));
    }
}
