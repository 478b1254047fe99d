//! Catalog types for hatch predictions and tying materials
//!
//! Everything here is a raw string fragment of model output. Hook sizes are
//! not parsed into numbers and species names are not canonicalized; the
//! catalogs carry whatever the model said, grouped in the order it said it.

use serde::{Deserialize, Serialize};

/// One recommended fly pattern for an insect hatch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HatchEntry {
    pub pattern: String,
    pub hook_size: String,
    pub description: String,
}

/// One tying material for a fly pattern.
///
/// `components` holds a single name per parsed line; it stays a vector
/// because the shopping-list rendering treats it as one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaterialEntry {
    pub components: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Group<T> {
    key: String,
    entries: Vec<T>,
}

/// Insertion-ordered grouping of entries under string keys.
///
/// Keys appear in first-seen order; a repeated key appends to its existing
/// group. An empty catalog is the universal "nothing usable came back"
/// signal for the generation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog<T> {
    groups: Vec<Group<T>>,
}

/// Species name (may include a parenthetical Latin name) -> fly patterns.
pub type HatchCatalog = Catalog<HatchEntry>;

/// Fly pattern name -> tying materials.
pub type MaterialCatalog = Catalog<MaterialEntry>;

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self { groups: Vec::new() }
    }
}

impl<T> Catalog<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry under `key`, creating the group on first sight.
    pub fn push(&mut self, key: &str, entry: T) {
        match self.groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.entries.push(entry),
            None => self.groups.push(Group {
                key: key.to_string(),
                entries: vec![entry],
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&[T]> {
        self.groups
            .iter()
            .find(|g| g.key == key)
            .map(|g| g.entries.as_slice())
    }

    /// Group keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[T])> {
        self.groups
            .iter()
            .map(|g| (g.key.as_str(), g.entries.as_slice()))
    }

    /// Number of groups (not entries).
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total entries across all groups.
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // Catalog tests
    // =============================================

    #[test]
    fn test_push_groups_by_key() {
        let mut catalog = HatchCatalog::new();
        catalog.push(
            "Caddisflies",
            HatchEntry {
                pattern: "Elk Hair Caddis".into(),
                hook_size: "14-18".into(),
                description: "Light tan".into(),
            },
        );
        catalog.push(
            "Caddisflies",
            HatchEntry {
                pattern: "Green Rockworm".into(),
                hook_size: "14-18".into(),
                description: "Olive".into(),
            },
        );

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.entry_count(), 2);
        assert_eq!(catalog.get("Caddisflies").map(|e| e.len()), Some(2));
    }

    #[test]
    fn test_keys_preserve_insertion_order() {
        let mut catalog = Catalog::new();
        catalog.push("B", 1);
        catalog.push("A", 2);
        catalog.push("B", 3);

        let keys: Vec<&str> = catalog.keys().collect();
        assert_eq!(keys, vec!["B", "A"]);
        assert_eq!(catalog.get("B"), Some(&[1, 3][..]));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = MaterialCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert_eq!(catalog.entry_count(), 0);
        assert!(catalog.get("anything").is_none());
    }

    // =============================================
    // Serde tests
    // =============================================

    #[test]
    fn test_hatch_entry_camel_case() {
        let entry = HatchEntry {
            pattern: "Zebra Midge".into(),
            hook_size: "20-24".into(),
            description: "Black body".into(),
        };
        let json = serde_json::to_string(&entry).expect("serialize failed");
        assert!(json.contains("\"hookSize\":\"20-24\""));
    }

    #[test]
    fn test_catalog_round_trips_through_json() {
        let mut catalog = HatchCatalog::new();
        catalog.push(
            "Midges",
            HatchEntry {
                pattern: "Griffith's Gnat".into(),
                hook_size: "20-24".into(),
                description: "Black body with grizzly hackle".into(),
            },
        );

        let json = serde_json::to_string(&catalog).expect("serialize failed");
        let back: HatchCatalog = serde_json::from_str(&json).expect("deserialize failed");
        assert_eq!(back, catalog);
    }

    #[test]
    fn test_material_entry_defaults() {
        let entry: MaterialEntry = serde_json::from_str("{}").expect("deserialize failed");
        assert!(entry.components.is_empty());
        assert_eq!(entry.description, "");
    }
}
