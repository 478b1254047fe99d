//! Trip store and CSV export tests

use match_the_hatch::export::export_shopping_list;
use match_the_hatch::store::{trip_key, Trip, TripStore};
use match_the_hatch_common::{HatchCatalog, HatchEntry, MaterialCatalog, MaterialEntry};
use tempfile::tempdir;

fn sample_trip() -> Trip {
    let mut hatches = HatchCatalog::new();
    hatches.push(
        "Caddisflies",
        HatchEntry {
            pattern: "Elk Hair Caddis".into(),
            hook_size: "14-18".into(),
            description: "Light tan or brown body".into(),
        },
    );
    Trip::new("Wyoming", "Green River", "Cutthroat Trout", "Early July", hatches)
}

#[test]
fn trip_key_concatenates_the_four_parameters() {
    assert_eq!(
        trip_key("Wyoming", "Green River", "Cutthroat Trout", "Early July"),
        "Wyoming-Green River-Cutthroat Trout-Early July"
    );
    assert_eq!(sample_trip().key(), "Wyoming-Green River-Cutthroat Trout-Early July");
}

#[test]
fn loading_a_missing_file_gives_an_empty_store() {
    let dir = tempdir().expect("failed to create temp dir");
    let store = TripStore::load(&dir.path().join("trips.json")).expect("load failed");
    assert!(store.is_empty());
}

#[test]
fn store_round_trips_through_disk() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("trips.json");

    let mut store = TripStore::load(&path).expect("load failed");
    store.upsert(sample_trip());
    store.save().expect("save failed");

    let reloaded = TripStore::load(&path).expect("reload failed");
    assert_eq!(reloaded.len(), 1);

    let trip = reloaded
        .get("Wyoming-Green River-Cutthroat Trout-Early July")
        .expect("trip missing after reload");
    assert_eq!(trip.target_species, "Cutthroat Trout");
    assert_eq!(trip.hatches.entry_count(), 1);
    assert!(trip.materials.is_empty());
}

#[test]
fn upsert_replaces_a_trip_with_the_same_key() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut store = TripStore::load(&dir.path().join("trips.json")).expect("load failed");

    store.upsert(sample_trip());

    let mut updated = sample_trip();
    let mut materials = MaterialCatalog::new();
    materials.push(
        "Elk Hair Caddis",
        MaterialEntry {
            components: vec!["Hook".into()],
            description: "Size 12-16 dry fly hook".into(),
        },
    );
    updated.materials = materials;
    store.upsert(updated);

    assert_eq!(store.len(), 1);
    let trip = store
        .get("Wyoming-Green River-Cutthroat Trout-Early July")
        .unwrap();
    assert_eq!(trip.materials.entry_count(), 1);
}

#[test]
fn shopping_list_export_writes_one_row_per_material() {
    let dir = tempdir().expect("failed to create temp dir");
    let output = dir.path().join("materials_shopping_list.csv");

    let mut trip = sample_trip();
    let mut materials = MaterialCatalog::new();
    materials.push(
        "Elk Hair Caddis",
        MaterialEntry {
            components: vec!["Hook".into()],
            description: "Size 12-16 dry fly hook".into(),
        },
    );
    materials.push(
        "Elk Hair Caddis",
        MaterialEntry {
            components: vec!["Thread".into()],
            description: "Pink or red 6/0, or 8/0 thread".into(),
        },
    );
    trip.materials = materials;

    export_shopping_list(&trip, &output).expect("export failed");

    let content = std::fs::read_to_string(&output).expect("read failed");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Pattern,Type,Material");
    assert_eq!(lines[1], "Elk Hair Caddis,Hook,Size 12-16 dry fly hook");
    // A description containing a comma gets quoted, not split.
    assert_eq!(
        lines[2],
        "Elk Hair Caddis,Thread,\"Pink or red 6/0, or 8/0 thread\""
    );
    assert_eq!(lines.len(), 3);
}

#[test]
fn export_of_a_trip_without_materials_writes_only_the_header() {
    let dir = tempdir().expect("failed to create temp dir");
    let output = dir.path().join("empty.csv");

    export_shopping_list(&sample_trip(), &output).expect("export failed");

    let content = std::fs::read_to_string(&output).expect("read failed");
    assert_eq!(content.trim_end(), "Pattern,Type,Material");
}
