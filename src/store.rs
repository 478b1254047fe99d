//! Trip registry
//!
//! Explicit store for planned trips, keyed by the concatenated trip
//! parameters and persisted as JSON next to the config file. The pipeline
//! never touches this; it belongs to the hosting CLI.

use crate::error::{HatchError, Result};
use chrono::Local;
use match_the_hatch_common::{HatchCatalog, MaterialCatalog};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Unique identifier for a planned trip.
pub fn trip_key(location: &str, body_of_water: &str, target_species: &str, season: &str) -> String {
    format!("{location}-{body_of_water}-{target_species}-{season}")
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Trip {
    pub location: String,
    pub body_of_water: String,
    pub target_species: String,
    pub season: String,
    pub saved_at: String,
    pub hatches: HatchCatalog,
    pub materials: MaterialCatalog,
}

impl Trip {
    pub fn new(
        location: &str,
        body_of_water: &str,
        target_species: &str,
        season: &str,
        hatches: HatchCatalog,
    ) -> Self {
        Self {
            location: location.to_string(),
            body_of_water: body_of_water.to_string(),
            target_species: target_species.to_string(),
            season: season.to_string(),
            saved_at: Local::now().format("%Y-%m-%d %H:%M").to_string(),
            hatches,
            materials: MaterialCatalog::new(),
        }
    }

    pub fn key(&self) -> String {
        trip_key(
            &self.location,
            &self.body_of_water,
            &self.target_species,
            &self.season,
        )
    }
}

#[derive(Debug, Default)]
pub struct TripStore {
    trips: Vec<Trip>,
    path: PathBuf,
}

impl TripStore {
    pub fn load(path: &Path) -> Result<Self> {
        let trips = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            Vec::new()
        };
        Ok(Self {
            trips,
            path: path.to_path_buf(),
        })
    }

    pub fn load_default() -> Result<Self> {
        Self::load(&Self::default_path()?)
    }

    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| HatchError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("match-the-hatch").join("trips.json"))
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.trips)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Trip> {
        self.trips.iter().find(|t| t.key() == key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Trip> {
        self.trips.iter_mut().find(|t| t.key() == key)
    }

    /// Replace the trip with the same key, or append.
    pub fn upsert(&mut self, trip: Trip) {
        match self.get_mut(&trip.key()) {
            Some(existing) => *existing = trip,
            None => self.trips.push(trip),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trip> {
        self.trips.iter()
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}
