use clap::Parser;
use dialoguer::{Input, Password};
use indicatif::ProgressBar;
use match_the_hatch::{cli, client, config, error, export, pipeline, store};

use cli::{Cli, Commands};
use client::CompletionClient;
use config::Config;
use error::{HatchError, Result};
use rand::Rng;
use store::{Trip, TripStore};

const LOADING_MESSAGES: &[&str] = &[
    "Checking under rocks...",
    "Asking the local guides...",
    "Consulting the fishing gods...",
];

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load()?;

    match cli.command {
        Commands::Plan {
            location,
            water,
            species,
            season,
        } => {
            println!("🎣 match-the-hatch - trip planner\n");

            let location = prompt_if_missing(location, "Location")?;
            let water = prompt_if_missing(water, "Body of water")?;
            let species = prompt_if_missing(species, "Target species")?;
            let season = prompt_if_missing(season, "Season")?;

            let key = store::trip_key(&location, &water, &species, &season);
            let mut trips = TripStore::load_default()?;

            // An already-planned trip is reused, not regenerated.
            if let Some(trip) = trips.get(&key) {
                println!("Found saved trip: {key}\n");
                print_hatches(trip);
                return Ok(());
            }

            let api_key = resolve_api_key(&mut config)?;
            let client = CompletionClient::new(&api_key, &config, cli.verbose)?;

            let spinner = start_spinner();
            let hatches =
                pipeline::generate_hatch_catalog(&client, &location, &water, &species, &season, cli.verbose)
                    .await;
            spinner.finish_and_clear();
            println!("✔ Done!\n");

            let trip = Trip::new(&location, &water, &species, &season, hatches);
            print_hatches(&trip);
            if trip.hatches.is_empty() {
                println!("No hatches came back. Try again, or adjust the trip details.");
            } else {
                println!("\nNext: match-the-hatch materials \"{key}\"");
            }

            trips.upsert(trip);
            trips.save()?;
        }

        Commands::Materials { trip } => {
            println!("🪶 match-the-hatch - tying materials\n");

            let mut trips = TripStore::load_default()?;
            let found = trips
                .get(&trip)
                .ok_or_else(|| HatchError::TripNotFound(trip.clone()))?;

            if !found.materials.is_empty() {
                print_materials(found);
                return Ok(());
            }
            let hatches = found.hatches.clone();

            let api_key = resolve_api_key(&mut config)?;
            let client = CompletionClient::new(&api_key, &config, cli.verbose)?;

            let spinner = start_spinner();
            let materials =
                pipeline::generate_materials_catalog(&client, &hatches, cli.verbose).await;
            spinner.finish_and_clear();
            println!("✔ Done!\n");

            if let Some(saved) = trips.get_mut(&trip) {
                saved.materials = materials;
            }
            trips.save()?;

            if let Some(saved) = trips.get(&trip) {
                print_materials(saved);
                if saved.materials.is_empty() {
                    println!("No materials came back. Try again later.");
                } else {
                    println!("\nExport with: match-the-hatch export \"{trip}\"");
                }
            }
        }

        Commands::Trips => {
            let trips = TripStore::load_default()?;
            if trips.is_empty() {
                println!("No saved trips yet. Start with `match-the-hatch plan`.");
                return Ok(());
            }

            let rows: Vec<Vec<String>> = trips
                .iter()
                .map(|t| {
                    vec![
                        t.key(),
                        t.location.clone(),
                        t.body_of_water.clone(),
                        t.target_species.clone(),
                        t.season.clone(),
                    ]
                })
                .collect();
            println!("Trips");
            print_table(&["Key", "Destination", "Water", "Species", "Season"], &rows);
        }

        Commands::Export { trip, output } => {
            let trips = TripStore::load_default()?;
            let found = trips
                .get(&trip)
                .ok_or_else(|| HatchError::TripNotFound(trip.clone()))?;

            if found.materials.is_empty() {
                return Err(HatchError::NoMaterials(trip));
            }

            export::export_shopping_list(found, &output)?;
            println!("✔ Shopping list saved: {}", output.display());
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ API key saved");
            }

            if show {
                println!("Settings:");
                println!("  Fallback model: {}", config.fallback_model);
                println!("  Request timeout: {}s", config.request_timeout_secs);
                println!(
                    "  API key: {}",
                    if config.api_key.is_some() {
                        "configured"
                    } else {
                        "not configured"
                    }
                );
            }
        }
    }

    Ok(())
}

fn prompt_if_missing(value: Option<String>, label: &str) -> Result<String> {
    let value = match value {
        Some(v) => v,
        None => Input::<String>::new()
            .with_prompt(label)
            .interact_text()
            .map_err(|e| HatchError::Config(format!("input aborted: {e}")))?,
    };

    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(HatchError::Config(format!(
            "missing trip information: {label}"
        )));
    }
    Ok(value)
}

/// Env var, then config file, then an interactive prompt (saved for next time).
fn resolve_api_key(config: &mut Config) -> Result<String> {
    match config.get_api_key() {
        Ok(key) => Ok(key),
        Err(_) => {
            let key = Password::new()
                .with_prompt("Pulze API key")
                .interact()
                .map_err(|e| HatchError::Config(format!("input aborted: {e}")))?;
            let key = key.trim().to_string();
            if key.is_empty() {
                return Err(HatchError::MissingApiKey);
            }
            config.set_api_key(key.clone())?;
            Ok(key)
        }
    }
}

fn start_spinner() -> ProgressBar {
    let mut rng = rand::rng();
    let message = LOADING_MESSAGES[rng.random_range(0..LOADING_MESSAGES.len())];

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(120));
    spinner
}

fn print_hatches(trip: &Trip) {
    println!(
        "Recommended flies for your trip to {} in {}",
        trip.body_of_water, trip.location
    );

    let rows: Vec<Vec<String>> = trip
        .hatches
        .iter()
        .flat_map(|(insect, flies)| {
            flies.iter().map(move |fly| {
                vec![
                    insect.to_string(),
                    fly.pattern.clone(),
                    fly.hook_size.clone(),
                    fly.description.clone(),
                ]
            })
        })
        .collect();
    print_table(&["Insect", "Pattern", "Hook Size", "Description"], &rows);
}

fn print_materials(trip: &Trip) {
    println!(
        "Tying materials for your {} patterns",
        trip.body_of_water
    );

    let rows: Vec<Vec<String>> = trip
        .materials
        .iter()
        .flat_map(|(pattern, materials)| {
            materials.iter().map(move |material| {
                vec![
                    pattern.to_string(),
                    material.components.join(", "),
                    material.description.clone(),
                ]
            })
        })
        .collect();
    print_table(&["Pattern", "Type", "Material"], &rows);
}

fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            if len > widths[i] {
                widths[i] = len;
            }
        }
    }

    let render = |cells: Vec<String>| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ")
    };

    println!(
        "{}",
        render(headers.iter().map(|h| h.to_string()).collect())
    );
    println!(
        "{}",
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  ")
    );
    for row in rows {
        println!("{}", render(row.clone()));
    }
}
