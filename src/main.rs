use std::collections::HashSet;
use std::sync::Arc;

use clap::{Arg, Command};
use log::{error, info, warn};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use armory_data::StatCatalog;
use armory_data_sirus::{get_phrase_table, get_stat_catalog};
use armory_stats::{reduce, StatAggregator, StatRecord};

mod api;
mod panel;

use api::{ArmoryClient, ArmoryError};

#[tokio::main]
async fn main() {
    let command = Command::new("sirus-armory")
        .about("Extended character stats for the Sirus armory")
        .arg(
            Arg::new("character")
                .help("Character name")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::new("realm")
                .long("realm")
                .help("Numeric realm id used in armory API paths")
                .takes_value(true)
                .default_value("42"),
        )
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .help("Armory API base URL")
                .takes_value(true)
                .default_value("https://sirus.su"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log debug detail"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only log warnings"),
        );
    let matches = command.get_matches();

    let log_level = if matches.is_present("verbose") {
        LevelFilter::Debug
    } else if matches.is_present("quiet") {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();

    let character_name = matches
        .get_one::<String>("character")
        .map(|s| s.as_str())
        .unwrap();
    let api_url = matches
        .get_one::<String>("api-url")
        .map(|s| s.as_str())
        .unwrap();
    let realm_id = match matches
        .get_one::<String>("realm")
        .map(|s| s.as_str())
        .unwrap()
        .parse::<u32>()
    {
        Ok(realm_id) => realm_id,
        Err(..) => {
            error!("Invalid realm id");
            std::process::exit(1);
        }
    };

    let stat_catalog = Arc::new(get_stat_catalog());
    let phrase_table = Arc::new(get_phrase_table());
    let aggregator = StatAggregator::new(stat_catalog.clone(), phrase_table);
    let client = ArmoryClient::new(api_url, realm_id);

    if let Err(error) = run(&client, &aggregator, &stat_catalog, character_name).await {
        error!("{:#}", error);
        std::process::exit(1);
    }
}

async fn run(
    client: &ArmoryClient,
    aggregator: &StatAggregator,
    stat_catalog: &StatCatalog,
    character_name: &str,
) -> Result<(), anyhow::Error> {
    let character = client.fetch_character(character_name).await?;
    info!(
        "Found character {} (level {}, guid {})",
        character.name.as_deref().unwrap_or(character_name),
        character.level.unwrap_or(0),
        character.guid
    );

    if character.equipment.is_empty() {
        return Err(ArmoryError::EmptyEquipment(character_name.to_string()).into());
    }

    let mut per_item_records: Vec<StatRecord> = Vec::new();
    let mut set_bonus: Option<StatRecord> = None;
    let mut resolved_sets: HashSet<String> = HashSet::new();

    for item in character.equipment.iter().filter(|item| item.entry != 0) {
        let tooltip = match client.fetch_item_tooltip(item.entry, character.guid).await {
            Ok(tooltip) => tooltip,
            Err(error) => {
                warn!("Failed to process item {}: {:#}", item.entry, error);
                continue;
            }
        };

        per_item_records.push(aggregator.accumulate_tooltip(&tooltip));

        // Set bonuses are character-wide; resolve each set from the first
        // piece seen and ignore the copies on its other pieces
        if let Some(item_payload) = tooltip.item.as_ref() {
            if let Some(itemset) = item_payload.itemset.as_ref() {
                if should_resolve_set(&mut resolved_sets, itemset.name.as_deref()) {
                    let record = aggregator.resolve_set_bonuses(item_payload);
                    set_bonus = Some(match set_bonus.take() {
                        Some(total) => total + &record,
                        None => record,
                    });
                }
            }
        }
    }

    info!("Processed {} equipped items", per_item_records.len());

    let totals = reduce(&per_item_records, set_bonus.as_ref());
    let percentages = aggregator.to_percentages(&totals);
    print!("{}", panel::render_totals(stat_catalog, &totals, &percentages));

    Ok(())
}

// Sets are deduplicated by name; metadata without a name cannot be
// matched across pieces, so it resolves per item
fn should_resolve_set(resolved_sets: &mut HashSet<String>, set_name: Option<&str>) -> bool {
    match set_name {
        Some(name) => resolved_sets.insert(name.to_string()),
        None => true,
    }
}
