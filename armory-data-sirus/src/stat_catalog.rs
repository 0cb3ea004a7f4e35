use log::debug;

use armory_data::{StatCatalog, StatCatalogEntry};

use crate::stat_types::SirusStatType;

// Conversion rates at level 80
pub const HIT_RATING_PER_PERCENT: f64 = 26.23;
pub const SPELL_CRIT_RATING_PER_PERCENT: f64 = 45.91;
pub const RESILIENCE_RATING_PER_PERCENT: f64 = 81.97497559;
pub const HASTE_RATING_PER_PERCENT: f64 = 32.79;
pub const ARMOR_PENETRATION_RATING_PER_PERCENT: f64 = 13.99;

// Stat columns tracked by the extended panel, in display order
const TRACKED_STAT_CODES: [u32; 6] = [31, 36, 37, 35, 44, 32];

fn rating_per_percent(stat_type: SirusStatType) -> Option<f64> {
    match stat_type {
        SirusStatType::HitRating => Some(HIT_RATING_PER_PERCENT),
        SirusStatType::CritRating => Some(SPELL_CRIT_RATING_PER_PERCENT),
        SirusStatType::Resilience => Some(RESILIENCE_RATING_PER_PERCENT),
        SirusStatType::HasteRating => Some(HASTE_RATING_PER_PERCENT),

        // Reported by the game as a flat value, not a percentage
        SirusStatType::SpellPenetration => None,
        SirusStatType::ArmorPenetrationRating => Some(ARMOR_PENETRATION_RATING_PER_PERCENT),
    }
}

pub fn get_stat_catalog() -> StatCatalog {
    let mut entries = Vec::with_capacity(TRACKED_STAT_CODES.len());

    for &stat_type_code in TRACKED_STAT_CODES.iter() {
        let Some(stat_type) = SirusStatType::from_code(stat_type_code) else {
            continue;
        };

        entries.push(StatCatalogEntry {
            stat_type: stat_type_code,
            key: stat_type.stat_key(),
            rating_per_percent: rating_per_percent(stat_type),
        });
    }

    let catalog = StatCatalog::new(entries);
    debug!("Loaded {} stat catalog entries", catalog.len());
    catalog
}
