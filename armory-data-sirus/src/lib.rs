mod phrase_table;
mod stat_catalog;
mod stat_types;

pub use phrase_table::get_phrase_table;
pub use stat_catalog::{
    get_stat_catalog, ARMOR_PENETRATION_RATING_PER_PERCENT, HASTE_RATING_PER_PERCENT,
    HIT_RATING_PER_PERCENT, RESILIENCE_RATING_PER_PERCENT, SPELL_CRIT_RATING_PER_PERCENT,
};
pub use stat_types::SirusStatType;
