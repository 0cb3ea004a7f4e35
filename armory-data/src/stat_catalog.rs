use enum_map::{Enum, EnumMap};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Enum, Serialize, Deserialize)]
pub enum StatKey {
    HitRating,
    HasteRating,
    SpellPenetration,
    Resilience,
    ArmorPenetrationRating,
    SpellCritical,
}

#[derive(Clone, Debug)]
pub struct StatCatalogEntry {
    pub stat_type: u32,
    pub key: StatKey,

    // None for stats reported as a flat magnitude rather than a percentage
    pub rating_per_percent: Option<f64>,
}

pub struct StatCatalog {
    entries: Vec<StatCatalogEntry>,
    stat_types: HashMap<u32, usize>,
    rating_per_percent: EnumMap<StatKey, Option<f64>>,
}

impl StatCatalog {
    pub fn new(entries: Vec<StatCatalogEntry>) -> Self {
        let mut stat_types = HashMap::new();
        let mut rating_per_percent: EnumMap<StatKey, Option<f64>> = Default::default();

        for (index, entry) in entries.iter().enumerate() {
            stat_types.insert(entry.stat_type, index);
            rating_per_percent[entry.key] = entry.rating_per_percent;
        }

        Self {
            entries,
            stat_types,
            rating_per_percent,
        }
    }

    pub fn get_by_stat_type(&self, stat_type: u32) -> Option<&StatCatalogEntry> {
        self.stat_types
            .get(&stat_type)
            .and_then(|index| self.entries.get(*index))
    }

    pub fn decode_stat_type(&self, stat_type: u32) -> Option<StatKey> {
        self.get_by_stat_type(stat_type).map(|entry| entry.key)
    }

    pub fn rating_per_percent(&self, key: StatKey) -> Option<f64> {
        self.rating_per_percent[key]
    }

    pub fn entries(&self) -> &[StatCatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
