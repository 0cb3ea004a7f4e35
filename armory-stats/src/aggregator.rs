use std::sync::Arc;

use enum_map::EnumMap;
use log::debug;

use armory_data::{PhraseTable, StatCatalog, StatKey};

use crate::bonus_text::{parse_bonus_clauses, parse_single_clause, BonusClause};
use crate::payload::{ItemPayload, ItemTooltip};
use crate::record::StatRecord;

/// Computes stat totals from tooltip payloads with a caller-supplied
/// catalog and phrase table. Every method is total: malformed payloads
/// yield a zero record rather than an error.
pub struct StatAggregator {
    stat_catalog: Arc<StatCatalog>,
    phrase_table: Arc<PhraseTable>,
}

impl StatAggregator {
    pub fn new(stat_catalog: Arc<StatCatalog>, phrase_table: Arc<PhraseTable>) -> Self {
        Self {
            stat_catalog,
            phrase_table,
        }
    }

    pub fn accumulate_tooltip(&self, tooltip: &ItemTooltip) -> StatRecord {
        match tooltip.item.as_ref() {
            Some(item) => self.accumulate_item(item),
            None => StatRecord::new(),
        }
    }

    /// Combine one item's base stats, enchantment, gems and socket bonus
    /// into a single record. Set bonuses are handled separately.
    pub fn accumulate_item(&self, item: &ItemPayload) -> StatRecord {
        let mut record = StatRecord::new();

        if let Some(name) = item.name.as_deref() {
            debug!("Processing item {}", name);
        }

        for (stat_type, value) in item.stat_slots() {
            let Some(key) = u32::try_from(stat_type)
                .ok()
                .and_then(|stat_type| self.stat_catalog.decode_stat_type(stat_type))
            else {
                continue;
            };

            if let Ok(amount) = u32::try_from(value) {
                record.add(key, amount);
                debug!("Added {} to {:?} from base stats", amount, key);
            }
        }

        if let Some(text) = item.enchantments.as_ref().and_then(|e| e.name.as_deref()) {
            self.accumulate_bonus_text(&mut record, text, "enchant");
        }

        for socket in item.sockets.iter() {
            if let Some(text) = socket.gem.as_ref().and_then(|gem| gem.description.as_deref()) {
                self.accumulate_bonus_text(&mut record, text, "gem");
            }
        }

        // The socket bonus only counts when every socket holds a gem of
        // the required colour
        if let Some(socket_bonus) = item.socket_bonus.as_ref() {
            if socket_bonus.matched {
                if let Some(text) = socket_bonus.description.as_deref() {
                    if let Some(clause) = parse_single_clause(text) {
                        self.accumulate_clause(&mut record, clause, "socket bonus");
                    }
                }
            }
        }

        record
    }

    /// The currently active set bonuses from one item's set metadata.
    /// Call at most once per item set, on one representative piece.
    pub fn resolve_set_bonuses(&self, item: &ItemPayload) -> StatRecord {
        let mut record = StatRecord::new();

        let Some(itemset) = item.itemset.as_ref() else {
            return record;
        };

        for bonus in itemset.bonuses.iter().filter(|bonus| bonus.used) {
            if let Some(text) = bonus.description.as_deref() {
                if let Some(clause) = parse_single_clause(text) {
                    self.accumulate_clause(&mut record, clause, "set bonus");
                }
            }
        }

        record
    }

    /// Rating totals as 2-decimal display percentages; stats without a
    /// conversion constant pass their flat magnitude through unchanged.
    pub fn to_percentages(&self, totals: &StatRecord) -> EnumMap<StatKey, f64> {
        let mut percentages = EnumMap::default();

        for (key, total) in totals.iter() {
            percentages[key] = match self.stat_catalog.rating_per_percent(key) {
                Some(rating_per_percent) => round_percent(f64::from(total) / rating_per_percent),
                None => f64::from(total),
            };
        }

        percentages
    }

    fn accumulate_bonus_text(&self, record: &mut StatRecord, text: &str, source: &str) {
        for clause in parse_bonus_clauses(text) {
            self.accumulate_clause(record, clause, source);
        }
    }

    fn accumulate_clause(&self, record: &mut StatRecord, clause: BonusClause, source: &str) {
        match self.phrase_table.classify(clause.description) {
            Some(key) => {
                record.add(key, clause.amount);
                debug!("Added {} to {:?} from {}", clause.amount, key, source);
            }
            None => {
                debug!("No stat phrase matches \"{}\" from {}", clause.description, source);
            }
        }
    }
}

/// Character totals: every per-item record plus the set-bonus record.
pub fn reduce(per_item: &[StatRecord], set_bonus: Option<&StatRecord>) -> StatRecord {
    let mut totals = StatRecord::new();

    for record in per_item.iter() {
        totals += record;
    }

    if let Some(set_bonus) = set_bonus {
        totals += set_bonus;
    }

    totals
}

fn round_percent(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
