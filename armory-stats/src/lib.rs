mod aggregator;
mod bonus_text;
mod payload;
mod record;

pub use aggregator::{reduce, StatAggregator};
pub use bonus_text::{parse_bonus_clauses, parse_single_clause, BonusClause};
pub use payload::{
    Enchantment, Gem, ItemPayload, ItemSet, ItemSetBonus, ItemTooltip, Socket, SocketBonus,
    MAX_ITEM_STAT_SLOTS,
};
pub use record::StatRecord;
