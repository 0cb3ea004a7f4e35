mod phrase_table;
mod stat_catalog;

pub use phrase_table::{PhraseEntry, PhraseTable};
pub use stat_catalog::{StatCatalog, StatCatalogEntry, StatKey};
