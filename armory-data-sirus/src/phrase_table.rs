use log::{debug, warn};

use armory_data::{PhraseEntry, PhraseTable, StatKey};

// Literal Russian client phrases as they appear in enchantment names, gem
// descriptions and bonus spell text, most specific first. An entry listed
// after one whose phrase it contains can never match.
const PHRASES: [(&str, StatKey); 11] = [
    ("к проникающей способности заклинаний", StatKey::SpellPenetration),
    (
        "к рейтингу критического удара заклинаний",
        StatKey::SpellCritical,
    ),
    ("к критическому удару заклинаний", StatKey::SpellCritical),
    ("к рейтингу пробивания брони", StatKey::ArmorPenetrationRating),
    ("к пробиванию брони", StatKey::ArmorPenetrationRating),
    ("к рейтингу устойчивости", StatKey::Resilience),
    ("к устойчивости", StatKey::Resilience),
    ("к рейтингу меткости", StatKey::HitRating),
    ("к меткости", StatKey::HitRating),
    ("к рейтингу скорости", StatKey::HasteRating),
    ("к скорости", StatKey::HasteRating),
];

pub fn get_phrase_table() -> PhraseTable {
    let table = PhraseTable::new(
        PHRASES
            .iter()
            .map(|&(phrase, key)| PhraseEntry { phrase, key })
            .collect(),
    );

    for (shadowed, blocking) in table.shadowed_entries() {
        warn!(
            "Stat phrase \"{}\" is unreachable behind \"{}\"",
            shadowed.phrase, blocking.phrase
        );
    }

    debug!("Loaded {} stat phrases", table.len());
    table
}
