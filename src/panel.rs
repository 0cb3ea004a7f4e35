use enum_map::EnumMap;

use armory_data::{StatCatalog, StatKey};
use armory_stats::StatRecord;

// Row order of the rendered panel
const PANEL_ROWS: [StatKey; 6] = [
    StatKey::HitRating,
    StatKey::HasteRating,
    StatKey::SpellPenetration,
    StatKey::Resilience,
    StatKey::ArmorPenetrationRating,
    StatKey::SpellCritical,
];

// Display metadata lives here, not in the stat catalog, which only
// carries conversion constants
fn display_name(key: StatKey) -> &'static str {
    match key {
        StatKey::HitRating => "Меткость",
        StatKey::HasteRating => "Скорость",
        StatKey::SpellPenetration => "Пробивание закл.",
        StatKey::Resilience => "Устойчивость",
        StatKey::ArmorPenetrationRating => "Пробивание брони",
        StatKey::SpellCritical => "Крит. удар закл.",
    }
}

/// Render the fixed-layout totals panel. Every row always renders, zeros
/// included; flat stats show "35 (-35)" instead of a percentage.
pub fn render_totals(
    stat_catalog: &StatCatalog,
    totals: &StatRecord,
    percentages: &EnumMap<StatKey, f64>,
) -> String {
    let mut output = String::from("Дополнительные характеристики\n");

    for key in PANEL_ROWS {
        let total = totals.get(key);
        let row = if stat_catalog.rating_per_percent(key).is_some() {
            format!("{}: {} ({:.2}%)\n", display_name(key), total, percentages[key])
        } else {
            format!("{}: {} (-{})\n", display_name(key), total, total)
        };
        output.push_str(&row);
    }

    output
}
