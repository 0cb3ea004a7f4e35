use std::collections::HashMap;

use arrayvec::ArrayVec;
use serde::Deserialize;
use serde_json::Value;

pub const MAX_ITEM_STAT_SLOTS: usize = 10;

/// Response body of the armory item tooltip endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ItemTooltip {
    pub item: Option<ItemPayload>,
}

/// One equipped item as described by the armory tooltip API.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ItemPayload {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub enchantments: Option<Enchantment>,

    #[serde(default)]
    pub sockets: Vec<Socket>,

    #[serde(default)]
    pub socket_bonus: Option<SocketBonus>,

    #[serde(default)]
    pub itemset: Option<ItemSet>,

    // The numbered stat columns (stat_type1.., stat_value1..) plus any
    // field we do not model; values arrive as numbers or numeric strings
    #[serde(flatten)]
    pub columns: HashMap<String, Value>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Enchantment {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Socket {
    #[serde(default)]
    pub gem: Option<Gem>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Gem {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SocketBonus {
    #[serde(default)]
    pub description: Option<String>,

    // True when every socket holds a gem of the required colour
    #[serde(default)]
    pub matched: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ItemSet {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub bonuses: Vec<ItemSetBonus>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ItemSetBonus {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub threshold: Option<u32>,

    // True when enough pieces are equipped and the bonus is in effect
    #[serde(default)]
    pub used: bool,
}

impl ItemPayload {
    /// The populated (stat_type, stat_value) column pairs. Missing or
    /// zero stat types are skipped; unparsable values read as 0.
    pub fn stat_slots(&self) -> ArrayVec<(i64, i64), MAX_ITEM_STAT_SLOTS> {
        let mut slots = ArrayVec::new();

        for index in 1..=MAX_ITEM_STAT_SLOTS {
            let Some(stat_type) = self.column_integer(&format!("stat_type{}", index)) else {
                continue;
            };
            if stat_type == 0 {
                continue;
            }

            let value = self
                .column_integer(&format!("stat_value{}", index))
                .unwrap_or(0);
            slots.push((stat_type, value));
        }

        slots
    }

    fn column_integer(&self, name: &str) -> Option<i64> {
        match self.columns.get(name)? {
            Value::Number(number) => number
                .as_i64()
                .or_else(|| number.as_f64().map(|value| value as i64)),
            Value::String(text) => text.trim().parse::<i64>().ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_tooltip(json: &str) -> ItemTooltip {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_stat_slots_from_numbers_and_strings() {
        let tooltip = parse_tooltip(
            r#"{
                "item": {
                    "name": "Капюшон непреклонного защитника",
                    "quality": 4,
                    "stat_type1": 31,
                    "stat_value1": 50,
                    "stat_type2": "35",
                    "stat_value2": "61",
                    "stat_type10": 36,
                    "stat_value10": 25
                }
            }"#,
        );

        let item = tooltip.item.unwrap();
        let slots = item.stat_slots();
        assert_eq!(slots.as_slice(), &[(31, 50), (35, 61), (36, 25)]);
    }

    #[test]
    fn test_stat_slots_skips_zero_and_unparsable() {
        let tooltip = parse_tooltip(
            r#"{
                "item": {
                    "stat_type1": 0,
                    "stat_value1": 10,
                    "stat_type2": 31,
                    "stat_value2": "many",
                    "stat_type3": "bad",
                    "stat_value3": 5
                }
            }"#,
        );

        let item = tooltip.item.unwrap();
        let slots = item.stat_slots();
        assert_eq!(slots.as_slice(), &[(31, 0)]);
    }

    #[test]
    fn test_optional_sections() {
        let tooltip = parse_tooltip(
            r#"{
                "item": {
                    "enchantments": { "name": "+26 к проникающей способности заклинаний" },
                    "sockets": [
                        { "gem": { "name": "Руна", "description": "+20 к устойчивости" } },
                        { "gem": null },
                        {}
                    ],
                    "socket_bonus": { "description": "+9 к рейтингу устойчивости", "matched": true },
                    "itemset": {
                        "name": "Регалии непреклонного защитника",
                        "bonuses": [
                            { "description": "+50 к устойчивости", "threshold": 2, "used": true },
                            { "description": "+100 к меткости", "threshold": 4, "used": false }
                        ]
                    }
                }
            }"#,
        );

        let item = tooltip.item.unwrap();
        assert_eq!(
            item.enchantments.unwrap().name.as_deref(),
            Some("+26 к проникающей способности заклинаний")
        );
        assert_eq!(item.sockets.len(), 3);
        assert!(item.sockets[0].gem.is_some());
        assert!(item.sockets[1].gem.is_none());
        assert!(item.sockets[2].gem.is_none());

        let socket_bonus = item.socket_bonus.unwrap();
        assert!(socket_bonus.matched);

        let itemset = item.itemset.unwrap();
        assert_eq!(itemset.bonuses.len(), 2);
        assert!(itemset.bonuses[0].used);
        assert!(!itemset.bonuses[1].used);
    }

    #[test]
    fn test_empty_responses() {
        let tooltip = parse_tooltip(r#"{}"#);
        assert!(tooltip.item.is_none());

        let tooltip = parse_tooltip(r#"{ "item": {} }"#);
        let item = tooltip.item.unwrap();
        assert!(item.stat_slots().is_empty());
        assert!(item.enchantments.is_none());
        assert!(item.sockets.is_empty());
        assert!(item.socket_bonus.is_none());
        assert!(item.itemset.is_none());
    }
}
