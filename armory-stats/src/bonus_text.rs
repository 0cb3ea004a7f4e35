use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Leading "+N <description>" of one bonus segment; the description
    // runs to the end of the first line
    static ref BONUS_CLAUSE: Regex = Regex::new(r"^\s*\+(\d+)\s+(.+)").unwrap();
}

// Conjunction between the halves of dual-stat bonus text ("и" is Cyrillic)
const DUAL_STAT_CONJUNCTION: &str = " и ";

/// One "+N <description>" clause extracted from bonus text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BonusClause<'a> {
    pub amount: u32,
    pub description: &'a str,
}

/// Extract every clause from enchantment or gem text, splitting
/// dual-stat text on its conjunction.
pub fn parse_bonus_clauses(text: &str) -> Vec<BonusClause<'_>> {
    text.split(DUAL_STAT_CONJUNCTION)
        .filter_map(parse_single_clause)
        .collect()
}

/// Extract one clause without conjunction splitting (socket bonuses,
/// set bonuses).
pub fn parse_single_clause(text: &str) -> Option<BonusClause<'_>> {
    let captures = BONUS_CLAUSE.captures(text)?;
    let amount = captures.get(1)?.as_str().parse::<u32>().ok()?;
    let description = captures.get(2)?.as_str();

    Some(BonusClause { amount, description })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_clause() {
        assert_eq!(
            parse_single_clause("+26 к проникающей способности заклинаний"),
            Some(BonusClause {
                amount: 26,
                description: "к проникающей способности заклинаний",
            })
        );
    }

    #[test]
    fn test_parse_single_clause_rejects_garbage() {
        assert_eq!(parse_single_clause(""), None);
        assert_eq!(parse_single_clause("Малый значок доблести"), None);
        assert_eq!(parse_single_clause("+15"), None);
        assert_eq!(parse_single_clause("15 к меткости"), None);
        assert_eq!(parse_single_clause("+ к меткости"), None);
    }

    #[test]
    fn test_parse_single_clause_ignores_conjunction() {
        // Socket and set bonus text is never dual-stat
        assert_eq!(
            parse_single_clause("+10 к меткости и к скорости"),
            Some(BonusClause {
                amount: 10,
                description: "к меткости и к скорости",
            })
        );
    }

    #[test]
    fn test_parse_clause_keeps_first_line() {
        assert_eq!(
            parse_single_clause("+50 к устойчивости\n"),
            Some(BonusClause {
                amount: 50,
                description: "к устойчивости",
            })
        );

        // Tooltip text can carry trailing lines; the clause is the first
        assert_eq!(
            parse_single_clause("+50 к устойчивости\nТребуется уровень: 80"),
            Some(BonusClause {
                amount: 50,
                description: "к устойчивости",
            })
        );
    }

    #[test]
    fn test_parse_dual_stat_text() {
        let clauses = parse_bonus_clauses("+15 к меткости и +10 к скорости");
        assert_eq!(
            clauses,
            vec![
                BonusClause {
                    amount: 15,
                    description: "к меткости",
                },
                BonusClause {
                    amount: 10,
                    description: "к скорости",
                },
            ]
        );
    }

    #[test]
    fn test_parse_single_stat_text() {
        let clauses = parse_bonus_clauses("+20 к рейтингу устойчивости");
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].amount, 20);
        assert_eq!(clauses[0].description, "к рейтингу устойчивости");
    }

    #[test]
    fn test_parse_drops_segments_without_amount() {
        // Only the segment with a leading "+N" survives
        let clauses = parse_bonus_clauses("+10 к силе и ловкости");
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].description, "к силе");

        assert!(parse_bonus_clauses("Вечная мерзлота").is_empty());
        assert!(parse_bonus_clauses("").is_empty());
    }

    #[test]
    fn test_parse_amount_overflow_dropped() {
        assert!(parse_bonus_clauses("+99999999999 к меткости").is_empty());
    }
}
