use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use armory_data::StatKey;

/// Item stat column ids used by the Sirus armory tooltips. Only the
/// stats missing from the armory page itself are listed.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, FromPrimitive)]
pub enum SirusStatType {
    HitRating = 31,
    CritRating = 32,
    Resilience = 35,
    HasteRating = 36,
    SpellPenetration = 37,
    ArmorPenetrationRating = 44,
}

impl SirusStatType {
    pub fn from_code(code: u32) -> Option<Self> {
        FromPrimitive::from_u32(code)
    }

    pub fn stat_key(self) -> StatKey {
        match self {
            SirusStatType::HitRating => StatKey::HitRating,
            SirusStatType::CritRating => StatKey::SpellCritical,
            SirusStatType::Resilience => StatKey::Resilience,
            SirusStatType::HasteRating => StatKey::HasteRating,
            SirusStatType::SpellPenetration => StatKey::SpellPenetration,
            SirusStatType::ArmorPenetrationRating => StatKey::ArmorPenetrationRating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(SirusStatType::from_code(31), Some(SirusStatType::HitRating));
        assert_eq!(
            SirusStatType::from_code(36),
            Some(SirusStatType::HasteRating)
        );
        assert_eq!(
            SirusStatType::from_code(44),
            Some(SirusStatType::ArmorPenetrationRating)
        );
        assert_eq!(SirusStatType::from_code(0), None);
        assert_eq!(SirusStatType::from_code(33), None);
    }

    #[test]
    fn test_stat_key() {
        assert_eq!(SirusStatType::HitRating.stat_key(), StatKey::HitRating);
        assert_eq!(SirusStatType::CritRating.stat_key(), StatKey::SpellCritical);
        assert_eq!(
            SirusStatType::SpellPenetration.stat_key(),
            StatKey::SpellPenetration
        );
    }
}
