use enum_map::EnumMap;
use serde::{Deserialize, Serialize};

use armory_data::StatKey;

/// Accumulated stat totals; every key present, zero when untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRecord {
    totals: EnumMap<StatKey, u32>,
}

impl StatRecord {
    pub fn new() -> Self {
        Self {
            totals: Default::default(),
        }
    }

    pub fn get(&self, key: StatKey) -> u32 {
        self.totals[key]
    }

    pub fn add(&mut self, key: StatKey, amount: u32) {
        self.totals[key] = self.totals[key].saturating_add(amount);
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatKey, u32)> + '_ {
        self.totals.iter().map(|(key, total)| (key, *total))
    }

    pub fn is_zero(&self) -> bool {
        self.totals.values().all(|total| *total == 0)
    }
}

// The operator traits stay out of scope in this file: with `Add` in
// scope, its one-argument by-value `add` would be picked over the
// two-argument inherent `add` on an owned record.
impl std::ops::AddAssign<&StatRecord> for StatRecord {
    fn add_assign(&mut self, rhs: &StatRecord) {
        for (key, total) in rhs.iter() {
            self.add(key, total);
        }
    }
}

impl std::ops::Add<&StatRecord> for StatRecord {
    type Output = StatRecord;

    fn add(mut self, rhs: &StatRecord) -> Self::Output {
        self += rhs;
        self
    }
}
