//! Legal weight limits by jurisdiction
//!
//! The built-in table holds the federal baseline and an entry for each of the
//! 50 states plus DC. It is built once on first use and never mutated; a
//! table with caller-supplied overrides is a separate value.

use std::collections::HashMap;

use lazy_static::lazy_static;
use tracing::debug;
use weighcheck_types::{AxleClass, Jurisdiction, LimitSource, UsState};

use crate::model::WeightLimit;

/// Federal baseline: 20,000 single / 34,000 tandem / 80,000 gross
pub const FEDERAL_BASELINE: WeightLimit = WeightLimit::new(20_000, 34_000, 80_000);

const STATE_LIMITS: [(UsState, WeightLimit); 51] = [
    (UsState::AL, WeightLimit::new(20_000, 40_000, 80_000)),
    (UsState::AK, WeightLimit::new(20_000, 38_000, 80_000)),
    (UsState::AZ, WeightLimit::new(20_000, 34_000, 80_000)),
    (UsState::AR, WeightLimit::new(20_000, 34_000, 80_000)),
    (UsState::CA, WeightLimit::new(20_000, 34_000, 80_000)),
    (UsState::CO, WeightLimit::new(20_000, 36_000, 85_000)),
    (UsState::CT, WeightLimit::new(22_400, 36_000, 80_000)),
    (UsState::DE, WeightLimit::new(20_000, 40_000, 80_000)),
    (UsState::DC, WeightLimit::new(21_000, 37_000, 80_000)),
    (UsState::FL, WeightLimit::new(22_000, 44_000, 80_000)),
    (UsState::GA, WeightLimit::new(20_340, 40_680, 80_000)),
    (UsState::HI, WeightLimit::new(22_500, 34_000, 80_000)),
    (UsState::ID, WeightLimit::new(20_000, 34_000, 105_500)),
    (UsState::IL, WeightLimit::new(20_000, 34_000, 80_000)),
    (UsState::IN, WeightLimit::new(20_000, 34_000, 80_000)),
    (UsState::IA, WeightLimit::new(20_000, 34_000, 80_000)),
    (UsState::KS, WeightLimit::new(20_000, 34_000, 85_500)),
    (UsState::KY, WeightLimit::new(20_000, 34_000, 80_000)),
    (UsState::LA, WeightLimit::new(20_000, 34_000, 80_000)),
    (UsState::ME, WeightLimit::new(20_000, 34_000, 100_000)),
    (UsState::MD, WeightLimit::new(20_000, 34_000, 80_000)),
    (UsState::MA, WeightLimit::new(22_400, 36_000, 80_000)),
    (UsState::MI, WeightLimit::new(18_000, 32_000, 164_000)),
    (UsState::MN, WeightLimit::new(20_000, 34_000, 80_000)),
    (UsState::MS, WeightLimit::new(20_000, 34_000, 80_000)),
    (UsState::MO, WeightLimit::new(20_000, 34_000, 80_000)),
    (UsState::MT, WeightLimit::new(20_000, 34_000, 131_060)),
    (UsState::NE, WeightLimit::new(20_000, 34_000, 95_000)),
    (UsState::NV, WeightLimit::new(20_000, 34_000, 129_000)),
    (UsState::NH, WeightLimit::new(22_400, 36_000, 80_000)),
    (UsState::NJ, WeightLimit::new(22_400, 34_000, 80_000)),
    (UsState::NM, WeightLimit::new(21_600, 34_200, 86_400)),
    (UsState::NY, WeightLimit::new(22_400, 36_000, 80_000)),
    (UsState::NC, WeightLimit::new(20_000, 38_000, 80_000)),
    (UsState::ND, WeightLimit::new(20_000, 34_000, 105_500)),
    (UsState::OH, WeightLimit::new(20_000, 34_000, 80_000)),
    (UsState::OK, WeightLimit::new(20_000, 34_000, 90_000)),
    (UsState::OR, WeightLimit::new(20_000, 34_000, 105_500)),
    (UsState::PA, WeightLimit::new(20_000, 34_000, 80_000)),
    (UsState::RI, WeightLimit::new(22_400, 36_000, 80_000)),
    (UsState::SC, WeightLimit::new(20_000, 35_200, 80_000)),
    (UsState::SD, WeightLimit::new(20_000, 34_000, 129_000)),
    (UsState::TN, WeightLimit::new(20_000, 34_000, 80_000)),
    (UsState::TX, WeightLimit::new(20_000, 34_000, 80_000)),
    (UsState::UT, WeightLimit::new(20_000, 34_000, 129_000)),
    (UsState::VT, WeightLimit::new(20_000, 34_000, 80_000)),
    (UsState::VA, WeightLimit::new(20_000, 34_000, 80_000)),
    (UsState::WA, WeightLimit::new(20_000, 34_000, 105_500)),
    (UsState::WV, WeightLimit::new(20_000, 34_000, 80_000)),
    (UsState::WI, WeightLimit::new(20_000, 34_000, 80_000)),
    (UsState::WY, WeightLimit::new(20_000, 36_000, 117_000)),
];

lazy_static! {
    static ref BUILTIN: LimitTable = LimitTable::from_entries(STATE_LIMITS);
}

/// Immutable mapping from jurisdiction to weight ceilings
#[derive(Debug, Clone, PartialEq)]
pub struct LimitTable {
    federal: WeightLimit,
    states: HashMap<UsState, WeightLimit>,
}

impl LimitTable {
    /// The process-wide built-in table
    pub fn builtin() -> &'static LimitTable {
        &BUILTIN
    }

    /// A table with no state entries; every lookup yields the baseline
    pub fn federal_only() -> Self {
        Self {
            federal: FEDERAL_BASELINE,
            states: HashMap::new(),
        }
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (UsState, WeightLimit)>) -> Self {
        Self {
            federal: FEDERAL_BASELINE,
            states: entries.into_iter().collect(),
        }
    }

    /// Copy of this table with some state entries replaced or added
    pub fn with_overrides(&self, overrides: impl IntoIterator<Item = (UsState, WeightLimit)>) -> Self {
        let mut states = self.states.clone();
        for (state, limit) in overrides {
            debug!(state = %state, ?limit, "overriding state weight limits");
            states.insert(state, limit);
        }
        Self {
            federal: self.federal,
            states,
        }
    }

    pub fn federal(&self) -> WeightLimit {
        self.federal
    }

    pub fn state_limit(&self, state: UsState) -> Option<WeightLimit> {
        self.states.get(&state).copied()
    }

    /// Ceilings for a jurisdiction and whether they came from a state entry.
    /// Missing entries resolve to the federal baseline.
    pub fn resolve(&self, jurisdiction: Jurisdiction) -> (WeightLimit, LimitSource) {
        match jurisdiction.state().and_then(|s| self.state_limit(s)) {
            Some(limit) => (limit, LimitSource::State),
            None => {
                debug!(jurisdiction = %jurisdiction, "using federal baseline limits");
                (self.federal, LimitSource::Federal)
            }
        }
    }

    /// Applicable ceiling in pounds; never fails
    pub fn limit_for(&self, jurisdiction: Jurisdiction, axle_class: AxleClass) -> u32 {
        self.resolve(jurisdiction).0.ceiling(axle_class)
    }

    /// Federal baseline first, then states in table order
    pub fn entries(&self) -> Vec<(Jurisdiction, WeightLimit)> {
        let mut states: Vec<_> = self.states.iter().map(|(s, l)| (*s, *l)).collect();
        states.sort_by_key(|(s, _)| *s);

        let mut entries = Vec::with_capacity(states.len() + 1);
        entries.push((Jurisdiction::Federal, self.federal));
        entries.extend(states.into_iter().map(|(s, l)| (Jurisdiction::State(s), l)));
        entries
    }
}

impl Default for LimitTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

/// Look up a ceiling in the built-in table by jurisdiction code
pub fn limit_for(jurisdiction_code: &str, axle_class: AxleClass) -> u32 {
    LimitTable::builtin().limit_for(Jurisdiction::from_code(jurisdiction_code), axle_class)
}
