//! Jurisdiction codes for weight-limit lookup
//!
//! A jurisdiction is either the federal baseline or one of the 50 states plus
//! the District of Columbia. Parsing never fails: anything that is not a known
//! state code or name resolves to [`Jurisdiction::Federal`].

use serde::{Deserialize, Serialize};

/// US state (and DC) codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UsState {
    AL,
    AK,
    AZ,
    AR,
    CA,
    CO,
    CT,
    DE,
    DC,
    FL,
    GA,
    HI,
    ID,
    IL,
    IN,
    IA,
    KS,
    KY,
    LA,
    ME,
    MD,
    MA,
    MI,
    MN,
    MS,
    MO,
    MT,
    NE,
    NV,
    NH,
    NJ,
    NM,
    NY,
    NC,
    ND,
    OH,
    OK,
    OR,
    PA,
    RI,
    SC,
    SD,
    TN,
    TX,
    UT,
    VT,
    VA,
    WA,
    WV,
    WI,
    WY,
}

impl UsState {
    /// Every state plus DC, in code order
    pub const ALL: [UsState; 51] = [
        UsState::AL,
        UsState::AK,
        UsState::AZ,
        UsState::AR,
        UsState::CA,
        UsState::CO,
        UsState::CT,
        UsState::DE,
        UsState::DC,
        UsState::FL,
        UsState::GA,
        UsState::HI,
        UsState::ID,
        UsState::IL,
        UsState::IN,
        UsState::IA,
        UsState::KS,
        UsState::KY,
        UsState::LA,
        UsState::ME,
        UsState::MD,
        UsState::MA,
        UsState::MI,
        UsState::MN,
        UsState::MS,
        UsState::MO,
        UsState::MT,
        UsState::NE,
        UsState::NV,
        UsState::NH,
        UsState::NJ,
        UsState::NM,
        UsState::NY,
        UsState::NC,
        UsState::ND,
        UsState::OH,
        UsState::OK,
        UsState::OR,
        UsState::PA,
        UsState::RI,
        UsState::SC,
        UsState::SD,
        UsState::TN,
        UsState::TX,
        UsState::UT,
        UsState::VT,
        UsState::VA,
        UsState::WA,
        UsState::WV,
        UsState::WI,
        UsState::WY,
    ];

    /// Get the full state name
    pub fn name(&self) -> &'static str {
        match self {
            UsState::AL => "Alabama",
            UsState::AK => "Alaska",
            UsState::AZ => "Arizona",
            UsState::AR => "Arkansas",
            UsState::CA => "California",
            UsState::CO => "Colorado",
            UsState::CT => "Connecticut",
            UsState::DE => "Delaware",
            UsState::DC => "District of Columbia",
            UsState::FL => "Florida",
            UsState::GA => "Georgia",
            UsState::HI => "Hawaii",
            UsState::ID => "Idaho",
            UsState::IL => "Illinois",
            UsState::IN => "Indiana",
            UsState::IA => "Iowa",
            UsState::KS => "Kansas",
            UsState::KY => "Kentucky",
            UsState::LA => "Louisiana",
            UsState::ME => "Maine",
            UsState::MD => "Maryland",
            UsState::MA => "Massachusetts",
            UsState::MI => "Michigan",
            UsState::MN => "Minnesota",
            UsState::MS => "Mississippi",
            UsState::MO => "Missouri",
            UsState::MT => "Montana",
            UsState::NE => "Nebraska",
            UsState::NV => "Nevada",
            UsState::NH => "New Hampshire",
            UsState::NJ => "New Jersey",
            UsState::NM => "New Mexico",
            UsState::NY => "New York",
            UsState::NC => "North Carolina",
            UsState::ND => "North Dakota",
            UsState::OH => "Ohio",
            UsState::OK => "Oklahoma",
            UsState::OR => "Oregon",
            UsState::PA => "Pennsylvania",
            UsState::RI => "Rhode Island",
            UsState::SC => "South Carolina",
            UsState::SD => "South Dakota",
            UsState::TN => "Tennessee",
            UsState::TX => "Texas",
            UsState::UT => "Utah",
            UsState::VT => "Vermont",
            UsState::VA => "Virginia",
            UsState::WA => "Washington",
            UsState::WV => "West Virginia",
            UsState::WI => "Wisconsin",
            UsState::WY => "Wyoming",
        }
    }

    /// Parse from state code or full name (case-insensitive)
    pub fn parse_code(s: &str) -> Option<Self> {
        let needle = s.trim();
        UsState::ALL.iter().copied().find(|state| {
            state.to_string().eq_ignore_ascii_case(needle) || state.name().eq_ignore_ascii_case(needle)
        })
    }
}

impl std::fmt::Display for UsState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Governing region for a weight limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Jurisdiction {
    /// Federal baseline, also used for any unrecognized code
    #[default]
    Federal,
    State(UsState),
}

/// Code used when displaying the federal baseline
pub const FEDERAL_CODE: &str = "US";

impl Jurisdiction {
    /// Resolve a jurisdiction code. Unknown codes resolve to `Federal`.
    pub fn from_code(code: &str) -> Self {
        match UsState::parse_code(code) {
            Some(state) => Jurisdiction::State(state),
            None => Jurisdiction::Federal,
        }
    }

    pub fn code(&self) -> String {
        match self {
            Jurisdiction::Federal => FEDERAL_CODE.to_string(),
            Jurisdiction::State(state) => state.to_string(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Jurisdiction::Federal => "Federal",
            Jurisdiction::State(state) => state.name(),
        }
    }

    pub fn state(&self) -> Option<UsState> {
        match self {
            Jurisdiction::Federal => None,
            Jurisdiction::State(state) => Some(*state),
        }
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<UsState> for Jurisdiction {
    fn from(state: UsState) -> Self {
        Jurisdiction::State(state)
    }
}

impl From<&str> for Jurisdiction {
    fn from(code: &str) -> Self {
        Jurisdiction::from_code(code)
    }
}

impl From<String> for Jurisdiction {
    fn from(code: String) -> Self {
        Jurisdiction::from_code(&code)
    }
}

impl From<Jurisdiction> for String {
    fn from(jurisdiction: Jurisdiction) -> Self {
        jurisdiction.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_parsing() {
        assert_eq!(UsState::parse_code("TX"), Some(UsState::TX));
        assert_eq!(UsState::parse_code("tx"), Some(UsState::TX));
        assert_eq!(UsState::parse_code(" co "), Some(UsState::CO));
        assert_eq!(UsState::parse_code("michigan"), Some(UsState::MI));
        assert_eq!(UsState::parse_code("District of Columbia"), Some(UsState::DC));
        assert_eq!(UsState::parse_code("ZZ"), None);
    }

    #[test]
    fn test_all_covers_fifty_states_and_dc() {
        let mut codes: Vec<String> = UsState::ALL.iter().map(|s| s.to_string()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 51);
        assert!(codes.contains(&"DC".to_string()));
    }

    #[test]
    fn test_unknown_code_is_federal() {
        assert_eq!(Jurisdiction::from_code("ZZ"), Jurisdiction::Federal);
        assert_eq!(Jurisdiction::from_code(""), Jurisdiction::Federal);
        assert_eq!(Jurisdiction::from_code("US"), Jurisdiction::Federal);
    }

    #[test]
    fn test_jurisdiction_code_and_name() {
        let co = Jurisdiction::from_code("co");
        assert_eq!(co, Jurisdiction::State(UsState::CO));
        assert_eq!(co.code(), "CO");
        assert_eq!(co.name(), "Colorado");
        assert_eq!(Jurisdiction::Federal.code(), "US");
        assert_eq!(Jurisdiction::Federal.name(), "Federal");
    }

    #[test]
    fn test_jurisdiction_serializes_as_code() {
        let json = serde_json::to_string(&Jurisdiction::State(UsState::MI)).unwrap();
        assert_eq!(json, "\"MI\"");
        let parsed: Jurisdiction = serde_json::from_str("\"ZZ\"").unwrap();
        assert_eq!(parsed, Jurisdiction::Federal);
    }
}
