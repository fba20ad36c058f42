use std::str::FromStr;
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// The 50 US states, parsed from and displayed as their full English name.
///
/// Parsing is exact and case-sensitive: `"Texas"` resolves, `"texas"`,
/// `"TX"` and `"District of Columbia"` do not.
#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, EnumCount, Display, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum UsState {
    Alabama,
    Alaska,
    Arizona,
    Arkansas,
    California,
    Colorado,
    Connecticut,
    Delaware,
    Florida,
    Georgia,
    Hawaii,
    Idaho,
    Illinois,
    Indiana,
    Iowa,
    Kansas,
    Kentucky,
    Louisiana,
    Maine,
    Maryland,
    Massachusetts,
    Michigan,
    Minnesota,
    Mississippi,
    Missouri,
    Montana,
    Nebraska,
    Nevada,
    #[strum(serialize = "New Hampshire")]
    NewHampshire,
    #[strum(serialize = "New Jersey")]
    NewJersey,
    #[strum(serialize = "New Mexico")]
    NewMexico,
    #[strum(serialize = "New York")]
    NewYork,
    #[strum(serialize = "North Carolina")]
    NorthCarolina,
    #[strum(serialize = "North Dakota")]
    NorthDakota,
    Ohio,
    Oklahoma,
    Oregon,
    Pennsylvania,
    #[strum(serialize = "Rhode Island")]
    RhodeIsland,
    #[strum(serialize = "South Carolina")]
    SouthCarolina,
    #[strum(serialize = "South Dakota")]
    SouthDakota,
    Tennessee,
    Texas,
    Utah,
    Vermont,
    Virginia,
    Washington,
    #[strum(serialize = "West Virginia")]
    WestVirginia,
    Wisconsin,
    Wyoming,
}

impl UsState {
    /// 2-letter postal abbreviation.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Alabama => "AL",
            Self::Alaska => "AK",
            Self::Arizona => "AZ",
            Self::Arkansas => "AR",
            Self::California => "CA",
            Self::Colorado => "CO",
            Self::Connecticut => "CT",
            Self::Delaware => "DE",
            Self::Florida => "FL",
            Self::Georgia => "GA",
            Self::Hawaii => "HI",
            Self::Idaho => "ID",
            Self::Illinois => "IL",
            Self::Indiana => "IN",
            Self::Iowa => "IA",
            Self::Kansas => "KS",
            Self::Kentucky => "KY",
            Self::Louisiana => "LA",
            Self::Maine => "ME",
            Self::Maryland => "MD",
            Self::Massachusetts => "MA",
            Self::Michigan => "MI",
            Self::Minnesota => "MN",
            Self::Mississippi => "MS",
            Self::Missouri => "MO",
            Self::Montana => "MT",
            Self::Nebraska => "NE",
            Self::Nevada => "NV",
            Self::NewHampshire => "NH",
            Self::NewJersey => "NJ",
            Self::NewMexico => "NM",
            Self::NewYork => "NY",
            Self::NorthCarolina => "NC",
            Self::NorthDakota => "ND",
            Self::Ohio => "OH",
            Self::Oklahoma => "OK",
            Self::Oregon => "OR",
            Self::Pennsylvania => "PA",
            Self::RhodeIsland => "RI",
            Self::SouthCarolina => "SC",
            Self::SouthDakota => "SD",
            Self::Tennessee => "TN",
            Self::Texas => "TX",
            Self::Utah => "UT",
            Self::Vermont => "VT",
            Self::Virginia => "VA",
            Self::Washington => "WA",
            Self::WestVirginia => "WV",
            Self::Wisconsin => "WI",
            Self::Wyoming => "WY",
        }
    }
}

/// Full-name lookup into the code table. `None` for anything that is not
/// exactly one of the 50 state names.
pub fn lookup_state(name: &str) -> Option<UsState> {
    UsState::from_str(name).ok()
}
