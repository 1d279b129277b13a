use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamRole {
    Team1,
    Team2,
}

impl TeamRole {
    pub fn get_all() -> Vec<TeamRole> {
        vec![TeamRole::Team1, TeamRole::Team2]
    }

    /// Name of both the query parameter and the goals field prefix.
    pub fn query_param(&self) -> &'static str {
        match self {
            TeamRole::Team1 => "team1",
            TeamRole::Team2 => "team2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Matches,
    Competitions,
}

// The mock API echoes numeric fields back as strings on some endpoints.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum StringOrNum {
    String(String),
    Number(i32),
}

impl StringOrNum {
    pub fn to_num(&self) -> i32 {
        match self {
            StringOrNum::String(str) => str.parse::<i32>().unwrap_or(0),
            StringOrNum::Number(n) => *n,
        }
    }

    pub fn to_str(&self) -> String {
        match self {
            StringOrNum::String(str) => str.to_owned(),
            StringOrNum::Number(n) => n.to_string(),
        }
    }
}
