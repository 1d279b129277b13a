use serde::{Deserialize, Serialize};

use crate::models::{StringOrNum, TeamRole};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MatchRecord {
    pub competition: String,
    pub year: StringOrNum,
    pub round: StringOrNum,
    pub team1: String,
    pub team2: String,
    pub team1goals: StringOrNum,
    pub team2goals: StringOrNum,
}

impl MatchRecord {
    pub fn goals_for(&self, role: &TeamRole) -> i32 {
        match role {
            TeamRole::Team1 => self.team1goals.to_num(),
            TeamRole::Team2 => self.team2goals.to_num(),
        }
    }
}
