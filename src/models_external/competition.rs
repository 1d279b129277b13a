use serde::{Deserialize, Serialize};

use crate::models::StringOrNum;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CompetitionRecord {
    pub name: String,
    pub country: String,
    pub year: StringOrNum,
    pub winner: String,
    pub runnerup: Option<String>,
}
