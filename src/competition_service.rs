use tracing::log;

use crate::config_handler::Config;
use crate::errors::StatsError;
use crate::goal_service::GoalService;
use crate::models::Endpoint;
use crate::models_external::competition::CompetitionRecord;
use crate::models_external::page::PagedRsp;
use crate::rest_client;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinnerGoals {
    pub winner: String,
    pub goals: i32,
}

pub struct CompetitionService {
    competitions_url: String,
    goal_service: GoalService,
}

impl CompetitionService {
    pub fn new(config: &Config) -> CompetitionService {
        CompetitionService {
            competitions_url: config.get_url(&Endpoint::Competitions).to_string(),
            goal_service: GoalService::new(config),
        }
    }

    /// Winner of the competition/year pair, read from the first item of
    /// page 1. The name filter makes further pages redundant.
    pub async fn winning_team(&self, name: &str, year: u16) -> Result<String, StatsError> {
        let params = [("name", name.to_string()), ("year", year.to_string())];
        let rsp: PagedRsp<CompetitionRecord> =
            rest_client::get_page(&self.competitions_url, &params, 1).await?;

        rsp.data
            .into_iter()
            .next()
            .map(|c| c.winner)
            .ok_or_else(|| StatsError::WinnerNotFound { competition: name.to_string(), year })
    }

    pub async fn winner_goals(&self, name: &str, year: u16) -> Result<WinnerGoals, StatsError> {
        let winner = self.winning_team(name, year).await?;
        log::info!("[COMP] {name} {year} won by {winner}");

        let goals = self.goal_service.total_goals(&winner, year).await?;
        Ok(WinnerGoals { winner, goals })
    }
}
