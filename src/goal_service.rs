use tracing::log;

use crate::config_handler::Config;
use crate::errors::StatsError;
use crate::models::{Endpoint, TeamRole};
use crate::models_external::matches::MatchRecord;
use crate::models_external::page::PagedRsp;
use crate::rest_client;

pub struct GoalService {
    matches_url: String,
}

impl GoalService {
    pub fn new(config: &Config) -> GoalService {
        GoalService { matches_url: config.get_url(&Endpoint::Matches).to_string() }
    }

    /// Goals scored by the team in the given year, over both roles.
    pub async fn total_goals(&self, team: &str, year: u16) -> Result<i32, StatsError> {
        let mut total = 0;
        for role in TeamRole::get_all() {
            total += self.sum_team_goals(&role, team, year).await?;
        }
        Ok(total)
    }

    /// Walks every page of the matches endpoint filtered on one role,
    /// accumulating that role's goals field.
    pub async fn sum_team_goals(&self, role: &TeamRole, team: &str, year: u16) -> Result<i32, StatsError> {
        let mut page = 1;
        let mut total = 0;
        loop {
            let params = [("year", year.to_string()), (role.query_param(), team.to_string())];
            let rsp: PagedRsp<MatchRecord> =
                rest_client::get_page(&self.matches_url, &params, page).await?;

            total += rsp.data.iter().map(|m| m.goals_for(role)).sum::<i32>();

            if page >= rsp.total_pages {
                break;
            }
            page += 1;
        }
        log::info!("[GOALS] {team} as {} in {year}: {total}", role.query_param());
        Ok(total)
    }
}
