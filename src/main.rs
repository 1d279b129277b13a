use anyhow::Context;
use lazy_static::lazy_static;

use football_stats_rs::competition_service::CompetitionService;
use football_stats_rs::config_handler::{self, Config};
use football_stats_rs::goal_service::GoalService;

lazy_static! {
    pub static ref CONFIG: Config = config_handler::get_config();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        // Set the RUST_LOG, if it hasn't been explicitly defined
        std::env::set_var("RUST_LOG", "info");
    }

    // Configure a custom event formatter
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(false)
        .with_ansi(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .compact();
    tracing_subscriber::fmt()
        .event_format(format)
        .with_max_level(tracing::Level::INFO)
        .init();

    let goal_service = GoalService::new(&CONFIG);
    let competition_service = CompetitionService::new(&CONFIG);

    let team = "Manchester City";
    let year = 2011;
    let goals = goal_service.total_goals(team, year).await
        .with_context(|| format!("total goals for {team} in {year}"))?;
    println!("Goals by {team} in year {year}: {goals}");

    let competition = "English Premier League";
    let rsp = competition_service.winner_goals(competition, year).await
        .with_context(|| format!("winner goals for {competition} in {year}"))?;
    println!("Winner of {competition} in {year}: {}", rsp.winner);
    println!("Winning team scored: {} goals", rsp.goals);

    Ok(())
}
