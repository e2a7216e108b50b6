use roster_board::config::RosterConfig;
use roster_board::domain::repositories::TeamSource;
use roster_board::errors::RosterResult;
use roster_board::infrastructure::repositories::JsonFileTeamSource;
use roster_board::view_model::RosterView;

#[tokio::main]
async fn main() -> RosterResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{}", usage_text());
        return Ok(());
    }

    let config = RosterConfig::from_env().with_args(args)?;

    tracing::info!("Loading teams from {}", config.teams_path.display());
    let source = JsonFileTeamSource::new(&config.teams_path);
    let teams = source.fetch_teams().await?;
    tracing::info!("Loaded {} teams", teams.len());

    let mut view = RosterView::new(teams);
    view.set_search_term(config.search_term);
    view.select_category(config.selection);

    let snapshot = view.snapshot();
    if snapshot.is_empty() {
        tracing::info!("No teams match the current filters");
    }

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn usage_text() -> &'static str {
    "roster-board - group and filter a team roster

Usage:
  roster-board [--teams <path>] [--search <term>] [--category <key>]
  roster-board --help

Environment:
  ROSTER_TEAMS_JSON   Path to a JSON array of teams (default data/teams.sample.json)
  ROSTER_SEARCH       Initial search term
  ROSTER_CATEGORY     Selected category key (default all)"
}
