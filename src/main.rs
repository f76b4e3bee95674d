//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nhl_stats::{
    cli::{Commands, NhlStats},
    commands::{
        export::handle_export_xlsx, game_stats::handle_game_stats,
        player_ids::handle_player_ids, player_lookup::handle_player_lookup,
        player_stats::handle_player_stats, query::handle_query, shift_data::handle_shift_data,
        team_stats::handle_team_stats,
    },
    logging::init_logging,
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = NhlStats::parse();
    init_logging(app.common.verbose);
    let common = &app.common;

    match &app.command {
        Commands::TeamStats { seasons } => handle_team_stats(common, seasons).await?,

        Commands::PlayerStats { seasons } => handle_player_stats(common, seasons).await?,

        Commands::GameStats {
            seasons,
            game_types,
        } => handle_game_stats(common, seasons, game_types).await?,

        Commands::ShiftData {
            seasons,
            game_types,
        } => handle_shift_data(common, seasons, game_types).await?,

        Commands::PlayerIds {
            seasons,
            active_only,
        } => handle_player_ids(common, seasons, *active_only).await?,

        Commands::PlayerLookup { team, season, name } => {
            handle_player_lookup(common, *team, *season, name.as_deref()).await?
        }

        Commands::ExportXlsx { out, tables } => handle_export_xlsx(common, out, tables)?,

        Commands::Query { cmd } => handle_query(common, cmd)?,
    }

    Ok(())
}
