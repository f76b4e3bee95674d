//! End-to-end: mock NHL API -> scrape -> SQLite store -> workbook

use nhl_stats::{
    cli::SeasonRangeArgs,
    commands::{
        common::{CommandContext, RANKS_TABLE, SHIFTS_TABLE, STATS_TABLE},
        shift_data::scrape_shift_data,
        team_stats::scrape_team_stats,
    },
    config::{Overrides, Settings},
    nhl::{ApiBases, NhlClient, Team},
    scrape::Pacing,
    storage::export_workbook,
    Scalar, SeasonBound, StatsDatabase, TeamId,
};
use serde_json::json;
use std::path::Path;
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn client_for(server: &MockServer) -> NhlClient {
    NhlClient::with_bases(ApiBases::from_origin(&server.uri())).unwrap()
}

fn context_at(db_path: &Path) -> CommandContext {
    let settings = Settings {
        db_path: db_path.to_path_buf(),
        pacing: Pacing::none(),
        max_games: 5,
    };
    CommandContext::with_db(settings, StatsDatabase::open(db_path).unwrap())
}

fn season_2019() -> SeasonRangeArgs {
    SeasonRangeArgs {
        start: SeasonBound::Year(2019),
        end: None,
    }
}

async fn mount_team(server: &MockServer, id: u16, wins: i64, rank: &str) {
    let body = json!({"teams": [{"id": id, "teamStats": [{"splits": [
        {"stat": {"gamesPlayed": 70, "wins": wins, "ptPctg": "0.714"}},
        {"stat": {"wins": rank, "ptPctg": "1st"}}
    ]}]}]});
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/teams/{id}")))
        .and(query_param("expand", "team.stats"))
        .and(query_param("season", "20192020"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_team_stats_end_to_end_is_idempotent() {
    let server = MockServer::start().await;
    mount_team(&server, 6, 44, "1st").await;
    mount_team(&server, 25, 37, "12th").await;
    // Team 99 has no mock: 404, skipped.

    let teams = [
        Team {
            id: TeamId::new(6),
            name: "Boston Bruins",
        },
        Team {
            id: TeamId::new(99),
            name: "Nowhere",
        },
        Team {
            id: TeamId::new(25),
            name: "Dallas Stars",
        },
    ];

    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("store").join("nhl.db");
    let client = client_for(&server);

    {
        let mut ctx = context_at(&db_path);
        let summaries = scrape_team_stats(&client, &mut ctx, &season_2019(), &teams)
            .await
            .unwrap();
        assert_eq!(summaries.len(), 2);
        assert!(summaries.iter().all(|s| s.added == 2 && s.total == 2));
    }

    // Reopen the file and scrape again: nothing new.
    let mut ctx = context_at(&db_path);
    let summaries = scrape_team_stats(&client, &mut ctx, &season_2019(), &teams)
        .await
        .unwrap();
    assert!(summaries.iter().all(|s| s.existing == 2 && s.added == 0 && s.total == 2));

    let stats = ctx.db.load_table(STATS_TABLE).unwrap().unwrap();
    assert_eq!(stats.columns[0], "Season");
    assert_eq!(stats.columns[1], "Team");
    assert!(stats.column_index("Games Played").is_some());
    assert_eq!(stats.cell(0, "Team"), Some(&Scalar::from("Boston Bruins")));
    assert_eq!(stats.cell(1, "Season"), Some(&Scalar::Int(20192020)));

    let ranks = ctx.db.load_table(RANKS_TABLE).unwrap().unwrap();
    assert_eq!(ranks.cell(1, "Wins"), Some(&Scalar::from("12th")));
}

#[tokio::test]
async fn test_shift_data_end_to_end_then_workbook() {
    let server = MockServer::start().await;
    let chart = json!({"data": [
        {"firstName": "Patrice", "lastName": "Bergeron", "period": 1, "shiftNumber": 1,
         "startTime": "00:00", "endTime": "00:41", "duration": "00:41", "teamName": "Boston Bruins"},
        {"firstName": "Jamie", "lastName": "Benn", "period": 1, "shiftNumber": 1,
         "startTime": "00:00", "endTime": "00:52", "duration": null, "teamName": "Dallas Stars"}
    ], "total": 2});
    Mock::given(method("GET"))
        .and(path("/stats/rest/en/shiftcharts"))
        .and(query_param("cayenneExp", "gameId=2019020001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/stats/rest/en/shiftcharts"))
        .and(query_param("cayenneExp", "gameId=2019020002"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [], "total": 0})))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("nhl.db");
    let mut ctx = context_at(&db_path);
    let client = client_for(&server);

    let summaries = scrape_shift_data(&client, &mut ctx, &season_2019(), &[])
        .await
        .unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].table, SHIFTS_TABLE);
    assert_eq!(summaries[0].added, 2);

    let shifts = ctx.db.load_table(SHIFTS_TABLE).unwrap().unwrap();
    assert_eq!(shifts.cell(1, "Player Name"), Some(&Scalar::from("Jamie Benn")));
    assert_eq!(shifts.cell(1, "Shift Duration"), None);

    let out = dir.path().join("nhl.xlsx");
    let written = export_workbook(&ctx.db, &out, &[]).unwrap();
    assert_eq!(written, vec![SHIFTS_TABLE.to_string()]);
    assert!(out.exists());
    assert!(std::fs::metadata(&out).unwrap().len() > 0);

    let missing = export_workbook(&ctx.db, &dir.path().join("x.xlsx"), &["Nope".to_string()]);
    assert!(missing.is_err());
}

#[test]
fn test_settings_resolve_without_env() {
    let overrides = Overrides {
        db: Some("custom.db".into()),
        delay_ms: Some(0),
        max_games: Some(82),
    };
    let settings = Settings::resolve_with(&overrides, |_| None);
    assert_eq!(settings.db_path, Path::new("custom.db"));
    assert!(settings.pacing.delay.is_zero());
    assert_eq!(settings.max_games, 82);
}
