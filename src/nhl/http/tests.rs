//! Unit tests for the fetch client

use super::*;
use crate::cli::types::{GameId, GameNumber, GameType, SeasonId, TeamId};
use serde_json::json;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn client_for(server: &MockServer) -> NhlClient {
    NhlClient::with_bases(ApiBases::from_origin(&server.uri())).unwrap()
}

#[tokio::test]
async fn test_fetch_team_stats() {
    let mock_server = MockServer::start().await;
    let body = json!({"teams": [{"id": 6, "name": "Boston Bruins"}]});

    Mock::given(method("GET"))
        .and(path("/api/v1/teams/6"))
        .and(query_param("expand", "team.stats"))
        .and(query_param("season", "20192020"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let endpoint = Endpoint::TeamStats {
        team: TeamId::new(6),
        season: SeasonId::new(2019),
    };
    let doc = client.fetch(&endpoint).await.unwrap();
    assert_eq!(doc, body);
}

#[tokio::test]
async fn test_fetch_shift_chart_uses_shift_base() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stats/rest/en/shiftcharts"))
        .and(query_param("cayenneExp", "gameId=2019020001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [], "total": 0})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let game = GameId::new(SeasonId::new(2019), GameType::RegularSeason, GameNumber::new(1));
    let doc = client.fetch(&Endpoint::ShiftChart(game)).await.unwrap();
    assert_eq!(doc["total"], 0);
}

#[tokio::test]
async fn test_not_found_is_skippable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let game = GameId::new(SeasonId::new(2019), GameType::Playoffs, GameNumber::new(411));
    let err = client.fetch(&Endpoint::GameFeed(game)).await.unwrap_err();
    assert!(matches!(err, NhlError::NotFound { .. }));
    assert!(err.is_skippable());
    assert!(!err.is_transient());
}

#[tokio::test]
async fn test_throttled_status_is_transient() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_json(&format!("{}/api/v1/teams", mock_server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, NhlError::Status { status: 429, .. }));
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_bad_request_is_not_transient() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_json(&format!("{}/api/v1/teams", mock_server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, NhlError::Status { status: 400, .. }));
    assert!(!err.is_transient());
}

#[tokio::test]
async fn test_invalid_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .get_json(&format!("{}/api/v1/teams", mock_server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, NhlError::Json(_)));
}
