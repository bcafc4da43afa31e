//! Unit tests for the stats HTTP client

use super::*;
use crate::error::StatsError;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn table(name: &str, headers: &[&str], rows: serde_json::Value) -> serde_json::Value {
    json!({
        "resource": "test",
        "parameters": {},
        "resultSets": [{ "name": name, "headers": headers, "rowSet": rows }]
    })
}

#[cfg(test)]
mod http_tests {
    use super::*;

    #[tokio::test]
    async fn test_player_career_request_and_decode() {
        let mock_server = MockServer::start().await;

        let body = table(
            "SeasonTotalsRegularSeason",
            &[
                "SEASON_ID", "TEAM_ABBREVIATION", "GP", "PTS", "REB", "AST", "BLK", "STL", "TOV",
                "PF", "FGM", "FG3M",
            ],
            json!([["2023-24", "MIN", 79, 2046, 427, 405, 44, 99, 248, 138, 742, 189]]),
        );

        Mock::given(method("GET"))
            .and(path("/playercareerstats"))
            .and(query_param("PlayerID", "1630162"))
            .and(query_param("PerMode", "Totals"))
            .and(header("x-nba-stats-origin", "stats"))
            .and(header("referer", "https://www.nba.com/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&mock_server)
            .await;

        let client = NbaStatsClient::new(mock_server.uri()).unwrap();
        let seasons = client.player_career(PlayerId::new(1630162)).await.unwrap();

        assert_eq!(seasons.len(), 1);
        assert_eq!(seasons[0].season_id.as_str(), "2023-24");
        assert_eq!(seasons[0].totals.points, 2046.0);
    }

    #[tokio::test]
    async fn test_find_player_prefers_exact_match() {
        let mock_server = MockServer::start().await;

        let body = table(
            "CommonAllPlayers",
            &["PERSON_ID", "DISPLAY_LAST_COMMA_FIRST", "DISPLAY_FIRST_LAST"],
            json!([
                [1628983, "Gilgeous-Alexander, Shai", "Shai Gilgeous-Alexander"],
                [2544, "James, LeBron", "LeBron James"],
                [1628973, "Brunson, Jalen", "Jalen Brunson"]
            ]),
        );

        Mock::given(method("GET"))
            .and(path("/commonallplayers"))
            .and(query_param("LeagueID", "00"))
            .and(query_param("IsOnlyCurrentSeason", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&mock_server)
            .await;

        let client = NbaStatsClient::new(format!("{}/", mock_server.uri())).unwrap();

        let player = client.find_player("lebron james").await.unwrap().unwrap();
        assert_eq!(player.id, PlayerId::new(2544));

        let partial = client.find_player("brunson").await.unwrap().unwrap();
        assert_eq!(partial.full_name, "Jalen Brunson");

        assert!(client.find_player("Wilt Chamberlain").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_league_leaders_reads_singular_result_set() {
        let mock_server = MockServer::start().await;

        let body = json!({
            "resource": "leagueleaders",
            "resultSet": {
                "name": "LeagueLeaders",
                "headers": [
                    "PLAYER_ID", "RANK", "PLAYER", "TEAM", "GP", "FGM", "FG_PCT", "FG3M",
                    "FG3_PCT", "FTM", "FT_PCT", "REB", "AST", "STL", "BLK", "TOV", "PTS"
                ],
                "rowSet": [
                    [1628983, 1, "Shai Gilgeous-Alexander", "OKC", 76, 860, 0.519, 163,
                     0.375, 601, 0.898, 380, 486, 131, 77, 183, 2484]
                ]
            }
        });

        Mock::given(method("GET"))
            .and(path("/leagueleaders"))
            .and(query_param("Season", "2024-25"))
            .and(query_param("PerMode", "Totals"))
            .and(query_param("Scope", "S"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&mock_server)
            .await;

        let client = NbaStatsClient::new(mock_server.uri()).unwrap();
        let rows = client
            .league_leaders(&SeasonId::from_provider("2024-25"))
            .await
            .unwrap();

        assert_eq!(rows[0].name, "Shai Gilgeous-Alexander");
        assert_eq!(rows[0].games_played, 76);
        assert_eq!(rows[0].free_throws_made, 601.0);
        assert_eq!(rows[0].field_goal_pct, 0.519);
    }

    #[tokio::test]
    async fn test_all_time_leaders_picks_stat_table() {
        let mock_server = MockServer::start().await;

        let body = json!({
            "resultSets": [
                {
                    "name": "PTSLeaders",
                    "headers": ["PLAYER_ID", "PLAYER_NAME", "PTS", "PTS_RANK", "IS_ACTIVE_FLAG"],
                    "rowSet": [[2544, "LeBron James", 42184, 1, "Y"]]
                },
                {
                    "name": "ASTLeaders",
                    "headers": ["PLAYER_ID", "PLAYER_NAME", "AST", "AST_RANK", "IS_ACTIVE_FLAG"],
                    "rowSet": [[304, "John Stockton", 15806, 1, "N"]]
                }
            ]
        });

        Mock::given(method("GET"))
            .and(path("/alltimeleadersgrids"))
            .and(query_param("TopX", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&mock_server)
            .await;

        let client = NbaStatsClient::new(mock_server.uri()).unwrap();
        let rows = client.all_time_leaders(StatKey::Assists).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "John Stockton");
        assert_eq!(rows[0].value, 15806.0);
    }

    #[tokio::test]
    async fn test_team_roster_request() {
        let mock_server = MockServer::start().await;

        let body = table(
            "CommonTeamRoster",
            &["PLAYER_ID", "PLAYER", "NUM", "POSITION", "HEIGHT", "WEIGHT", "AGE", "EXP"],
            json!([[1630162, "Anthony Edwards", "5", "G", "6-4", "225", 23.0, "4"]]),
        );

        Mock::given(method("GET"))
            .and(path("/commonteamroster"))
            .and(query_param("TeamID", "1610612750"))
            .and(query_param("Season", "2024-25"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&mock_server)
            .await;

        let client = NbaStatsClient::new(mock_server.uri()).unwrap();
        let roster = client
            .team_roster(TeamId::new(1610612750), &SeasonId::from_provider("2024-25"))
            .await
            .unwrap();

        assert_eq!(roster[0].name, "Anthony Edwards");
        assert_eq!(roster[0].experience.as_deref(), Some("4"));
    }

    #[tokio::test]
    async fn test_server_error_is_upstream() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/teamyearbyyearstats"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = NbaStatsClient::new(mock_server.uri()).unwrap();
        let result = client.team_history(TeamId::new(1610612750)).await;

        assert!(matches!(result, Err(StatsError::Upstream { .. })));
    }

    #[tokio::test]
    async fn test_unreadable_body_is_upstream() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/teamyearbyyearstats"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>blocked</html>"))
            .mount(&mock_server)
            .await;

        let client = NbaStatsClient::new(mock_server.uri()).unwrap();
        let err = client
            .team_history(TeamId::new(1610612750))
            .await
            .unwrap_err();

        assert!(err.is_upstream());
    }

    #[tokio::test]
    async fn test_missing_column_is_upstream() {
        let mock_server = MockServer::start().await;

        let body = table("TeamStats", &["YEAR", "WINS"], json!([["2023-24", 56]]));

        Mock::given(method("GET"))
            .and(path("/teamyearbyyearstats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&mock_server)
            .await;

        let client = NbaStatsClient::new(mock_server.uri()).unwrap();
        let err = client
            .team_history(TeamId::new(1610612750))
            .await
            .unwrap_err();

        assert!(matches!(err, StatsError::Upstream { .. }));
        assert!(err.to_string().contains("missing column"));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = NbaStatsClient::new("http://localhost:1234/stats/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:1234/stats");
    }

    #[test]
    fn test_all_time_table_name() {
        assert_eq!(all_time_table_name(StatKey::Points), "PTSLeaders");
        assert_eq!(all_time_table_name(StatKey::ThreePointPct), "FG3_PCTLeaders");
    }
}
