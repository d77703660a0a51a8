//! Integration tests for the full population run

use nfl_populate::{
    commands::{populate_all, populate_games, WeekOutcome},
    espn::http::ScoreboardClient,
    storage::NflDatabase,
    DatabaseUrl, GameId, PopulateConfig, Season, Week,
};
use serde_json::json;
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn temp_config(through_week: u16, base_url: &str) -> (TempDir, PopulateConfig) {
    let dir = tempfile::tempdir().unwrap();
    let database_url = DatabaseUrl::new(format!(
        "sqlite://{}",
        dir.path().join("nfl.db").to_string_lossy()
    ));
    let config = PopulateConfig {
        database_url,
        season: Season::new(2025),
        through_week: Week::new(through_week),
        scoreboard_base_url: base_url.to_string(),
    };
    (dir, config)
}

fn week_scoreboard(game_id: &str, home_score: &str, status: &str) -> serde_json::Value {
    json!({
        "events": [{
            "id": game_id,
            "date": "2025-09-14T17:00Z",
            "competitions": [{
                "competitors": [
                    { "homeAway": "home", "team": { "abbreviation": "BUF" }, "score": home_score },
                    { "homeAway": "away", "team": { "abbreviation": "NYJ" }, "score": "3" }
                ],
                "status": { "type": { "name": status } }
            }]
        }]
    })
}

async fn mount_week(server: &MockServer, week: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/scoreboard"))
        .and(query_param("dates", "2025"))
        .and(query_param("seasontype", "2"))
        .and(query_param("week", week))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_failed_week_does_not_stop_later_weeks() {
    let server = MockServer::start().await;
    mount_week(
        &server,
        "1",
        ResponseTemplate::new(200).set_body_json(week_scoreboard("101", "14", "STATUS_FINAL")),
    )
    .await;
    mount_week(&server, "2", ResponseTemplate::new(502)).await;
    mount_week(
        &server,
        "3",
        ResponseTemplate::new(200).set_body_json(json!({
            "events": [{ "competitions": [] }]
        })),
    )
    .await;
    mount_week(
        &server,
        "4",
        ResponseTemplate::new(200).set_body_json(week_scoreboard("104", "21", "STATUS_FINAL")),
    )
    .await;

    let (_dir, config) = temp_config(4, &server.uri());
    let client = ScoreboardClient::with_base_url(config.scoreboard_base_url.clone()).unwrap();

    let outcomes = populate_all(&config, &client).await.unwrap();

    let weeks: Vec<u16> = outcomes.iter().map(|(w, _)| w.as_u16()).collect();
    assert_eq!(weeks, vec![1, 2, 3, 4]);
    assert_eq!(outcomes[0].1, WeekOutcome::Upserted { games: 1 });
    assert_eq!(outcomes[1].1, WeekOutcome::FetchFailed { status: 502 });
    assert!(outcomes[2].1.is_failed());
    assert_eq!(outcomes[3].1, WeekOutcome::Upserted { games: 1 });

    let db = NflDatabase::open(&config.database_url).unwrap();
    assert_eq!(db.team_count().unwrap(), 32);
    assert_eq!(db.game_count().unwrap(), 2);
    assert!(db
        .games_for_week(Season::new(2025), Week::new(2))
        .unwrap()
        .is_empty());
    assert_eq!(
        db.get_game(&GameId::new("104")).unwrap().unwrap().week,
        Week::new(4)
    );
}

#[tokio::test]
async fn test_rerun_is_idempotent_and_refreshes_scores() {
    let first_server = MockServer::start().await;
    mount_week(
        &first_server,
        "1",
        ResponseTemplate::new(200).set_body_json(week_scoreboard("201", "0", "STATUS_IN_PROGRESS")),
    )
    .await;

    let (_dir, config) = temp_config(1, &first_server.uri());
    let client = ScoreboardClient::with_base_url(first_server.uri()).unwrap();
    populate_all(&config, &client).await.unwrap();

    let second_server = MockServer::start().await;
    mount_week(
        &second_server,
        "1",
        ResponseTemplate::new(200).set_body_json(week_scoreboard("201", "27", "STATUS_FINAL")),
    )
    .await;
    let client = ScoreboardClient::with_base_url(second_server.uri()).unwrap();
    let outcomes = populate_all(&config, &client).await.unwrap();
    assert_eq!(outcomes[0].1, WeekOutcome::Upserted { games: 1 });

    let db = NflDatabase::open(&config.database_url).unwrap();
    assert_eq!(db.team_count().unwrap(), 32);
    assert_eq!(db.game_count().unwrap(), 1);

    let game = db.get_game(&GameId::new("201")).unwrap().unwrap();
    assert_eq!(game.home_score, 27);
    assert_eq!(game.status, "STATUS_FINAL");
}

#[tokio::test]
async fn test_refetch_keeps_original_matchup_and_date() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/scoreboard"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(week_scoreboard("301", "0", "STATUS_SCHEDULED")),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/scoreboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "events": [{
                "id": "301",
                "date": "2025-12-25T21:00Z",
                "competitions": [{
                    "competitors": [
                        { "homeAway": "home", "team": { "abbreviation": "MIA" }, "score": "30" },
                        { "homeAway": "away", "team": { "abbreviation": "NE" }, "score": "28" }
                    ],
                    "status": { "type": { "name": "STATUS_FINAL" } }
                }]
            }]
        })))
        .mount(&server)
        .await;

    let (_dir, config) = temp_config(1, &server.uri());
    let client = ScoreboardClient::with_base_url(server.uri()).unwrap();
    nfl_populate::commands::create_tables(&config.database_url).unwrap();

    populate_games(&client, &config.database_url, config.season, Some(Week::new(1))).await;
    populate_games(&client, &config.database_url, config.season, Some(Week::new(9))).await;

    let db = NflDatabase::open(&config.database_url).unwrap();
    let game = db.get_game(&GameId::new("301")).unwrap().unwrap();
    assert_eq!(game.home_score, 30);
    assert_eq!(game.away_score, 28);
    assert_eq!(game.status, "STATUS_FINAL");
    assert_eq!(game.week, Week::new(1));
    assert_eq!(game.game_date.as_deref(), Some("2025-09-14"));
    assert_eq!(game.home_team.as_deref(), Some("BUF"));
    assert_eq!(game.away_team.as_deref(), Some("NYJ"));
}
