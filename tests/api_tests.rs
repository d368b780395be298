mod common;

use axum::http::StatusCode;
use common::{empty_app, get_json, ids, test_app};
use serde_json::json;

#[tokio::test]
async fn test_health_check() {
    let app = test_app().await;
    let (status, body) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db_file"], "sqlite::memory:");
}

#[tokio::test]
async fn test_drivers_list_is_sorted_by_surname_then_forename() {
    let app = test_app().await;
    let (status, body) = get_json(&app, "/drivers").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 16);
    assert_eq!(body["limit"], 50);
    assert_eq!(body["offset"], 0);

    let rows = body["results"].as_array().unwrap();
    for pair in rows.windows(2) {
        let a = (pair[0]["surname"].as_str().unwrap(), pair[0]["forename"].as_str().unwrap());
        let b = (pair[1]["surname"].as_str().unwrap(), pair[1]["forename"].as_str().unwrap());
        assert!(a <= b, "{:?} should sort before {:?}", a, b);
    }
}

#[tokio::test]
async fn test_drivers_list_pagination() {
    let app = test_app().await;

    let (_, first) = get_json(&app, "/drivers?limit=5").await;
    assert_eq!(first["count"], 5);
    let surnames: Vec<&str> = first["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["surname"].as_str().unwrap())
        .collect();
    assert_eq!(surnames, vec!["Albon", "Gasly", "Hamilton", "Hulkenberg", "Leclerc"]);

    // Mismo apellido: desempata el nombre
    let (_, page) = get_json(&app, "/drivers?limit=2&offset=13").await;
    let forenames: Vec<&str> = page["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["forename"].as_str().unwrap())
        .collect();
    assert_eq!(forenames, vec!["Michael", "Mick"]);
    assert_eq!(page["offset"], 13);

    let (_, past_end) = get_json(&app, "/drivers?offset=100").await;
    assert_eq!(past_end["count"], 0);
}

#[tokio::test]
async fn test_pagination_bounds_are_rejected() {
    let app = test_app().await;

    for uri in [
        "/drivers?limit=0",
        "/drivers?limit=201",
        "/drivers?offset=-1",
        "/constructors?limit=500",
        "/races?limit=0",
        "/races/2/results?offset=-5",
        "/seasons/2023/driver-standings?limit=0",
    ] {
        let (status, body) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["code"], "VALIDATION_ERROR", "{}", uri);
    }

    let (status, body) = get_json(&app, "/drivers?limit=200").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["limit"], 200);
}

#[tokio::test]
async fn test_malformed_parameters_use_the_error_envelope() {
    let app = test_app().await;

    for uri in [
        "/drivers?limit=abc",
        "/races?year=latest",
        "/drivers/1/seasons/2023?include_results=maybe",
        "/drivers/abc",
        "/races/x/results",
        "/seasons/twenty/driver-standings",
        "/constructors/1.5",
    ] {
        let (status, body) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["code"], "BAD_REQUEST", "{}", uri);
        assert_eq!(body["error"], "Bad Request", "{}", uri);
        assert!(body["message"].is_string(), "{}", uri);
    }
}

#[tokio::test]
async fn test_get_driver() {
    let app = test_app().await;

    let (status, body) = get_json(&app, "/drivers/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["driverId"], 1);
    assert_eq!(body["driverRef"], "max_verstappen");
    assert_eq!(body["code"], "VER");
    assert_eq!(body["dob"], "1997-09-30");

    let (status, body) = get_json(&app, "/drivers/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert!(body["message"].as_str().unwrap().contains("Driver"));
}

#[tokio::test]
async fn test_races_default_to_latest_season() {
    let app = test_app().await;
    let (status, body) = get_json(&app, "/races").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["year"], 2023);
    // raceId 3 es el round 1 aunque tenga un id mayor
    assert_eq!(ids(&body, "raceId"), vec![3, 2]);
    assert_eq!(ids(&body, "round"), vec![1, 2]);
}

#[tokio::test]
async fn test_races_for_explicit_year() {
    let app = test_app().await;

    let (_, body) = get_json(&app, "/races?year=2022").await;
    assert_eq!(body["year"], 2022);
    assert_eq!(ids(&body, "raceId"), vec![1, 4]);

    let (_, body) = get_json(&app, "/races?year=2023&limit=1&offset=1").await;
    assert_eq!(ids(&body, "raceId"), vec![2]);

    // Un año fuera del dataset no es un error en este listado
    let (status, body) = get_json(&app, "/races?year=1900").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["year"], 1900);
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_get_race_merges_circuit() {
    let app = test_app().await;

    let (status, body) = get_json(&app, "/races/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["raceId"], 2);
    assert_eq!(body["name"], "Saudi Arabian Grand Prix");
    assert_eq!(body["circuitName"], "Jeddah Corniche Circuit");
    assert_eq!(body["country"], "Saudi Arabia");
    assert_eq!(body["alt"], 15);
    assert_eq!(body["time"], "\\N");

    // alt `\N` en el CSV llega como null
    let (_, body) = get_json(&app, "/races/3").await;
    assert_eq!(body["circuitRef"], "bahrain");
    assert!(body["alt"].is_null());

    let (status, body) = get_json(&app, "/races/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("Race"));
}

#[tokio::test]
async fn test_race_results() {
    let app = test_app().await;
    let (status, body) = get_json(&app, "/races/2/results").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["raceId"], 2);
    assert_eq!(body["year"], 2023);
    assert_eq!(body["round"], 2);
    assert_eq!(body["name"], "Saudi Arabian Grand Prix");
    assert_eq!(body["count"], 12);

    let positions = ids(&body, "positionOrder");
    assert_eq!(positions, (1..=12).collect::<Vec<i64>>());

    let winner = &body["results"][0];
    assert_eq!(winner["driverId"], 2);
    assert_eq!(winner["driverName"], "Sergio Perez");
    assert_eq!(winner["constructorName"], "Red Bull");
    assert_eq!(winner["status"], "Finished");
    assert_eq!(winner["points"], json!(25.0));

    let lapped = &body["results"][10];
    assert_eq!(lapped["status"], "+1 Lap");
    assert!(lapped["milliseconds"].is_null());
}

#[tokio::test]
async fn test_race_results_pagination_and_retirements() {
    let app = test_app().await;
    let (_, body) = get_json(&app, "/races/3/results?limit=3&offset=10").await;

    assert_eq!(body["count"], 2);
    assert_eq!(body["limit"], 3);
    assert_eq!(ids(&body, "driverId"), vec![11, 12]);
    assert_eq!(body["results"][1]["position"], "\\N");
    assert_eq!(body["results"][1]["status"], "Retired");
}

#[tokio::test]
async fn test_race_results_unknown_race() {
    let app = test_app().await;
    let (status, body) = get_json(&app, "/races/999/results").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_constructors() {
    let app = test_app().await;

    let (status, body) = get_json(&app, "/constructors").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Alpine F1 Team", "Ferrari", "McLaren", "Mercedes", "Red Bull", "Williams"]
    );

    let (_, page) = get_json(&app, "/constructors?limit=2&offset=2").await;
    assert_eq!(ids(&page, "constructorId"), vec![4, 3]);

    let (status, body) = get_json(&app, "/constructors/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["constructorRef"], "mclaren");
    assert_eq!(body["nationality"], "British");

    let (status, body) = get_json(&app, "/constructors/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("Constructor"));
}

#[tokio::test]
async fn test_season_bounds() {
    let app = test_app().await;
    let (status, body) = get_json(&app, "/seasons").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "minYear": 2022, "maxYear": 2023 }));
}

#[tokio::test]
async fn test_empty_dataset() {
    let app = empty_app().await;

    let (status, body) = get_json(&app, "/races").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["year"].is_null());
    assert_eq!(body["count"], 0);

    let (status, _) = get_json(&app, "/seasons").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get_json(&app, "/seasons/2023/driver-standings").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");

    let (_, body) = get_json(&app, "/drivers").await;
    assert_eq!(body["count"], 0);
}
