use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    matches::{clear_matches, report_match},
    players::{clear_players, count_players, get_players, register_player},
    standings::{get_pairings, get_standings},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/players", get(get_players).post(register_player).delete(clear_players))
        .route("/api/players/count", get(count_players))
        .route("/api/matches", post(report_match).delete(clear_matches))
        .route("/api/standings", get(get_standings))
        .route("/api/pairings", get(get_pairings))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::settings::AppConfig;
    use crate::services::tournament::TournamentService;
    use crate::store::SqliteStore;

    fn test_router() -> Router {
        let store = SqliteStore::in_memory().unwrap();
        let service = TournamentService::new(store, AppConfig::default());
        create_router(Arc::new(AppState { service }))
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_register_report_and_rank() {
        let app = test_router();

        for name in ["Tom", "Dick", "Harry", "Bob"] {
            let (status, _) = send(&app, json_request("POST", "/api/players", json!({ "name": name }))).await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let reports = [
            json!({ "winnerId": 1, "loserId": 2 }),
            json!({ "winnerId": 3, "loserId": 4 }),
            json!({ "winnerId": 2, "loserId": 3, "isDraw": false }),
            json!({ "winnerId": 3, "loserId": 1, "isDraw": true }),
        ];
        for report in reports {
            let (status, _) = send(&app, json_request("POST", "/api/matches", report)).await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, body) = send(&app, empty_request("GET", "/api/standings")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 4);
        assert_eq!(body["items"][0]["playerId"], 1);
        assert_eq!(body["items"][2]["games"], 3);
        assert_eq!(body["items"][3]["name"], "Bob");
        assert_eq!(body["items"][3]["rank"], 4);

        let (status, body) = send(&app, empty_request("GET", "/api/pairings")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pairings"][0]["id1"], 1);
        assert_eq!(body["pairings"][0]["id2"], 2);
        assert_eq!(body["pairings"][1]["name2"], "Bob");
        assert!(body["bye"].is_null());
    }

    #[tokio::test]
    async fn test_invalid_reports_are_client_errors() {
        let app = test_router();
        send(&app, json_request("POST", "/api/players", json!({ "name": "Tom" }))).await;

        let (status, _) = send(
            &app,
            json_request("POST", "/api/matches", json!({ "winnerId": 1, "loserId": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(
            &app,
            json_request("POST", "/api/matches", json!({ "winnerId": 1, "loserId": 7 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, json_request("POST", "/api/players", json!({ "name": " " }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_count_and_reset() {
        let app = test_router();
        send(&app, json_request("POST", "/api/players", json!({ "name": "Tom" }))).await;
        send(&app, json_request("POST", "/api/players", json!({ "name": "Dick" }))).await;
        send(&app, json_request("POST", "/api/matches", json!({ "winnerId": 2, "loserId": 1 }))).await;

        let (_, body) = send(&app, empty_request("GET", "/api/players/count")).await;
        assert_eq!(body["count"], 2);

        let (status, _) = send(&app, empty_request("DELETE", "/api/matches")).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (_, body) = send(&app, empty_request("GET", "/api/standings")).await;
        assert_eq!(body["items"][0]["games"], 0);

        let (status, _) = send(&app, empty_request("DELETE", "/api/players")).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (_, body) = send(&app, empty_request("GET", "/api/players")).await;
        assert_eq!(body, json!([]));
    }
}
