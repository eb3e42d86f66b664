pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers as assessment;
use crate::matching::handlers as careers;
use crate::skills::handlers as skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assessment API
        .route(
            "/api/v1/assessment/questions",
            get(assessment::handle_questions),
        )
        .route(
            "/api/v1/assessment/progress",
            post(assessment::handle_progress),
        )
        .route("/api/v1/assessment/score", post(assessment::handle_score))
        // Careers API
        .route("/api/v1/careers/match", post(careers::handle_match))
        .route("/api/v1/careers/search", post(careers::handle_search))
        .route(
            "/api/v1/careers/skill-gaps",
            post(careers::handle_skill_gaps),
        )
        .route("/api/v1/careers/:id", get(careers::handle_get_career))
        // Skills API
        .route("/api/v1/skills/map", post(skills::handle_map))
        .route("/api/v1/skills/gap", post(skills::handle_gap))
        .route("/api/v1/skills/compare", post(skills::handle_compare))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::{Config, ScoringConfig};
    use crate::content::ContentSnapshot;
    use crate::models::assessment::QuestionBank;
    use crate::models::skills::SkillTraitTable;

    fn test_config() -> Config {
        Config {
            port: 0,
            rust_log: "info".to_string(),
            question_bank_path: PathBuf::from("unused"),
            career_catalog_path: PathBuf::from("unused"),
            skill_map_path: PathBuf::from("unused"),
            scoring: ScoringConfig::default(),
        }
    }

    fn test_content() -> ContentSnapshot {
        let questions: QuestionBank = serde_json::from_value(json!({
            "questions": [
                {"id": 1, "text": "Repair engines", "type": "R"},
                {"id": 2, "text": "Run experiments", "type": "I"},
                {"id": 3, "text": "Paint", "type": "A"},
                {"id": 4, "text": "Teach", "type": "S", "category": "values"},
                {"id": 5, "text": "Sell", "type": "E"},
                {"id": 6, "text": "File records", "type": "C"}
            ]
        }))
        .unwrap();
        let careers = serde_json::from_value(json!([
            {"id": "nurse", "title": "Registered Nurse", "category": "Healthcare",
             "holland_codes": ["S", "I", "C"], "required_skills": ["Patient Care", "Biology"],
             "core_skills": ["Patient Care"]},
            {"id": "engineer", "title": "Mechanical Engineer", "category": "Engineering",
             "holland_codes": ["R", "I", "C"]},
            {"id": "designer", "title": "Graphic Designer", "category": "Arts",
             "holland_codes": ["A", "E", "S"]}
        ]))
        .unwrap();
        ContentSnapshot {
            questions,
            careers,
            skill_map: SkillTraitTable::builtin(),
        }
    }

    fn app_with(content: ContentSnapshot) -> Router {
        build_router(AppState {
            config: test_config(),
            content: Arc::new(content),
        })
    }

    fn app() -> Router {
        app_with(test_content())
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "pathway-api");
    }

    #[tokio::test]
    async fn test_questions_filter_by_category() {
        let (status, body) = send(app(), "GET", "/api/v1/assessment/questions?category=values", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 1);
        assert_eq!(body["questions"][0]["type"], "S");
    }

    #[tokio::test]
    async fn test_progress_reports_missing_and_unknown() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/assessment/progress",
            Some(json!({"responses": {"1": 5, "2": 4, "99": 3}})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["progress"]["answered_questions"], 2);
        assert_eq!(body["validation"]["is_valid"], false);
        assert_eq!(body["validation"]["unknown_question_ids"], json!([99]));
    }

    #[tokio::test]
    async fn test_score_returns_holland_code() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/assessment/score",
            Some(json!({"responses": {"1": 2, "2": 5, "3": 1, "4": 4, "5": 1, "6": 3}})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["holland_code"], "ISC");
        assert_eq!(body["scores"]["I"], 100.0);
        assert_eq!(body["interpretation"]["holland_code"], "ISC");
        assert!(body["report_id"].is_string());
    }

    #[tokio::test]
    async fn test_score_below_completion_threshold_is_422() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/assessment/score",
            Some(json!({"responses": {"1": 5}, "completion_threshold": 0.8})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "INCOMPLETE_ASSESSMENT");
    }

    #[tokio::test]
    async fn test_score_rejects_out_of_range_answer() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/assessment/score",
            Some(json!({"responses": {"1": 7}})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_match_ranks_primary_letter_first() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/careers/match",
            Some(json!({"scores": {"R": 20, "I": 60, "A": 10, "S": 90, "E": 30, "C": 50}})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["holland_code"], "SIC");
        assert_eq!(body["matches"][0]["career"]["id"], "nurse");
        assert_eq!(body["matches"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_match_against_empty_catalog_is_503() {
        let content = ContentSnapshot {
            careers: vec![],
            ..test_content()
        };
        let (status, body) = send(
            app_with(content),
            "POST",
            "/api/v1/careers/match",
            Some(json!({"scores": {"R": 50}})),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "EMPTY_CATALOG");
    }

    #[tokio::test]
    async fn test_match_rejects_zero_request_weights() {
        let (status, _) = send(
            app(),
            "POST",
            "/api/v1/careers/match",
            Some(json!({
                "scores": {"R": 50},
                "weights": {"primary": 0.0, "secondary": 0.0, "overall": 0.0}
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_search_by_text() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/careers/search",
            Some(json!({"query": "engineer"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 1);
        assert_eq!(body["careers"][0]["id"], "engineer");
    }

    #[tokio::test]
    async fn test_career_insights_and_not_found() {
        let (status, body) = send(app(), "GET", "/api/v1/careers/nurse", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["career"]["title"], "Registered Nurse");
        assert_eq!(body["progression_paths"][2]["title"], "Healthcare Director");

        let (status, body) = send(app(), "GET", "/api/v1/careers/astronaut", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_career_skill_gaps() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/careers/skill-gaps",
            Some(json!({"career_ids": ["nurse"], "skills": ["biology"]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["careers"][0]["gaps"][0]["skill"], "Patient Care");
        assert_eq!(body["careers"][0]["gaps"][0]["importance"], "High");
        assert_eq!(body["careers"][0]["coverage"], 50);
        assert_eq!(body["development_paths"][0]["career_id"], "nurse");
        assert_eq!(
            body["development_paths"][0]["phases"][0]["title"],
            "Foundation Skills"
        );
    }

    #[tokio::test]
    async fn test_map_skills_warns_on_unmapped() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/skills/map",
            Some(json!({"ratings": {"Research": 5, "Zorbing": 3}})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["scores"]["I"], 100.0);
        assert_eq!(body["warnings"][0]["skill"], "Zorbing");
    }

    #[tokio::test]
    async fn test_gap_with_mismatched_axes_is_400() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/skills/gap",
            Some(json!({"interest": {"R": 50, "I": 50}, "skill": {"R": 50}})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "MISMATCHED_AXIS_SET");
    }

    #[tokio::test]
    async fn test_gap_classifies_axes() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/skills/gap",
            Some(json!({"interest": {"R": 90, "I": 50}, "skill": {"R": 50, "I": 90}})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["classifications"][0]["label"], "development_opportunity");
        assert_eq!(body["classifications"][1]["label"], "underutilized_strength");
        assert_eq!(body["summary"]["overall_alignment"], 60.0);
    }

    #[tokio::test]
    async fn test_compare_maps_then_classifies() {
        let (status, body) = send(
            app(),
            "POST",
            "/api/v1/skills/compare",
            Some(json!({
                "interest": {"R": 0, "I": 100, "A": 0, "S": 0, "E": 0, "C": 0},
                "ratings": {"Research": 5}
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["classifications"].as_array().unwrap().len(), 6);
        assert_eq!(body["classifications"][1]["label"], "aligned");
        assert_eq!(body["summary"]["overall_alignment"], 100.0);
    }
}
