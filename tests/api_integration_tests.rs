// API integration tests
//
// Run with: cargo test --features api --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use fortune_scorer_rust::chart::RawChart;
    use fortune_scorer_rust::{
        create_router, AppConfig, AppState, BirthInput, ChartCalculator, FortunePipeline,
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt; // for oneshot

    struct SlowCalculator;

    impl ChartCalculator for SlowCalculator {
        fn calculate(&self, _input: &BirthInput) -> anyhow::Result<RawChart> {
            std::thread::sleep(Duration::from_millis(500));
            Ok(RawChart::default())
        }
    }

    fn create_test_app(calculator: Option<Arc<dyn ChartCalculator>>) -> axum::Router {
        let config = AppConfig {
            chart_timeout: Duration::from_millis(50),
            ..AppConfig::default()
        };
        let state = AppState::with_pipeline(config, FortunePipeline::without_sync(), calculator);
        create_router(state)
    }

    fn fortune_body(month: u32, with_chart: bool) -> Value {
        let mut body = json!({
            "birthInput": {
                "year": 1990, "month": month, "day": 14, "hour": 23,
                "gender": "male"
            }
        });
        if with_chart {
            body["chart"] = json!({
                "pillars": { "year": "庚午", "month": "戊寅", "day": "丙戌", "hour": "己亥" }
            });
        }
        body
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body")
            .to_vec()
    }

    async fn json_response(response: axum::response::Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).expect("Failed to parse JSON")
    }

    // =========================================================================
    // Section 1: Health Check
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let app = create_test_app(None);
        let response = app.oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_response(response).await;
        assert_eq!(json["status"], "healthy");
        assert!(json["timestamp"].is_string());
    }

    // =========================================================================
    // Section 2: Fortune analysis and cached reports
    // =========================================================================

    #[tokio::test]
    async fn test_analyze_then_fetch_report() {
        let app = create_test_app(None);

        let response = app
            .clone()
            .oneshot(post_json("/api/fortune", &fortune_body(2, true)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_response(response).await;

        let id = json["requestId"].as_str().expect("request id").to_string();
        let score = json["summary"]["fortuneScore"].as_u64().expect("score");
        assert!(score <= 100);
        assert_eq!(json["summary"]["allCategories"].as_object().map(|c| c.len()), Some(6));
        assert_eq!(json["sync"]["status"], "skipped");

        let response = app
            .clone()
            .oneshot(get(&format!("/api/reports/{}", id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let detail = json_response(response).await;
        assert_eq!(detail["fortuneScore"].as_u64(), Some(score));
        assert_eq!(detail["monthly"].as_array().map(|m| m.len()), Some(12));

        let response = app
            .oneshot(get(&format!("/api/reports/{}/markdown", id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let markdown = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(markdown.starts_with("# 2026 Byeong-O"));
        assert!(markdown.contains(&format!("{}/100", score)));
    }

    #[tokio::test]
    async fn test_unknown_report_is_not_found() {
        let app = create_test_app(None);
        let response = app.oneshot(get("/api/reports/does-not-exist")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = json_response(response).await;
        assert!(json["error"].as_str().unwrap().contains("does-not-exist"));
    }

    // =========================================================================
    // Section 3: Failures
    // =========================================================================

    #[tokio::test]
    async fn test_invalid_birth_input_is_bad_request() {
        let app = create_test_app(None);
        let response = app
            .oneshot(post_json("/api/fortune", &fortune_body(13, true)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_response(response).await;
        assert_eq!(json["source"], "validation");
        assert!(json["error"].as_str().unwrap().contains("month"));
    }

    #[tokio::test]
    async fn test_missing_chart_without_calculator() {
        let app = create_test_app(None);
        let response = app
            .oneshot(post_json("/api/fortune", &fortune_body(2, false)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_slow_calculator_times_out() {
        let app = create_test_app(Some(Arc::new(SlowCalculator)));
        let response = app
            .oneshot(post_json("/api/fortune", &fortune_body(2, false)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
        let json = json_response(response).await;
        assert_eq!(json["source"], "calculator");
        assert_eq!(json["error"], "chart calculation timed out after 50 ms");
    }

    // =========================================================================
    // Section 4: Inquiries
    // =========================================================================

    #[tokio::test]
    async fn test_inquiry_accepted() {
        let app = create_test_app(None);
        let body = json!({
            "sessionId": "0123456789abcdef",
            "email": "kim@example.com",
            "categories": ["children", "property"],
            "question": "Is next spring a good time for my son's wedding?"
        });
        let response = app.oneshot(post_json("/api/inquiry", &body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_response(response).await;
        assert_eq!(json["accepted"], true);
        assert_eq!(json["sync"]["status"], "skipped");
    }

    #[tokio::test]
    async fn test_inquiry_with_bad_email_is_bad_request() {
        let app = create_test_app(None);
        let body = json!({
            "sessionId": "0123456789abcdef",
            "email": "kim@example",
            "question": "Should I sell the apartment?"
        });
        let response = app.oneshot(post_json("/api/inquiry", &body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_response(response).await;
        assert_eq!(json["source"], "validation");
        assert!(json["error"].as_str().unwrap().contains("email"));
    }
}
