pub mod assistant;
pub mod chat;
pub mod suggest;

/// Liveness probe for GET /.
pub async fn liveness() -> &'static str {
    "Intelli AI Server is running."
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use url::Url;

    use crate::{AppState, config::Config, router};

    // The Gemini base URL points at a closed local port; none of these
    // requests may reach the network in the first place.
    fn test_state() -> AppState {
        AppState {
            cfg: Config {
                app_host: "127.0.0.1".to_string(),
                app_port: 0,
                gemini_api_key: "test-key".to_string(),
                gemini_model: "models/gemini-flash-latest".to_string(),
                gemini_base_url: Url::parse("http://127.0.0.1:9").unwrap(),
                gemini_timeout: Duration::from_secs(1),
                ask_timeout: Duration::from_secs(1),
                predictor_base_url: None,
                predictor_timeout: Duration::from_secs(1),
            },
            http: reqwest::Client::new(),
        }
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(res: axum::response::Response) -> Value {
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn liveness_returns_text() {
        let app = router(test_state());
        let res = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"Intelli AI Server is running.");
    }

    #[tokio::test]
    async fn empty_message_gets_placeholder_without_model_call() {
        let app = router(test_state());
        let res = app
            .oneshot(post_json("/intelli-ai", json!({"message": ""})))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert_eq!(body, json!({"reply": "No message received from app."}));
    }

    #[tokio::test]
    async fn whitespace_message_counts_as_empty() {
        let app = router(test_state());
        let res = app
            .oneshot(post_json("/intelli-ai", json!({"message": "   \n"})))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert_eq!(body["reply"], "No message received from app.");
    }

    #[tokio::test]
    async fn empty_last_message_gets_empty_suggestions() {
        let app = router(test_state());
        let res = app
            .oneshot(post_json("/smart-reply", json!({"lastMessage": ""})))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert_eq!(body, json!({"suggestions": []}));
    }

    #[tokio::test]
    async fn missing_last_message_gets_empty_suggestions() {
        let app = router(test_state());
        let res = app
            .oneshot(post_json("/smart-reply", json!({"history": "hi\nhello"})))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert_eq!(body, json!({"suggestions": []}));
    }

    #[tokio::test]
    async fn unreachable_model_surfaces_ai_error_body() {
        let app = router(test_state());
        let res = app
            .oneshot(post_json("/intelli-ai", json!({"message": "hello"})))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(res).await;
        let reply = body["reply"].as_str().unwrap();
        assert!(reply.starts_with("AI error: "), "got: {reply}");
    }

    #[tokio::test]
    async fn unreachable_model_yields_empty_suggestions_and_500() {
        let app = router(test_state());
        let res = app
            .oneshot(post_json("/smart-reply", json!({"lastMessage": "hey"})))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(res).await;
        assert_eq!(body, json!({"suggestions": []}));
    }

    #[tokio::test]
    async fn ask_ai_failure_uses_fixed_error_message() {
        let app = router(test_state());
        let res = app
            .oneshot(post_json(
                "/ask-ai",
                json!({"symptoms": ["fever", "cough"]}),
            ))
            .await
            .unwrap();

        // No predictor configured and no prediction supplied
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(res).await;
        assert_eq!(
            body,
            json!({"error": "AI assistant is not available right now."})
        );
    }
}
