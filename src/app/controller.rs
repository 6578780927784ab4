use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

pub async fn get_root(State(state): State<AppState>) -> Json<Value> {
    let status = if state.shutdown.is_triggered() {
        "shutting_down"
    } else {
        "ok"
    };

    Json(json!({
        "status": status,
        "env": state.envy.app_env(),
        "model": state.gemini.model,
    }))
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::{
        app::{
            env::Envy,
            util::{retry::RetryPolicy, shutdown::Shutdown},
        },
        images::apis::gemini::config::GeminiConfig,
    };

    use super::*;

    #[tokio::test]
    async fn test_get_root() {
        let state = AppState {
            envy: Arc::new(Envy::default()),
            gemini: Arc::new(GeminiConfig {
                api_key: None,
                model: "gemini-2.5-flash-image-preview".to_string(),
                api_version: "v1beta".to_string(),
                api_base_url: "http://127.0.0.1:9".to_string(),
                retry_policy: RetryPolicy::default(),
                timeout: Duration::from_secs(1),
                max_image_bytes: 1024,
            }),
            http_client: reqwest::Client::new(),
            shutdown: Shutdown::never(),
        };

        let response = crate::router(state)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["env"], "development");
        assert_eq!(value["model"], "gemini-2.5-flash-image-preview");
    }
}
