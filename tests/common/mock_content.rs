//! Mock content API server for integration tests.

#![allow(dead_code)]

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

/// A canned response for one resource path.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: format!(r#"{{"detail": "{}"}}"#, message),
        }
    }

    pub fn text(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "text/plain",
            body: body.to_string(),
        }
    }
}

/// Serve the given (path, response) pairs on an ephemeral port and return
/// the base URL. The server task lives until the test runtime shuts down.
pub async fn spawn_content_server(routes: Vec<(&'static str, MockResponse)>) -> String {
    let mut router = Router::new();
    for (path, response) in routes {
        router = router.route(
            path,
            get(move || {
                let response = response.clone();
                async move {
                    (
                        StatusCode::from_u16(response.status).unwrap_or(StatusCode::OK),
                        [("content-type", response.content_type)],
                        response.body,
                    )
                }
            }),
        );
    }

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock server");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{}", addr)
}
