//! HTTP-level tests driving the full router against an in-memory database.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Duration;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};


/// In-memory database with every table plus the application router on top of it.
struct TestApp {
    test: TestContext,
    app: Router,
}

impl TestApp {
    async fn new() -> Self {
        Self::with_builder(TestBuilder::new().with_all_tables()).await
    }

    async fn with_builder(builder: TestBuilder) -> Self {
        let test = builder.build().await.unwrap();
        let db = test.db.clone().unwrap();
        let app = router().with_state(AppState::new(db, Duration::hours(24)));

        Self { test, app }
    }

    fn db(&self) -> &DatabaseConnection {
        self.test.db.as_ref().unwrap()
    }

    /// Inserts a user with an unexpired token and returns the token value.
    async fn bearer_token(&self) -> String {
        let user = factory::user::create_user(self.db()).await.unwrap();
        factory::token::create_token(self.db(), user.id)
            .await
            .unwrap()
            .token
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut req = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            req = req.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let req = match body {
            Some(body) => req
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => req.body(Body::empty()).unwrap(),
        };

        let resp = self.app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }
}

fn victor_payload() -> Value {
    json!({
        "idUsuario": "1",
        "nomeUsuario": "Victor",
        "telefoneUsuario": "47988591570",
        "produtos": [{ "id": 1, "nome": "Burger", "preco": 10.2 }]
    })
}
