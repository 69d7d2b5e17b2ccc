use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use schoolbook::router::init_router;
use schoolbook::testing::{TestContext, test_state};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

pub const STRONG_PASSWORD: &str = "Str0ng!Pass";

pub struct TestApp {
    pub router: axum::Router,
    pub ctx: TestContext,
}

pub fn setup_test_app() -> TestApp {
    let ctx = test_state();
    TestApp {
        router: init_router(ctx.state.clone()),
        ctx,
    }
}

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub token: String,
}

impl TestApp {
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        read_json(response).await
    }

    /// Registers a user with a fresh email and returns its id and token.
    pub async fn register(&self, name: &str) -> TestUser {
        let email = generate_unique_email();
        let (status, body) = self
            .send(
                "POST",
                "/api/auth/register",
                None,
                Some(json!({
                    "name": name,
                    "email": email,
                    "password": STRONG_PASSWORD
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");

        TestUser {
            id: body["data"]["id"].as_str().unwrap().parse().unwrap(),
            name: name.to_string(),
            email,
            token: body["token"].as_str().unwrap().to_string(),
        }
    }
}

pub async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}
