use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use test_utils::{builder::TestBuilder, context::TestContext};

use crate::server::{
    controller::extract::{AppJson, AppPath, AppQuery},
    error::AppError,
    state::AppState,
};

mod request;

async fn setup() -> TestContext {
    TestBuilder::new().with_all_tables().build().await.unwrap()
}

fn state(test: &TestContext) -> State<AppState> {
    State(AppState::new(test.db.clone().unwrap()))
}

/// Status code a handler result renders to.
fn status<T: IntoResponse>(result: Result<T, AppError>) -> StatusCode {
    result.into_response().status()
}

/// Decodes the query string of `uri` the way the router does.
fn query<T: DeserializeOwned>(uri: &str) -> Result<AppQuery<T>, AppError> {
    let uri: Uri = uri.parse().unwrap();
    let Query(value) = Query::<T>::try_from_uri(&uri)?;

    Ok(AppQuery(value))
}

/// Reads a successful handler response as JSON.
async fn body_json<T: DeserializeOwned, R: IntoResponse>(result: Result<R, AppError>) -> T {
    let response: Response = result.into_response();
    assert!(response.status().is_success(), "status {}", response.status());

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
