use crate::server::error::AppError;
use test_utils::{builder::TestBuilder, context::TestContext};

mod category;

/// Builds a context with the full schema.
async fn setup() -> TestContext {
    TestBuilder::new().with_all_tables().build().await.unwrap()
}
