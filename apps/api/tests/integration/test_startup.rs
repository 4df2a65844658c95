use super::helpers::build_config;
use calculator_api::{config::AppEnvironment, infrastructure::database::pool::connect_store};

// Nothing listens on port 1, so the connect attempt fails within the 1s timeout.
const UNREACHABLE_DATABASE: &str = "postgresql://x@127.0.0.1:1/x";

#[tokio::test]
async fn unreachable_store_is_fatal_in_production() {
    let mut config = build_config(AppEnvironment::Production);
    config.database_url = UNREACHABLE_DATABASE.to_string();

    let result = connect_store(&config).await;
    let err = result.err().expect("production startup should fail");
    assert!(format!("{:#}", err).contains("database connection failed"));
}

#[tokio::test]
async fn unreachable_store_degrades_in_development() {
    let mut config = build_config(AppEnvironment::Development);
    config.database_url = UNREACHABLE_DATABASE.to_string();

    let store = connect_store(&config).await.expect("development startup should continue");
    assert!(store.is_none());
}

#[tokio::test]
async fn unreachable_store_degrades_in_test_mode() {
    let mut config = build_config(AppEnvironment::Test);
    config.database_url = UNREACHABLE_DATABASE.to_string();

    assert!(connect_store(&config).await.unwrap().is_none());
}
