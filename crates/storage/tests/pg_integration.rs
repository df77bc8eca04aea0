//! Integration tests for PgStore.
//! Run with: DATABASE_URL=... cargo test -p lb-probe-storage -- --ignored --test-threads=1
//!
//! Tests share the `requests` table and some drop it, so keep them serial.

#![allow(clippy::unwrap_used, reason = "integration test code")]

use lb_probe_core::Config;
use lb_probe_storage::PgStore;
use serde_json::json;

fn pg_config() -> Config {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for PgStore integration tests");
    Config { database_url: Some(url), ..Config::default() }
}

fn store() -> PgStore {
    PgStore::connect(&pg_config()).expect("pool construction")
}

async fn drop_requests_table(config: &Config) {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect(&config.connection_string())
        .await
        .expect("direct connection for test setup");
    sqlx::query("DROP TABLE IF EXISTS requests").execute(&pool).await.unwrap();
    pool.close().await;
}

#[tokio::test]
#[ignore]
async fn count_is_zero_before_schema_exists() {
    let config = pg_config();
    drop_requests_table(&config).await;
    let store = store();
    assert_eq!(store.count_requests().await.unwrap(), 0);
}

#[tokio::test]
#[ignore]
async fn init_schema_is_idempotent() {
    let store = store();
    store.init_schema().await.unwrap();
    store.init_schema().await.unwrap();
    // concurrent initialization from several instances must not error either
    let (a, b) = tokio::join!(store.init_schema(), store.init_schema());
    a.unwrap();
    b.unwrap();
}

#[tokio::test]
#[ignore]
async fn fresh_schema_counts_zero() {
    let config = pg_config();
    drop_requests_table(&config).await;
    let store = store();
    store.init_schema().await.unwrap();
    assert_eq!(store.count_requests().await.unwrap(), 0);
}

#[tokio::test]
#[ignore]
async fn insert_roundtrips_payload_and_server_id() {
    let store = store();
    store.init_schema().await.unwrap();
    let payload = json!({"msg": "hi", "nested": {"n": 1}});

    let inserted = store.insert_request("server-1", &payload).await.unwrap();
    assert_eq!(inserted.server_id.as_deref(), Some("server-1"));
    assert_eq!(inserted.data, payload);

    let listed = store.list_recent(50).await.unwrap();
    let found = listed.iter().find(|r| r.id == inserted.id).expect("inserted row is listed");
    assert_eq!(found.data, payload);
    assert_eq!(found.timestamp, inserted.timestamp);

    let count = store.count_requests().await.unwrap();
    assert!(count >= 1);
}

#[tokio::test]
#[ignore]
async fn list_respects_limit_and_ordering() {
    let store = store();
    store.init_schema().await.unwrap();
    for i in 0..3 {
        store.insert_request("server-1", &json!({"seq": i})).await.unwrap();
    }

    let capped = store.list_recent(2).await.unwrap();
    assert!(capped.len() <= 2);

    let all = store.list_recent(50).await.unwrap();
    assert!(all.len() <= 50);
    for pair in all.windows(2) {
        assert!(pair[0].timestamp >= pair[1].timestamp, "rows must be newest first");
    }
}

#[tokio::test]
#[ignore]
async fn concurrent_inserts_get_distinct_increasing_ids() {
    let store = store();
    store.init_schema().await.unwrap();

    let (pa, pb, pc, pd) = (
        json!({"slot": "a"}),
        json!({"slot": "b"}),
        json!({"slot": "c"}),
        json!({"slot": "d"}),
    );
    let (a, b, c, d) = tokio::join!(
        store.insert_request("server-1", &pa),
        store.insert_request("server-1", &pb),
        store.insert_request("server-1", &pc),
        store.insert_request("server-1", &pd),
    );
    let mut ids = vec![a.unwrap().id, b.unwrap().id, c.unwrap().id, d.unwrap().id];
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 4, "every insert must receive a distinct id");
}

#[tokio::test]
#[ignore]
async fn reports_database_time_and_version() {
    let store = store();
    let (time, version) = store.server_time_and_version().await.unwrap();
    assert!(version.contains("PostgreSQL"));
    let skew = (chrono::Utc::now() - time).num_hours().abs();
    assert!(skew < 24, "database clock should be in the same day");
}

#[tokio::test]
#[ignore]
async fn close_rejects_further_queries() {
    let store = store();
    store.init_schema().await.unwrap();
    store.close().await;
    assert!(store.count_requests().await.is_err());
}
