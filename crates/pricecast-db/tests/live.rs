//! Live integration tests for pricecast-db using `#[sqlx::test]`.
//!
//! Each test gets a fresh, fully-migrated Postgres database spun up by the
//! sqlx test harness. They need `DATABASE_URL` pointing at a server the
//! harness can create databases on, so they are ignored by default:
//! `cargo test -p pricecast-db -- --ignored`.

use pricecast_core::{AggregateResult, Category, Event, FactorResult};
use pricecast_db::{get_report, list_reports, upsert_report, UpsertOutcome};

fn sample_aggregate(postcode: &str, search_count: u32) -> AggregateResult {
    let mut aggregate = AggregateResult::new(postcode);
    aggregate.search_count = search_count;
    aggregate.factors.get_mut(Category::Amenities).insert(
        "Future hospitals or clinics".to_string(),
        FactorResult {
            query: format!("Future hospitals or clinics impact on property price in {postcode}"),
            events: vec![Event {
                event: "New hospital opens in 2026".to_string(),
                timeline: 2026,
                link: "https://example.gov.uk/plan".to_string(),
                location: format!("Within {postcode}"),
            }],
            confidence_score: 0.8,
            impact_score: 0.8,
        },
    );
    aggregate
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn first_upsert_inserts(pool: sqlx::PgPool) {
    let outcome = upsert_report(&pool, &sample_aggregate("SW3", 4))
        .await
        .expect("upsert should succeed");
    assert_eq!(outcome, UpsertOutcome::Inserted);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn second_upsert_replaces_single_document(pool: sqlx::PgPool) {
    upsert_report(&pool, &sample_aggregate("SW3", 4))
        .await
        .expect("first upsert should succeed");

    let mut replacement = AggregateResult::new("SW3");
    replacement.search_count = 60;
    let outcome = upsert_report(&pool, &replacement)
        .await
        .expect("second upsert should succeed");
    assert_eq!(outcome, UpsertOutcome::Updated);

    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM price_factor_reports WHERE postcode = 'SW3'")
            .fetch_one(&pool)
            .await
            .expect("count query should succeed");
    assert_eq!(count, 1);

    let row = get_report(&pool, "SW3")
        .await
        .expect("get should succeed")
        .expect("row should exist");
    assert_eq!(row.search_count, 60);
    let stored = row.aggregate().expect("document should decode");
    assert_eq!(stored, replacement);
    assert_eq!(stored.factors.factor_count(), 0);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn get_report_missing_postcode_is_none(pool: sqlx::PgPool) {
    let row = get_report(&pool, "ZZ9").await.expect("get should succeed");
    assert!(row.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "requires DATABASE_URL"]
async fn list_reports_respects_limit(pool: sqlx::PgPool) {
    for postcode in ["SW3", "EC1A 1BB", "M1 1AE"] {
        upsert_report(&pool, &sample_aggregate(postcode, 2))
            .await
            .expect("upsert should succeed");
    }

    let rows = list_reports(&pool, 2).await.expect("list should succeed");
    assert_eq!(rows.len(), 2);

    let all = list_reports(&pool, 10).await.expect("list should succeed");
    assert_eq!(all.len(), 3);
}
