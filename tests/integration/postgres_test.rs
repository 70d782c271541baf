//! Integration tests for the PostgreSQL weight repository.
//!
//! These need a live database. Set `WEIGHTLOG_TEST_DATABASE_URL` and run with
//! `--ignored --test-threads=1`; every test starts from an empty `weights`
//! table.

use weightlog_core::config::DatabaseConfig;
use weightlog_core::error::ErrorKind;
use weightlog_core::traits::Repository;
use weightlog_core::types::WeightId;
use weightlog_database::{DatabasePool, PgWeightRepository, WeightStore};
use weightlog_entity::weight::NewWeight;

async fn repository() -> PgWeightRepository {
    let url = std::env::var("WEIGHTLOG_TEST_DATABASE_URL")
        .expect("WEIGHTLOG_TEST_DATABASE_URL must be set");
    let config = DatabaseConfig {
        url,
        max_connections: 2,
        ..DatabaseConfig::default()
    };

    let pool = DatabasePool::connect(&config)
        .await
        .expect("Failed to connect to test database");
    weightlog_database::migration::run_migrations(pool.pool())
        .await
        .expect("Failed to run migrations");
    sqlx::query("DELETE FROM weights")
        .execute(pool.pool())
        .await
        .expect("Failed to clean weights");

    pool.ping().await.expect("Database should answer a ping");
    PgWeightRepository::new(pool.pool().clone())
}

#[tokio::test]
#[ignore]
async fn test_save_and_find() {
    let repo = repository().await;

    let saved = repo.save(&NewWeight::new("2020-11-09", 50, 48)).await.unwrap();
    assert_eq!(saved.difference, 2);

    let found = repo.find_by_id(saved.id).await.unwrap();
    assert_eq!(found.date, "2020-11-09");
    assert_eq!(repo.find_by_date("2020-11-09").await.unwrap().id, saved.id);
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
#[ignore]
async fn test_find_all_orders_by_date() {
    let repo = repository().await;
    repo.save(&NewWeight::new("2020-11-10", 54, 52)).await.unwrap();
    repo.save(&NewWeight::new("2020-11-09", 50, 48)).await.unwrap();

    let dates: Vec<String> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|w| w.date)
        .collect();
    assert_eq!(dates, ["2020-11-09", "2020-11-10"]);
}

#[tokio::test]
#[ignore]
async fn test_duplicate_date_is_conflict() {
    let repo = repository().await;
    let first = repo.save(&NewWeight::new("2020-11-09", 50, 48)).await.unwrap();
    repo.save(&NewWeight::new("2020-11-10", 54, 52)).await.unwrap();

    let err = repo
        .save(&NewWeight::new("2020-11-09", 51, 49))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);

    let err = repo
        .update(first.id, &NewWeight::new("2020-11-10", 51, 49))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
}

#[tokio::test]
#[ignore]
async fn test_update_and_delete() {
    let repo = repository().await;
    let saved = repo.save(&NewWeight::new("2020-11-09", 50, 48)).await.unwrap();

    let updated = repo
        .update(saved.id, &NewWeight::new("2020-11-09", 60, 55))
        .await
        .unwrap();
    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.difference, 5);
    assert!(updated.updated_at >= saved.updated_at);

    repo.delete(saved.id).await.unwrap();
    assert!(repo.find_by_id(saved.id).await.unwrap_err().is_not_found());
    assert!(repo.delete(saved.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
#[ignore]
async fn test_long_dates_are_stored_like_the_memory_store() {
    let repo = repository().await;
    let date = "2020-11-09 after the morning run, before breakfast";

    let saved = repo.save(&NewWeight::new(date, 50, 48)).await.unwrap();

    assert_eq!(repo.find_by_id(saved.id).await.unwrap().date, date);
}

#[tokio::test]
#[ignore]
async fn test_missing_records_are_not_found() {
    let repo = repository().await;
    let missing = WeightId(i64::MAX);

    assert!(repo.find_by_id(missing).await.unwrap_err().is_not_found());
    assert!(repo.find_by_date("1999-01-01").await.unwrap_err().is_not_found());
    assert!(
        repo.update(missing, &NewWeight::new("1999-01-01", 50, 48))
            .await
            .unwrap_err()
            .is_not_found()
    );
}
