//! Repository tests against a real PostgreSQL. Set `TEST_DATABASE_URL` to run them;
//! without it every test returns early.

use account_registry::{ensure_accounts_table, Account, AccountRepository, PgAccountRepository};
use std::time::Duration;
use tokio::sync::OnceCell;

static TABLE: OnceCell<()> = OnceCell::const_new();

async fn repo() -> Option<PgAccountRepository> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("connect TEST_DATABASE_URL");
    TABLE
        .get_or_init(|| async {
            ensure_accounts_table(&pool).await.expect("create accounts table");
        })
        .await;
    Some(PgAccountRepository::new(pool, Duration::from_secs(5)))
}

fn ann() -> Account {
    Account {
        firstname: "Ann".into(),
        lastname: "Lee".into(),
        mobilenumber: 5551234,
        password: "hash".into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn insert_then_find_by_id() {
    let Some(repo) = repo().await else { return };
    let id = repo.insert(&ann()).await.unwrap();
    assert!(id >= 1);
    let found = repo.find_by_id(id).await.unwrap();
    assert_eq!(found, vec![Account { id, ..ann() }]);
    assert!(repo.find_all().await.unwrap().iter().any(|a| a.id == id));
}

#[tokio::test]
async fn update_touches_only_supplied_fields() {
    let Some(repo) = repo().await else { return };
    let id = repo.insert(&ann()).await.unwrap();
    let patch = Account {
        lastname: "Chen".into(),
        ..Default::default()
    };
    repo.update_fields(id, &patch).await.unwrap();
    repo.update_fields(id, &Account::default()).await.unwrap();
    let row = repo.find_by_id(id).await.unwrap().remove(0);
    assert_eq!(row.firstname, "Ann");
    assert_eq!(row.lastname, "Chen");
    assert_eq!(row.mobilenumber, 5551234);
    assert_eq!(row.password, "hash");
}

#[tokio::test]
async fn injection_probe_round_trips_verbatim() {
    let Some(repo) = repo().await else { return };
    let probe = "a'); DROP TABLE accounts_db;--";
    let id = repo
        .insert(&Account {
            firstname: probe.into(),
            ..Default::default()
        })
        .await
        .unwrap();
    repo.update_fields(
        id,
        &Account {
            lastname: probe.into(),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let row = repo.find_by_id(id).await.unwrap().remove(0);
    assert_eq!(row.firstname, probe);
    assert_eq!(row.lastname, probe);
    // table still exists
    repo.find_all().await.unwrap();
}

#[tokio::test]
async fn delete_is_idempotent_and_missing_ids_are_empty() {
    let Some(repo) = repo().await else { return };
    let id = repo.insert(&ann()).await.unwrap();
    repo.delete_by_id(id).await.unwrap();
    repo.delete_by_id(id).await.unwrap();
    assert!(repo.find_by_id(id).await.unwrap().is_empty());
    assert!(!repo.find_all().await.unwrap().iter().any(|a| a.id == id));
}
