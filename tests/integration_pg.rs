//! Repository tests against a real PostgreSQL instance.
//!
//! Run with `DATABASE_URL` set: `cargo test --test integration_pg -- --ignored`.

use schoolbook::modules::stu_parents::repository::{PgStuParentRepository, StuParentRepository};
use schoolbook::modules::users::repository::{PgUserRepository, UserRepository};
use schoolbook::schoolbook_models::{NewUser, UpdateStuParentRequest};
use sqlx::PgPool;
use uuid::Uuid;

fn new_user(email: &str) -> NewUser {
    NewUser {
        name: "Jane Doe".to_string(),
        email: email.to_string(),
        password_hash: "$2b$04$invalidbutstoredhashvalue".to_string(),
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_user_crud(pool: PgPool) {
    let repo = PgUserRepository::new(pool);

    let user = repo.create(new_user("jane@test.com")).await.unwrap();
    assert_eq!(user.email, "jane@test.com");
    assert!(user.email_verified_at.is_none());

    let found = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(found, user);

    let credentials = repo.find_credentials("jane@test.com").await.unwrap().unwrap();
    assert_eq!(credentials.id, user.id);

    let mut changes = new_user("jane.smith@test.com");
    changes.name = "Jane Smith".to_string();
    let updated = repo.update(user.id, changes).await.unwrap().unwrap();
    assert_eq!(updated.name, "Jane Smith");
    assert!(updated.updated_at >= user.updated_at);

    assert!(repo.delete(user.id).await.unwrap());
    assert!(!repo.delete(user.id).await.unwrap());
    assert!(repo.find_by_id(user.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_user_unique_email(pool: PgPool) {
    let repo = PgUserRepository::new(pool);

    let jane = repo.create(new_user("jane@test.com")).await.unwrap();
    let err = repo.create(new_user("jane@test.com")).await.unwrap_err();
    assert_eq!(err.status.as_u16(), 409);

    assert!(repo.email_taken("jane@test.com", None).await.unwrap());
    assert!(!repo.email_taken("jane@test.com", Some(jane.id)).await.unwrap());
    assert!(!repo.email_taken("john@test.com", None).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL"]
async fn test_stu_parent_crud(pool: PgPool) {
    let repo = PgStuParentRepository::new(pool);

    let ada = repo.create("Ada Obi").await.unwrap();
    repo.create("Bola Ade").await.unwrap();
    assert_eq!(repo.list().await.unwrap().len(), 2);

    let changes = UpdateStuParentRequest {
        name: Some("Ada Okafor".to_string()),
    };
    let updated = repo.update(ada.id, &changes).await.unwrap().unwrap();
    assert_eq!(updated.name, "Ada Okafor");
    assert!(repo.update(Uuid::new_v4(), &changes).await.unwrap().is_none());

    let deleted = repo.delete(ada.id).await.unwrap().unwrap();
    assert_eq!(deleted.id, ada.id);
    assert!(repo.delete(ada.id).await.unwrap().is_none());
    assert_eq!(repo.list().await.unwrap().len(), 1);
}
