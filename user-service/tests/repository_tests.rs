//! Postgres adapter tests. Need a reachable server (`DATABASE_URL`, defaults to
//! localhost:5433); run with `cargo test -- --ignored`.

mod common;

use chrono::Utc;
use common::TestDb;
use user_service::domain::user::credential::Password;
use user_service::domain::user::models::EmailAddress;
use user_service::domain::user::models::PhoneNumber;
use user_service::domain::user::models::User;
use user_service::domain::user::models::UserId;
use user_service::domain::user::ports::UserRepository;
use user_service::outbound::repositories::PostgresUserRepository;
use user_service::user::errors::ErrorKind;
use user_service::user::errors::UserError;

fn new_user(email: &str) -> User {
    let now = Utc::now();
    User {
        id: UserId::new(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: EmailAddress::new(email.to_string()).unwrap(),
        phone: Some(PhoneNumber::new("0123456789".to_string()).unwrap()),
        password_hash: Password::new("analytical".to_string())
            .unwrap()
            .hash()
            .unwrap(),
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_create_and_find() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    let user = repository.create(new_user("ada@example.com")).await.unwrap();

    let by_id = repository.find_by_id(&user.id).await.unwrap().unwrap();
    assert_eq!(by_id.email.as_str(), "ada@example.com");
    assert_eq!(by_id.phone.as_ref().map(|p| p.as_str()), Some("0123456789"));
    assert!(by_id.password_hash.compare("analytical").is_ok());

    let by_email = repository
        .find_by_email("ada@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email.id, user.id);

    assert!(repository
        .find_by_email("nobody@example.com")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_duplicate_email_is_already_exists() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    repository.create(new_user("ada@example.com")).await.unwrap();

    let err = repository
        .create(new_user("ada@example.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, UserError::EmailAlreadyExists(_)));
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_update_email_collision_is_already_exists() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    repository.create(new_user("taken@example.com")).await.unwrap();
    let mut user = repository.create(new_user("ada@example.com")).await.unwrap();

    user.email = EmailAddress::new("taken@example.com".to_string()).unwrap();
    let err = repository.update(&user).await.unwrap_err();

    assert!(matches!(err, UserError::EmailAlreadyExists(_)));
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_update_and_change_password_report_rows() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    let mut user = repository.create(new_user("ada@example.com")).await.unwrap();
    user.last_name = "King".to_string();
    user.phone = None;

    assert_eq!(repository.update(&user).await.unwrap(), 1);
    let stored = repository.find_by_id(&user.id).await.unwrap().unwrap();
    assert_eq!(stored.last_name, "King");
    assert!(stored.phone.is_none());

    let new_hash = Password::new("difference-engine".to_string())
        .unwrap()
        .hash()
        .unwrap();
    assert_eq!(
        repository.change_password(&user.id, &new_hash).await.unwrap(),
        1
    );
    assert_eq!(
        repository
            .change_password(&UserId::new(), &new_hash)
            .await
            .unwrap(),
        0
    );

    let stored = repository.find_by_id(&user.id).await.unwrap().unwrap();
    assert!(stored.password_hash.compare("difference-engine").is_ok());
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_public_profiles_skip_unknown_ids() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    let user = repository.create(new_user("ada@example.com")).await.unwrap();

    let profiles = repository
        .find_public_profiles(&[user.id, UserId::new()])
        .await
        .unwrap();

    assert_eq!(profiles, vec![user.public_profile()]);
}
