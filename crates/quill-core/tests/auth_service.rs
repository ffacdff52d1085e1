use std::sync::Arc;

use quill_core::domain::Role;
use quill_core::error::DomainError;
use quill_core::ports::{TokenService, UserRepository};
use quill_core::service::AuthService;
use quill_infra::auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
use quill_infra::database::memory::InMemoryUserRepository;
use quill_shared::dto::{LoginRequest, RegisterRequest};

fn service() -> (AuthService, Arc<InMemoryUserRepository>, Arc<JwtTokenService>) {
    let users = Arc::new(InMemoryUserRepository::new());
    let tokens = Arc::new(JwtTokenService::new(JwtConfig {
        secret: "test-secret".to_string(),
        expiration_days: 1,
        issuer: "test".to_string(),
    }));
    let service = AuthService::new(
        users.clone(),
        Arc::new(Argon2PasswordService::new()),
        tokens.clone(),
    );
    (service, users, tokens)
}

fn register_request(email: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        email: Some(email.to_string()),
        username: None,
        password: Some(password.to_string()),
    }
}

#[tokio::test]
async fn register_normalizes_email_and_issues_verifiable_token() {
    let (service, _, tokens) = service();

    let session = service
        .register(&register_request("  A@B.COM ", "123456"))
        .await
        .unwrap();

    assert_eq!(session.user.email, "a@b.com");
    assert_eq!(session.user.role, Role::Author);

    let claims = tokens.verify_token(&session.token).unwrap();
    assert_eq!(claims.user_id, session.user.id);
    assert_eq!(claims.role, Role::Author);
}

#[tokio::test]
async fn register_short_password_creates_no_user() {
    let (service, users, _) = service();

    let err = service
        .register(&register_request("A@B.COM", "12345"))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Validation(_)));
    assert!(users.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn register_duplicate_email_conflicts() {
    let (service, _, _) = service();

    service
        .register(&register_request("a@b.com", "123456"))
        .await
        .unwrap();
    let err = service
        .register(&register_request("A@B.com", "different6"))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Conflict(_)));
}

#[tokio::test]
async fn login_round_trip() {
    let (service, _, _) = service();
    service
        .register(&register_request("a@b.com", "123456"))
        .await
        .unwrap();

    let session = service
        .login(&LoginRequest {
            email: Some("A@B.COM".to_string()),
            password: Some("123456".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(session.user.email, "a@b.com");

    let err = service
        .login(&LoginRequest {
            email: Some("a@b.com".to_string()),
            password: Some("wrong-password".to_string()),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Unauthenticated(_)));

    let err = service
        .login(&LoginRequest {
            email: Some("nobody@b.com".to_string()),
            password: Some("123456".to_string()),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Unauthenticated(_)));
}
