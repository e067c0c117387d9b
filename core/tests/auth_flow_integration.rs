//! End-to-end flow through the public API: register, follow the emailed
//! verification link, then log in.

use std::sync::Arc;

use cf_core::repositories::MockUserRepository;
use cf_core::services::auth::{AuthService, AuthServiceConfig, RegisterRequest};
use cf_core::services::encryption::AesGcmTokenEncryption;
use cf_core::services::mailer::MockMailer;
use cf_core::services::token::TokenSigner;
use cf_shared::config::JwtConfig;

struct TestApp {
    service: AuthService<MockUserRepository, MockMailer, AesGcmTokenEncryption>,
    mailer: Arc<MockMailer>,
}

fn test_app() -> TestApp {
    let repo = Arc::new(MockUserRepository::new());
    let mailer = Arc::new(MockMailer::new());
    let signer = Arc::new(TokenSigner::new(&JwtConfig {
        secret: "integration-test-secret".to_string(),
        default_expiry: 86_400,
        issuer: "campus-flow".to_string(),
    }));
    let encryption = Arc::new(AesGcmTokenEncryption::new(&[11u8; 32]).unwrap());

    let service = AuthService::new(
        repo,
        Arc::clone(&mailer),
        signer,
        encryption,
        AuthServiceConfig {
            frontend_url: "https://app.campusflow.example".to_string(),
            bcrypt_cost: 4,
        },
    );

    TestApp { service, mailer }
}

fn token_from_link(link: &str) -> &str {
    link.split("token=").nth(1).expect("link carries a token")
}

#[tokio::test]
async fn test_register_verify_login_flow() {
    let app = test_app();

    // Register
    let response = app
        .service
        .register(RegisterRequest {
            email: "a@b.com".to_string(),
            username: "ab".to_string(),
            phone: Some("+250700000000".to_string()),
            password: "Secret123!".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Byron".to_string(),
        })
        .await
        .unwrap();

    assert!(response.status);
    assert_eq!(response.data.user.email, "a@b.com");

    // The envelope keeps the uniform shape on the wire
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["status"], true);
    assert_eq!(json["data"]["user"]["email"], "a@b.com");
    assert_eq!(json["meta"], serde_json::json!({}));
    assert!(json["data"]["user"].get("password_hash").is_none());

    // Login is gated until the emailed link is consumed
    assert!(app.service.login("a@b.com", "Secret123!").await.is_err());

    // Follow the verification link
    let link = app.mailer.last_link().unwrap();
    assert!(link.starts_with("https://app.campusflow.example/verify-email?token="));
    let verified = app
        .service
        .verify_email(token_from_link(&link))
        .await
        .unwrap();
    assert!(verified.status);
    assert!(verified.message.contains("verified"));

    // Login
    let login = app.service.login("a@b.com", "Secret123!").await.unwrap();
    assert!(login.status);
    assert!(!login.data.access_token.is_empty());

    let login_json = serde_json::to_value(&login).unwrap();
    assert!(login_json["data"]["accessToken"].is_string());
}

#[tokio::test]
async fn test_full_password_reset_journey() {
    let app = test_app();

    app.service
        .register(RegisterRequest {
            email: "grace@hopper.dev".to_string(),
            username: "ghopper".to_string(),
            phone: None,
            password: "Cobol1959!".to_string(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
        })
        .await
        .unwrap();
    let verify_link = app.mailer.last_link().unwrap();
    app.service
        .verify_email(token_from_link(&verify_link))
        .await
        .unwrap();

    // Request a reset, follow the link, set a new password
    app.service.forgot_password("grace@hopper.dev").await.unwrap();
    let reset_link = app.mailer.last_link().unwrap();
    assert!(reset_link.starts_with("https://app.campusflow.example/reset-password?token="));

    app.service
        .reset_password(token_from_link(&reset_link), "Fortran1957!")
        .await
        .unwrap();

    assert!(app
        .service
        .login("grace@hopper.dev", "Cobol1959!")
        .await
        .is_err());
    assert!(app
        .service
        .login("grace@hopper.dev", "Fortran1957!")
        .await
        .is_ok());
}
