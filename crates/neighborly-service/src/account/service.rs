//! Account registration and login.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use neighborly_auth::jwt::IssuedToken;
use neighborly_auth::{JwtEncoder, LoginThrottle, PasswordHasher};
use neighborly_core::config::auth::AuthConfig;
use neighborly_core::error::AppError;
use neighborly_core::result::AppResult;
use neighborly_database::Store;
use neighborly_entity::user::{CreateUser, User, UserType};

/// Input for registering a new account.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterInput {
    /// Email address, used for login.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Display name.
    pub display_name: String,
    /// Participation type.
    #[serde(default)]
    pub user_type: UserType,
    /// Neighborhood label (optional).
    pub neighborhood: Option<String>,
}

/// Input for logging in.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginInput {
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// The authenticated user together with their fresh access token.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    /// The user record (password hash never serialized).
    pub user: User,
    /// The issued access token.
    pub token: IssuedToken,
}

/// Registers users and issues access tokens.
#[derive(Clone)]
pub struct AccountService {
    store: Store,
    hasher: PasswordHasher,
    encoder: JwtEncoder,
    throttle: Arc<LoginThrottle>,
    config: AuthConfig,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(store: Store, config: AuthConfig) -> Self {
        Self {
            hasher: PasswordHasher::new(),
            encoder: JwtEncoder::new(&config),
            throttle: Arc::new(LoginThrottle::new(&config)),
            store,
            config,
        }
    }

    /// Register a new account and log it in.
    pub async fn register(&self, input: RegisterInput) -> AppResult<AuthResponse> {
        let email = input.email.trim().to_lowercase();
        if !email.contains('@') {
            return Err(AppError::validation("A valid email address is required"));
        }
        if input.password.chars().count() < self.config.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.config.password_min_length
            )));
        }
        if input.display_name.trim().is_empty() {
            return Err(AppError::validation("Display name is required"));
        }

        let password_hash = self.hasher.hash_password(&input.password)?;
        let user = self
            .store
            .users
            .create(&CreateUser {
                email,
                password_hash,
                display_name: input.display_name.trim().to_string(),
                user_type: input.user_type,
                neighborhood: input.neighborhood,
            })
            .await?;
        let token = self.encoder.issue(&user)?;

        info!(user_id = %user.id, "Account registered");
        Ok(AuthResponse { user, token })
    }

    /// Authenticate with email and password.
    ///
    /// Unknown emails and wrong passwords produce the same error so the
    /// response does not reveal which accounts exist. Both count toward
    /// the login throttle.
    pub async fn login(&self, input: LoginInput) -> AppResult<AuthResponse> {
        let email = input.email.trim().to_lowercase();
        self.throttle.check(&email)?;

        let user = match self.store.users.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                self.throttle.record_failure(&email);
                return Err(AppError::authentication("Invalid email or password"));
            }
        };
        if !self.hasher.verify_password(&input.password, &user.password_hash)? {
            self.throttle.record_failure(&email);
            return Err(AppError::authentication("Invalid email or password"));
        }

        self.throttle.record_success(&email);
        let token = self.encoder.issue(&user)?;
        info!(user_id = %user.id, "Login succeeded");
        Ok(AuthResponse { user, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neighborly_core::error::ErrorKind;

    fn service() -> AccountService {
        AccountService::new(Store::memory(), AuthConfig::default())
    }

    fn register_input(email: &str) -> RegisterInput {
        RegisterInput {
            email: email.to_string(),
            password: "correct horse battery".into(),
            display_name: "Ana".into(),
            user_type: UserType::Both,
            neighborhood: Some("Riverside".into()),
        }
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let svc = service();
        let registered = svc.register(register_input("Ana@Example.com")).await.unwrap();
        // Emails are normalized to lowercase.
        assert_eq!(registered.user.email, "ana@example.com");
        assert!(!registered.token.token.is_empty());

        let logged_in = svc
            .login(LoginInput {
                email: "ana@example.com".into(),
                password: "correct horse battery".into(),
            })
            .await
            .unwrap();
        assert_eq!(logged_in.user.id, registered.user.id);
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let svc = service();
        svc.register(register_input("ana@example.com")).await.unwrap();
        let err = svc
            .register(register_input("ana@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_look_alike() {
        let svc = service();
        svc.register(register_input("ana@example.com")).await.unwrap();

        let wrong = svc
            .login(LoginInput {
                email: "ana@example.com".into(),
                password: "nope".into(),
            })
            .await
            .unwrap_err();
        let unknown = svc
            .login(LoginInput {
                email: "ghost@example.com".into(),
                password: "nope".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(wrong.kind, ErrorKind::Authentication);
        assert_eq!(unknown.kind, ErrorKind::Authentication);
        assert_eq!(wrong.message, unknown.message);
    }

    #[tokio::test]
    async fn test_throttle_kicks_in() {
        let svc = AccountService::new(
            Store::memory(),
            AuthConfig {
                max_failed_attempts: 2,
                ..AuthConfig::default()
            },
        );
        svc.register(register_input("ana@example.com")).await.unwrap();

        for _ in 0..2 {
            let err = svc
                .login(LoginInput {
                    email: "ana@example.com".into(),
                    password: "nope".into(),
                })
                .await
                .unwrap_err();
            assert_eq!(err.kind, ErrorKind::Authentication);
        }
        let err = svc
            .login(LoginInput {
                email: "ana@example.com".into(),
                password: "correct horse battery".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::RateLimit);
    }

    #[tokio::test]
    async fn test_weak_password_rejected() {
        let svc = service();
        let err = svc
            .register(RegisterInput {
                password: "short".into(),
                ..register_input("ana@example.com")
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_invalid_email_rejected() {
        let svc = service();
        let err = svc
            .register(RegisterInput {
                email: "not-an-email".into(),
                ..register_input("ana@example.com")
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }
}
