//! User service for registration and authentication

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::user::{
    validate_email, validate_password, User, UserId, UserRepository, UserValidationError,
};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// Request for registering a new user
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Failures of registration and login
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("email is already registered")]
    EmailAlreadyRegistered,

    #[error(transparent)]
    Validation(#[from] UserValidationError),

    #[error(transparent)]
    Storage(#[from] DomainError),
}

impl AuthError {
    /// Stable message key for the response envelope
    pub fn key(&self) -> &'static str {
        match self {
            Self::EmailAlreadyRegistered => "EmailAlreadyRegistered",
            Self::Validation(_) => "InvalidRegistration",
            Self::Storage(_) => "InternalError",
        }
    }
}

/// User service for registration and authentication
#[derive(Debug)]
pub struct UserService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository, H: PasswordHasher> UserService<R, H> {
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Register a new user
    pub async fn register(&self, request: RegisterRequest) -> Result<User, AuthError> {
        validate_email(&request.email)?;
        validate_password(&request.password)?;

        if self
            .repository
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(AuthError::EmailAlreadyRegistered);
        }

        let password_hash = self.hasher.hash(&request.password)?;

        let user = User::new(
            request.email,
            password_hash,
            request.first_name,
            request.last_name,
        );
        let user = self.repository.create(user).await?;

        info!(user_id = %user.id(), "User registered");
        Ok(user)
    }

    /// Authenticate with email and password.
    ///
    /// Returns None for an unknown email, an inactive account or a wrong
    /// password; the three cases are indistinguishable to the caller.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        let user = match self.repository.find_by_email(email).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        if !user.is_active() {
            return Ok(None);
        }

        if !self.hasher.verify(password, user.password_hash()) {
            return Ok(None);
        }

        Ok(Some(user))
    }

    /// Get a user by id
    pub async fn get(&self, id: &str) -> Result<Option<User>, DomainError> {
        let user_id = match UserId::parse(id) {
            Some(user_id) => user_id,
            None => return Ok(None),
        };
        self.repository.find_by_id(&user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryDocumentStore;
    use crate::infrastructure::user::password::Argon2Hasher;
    use crate::infrastructure::user::repository::StoreUserRepository;

    type TestService = UserService<StoreUserRepository<InMemoryDocumentStore<User>>, Argon2Hasher>;

    fn service() -> TestService {
        let repository = Arc::new(StoreUserRepository::new(Arc::new(
            InMemoryDocumentStore::new(),
        )));
        UserService::new(repository, Arc::new(Argon2Hasher::new()))
    }

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: "secure_password".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_and_authenticate() {
        let service = service();

        let user = service
            .register(register_request("john@example.com"))
            .await
            .unwrap();
        assert_eq!(user.email(), "john@example.com");
        assert_ne!(user.password_hash(), "secure_password");

        let authenticated = service
            .authenticate("john@example.com", "secure_password")
            .await
            .unwrap();
        assert!(authenticated.is_some());
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let service = service();

        service
            .register(register_request("john@example.com"))
            .await
            .unwrap();

        let result = service.register(register_request("john@example.com")).await;
        assert!(matches!(result, Err(AuthError::EmailAlreadyRegistered)));
    }

    #[tokio::test]
    async fn test_register_invalid_email() {
        let service = service();

        let result = service.register(register_request("not-an-email")).await;
        assert!(matches!(result, Err(AuthError::Validation(_))));
    }

    #[tokio::test]
    async fn test_register_short_password() {
        let service = service();

        let mut request = register_request("john@example.com");
        request.password = "short".to_string();

        let result = service.register(request).await;
        assert!(matches!(
            result,
            Err(AuthError::Validation(UserValidationError::PasswordTooShort))
        ));
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let service = service();

        service
            .register(register_request("john@example.com"))
            .await
            .unwrap();

        let authenticated = service
            .authenticate("john@example.com", "wrong_password")
            .await
            .unwrap();
        assert!(authenticated.is_none());
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email() {
        let service = service();

        let authenticated = service
            .authenticate("nobody@example.com", "whatever_password")
            .await
            .unwrap();
        assert!(authenticated.is_none());
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let service = service();

        let user = service
            .register(register_request("john@example.com"))
            .await
            .unwrap();

        let found = service.get(user.id().as_str()).await.unwrap();
        assert!(found.is_some());

        let missing = service.get("not-a-uuid").await.unwrap();
        assert!(missing.is_none());
    }
}
