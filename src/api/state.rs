//! Application state for shared services

use std::sync::Arc;

use crate::domain::draw::{DrawError, DrawRepository, DrawRequest};
use crate::domain::team::TeamRepository;
use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::auth::JwtGenerator;
use crate::infrastructure::draw::{DrawResponse, DrawService};
use crate::infrastructure::user::{AuthError, PasswordHasher, RegisterRequest, UserService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub draw_service: Arc<dyn DrawServiceApi>,
    pub user_service: Arc<dyn UserServiceApi>,
    pub jwt_service: Arc<dyn JwtGenerator>,
}

/// Trait for draw service operations
#[async_trait::async_trait]
pub trait DrawServiceApi: Send + Sync {
    async fn perform_draw(&self, request: DrawRequest) -> Result<DrawResponse, DrawError>;
    async fn get_draw(&self, id: &str) -> Result<DrawResponse, DrawError>;
    async fn list_draws(&self) -> Result<Vec<DrawResponse>, DrawError>;
    async fn delete_draw(&self, id: &str) -> Result<(), DrawError>;
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceApi: Send + Sync {
    async fn register(&self, request: RegisterRequest) -> Result<User, AuthError>;
    async fn authenticate(&self, email: &str, password: &str)
        -> Result<Option<User>, DomainError>;
    async fn get(&self, id: &str) -> Result<Option<User>, DomainError>;
}

#[async_trait::async_trait]
impl<D, T> DrawServiceApi for DrawService<D, T>
where
    D: DrawRepository,
    T: TeamRepository,
{
    async fn perform_draw(&self, request: DrawRequest) -> Result<DrawResponse, DrawError> {
        DrawService::perform_draw(self, request).await
    }

    async fn get_draw(&self, id: &str) -> Result<DrawResponse, DrawError> {
        DrawService::get_draw(self, id).await
    }

    async fn list_draws(&self) -> Result<Vec<DrawResponse>, DrawError> {
        DrawService::list_draws(self).await
    }

    async fn delete_draw(&self, id: &str) -> Result<(), DrawError> {
        DrawService::delete_draw(self, id).await
    }
}

#[async_trait::async_trait]
impl<R, H> UserServiceApi for UserService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    async fn register(&self, request: RegisterRequest) -> Result<User, AuthError> {
        UserService::register(self, request).await
    }

    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        UserService::authenticate(self, email, password).await
    }

    async fn get(&self, id: &str) -> Result<Option<User>, DomainError> {
        UserService::get(self, id).await
    }
}
