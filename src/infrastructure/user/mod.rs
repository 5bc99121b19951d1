//! User infrastructure: password hashing, repository and auth service

mod password;
mod repository;
mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use repository::StoreUserRepository;
pub use service::{AuthError, RegisterRequest, UserService};
