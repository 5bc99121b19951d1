//! API middleware

mod logging;
mod user_auth;

pub use logging::logging_middleware;
pub use user_auth::RequireUser;
