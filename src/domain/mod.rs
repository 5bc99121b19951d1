//! Domain layer - Core business logic and entities

pub mod draw;
pub mod error;
pub mod storage;
pub mod team;
pub mod user;

pub use draw::{
    DrawEngine, DrawError, DrawRecord, DrawRejection, DrawRepository, DrawRequest, DrawSettings,
    EngineError, Group, GroupTeam,
};
pub use error::DomainError;
pub use storage::{Document, DocumentId, DocumentStore, RecordStatus};
pub use team::{Country, Team, TeamId, TeamRepository};
pub use user::{User, UserId, UserRepository};
