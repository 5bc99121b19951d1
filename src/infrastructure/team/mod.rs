//! Team catalog infrastructure

mod repository;
mod seed;

pub use repository::StoreTeamRepository;
pub use seed::CatalogSeeder;
