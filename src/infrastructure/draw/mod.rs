//! Draw infrastructure: store-backed repository and the orchestrating service

mod repository;
mod service;

pub use repository::StoreDrawRepository;
pub use service::{DrawResponse, DrawService, GroupView, TeamView};
