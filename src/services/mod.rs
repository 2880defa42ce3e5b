pub mod auth_service;
pub mod box_service;
pub mod context;
pub mod fields;
pub mod item_service;
pub mod upload_service;

pub use context::ServiceContext;
