pub mod base;
pub mod base_traits;
pub mod box_dao;
mod context;
pub mod error;
pub mod item_dao;

pub use base::{DaoBase, Page};
pub use base_traits::{HasCreatedAtColumn, HasIdActiveModel, TimestampedActiveModel};
pub use box_dao::BoxDao;
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use item_dao::ItemDao;
