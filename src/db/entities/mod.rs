#[allow(unused_imports)]
pub mod prelude {
    pub use super::item::Entity as Item;
    pub use super::storage_box::Entity as StorageBox;
}

pub mod item;
pub mod storage_box;
