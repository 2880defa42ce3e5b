use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    prelude::DateTimeWithTimeZone,
};
use uuid::Uuid;

use super::{DaoBase, DaoResult};
use crate::db::entities::item;
use crate::db::entities::prelude::Item;

#[derive(Clone)]
pub struct ItemDao {
    db: DatabaseConnection,
}

impl DaoBase for ItemDao {
    type Entity = Item;
    const ENTITY_NAME: &'static str = "Item";

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl ItemDao {
    pub async fn list_by_box(&self, box_id: &Uuid) -> DaoResult<Vec<item::Model>> {
        let box_id = *box_id;
        self.find_all(move |query| query.filter(item::Column::BoxId.eq(box_id)))
            .await
    }

    /// Case-insensitive substring match against name OR note, scoped to one box.
    /// Matching runs in Rust: SQLite's `LOWER()` only folds ASCII.
    pub async fn search(&self, box_id: &Uuid, needle: &str) -> DaoResult<Vec<item::Model>> {
        let needle = needle.to_lowercase();
        let items = self.list_by_box(box_id).await?;
        Ok(items
            .into_iter()
            .filter(|item| {
                contains_folded(&item.name, &needle) || contains_folded(&item.note, &needle)
            })
            .collect())
    }

    pub async fn list_expired(
        &self,
        box_id: &Uuid,
        now: DateTimeWithTimeZone,
    ) -> DaoResult<Vec<item::Model>> {
        let box_id = *box_id;
        self.find_all(move |query| {
            query
                .filter(item::Column::BoxId.eq(box_id))
                .filter(item::Column::ExpiryDate.lt(now))
        })
        .await
    }

    pub async fn count_expired(&self, box_id: &Uuid, now: DateTimeWithTimeZone) -> DaoResult<u64> {
        Ok(Item::find()
            .filter(item::Column::BoxId.eq(*box_id))
            .filter(item::Column::ExpiryDate.lt(now))
            .count(&self.db)
            .await?)
    }
}

/// `needle` must already be lowercased.
fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
