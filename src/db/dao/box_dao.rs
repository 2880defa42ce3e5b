use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait};
use uuid::Uuid;

use super::{DaoBase, DaoResult};
use crate::db::entities::prelude::{Item, StorageBox};
use crate::db::entities::{item, storage_box};

#[derive(Clone)]
pub struct BoxDao {
    db: DatabaseConnection,
}

impl DaoBase for BoxDao {
    type Entity = StorageBox;
    const ENTITY_NAME: &'static str = "Box";

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl BoxDao {
    pub async fn list_boxes(&self) -> DaoResult<Vec<storage_box::Model>> {
        self.find_all(|query| query).await
    }

    /// Removes the box and every item that points at it in one transaction.
    /// Returns how many items went with it.
    pub async fn delete_with_items(&self, id: &Uuid) -> DaoResult<u64> {
        let txn = self.db.begin().await?;

        if StorageBox::find_by_id(*id).one(&txn).await?.is_none() {
            return Err(Self::not_found(*id));
        }

        let items = Item::delete_many()
            .filter(item::Column::BoxId.eq(*id))
            .exec(&txn)
            .await?;
        StorageBox::delete_by_id(*id).exec(&txn).await?;

        txn.commit().await?;
        Ok(items.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use uuid::Uuid;

    use super::BoxDao;
    use crate::db::dao::{DaoBase, DaoLayerError};
    use crate::db::entities::storage_box;

    #[tokio::test]
    async fn delete_with_items_reports_missing_box() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<storage_box::Model>::new()])
            .into_connection();
        let dao = BoxDao::new(&db);

        let err = dao
            .delete_with_items(&id)
            .await
            .expect_err("missing box should fail");
        assert!(matches!(err, DaoLayerError::NotFound { entity: "Box", id: missing } if missing == id));
    }

    #[tokio::test]
    async fn find_by_id_maps_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("lookup failed".to_string())])
            .into_connection();
        let dao = BoxDao::new(&db);

        let err = dao
            .find_by_id(Uuid::new_v4())
            .await
            .expect_err("lookup should fail");
        assert!(matches!(err, DaoLayerError::Db(_)));
    }

    #[tokio::test]
    async fn find_rejects_oversized_pages() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let dao = BoxDao::new(&db);

        let err = dao
            .find(1, BoxDao::MAX_PAGE_SIZE + 1, |query| query)
            .await
            .expect_err("page size above the cap should fail");
        assert!(matches!(err, DaoLayerError::InvalidPagination { page: 1, .. }));
    }
}
