use sea_orm::DatabaseConnection;

use super::{BoxDao, DaoBase, ItemDao};

#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn boxes(&self) -> BoxDao {
        DaoBase::new(&self.db)
    }

    pub fn items(&self) -> ItemDao {
        DaoBase::new(&self.db)
    }
}
