use sea_orm::DatabaseConnection;

use crate::{
    db::dao::DaoContext,
    services::{
        auth_service::AuthService, box_service::BoxService, item_service::ItemService,
        upload_service::UploadService,
    },
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            daos: DaoContext::new(db),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db)
    }

    pub fn boxes(&self) -> BoxService {
        BoxService::new(self.daos.boxes(), self.daos.items())
    }

    pub fn items(&self) -> ItemService {
        ItemService::new(self.daos.items(), self.daos.boxes())
    }

    pub fn uploads(state: &AppState) -> UploadService {
        UploadService::new(&state.config.uploads.dir)
    }

    pub fn auth(state: &AppState) -> AuthService<'_> {
        AuthService::new(&state.config.auth, &state.jwt)
    }
}
