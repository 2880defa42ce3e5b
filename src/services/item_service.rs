use chrono::Utc;
use sea_orm::{Set, prelude::DateTimeWithTimeZone};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    db::dao::{BoxDao, DaoBase, ItemDao},
    db::entities::item,
    error::AppError,
    services::fields::{finite, nullable_date, optional_date, positive_scale, required_text},
};

pub const DEFAULT_POS_X: f64 = 50.0;
pub const DEFAULT_POS_Y: f64 = 100.0;
pub const DEFAULT_SCALE: f64 = 1.0;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub box_id: Option<Uuid>,
    pub name: Option<String>,
    pub note: Option<String>,
    pub image_path: Option<String>,
    #[serde(default, deserialize_with = "optional_date")]
    pub expiry_date: Option<DateTimeWithTimeZone>,
    pub pos_x: Option<f64>,
    pub pos_y: Option<f64>,
    pub scale: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    pub box_id: Option<Uuid>,
    pub name: Option<String>,
    pub note: Option<String>,
    pub image_path: Option<String>,
    #[serde(default, deserialize_with = "nullable_date")]
    pub expiry_date: Option<Option<DateTimeWithTimeZone>>,
    pub pos_x: Option<f64>,
    pub pos_y: Option<f64>,
    pub scale: Option<f64>,
}

#[derive(Clone)]
pub struct ItemService {
    items: ItemDao,
    boxes: BoxDao,
}

impl ItemService {
    pub fn new(items: ItemDao, boxes: BoxDao) -> Self {
        Self { items, boxes }
    }

    pub async fn create(&self, input: NewItem) -> Result<item::Model, AppError> {
        let box_id = input
            .box_id
            .ok_or_else(|| AppError::validation("boxId required"))?;
        let name = required_text(input.name, "Item name")?;
        let image_path = required_text(input.image_path, "imagePath")?;
        let pos_x = finite(input.pos_x.unwrap_or(DEFAULT_POS_X), "posX")?;
        let pos_y = finite(input.pos_y.unwrap_or(DEFAULT_POS_Y), "posY")?;
        let scale = positive_scale(input.scale.unwrap_or(DEFAULT_SCALE))?;
        self.require_box(&box_id).await?;

        let model = item::ActiveModel {
            box_id: Set(box_id),
            name: Set(name),
            note: Set(input.note.unwrap_or_default()),
            image_path: Set(image_path),
            expiry_date: Set(input.expiry_date),
            pos_x: Set(pos_x),
            pos_y: Set(pos_y),
            scale: Set(scale),
            ..Default::default()
        };

        let created = self.items.create(model).await?;
        tracing::info!(item_id = %created.id, box_id = %box_id, "item created");
        Ok(created)
    }

    pub async fn list_by_box(&self, box_id: &Uuid) -> Result<Vec<item::Model>, AppError> {
        Ok(self.items.list_by_box(box_id).await?)
    }

    pub async fn update(&self, id: &Uuid, patch: ItemPatch) -> Result<item::Model, AppError> {
        let name = patch
            .name
            .map(|name| required_text(Some(name), "Item name"))
            .transpose()?;
        let image_path = patch
            .image_path
            .map(|path| required_text(Some(path), "imagePath"))
            .transpose()?;
        let pos_x = patch.pos_x.map(|x| finite(x, "posX")).transpose()?;
        let pos_y = patch.pos_y.map(|y| finite(y, "posY")).transpose()?;
        let scale = patch.scale.map(positive_scale).transpose()?;
        if let Some(box_id) = patch.box_id.as_ref() {
            self.require_box(box_id).await?;
        }

        let updated = self
            .items
            .update(*id, move |active| {
                if let Some(box_id) = patch.box_id {
                    active.box_id = Set(box_id);
                }
                if let Some(name) = name {
                    active.name = Set(name);
                }
                if let Some(note) = patch.note {
                    active.note = Set(note);
                }
                if let Some(image_path) = image_path {
                    active.image_path = Set(image_path);
                }
                if let Some(expiry_date) = patch.expiry_date {
                    active.expiry_date = Set(expiry_date);
                }
                if let Some(pos_x) = pos_x {
                    active.pos_x = Set(pos_x);
                }
                if let Some(pos_y) = pos_y {
                    active.pos_y = Set(pos_y);
                }
                if let Some(scale) = scale {
                    active.scale = Set(scale);
                }
            })
            .await?;
        Ok(updated)
    }

    pub async fn delete(&self, id: &Uuid) -> Result<(), AppError> {
        self.items.delete(*id).await?;
        tracing::info!(item_id = %id, "item deleted");
        Ok(())
    }

    pub async fn search(&self, box_id: &Uuid, query: &str) -> Result<Vec<item::Model>, AppError> {
        Ok(self.items.search(box_id, query).await?)
    }

    pub async fn list_expired(&self, box_id: &Uuid) -> Result<Vec<item::Model>, AppError> {
        let now = Utc::now().fixed_offset();
        Ok(self.items.list_expired(box_id, now).await?)
    }

    pub async fn update_position(
        &self,
        id: &Uuid,
        pos_x: f64,
        pos_y: f64,
    ) -> Result<item::Model, AppError> {
        let pos_x = finite(pos_x, "posX")?;
        let pos_y = finite(pos_y, "posY")?;
        Ok(self
            .items
            .update(*id, move |active| {
                active.pos_x = Set(pos_x);
                active.pos_y = Set(pos_y);
            })
            .await?)
    }

    pub async fn update_scale(&self, id: &Uuid, scale: f64) -> Result<item::Model, AppError> {
        let scale = positive_scale(scale)?;
        Ok(self
            .items
            .update(*id, move |active| active.scale = Set(scale))
            .await?)
    }

    async fn require_box(&self, box_id: &Uuid) -> Result<(), AppError> {
        if !self.boxes.exists(*box_id).await? {
            return Err(AppError::not_found(format!("Box not found (id={box_id})")));
        }
        Ok(())
    }
}
