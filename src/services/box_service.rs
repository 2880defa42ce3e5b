use chrono::Utc;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    db::dao::{BoxDao, DaoBase, ItemDao},
    db::entities::storage_box,
    error::AppError,
    services::fields::{nullable, required_text},
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBox {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub box_type: Option<String>,
    pub is_public: Option<bool>,
    pub theme_color: Option<String>,
    pub cover_image: Option<String>,
}

/// Partial update. `None` leaves a field alone; nullable fields use `Some(None)` to clear.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub box_type: Option<String>,
    pub is_public: Option<bool>,
    #[serde(default, deserialize_with = "nullable")]
    pub theme_color: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub cover_image: Option<Option<String>>,
    pub item_count: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiredSummary {
    pub has_expired: bool,
    pub count: u64,
}

#[derive(Clone)]
pub struct BoxService {
    boxes: BoxDao,
    items: ItemDao,
}

impl BoxService {
    pub fn new(boxes: BoxDao, items: ItemDao) -> Self {
        Self { boxes, items }
    }

    /// Counters start at zero whatever the caller sent.
    pub async fn create(&self, input: NewBox) -> Result<storage_box::Model, AppError> {
        let name = required_text(input.name, "Box name")?;
        let model = storage_box::ActiveModel {
            name: Set(name),
            description: Set(input.description.unwrap_or_default()),
            box_type: Set(input.box_type.unwrap_or_default()),
            is_public: Set(input.is_public.unwrap_or(false)),
            theme_color: Set(input.theme_color),
            cover_image: Set(input.cover_image),
            item_count: Set(0),
            has_expired_items: Set(false),
            ..Default::default()
        };

        let created = self.boxes.create(model).await?;
        tracing::info!(box_id = %created.id, "box created");
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<storage_box::Model>, AppError> {
        Ok(self.boxes.list_boxes().await?)
    }

    pub async fn require(&self, id: &Uuid) -> Result<storage_box::Model, AppError> {
        Ok(self.boxes.find_by_id(*id).await?)
    }

    pub async fn update(&self, id: &Uuid, patch: BoxPatch) -> Result<storage_box::Model, AppError> {
        let name = match patch.name {
            Some(name) => Some(required_text(Some(name), "Box name")?),
            None => None,
        };

        let updated = self
            .boxes
            .update(*id, move |active| {
                if let Some(name) = name {
                    active.name = Set(name);
                }
                if let Some(description) = patch.description {
                    active.description = Set(description);
                }
                if let Some(box_type) = patch.box_type {
                    active.box_type = Set(box_type);
                }
                if let Some(is_public) = patch.is_public {
                    active.is_public = Set(is_public);
                }
                if let Some(theme_color) = patch.theme_color {
                    active.theme_color = Set(theme_color);
                }
                if let Some(cover_image) = patch.cover_image {
                    active.cover_image = Set(cover_image);
                }
                if let Some(item_count) = patch.item_count {
                    active.item_count = Set(item_count);
                }
            })
            .await?;
        Ok(updated)
    }

    pub async fn update_theme(
        &self,
        id: &Uuid,
        theme_color: Option<String>,
    ) -> Result<storage_box::Model, AppError> {
        Ok(self
            .boxes
            .update(*id, move |active| active.theme_color = Set(theme_color))
            .await?)
    }

    pub async fn update_cover(
        &self,
        id: &Uuid,
        cover_image: Option<String>,
    ) -> Result<storage_box::Model, AppError> {
        Ok(self
            .boxes
            .update(*id, move |active| active.cover_image = Set(cover_image))
            .await?)
    }

    /// Deletes the box and its items together; returns the number of items removed.
    pub async fn delete(&self, id: &Uuid) -> Result<u64, AppError> {
        let removed = self.boxes.delete_with_items(id).await?;
        tracing::info!(box_id = %id, items_removed = removed, "box deleted");
        Ok(removed)
    }

    /// An item is expired when its expiry date is strictly before now.
    /// The result is written back to the box's `has_expired_items` flag.
    pub async fn recompute_expired_flag(&self, id: &Uuid) -> Result<ExpiredSummary, AppError> {
        self.require(id).await?;

        let now = Utc::now().fixed_offset();
        let count = self.items.count_expired(id, now).await?;
        let has_expired = count > 0;

        self.boxes
            .update(*id, move |active| active.has_expired_items = Set(has_expired))
            .await?;
        tracing::debug!(box_id = %id, count, "expired flag recomputed");

        Ok(ExpiredSummary { has_expired, count })
    }
}
