use sea_orm::prelude::DateTimeWithTimeZone;
use serde::Serialize;
use uuid::Uuid;

use crate::db::entities::{item, storage_box};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub box_type: String,
    pub is_public: bool,
    pub theme_color: Option<String>,
    pub cover_image: Option<String>,
    pub item_count: i32,
    pub has_expired_items: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl From<storage_box::Model> for BoxResponse {
    fn from(model: storage_box::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            box_type: model.box_type,
            is_public: model.is_public,
            theme_color: model.theme_color,
            cover_image: model.cover_image,
            item_count: model.item_count,
            has_expired_items: model.has_expired_items,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: Uuid,
    pub box_id: Uuid,
    pub name: String,
    pub note: String,
    pub image_path: String,
    pub expiry_date: Option<DateTimeWithTimeZone>,
    pub pos_x: f64,
    pub pos_y: f64,
    pub scale: f64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl From<item::Model> for ItemResponse {
    fn from(model: item::Model) -> Self {
        Self {
            id: model.id,
            box_id: model.box_id,
            name: model.name,
            note: model.note,
            image_path: model.image_path,
            expiry_date: model.expiry_date,
            pos_x: model.pos_x,
            pos_y: model.pos_y,
            scale: model.scale,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub fn items_response(items: Vec<item::Model>) -> Vec<ItemResponse> {
    items.into_iter().map(ItemResponse::from).collect()
}
