use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(indexed)]
    pub box_id: Uuid,
    pub name: String,
    #[sea_orm(default_value = "")]
    pub note: String,
    pub image_path: String,
    pub expiry_date: Option<DateTimeWithTimeZone>,
    pub pos_x: f64,
    pub pos_y: f64,
    pub scale: f64,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub updated_at: DateTimeWithTimeZone,
    // Deletion cascades in the box DAO's transaction, not in the schema.
    #[sea_orm(belongs_to, from = "box_id", to = "id")]
    pub storage_box: HasOne<super::storage_box::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}

crate::impl_base_entity!(ActiveModel, Entity);
