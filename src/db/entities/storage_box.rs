use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "boxes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(default_value = "")]
    pub description: String,
    #[sea_orm(default_value = "")]
    pub box_type: String,
    #[sea_orm(default_value = false)]
    pub is_public: bool,
    pub theme_color: Option<String>,
    pub cover_image: Option<String>,
    #[sea_orm(default_value = 0)]
    pub item_count: i32,
    #[sea_orm(default_value = false)]
    pub has_expired_items: bool,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub updated_at: DateTimeWithTimeZone,
    #[sea_orm(has_many)]
    pub items: HasMany<super::item::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}

crate::impl_base_entity!(ActiveModel, Entity);
