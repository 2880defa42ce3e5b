pub trait HasCreatedAtColumn: sea_orm::EntityTrait {
    fn created_at_column() -> Self::Column;
}

pub trait HasIdActiveModel {
    fn set_id(&mut self, id: uuid::Uuid);
}

pub trait TimestampedActiveModel {
    fn set_created_at(&mut self, ts: sea_orm::entity::prelude::DateTimeWithTimeZone);
    fn set_updated_at(&mut self, ts: sea_orm::entity::prelude::DateTimeWithTimeZone);
}

/// Wires an entity with `id`, `created_at` and `updated_at` columns into the DAO traits.
#[macro_export]
macro_rules! impl_base_entity {
    ($active_model:ident, $entity:ident) => {
        impl $crate::db::dao::base_traits::HasIdActiveModel for $active_model {
            fn set_id(&mut self, id: ::uuid::Uuid) {
                self.id = ::sea_orm::ActiveValue::Set(id);
            }
        }

        impl $crate::db::dao::base_traits::TimestampedActiveModel for $active_model {
            fn set_created_at(&mut self, ts: ::sea_orm::entity::prelude::DateTimeWithTimeZone) {
                self.created_at = ::sea_orm::ActiveValue::Set(ts);
            }

            fn set_updated_at(&mut self, ts: ::sea_orm::entity::prelude::DateTimeWithTimeZone) {
                self.updated_at = ::sea_orm::ActiveValue::Set(ts);
            }
        }

        impl $crate::db::dao::base_traits::HasCreatedAtColumn for $entity {
            fn created_at_column() -> Column {
                Column::CreatedAt
            }
        }
    };
}
