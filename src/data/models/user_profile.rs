use sea_orm::{entity::prelude::*, Set};

/// Maps an auth uid to the public id used in profile urls.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_profile")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uid: String,
    pub user_id: String,
}

impl ActiveModel {
    pub fn new(uid: String, user_id: String) -> Self {
        Self {
            uid: Set(uid),
            user_id: Set(user_id),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
