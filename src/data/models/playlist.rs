use sea_orm::{entity::prelude::*, ActiveValue::NotSet, FromJsonQueryResult, Set};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct TagList(pub Vec<String>);

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "playlist")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i64,
    pub owner_uid: String,
    pub title: String,
    pub tags: TagList,
    pub is_private: bool,
}

impl ActiveModel {
    pub fn new(owner_uid: String, title: String, tags: Vec<String>, is_private: bool) -> Self {
        Self {
            id: NotSet,
            owner_uid: Set(owner_uid),
            title: Set(title),
            tags: Set(TagList(tags)),
            is_private: Set(is_private),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    PlaylistVideo,
    Comment,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::PlaylistVideo => Entity::has_many(super::playlist_video::Entity)
                .from(Column::Id)
                .to(super::playlist_video::Column::PlaylistId)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
            Relation::Comment => Entity::has_many(super::comment::Entity)
                .from(Column::Id)
                .to(super::comment::Column::PlaylistId)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<super::playlist_video::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlaylistVideo.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
