use sea_orm::{entity::prelude::*, Set};

use crate::data::interface::playlist::VideoRef;

/// One track of a stored playlist; `position` keeps the track order.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "playlist_video")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub playlist_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub position: i64,
    pub title: String,
    pub channel_title: String,
    pub url: String,
    pub thumbnail: String,
}

impl ActiveModel {
    pub fn new(playlist_id: i64, position: i64, video: &VideoRef) -> Self {
        Self {
            playlist_id: Set(playlist_id),
            position: Set(position),
            title: Set(video.title.clone()),
            channel_title: Set(video.channel_title.clone()),
            url: Set(video.url.clone()),
            thumbnail: Set(video.thumbnail.clone()),
        }
    }
}

impl From<Model> for VideoRef {
    fn from(value: Model) -> Self {
        Self {
            title: value.title,
            channel_title: value.channel_title,
            url: value.url,
            thumbnail: value.thumbnail,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Playlist,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Playlist => Entity::belongs_to(super::playlist::Entity)
                .from(Column::PlaylistId)
                .to(super::playlist::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<super::playlist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Playlist.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
