use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait as _, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::data::interface::{
    comment::{CommentRecord, CommentStore},
    playlist::{NewPlaylist, PlaylistRecord, PlaylistStore},
    user::AuthContext,
};
use crate::data::models::{comment, playlist, playlist_video, user_profile};

/// `PlaylistStore` and `CommentStore` over a sea-orm connection.
#[derive(Debug, Clone)]
pub struct SqlStore {
    db: DatabaseConnection,
}

fn parse_playlist_id(id: &str) -> Result<i64> {
    id.parse::<i64>()
        .map_err(|_| anyhow::anyhow!("Invalid playlist id: {}", id))
}

impl SqlStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Record the public profile id of an auth uid.
    pub async fn register_user(&self, uid: &str, user_id: &str) -> Result<()> {
        user_profile::Entity::insert(user_profile::ActiveModel::new(
            uid.to_string(),
            user_id.to_string(),
        ))
        .exec_without_returning(&self.db)
        .await?;
        Ok(())
    }

    /// Read a playlist back with its videos in track order.
    pub async fn find_playlist(&self, id: &str) -> Result<Option<PlaylistRecord>> {
        let id = parse_playlist_id(id)?;
        let Some(model) = playlist::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let videos = playlist_video::Entity::find()
            .filter(playlist_video::Column::PlaylistId.eq(id))
            .order_by_asc(playlist_video::Column::Position)
            .all(&self.db)
            .await?;

        Ok(Some(PlaylistRecord {
            id: model.id.to_string(),
            owner_uid: model.owner_uid,
            title: model.title,
            tags: model.tags.0,
            video_list: videos.into_iter().map(Into::into).collect(),
            is_private: model.is_private,
        }))
    }

    /// Comments of a playlist, oldest first.
    pub async fn comments_of(&self, playlist_id: &str) -> Result<Vec<CommentRecord>> {
        let id = parse_playlist_id(playlist_id)?;
        let models = comment::Entity::find()
            .filter(comment::Column::PlaylistId.eq(id))
            .order_by_asc(comment::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models
            .into_iter()
            .map(|m| CommentRecord {
                id: m.id.to_string(),
                playlist_id: m.playlist_id.to_string(),
                author_uid: m.author_uid,
                text: m.text,
            })
            .collect())
    }
}

#[async_trait]
impl PlaylistStore for SqlStore {
    async fn create_playlist(&self, owner: &AuthContext, new: &NewPlaylist) -> Result<String> {
        // playlist row and tracks land together or not at all
        let txn = self.db.begin().await?;
        let result = playlist::Entity::insert(playlist::ActiveModel::new(
            owner.uid.clone(),
            new.title.clone(),
            new.tags.clone(),
            new.is_private,
        ))
        .exec(&txn)
        .await?;
        let playlist_id = result.last_insert_id;

        if !new.video_list.is_empty() {
            let videos = new
                .video_list
                .iter()
                .enumerate()
                .map(|(position, video)| {
                    playlist_video::ActiveModel::new(playlist_id, position as i64, video)
                });
            playlist_video::Entity::insert_many(videos)
                .exec_without_returning(&txn)
                .await?;
        }
        txn.commit().await?;

        log::debug!("Inserted playlist {} for {}", playlist_id, owner.uid);
        Ok(playlist_id.to_string())
    }

    async fn user_id_for_uid(&self, uid: &str) -> Result<Option<String>> {
        let model = user_profile::Entity::find_by_id(uid.to_string())
            .one(&self.db)
            .await?;
        Ok(model.map(|m| m.user_id))
    }
}

#[async_trait]
impl CommentStore for SqlStore {
    async fn create_comment(
        &self,
        author: &AuthContext,
        playlist_id: &str,
        text: &str,
    ) -> Result<String> {
        let result = comment::Entity::insert(comment::ActiveModel::new(
            parse_playlist_id(playlist_id)?,
            author.uid.clone(),
            text.to_string(),
        ))
        .exec(&self.db)
        .await?;
        Ok(result.last_insert_id.to_string())
    }
}
