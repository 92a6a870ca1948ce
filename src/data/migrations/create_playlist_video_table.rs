use async_trait::async_trait;
use sea_orm_migration::{
    prelude::*,
    schema::{big_integer, string},
};

use crate::data::models::{playlist, playlist_video::Column};

use super::create_playlist_table::PlaylistTable;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlaylistVideoTable::PlaylistVideo)
                    .col(big_integer(Column::PlaylistId))
                    .col(big_integer(Column::Position))
                    .col(string(Column::Title))
                    .col(string(Column::ChannelTitle))
                    .col(string(Column::Url))
                    .col(string(Column::Thumbnail))
                    .primary_key(
                        Index::create()
                            .table(PlaylistVideoTable::PlaylistVideo)
                            .col(Column::PlaylistId)
                            .col(Column::Position),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(PlaylistVideoTable::PlaylistVideo, Column::PlaylistId)
                            .to(PlaylistTable::Playlist, playlist::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(PlaylistVideoTable::PlaylistVideo)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum PlaylistVideoTable {
    #[sea_orm(iden = "playlist_video")]
    PlaylistVideo,
}
