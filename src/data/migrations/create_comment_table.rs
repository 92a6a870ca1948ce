use async_trait::async_trait;
use sea_orm_migration::{
    prelude::*,
    schema::{big_integer, pk_auto, string, text},
};

use crate::data::models::{comment::Column, playlist};

use super::create_playlist_table::PlaylistTable;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CommentTable::Comment)
                    .col(pk_auto(Column::Id))
                    .col(big_integer(Column::PlaylistId))
                    .col(string(Column::AuthorUid))
                    .col(text(Column::Text))
                    .foreign_key(
                        ForeignKey::create()
                            .from(CommentTable::Comment, Column::PlaylistId)
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
                    .table(CommentTable::Comment)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum CommentTable {
    Comment,
}
