use async_trait::async_trait;
use sea_orm_migration::{
    prelude::*,
    schema::{boolean, json, pk_auto, string},
};

use crate::data::models::playlist::Column;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlaylistTable::Playlist)
                    .col(pk_auto(Column::Id))
                    .col(string(Column::OwnerUid))
                    .col(string(Column::Title))
                    .col(json(Column::Tags))
                    .col(boolean(Column::IsPrivate))
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(PlaylistTable::Playlist)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlaylistTable {
    Playlist,
}
