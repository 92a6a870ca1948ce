use async_trait::async_trait;
use sea_orm_migration::{prelude::*, schema::string};

use crate::data::models::user_profile::Column;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserProfileTable::UserProfile)
                    .col(string(Column::Uid).primary_key())
                    .col(string(Column::UserId))
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(UserProfileTable::UserProfile)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum UserProfileTable {
    UserProfile,
}
