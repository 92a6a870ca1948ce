pub mod create_comment_table;
pub mod create_playlist_table;
pub mod create_playlist_video_table;
pub mod create_user_profile_table;

use async_trait::async_trait;
pub use sea_orm_migration::*;

pub struct Migrator;

#[async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(create_playlist_table::Migration),
            Box::new(create_playlist_video_table::Migration),
            Box::new(create_comment_table::Migration),
            Box::new(create_user_profile_table::Migration),
        ]
    }
}
